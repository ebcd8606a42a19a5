use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use wp_app::{
    AppResult, ColoringRun, RenderFormat, build_graph, color_definition, coloring_title,
    load_graph_def, select_scenarios, summarize,
};

#[derive(Parser)]
#[command(name = "wp-cli")]
#[command(about = "Welsh-Powell graph coloring tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Dot,
}

impl From<Format> for RenderFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => RenderFormat::Text,
            Format::Dot => RenderFormat::Dot,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Color, verify, and render the built-in demo graphs
    Demo {
        /// Only run this scenario (small, cycle, star, mixed, random)
        #[arg(long)]
        scenario: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },
    /// Color a graph definition file
    Color {
        /// Path to the graph YAML/JSON file
        graph_path: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
        /// Write the rendering here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check that a graph definition file builds
    Validate {
        /// Path to the graph YAML/JSON file
        graph_path: PathBuf,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { scenario, format } => cmd_demo(scenario.as_deref(), format.into()),
        Commands::Color {
            graph_path,
            format,
            output,
        } => cmd_color(&graph_path, format.into(), output.as_deref()),
        Commands::Validate { graph_path } => cmd_validate(&graph_path),
    }
}

fn cmd_demo(only: Option<&str>, format: RenderFormat) -> AppResult<()> {
    for (number, scenario) in select_scenarios(only)? {
        let run = color_definition(&scenario.def)?;
        print!(
            "{}",
            format.render(&scenario.title(), &run.graph, &run.assignment)?
        );
        println!("Graph {} Vertex Coloring: {}", number, run.verification);
        println!();
        run.ensure_valid()?;
    }
    Ok(())
}

fn cmd_color(graph_path: &Path, format: RenderFormat, output: Option<&Path>) -> AppResult<()> {
    let def = load_graph_def(graph_path)?;
    let run = color_definition(&def)?;
    let title = coloring_title(&run.name);
    let rendered = format.render(&title, &run.graph, &run.assignment)?;

    match output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            println!("✓ Wrote {}", path.display());
        }
        None => print!("{}", rendered),
    }

    report(&run)
}

fn report(run: &ColoringRun) -> AppResult<()> {
    println!("{}", run.verification);
    run.ensure_valid()
}

fn cmd_validate(graph_path: &Path) -> AppResult<()> {
    println!("Validating graph: {}", graph_path.display());
    let def = load_graph_def(graph_path)?;
    let graph = build_graph(&def)?;
    let summary = summarize(&def.name, &graph);
    println!("✓ Graph is valid");
    println!(
        "  {} - {} vertices, {} edges, max degree {}",
        summary.name, summary.vertex_count, summary.edge_count, summary.max_degree
    );
    Ok(())
}
