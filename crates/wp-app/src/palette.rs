//! Integer color -> display color.

use wp_core::Color;

/// Categorical 20-color palette (matplotlib "tab20").
pub const TAB20: [&str; 20] = [
    "#1f77b4", "#aec7e8", "#ff7f0e", "#ffbb78", "#2ca02c", "#98df8a", "#d62728", "#ff9896",
    "#9467bd", "#c5b0d5", "#8c564b", "#c49c94", "#e377c2", "#f7b6d2", "#7f7f7f", "#c7c7c7",
    "#bcbd22", "#dbdb8d", "#17becf", "#9edae5",
];

/// Hex display color for a color index. Wraps after 20 colors.
pub fn display_color(color: Color) -> &'static str {
    TAB20[color as usize % TAB20.len()]
}
