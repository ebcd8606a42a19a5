use thiserror::Error;

pub type WpResult<T> = Result<T, WpError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WpError {
    #[error("Vertex {vertex} is not in the graph")]
    UnknownVertex { vertex: String },

    #[error("Malformed graph: {what}")]
    MalformedGraph { what: String },

    #[error("Self loop on vertex {vertex}")]
    SelfLoop { vertex: String },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Vertex {vertex} has no color in the assignment")]
    Uncolored { vertex: String },
}

impl WpError {
    /// Render a vertex identity for an error message.
    pub fn vertex_label<V: core::fmt::Debug>(vertex: &V) -> String {
        format!("{:?}", vertex)
    }
}
