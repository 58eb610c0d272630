use thiserror::Error;

pub type DiagramResult<T> = Result<T, DiagramError>;

#[derive(Debug, Error)]
pub enum DiagramError {
    #[error("invalid blend fraction `{name}`: {value} (must be finite and within [0, 1])")]
    InvalidBlendFraction { name: &'static str, value: f64 },

    #[error("invalid engine config: {0}")]
    InvalidConfig(String),

    #[error("renderer failure: {0}")]
    Renderer(String),
}
