#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// The bytes of the demo file could not be obtained
    #[error("Reading demo: {0}")]
    Read(String),
    /// The parser rejected the demo
    #[error("Parsing demo: {0}")]
    Parse(String),
}

impl LoadError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Read(_) => "read",
            Self::Parse(_) => "parse",
        }
    }
}
