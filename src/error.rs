use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("OpenAI error: {0}")]
    OpenAi(#[from] async_openai::error::OpenAIError),
}

/// Rejection reasons for an inbound question, checked in declaration order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("class level '{0}' is not supported")]
    UnsupportedClass(String),

    #[error("subject '{0}' is not supported")]
    UnsupportedSubject(String),

    #[error("chapter '{chapter}' is not part of {subject}")]
    UnsupportedChapter { subject: String, chapter: String },

    #[error("question cannot be empty")]
    EmptyQuestion,

    #[error("field '{0}' is required")]
    MissingField(&'static str),
}

impl ValidationError {
    /// Short, stable reason string returned to HTTP clients.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::UnsupportedClass(_) => "unsupported class",
            Self::UnsupportedSubject(_) => "unsupported subject",
            Self::UnsupportedChapter { .. } => "unsupported chapter",
            Self::EmptyQuestion => "empty question",
            Self::MissingField(_) => "missing field",
        }
    }
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    pub fn llm(msg: impl Into<String>) -> Self {
        Self::Llm(msg.into())
    }

    /// True when the caller sent a request the syllabus does not allow.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Reason string for the error body of an HTTP response.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.reason(),
            Self::Generation(_) | Self::Llm(_) | Self::OpenAi(_) => "generation failed",
            Self::Config(_) => "configuration error",
            _ => "internal error",
        }
    }
}
