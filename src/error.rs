use thiserror::Error;

/// Failures of a generation round trip. The display text is what the user sees.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("No API key configured. Set GEMINI_API_KEY (or API_KEY).")]
    MissingApiKey,
    #[error("We could not get a response from the service.")]
    NoResponse,
    #[error("The request was blocked by the safety filter ({reason}). Try rephrasing the prompt.")]
    Blocked { reason: String },
    #[error("No image data was found in the response.")]
    NoImageData,
    #[error("Something went wrong while contacting the server. Check your internet connection.")]
    Transport(String),
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        GenerationError::Transport(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Failed to open image file: {path}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid data URI")]
    InvalidDataUri,
    #[error("Invalid base64 image data: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
