/// Result type for conio
pub type ConioResult<T> = std::result::Result<T, Error>;

/// Everything the terminal can do wrong
#[derive(Debug)]
pub enum Error {
    /// The input descriptor is not attached to a terminal
    NotATty,
    /// Invalid unicode codepoint
    BadUnicode(u32),
    /// Error came from [std::io]
    IoFailure(std::io::Error),
    /// End of input
    EndOfInput,
}

impl std::error::Error for Error {}
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NotATty => write!(f, "input is not a terminal"),
            Error::BadUnicode(u) => write!(f, "\\u{{{u:x}}} is not a valid unicode codepoint"),
            Error::IoFailure(s) => write!(f, "{s}"),
            Error::EndOfInput => write!(f, "End of input"),
        }
    }
}
impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::IoFailure(value)
    }
}
