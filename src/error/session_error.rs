#[derive(Debug)]
/// Represents failures of the console streams driving a session.
pub enum SessionError {
    /// Reading from or writing to the console failed.
    Io(std::io::Error),
    /// The input stream ended while the session was still waiting for a
    /// line.
    UnexpectedEof,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(source) => write!(f, "Error. Console read or write failed: {source}."),
            Self::UnexpectedEof => {
                write!(f, "Error. Input ended before the session was quit.")
            },
        }
    }
}

impl std::error::Error for SessionError {}

impl From<std::io::Error> for SessionError {
    fn from(source: std::io::Error) -> Self {
        Self::Io(source)
    }
}
