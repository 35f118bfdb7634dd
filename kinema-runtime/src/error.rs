use std::{error, fmt, io};

#[derive(Debug)]
pub enum Error {
    /// Kinematic failure, such as an unreachable target.
    Kinematic(kinema_core::Error),
    /// Invalid configuration or parameters.
    Config(String),
    Io(io::Error),
    Csv(csv::Error),
    /// Program file could not be parsed.
    Program(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Kinematic(e) => write!(f, "{}", e),
            Error::Config(message) => write!(f, "invalid configuration: {}", message),
            Error::Io(e) => write!(f, "{}", e),
            Error::Csv(e) => write!(f, "csv: {}", e),
            Error::Program(e) => write!(f, "program: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Kinematic(e) => Some(e),
            Error::Config(_) => None,
            Error::Io(e) => Some(e),
            Error::Csv(e) => Some(e),
            Error::Program(e) => Some(e),
        }
    }
}

impl From<kinema_core::Error> for Error {
    fn from(e: kinema_core::Error) -> Self {
        Error::Kinematic(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::Csv(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Program(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

pub type Result<T = ()> = std::result::Result<T, Error>;
