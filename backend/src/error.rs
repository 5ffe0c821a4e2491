use std::fmt;

#[derive(Debug)]
pub enum Error {
    InvalidBindAddr(String),
    InvalidOrigin(String),
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidBindAddr(addr) => write!(f, "WOF_BIND_ADDR is not a socket address: {}", addr),
            Error::InvalidOrigin(origin) => write!(f, "WOF_ALLOWED_ORIGINS has an invalid origin: {}", origin),
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
