use std::fmt;

#[derive(Debug)]
pub enum Error {
    FetchError(String),
    IoError(std::io::Error),
    DecodeError(String),
    RenderError(String),
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FetchError(msg) => write!(f, "Fetch Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::DecodeError(msg) => write!(f, "Decode Error: {}", msg),
            Error::RenderError(msg) => write!(f, "Render Error: {}", msg),
            Error::Other(msg) => write!(f, "Other Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Error {
        Error::Other(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Error {
        Error::Other(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn test_display_prefixes_variant() {
        let err = Error::FetchError("savedrecs.txt not found".to_string());
        assert_eq!(err.to_string(), "Fetch Error: savedrecs.txt not found");
    }

    #[test]
    fn test_io_error_conversion_keeps_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();

        assert!(matches!(err, Error::IoError(_)));
        assert!(err.source().is_some());
    }
}
