use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CityError {
    #[error("Cannot parse config: {0}")]
    ConfigParsingError(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Cannot parse input: {0}")]
    ParseError(String),
    #[error("Input contains no data rows")]
    EmptyInput,
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<std::io::Error> for CityError {
    fn from(err: std::io::Error) -> Self {
        CityError::IoError(err.to_string())
    }
}
