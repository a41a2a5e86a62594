use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum WheelMateError {
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("{0}")]
    Inventory(String),
}

impl From<WheelMateError> for String {
    fn from(err: WheelMateError) -> Self {
        err.to_string()
    }
}
