use std::fmt;

#[derive(Debug)]
pub enum PlanError {
    InvalidParameter(String),
    InvalidLayout(String),
    SerializationError(String),
    DeserializationError(String),
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlanError::InvalidParameter(msg) => {
                write!(f, "Invalid parameter: {}", msg)
            }
            PlanError::InvalidLayout(msg) => {
                write!(f, "Invalid field layout: {}", msg)
            }
            PlanError::SerializationError(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            PlanError::DeserializationError(msg) => {
                write!(f, "Deserialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for PlanError {}

impl From<serde_json::Error> for PlanError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            PlanError::DeserializationError(err.to_string())
        } else {
            PlanError::SerializationError(err.to_string())
        }
    }
}

impl From<serde_yaml::Error> for PlanError {
    fn from(err: serde_yaml::Error) -> Self {
        PlanError::DeserializationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
