use std::fmt::{Debug, Display};
use task_model::err::ModelError;

pub enum TaskServiceError {
    ConnectionError(String),
    ValidationError(String),
    NotFoundError(String),
    ServiceError(String, String),
}

impl Display for TaskServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskServiceError::ConnectionError(msg) => write!(f, "connection error: {}", msg),
            TaskServiceError::ValidationError(msg) => write!(f, "validation error: {}", msg),
            TaskServiceError::NotFoundError(what) => write!(f, "not found: {}", what),
            TaskServiceError::ServiceError(op, _) => {
                write!(f, "scheduler service failed during {}", op)
            }
        }
    }
}

impl Debug for TaskServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskServiceError::ConnectionError(msg) => write!(f, "connection error: {}", msg),
            TaskServiceError::ValidationError(msg) => write!(f, "validation error: {}", msg),
            TaskServiceError::NotFoundError(what) => write!(f, "not found: {}", what),
            TaskServiceError::ServiceError(op, detail) => {
                write!(f, "scheduler service failed during {}: {}", op, detail)
            }
        }
    }
}

impl std::error::Error for TaskServiceError {}

impl From<ModelError> for TaskServiceError {
    fn from(err: ModelError) -> Self {
        TaskServiceError::ValidationError(format!("{:?}", err))
    }
}

pub type Result<T> = std::result::Result<T, TaskServiceError>;
