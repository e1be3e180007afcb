use std::fmt::{Debug, Display};

pub enum ModelError {
    InvalidTaskDate(String, String),
    InvalidPeriod(String, String),
    InvalidDayOfMonth(u32),
    InvalidDayInterval(u16),
    InvalidWeekInterval(u16),
    InvalidFieldValue(String, String),
    InvalidPayload(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::InvalidTaskDate(input, _) => {
                write!(f, "invalid task date '{}'", input)
            }
            ModelError::InvalidPeriod(input, _) => {
                write!(f, "invalid period '{}'", input)
            }
            ModelError::InvalidDayOfMonth(day) => {
                write!(f, "invalid day of month {}, expected 1..=32", day)
            }
            ModelError::InvalidDayInterval(interval) => {
                write!(f, "invalid day interval {}, expected 1..=32767", interval)
            }
            ModelError::InvalidWeekInterval(interval) => {
                write!(f, "invalid week interval {}, expected 1..=52", interval)
            }
            ModelError::InvalidFieldValue(field, _) => {
                write!(f, "invalid value for {}", field)
            }
            ModelError::InvalidPayload(_) => {
                write!(f, "invalid definition payload")
            }
        }
    }
}

impl Debug for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::InvalidTaskDate(input, detail) => {
                write!(f, "invalid task date '{}': {}", input, detail)
            }
            ModelError::InvalidPeriod(input, detail) => {
                write!(f, "invalid period '{}': {}", input, detail)
            }
            ModelError::InvalidDayOfMonth(day) => {
                write!(f, "invalid day of month {}, expected 1..=32", day)
            }
            ModelError::InvalidDayInterval(interval) => {
                write!(f, "invalid day interval {}, expected 1..=32767", interval)
            }
            ModelError::InvalidWeekInterval(interval) => {
                write!(f, "invalid week interval {}, expected 1..=52", interval)
            }
            ModelError::InvalidFieldValue(field, detail) => {
                write!(f, "invalid value for {}: {}", field, detail)
            }
            ModelError::InvalidPayload(detail) => {
                write!(f, "invalid definition payload: {}", detail)
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
