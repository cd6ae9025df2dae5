use thiserror::Error;

/// Conversion and validation failures raised while turning stored cells or
/// draft input into typed records.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecordError {
    #[error("invalid integer in '{field}': {value:?}")]
    InvalidInteger { field: &'static str, value: String },

    #[error("invalid number in '{field}': {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("invalid boolean in '{field}': {value:?}")]
    InvalidBool { field: &'static str, value: String },

    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("sheet is missing the '{0}' marker")]
    MissingMarker(&'static str),

    #[error("worker name must not be empty")]
    EmptyWorkerName,

    #[error("worker '{0}' already exists")]
    DuplicateWorker(String),

    #[error("worker '{0}' is not on this day's sheet")]
    UnknownWorker(String),

    #[error("{worker} has {count} tasks, at most {max} allowed")]
    TooManyTasks {
        worker: String,
        count: usize,
        max: usize,
    },
}
