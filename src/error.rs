// error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("can't read {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("bad table in {}: {message}", path.display())]
    Schema { path: PathBuf, message: String },

    #[error("config's busted: {0}")]
    Config(String),

    #[error("column {name:?}: {message}")]
    Column { name: String, message: String },
}

pub type CompareResult<T> = Result<T, CompareError>;

impl CompareError {
    pub fn schema(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        CompareError::Schema {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn column(name: &str, message: impl Into<String>) -> Self {
        CompareError::Column {
            name: name.to_string(),
            message: message.into(),
        }
    }
}
