use std::io;
use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("io error")]
    Io(#[from] io::Error),
    #[error("malformed inspection output")]
    Parse(#[source] serde_json::Error),
    #[error("unexpected inspection output: {}", reason)]
    Structure {
        reason: String,
        source: Option<serde_json::Error>,
    },
    #[error("container {} has no {}", container, field)]
    MissingField {
        container: String,
        field: &'static str,
    },
    #[error("container {} has an invalid IPv4Address: {:?}", container, address)]
    InvalidAddress { container: String, address: String },
}

impl Error {
    pub(crate) fn structure(reason: impl Into<String>) -> Self {
        Error::Structure {
            reason: reason.into(),
            source: None,
        }
    }
}
