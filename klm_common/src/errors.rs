use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, KlmError>;

#[derive(Debug, Error)]
pub enum KlmError {
    #[error("Value {value} is out of byte range (0-255) !")]
    OutOfRange { value: i64 },
    #[error("No socket found at {}, is klmd running ?", .path.display())]
    DaemonUnavailable { path: PathBuf },
    #[error("No commands staged !")]
    EmptyRequest,
    #[error("Request of {size} bytes is too big, try reducing the amount of commands")]
    RequestTooLarge { size: usize },
    #[error(transparent)]
    Transport(#[from] io::Error),
    #[error("Bad status code from klmd: {status}")]
    ProtocolViolation { status: u8 },
}
