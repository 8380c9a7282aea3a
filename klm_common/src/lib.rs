pub use int_enum::IntEnum;

pub mod commands;
pub mod errors;
pub mod types;

pub use commands::{Command, Opcode, WireCommand};
pub use errors::{KlmError, Result};
pub use types::{ByteValue, Color, Mode, ResultStatus};

/// Where klmd listens for requests.
pub const DEFAULT_SOCKET_PATH: &str = "/var/run/klmd.sock";

/// A frame is prefixed by a single length byte, so this is the most
/// that can be staged before a commit.
pub const MAX_FRAME_SIZE: usize = u8::MAX as usize;
