use std::{path::PathBuf, time::Duration};
use structopt::StructOpt;

pub mod connection;

pub use connection::{Connection, SharedConnection};
pub use klm_common::{Color, KlmError, Mode, ResultStatus};

#[derive(Clone, Debug, StructOpt)]
pub struct Opt {
    /// Path of the klmd socket.
    #[structopt(
        short,
        long,
        env = "KLMD_SOCKET",
        default_value = "/var/run/klmd.sock",
        parse(from_os_str)
    )]
    pub socket: PathBuf,

    /// Give up on klmd after this many milliseconds.
    /// Without it (or with 0) the client waits for as long as the daemon needs.
    #[structopt(short, long, env = "KLMD_TIMEOUT_MS")]
    pub timeout_ms: Option<u64>,
}

impl Opt {
    pub fn connection_config(&self) -> ConnectionConfig {
        ConnectionConfig {
            socket_path: self.socket.clone(),
            timeout: self
                .timeout_ms
                .filter(|&ms| ms > 0)
                .map(Duration::from_millis),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub socket_path: PathBuf,
    /// Applied to both reads and writes on the socket, zero means none.
    pub timeout: Option<Duration>,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            socket_path: PathBuf::from(klm_common::DEFAULT_SOCKET_PATH),
            timeout: None,
        }
    }
}
