use crate::ConnectionConfig;
use byteorder::{ReadBytesExt, WriteBytesExt};
use klm_common::{
    commands::{AddColor, Command, SetBrightness, SetColor, SetMode, SetPower, Toggle},
    ByteValue, Color, KlmError, Mode, ResultStatus, MAX_FRAME_SIZE,
};
use log::{debug, info, warn};
use parking_lot::Mutex;
use std::{io::Write, os::unix::net::UnixStream, sync::Arc, time::Duration};

/// A connection behind an explicit lock, hold it for a whole
/// stage-then-commit sequence.
pub type SharedConnection = Arc<Mutex<Connection>>;

/// Stages commands for klmd and sends them as one frame on commit.
///
/// Staging only touches the local buffer, the socket is opened by
/// [`Connection::commit`] and closed before it returns.
#[derive(Debug, Default)]
pub struct Connection {
    config: ConnectionConfig,
    staged: Vec<u8>,
}

impl Connection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ConnectionConfig) -> Self {
        Self {
            config,
            staged: Vec::new(),
        }
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    pub fn into_shared(self) -> SharedConnection {
        Arc::new(Mutex::new(self))
    }

    /// Size of the payload staged so far, opcodes included.
    pub fn size(&self) -> usize {
        self.staged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    pub fn staged(&self) -> &[u8] {
        &self.staged
    }

    pub fn reset(&mut self) {
        self.staged.clear();
    }

    pub fn stage(&mut self, command: impl Into<Command>) -> &mut Self {
        let command = command.into();
        command.encode_into(&mut self.staged);
        debug!("Staged {:?}, {} bytes total", command, self.staged.len());
        self
    }

    pub fn set_color(&mut self, color: Color) -> &mut Self {
        self.stage(SetColor(color))
    }

    pub fn add_color(&mut self, color: Color) -> &mut Self {
        self.stage(AddColor(color))
    }

    pub fn set_brightness(
        &mut self,
        brightness: impl Into<i64>,
    ) -> klm_common::Result<&mut Self> {
        let brightness = ByteValue::new(brightness)?;
        Ok(self.stage(SetBrightness(brightness)))
    }

    pub fn set_mode(&mut self, mode: Mode) -> &mut Self {
        self.stage(SetMode(mode))
    }

    pub fn set_power(&mut self, on: bool) -> &mut Self {
        self.stage(SetPower(on))
    }

    pub fn toggle(&mut self) -> &mut Self {
        self.stage(Toggle)
    }

    /// Sends everything staged to klmd and waits for its status byte.
    ///
    /// The buffer is emptied once klmd answers with a known status, on any
    /// error it is left as is so the same commit can be retried.
    pub fn commit(&mut self) -> klm_common::Result<ResultStatus> {
        let path = &self.config.socket_path;
        if !path.exists() {
            return Err(KlmError::DaemonUnavailable { path: path.clone() });
        }
        if self.staged.is_empty() {
            return Err(KlmError::EmptyRequest);
        }
        if self.staged.len() > MAX_FRAME_SIZE {
            return Err(KlmError::RequestTooLarge {
                size: self.staged.len(),
            });
        }
        let size = self.staged.len() as u8;

        let status = ResultStatus::decode(self.send_frame(size)?)?;
        if status.is_ok() {
            info!("klmd accepted {} bytes", size);
        } else {
            warn!("klmd answered {:?} to a {} bytes request", status, size);
        }

        self.reset();
        Ok(status)
    }

    fn send_frame(&self, size: u8) -> klm_common::Result<u8> {
        // A zero timeout is rejected by the socket, treat it as no timeout
        let timeout = self
            .config
            .timeout
            .filter(|timeout| *timeout != Duration::from_secs(0));

        let mut socket = UnixStream::connect(&self.config.socket_path)?;
        socket.set_read_timeout(timeout)?;
        socket.set_write_timeout(timeout)?;
        debug!(
            "Sending {} bytes to {}",
            size,
            self.config.socket_path.display()
        );

        socket.write_u8(size)?;
        socket.write_all(&self.staged)?;
        socket.flush()?;

        Ok(socket.read_u8()?)
    }
}
