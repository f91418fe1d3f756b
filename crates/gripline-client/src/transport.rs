//! TCP transport with line framing.

use std::io::{ErrorKind, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream};
use std::thread;
use std::time::Duration;

use gripline_protocol::LineCodec;
use tracing::debug;

use crate::error::{ClientError, ClientResult};

/// Owns the TCP stream and the receive-side line buffer.
pub(crate) struct Transport {
    stream: Option<TcpStream>,
    codec: LineCodec,
    read_timeout: Duration,
}

impl Transport {
    pub(crate) fn new(read_timeout: Duration) -> Transport {
        Transport {
            stream: None,
            codec: LineCodec::new(),
            read_timeout,
        }
    }

    pub(crate) fn is_connected(&self) -> bool {
        self.stream.is_some()
    }

    /// Establish the TCP connection. A no-op when already connected.
    ///
    /// After connecting, waits for `settle` to give the controller time to
    /// accept the session before the first command arrives.
    pub(crate) fn connect(&mut self, addr: SocketAddr, settle: Duration) -> ClientResult<()> {
        if self.stream.is_some() {
            debug!("already connected to {}", addr);
            return Ok(());
        }

        let stream = TcpStream::connect_timeout(&addr, self.read_timeout)
            .map_err(|source| ClientError::ConnectFailed { addr, source })?;
        stream
            .set_read_timeout(Some(self.read_timeout))
            .map_err(|source| ClientError::ConnectFailed { addr, source })?;

        debug!("connected to gripper at {}", addr);
        self.stream = Some(stream);
        thread::sleep(settle);
        Ok(())
    }

    /// Tear down the connection. Safe to call when already disconnected.
    pub(crate) fn disconnect(&mut self) {
        if let Some(stream) = self.stream.take() {
            // Best effort; the peer may already be gone.
            let _ = stream.shutdown(Shutdown::Both);
            debug!("disconnected from gripper");
        }
        self.codec.clear();
    }

    /// Write one encoded command frame.
    pub(crate) fn send(&mut self, frame: &[u8]) -> ClientResult<()> {
        let stream = self.stream.as_mut().ok_or(ClientError::NotConnected)?;
        stream.write_all(frame)?;
        stream.flush()?;
        Ok(())
    }

    /// Block until one complete response line is available.
    ///
    /// Lines already buffered from a previous read are drained first. A
    /// read that returns zero bytes means the peer closed the connection.
    pub(crate) fn receive_line(&mut self) -> ClientResult<String> {
        if let Some(line) = self.codec.decode_line() {
            return Ok(line);
        }

        let stream = self.stream.as_mut().ok_or(ClientError::NotConnected)?;
        let mut chunk = [0u8; 1024];
        loop {
            match stream.read(&mut chunk) {
                Ok(0) => return Err(ClientError::ConnectionLost),
                Ok(n) => {
                    self.codec.push(&chunk[..n]);
                    if let Some(line) = self.codec.decode_line() {
                        return Ok(line);
                    }
                }
                Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                    return Err(ClientError::ResponseTimeout);
                }
                Err(e) => return Err(ClientError::Io(e)),
            }
        }
    }
}
