//! TCP server wrapping a device model.

use std::io::{self, ErrorKind, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use gripline_protocol::LineCodec;
use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::device::{DeviceModel, DeviceReply};

/// Poll interval for the stop flag in blocking reads and accepts.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// A simulated gripper served over a real TCP socket.
///
/// Binds an ephemeral local port and serves connections on a background
/// thread, one at a time. Dropping the handle stops the thread and joins
/// it.
pub struct SimGripper {
    addr: SocketAddr,
    model: Arc<Mutex<DeviceModel>>,
    connections: Arc<AtomicU64>,
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl SimGripper {
    /// Start serving `model` on an ephemeral local port.
    pub fn spawn(model: DeviceModel) -> io::Result<SimGripper> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let addr = listener.local_addr()?;
        let model = Arc::new(Mutex::new(model));
        let connections = Arc::new(AtomicU64::new(0));
        let stop = Arc::new(AtomicBool::new(false));

        let thread = {
            let model = Arc::clone(&model);
            let connections = Arc::clone(&connections);
            let stop = Arc::clone(&stop);
            thread::Builder::new()
                .name("sim-gripper".to_string())
                .spawn(move || serve(listener, model, connections, stop))?
        };

        debug!("simulated gripper listening on {}", addr);
        Ok(SimGripper {
            addr,
            model,
            connections,
            stop,
            thread: Some(thread),
        })
    }

    /// Address the simulator is listening on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Number of connections accepted so far.
    pub fn connections_accepted(&self) -> u64 {
        self.connections.load(Ordering::SeqCst)
    }

    /// Run a closure against the device model.
    ///
    /// Used by tests to inspect registers and command counters.
    pub fn with_model<R>(&self, f: impl FnOnce(&DeviceModel) -> R) -> R {
        f(&self.model.lock())
    }
}

impl Drop for SimGripper {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        // Wake a blocking accept so the thread notices the stop flag.
        let _ = TcpStream::connect(self.addr);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

fn serve(
    listener: TcpListener,
    model: Arc<Mutex<DeviceModel>>,
    connections: Arc<AtomicU64>,
    stop: Arc<AtomicBool>,
) {
    loop {
        let (stream, peer) = match listener.accept() {
            Ok(conn) => conn,
            Err(_) => return,
        };
        // The wake-up connection from Drop lands here and is not counted.
        if stop.load(Ordering::SeqCst) {
            return;
        }
        connections.fetch_add(1, Ordering::SeqCst);
        trace!("accepted connection from {}", peer);
        if handle_connection(stream, &model, &stop).is_err() {
            trace!("connection from {} ended with an error", peer);
        }
        if stop.load(Ordering::SeqCst) {
            return;
        }
    }
}

fn handle_connection(
    mut stream: TcpStream,
    model: &Arc<Mutex<DeviceModel>>,
    stop: &Arc<AtomicBool>,
) -> io::Result<()> {
    stream.set_read_timeout(Some(POLL_INTERVAL))?;
    let mut codec = LineCodec::new();
    let mut chunk = [0u8; 1024];

    loop {
        match stream.read(&mut chunk) {
            Ok(0) => return Ok(()),
            Ok(n) => codec.push(&chunk[..n]),
            Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                if stop.load(Ordering::SeqCst) {
                    return Ok(());
                }
                continue;
            }
            Err(e) => return Err(e),
        }

        while let Some(line) = codec.decode_line() {
            if line.is_empty() {
                continue;
            }
            match model.lock().handle_line(&line) {
                DeviceReply::None => {}
                DeviceReply::Line(reply) => {
                    stream.write_all(reply.as_bytes())?;
                    stream.write_all(b"\n")?;
                    stream.flush()?;
                }
                DeviceReply::Close => {
                    let _ = stream.shutdown(Shutdown::Both);
                    return Ok(());
                }
            }
        }
    }
}
