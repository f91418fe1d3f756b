//! Incremental line framing over a byte stream.

use bytes::BytesMut;

/// Accumulates raw socket bytes and yields complete lines.
///
/// TCP gives no framing guarantees, so a single read may return a fragment
/// of a line or several lines at once. The codec buffers incoming bytes and
/// hands back one line per completed `\n`-terminated frame, with the
/// terminator and surrounding whitespace stripped.
///
/// An empty string is a valid yield: a frame that contains only whitespace
/// still consumes its terminator, and it is the caller's job to decide what
/// an empty response means.
#[derive(Debug, Default)]
pub struct LineCodec {
    buffer: BytesMut,
}

impl LineCodec {
    /// Create an empty codec.
    pub fn new() -> LineCodec {
        LineCodec {
            buffer: BytesMut::with_capacity(256),
        }
    }

    /// Append raw bytes received from the stream.
    pub fn push(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Take the next complete line out of the buffer, if one is available.
    ///
    /// Returns the line with its terminator and surrounding whitespace
    /// removed (which also handles `\r\n` endings). Bytes after the
    /// terminator stay buffered for subsequent calls.
    pub fn decode_line(&mut self) -> Option<String> {
        let end = self.buffer.iter().position(|&b| b == b'\n')?;
        let line_data = self.buffer.split_to(end + 1);
        Some(String::from_utf8_lossy(&line_data).trim().to_string())
    }

    /// Number of bytes currently buffered without a terminator.
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    /// Discard all buffered bytes.
    ///
    /// Called when the connection is torn down so a stale fragment cannot
    /// leak into the next session.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
