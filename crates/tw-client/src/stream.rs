//! Newline-delimited body reader for long-lived streaming responses.

use bytes::Bytes;
use futures::stream::{BoxStream, Stream, StreamExt};

use crate::error::{Error, ErrorKind, Result};
use crate::response::TextResponse;

/// What the server did with a stream request.
#[derive(Debug)]
pub enum StreamOpen {
    /// The connection is open; lines follow.
    Connected(LineStream),
    /// The server refused the connection. The body has been read in full.
    Rejected(TextResponse),
}

/// Lazily splits a streaming HTTP body into lines.
///
/// Lines are yielded as they complete, with the trailing `\n` (and `\r`,
/// if any) removed. Blank keep-alive lines are yielded too; skipping them
/// is up to the consumer. A final unterminated line is yielded when the
/// body ends.
pub struct LineStream {
    chunks: BoxStream<'static, reqwest::Result<Bytes>>,
    buffer: Vec<u8>,
    finished: bool,
}

impl std::fmt::Debug for LineStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineStream")
            .field("buffered", &self.buffer.len())
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl LineStream {
    pub(crate) fn new<S>(chunks: S) -> Self
    where
        S: Stream<Item = reqwest::Result<Bytes>> + Send + 'static,
    {
        Self {
            chunks: chunks.boxed(),
            buffer: Vec::new(),
            finished: false,
        }
    }

    /// Wait for the next complete line.
    ///
    /// Returns `None` once the connection has closed and every buffered
    /// byte has been handed out.
    pub async fn next_line(&mut self) -> Option<Result<String>> {
        loop {
            if let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
                let mut line: Vec<u8> = self.buffer.drain(..=pos).collect();
                line.pop();
                return Some(decode_line(line));
            }

            if self.finished {
                if self.buffer.is_empty() {
                    return None;
                }
                let rest = std::mem::take(&mut self.buffer);
                return Some(decode_line(rest));
            }

            match self.chunks.next().await {
                Some(Ok(chunk)) => self.buffer.extend_from_slice(&chunk),
                Some(Err(err)) => {
                    self.finished = true;
                    self.buffer.clear();
                    return Some(Err(Error::from(err)));
                }
                None => self.finished = true,
            }
        }
    }
}

fn decode_line(mut raw: Vec<u8>) -> Result<String> {
    if raw.last() == Some(&b'\r') {
        raw.pop();
    }
    String::from_utf8(raw).map_err(|err| {
        Error::with_source(ErrorKind::Stream("line is not valid UTF-8".to_string()), err)
    })
}
