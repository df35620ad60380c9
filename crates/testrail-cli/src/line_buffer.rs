//! Incremental line framing
//!
//! Accumulates raw chunks from a byte stream and yields complete
//! newline-terminated lines. A trailing partial line is retained and
//! prepended to the next chunk, so a frame split across reads is never
//! lost or parsed early.

#[derive(Debug, Default)]
pub struct LineBuffer {
    buf: String,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk and drain every complete line, without its
    /// terminator.
    pub fn push(&mut self, chunk: &str) -> Vec<String> {
        self.buf.push_str(chunk);

        let mut lines = Vec::new();
        while let Some(pos) = self.buf.find('\n') {
            let line: String = self.buf.drain(..=pos).collect();
            lines.push(line.trim_end_matches(['\n', '\r']).to_string());
        }
        lines
    }
}
