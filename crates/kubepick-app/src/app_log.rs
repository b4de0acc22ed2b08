use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::fmt::MakeWriter;

const MAX_LOG_LINES: usize = 500;

static LOG_BUFFER: OnceLock<Arc<Mutex<VecDeque<String>>>> = OnceLock::new();

fn buffer() -> Arc<Mutex<VecDeque<String>>> {
    LOG_BUFFER.get_or_init(|| Arc::new(Mutex::new(VecDeque::with_capacity(MAX_LOG_LINES)))).clone()
}

fn commit_line(line: &str) {
    if line.is_empty() {
        return;
    }
    let buf = buffer();
    let Ok(mut guard) = buf.lock() else { return };
    guard.push_back(line.to_string());
    while guard.len() > MAX_LOG_LINES {
        let _ = guard.pop_front();
    }
}

/// Drains every buffered line.
pub fn take_lines() -> Vec<String> {
    let buf = buffer();
    let Ok(mut guard) = buf.lock() else { return Vec::new() };
    guard.drain(..).collect()
}

/// Writes buffered log lines to stderr. Call only once the terminal is back
/// in cooked mode, otherwise the lines would tear through the picker.
pub fn flush_to_stderr() {
    let lines = take_lines();
    if lines.is_empty() {
        return;
    }
    let mut stderr = io::stderr().lock();
    for line in lines {
        let _ = writeln!(stderr, "{line}");
    }
}

#[derive(Clone, Default)]
pub struct AppLogMakeWriter;

impl<'a> MakeWriter<'a> for AppLogMakeWriter {
    type Writer = AppLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        AppLogWriter { line_buf: String::new() }
    }
}

/// Buffers bytes until a complete newline-terminated line is received, so a
/// single event split across several `write()` calls lands as one line.
pub struct AppLogWriter {
    line_buf: String,
}

impl Write for AppLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        self.line_buf.push_str(&text);

        while let Some(pos) = self.line_buf.find('\n') {
            let line = self.line_buf.drain(..=pos).collect::<String>();
            commit_line(line.trim_end_matches('\n'));
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.line_buf.is_empty() {
            let line = std::mem::take(&mut self.line_buf);
            commit_line(line.trim_end_matches('\n'));
        }
        Ok(())
    }
}

impl Drop for AppLogWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
