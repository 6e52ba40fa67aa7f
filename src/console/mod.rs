//! Console output for received log events.
//!
//! Rendering is kept separate from writing: `render` builds the lines for a
//! payload, and `Console` writes them out in one go so that concurrent
//! requests never interleave their lines.
pub mod render;
pub mod style;

use std::io::{self, Write};
use std::sync::Mutex;
use tracing::warn;

/// The sink that rendered lines are printed to.
pub struct Console {
    out: Mutex<Box<dyn Write + Send>>,
}

impl Console {
    /// Creates a console that writes to the given writer.
    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
        }
    }

    /// Creates a console backed by standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Writes all lines while holding the lock.
    pub fn print(&self, lines: &[String]) {
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        for line in lines {
            if let Err(e) = writeln!(out, "{}", line) {
                warn!("Failed to write to console: {}", e);
                return;
            }
        }
        if let Err(e) = out.flush() {
            warn!("Failed to flush console: {}", e);
        }
    }
}

/// In-memory capture of console output for tests.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct CapturedOutput(std::sync::Arc<Mutex<Vec<u8>>>);

#[cfg(test)]
impl CapturedOutput {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

#[cfg(test)]
impl Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
impl Console {
    pub fn captured() -> (Self, CapturedOutput) {
        let output = CapturedOutput::default();
        (Self::new(output.clone()), output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_writes_one_line_per_entry() {
        let (console, output) = Console::captured();
        console.print(&["first".to_string(), "second".to_string()]);
        console.print(&[]);
        assert_eq!(output.contents(), "first\nsecond\n");
    }

    struct FailingFlush(CapturedOutput);

    impl Write for FailingFlush {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_flush_failure_keeps_console_usable() {
        let output = CapturedOutput::default();
        let console = Console::new(FailingFlush(output.clone()));

        console.print(&["first".to_string()]);
        console.print(&["second".to_string()]);
        assert_eq!(output.contents(), "first\nsecond\n");
    }
}
