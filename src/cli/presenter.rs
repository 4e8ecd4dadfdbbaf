//! CLI presenter for output formatting

use std::io::{self, Write};
use std::sync::Mutex;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

/// Presenter for CLI output formatting.
///
/// Status goes to stderr so stdout carries only the note.
pub struct Presenter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    /// Start a spinner with message, replacing any running one
    pub fn start_spinner(&self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
        {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));

        if let Some(previous) = self.replace_spinner(Some(spinner)) {
            previous.finish_and_clear();
        }
    }

    /// Mark spinner as success and finish
    pub fn spinner_success(&self, message: &str) {
        if let Some(spinner) = self.replace_spinner(None) {
            spinner.finish_with_message(format!("{} {}", "✓".green(), message));
        }
    }

    /// Mark spinner as failed and finish
    pub fn spinner_fail(&self, message: &str) {
        if let Some(spinner) = self.replace_spinner(None) {
            spinner.finish_with_message(format!("{} {}", "✗".red(), message));
        }
    }

    fn replace_spinner(&self, next: Option<ProgressBar>) -> Option<ProgressBar> {
        match self.spinner.lock() {
            Ok(mut guard) => std::mem::replace(&mut *guard, next),
            Err(_) => None,
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout (the note itself)
    pub fn output(&self, text: &str) {
        if let Err(e) = write_line(io::stdout().lock(), text) {
            warn!(error = %e, "could not write to stdout");
        }
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        self.output(&format!("{}: {}", key.cyan(), value));
    }

    /// Format a character count with thousands separators
    pub fn format_chars(&self, count: usize) -> String {
        let digits = count.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        format!("{} chars", out)
    }
}

/// Write one line. A closed pipe (e.g. `| head`) is not an error.
fn write_line(mut out: impl Write, text: &str) -> io::Result<()> {
    match writeln!(out, "{}", text).and_then(|_| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("stdout closed");
            Ok(())
        }
        other => other,
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_chars_small() {
        let presenter = Presenter::new();
        assert_eq!(presenter.format_chars(0), "0 chars");
        assert_eq!(presenter.format_chars(999), "999 chars");
    }

    #[test]
    fn format_chars_thousands() {
        let presenter = Presenter::new();
        assert_eq!(presenter.format_chars(1_000), "1,000 chars");
        assert_eq!(presenter.format_chars(123_456), "123,456 chars");
        assert_eq!(presenter.format_chars(1_234_567), "1,234,567 chars");
    }

    #[test]
    fn spinner_lifecycle_without_terminal() {
        let presenter = Presenter::new();
        presenter.start_spinner("Fetching");
        presenter.start_spinner("Summarizing");
        presenter.spinner_success("Done");
        presenter.spinner_fail("no spinner running");
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_line_appends_newline() {
        let mut buf = Vec::new();
        write_line(&mut buf, "---\ntitle: x\n---").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "---\ntitle: x\n---\n");
    }

    #[test]
    fn write_line_tolerates_closed_pipe() {
        assert!(write_line(ClosedPipe, "note").is_ok());
    }
}
