//! Terminal colour helpers for user-facing lines.

use owo_colors::OwoColorize;

/// Whether coloured output should be enabled on stdout.
fn stdout_supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Extension trait for colouring confirmations and error reports.
pub trait Paint {
    /// Colour as a success confirmation (green).
    fn success(&self) -> String;
    /// Colour as an error report (red).
    fn error(&self) -> String;
    /// Dim the text.
    fn dim(&self) -> String;
}

impl Paint for str {
    fn success(&self) -> String {
        if stdout_supports_color() {
            self.green().to_string()
        } else {
            self.to_string()
        }
    }

    fn error(&self) -> String {
        if stdout_supports_color() {
            self.red().to_string()
        } else {
            self.to_string()
        }
    }

    fn dim(&self) -> String {
        if stdout_supports_color() {
            self.dimmed().to_string()
        } else {
            self.to_string()
        }
    }
}
