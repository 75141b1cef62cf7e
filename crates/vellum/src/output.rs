//! Status lines for the CLI, written to stderr.

use console::{Style, Term};

/// Applies a style to a message for terminal display.
fn paint(style: &Style, msg: &str) -> String {
    style.apply_to(msg).to_string()
}

/// Writes status lines, colorized where the terminal supports it.
pub(crate) struct Output {
    term: Term,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    fn line(&self, style: &Style, msg: &str) {
        let _ = self.term.write_line(&paint(style, msg));
    }

    /// Plain progress message.
    pub(crate) fn info(&self, msg: &str) {
        self.line(&Style::new(), msg);
    }

    /// Final success summary, in green.
    pub(crate) fn success(&self, msg: &str) {
        self.line(&Style::new().green(), msg);
    }

    /// Failure message, in red.
    pub(crate) fn error(&self, msg: &str) {
        self.line(&Style::new().red(), msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_preserves_message_text() {
        let styled = paint(&Style::new().red().force_styling(true), "build failed");
        assert!(styled.contains("build failed"));

        let plain = paint(&Style::new(), "3 pages");
        assert!(plain.contains("3 pages"));
    }
}
