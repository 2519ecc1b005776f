//! Progress logging for the pipeline.
//!
//! Thin helpers over the `log` facade. Everything goes to stderr through
//! whatever logger the binary installs, so stdout only ever carries the
//! rendered output.

/// Log level for progress messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
}

/// A single log entry
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Log level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Indentation level (for nested messages)
    pub indent: u8,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into(), indent: 0 }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Success, message: message.into(), indent: 0 }
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// Message with level marker and indentation applied.
    pub fn render(&self) -> String {
        let prefix = match self.level {
            LogLevel::Info => "",
            LogLevel::Success => "✓ ",
        };
        let indent = "   ".repeat(self.indent as usize);
        format!("{}{}{}", indent, prefix, self.message)
    }

    /// Send the entry to the `log` facade.
    pub fn emit(&self) {
        let text = self.render();
        log::info!("{}", text);
    }
}

/// Convenient logging functions
pub fn log_info(msg: impl Into<String>) {
    LogEntry::info(msg).emit();
}

pub fn log_success(msg: impl Into<String>) {
    LogEntry::success(msg).emit();
}

pub fn log_info_indent(msg: impl Into<String>, indent: u8) {
    LogEntry::info(msg).with_indent(indent).emit();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prefixes() {
        assert_eq!(LogEntry::info("reading").render(), "reading");
        assert_eq!(LogEntry::success("done").render(), "✓ done");
    }

    #[test]
    fn test_render_indent() {
        let entry = LogEntry::info("[ 1] Engine").with_indent(2);
        assert_eq!(entry.render(), "      [ 1] Engine");
    }

    #[test]
    fn test_emit_without_logger() {
        // No logger installed in unit tests; emitting must be a no-op.
        log_success("ok");
        log_info_indent("still ok", 1);
    }
}
