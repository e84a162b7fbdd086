//! Progress and warning reporting.
//!
//! Conversion steps never print on their own. They hand every message to a
//! [`Reporter`] supplied by the caller, which decides how to present it.

use log::Level;

/// A single message produced while converting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
}

pub trait Reporter {
    fn report(&mut self, diagnostic: Diagnostic);

    fn info(&mut self, message: impl Into<String>) {
        self.report(Diagnostic {
            level: Level::Info,
            message: message.into(),
        });
    }

    fn warn(&mut self, message: impl Into<String>) {
        self.report(Diagnostic {
            level: Level::Warn,
            message: message.into(),
        });
    }

    fn error(&mut self, message: impl Into<String>) {
        self.report(Diagnostic {
            level: Level::Error,
            message: message.into(),
        });
    }
}

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        log::log!(diagnostic.level, "{}", diagnostic.message);
    }
}

/// Collects diagnostics in memory.
impl Reporter for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
