// Console Logger
//
// Writes `[LEVEL]`-prefixed lines to the sinks the entry point was given.
// Errors go to the error sink; everything else, warnings included, goes to
// the output sink alongside the final diagnostics.

use super::logger::{LogLevel, Logger};

pub struct ConsoleLogger<'a> {
    level: LogLevel,
    out: &'a dyn Fn(&str),
    err: &'a dyn Fn(&str),
}

impl<'a> ConsoleLogger<'a> {
    pub fn new(level: LogLevel, out: &'a dyn Fn(&str), err: &'a dyn Fn(&str)) -> Self {
        Self { level, out, err }
    }

    fn emit(&self, level: LogLevel, msg: &str) {
        if !self.is_enabled(level) {
            return;
        }
        let line = format!("[{}] {}\n", level.label(), msg);
        match level {
            LogLevel::Error => (self.err)(&line),
            LogLevel::Debug | LogLevel::Info | LogLevel::Warn => (self.out)(&line),
        }
    }
}

impl Logger for ConsoleLogger<'_> {
    fn level(&self) -> LogLevel {
        self.level
    }

    fn debug(&self, msg: &str) {
        self.emit(LogLevel::Debug, msg);
    }

    fn info(&self, msg: &str) {
        self.emit(LogLevel::Info, msg);
    }

    fn warn(&self, msg: &str) {
        self.emit(LogLevel::Warn, msg);
    }

    fn error(&self, msg: &str) {
        self.emit(LogLevel::Error, msg);
    }
}
