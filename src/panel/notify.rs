//! User-visible notifications

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}

/// Print a notification to stderr, with a colored level tag when enabled.
pub fn print_notification(notification: &Notification, use_color: bool) -> io::Result<()> {
    let choice = if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);

    let (tag, color) = match notification.level {
        Level::Info => ("info", Color::Green),
        Level::Error => ("error", Color::Red),
    };

    stderr.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(stderr, "{}", tag)?;
    stderr.reset()?;
    writeln!(stderr, ": {}", notification.message)?;
    Ok(())
}
