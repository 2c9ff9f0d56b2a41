//! Core log entry types

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Severity / category of a log message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Debug,
    Error,
    Fatal,
    Info,
    /// Written verbatim, without date or kind decoration
    Raw,
    Verbose,
    Warning,
}

impl MessageKind {
    pub const ALL: [MessageKind; 7] = [
        MessageKind::Debug,
        MessageKind::Error,
        MessageKind::Fatal,
        MessageKind::Info,
        MessageKind::Raw,
        MessageKind::Verbose,
        MessageKind::Warning,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Debug => "debug",
            MessageKind::Error => "error",
            MessageKind::Fatal => "fatal",
            MessageKind::Info => "info",
            MessageKind::Raw => "raw",
            MessageKind::Verbose => "verbose",
            MessageKind::Warning => "warning",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(MessageKind::Debug),
            "error" => Ok(MessageKind::Error),
            "fatal" => Ok(MessageKind::Fatal),
            "info" => Ok(MessageKind::Info),
            "raw" => Ok(MessageKind::Raw),
            "verbose" => Ok(MessageKind::Verbose),
            "warning" | "warn" => Ok(MessageKind::Warning),
            _ => Err(Error::config(format!("Invalid message kind: {}", s))),
        }
    }
}

/// Message text together with its kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

impl Message {
    pub fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Call site that produced an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub file: String,
    pub function: String,
    pub line: u32,
}

impl Source {
    pub fn new(file: impl Into<String>, function: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            function: function.into(),
            line,
        }
    }
}

/// A timestamped message, immutable once the dispatcher built it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub date: DateTime<Local>,
    pub message: Message,
    pub source: Option<Source>,
}

impl LogEntry {
    pub fn new(date: DateTime<Local>, message: Message, source: Option<Source>) -> Self {
        Self {
            date,
            message,
            source,
        }
    }

    pub fn kind(&self) -> MessageKind {
        self.message.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_kind_parse() {
        assert_eq!("info".parse::<MessageKind>().unwrap(), MessageKind::Info);
        assert_eq!("WARN".parse::<MessageKind>().unwrap(), MessageKind::Warning);
        assert!("loud".parse::<MessageKind>().is_err());
    }

    #[test]
    fn test_message_kind_display_roundtrip() {
        for kind in MessageKind::ALL {
            assert_eq!(kind.to_string().parse::<MessageKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_entry_kind() {
        let entry = LogEntry::new(
            Local::now(),
            Message::new(MessageKind::Fatal, "boom"),
            Some(Source::new("src/main.rs", "main", 3)),
        );
        assert_eq!(entry.kind(), MessageKind::Fatal);
        assert_eq!(entry.source.unwrap().line, 3);
    }
}
