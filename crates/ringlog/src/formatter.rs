//! Text formatting of log entries

use ringlog_core::{LogEntry, MessageKind};
use std::path::Path;

/// Turns an entry into the single line a formatted output persists
pub trait LogEntryFormatter: Send + Sync {
    fn format(&self, entry: &LogEntry) -> String;

    /// `"<file name>.<function>:<line>"` when the entry carries a source
    fn format_source(&self, entry: &LogEntry) -> Option<String> {
        entry.source.as_ref().map(|source| {
            let file = Path::new(&source.file)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| source.file.clone());
            format!("{}.{}:{}", file, source.function, source.line)
        })
    }
}

/// Label function for message kinds
pub type KindLabels = fn(MessageKind) -> &'static str;

/// Layout settings of [`StandardLogEntryFormatter`]
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// chrono `strftime` pattern
    pub date_format: String,
    pub kind_labels: KindLabels,
    pub separator: String,
    pub include_source: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            date_format: "%d/%m/%Y %H:%M:%S%.3f".to_string(),
            kind_labels: text_labels,
            separator: " | ".to_string(),
            include_source: false,
        }
    }
}

impl FormatterConfig {
    /// Layout for the file ring
    pub fn file() -> Self {
        Self::default()
    }

    /// Compact layout with symbol labels for terminals
    pub fn console() -> Self {
        Self {
            date_format: "%H:%M:%S%.3f".to_string(),
            kind_labels: symbol_labels,
            ..Self::default()
        }
    }

    pub fn with_source(mut self, include_source: bool) -> Self {
        self.include_source = include_source;
        self
    }
}

fn text_labels(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Debug => "Debug",
        MessageKind::Error => "Error",
        MessageKind::Fatal => "Fatal",
        MessageKind::Info => "Info",
        MessageKind::Raw => "-",
        MessageKind::Verbose => "Verbose",
        MessageKind::Warning => "Warning",
    }
}

fn symbol_labels(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Debug => "◼️",
        MessageKind::Error => "❌",
        MessageKind::Fatal => "💀",
        MessageKind::Info => "🔷",
        MessageKind::Raw => "-",
        MessageKind::Verbose => "◻️",
        MessageKind::Warning => "⚠️",
    }
}

/// `date | kind | [source | ] text`, or the bare text for raw entries
#[derive(Debug, Clone, Default)]
pub struct StandardLogEntryFormatter {
    config: FormatterConfig,
}

impl StandardLogEntryFormatter {
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }
}

impl LogEntryFormatter for StandardLogEntryFormatter {
    fn format(&self, entry: &LogEntry) -> String {
        if entry.kind() == MessageKind::Raw {
            return entry.message.text.clone();
        }

        let config = &self.config;
        let mut line = entry.date.format(&config.date_format).to_string();
        line.push_str(&config.separator);
        line.push_str((config.kind_labels)(entry.kind()));
        line.push_str(&config.separator);

        if config.include_source {
            if let Some(source) = self.format_source(entry) {
                line.push_str(&source);
                line.push_str(&config.separator);
            }
        }

        line.push_str(&entry.message.text);
        line
    }
}
