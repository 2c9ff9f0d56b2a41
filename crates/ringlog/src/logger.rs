//! Logger trait and call-site capturing macros

use ringlog_core::{Message, MessageKind, Source};

/// Anything that accepts log messages
pub trait Logger: Send + Sync {
    /// Log `message`. With `sync` the call returns only after every
    /// destination has received the entry.
    fn log(&self, message: Message, source: Option<Source>, sync: bool);

    /// Log without waiting for delivery
    fn log_async(&self, message: Message, source: Option<Source>) {
        self.log(message, source, false);
    }

    /// Log plain text of the given kind
    fn log_text(&self, kind: MessageKind, text: &str, source: Option<Source>, sync: bool) {
        self.log(Message::new(kind, text), source, sync);
    }

    /// Log the description of an error value as an `Error` entry
    fn log_error(&self, error: &dyn std::error::Error, source: Option<Source>, sync: bool) {
        self.log(Message::new(MessageKind::Error, error.to_string()), source, sync);
    }
}

impl<T: Logger + ?Sized> Logger for std::sync::Arc<T> {
    fn log(&self, message: Message, source: Option<Source>, sync: bool) {
        (**self).log(message, source, sync)
    }
}

impl<T: Logger + ?Sized> Logger for &T {
    fn log(&self, message: Message, source: Option<Source>, sync: bool) {
        (**self).log(message, source, sync)
    }
}

/// Source location of the macro call site
#[macro_export]
macro_rules! source {
    () => {
        $crate::Source::new(file!(), module_path!(), line!())
    };
}

/// Log through `$logger` with an explicit kind and sync flag
///
/// ```ignore
/// ringlog::log_at!(logger, MessageKind::Info, true, "flushed {} entries", n);
/// ```
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $kind:expr, $sync:expr, $($arg:tt)+) => {
        $crate::Logger::log(
            &$logger,
            $crate::Message::new($kind, format!($($arg)+)),
            Some($crate::source!()),
            $sync,
        )
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::MessageKind::Debug, false, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::MessageKind::Error, false, $($arg)+)
    };
}

#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::MessageKind::Fatal, false, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::MessageKind::Info, false, $($arg)+)
    };
}

#[macro_export]
macro_rules! raw {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::MessageKind::Raw, false, $($arg)+)
    };
}

#[macro_export]
macro_rules! verbose {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::MessageKind::Verbose, false, $($arg)+)
    };
}

#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::MessageKind::Warning, false, $($arg)+)
    };
}
