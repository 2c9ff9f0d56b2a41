//! Log dispatcher: stamps messages and fans them out to filtered destinations

use chrono::{DateTime, Local};
use parking_lot::Mutex;
use ringlog_core::{LogEntry, Message, MessageKind, Source};
use std::sync::Arc;
use tracing::{error, warn};

use crate::logger::Logger;
use crate::queue::LogQueue;
use crate::writer::LogDestination;

/// Source of entry timestamps
pub type Clock = Arc<dyn Fn() -> DateTime<Local> + Send + Sync>;

/// Predicate deciding whether a destination receives an entry
pub type Filter = Box<dyn Fn(&LogEntry) -> bool + Send>;

struct Route {
    name: &'static str,
    destination: Box<dyn LogDestination>,
    filter: Filter,
}

/// Delivers every logged message to its registered destinations
///
/// All work happens on the dispatcher's [`LogQueue`], so destinations see
/// entries one at a time and in call order. A failing destination is reported
/// and skipped; it never prevents delivery to the others.
pub struct LogDispatcher {
    queue: LogQueue,
    clock: Clock,
    routes: Arc<Mutex<Vec<Route>>>,
}

impl LogDispatcher {
    pub fn new(queue: LogQueue) -> Self {
        Self::with_clock(queue, Local::now)
    }

    pub fn with_clock<C>(queue: LogQueue, clock: C) -> Self
    where
        C: Fn() -> DateTime<Local> + Send + Sync + 'static,
    {
        Self {
            queue,
            clock: Arc::new(clock),
            routes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn queue(&self) -> &LogQueue {
        &self.queue
    }

    /// Register a destination receiving every entry
    pub fn add<D>(&self, destination: D)
    where
        D: LogDestination + 'static,
    {
        self.add_filtered(destination, |_| true);
    }

    /// Register a destination receiving only entries of the given kinds
    pub fn add_for_kinds<D>(&self, destination: D, kinds: &[MessageKind])
    where
        D: LogDestination + 'static,
    {
        let kinds = kinds.to_vec();
        self.add_filtered(destination, move |entry| kinds.contains(&entry.kind()));
    }

    /// Register a destination receiving entries accepted by `filter`
    ///
    /// Registration is queued like a log call, so it takes effect for every
    /// message logged after this returns.
    pub fn add_filtered<D, P>(&self, destination: D, filter: P)
    where
        D: LogDestination + 'static,
        P: Fn(&LogEntry) -> bool + Send + 'static,
    {
        let routes = self.routes.clone();
        let route = Route {
            name: std::any::type_name::<D>(),
            destination: Box::new(destination),
            filter: Box::new(filter),
        };

        if let Err(e) = self.queue.execute(move || routes.lock().push(route)) {
            error!("Failed to register log destination: {}", e);
        }
    }
}

impl Logger for LogDispatcher {
    fn log(&self, message: Message, source: Option<Source>, sync: bool) {
        let clock = self.clock.clone();
        let routes = self.routes.clone();

        let job = move || {
            let entry = LogEntry::new(clock(), message, source);
            deliver(&routes, &entry);
        };

        let result = if sync {
            self.queue.execute_sync(job)
        } else {
            self.queue.execute(job)
        };

        if let Err(e) = result {
            error!("Failed to queue log entry: {}", e);
        }
    }
}

fn deliver(routes: &Mutex<Vec<Route>>, entry: &LogEntry) {
    for route in routes.lock().iter_mut() {
        if !(route.filter)(entry) {
            continue;
        }
        if let Err(e) = route.destination.receive(entry) {
            warn!("Log destination {} failed: {}", route.name, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockDestination;
    use chrono::TimeZone;

    fn fixed_date() -> DateTime<Local> {
        Local.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap()
    }

    fn dispatcher() -> LogDispatcher {
        let queue = LogQueue::new("dispatcher-test").unwrap();
        LogDispatcher::with_clock(queue, fixed_date)
    }

    #[test]
    fn test_destination_receives_entry_from_macro() {
        let dispatcher = dispatcher();
        let destination = MockDestination::new();
        dispatcher.add(destination.clone());

        let line = line!() + 1;
        crate::debug!(dispatcher, "123");
        dispatcher.queue().wait().unwrap();

        let entries = destination.entries();
        assert_eq!(entries.len(), 1);

        let entry = &entries[0];
        assert_eq!(entry.date, fixed_date());
        assert_eq!(entry.message, Message::new(MessageKind::Debug, "123"));

        let source = entry.source.as_ref().unwrap();
        assert!(source.file.ends_with("dispatcher.rs"));
        assert_eq!(source.line, line);
    }

    #[test]
    fn test_destination_receives_explicit_source() {
        let dispatcher = dispatcher();
        let destination = MockDestination::new();
        dispatcher.add(destination.clone());

        let source = Source::new("file", "func", 42);
        dispatcher.log(Message::new(MessageKind::Debug, "123"), Some(source.clone()), true);

        let entries = destination.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].source, Some(source));
    }

    #[test]
    fn test_failing_destination_does_not_stop_dispatch() {
        let dispatcher = dispatcher();
        let flaky = MockDestination::failing_first(1);
        let healthy = MockDestination::new();
        dispatcher.add(flaky.clone());
        dispatcher.add(healthy.clone());

        crate::warning!(dispatcher, "999");
        crate::debug!(dispatcher, "123");
        dispatcher.queue().wait().unwrap();

        let texts: Vec<String> = flaky.entries().into_iter().map(|e| e.message.text).collect();
        assert_eq!(texts, vec!["123"]);
        assert_eq!(healthy.entries().len(), 2);
    }

    #[test]
    fn test_async_logging_preserves_order() {
        let dispatcher = LogDispatcher::new(LogQueue::new("order-test").unwrap());
        let destination = MockDestination::new();
        dispatcher.add(destination.clone());

        for i in 0..100 {
            crate::info!(dispatcher, "{}", i);
        }
        dispatcher.queue().wait().unwrap();

        let texts: Vec<String> = destination
            .entries()
            .into_iter()
            .map(|e| e.message.text)
            .collect();
        let expected: Vec<String> = (0..100).map(|i| i.to_string()).collect();
        assert_eq!(texts, expected);
    }

    #[test]
    fn test_sync_logging_delivers_before_return() {
        let dispatcher = dispatcher();
        let destination = MockDestination::new();
        dispatcher.add(destination.clone());

        crate::log_at!(dispatcher, MessageKind::Info, true, "now");
        assert_eq!(destination.entries().len(), 1);
    }

    #[test]
    fn test_kind_filter() {
        let dispatcher = dispatcher();
        let errors = MockDestination::new();
        let everything = MockDestination::new();
        dispatcher.add_for_kinds(errors.clone(), &[MessageKind::Error, MessageKind::Fatal]);
        dispatcher.add(everything.clone());

        crate::info!(dispatcher, "info");
        crate::error!(dispatcher, "error");
        crate::verbose!(dispatcher, "verbose");
        crate::fatal!(dispatcher, "fatal");
        dispatcher.queue().wait().unwrap();

        let kinds: Vec<MessageKind> = errors.entries().iter().map(|e| e.kind()).collect();
        assert_eq!(kinds, vec![MessageKind::Error, MessageKind::Fatal]);
        assert_eq!(everything.entries().len(), 4);
    }

    #[test]
    fn test_custom_filter() {
        let dispatcher = dispatcher();
        let destination = MockDestination::new();
        dispatcher.add_filtered(destination.clone(), |entry| entry.message.text.starts_with('!'));

        crate::info!(dispatcher, "quiet");
        crate::info!(dispatcher, "!loud");
        dispatcher.queue().wait().unwrap();

        let entries = destination.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message.text, "!loud");
    }
}
