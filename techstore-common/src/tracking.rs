//! Event tracking
//!
//! Interactions become [`TrackedEvent`]s written to an [`EventSink`]. The
//! default sink is the log; nothing is sent over the network.

use crate::catalog::Product;
use std::fmt;
use tracing::info;

/// A user interaction worth recording
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackedEvent {
    pub product_id: u32,
    pub product_name: String,
}

impl TrackedEvent {
    pub fn for_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            product_name: product.name.clone(),
        }
    }
}

impl fmt::Display for TrackedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Event tracked: {}", self.product_name)
    }
}

/// Destination for tracked events. Recording is synchronous and infallible.
pub trait EventSink {
    fn record(&self, event: &TrackedEvent);
}

/// Writes each event as one `info` line
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn record(&self, event: &TrackedEvent) {
        info!(
            product_id = event.product_id,
            product_name = %event.product_name,
            "{event}"
        );
    }
}

/// Keeps events in memory. Clones share the same buffer.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    events: std::rc::Rc<std::cell::RefCell<Vec<TrackedEvent>>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TrackedEvent> {
        self.events.borrow().clone()
    }

    /// Display lines, as `LogSink` would have written them
    pub fn lines(&self) -> Vec<String> {
        self.events.borrow().iter().map(|e| e.to_string()).collect()
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl EventSink for MemorySink {
    fn record(&self, event: &TrackedEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    fn tracing_init() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_line_number(true)
            .with_target(false)
            .with_file(true)
            .try_init();
    }

    #[test]
    fn test_event_display() {
        let laptop = catalog().into_iter().find(|p| p.name == "Laptop Pro");
        let event = TrackedEvent::for_product(&laptop.unwrap());
        assert_eq!(event.product_id, 2);
        assert_eq!(event.to_string(), "Event tracked: Laptop Pro");
    }

    #[test]
    fn test_memory_sink_records_once_per_call() {
        let sink = MemorySink::new();
        let observer = sink.clone();
        assert!(observer.events().is_empty());

        let product = Product::new(2, "Laptop Pro", 1299);
        sink.record(&TrackedEvent::for_product(&product));

        assert_eq!(observer.lines(), vec!["Event tracked: Laptop Pro"]);
    }

    /// Collects formatted log output in memory
    #[derive(Clone, Default)]
    struct CapturedLog(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLog {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[test]
    fn test_log_sink_writes_event_line() {
        tracing_init();
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let product = Product::new(3, "Tablet Air", 499);
        tracing::subscriber::with_default(subscriber, || {
            LogSink.record(&TrackedEvent::for_product(&product));
        });

        let output = log.contents();
        assert_eq!(output.matches("Event tracked: Tablet Air").count(), 1, "{output}");
        assert!(output.contains("INFO"), "{output}");
        assert!(output.contains("product_id=3"), "{output}");
    }
}
