//! Context-provided services: event tracker and storefront config

use dioxus::prelude::*;
use std::fmt;
use std::rc::Rc;
use techstore_common::{EventSink, LogSink, StorefrontConfig, TrackedEvent};

/// Cloneable handle to the page's [`EventSink`]
#[derive(Clone)]
pub struct Tracker(Rc<dyn EventSink>);

impl Tracker {
    pub fn new(sink: impl EventSink + 'static) -> Self {
        Self(Rc::new(sink))
    }

    /// Tracker that writes to the log
    pub fn log() -> Self {
        Self::new(LogSink)
    }

    pub fn record(&self, event: &TrackedEvent) {
        self.0.record(event);
    }
}

impl fmt::Debug for Tracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Tracker")
    }
}

/// Tracker from context; logs when none was provided
pub fn use_tracker() -> Tracker {
    use_hook(|| try_consume_context::<Tracker>().unwrap_or_else(Tracker::log))
}

/// Event handler that records into the context tracker.
///
/// This is what the storefront hands to its tracking buttons.
pub fn use_track_handler() -> EventHandler<TrackedEvent> {
    let tracker = use_tracker();
    use_callback(move |event: TrackedEvent| tracker.record(&event))
}

/// Storefront config from context; defaults when none was provided
pub fn use_storefront_config() -> StorefrontConfig {
    use_hook(|| try_consume_context::<StorefrontConfig>().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use techstore_common::{MemorySink, Product};

    #[test]
    fn test_record_forwards_to_sink() {
        let sink = MemorySink::new();
        let tracker = Tracker::new(sink.clone());
        tracker.record(&TrackedEvent::for_product(&Product::new(2, "Laptop Pro", 1299)));
        assert_eq!(sink.lines(), vec!["Event tracked: Laptop Pro"]);
    }
}
