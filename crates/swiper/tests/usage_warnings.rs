#![forbid(unsafe_code)]
#![cfg(feature = "tracing")]

//! Usage-warning events emitted through the `tracing` feature.
//!
//! Run:
//!   cargo test -p swiper --features tracing --test usage_warnings

use std::fmt::Write as _;
use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

use swiper::{PaneElement, valid_pane_count};

/// A tracing Layer that captures warn-level event messages.
#[derive(Default)]
struct WarnCapture {
    messages: Arc<Mutex<Vec<String>>>,
}

impl<S: tracing::Subscriber> Layer<S> for WarnCapture {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() != Level::WARN {
            return;
        }
        let mut message = String::new();
        event.record(&mut FieldCollector(&mut message));
        self.messages.lock().unwrap().push(message);
    }
}

/// Flattens every field of an event into one searchable string.
struct FieldCollector<'a>(&'a mut String);

impl tracing::field::Visit for FieldCollector<'_> {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let _ = write!(self.0, "{}={value:?} ", field.name());
    }
}

enum Child {
    Pane,
    Divider,
}

impl PaneElement for Child {
    fn is_pane(&self) -> bool {
        matches!(self, Child::Pane)
    }

    fn kind(&self) -> &str {
        match self {
            Child::Pane => "pane",
            Child::Divider => "divider",
        }
    }
}

#[test]
fn excluded_children_and_empty_sets_warn() {
    let capture = WarnCapture::default();
    let messages = Arc::clone(&capture.messages);
    let subscriber = tracing_subscriber::registry().with(capture);

    tracing::subscriber::with_default(subscriber, || {
        let counted = valid_pane_count(&[Child::Pane, Child::Divider, Child::Pane]);
        assert_eq!(counted, 2);
        assert_eq!(valid_pane_count::<Child>(&[]), 0);
    });

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 2, "one exclusion warning, one empty-set warning");
    assert!(messages[0].contains("divider"), "got: {}", messages[0]);
    assert!(messages[1].contains("at least one pane"), "got: {}", messages[1]);
}

#[test]
fn valid_sets_are_silent() {
    let capture = WarnCapture::default();
    let messages = Arc::clone(&capture.messages);
    let subscriber = tracing_subscriber::registry().with(capture);

    tracing::subscriber::with_default(subscriber, || {
        assert_eq!(valid_pane_count(&[Child::Pane, Child::Pane]), 2);
    });

    assert!(messages.lock().unwrap().is_empty());
}
