//! Transition logging: the machine and widget emit structured events under
//! the `swipeout.*` targets, and misconfiguration is reported at `warn`.

use std::sync::{Arc, Mutex};

use swipeout_core::{Delta, Duration, Instant, Measurement};
use swipeout_widgets::{ActionButton, SwipeoutConfig, Swipeout};
use tracing::Subscriber;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

#[derive(Debug, Clone, PartialEq)]
struct Captured {
    target: String,
    level: tracing::Level,
    message: String,
}

#[derive(Default)]
struct SwipeTraceCapture {
    events: Arc<Mutex<Vec<Captured>>>,
}

impl<S> Layer<S> for SwipeTraceCapture
where
    S: Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        if !meta.target().starts_with("swipeout") {
            return;
        }

        #[derive(Default)]
        struct MessageVisitor {
            message: String,
        }

        impl tracing::field::Visit for MessageVisitor {
            fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
                if field.name() == "message" {
                    self.message = format!("{value:?}");
                }
            }
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.events
            .lock()
            .expect("trace capture lock")
            .push(Captured {
                target: meta.target().to_owned(),
                level: *meta.level(),
                message: visitor.message,
            });
    }
}

fn capture() -> (Arc<Mutex<Vec<Captured>>>, tracing::subscriber::DefaultGuard) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(SwipeTraceCapture {
        events: Arc::clone(&events),
    });
    let guard = tracing::subscriber::set_default(subscriber);
    tracing::callsite::rebuild_interest_cache();
    (events, guard)
}

fn messages(events: &Arc<Mutex<Vec<Captured>>>, target: &str) -> Vec<String> {
    events
        .lock()
        .expect("trace capture lock")
        .iter()
        .filter(|c| c.target == target)
        .map(|c| c.message.clone())
        .collect()
}

#[test]
fn gesture_transitions_are_logged() {
    let (events, _guard) = capture();

    let config = SwipeoutConfig::builder()
        .right(vec![ActionButton::label("Delete")])
        .build()
        .unwrap();
    let mut row = Swipeout::new(config).with_measure(|| Some(Measurement::from_size(500.0, 60.0)));
    let t0 = Instant::now();
    row.on_grant(t0);
    row.on_move(Delta::horizontal(-120.0), t0 + Duration::from_millis(100));
    row.on_release(Delta::horizontal(-120.0), t0 + Duration::from_millis(400));
    row.close_at(t0 + Duration::from_millis(500));

    let machine = messages(&events, "swipeout.machine");
    assert_eq!(machine, vec!["drag granted", "release", "opened", "closed"]);

    let widget = messages(&events, "swipeout.widget");
    assert_eq!(widget, vec!["row opened", "row closed"]);
}

#[test]
fn cta_misconfiguration_warns() {
    let (events, _guard) = capture();

    let config = SwipeoutConfig::builder()
        .drag_to_cta(true)
        .on_cta(|| {})
        .right(vec![ActionButton::label("A"), ActionButton::label("B")])
        .build()
        .unwrap();
    assert!(!config.cta_enabled(swipeout_core::Side::Right));

    let warnings: Vec<Captured> = events
        .lock()
        .expect("trace capture lock")
        .iter()
        .filter(|c| c.level == tracing::Level::WARN)
        .cloned()
        .collect();
    assert_eq!(warnings.len(), 1, "warnings: {warnings:?}");
    assert_eq!(warnings[0].target, "swipeout.config");
}
