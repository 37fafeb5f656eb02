//! Student notification sink
//!
//! Delivery is fire-and-forget: the catalog hands each message over and
//! never observes the outcome.

use std::fmt::Debug;

/// Delivers a message to one student
pub trait Notifier: Send + Sync + Debug {
    /// Deliver `message` to `student`
    fn notify(&self, student: &str, message: &str);
}

/// Drops every message
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _student: &str, _message: &str) {}
}

/// Emits one `tracing` event per delivery
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, student: &str, message: &str) {
        tracing::info!(target: "edu_catalog::notify", student, message, "notification sent");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::io;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn log_notifier_emits_one_event_per_delivery() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            LogNotifier.notify("ann", "lecture started");
            LogNotifier.notify("bob", "lecture started");
        });

        let output = String::from_utf8(captured.0.lock().clone()).unwrap();
        assert_eq!(output.matches("notification sent").count(), 2);
        assert!(output.contains("ann"));
        assert!(output.contains("bob"));
        assert!(output.contains("edu_catalog::notify"));
    }

    #[test]
    fn noop_notifier_accepts_anything() {
        let notifier: Arc<dyn Notifier> = Arc::new(NoopNotifier);
        notifier.notify("ann", "");
    }
}
