use std::io;
use std::sync::{Arc, Mutex};

use json_raw::{Layout, Value};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(level: tracing::Level, f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    captured.contents()
}

#[test]
fn lenient_failures_are_traced() {
    let logs = capture(tracing::Level::TRACE, || {
        assert_eq!(Value::from_raw("not-a-number").as_int(0), 0);
        assert!(Value::from_raw("{}").as_array().is_empty());
    });

    assert!(logs.contains("lenient coercion fell back to zero value"), "{logs}");
    assert!(logs.contains("into=\"i64\""), "{logs}");
    assert!(logs.contains("into=\"array\""), "{logs}");
}

#[test]
fn successful_coercions_are_quiet() {
    let logs = capture(tracing::Level::TRACE, || {
        assert_eq!(Value::from_raw("42").as_int(0), 42);
        assert_eq!(Value::from_raw("[1]").as_array().len(), 1);
    });

    assert!(logs.is_empty(), "{logs}");
}

#[test]
fn lenient_failures_stay_below_debug() {
    let logs = capture(tracing::Level::DEBUG, || {
        assert!(!Value::from_raw("maybe").as_bool());
    });

    assert!(logs.is_empty(), "{logs}");
}

#[test]
fn invalid_layouts_are_logged_at_debug() {
    let logs = capture(tracing::Level::DEBUG, || {
        let layouts = [Layout::custom("[broken")];
        assert!(Value::from_raw("\"2023\"").as_time_with(&layouts).is_err());
    });

    assert!(logs.contains("skipping invalid layout"), "{logs}");
}
