use std::io;
use std::sync::{Arc, Mutex};

use brandrec_engine::RecommendationEngine;
use brandrec_model::SoftmaxClassifier;
use test_fixtures::form_requests;

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

fn captured<T>(f: impl FnOnce() -> T) -> (T, String) {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, capture.contents())
}

fn engine() -> RecommendationEngine {
    RecommendationEngine::new(Box::new(SoftmaxClassifier::uniform(16)), None)
}

#[test]
fn raw_parse_failure_is_logged_as_rejected_request() {
    let engine = engine();
    // Fifth form request carries a non-numeric price.
    let raw = form_requests()[4].clone();
    let (result, logs) = captured(|| engine.recommend_raw(&raw));

    assert!(result.unwrap_err().is_input_error());
    assert!(logs.contains("request rejected"), "{logs}");
    assert!(logs.contains("INVALID_NUMERIC_INPUT"), "{logs}");
    assert!(logs.contains("brandrec.recommend"), "{logs}");
}

#[test]
fn successful_raw_request_is_logged() {
    let engine = engine();
    let raw = form_requests()[0].clone();
    let (result, logs) = captured(|| engine.recommend_raw(&raw));

    assert!(result.is_ok());
    assert!(logs.contains("recommendation produced"), "{logs}");
}
