//! # Usage Analytics
//!
//! After a successful calculation the presentation layer reports a
//! `calculator_used` event carrying the calculator id, the inputs and the
//! calculator's tracked result fields.
//!
//! Reporting is fire-and-forget. [`emit`] logs and swallows every sink
//! failure, so a broken sink can never block or alter a displayed result.
//!
//! ## Sinks
//!
//! - [`NoopSink`] - analytics disabled
//! - [`MemorySink`] - keeps events in memory (tests, inspection)
//! - [`JsonlFileSink`] - appends one JSON line per event under an exclusive
//!   file lock (native only)
//! - [`HttpSink`] - posts each event from a background thread (native only)
//!
//! ## Example
//!
//! ```rust
//! use creator_core::analytics::{emit, AnalyticsEvent, MemorySink};
//! use serde_json::json;
//!
//! let sink = MemorySink::new();
//! let event = AnalyticsEvent::new(
//!     "engagement-rate",
//!     json!({"followers": 50000}),
//!     &json!({"rate": 5.5, "rating": "good", "total_engagement": 2750}),
//!     &["rate", "rating"],
//! );
//! emit(&sink, &event);
//!
//! let events = sink.events();
//! assert_eq!(events[0].results, json!({"rate": 5.5, "rating": "good"}));
//! ```

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::errors::{CalcError, CalcResult};

/// Name of the event sent after every successful calculation
pub const CALCULATOR_USED: &str = "calculator_used";

/// One analytics event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub id: Uuid,
    pub name: String,
    /// Calculator id, e.g. `"brand-deal"`
    pub calculator: String,
    pub timestamp: DateTime<Utc>,
    /// Snapshot of the submitted input
    pub inputs: Value,
    /// Selected result fields
    pub results: Value,
}

impl AnalyticsEvent {
    /// Build a `calculator_used` event, keeping only `tracked` result fields.
    /// An empty `tracked` list keeps the whole result.
    pub fn new(calculator: &str, inputs: Value, results: &Value, tracked: &[&str]) -> Self {
        AnalyticsEvent {
            id: Uuid::new_v4(),
            name: CALCULATOR_USED.to_string(),
            calculator: calculator.to_string(),
            timestamp: Utc::now(),
            inputs,
            results: select_fields(results, tracked),
        }
    }

    /// Build an event from typed input and output records
    pub fn from_records<I: Serialize, O: Serialize>(
        calculator: &str,
        input: &I,
        output: &O,
        tracked: &[&str],
    ) -> CalcResult<Self> {
        let inputs = serde_json::to_value(input)?;
        let results = serde_json::to_value(output)?;
        Ok(AnalyticsEvent::new(calculator, inputs, &results, tracked))
    }
}

/// Keep only the named top-level fields of an object
pub fn select_fields(value: &Value, fields: &[&str]) -> Value {
    match value {
        Value::Object(object) if !fields.is_empty() => {
            let selected: Map<String, Value> = fields
                .iter()
                .filter_map(|f| object.get(*f).map(|v| (f.to_string(), v.clone())))
                .collect();
            Value::Object(selected)
        }
        other => other.clone(),
    }
}

/// Destination for analytics events.
pub trait AnalyticsSink: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Deliver one event
    fn track(&self, event: &AnalyticsEvent) -> CalcResult<()>;

    /// Wait for deliveries still in flight. Most sinks deliver synchronously.
    fn flush(&self) {}
}

/// Report an event, logging and discarding any failure
pub fn emit(sink: &dyn AnalyticsSink, event: &AnalyticsEvent) {
    match sink.track(event) {
        Ok(()) => tracing::debug!(sink = sink.name(), calculator = %event.calculator, "analytics event sent"),
        Err(e) => tracing::warn!(
            sink = sink.name(),
            calculator = %event.calculator,
            error = %e,
            "analytics event dropped"
        ),
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl AnalyticsSink for NoopSink {
    fn name(&self) -> &'static str {
        "noop"
    }

    fn track(&self, _event: &AnalyticsEvent) -> CalcResult<()> {
        Ok(())
    }
}

/// Collects events in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        MemorySink::default()
    }

    /// Copy of every event received so far
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.events.lock().map(|events| events.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AnalyticsSink for MemorySink {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn track(&self, event: &AnalyticsEvent) -> CalcResult<()> {
        let mut events = self
            .events
            .lock()
            .map_err(|_| CalcError::sink("memory", "event buffer poisoned"))?;
        events.push(event.clone());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::{HttpSink, JsonlFileSink};

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::fs::OpenOptions;
    use std::io::Write;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;
    use std::thread::JoinHandle;
    use std::time::Duration;

    use fs2::FileExt;

    use super::{AnalyticsEvent, AnalyticsSink};
    use crate::errors::{CalcError, CalcResult};

    /// Appends events to a JSON Lines file.
    ///
    /// Each append holds an exclusive OS lock so concurrent processes never
    /// interleave partial lines.
    #[derive(Debug, Clone)]
    pub struct JsonlFileSink {
        path: PathBuf,
    }

    impl JsonlFileSink {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            JsonlFileSink { path: path.into() }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl AnalyticsSink for JsonlFileSink {
        fn name(&self) -> &'static str {
            "file"
        }

        fn track(&self, event: &AnalyticsEvent) -> CalcResult<()> {
            let line = serde_json::to_string(event)?;
            let fail = |op: &str, e: std::io::Error| {
                CalcError::sink("file", format!("{} {}: {}", op, self.path.display(), e))
            };

            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
                .map_err(|e| fail("open", e))?;

            file.lock_exclusive().map_err(|e| fail("lock", e))?;
            let written = writeln!(file, "{}", line).and_then(|_| file.flush());
            let unlocked = FileExt::unlock(&file);

            written.map_err(|e| fail("write", e))?;
            unlocked.map_err(|e| fail("unlock", e))
        }
    }

    /// Posts events as JSON to an HTTP endpoint.
    ///
    /// `track` hands the request to a background thread and returns at once;
    /// delivery failures are only logged.
    pub struct HttpSink {
        endpoint: String,
        client: reqwest::blocking::Client,
        pending: Mutex<Vec<JoinHandle<()>>>,
    }

    impl HttpSink {
        pub fn new(endpoint: impl Into<String>, timeout: Duration) -> CalcResult<Self> {
            let client = reqwest::blocking::Client::builder()
                .user_agent(format!("creator-calc/{}", env!("CARGO_PKG_VERSION")))
                .timeout(timeout)
                .build()
                .map_err(|e| CalcError::sink("http", format!("Failed to create HTTP client: {}", e)))?;

            Ok(HttpSink {
                endpoint: endpoint.into(),
                client,
                pending: Mutex::new(Vec::new()),
            })
        }

        pub fn endpoint(&self) -> &str {
            &self.endpoint
        }
    }

    impl AnalyticsSink for HttpSink {
        fn name(&self) -> &'static str {
            "http"
        }

        fn track(&self, event: &AnalyticsEvent) -> CalcResult<()> {
            let body = serde_json::to_value(event)?;
            let client = self.client.clone();
            let endpoint = self.endpoint.clone();

            let handle = std::thread::Builder::new()
                .name("analytics-http".to_string())
                .spawn(move || match client.post(&endpoint).json(&body).send() {
                    Ok(response) if response.status().is_success() => {}
                    Ok(response) => {
                        tracing::warn!(endpoint = %endpoint, status = %response.status(), "analytics endpoint rejected event")
                    }
                    Err(e) => tracing::warn!(endpoint = %endpoint, error = %e, "analytics request failed"),
                })
                .map_err(|e| CalcError::sink("http", format!("Failed to spawn sender: {}", e)))?;

            if let Ok(mut pending) = self.pending.lock() {
                pending.retain(|h| !h.is_finished());
                pending.push(handle);
            }
            Ok(())
        }

        fn flush(&self) {
            let handles: Vec<JoinHandle<()>> = match self.pending.lock() {
                Ok(mut pending) => pending.drain(..).collect(),
                Err(_) => return,
            };
            for handle in handles {
                let _ = handle.join();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct FailingSink;

    impl AnalyticsSink for FailingSink {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn track(&self, _event: &AnalyticsEvent) -> CalcResult<()> {
            Err(CalcError::sink("failing", "endpoint unreachable"))
        }
    }

    fn sample_event() -> AnalyticsEvent {
        AnalyticsEvent::new(
            "brand-deal",
            json!({"followers": 50000}),
            &json!({"tier": "mid", "min_rate": 1200.0, "max_rate": 12000.0}),
            &["tier"],
        )
    }

    #[test]
    fn test_event_shape() {
        let event = sample_event();
        assert_eq!(event.name, CALCULATOR_USED);
        assert_eq!(event.calculator, "brand-deal");
        assert_eq!(event.results, json!({"tier": "mid"}));
        assert_eq!(event.id.get_version_num(), 4);
    }

    #[test]
    fn test_select_fields() {
        let results = json!({"a": 1, "b": 2});
        assert_eq!(select_fields(&results, &[]), results);
        assert_eq!(select_fields(&results, &["b", "missing"]), json!({"b": 2}));
        assert_eq!(select_fields(&json!(5), &["a"]), json!(5));
    }

    #[test]
    fn test_memory_sink_records() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());
        emit(&sink, &sample_event());
        emit(&sink, &sample_event());
        assert_eq!(sink.len(), 2);
        assert_ne!(sink.events()[0].id, sink.events()[1].id);
    }

    #[test]
    fn test_emit_swallows_failures() {
        // must not panic or propagate
        emit(&FailingSink, &sample_event());
    }

    #[test]
    fn test_event_roundtrips_through_json() {
        let event = sample_event();
        let json = serde_json::to_string(&event).unwrap();
        let back: AnalyticsEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_jsonl_sink_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        let sink = JsonlFileSink::new(&path);

        emit(&sink, &sample_event());
        emit(&sink, &sample_event());

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: AnalyticsEvent = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first.calculator, "brand-deal");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_jsonl_sink_reports_bad_path() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonlFileSink::new(dir.path().join("missing").join("events.jsonl"));
        let err = sink.track(&sample_event()).unwrap_err();
        assert_eq!(err.error_code(), "SINK_ERROR");
        assert!(err.is_recoverable());
    }
}
