//! Test event decoding
//!
//! The harness emits one JSON object per line (`go test -json` shape):
//!
//! ```json
//! {"Time":"2024-05-01T10:00:00.5+02:00","Action":"output","Package":"example.com/pkg","Test":"TestAdd","Output":"    add_test.go:12: got 3\n"}
//! ```
//!
//! Anything that does not decode into a [`RawEvent`] is discarded.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer};

/// Lifecycle action carried by a single event line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Start,
    Run,
    Output,
    Pass,
    Fail,
    Skip,
}

/// One decoded event line. Never retained past aggregation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawEvent {
    /// RFC 3339 time; any other text decodes as `None`
    #[serde(rename = "Time", alias = "time", default, deserialize_with = "lenient_time")]
    pub timestamp: Option<DateTime<FixedOffset>>,

    #[serde(rename = "Action", alias = "action")]
    pub action: Action,

    #[serde(rename = "Package", alias = "package", alias = "suite", default)]
    pub suite: Option<String>,

    #[serde(rename = "Test", alias = "test", default)]
    pub test_id: Option<String>,

    #[serde(rename = "Elapsed", alias = "elapsed", default)]
    pub elapsed_seconds: Option<f64>,

    #[serde(rename = "Output", alias = "output", default)]
    pub output: Option<String>,
}

/// Harnesses other than `go test` write times in their own formats. An
/// unparsable time must not cost the event its status.
fn lenient_time<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|text| DateTime::parse_from_rfc3339(text.trim()).ok()))
}

/// Decode one line of harness output.
///
/// Returns `None` for blank lines, non-JSON text, and objects that do not
/// match the event schema (including unknown actions). An empty test name
/// is normalised to `None`.
pub fn decode_event(line: &str) -> Option<RawEvent> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<RawEvent>(trimmed) {
        Ok(mut event) => {
            if event.test_id.as_deref().is_some_and(str::is_empty) {
                event.test_id = None;
            }
            Some(event)
        }
        Err(e) => {
            tracing::trace!("Discarding undecodable line ({}): {}", e, trimmed);
            None
        }
    }
}
