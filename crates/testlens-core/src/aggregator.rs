//! Folds decoded events into per-test records

use std::collections::HashMap;

use crate::events::{decode_event, Action, RawEvent};
use crate::locator::SourceLocator;
use crate::ordering::order_results;
use crate::types::{ResultSet, TestRecord, TestStatus};

/// Accumulates test records from an interleaved event stream
///
/// Events for different tests may arrive in any interleaving. Once the
/// stream is exhausted, [`Aggregator::finish`] hands the records to the
/// ordering stage and the aggregator is consumed.
#[derive(Debug, Default)]
pub struct Aggregator {
    records: HashMap<String, TestRecord>,
    locator: SourceLocator,
    lines_seen: usize,
    lines_discarded: usize,
}

impl Aggregator {
    pub fn new(locator: SourceLocator) -> Self {
        Self {
            records: HashMap::new(),
            locator,
            lines_seen: 0,
            lines_discarded: 0,
        }
    }

    /// Decode one raw line and fold it in; undecodable lines are dropped
    pub fn feed_line(&mut self, line: &str) {
        self.lines_seen += 1;
        match decode_event(line) {
            Some(event) => self.feed(event),
            None => self.lines_discarded += 1,
        }
    }

    /// Fold one decoded event into the mapping
    pub fn feed(&mut self, event: RawEvent) {
        let Some(id) = event.test_id else {
            return;
        };

        match event.action {
            Action::Start | Action::Run => {}
            Action::Output => {
                let text = event.output.unwrap_or_default();
                let record = self
                    .records
                    .entry(id)
                    .or_insert_with_key(|id| TestRecord::new(id.clone()));

                if record.source_file.is_none() {
                    if let Some(location) = self.locator.locate(&text) {
                        record.source_file = Some(location.file);
                        record.source_line = location.line;
                    }
                }
                record.output_lines.push(text);
            }
            Action::Pass | Action::Fail | Action::Skip => {
                let record = self
                    .records
                    .entry(id)
                    .or_insert_with_key(|id| TestRecord::new(id.clone()));
                if let Some(status) = TestStatus::from_action(event.action) {
                    // Repeated terminal events: the last one wins
                    record.status = status;
                }
            }
        }
    }

    /// Consume the aggregator and produce the ordered result set
    pub fn finish(self) -> ResultSet {
        tracing::debug!(
            "Aggregated {} tests from {} lines ({} discarded)",
            self.records.len(),
            self.lines_seen,
            self.lines_discarded
        );
        order_results(self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(suffix: &str, lines: &[&str]) -> ResultSet {
        let mut agg = Aggregator::new(SourceLocator::new(suffix).unwrap());
        for line in lines {
            agg.feed_line(line);
        }
        agg.finish()
    }

    fn ids(set: &ResultSet) -> Vec<&str> {
        set.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_failure_with_location_and_pass() {
        let set = aggregate(
            ".ext",
            &[
                r#"{"action":"output","test":"T1","output":"  file_a.ext:42: boom\n"}"#,
                r#"{"action":"fail","test":"T1"}"#,
                r#"{"action":"pass","test":"T2"}"#,
            ],
        );

        assert_eq!(ids(&set), vec!["T1", "T2"]);
        let t1 = &set.records()[0];
        assert_eq!(t1.status, TestStatus::Fail);
        assert_eq!(t1.source_file.as_deref(), Some("file_a.ext"));
        assert_eq!(t1.source_line, Some(42));
        assert_eq!(t1.output_lines, vec!["  file_a.ext:42: boom\n".to_string()]);

        let t2 = &set.records()[1];
        assert_eq!(t2.status, TestStatus::Pass);
        assert!(t2.output_lines.is_empty());
        assert_eq!(t2.location(), None);
    }

    #[test]
    fn test_garbage_lines_do_not_affect_results() {
        let clean = [
            r#"{"Action":"run","Test":"TestA"}"#,
            r#"{"Action":"output","Test":"TestA","Output":"ok\n"}"#,
            r#"{"Action":"pass","Test":"TestA"}"#,
        ];
        let noisy = [
            "not json",
            r#"{"Action":"run","Test":"TestA"}"#,
            "exit status 1",
            r#"{"Action":"output","Test":"TestA","Output":"ok\n"}"#,
            "{",
            r#"{"Action":"pass","Test":"TestA"}"#,
            "FAIL\texample.com/pkg\t0.01s",
        ];

        let mut agg = Aggregator::new(SourceLocator::default());
        for line in noisy {
            agg.feed_line(line);
        }
        assert_eq!(agg.lines_discarded, 4);
        assert_eq!(agg.finish(), aggregate(".go", &clean));
    }

    #[test]
    fn test_foreign_time_formats_keep_status() {
        let set = aggregate(
            ".go",
            &[
                r#"{"Time":"2024-05-01 10:00:00","Action":"fail","Test":"T1"}"#,
                r#"{"Time":"","Action":"pass","Test":"T2"}"#,
            ],
        );

        assert_eq!(ids(&set), vec!["T1", "T2"]);
        assert_eq!(set.records()[0].status, TestStatus::Fail);
        assert_eq!(set.records()[1].status, TestStatus::Pass);
    }

    #[test]
    fn test_interleaved_tests() {
        let set = aggregate(
            ".go",
            &[
                r#"{"Action":"output","Test":"TestB","Output":"b1\n"}"#,
                r#"{"Action":"output","Test":"TestA","Output":"a1\n"}"#,
                r#"{"Action":"output","Test":"TestB","Output":"b2\n"}"#,
                r#"{"Action":"pass","Test":"TestA"}"#,
                r#"{"Action":"output","Test":"TestB","Output":"b3\n"}"#,
                r#"{"Action":"fail","Test":"TestB"}"#,
            ],
        );

        assert_eq!(ids(&set), vec!["TestB", "TestA"]);
        assert_eq!(set.records()[0].output_lines, vec!["b1\n", "b2\n", "b3\n"]);
        assert_eq!(set.records()[1].output_lines, vec!["a1\n"]);
    }

    #[test]
    fn test_first_location_wins() {
        let set = aggregate(
            ".go",
            &[
                r#"{"Action":"output","Test":"T","Output":"=== RUN T\n"}"#,
                r#"{"Action":"output","Test":"T","Output":"    first_test.go:10: a\n"}"#,
                r#"{"Action":"output","Test":"T","Output":"    second_test.go:20: b\n"}"#,
                r#"{"Action":"fail","Test":"T"}"#,
            ],
        );
        let record = &set.records()[0];
        assert_eq!(record.location(), Some(("first_test.go", 10)));
        assert_eq!(record.output_lines.len(), 3);
    }

    #[test]
    fn test_location_without_line_is_still_first_match() {
        let set = aggregate(
            ".go",
            &[
                r#"{"Action":"output","Test":"T","Output":"see helper.go: no number\n"}"#,
                r#"{"Action":"output","Test":"T","Output":"other.go:5: later\n"}"#,
            ],
        );
        let record = &set.records()[0];
        assert_eq!(record.source_file.as_deref(), Some("helper.go"));
        assert_eq!(record.source_line, None);
        assert_eq!(record.location(), None);
    }

    #[test]
    fn test_start_run_and_suite_events_create_nothing() {
        let set = aggregate(
            ".go",
            &[
                r#"{"Action":"start","Package":"p"}"#,
                r#"{"Action":"run","Test":"TestOnlyRun"}"#,
                r#"{"Action":"output","Package":"p","Output":"PASS\n"}"#,
                r#"{"Action":"pass","Package":"p","Elapsed":0.1}"#,
            ],
        );
        assert!(set.is_empty());
    }

    #[test]
    fn test_output_creates_unknown_record() {
        let set = aggregate(".go", &[r#"{"Action":"output","Test":"T","Output":"hi\n"}"#]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.records()[0].status, TestStatus::Unknown);
    }

    #[test]
    fn test_repeated_terminal_events_last_wins() {
        let set = aggregate(
            ".go",
            &[
                r#"{"Action":"fail","Test":"T"}"#,
                r#"{"Action":"pass","Test":"T"}"#,
            ],
        );
        assert_eq!(set.records()[0].status, TestStatus::Pass);
    }

    #[test]
    fn test_output_without_text_appends_empty_line() {
        let set = aggregate(".go", &[r#"{"Action":"output","Test":"T"}"#]);
        assert_eq!(set.records()[0].output_lines, vec![String::new()]);
    }

    #[test]
    fn test_fresh_aggregators_agree() {
        let lines = [
            r#"{"Action":"pass","Test":"Zeta"}"#,
            r#"{"Action":"fail","Test":"Beta"}"#,
            r#"{"Action":"output","Test":"Alpha","Output":"x.go:1: y\n"}"#,
            r#"{"Action":"fail","Test":"Alpha"}"#,
            r#"{"Action":"skip","Test":"Gamma"}"#,
        ];
        let first = aggregate(".go", &lines);
        for _ in 0..5 {
            assert_eq!(aggregate(".go", &lines), first);
        }
        assert_eq!(ids(&first), vec!["Alpha", "Beta", "Gamma", "Zeta"]);
    }
}
