//! Aggregated test result types

use std::fmt;

use crate::events::Action;

/// Settled outcome of a single test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TestStatus {
    /// Output seen but no terminal event yet
    #[default]
    Unknown,
    Pass,
    Fail,
    Skip,
}

impl TestStatus {
    /// Map a terminal action onto a status; other actions settle nothing
    pub fn from_action(action: Action) -> Option<Self> {
        match action {
            Action::Pass => Some(TestStatus::Pass),
            Action::Fail => Some(TestStatus::Fail),
            Action::Skip => Some(TestStatus::Skip),
            Action::Start | Action::Run | Action::Output => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TestStatus::Unknown => "UNKNOWN",
            TestStatus::Pass => "PASS",
            TestStatus::Fail => "FAIL",
            TestStatus::Skip => "SKIP",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, TestStatus::Fail)
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything known about one test after folding its events
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRecord {
    pub id: String,
    pub status: TestStatus,
    /// Raw captured output, in arrival order
    pub output_lines: Vec<String>,
    pub source_file: Option<String>,
    pub source_line: Option<u32>,
}

impl TestRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: TestStatus::Unknown,
            output_lines: Vec::new(),
            source_file: None,
            source_line: None,
        }
    }

    /// File and line, only when both were extracted
    pub fn location(&self) -> Option<(&str, u32)> {
        match (&self.source_file, self.source_line) {
            (Some(file), Some(line)) => Some((file.as_str(), line)),
            _ => None,
        }
    }

    /// Output lines with trailing line breaks removed and blank lines dropped
    pub fn display_output(&self) -> impl Iterator<Item = &str> {
        self.output_lines
            .iter()
            .map(|line| line.trim_end_matches(['\n', '\r']))
            .filter(|line| !line.is_empty())
    }
}

/// Ordered, immutable sequence of test records
///
/// Built only through [`crate::ordering::order_results`], so the
/// failures-first ordering always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    records: Vec<TestRecord>,
}

impl ResultSet {
    pub(crate) fn from_ordered(records: Vec<TestRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[TestRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TestRecord> {
        self.records.iter()
    }

    pub fn passed_count(&self) -> usize {
        self.count(TestStatus::Pass)
    }

    pub fn failed_count(&self) -> usize {
        self.count(TestStatus::Fail)
    }

    fn count(&self, status: TestStatus) -> usize {
        self.records.iter().filter(|r| r.status == status).count()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a TestRecord;
    type IntoIter = std::slice::Iter<'a, TestRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
