//! Fixtures shared by the unit tests of this crate

use std::collections::HashMap;

use testlens_core::{order_results, ResultSet, TestRecord, TestStatus};

use crate::handler::update;
use crate::message::Message;
use crate::state::ViewerState;

pub fn record(id: &str, status: TestStatus, output: &[&str]) -> TestRecord {
    let mut record = TestRecord::new(id);
    record.status = status;
    record.output_lines = output.iter().map(|s| s.to_string()).collect();
    record
}

pub fn located(id: &str, status: TestStatus, file: &str, line: u32) -> TestRecord {
    let mut record = record(id, status, &[]);
    record.source_file = Some(file.to_string());
    record.source_line = Some(line);
    record
}

pub fn results(records: Vec<TestRecord>) -> ResultSet {
    let map: HashMap<String, TestRecord> = records.into_iter().map(|r| (r.id.clone(), r)).collect();
    order_results(map)
}

/// Viewer that has been resized and has finished loading `records`
pub fn ready_state(records: Vec<TestRecord>, width: u16, height: u16) -> ViewerState {
    let mut state = ViewerState::default();
    update(&mut state, Message::Resize { width, height });
    update(&mut state, Message::LoadComplete(results(records)));
    state
}

const IDE_VARS: &[&str] = &[
    "TERM_PROGRAM",
    "ZED_TERM",
    "VSCODE_IPC_HOOK_CLI",
    "TERMINAL_EMULATOR",
    "NVIM",
];

/// Run `f` with only the given IDE variables set, restoring afterwards.
/// Callers must be `#[serial]`.
pub fn with_ide_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
    let saved: Vec<(&str, Option<String>)> = IDE_VARS
        .iter()
        .map(|k| (*k, std::env::var(k).ok()))
        .collect();
    for k in IDE_VARS {
        std::env::remove_var(k);
    }
    for (k, v) in vars {
        std::env::set_var(k, v);
    }

    f();

    for (k, v) in saved {
        match v {
            Some(v) => std::env::set_var(k, v),
            None => std::env::remove_var(k),
        }
    }
}
