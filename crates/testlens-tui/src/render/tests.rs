//! Full-frame rendering tests

use testlens_app::handler::update;
use testlens_app::{Message, ViewerState};
use testlens_core::TestStatus;

use super::view;
use crate::test_utils::{ready_state, record, TestTerminal, TEST_HEIGHT, TEST_WIDTH};
use crate::theme::Theme;

fn draw(state: &ViewerState) -> TestTerminal {
    let mut term = TestTerminal::with_size(state.viewport_width.max(1), state.viewport_height.max(1));
    let theme = Theme::default();
    term.draw_with(|frame| view(frame, state, &theme));
    term
}

fn sample_state() -> ViewerState {
    let mut divide = record(
        "TestDivide",
        TestStatus::Fail,
        &[
            "=== RUN   TestDivide\n",
            "    calc_test.go:42: division by zero\n",
            "--- FAIL: TestDivide (0.00s)\n",
        ],
    );
    divide.source_file = Some("calc_test.go".into());
    divide.source_line = Some(42);

    ready_state(
        vec![
            record("TestAdd", TestStatus::Pass, &["--- PASS: TestAdd (0.00s)\n"]),
            divide,
            record("TestSkipped", TestStatus::Skip, &[]),
        ],
        TEST_WIDTH,
        TEST_HEIGHT,
    )
}

#[test]
fn test_initializing_placeholder() {
    let state = ViewerState::default();
    let mut term = TestTerminal::new();
    let theme = Theme::default();
    term.draw_with(|frame| view(frame, &state, &theme));
    assert!(term.buffer_contains("Initializing..."));
}

#[test]
fn test_loading_placeholder() {
    let mut state = ViewerState::default();
    update(
        &mut state,
        Message::Resize {
            width: TEST_WIDTH,
            height: TEST_HEIGHT,
        },
    );
    let term = draw(&state);
    assert!(term.buffer_contains("Running tests..."));
    assert!(term.buffer_contains("This may take a moment"));
}

#[test]
fn test_load_failed_placeholder() {
    let mut state = ViewerState::default();
    update(
        &mut state,
        Message::Resize {
            width: TEST_WIDTH,
            height: TEST_HEIGHT,
        },
    );
    update(&mut state, Message::LoadFailed("harness missing".into()));
    let term = draw(&state);
    assert!(term.buffer_contains("Error: harness missing"));
    assert!(term.buffer_contains("Press q to quit"));
}

#[test]
fn test_no_tests_placeholder() {
    let state = ready_state(Vec::new(), TEST_WIDTH, TEST_HEIGHT);
    let term = draw(&state);
    assert!(term.buffer_contains("No tests found."));
}

#[test]
fn test_dashboard_layout() {
    let state = sample_state();
    let term = draw(&state);

    // Sidebar: title, blank, failures first
    assert!(term.line_contains(0, "Tests"));
    assert!(term.line_contains(2, "► ✗ TestDivide"));
    assert!(term.line_contains(3, "✓ TestAdd"));
    assert!(term.line_contains(4, "↷ TestSkipped"));
    assert_eq!(term.cell_at(29, 2), Some("│"));

    // Detail pane, after the indicator row
    assert!(term.line_contains(1, "TestDivide FAIL"));
    assert!(term.line_contains(2, "calc_test.go:42"));
    assert!(term.line_contains(4, "=== RUN   TestDivide"));
    assert!(!term.buffer_contains("Scroll"));

    // Separator and status bar
    assert_eq!(term.cell_at(0, 22), Some("─"));
    assert!(term.line_contains(23, "1 passed • 1 failed"));
    assert!(term.line(23).trim_end().ends_with("f: toggle filter • q: quit"));
}

#[test]
fn test_filtered_view() {
    let mut state = sample_state();
    update(&mut state, Message::ToggleFilter);
    let term = draw(&state);
    assert!(term.line_contains(0, "Tests (Failures Only)"));
    assert!(term.buffer_contains("TestDivide"));
    assert!(!term.buffer_contains("TestAdd"));
}

#[test]
fn test_all_passed_pane() {
    let mut state = ready_state(
        vec![record("TestAdd", TestStatus::Pass, &[])],
        TEST_WIDTH,
        TEST_HEIGHT,
    );
    update(&mut state, Message::ToggleFilter);
    let term = draw(&state);
    assert!(term.buffer_contains("✓ All tests passed!"));
    assert!(term.buffer_contains("All Tests Passed!"));
    assert!(term.buffer_contains("Press 'f' to show all tests"));
}

#[test]
fn test_scroll_indicators() {
    let output: Vec<String> = (0..48).map(|i| format!("line {i}\n")).collect();
    let output: Vec<&str> = output.iter().map(String::as_str).collect();
    let mut state = ready_state(
        vec![record("TestLong", TestStatus::Fail, &output)],
        TEST_WIDTH,
        TEST_HEIGHT,
    );

    let term = draw(&state);
    assert!(!term.line_contains(0, "Scroll up"));
    assert!(term.line_contains(21, "▼ Scroll down (Ctrl+D/PgDn)"));

    update(&mut state, Message::ScrollDown);
    let term = draw(&state);
    assert!(term.line_contains(0, "▲ Scroll up (Ctrl+U/PgUp)"));
    assert!(term.line_contains(1, "line 8"));
    assert!(term.line_contains(21, "▼ Scroll down"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    for (width, height) in [(1, 1), (5, 3), (12, 4), (30, 2), (200, 5)] {
        let state = ready_state(
            vec![
                record("TestA", TestStatus::Fail, &["boom\n"]),
                record("TestB", TestStatus::Pass, &[]),
            ],
            width,
            height,
        );
        let _ = draw(&state);
    }
}

#[test]
fn test_plain_theme_renders_same_text() {
    let state = sample_state();
    let mut term = TestTerminal::new();
    let theme = Theme::plain();
    term.draw_with(|frame| view(frame, &state, &theme));
    assert_eq!(term.content(), draw(&state).content());
}
