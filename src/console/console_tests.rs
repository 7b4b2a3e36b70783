use super::Console;
use ratatui::style::Color;

#[test]
fn add_line_appends_and_marks_dirty() {
    let console = Console::new(8);
    assert!(!console.is_dirty());

    console.add_line("hello", Color::White);

    assert_eq!(console.line_count(), 1);
    assert!(console.is_dirty());
}

#[test]
fn take_dirty_consumes_the_hint() {
    let console = Console::new(8);
    console.add_line("x", Color::White);

    assert!(console.take_dirty());
    assert!(!console.take_dirty());

    console.add_line("y", Color::White);
    assert!(console.take_dirty());
}

#[test]
fn dropped_counter_tracks_evictions() {
    let console = Console::new(2);
    console.add_line("a", Color::White);
    console.add_line("b", Color::White);
    assert_eq!(console.dropped_count(), 0);

    console.add_line("c", Color::White);
    console.add_line("d", Color::White);

    assert_eq!(console.dropped_count(), 2);
    assert_eq!(console.line_count(), 2);
    let lines = console.lines_copy(0, 1);
    assert_eq!(lines[0].text, "c");
    assert_eq!(lines[1].text, "d");
}

#[test]
fn lines_copy_returns_inclusive_range() {
    let console = Console::new(8);
    for text in ["a", "b", "c", "d"] {
        console.add_line(text, Color::White);
    }

    let lines = console.lines_copy(1, 2);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text, "b");
    assert_eq!(lines[1].text, "c");
}

#[test]
fn lines_copy_is_empty_for_inverted_range_or_empty_store() {
    let console = Console::new(8);
    assert!(console.lines_copy(0, 5).is_empty());

    console.add_line("a", Color::White);
    assert!(console.lines_copy(3, 1).is_empty());
    assert!(console.lines_copy(5, 9).is_empty());
}

#[test]
fn lines_copy_clamps_last_to_newest() {
    let console = Console::new(8);
    console.add_line("a", Color::White);
    console.add_line("b", Color::White);

    let lines = console.lines_copy(0, 99);
    assert_eq!(lines.len(), 2);
}

#[test]
fn clear_resets_lines_and_dropped_counter() {
    let console = Console::new(1);
    console.add_line("a", Color::White);
    console.add_line("b", Color::White);
    assert_eq!(console.dropped_count(), 1);
    console.take_dirty();

    console.clear();

    assert_eq!(console.line_count(), 0);
    assert_eq!(console.dropped_count(), 0);
    assert!(console.is_dirty(), "clear must nudge consumers to rebuild");
}

#[test]
fn stats_reads_count_and_dropped_together() {
    let console = Console::new(2);
    for text in ["a", "b", "c"] {
        console.add_line(text, Color::White);
    }
    assert_eq!(console.stats(), (2, 1));
}

#[test]
fn raise_max_lines_defers_eviction() {
    let console = Console::new(1);
    console.add_line("a", Color::White);
    console.raise_max_lines(1);
    console.add_line("b", Color::White);

    assert_eq!(console.line_count(), 2);
    assert_eq!(console.dropped_count(), 0);
}

#[test]
fn colors_survive_the_store() {
    let console = Console::new(4);
    console.add_line("warn", Color::Yellow);
    let lines = console.lines_copy(0, 0);
    assert_eq!(lines[0].color, Color::Yellow);
}
