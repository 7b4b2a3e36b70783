//! Scrollback hot paths: append/evict, incremental pump, search.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use devcon::buffer::CircularBuffer;
use devcon::console::Console;
use devcon::view_state::{ConsoleTail, TextViewState};
use ratatui::style::Color;

fn bench_push_at_capacity(c: &mut Criterion) {
    c.bench_function("buffer_push_at_capacity", |b| {
        let mut buf: CircularBuffer<u64> = CircularBuffer::new(1024);
        for i in 0..1024 {
            buf.push_back(i);
        }
        let mut i = 1024u64;
        b.iter(|| {
            i += 1;
            black_box(buf.push_back(black_box(i)));
        });
    });
}

fn bench_incremental_pump(c: &mut Criterion) {
    c.bench_function("tail_pump_small_delta", |b| {
        let console = Console::new(1024);
        let mut view = TextViewState::new(4096);
        view.set_viewport(200, 50);
        let mut tail = ConsoleTail::new();
        for i in 0..1024 {
            console.add_line(format!("seed line {i}"), Color::White);
        }
        tail.pump(&console, &mut view);

        b.iter(|| {
            console.add_line("one more line", Color::White);
            black_box(tail.pump(&console, &mut view));
        });
    });
}

fn bench_search_wraparound(c: &mut Criterion) {
    c.bench_function("view_search_miss_full_scan", |b| {
        let mut view = TextViewState::new(4096);
        view.set_viewport(400, 50);
        for i in 0..4096 {
            view.add_line(format!("payload line number {i}"), Color::White);
        }
        b.iter(|| {
            // Misses force a full scan.
            black_box(view.search(black_box("absent needle")));
        });
    });
}

criterion_group!(
    benches,
    bench_push_at_capacity,
    bench_incremental_pump,
    bench_search_wraparound
);
criterion_main!(benches);
