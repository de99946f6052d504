//! Tour of the windowing API: overlapping windows, gapped windows, and the
//! trailing-partial behavior.
//!
//! Run with: cargo run --example basic_windowing

use louver::IteratorWindows;

fn main() {
    let readings = [3.1, 3.4, 2.9, 3.8, 4.0, 3.6, 3.2];

    // Moving average over a 3-sample sliding window.
    println!("3-sample moving averages:");
    for window in readings.iter().copied().windowed(3, 1, false).unwrap() {
        let mean: f64 = window.iter().sum::<f64>() / window.len() as f64;
        println!("  {:?} -> {:.2}", window, mean);
    }

    // Gapped sampling: keep 2, skip 2.
    println!("keep 2 of every 4:");
    for window in readings.iter().copied().windowed(2, 4, false).unwrap() {
        println!("  {:?}", window);
    }

    // Partial tails drain what is left at the end of the stream.
    println!("sliding with trailing partials:");
    for window in readings.iter().copied().windowed(4, 2, true).unwrap() {
        println!("  {:?}", window);
    }
}
