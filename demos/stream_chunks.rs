//! Chunked batching of an unbounded-style source.
//!
//! Run with: cargo run --example stream_chunks

use louver::IteratorWindows;

fn main() {
    // Batch a generated stream into fixed-size work units; the final short
    // batch is emitted rather than dropped.
    let ids = (0..23).map(|n| format!("job-{n:03}"));

    for (batch_no, batch) in ids.chunked(8).unwrap().enumerate() {
        println!("batch {} ({} jobs): {}", batch_no + 1, batch.len(), batch.join(", "));
    }
}
