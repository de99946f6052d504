//! # Louver
//!
//! Windowed and chunked iteration over arbitrary iterators.
//!
//! The crate centers on two pieces:
//!
//! 1. **[`RingBuffer`]**: a fixed-capacity circular store with O(1) push,
//!    O(1) indexed reads, prefix eviction that moves a start pointer instead
//!    of shifting elements, and grow-by-replacement (1.5x + 1, capped).
//! 2. **[`Windowed`]**: a lazy window iterator that partitions any upstream
//!    iterator into snapshot sub-sequences of `size` elements starting
//!    `step` apart, sharing the overlap through a single ring buffer when
//!    windows overlap and collecting fresh lists when they do not.
//!
//! ## Usage
//!
//! ```
//! use louver::IteratorWindows;
//!
//! // Overlapping windows: step < size.
//! let sliding: Vec<Vec<i32>> = (1..=5).windowed(3, 1, false).unwrap().collect();
//! assert_eq!(sliding, vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]);
//!
//! // Chunking with the trailing remainder kept.
//! let chunks: Vec<Vec<i32>> = (1..=7).chunked(3).unwrap().collect();
//! assert_eq!(chunks, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
//! ```
//!
//! Windowing is single-consumer and strictly sequential: the upstream
//! source is pulled at most once per element and never rewound.

#![warn(missing_docs, missing_debug_implementations)]

pub mod ring;
pub mod window;

// Re-exports for convenience
pub use ring::{RingBuffer, RingBufferError};
pub use window::{IteratorWindows, WindowError, Windowed};
