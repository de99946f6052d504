//! Sliding and striding window iteration
//!
//! [`Windowed`] lazily partitions an upstream iterator into snapshot
//! sub-sequences of `size` consecutive elements, with consecutive windows
//! starting `step` elements apart. Two strategies cover the whole parameter
//! space:
//!
//! * `step >= size` — disjoint or gapped windows. Each window is collected
//!   into a fresh `Vec`, then up to `step - size` elements are skipped.
//! * `step < size` — overlapping windows. A single [`RingBuffer`] persists
//!   across windows, retaining the `size - step` suffix that seeds the next
//!   one. The buffer starts at `min(size, 1024)` slots and grows
//!   geometrically until its capacity reaches `size`.
//!
//! The next window is always computed one call ahead, so [`Windowed::peek`]
//! and `size_hint` can answer without touching the upstream source again.

use std::fmt;
use std::iter::FusedIterator;

use thiserror::Error;

use crate::ring::RingBuffer;

/// Slot count allocated for a window buffer before any element arrives.
/// Bounds the upfront allocation when `size` is very large.
const INITIAL_CAPACITY_LIMIT: usize = 1024;

/// Errors raised when constructing a [`Windowed`] iterator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// `size` (and the equal `step`) was zero.
    #[error("size {size} must be greater than zero")]
    InvalidSize {
        /// The rejected window size.
        size: usize,
    },

    /// `size` or `step` was zero and the two differed.
    #[error("both size {size} and step {step} must be greater than zero")]
    InvalidSizeStep {
        /// The supplied window size.
        size: usize,
        /// The supplied step.
        step: usize,
    },
}

fn check_shape(size: usize, step: usize) -> Result<(), WindowError> {
    if size > 0 && step > 0 {
        return Ok(());
    }
    if size == step {
        Err(WindowError::InvalidSize { size })
    } else {
        Err(WindowError::InvalidSizeStep { size, step })
    }
}

/// Lazy iterator over windows of an upstream iterator.
///
/// Each yielded window is an owned snapshot: mutating it never affects the
/// internal buffer or any other window. Every window has exactly `size`
/// elements except possibly a trailing run of shorter ones, which appears
/// only when partial windows were requested.
///
/// The iterator is single-consumer, non-restartable, and fused: once
/// exhausted it stays exhausted. Cloning (available when the source is
/// `Clone`) forks an independent iterator; the two never share state.
///
/// ```
/// use louver::IteratorWindows;
///
/// let windows: Vec<Vec<i32>> = (1..=5).windowed(3, 1, false).unwrap().collect();
/// assert_eq!(windows, vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]);
/// ```
pub struct Windowed<I: Iterator> {
    source: I,
    size: usize,
    step: usize,
    allow_partial: bool,
    /// Next window to hand out, computed one call ahead. `None` is terminal.
    pending: Option<Vec<I::Item>>,
    /// Overlap buffer, allocated lazily and only when `step < size`.
    buffer: Option<RingBuffer<I::Item>>,
}

impl<I> Windowed<I>
where
    I: Iterator,
    I::Item: Clone,
{
    /// Wrap `source` in a window iterator.
    ///
    /// Fails with [`WindowError`] when `size` or `step` is zero; validation
    /// happens before any element is pulled from `source`. When
    /// `allow_partial` is set, source exhaustion emits the remaining
    /// elements as one or more trailing windows shorter than `size`;
    /// otherwise the dangling elements are discarded.
    pub fn new(
        source: I,
        size: usize,
        step: usize,
        allow_partial: bool,
    ) -> Result<Self, WindowError> {
        check_shape(size, step)?;
        let mut windows = Self {
            source,
            size,
            step,
            allow_partial,
            pending: None,
            buffer: None,
        };
        windows.pending = windows.compute_next();
        Ok(windows)
    }

    /// The window staged for the next `next()` call, if any.
    ///
    /// Returns `None` exactly when the iterator is exhausted.
    pub fn peek(&self) -> Option<&[I::Item]> {
        self.pending.as_deref()
    }

    /// Configured window length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Configured advance between window starts.
    pub fn step(&self) -> usize {
        self.step
    }

    fn compute_next(&mut self) -> Option<Vec<I::Item>> {
        if self.step >= self.size {
            self.next_strided()
        } else {
            self.next_overlapping()
        }
    }

    /// `step >= size`: windows never share elements, so each one is
    /// collected into a fresh list and the gap after it is skipped.
    fn next_strided(&mut self) -> Option<Vec<I::Item>> {
        let mut window = Vec::with_capacity(self.size.min(INITIAL_CAPACITY_LIMIT));
        while window.len() < self.size {
            match self.source.next() {
                Some(item) => window.push(item),
                None => break,
            }
        }
        if window.is_empty() {
            return None;
        }
        if window.len() == self.size {
            // Discard the gap between this window and the next; the source
            // may exhaust part-way through, which only shortens the gap.
            for _ in 0..self.step - self.size {
                if self.source.next().is_none() {
                    break;
                }
            }
            return Some(window);
        }
        if self.allow_partial {
            Some(window)
        } else {
            None
        }
    }

    /// `step < size`: consecutive windows share a `size - step` suffix,
    /// which stays behind in the ring buffer between calls.
    fn next_overlapping(&mut self) -> Option<Vec<I::Item>> {
        while let Some(item) = self.source.next() {
            let size = self.size;
            let buffer = self
                .buffer
                .get_or_insert_with(|| RingBuffer::with_capacity(size.min(INITIAL_CAPACITY_LIMIT)));
            buffer
                .push(item)
                .expect("buffer is grown or drained before it fills");
            if !buffer.is_full() {
                continue;
            }
            if buffer.capacity() < size {
                // Capacity has not reached the window size yet; replace the
                // buffer with a grown copy and keep pulling.
                if let Some(full) = self.buffer.take() {
                    self.buffer = Some(full.grow(size));
                }
                continue;
            }
            // A complete window is buffered: snapshot it, then evict the
            // first `step` elements so the suffix seeds the next window.
            let window: Vec<I::Item> = buffer.iter().cloned().collect();
            buffer
                .discard_front(self.step)
                .expect("full window holds at least `step` elements");
            return Some(window);
        }

        // Source exhausted before a full window accumulated.
        let buffer = self.buffer.as_mut()?;
        if !self.allow_partial || buffer.is_empty() {
            return None;
        }
        if buffer.len() > self.step {
            // Mirror the normal eviction: the remainder may itself yield
            // further, even shorter trailing windows.
            let window: Vec<I::Item> = buffer.iter().cloned().collect();
            buffer
                .discard_front(self.step)
                .expect("buffer holds more than `step` elements");
            Some(window)
        } else {
            // At most `step` elements left: emit them all and retire the
            // buffer, ending the iteration.
            let buffer = self.buffer.take()?;
            Some(buffer.into_iter().collect())
        }
    }

    /// Number of windows still to come from `n` unconsumed elements
    /// (buffered suffix plus upstream), not counting the pending window.
    fn remaining_windows(&self, n: usize) -> usize {
        if n == 0 {
            0
        } else if self.allow_partial {
            (n - 1) / self.step + 1
        } else if n < self.size {
            0
        } else {
            (n - self.size) / self.step + 1
        }
    }
}

impl<I> Iterator for Windowed<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        let window = self.pending.take()?;
        self.pending = self.compute_next();
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.pending.is_none() {
            return (0, Some(0));
        }
        let buffered = self.buffer.as_ref().map_or(0, RingBuffer::len);
        let (source_lower, source_upper) = self.source.size_hint();
        let lower = 1 + self.remaining_windows(buffered.saturating_add(source_lower));
        let upper = source_upper
            .and_then(|upper| upper.checked_add(buffered))
            .map(|n| 1 + self.remaining_windows(n));
        (lower, upper)
    }
}

impl<I> FusedIterator for Windowed<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

impl<I> Clone for Windowed<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            size: self.size,
            step: self.step,
            allow_partial: self.allow_partial,
            pending: self.pending.clone(),
            buffer: self.buffer.clone(),
        }
    }
}

impl<I: Iterator> fmt::Debug for Windowed<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Windowed")
            .field("size", &self.size)
            .field("step", &self.step)
            .field("allow_partial", &self.allow_partial)
            .field("pending_len", &self.pending.as_ref().map(Vec::len))
            .finish_non_exhaustive()
    }
}

/// Windowing adaptors for any iterator.
pub trait IteratorWindows: Iterator + Sized {
    /// Windows of `size` elements starting `step` apart.
    ///
    /// See [`Windowed::new`] for the partial-window semantics.
    fn windowed(
        self,
        size: usize,
        step: usize,
        allow_partial: bool,
    ) -> Result<Windowed<Self>, WindowError>
    where
        Self::Item: Clone,
    {
        Windowed::new(self, size, step, allow_partial)
    }

    /// Disjoint chunks of `size` elements, including the shorter remainder.
    ///
    /// ```
    /// use louver::IteratorWindows;
    ///
    /// let chunks: Vec<Vec<i32>> = (1..=7).chunked(3).unwrap().collect();
    /// assert_eq!(chunks, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
    /// ```
    fn chunked(self, size: usize) -> Result<Windowed<Self>, WindowError>
    where
        Self::Item: Clone,
    {
        Windowed::new(self, size, size, true)
    }
}

impl<I: Iterator> IteratorWindows for I {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_size_with_distinct_messages() {
        let err = Windowed::new(std::iter::empty::<u8>(), 0, 3, false).unwrap_err();
        assert_eq!(err, WindowError::InvalidSizeStep { size: 0, step: 3 });
        assert_eq!(
            err.to_string(),
            "both size 0 and step 3 must be greater than zero"
        );

        let err = Windowed::new(std::iter::empty::<u8>(), 0, 0, false).unwrap_err();
        assert_eq!(err, WindowError::InvalidSize { size: 0 });
        assert_eq!(err.to_string(), "size 0 must be greater than zero");

        let err = Windowed::new(std::iter::empty::<u8>(), 4, 0, false).unwrap_err();
        assert_eq!(err, WindowError::InvalidSizeStep { size: 4, step: 0 });
    }

    #[test]
    fn validation_precedes_any_pull() {
        // A source that panics on first pull proves validation comes first.
        struct Untouchable;
        impl Iterator for Untouchable {
            type Item = u8;
            fn next(&mut self) -> Option<u8> {
                panic!("source must not be pulled");
            }
        }
        assert!(Windowed::new(Untouchable, 0, 1, true).is_err());
    }

    #[test]
    fn overlapping_windows_share_suffix() {
        let windows: Vec<Vec<i32>> = (1..=5).windowed(3, 1, false).unwrap().collect();
        assert_eq!(windows, vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]);
    }

    #[test]
    fn gapped_windows_skip_between_chunks() {
        let windows: Vec<Vec<i32>> = (1..=9).windowed(2, 4, false).unwrap().collect();
        assert_eq!(windows, vec![vec![1, 2], vec![5, 6]]);
        // The dangling element 9 is pulled but dropped without `allow_partial`.
    }

    #[test]
    fn peek_tracks_pending_window() {
        let mut windows = (1..=4).windowed(2, 2, false).unwrap();
        assert_eq!(windows.peek(), Some(&[1, 2][..]));
        assert_eq!(windows.next(), Some(vec![1, 2]));
        assert_eq!(windows.peek(), Some(&[3, 4][..]));
        windows.next();
        assert_eq!(windows.peek(), None);
        assert_eq!(windows.next(), None);
    }

    #[test]
    fn exhaustion_is_terminal() {
        let mut windows = (1..=2).windowed(2, 1, false).unwrap();
        assert_eq!(windows.next(), Some(vec![1, 2]));
        assert_eq!(windows.next(), None);
        assert_eq!(windows.next(), None);
        assert_eq!(windows.peek(), None);
    }

    #[test]
    fn accessors_report_configuration() {
        let windows = (1..=4).windowed(3, 2, true).unwrap();
        assert_eq!(windows.size(), 3);
        assert_eq!(windows.step(), 2);
    }
}
