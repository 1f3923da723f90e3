// SPDX-License-Identifier: MPL-2.0
//! Circular buffer implementation for diagnostic event storage.
//!
//! This module provides a memory-bounded ring buffer that automatically
//! evicts the oldest entries when capacity is reached.

use std::collections::VecDeque;

use crate::config::{
    DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, MAX_DIAGNOSTICS_BUFFER_CAPACITY,
    MIN_DIAGNOSTICS_BUFFER_CAPACITY,
};

/// Buffer capacity for diagnostic events, clamped to the configured bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a new buffer capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(
            MIN_DIAGNOSTICS_BUFFER_CAPACITY,
            MAX_DIAGNOSTICS_BUFFER_CAPACITY,
        ))
    }

    /// Reads the capacity from the `[diagnostics]` config section.
    #[must_use]
    pub fn from_config(config: &crate::config::DiagnosticsConfig) -> Self {
        config.buffer_capacity.map_or_else(Self::default, Self::new)
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
    }
}

/// A generic circular buffer with fixed capacity.
///
/// When the buffer is full, pushing a new element evicts the oldest one.
/// Elements are stored in chronological order (oldest first).
///
/// # Example
///
/// ```
/// use iced_snack::diagnostics::{BufferCapacity, CircularBuffer};
///
/// let mut buffer: CircularBuffer<i32> = CircularBuffer::new(BufferCapacity::default());
///
/// buffer.push(1);
/// buffer.push(2);
/// buffer.push(3);
///
/// let items: Vec<_> = buffer.iter().copied().collect();
/// assert_eq!(items, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let capacity = capacity.value();
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes an element to the buffer, evicting the oldest if at capacity.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Returns an iterator over the elements in chronological order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiagnosticsConfig;

    #[test]
    fn buffer_capacity_clamps_to_valid_range() {
        assert_eq!(BufferCapacity::new(0).value(), MIN_DIAGNOSTICS_BUFFER_CAPACITY);
        assert_eq!(
            BufferCapacity::new(100_000).value(),
            MAX_DIAGNOSTICS_BUFFER_CAPACITY
        );
        assert_eq!(BufferCapacity::new(1000).value(), 1000);
    }

    #[test]
    fn buffer_capacity_reads_config() {
        let unset = DiagnosticsConfig::default();
        let set = DiagnosticsConfig {
            buffer_capacity: Some(42),
        };

        assert_eq!(BufferCapacity::from_config(&unset), BufferCapacity::default());
        assert_eq!(BufferCapacity::from_config(&set).value(), 42);
    }

    #[test]
    fn circular_buffer_overflow_evicts_oldest() {
        let capacity = MIN_DIAGNOSTICS_BUFFER_CAPACITY;
        let mut buffer: CircularBuffer<usize> = CircularBuffer::new(BufferCapacity::new(capacity));

        for i in 0..capacity + 2 {
            buffer.push(i);
        }

        assert_eq!(buffer.len(), capacity);
        assert_eq!(buffer.iter().next(), Some(&2));
        assert_eq!(buffer.iter().last(), Some(&(capacity + 1)));
    }

    #[test]
    fn circular_buffer_starts_empty() {
        let buffer: CircularBuffer<u8> = CircularBuffer::new(BufferCapacity::default());
        assert!(buffer.is_empty());
    }
}
