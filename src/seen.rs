// src/seen.rs
//! # Seen set
//! Bounded FIFO of recently delivered question ids.
//!
//! The newest ids live at the back; once the ring is full, every insert
//! evicts the id at the front.

use std::collections::VecDeque;

pub const DEFAULT_SEEN_CAPACITY: usize = 20;

#[derive(Debug, Clone)]
pub struct SeenSet {
    buf: VecDeque<u64>,
    cap: usize,
}

impl SeenSet {
    /// Ring with the default capacity of 20 ids.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_SEEN_CAPACITY)
    }

    /// `cap` of 0 is treated as 1.
    pub fn with_capacity(cap: usize) -> Self {
        let cap = cap.max(1);
        Self {
            buf: VecDeque::with_capacity(cap),
            cap,
        }
    }

    pub fn contains(&self, id: u64) -> bool {
        self.buf.contains(&id)
    }

    /// Push `id` to the back. Returns the evicted id when the ring was full.
    ///
    /// Does not check membership; callers filter with [`SeenSet::contains`] first.
    pub fn insert(&mut self, id: u64) -> Option<u64> {
        let evicted = if self.buf.len() == self.cap {
            self.buf.pop_front()
        } else {
            None
        };
        self.buf.push_back(id);
        evicted
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.buf.iter().copied()
    }
}

impl Default for SeenSet {
    fn default() -> Self {
        Self::new()
    }
}
