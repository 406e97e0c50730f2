use std::num::NonZeroUsize;

/// Fixed-capacity ring of per-tick hit totals.
///
/// Writes overwrite the oldest slot once the ring wraps. `write_count` keeps
/// counting past the capacity and only gates [`RateWindow::is_full`].
#[derive(Debug, Clone)]
pub struct RateWindow {
    slots: Vec<u64>,
    cursor: usize,
    write_count: u64,
}

impl RateWindow {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            slots: vec![0; capacity.get()],
            cursor: 0,
            write_count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn write_count(&self) -> u64 {
        self.write_count
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn slots(&self) -> &[u64] {
        &self.slots
    }

    pub fn push(&mut self, value: u64) {
        self.slots[self.cursor] = value;
        self.cursor = (self.cursor + 1) % self.slots.len();
        self.write_count = self.write_count.saturating_add(1);
    }

    /// Move the write cursor to `pos` (wrapped). Slots and write count are untouched.
    pub fn seek(&mut self, pos: usize) {
        self.cursor = pos % self.slots.len();
    }

    pub fn clear(&mut self) {
        self.slots.fill(0);
        self.cursor = 0;
        self.write_count = 0;
    }

    pub fn is_full(&self) -> bool {
        self.write_count >= self.slots.len() as u64
    }

    /// Floor of the mean over every slot, defined only once the window is full.
    pub fn average(&self) -> Option<u64> {
        if !self.is_full() {
            return None;
        }

        let total: u128 = self.slots.iter().map(|v| u128::from(*v)).sum();
        Some((total / self.slots.len() as u128) as u64)
    }
}
