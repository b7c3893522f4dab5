//! Pooled entity store for high-churn entities.
//!
//! Slot vector plus free-list: `acquire` reuses a released slot in O(1) or
//! allocates a fresh one when the pool is drained (starvation is not an
//! error). `release` is the only way a slot leaves the active set and is a
//! silent no-op on slots that are not active. Handles are plain indices;
//! acquire/release is the sole lifecycle boundary, so no slot is ever
//! reachable through two active handles.

use skyburst_core::components::{Particle, PlayerShot};

/// Restore a slot to its spawn defaults: liveness true, age zero,
/// type-specific fields reset.
pub trait Reset {
    fn reset(&mut self);
}

impl Reset for PlayerShot {
    fn reset(&mut self) {
        self.reset_to_defaults();
    }
}

impl Reset for Particle {
    fn reset(&mut self) {
        self.reset_to_defaults();
    }
}

/// Generic object pool over `T`.
pub struct Pool<T> {
    slots: Vec<T>,
    active: Vec<bool>,
    free: Vec<usize>,
}

impl<T: Default + Reset> Pool<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            active: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Pre-allocate `capacity` slots on the free list.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut pool = Self {
            slots: Vec::with_capacity(capacity),
            active: Vec::with_capacity(capacity),
            free: Vec::with_capacity(capacity),
        };
        for i in 0..capacity {
            pool.slots.push(T::default());
            pool.active.push(false);
            pool.free.push(i);
        }
        pool
    }

    /// Get a ready-to-use slot, reusing a released one when available.
    pub fn acquire(&mut self) -> usize {
        let idx = match self.free.pop() {
            Some(i) => i,
            None => {
                self.slots.push(T::default());
                self.active.push(false);
                self.slots.len() - 1
            }
        };
        self.slots[idx].reset();
        self.active[idx] = true;
        idx
    }

    /// Return a slot to the free list. No-op if the slot is not active.
    pub fn release(&mut self, idx: usize) {
        if idx < self.active.len() && self.active[idx] {
            self.active[idx] = false;
            self.free.push(idx);
        }
    }

    /// Drain the entire active set.
    pub fn release_all(&mut self) {
        for idx in 0..self.active.len() {
            self.release(idx);
        }
    }

    /// Release every active slot matching the predicate.
    pub fn release_where(&mut self, pred: impl Fn(&T) -> bool) {
        for idx in 0..self.active.len() {
            if self.active[idx] && pred(&self.slots[idx]) {
                self.release(idx);
            }
        }
    }

    pub fn get(&self, idx: usize) -> Option<&T> {
        if idx < self.active.len() && self.active[idx] {
            Some(&self.slots[idx])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        if idx < self.active.len() && self.active[idx] {
            Some(&mut self.slots[idx])
        } else {
            None
        }
    }

    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(i, _)| self.active[*i])
    }

    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> {
        let active = &self.active;
        self.slots
            .iter_mut()
            .enumerate()
            .filter(move |(i, _)| active[*i])
    }

    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|&&a| a).count()
    }

    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Total slots ever allocated.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl<T: Default + Reset> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}
