//! # Post-Commit Effects
//!
//! Some reactions to an event can only run once the host has rendered the
//! result of that event, such as focusing an input that was hidden until the
//! render. Components push those reactions into an [`EffectQueue`] while
//! handling the event and drain it when the host reports the commit.

use std::collections::VecDeque;

/// Maximum number of effects kept between two commits.
///
/// A host that never commits would otherwise let the queue grow without
/// bound; the oldest effects are dropped first since later ones supersede
/// them.
const KEEP_EFFECTS_COUNT: usize = 16;

/// A FIFO queue of effects waiting for the next commit.
#[derive(Debug)]
pub struct EffectQueue<E> {
    pending: VecDeque<E>,
}

impl<E> EffectQueue<E> {
    /// An empty queue.
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }

    /// Schedules `effect` for the next commit.
    pub fn push(&mut self, effect: E) {
        self.pending.push_back(effect);
        if self.pending.len() > KEEP_EFFECTS_COUNT {
            self.pending.pop_front();
            tracing::trace!("effect queue full, dropped oldest effect");
        }
    }

    /// Removes and returns all pending effects, oldest first.
    pub fn take(&mut self) -> Vec<E> {
        self.pending.drain(..).collect()
    }

    /// Number of pending effects.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<E> Default for EffectQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}
