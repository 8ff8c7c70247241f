//! Host-side timer queue model.
//!
//! The reveal engine never sleeps. It asks a [`TimerQueue`] to deliver a
//! [`TimerToken`] at a deadline and the host hands the token back once the
//! deadline passes. Tokens outlive cancellation: a token issued before a
//! `cancel()` still fires, and the engine drops it on a generation mismatch.

use heapless::Vec;
use log::warn;

/// Generation-stamped handle delivered back to the engine when its timer fires.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimerToken {
    pub generation: u32,
}

/// Destination for scheduled engine steps.
pub trait TimerQueue {
    /// Deliver `token` once the clock reaches `due_ms`.
    fn schedule(&mut self, due_ms: u64, token: TimerToken);
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    due_ms: u64,
    seq: u32,
    token: TimerToken,
}

/// Bounded, time-ordered timer queue for a single engine.
#[derive(Debug)]
pub struct TimerWheel<const N: usize> {
    entries: Vec<Entry, N>,
    next_seq: u32,
}

impl<const N: usize> Default for TimerWheel<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> TimerWheel<N> {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Earliest pending deadline, stale tokens included.
    pub fn next_due(&self) -> Option<u64> {
        self.entries.iter().map(|entry| entry.due_ms).min()
    }

    /// Removes and returns the earliest token due at `now_ms`.
    ///
    /// Tokens sharing a deadline come out in scheduling order.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<TimerToken> {
        let position = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due_ms <= now_ms)
            .min_by_key(|(_, entry)| (entry.due_ms, entry.seq))
            .map(|(position, _)| position)?;

        Some(self.entries.swap_remove(position).token)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn evict_for(&mut self, incoming: TimerToken) {
        // Older generations can never match the engine again.
        let stale = self
            .entries
            .iter()
            .position(|entry| entry.token.generation < incoming.generation);
        if let Some(position) = stale {
            self.entries.swap_remove(position);
            return;
        }

        let latest = self
            .entries
            .iter()
            .enumerate()
            .max_by_key(|(_, entry)| (entry.due_ms, entry.seq))
            .map(|(position, _)| position);
        if let Some(position) = latest {
            let dropped = self.entries.swap_remove(position);
            warn!(
                "timer wheel full; dropped live token gen={} due_ms={}",
                dropped.token.generation, dropped.due_ms
            );
        }
    }
}

impl<const N: usize> TimerQueue for TimerWheel<N> {
    fn schedule(&mut self, due_ms: u64, token: TimerToken) {
        if self.entries.is_full() {
            self.evict_for(token);
        }

        let entry = Entry {
            due_ms,
            seq: self.next_seq,
            token,
        };
        self.next_seq = self.next_seq.wrapping_add(1);

        if self.entries.push(entry).is_err() {
            warn!("timer wheel has no capacity; token gen={} lost", token.generation);
        }
    }
}
