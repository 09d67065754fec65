//! Waiting queue
//!
//! FIFO of client names with O(1) membership test and O(1) removal of any
//! member.
//!
//! Entries carry a ticket number. The membership map holds the live ticket
//! for each name, so removing a member only drops its map entry; the stale
//! entry left in the deque is skipped (and discarded) when it reaches the
//! front. A removal that leaves more stale entries than live ones compacts
//! the deque, so its size stays proportional to the live members and both
//! `pop_front` and `remove` stay amortized O(1).

use std::collections::{HashMap, VecDeque};

#[derive(Debug, Clone, Default)]
pub struct WaitingQueue {
    entries: VecDeque<(u64, String)>,
    /// name -> live ticket
    members: HashMap<String, u64>,
    next_ticket: u64,
}

impl WaitingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of clients waiting
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    /// Append `name`. Returns `false` (and keeps its position) if already queued.
    pub fn push_back(&mut self, name: &str) -> bool {
        if self.members.contains_key(name) {
            return false;
        }
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.members.insert(name.to_string(), ticket);
        self.entries.push_back((ticket, name.to_string()));
        true
    }

    /// Take the longest-waiting client
    pub fn pop_front(&mut self) -> Option<String> {
        while let Some((ticket, name)) = self.entries.pop_front() {
            if self.is_live(ticket, &name) {
                self.members.remove(&name);
                return Some(name);
            }
        }
        None
    }

    /// Remove `name` wherever it is. Returns `false` if it was not queued.
    pub fn remove(&mut self, name: &str) -> bool {
        let removed = self.members.remove(name).is_some();
        if self.entries.len() > 2 * self.members.len() {
            self.compact();
        }
        removed
    }

    /// Live names, front first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(ticket, name)| self.is_live(*ticket, name))
            .map(|(_, name)| name.as_str())
    }

    fn is_live(&self, ticket: u64, name: &str) -> bool {
        self.members.get(name) == Some(&ticket)
    }

    /// Drop every stale entry. Afterwards `entries.len() == members.len()`.
    fn compact(&mut self) {
        let members = &self.members;
        self.entries
            .retain(|(ticket, name)| members.get(name) == Some(ticket));
    }
}
