//! Client registry (在场客户)
//!
//! A name is present iff the client has been admitted and has not yet left.

use shared::TableId;
use std::collections::HashMap;

/// Where a client in the club currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientStatus {
    /// In the club, not at a table, not queued
    Idle,
    /// In the waiting queue
    Waiting,
    /// At a table
    Seated(TableId),
}

impl ClientStatus {
    pub const fn table(&self) -> Option<TableId> {
        match self {
            ClientStatus::Seated(table) => Some(*table),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClientRegistry {
    clients: HashMap<String, ClientStatus>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` as idle. Returns `false` if already present.
    pub fn admit(&mut self, name: &str) -> bool {
        if self.clients.contains_key(name) {
            return false;
        }
        self.clients.insert(name.to_string(), ClientStatus::Idle);
        true
    }

    pub fn status(&self, name: &str) -> Option<ClientStatus> {
        self.clients.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.clients.contains_key(name)
    }

    /// Update the status of a present client; absent names are ignored
    pub fn set_status(&mut self, name: &str, status: ClientStatus) {
        if let Some(current) = self.clients.get_mut(name) {
            *current = status;
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<ClientStatus> {
        self.clients.remove(name)
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Client currently seated at `table`
    pub fn seated_at(&self, table: TableId) -> Option<&str> {
        self.clients
            .iter()
            .find(|(_, status)| status.table() == Some(table))
            .map(|(name, _)| name.as_str())
    }

    /// Names in lexicographic order
    pub fn sorted_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.clients.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ClientStatus)> {
        self.clients.iter().map(|(name, status)| (name.as_str(), *status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admit_once() {
        let mut clients = ClientRegistry::new();
        assert!(clients.admit("client1"));
        assert!(!clients.admit("client1"));
        assert_eq!(clients.len(), 1);
        assert_eq!(clients.status("client1"), Some(ClientStatus::Idle));
    }

    #[test]
    fn test_set_status_ignores_unknown() {
        let mut clients = ClientRegistry::new();
        let table = TableId::new(1).unwrap();
        clients.set_status("ghost", ClientStatus::Seated(table));
        assert!(clients.is_empty());
        assert_eq!(clients.seated_at(table), None);
    }

    #[test]
    fn test_seated_at() {
        let mut clients = ClientRegistry::new();
        let table = TableId::new(2).unwrap();
        clients.admit("alice");
        clients.admit("bob");
        clients.set_status("bob", ClientStatus::Seated(table));
        assert_eq!(clients.seated_at(table), Some("bob"));
        assert_eq!(clients.status("alice").and_then(|s| s.table()), None);
    }

    #[test]
    fn test_sorted_names() {
        let mut clients = ClientRegistry::new();
        for name in ["zed", "client2", "client10", "a-b"] {
            clients.admit(name);
        }
        assert_eq!(
            clients.sorted_names(),
            vec!["a-b", "client10", "client2", "zed"]
        );
    }

    #[test]
    fn test_remove() {
        let mut clients = ClientRegistry::new();
        clients.admit("client1");
        clients.set_status("client1", ClientStatus::Waiting);
        assert_eq!(clients.remove("client1"), Some(ClientStatus::Waiting));
        assert_eq!(clients.remove("client1"), None);
        assert!(!clients.contains("client1"));
    }
}
