//! Per-node message inboxes keyed by sender

use crate::spatial::NodeId;
use ndarray::Array1;

/// Dense score vector with one entry per candidate label
pub type Message = Array1<f64>;

/// Per-node inbox mapping each neighbour to the last message it sent
///
/// Entries are kept sorted by neighbour id so that iteration, and therefore
/// every product taken over the inbox, follows a fixed order. A node owns
/// its store exclusively; messages are never shared between nodes.
#[derive(Clone, Debug, Default)]
pub struct MessageStore {
    entries: Vec<(NodeId, Message)>,
}

impl MessageStore {
    /// Create an empty inbox
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Store `message` as the latest one from `from`, replacing any previous entry
    pub fn insert(&mut self, from: NodeId, message: Message) {
        match self.entries.binary_search_by_key(&from, |(id, _)| *id) {
            Ok(position) => {
                if let Some(entry) = self.entries.get_mut(position) {
                    entry.1 = message;
                }
            }
            Err(position) => self.entries.insert(position, (from, message)),
        }
    }

    /// Latest message received from `from`
    pub fn get(&self, from: NodeId) -> Option<&Message> {
        self.entries
            .binary_search_by_key(&from, |(id, _)| *id)
            .ok()
            .and_then(|position| self.entries.get(position))
            .map(|(_, message)| message)
    }

    /// Test whether a message from `from` has been received
    pub fn contains(&self, from: NodeId) -> bool {
        self.get(from).is_some()
    }

    /// Iterate `(sender, message)` pairs in ascending sender order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Message)> {
        self.entries.iter().map(|(id, message)| (*id, message))
    }

    /// Number of stored messages
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Test if no messages have been received
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
