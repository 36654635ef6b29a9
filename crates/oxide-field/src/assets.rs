//! Script registration for fields that need client-side assets.

use tracing::trace;

/// Receives script identifiers to be emitted with the page.
pub trait AssetRegistry {
    /// Queues a script for output.
    fn enqueue(&mut self, script: &str);
}

/// In-memory registry keeping scripts in first-enqueued order, without
/// duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetQueue {
    scripts: Vec<String>,
}

impl AssetQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the queued scripts.
    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }

    /// Returns whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    /// Returns the number of queued scripts.
    pub fn len(&self) -> usize {
        self.scripts.len()
    }
}

impl AssetRegistry for AssetQueue {
    fn enqueue(&mut self, script: &str) {
        if self.scripts.iter().any(|s| s == script) {
            trace!(script, "Script already queued");
            return;
        }
        self.scripts.push(script.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_deduplicates() {
        let mut queue = AssetQueue::new();
        assert!(queue.is_empty());
        queue.enqueue("datepicker");
        queue.enqueue("select2");
        queue.enqueue("datepicker");
        assert_eq!(queue.scripts(), ["datepicker", "select2"]);
        assert_eq!(queue.len(), 2);
        assert!(!queue.is_empty());
    }
}
