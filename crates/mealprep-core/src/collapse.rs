//! Collapsed cards of a single tab instance. Never persisted.

use std::collections::HashSet;

/// Ids of collapsed prep steps or meals; anything absent is expanded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollapseSet {
    collapsed: HashSet<String>,
}

impl CollapseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse `id` if expanded, expand it if collapsed
    pub fn toggle(&mut self, id: &str) {
        if !self.collapsed.remove(id) {
            self.collapsed.insert(id.to_string());
        }
    }

    pub fn is_collapsed(&self, id: &str) -> bool {
        self.collapsed.contains(id)
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        !self.is_collapsed(id)
    }

    pub fn len(&self) -> usize {
        self.collapsed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collapsed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_expanded() {
        let set = CollapseSet::new();
        assert!(set.is_expanded("step-1"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_toggle_flips_only_that_id() {
        let mut set = CollapseSet::new();
        set.toggle("step-1");
        assert!(set.is_collapsed("step-1"));
        assert!(set.is_expanded("step-2"));

        set.toggle("step-1");
        assert!(set.is_expanded("step-1"));
        assert_eq!(set.len(), 0);
    }
}
