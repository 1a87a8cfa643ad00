use std::collections::BTreeSet;

/// Indices of the FAQ entries currently expanded. Any number can be open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqToggleSet {
    expanded: BTreeSet<usize>,
}

impl FaqToggleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapses `index` if it is open, expands it otherwise.
    pub fn toggle(&mut self, index: usize) {
        if !self.expanded.remove(&index) {
            self.expanded.insert(index);
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    pub fn clear(&mut self) {
        self.expanded.clear();
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.expanded.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed() {
        let faqs = FaqToggleSet::new();
        assert!(faqs.is_empty());
        for index in 0..8 {
            assert!(!faqs.is_expanded(index));
        }
    }

    #[test]
    fn toggle_twice_collapses_again() {
        let mut faqs = FaqToggleSet::new();
        faqs.toggle(1);
        assert!(faqs.is_expanded(1));
        assert!(!faqs.is_expanded(0));

        faqs.toggle(1);
        assert!(!faqs.is_expanded(1));
        assert!(faqs.is_empty());
    }

    #[test]
    fn parity_decides_state() {
        let mut faqs = FaqToggleSet::new();
        for count in 1..=7 {
            faqs.toggle(2);
            assert_eq!(faqs.is_expanded(2), count % 2 == 1);
        }
    }

    #[test]
    fn entries_are_independent() {
        let mut faqs = FaqToggleSet::new();
        faqs.toggle(0);
        faqs.toggle(2);
        assert_eq!(faqs.iter().collect::<Vec<_>>(), vec![0, 2]);

        faqs.toggle(2);
        assert!(faqs.is_expanded(0));
        assert!(!faqs.is_expanded(1));
        assert_eq!(faqs.len(), 1);
    }

    #[test]
    fn clear_collapses_everything() {
        let mut faqs = FaqToggleSet::new();
        faqs.toggle(0);
        faqs.toggle(1);
        faqs.clear();
        assert_eq!(faqs, FaqToggleSet::default());
    }
}
