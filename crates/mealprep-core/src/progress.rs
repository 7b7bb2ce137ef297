//! Checked/total counters

use crate::domain::Checkable;

/// How many entries of a collection are done
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub checked: usize,
    pub total: usize,
}

impl Progress {
    pub fn of<'a, T, I>(items: I) -> Self
    where
        T: Checkable + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        items.into_iter().fold(Progress::default(), |acc, item| Progress {
            checked: acc.checked + usize::from(item.is_done()),
            total: acc.total + 1,
        })
    }

    /// Rounded percentage, `None` for an empty collection.
    ///
    /// Never reports 100 while anything is left unchecked.
    pub fn percent(&self) -> Option<u8> {
        if self.total == 0 {
            return None;
        }
        if self.is_complete() {
            return Some(100);
        }
        // widened so large counts cannot overflow
        let (checked, total) = (self.checked as u128, self.total as u128);
        let rounded = (checked * 200 + total) / (total * 2);
        Some(rounded.min(99) as u8)
    }

    /// Exact fraction for progress bar widths, `0.0` when empty
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.checked as f64 / self.total as f64
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.checked == self.total
    }

    /// Counter text, e.g. "3/12"
    pub fn label(&self) -> String {
        format!("{}/{}", self.checked, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress(checked: usize, total: usize) -> Progress {
        Progress { checked, total }
    }

    #[test]
    fn test_empty_has_no_percent() {
        assert_eq!(progress(0, 0).percent(), None);
        assert_eq!(progress(0, 0).ratio(), 0.0);
        assert!(!progress(0, 0).is_complete());
    }

    #[test]
    fn test_percent_rounds_half_up() {
        assert_eq!(progress(1, 2).percent(), Some(50));
        assert_eq!(progress(1, 3).percent(), Some(33));
        assert_eq!(progress(2, 3).percent(), Some(67));
        assert_eq!(progress(1, 8).percent(), Some(13));
    }

    #[test]
    fn test_percent_only_hits_100_when_done() {
        assert_eq!(progress(199, 200).percent(), Some(99));
        assert_eq!(progress(200, 200).percent(), Some(100));
    }

    #[test]
    fn test_percent_handles_huge_counts() {
        assert_eq!(progress(usize::MAX / 2, usize::MAX).percent(), Some(50));
        assert_eq!(progress(usize::MAX - 1, usize::MAX).percent(), Some(99));
        assert_eq!(progress(usize::MAX, usize::MAX).percent(), Some(100));
        assert!(progress(usize::MAX, usize::MAX).is_complete());
    }

    #[test]
    fn test_label() {
        assert_eq!(progress(3, 12).label(), "3/12");
    }
}
