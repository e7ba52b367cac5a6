//! Which item, if any, is selected as the trim target.

use tracing::trace;

/// Single-item selection over the virtualized row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemSelection {
    selected: Option<usize>,
}

impl ItemSelection {
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    pub fn select(&mut self, index: usize) {
        trace!(index, "Item selected");
        self.selected = Some(index);
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Handle a tap: `hit` is the item under the pointer. Tapping empty
    /// space clears the selection. Returns true when the selection changed.
    pub fn tap(&mut self, hit: Option<usize>) -> bool {
        match hit {
            Some(index) if self.selected != Some(index) => {
                self.select(index);
                true
            }
            Some(_) => false,
            None => self.selected.take().is_some(),
        }
    }

    /// Drop a selection that no longer points at an existing item.
    pub fn retain_within(&mut self, item_count: usize) {
        if self.selected.is_some_and(|i| i >= item_count) {
            self.selected = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tap_selects_and_clears() {
        let mut selection = ItemSelection::default();
        assert!(selection.tap(Some(2)));
        assert!(selection.is_selected(2));
        assert!(!selection.tap(Some(2)));
        assert!(selection.tap(None));
        assert_eq!(selection.selected(), None);
        assert!(!selection.tap(None));
    }

    #[test]
    fn test_retain_within_drops_removed_item() {
        let mut selection = ItemSelection::default();
        selection.select(4);
        selection.retain_within(5);
        assert_eq!(selection.selected(), Some(4));
        selection.retain_within(3);
        assert_eq!(selection.selected(), None);
    }
}
