//! Draft and applied filter criteria.

use crate::search::FilterCriteria;
use serde::{Deserialize, Serialize};

/// The filter panel's two copies of the criteria.
///
/// `draft` is what the user is editing; `applied` is what the catalog view
/// uses. The draft only reaches `applied` through [`FilterPanel::commit`] and
/// is thrown away by [`FilterPanel::discard`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterPanel {
    draft: FilterCriteria,
    applied: FilterCriteria,
    open: bool,
}

impl FilterPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the panel, starting the draft from the applied values.
    pub fn open(&mut self) {
        self.draft = self.applied.clone();
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> &FilterCriteria {
        &self.draft
    }

    pub fn applied(&self) -> &FilterCriteria {
        &self.applied
    }

    pub fn set_draft_min_price(&mut self, text: impl Into<String>) {
        self.draft.min_price = text.into();
    }

    pub fn set_draft_max_price(&mut self, text: impl Into<String>) {
        self.draft.max_price = text.into();
    }

    pub fn set_draft_min_rating(&mut self, min_rating: f64) {
        self.draft.min_rating = min_rating;
    }

    /// Clear the draft back to defaults. Applied values are untouched.
    pub fn reset_draft(&mut self) {
        self.draft = FilterCriteria::default();
    }

    /// Copy the draft into the applied criteria and close the panel.
    ///
    /// Returns `true` when the applied criteria changed.
    pub fn commit(&mut self) -> bool {
        let changed = self.draft != self.applied;
        self.applied = self.draft.clone();
        self.open = false;
        changed
    }

    /// Revert the draft to the applied criteria and close the panel.
    pub fn discard(&mut self) {
        self.draft = self.applied.clone();
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_edits_do_not_touch_applied() {
        let mut panel = FilterPanel::new();
        panel.open();
        panel.set_draft_min_price("10");
        panel.set_draft_min_rating(3.0);

        assert_eq!(panel.applied(), &FilterCriteria::default());
        assert_eq!(panel.draft().min_price, "10");
    }

    #[test]
    fn test_commit_copies_draft() {
        let mut panel = FilterPanel::new();
        panel.open();
        panel.set_draft_max_price("99");

        assert!(panel.commit());
        assert!(!panel.is_open());
        assert_eq!(panel.applied().max_price, "99");
        assert!(!panel.commit());
    }

    #[test]
    fn test_discard_reverts_draft() {
        let mut panel = FilterPanel::new();
        panel.open();
        panel.set_draft_min_price("5");
        panel.commit();

        panel.open();
        panel.set_draft_min_price("500");
        panel.discard();

        assert_eq!(panel.draft().min_price, "5");
        assert_eq!(panel.applied().min_price, "5");
    }

    #[test]
    fn test_reset_draft_keeps_applied() {
        let mut panel = FilterPanel::new();
        panel.open();
        panel.set_draft_min_rating(4.0);
        panel.commit();

        panel.open();
        panel.reset_draft();
        assert_eq!(panel.draft(), &FilterCriteria::default());
        assert_eq!(panel.applied().min_rating, 4.0);
    }

    #[test]
    fn test_open_starts_from_applied() {
        let mut panel = FilterPanel::new();
        panel.open();
        panel.set_draft_min_price("1");
        panel.commit();

        panel.open();
        assert_eq!(panel.draft(), panel.applied());
    }
}
