//! Ordered clause templates plus the shared draft/edit buffer.
//!
//! One draft buffer backs both the add flow and the edit flow, mirroring a
//! single input surface: `begin_edit` loads a clause into the draft, `save`
//! commits it, `add` appends it. Clause identity is positional; deleting or
//! reordering shifts the numbering of everything after it.

use serde::{Deserialize, Serialize};

/// Ordered clause-template list with session editing state.
///
/// Serializes as a plain string array; the draft buffer and editing index
/// are session state and never persisted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClauseList {
    clauses: Vec<String>,
    #[serde(skip)]
    editing: Option<usize>,
    #[serde(skip)]
    draft: String,
}

impl ClauseList {
    /// Build a list from clause templates, with no editing in progress.
    pub fn from_templates<I, S>(templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            clauses: templates.into_iter().map(Into::into).collect(),
            editing: None,
            draft: String::new(),
        }
    }

    /// Clause templates in numbering order.
    pub fn clauses(&self) -> &[String] {
        &self.clauses
    }

    /// Clause template at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.clauses.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Current draft buffer contents.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Index currently loaded for editing, if any.
    pub fn editing(&self) -> Option<usize> {
        self.editing
    }

    /// Overwrite the draft buffer.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Append the draft as a new clause.
    ///
    /// Rejected when the draft is empty after trimming; on success the draft
    /// is cleared. The trimmed check applies only here, not to `save`.
    pub fn add(&mut self) -> bool {
        if self.draft.trim().is_empty() {
            return false;
        }
        self.clauses.push(core::mem::take(&mut self.draft));
        true
    }

    /// Load the clause at `index` into the draft buffer for editing.
    ///
    /// Out-of-range indices are a no-op.
    pub fn begin_edit(&mut self, index: usize) -> bool {
        let Some(clause) = self.clauses.get(index) else {
            return false;
        };
        self.draft = clause.clone();
        self.editing = Some(index);
        true
    }

    /// Commit the draft buffer to the clause being edited.
    ///
    /// Clears the editing state and the draft. Unlike `add`, no emptiness
    /// check applies. Returns `false` when no edit is in progress.
    pub fn save(&mut self) -> bool {
        let Some(index) = self.editing.take() else {
            return false;
        };
        match self.clauses.get_mut(index) {
            Some(slot) => {
                *slot = core::mem::take(&mut self.draft);
                true
            }
            None => {
                self.draft.clear();
                false
            }
        }
    }

    /// Remove the clause at `index`, shifting subsequent indices down.
    pub fn delete(&mut self, index: usize) -> bool {
        if index >= self.clauses.len() {
            return false;
        }
        self.clauses.remove(index);
        // An in-flight edit of the removed clause is abandoned.
        match self.editing {
            Some(editing) if editing == index => {
                self.editing = None;
                self.draft.clear();
            }
            Some(editing) if editing > index => {
                self.editing = Some(editing - 1);
            }
            _ => {}
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rejects_whitespace_only_draft() {
        let mut list = ClauseList::default();
        list.set_draft("   \t ");
        assert!(!list.add());
        assert!(list.is_empty());

        list.set_draft("Cláusula nova");
        assert!(list.add());
        assert_eq!(list.clauses(), ["Cláusula nova"]);
        assert_eq!(list.draft(), "");
    }

    #[test]
    fn edit_save_flow_commits_without_validation() {
        let mut list = ClauseList::from_templates(["a", "b"]);
        assert!(list.begin_edit(1));
        assert_eq!(list.draft(), "b");
        list.set_draft("");
        assert!(list.save());
        // Save accepts an empty replacement; only add validates emptiness.
        assert_eq!(list.clauses(), ["a", ""]);
        assert_eq!(list.editing(), None);
    }

    #[test]
    fn begin_edit_out_of_range_is_noop() {
        let mut list = ClauseList::from_templates(["a"]);
        assert!(!list.begin_edit(5));
        assert_eq!(list.editing(), None);
        assert!(!list.save());
    }

    #[test]
    fn delete_shifts_following_indices() {
        let mut list = ClauseList::from_templates(["a", "b", "c"]);
        assert!(list.delete(0));
        assert_eq!(list.clauses(), ["b", "c"]);
        assert!(!list.delete(7));
    }

    #[test]
    fn delete_tracks_in_flight_edit() {
        let mut list = ClauseList::from_templates(["a", "b", "c"]);
        list.begin_edit(2);
        list.delete(0);
        assert_eq!(list.editing(), Some(1));
        list.set_draft("c2");
        assert!(list.save());
        assert_eq!(list.clauses(), ["b", "c2"]);

        let mut list = ClauseList::from_templates(["a", "b"]);
        list.begin_edit(1);
        list.delete(1);
        assert_eq!(list.editing(), None);
        assert!(!list.save());
    }
}
