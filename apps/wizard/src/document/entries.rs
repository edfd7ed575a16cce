//! List-section editor operations, shared by Education, Experience, Projects
//! and Certifications. Items are addressed by their stable id, never by
//! position, so display reordering cannot misdirect an edit.

use uuid::Uuid;

use crate::models::document::{
    CertificationEntry, EducationEntry, ExperienceEntry, ProjectEntry,
};

/// Implemented by every list-section entry so the editor operations can
/// address items uniformly.
pub trait SectionEntry {
    fn id(&self) -> Uuid;
}

impl SectionEntry for EducationEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl SectionEntry for ExperienceEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl SectionEntry for ProjectEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl SectionEntry for CertificationEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Applies a field mutation to the entry matching `id`. Returns false (and
/// touches nothing) when the id is not present.
pub fn update_entry<T: SectionEntry>(
    items: &mut [T],
    id: Uuid,
    apply: impl FnOnce(&mut T),
) -> bool {
    match items.iter_mut().find(|e| e.id() == id) {
        Some(entry) => {
            apply(entry);
            true
        }
        None => false,
    }
}

/// Removes the entry matching `id`. Returns whether anything was removed.
pub fn remove_entry<T: SectionEntry>(items: &mut Vec<T>, id: Uuid) -> bool {
    let before = items.len();
    items.retain(|e| e.id() != id);
    items.len() != before
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    /// Removal refused: education keeps at least one entry.
    LastEntryKept,
    NotFound,
}

/// Education removal with the minimum-length guard. Removing the sole
/// remaining entry is refused and the list is left untouched.
pub fn remove_education(items: &mut Vec<EducationEntry>, id: Uuid) -> RemoveOutcome {
    if !items.iter().any(|e| e.id == id) {
        return RemoveOutcome::NotFound;
    }
    if items.len() == 1 {
        return RemoveOutcome::LastEntryKept;
    }
    items.retain(|e| e.id != id);
    RemoveOutcome::Removed
}

/// Returns the id of the entry at a 1-based display position.
pub fn entry_id_at<T: SectionEntry>(items: &[T], position: usize) -> Option<Uuid> {
    position
        .checked_sub(1)
        .and_then(|i| items.get(i))
        .map(|e| e.id())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_entries() -> Vec<EducationEntry> {
        vec![EducationEntry::blank(), EducationEntry::blank()]
    }

    #[test]
    fn test_update_entry_applies_to_matching_id() {
        let mut items = two_entries();
        let target = items[1].id;
        let applied = update_entry(&mut items, target, |e| e.degree = "BSc CS".to_string());
        assert!(applied);
        assert_eq!(items[1].degree, "BSc CS");
        assert!(items[0].degree.is_empty());
    }

    #[test]
    fn test_update_entry_unknown_id_is_noop() {
        let mut items = two_entries();
        let snapshot = items.clone();
        let applied = update_entry(&mut items, Uuid::new_v4(), |e| {
            e.degree = "changed".to_string()
        });
        assert!(!applied);
        assert_eq!(items, snapshot);
    }

    #[test]
    fn test_remove_entry_by_id() {
        let mut items = two_entries();
        let target = items[0].id;
        assert!(remove_entry(&mut items, target));
        assert_eq!(items.len(), 1);
        assert_ne!(items[0].id, target);
    }

    #[test]
    fn test_remove_entry_unknown_id_is_noop() {
        let mut items = two_entries();
        assert!(!remove_entry(&mut items, Uuid::new_v4()));
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_remove_sole_education_entry_is_refused() {
        let mut items = vec![EducationEntry::blank()];
        let target = items[0].id;
        let snapshot = items.clone();
        assert_eq!(remove_education(&mut items, target), RemoveOutcome::LastEntryKept);
        assert_eq!(items, snapshot);
    }

    #[test]
    fn test_remove_education_above_one_succeeds() {
        let mut items = two_entries();
        let target = items[0].id;
        assert_eq!(remove_education(&mut items, target), RemoveOutcome::Removed);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_remove_education_unknown_id() {
        let mut items = two_entries();
        assert_eq!(
            remove_education(&mut items, Uuid::new_v4()),
            RemoveOutcome::NotFound
        );
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_education_length_invariant_under_add_remove_sequences() {
        let mut items = vec![EducationEntry::blank()];
        for _ in 0..5 {
            items.push(EducationEntry::blank());
            let first = items[0].id;
            remove_education(&mut items, first);
        }
        // Try to drain the list completely.
        loop {
            let first = items[0].id;
            if remove_education(&mut items, first) != RemoveOutcome::Removed {
                break;
            }
        }
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_entry_id_at_is_one_based() {
        let items = two_entries();
        assert_eq!(entry_id_at(&items, 1), Some(items[0].id));
        assert_eq!(entry_id_at(&items, 2), Some(items[1].id));
        assert_eq!(entry_id_at(&items, 0), None);
        assert_eq!(entry_id_at(&items, 3), None);
    }

    #[test]
    fn test_ids_survive_edits() {
        let mut items = two_entries();
        let ids: Vec<Uuid> = items.iter().map(|e| e.id).collect();
        update_entry(&mut items, ids[0], |e| e.institution = "MIT".to_string());
        update_entry(&mut items, ids[1], |e| e.year = "2024".to_string());
        assert_eq!(items.iter().map(|e| e.id).collect::<Vec<_>>(), ids);
    }
}
