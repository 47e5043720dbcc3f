//! Persons shown on the dashboard.
//!
//! The server renders the list once per page load. After a successful delete
//! the browser drops the row itself (the `remove_from_list` effect), which is
//! what [`PersonsList::remove`] models server-side.

use pipechat_types::crm::{Person, PersonId};

/// Persons currently shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonsList {
    persons: Vec<Person>,
}

impl PersonsList {
    pub fn new(persons: Vec<Person>) -> Self {
        Self { persons }
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Drop every entry with `id`. Returns how many were removed.
    pub fn remove(&mut self, id: PersonId) -> usize {
        let before = self.persons.len();
        self.persons.retain(|p| p.id != id);
        before - self.persons.len()
    }
}

impl From<Vec<Person>> for PersonsList {
    fn from(persons: Vec<Person>) -> Self {
        Self::new(persons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::fixtures::person;

    #[test]
    fn test_remove_only_matching_id() {
        let mut list = PersonsList::new(vec![
            person(1, true, 0, 0, 0),
            person(2, true, 0, 0, 0),
            person(3, false, 0, 0, 0),
        ]);

        assert_eq!(list.remove(2), 1);
        let ids: Vec<_> = list.persons().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut list = PersonsList::new(vec![person(1, true, 0, 0, 0)]);
        assert_eq!(list.remove(42), 0);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_last_entry_leaves_empty_list() {
        let mut list = PersonsList::from(vec![person(7, true, 0, 0, 0)]);
        list.remove(7);
        assert!(list.is_empty());
    }
}
