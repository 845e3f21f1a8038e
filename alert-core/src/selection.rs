use crate::contact::{Contact, ContactStore, SnapshotStore};

/// The set of contact ids currently chosen for a broadcast. Kept in toggle
/// order, which is also the order the dispatcher fans out in. Must never hold
/// an id the contact store no longer knows — removal goes through
/// `prune_missing`.
#[derive(Default)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: &str, selected: bool) {
        if selected {
            if !self.is_selected(id) {
                self.ids.push(id.to_string());
            }
        } else {
            self.ids.retain(|x| x != id);
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.iter().any(|x| x == id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Drop any selected id not in `valid_ids`. Called whenever the contact
    /// store changes.
    pub fn prune_missing<'a, I: Iterator<Item = &'a str>>(&mut self, valid_ids: I) {
        let valid: Vec<&str> = valid_ids.collect();
        self.ids.retain(|id| valid.contains(&id.as_str()));
    }

    /// Resolve the selection against the store, in toggle order.
    pub fn targets<'a, S: SnapshotStore>(&self, store: &'a ContactStore<S>) -> Vec<&'a Contact> {
        self.ids.iter().filter_map(|id| store.get(id)).collect()
    }
}
