use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use uuid::Uuid;

use crate::selection::Selection;

const MAX_CONTACTS: usize = 50;

/// One broadcast target. An empty phone means "let the user pick the
/// recipient inside the messaging app".
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: String,
}

/// Where the contact list is persisted. The store writes the whole snapshot
/// on every mutation and reads it once at construction.
pub trait SnapshotStore {
    fn read(&self) -> Option<String>;
    fn write(&mut self, snapshot: &str) -> Result<(), String>;
}

/// Default targets used when no snapshot exists yet.
fn seed_contacts() -> Vec<Contact> {
    vec![
        Contact {
            id: "1".to_string(),
            name: "A+ Donors Group".to_string(),
            phone: String::new(),
        },
        Contact {
            id: "2".to_string(),
            name: "Ravi Kumar".to_string(),
            phone: "+919876543210".to_string(),
        },
        Contact {
            id: "3".to_string(),
            name: "BloodBank Madurai".to_string(),
            phone: "+914524001234".to_string(),
        },
    ]
}

pub struct ContactStore<S: SnapshotStore> {
    contacts: Vec<Contact>,
    snapshot: S,
}

impl<S: SnapshotStore> ContactStore<S> {
    /// Read the persisted snapshot through the port. A missing or malformed
    /// snapshot silently falls back to the seed list — the two cases are
    /// indistinguishable on purpose.
    pub fn load(snapshot: S) -> Self {
        let contacts = match snapshot.read() {
            Some(raw) => match serde_json::from_str::<Vec<Contact>>(&raw) {
                Ok(contacts) => contacts,
                Err(e) => {
                    warn!("contact snapshot unreadable, using seed list: {e}");
                    seed_contacts()
                }
            },
            None => seed_contacts(),
        };
        Self { contacts, snapshot }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Append a contact with a fresh id. Rejected (returns false) when the
    /// trimmed name is empty or the store is full. Persists on success.
    pub fn add(&mut self, name: &str, phone: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contacts.len() >= MAX_CONTACTS {
            return false;
        }
        self.contacts.push(Contact {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            phone: phone.trim().to_string(),
        });
        self.persist();
        true
    }

    /// Remove a contact by id, pruning it from the selection in the same
    /// operation so the selection never holds a dangling id. Absent ids are
    /// a no-op.
    pub fn remove(&mut self, id: &str, selection: &mut Selection) {
        let before = self.contacts.len();
        self.contacts.retain(|c| c.id != id);
        if self.contacts.len() == before {
            return;
        }
        selection.prune_missing(self.contacts.iter().map(|c| c.id.as_str()));
        self.persist();
    }

    fn persist(&mut self) {
        let raw = match serde_json::to_string(&self.contacts) {
            Ok(raw) => raw,
            Err(e) => {
                error!("failed to serialize contacts: {e}");
                return;
            }
        };
        if let Err(e) = self.snapshot.write(&raw) {
            error!("failed to persist contacts: {e}");
        }
    }
}
