//! Pure broadcast logic library with no platform dependencies.
//! Message composition, wa.me link building, contact/selection state, and
//! the dispatch fan-out, all behind injected ports so they are testable on
//! host without a real storage backend, browser, or clipboard.

pub mod compose;
pub mod contact;
pub mod dispatch;
pub mod donor;
pub mod link;
pub mod selection;

pub use compose::{compose, AlertDetails};
pub use contact::{Contact, ContactStore, SnapshotStore};
pub use dispatch::{broadcast, copy_message, Clipboard, CopyFeedback, DispatchError, LinkOpener};
pub use link::{normalize_phone, wa_link};
pub use selection::Selection;
