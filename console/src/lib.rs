// inventory_console/src/lib.rs

//! Terminal console for the inventory server.
//!
//! The console fetches the whole product set once, then filters, sorts and
//! paginates it locally through `inventory::ViewState`. Creates, updates and
//! deletes go through a confirmation prompt, are sent to the server, and are
//! followed by a fresh fetch; nothing is updated optimistically.

pub mod api;
pub mod ports;
pub mod preferences;
pub mod render;
pub mod session;
pub mod shell;
pub mod terminal;

pub use api::{HttpProductApi, ProductApi};
pub use ports::{Confirmer, Notification, NotificationKind, Notifier, Prompt};
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceError, PreferenceStore};
pub use session::{ConsoleError, Outcome, ProductConsole};
pub use shell::{parse_command, Command, Flow, Shell};
