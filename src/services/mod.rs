//! Services Layer
//!
//! Collaborators the editor talks to: where the record comes from, where it
//! goes on commit, and how errors reach the operator.
//!
//! ```text
//! ConfigLoader ──▶ ConfigState ──commit──▶ ConfigUpdater (PersistWorker ──▶ ConfigSink)
//!                       │
//!                       └── validation error ──▶ Notifier (ChannelNotifier ──▶ UIEvent)
//! ```

pub mod collaborators;
pub mod file_store;
pub mod http_store;
pub mod notifier;
pub mod persist_worker;

pub use collaborators::{ConfigLoader, ConfigSink, ConfigUpdater, Notifier};
pub use file_store::FileStore;
pub use http_store::HttpStore;
pub use notifier::ChannelNotifier;
pub use persist_worker::PersistWorker;
