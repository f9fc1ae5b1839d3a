//! Persistence for counters and groups.

mod error;
mod memory;
mod model;
mod repository;
pub mod schema;
mod snapshot;

pub use error::StoreError;
pub use memory::CounterStore;
pub use model::{Counter, CounterId, Group, GroupId};
pub use repository::CounterRepository;
pub use snapshot::{Snapshot, SnapshotFile};
