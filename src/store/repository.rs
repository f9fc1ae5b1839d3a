use crate::store::error::StoreError;
use crate::store::model::{Counter, CounterId};

/// Data-access surface the HTTP service is written against.
pub trait CounterRepository: Send + Sync {
    /// Every counter with its group resolved, ordered by id.
    fn find_all(&self) -> Result<Vec<Counter>, StoreError>;

    fn find_by_id(&self, id: CounterId) -> Result<Option<Counter>, StoreError>;

    /// Persist a modified counter and return its canonical stored state.
    ///
    /// The id is never changed. The group is validated by id only; its name
    /// in the returned record comes from the store.
    fn save(&self, counter: Counter) -> Result<Counter, StoreError>;

    /// Atomically add `delta` to the counter's value.
    fn increment(&self, id: CounterId, delta: i64) -> Result<Counter, StoreError>;
}
