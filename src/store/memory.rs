//! In-memory counter store with optional snapshot persistence.
//!
//! Both tables sit behind a single read-write lock. Every mutation runs as one
//! write-locked unit: the change is applied, the snapshot (if any) rewritten,
//! and on a failed write the tables are rolled back before the lock is
//! released. Increments are therefore atomic read-modify-write operations.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::SeedConfig;
use crate::store::error::StoreError;
use crate::store::model::{Counter, CounterId, Group, GroupId};
use crate::store::repository::CounterRepository;
use crate::store::schema::{self, CounterRow, GroupRow, OnDelete};
use crate::store::snapshot::{Snapshot, SnapshotFile};

#[derive(Clone)]
pub struct CounterStore {
    tables: Arc<RwLock<Tables>>,
    snapshot: Option<Arc<SnapshotFile>>,
}

#[derive(Debug, Clone, Default)]
struct Tables {
    groups: BTreeMap<GroupId, GroupRow>,
    counters: BTreeMap<CounterId, CounterRow>,
    last_group_id: i64,
    last_counter_id: i64,
}

impl Tables {
    fn from_snapshot(snapshot: Snapshot) -> Result<Self, StoreError> {
        let mut tables = Tables {
            last_group_id: snapshot.last_group_id,
            last_counter_id: snapshot.last_counter_id,
            ..Tables::default()
        };

        for row in snapshot.groups {
            require_name("group_name", &row.group_name)?;
            let key = row.group_id;
            if tables.groups.insert(key, row).is_some() {
                return Err(StoreError::DuplicateKey {
                    table: schema::GROUPS.name,
                    key: key.0,
                });
            }
            tables.last_group_id = tables.last_group_id.max(key.0);
        }

        for row in snapshot.counters {
            require_name("counter_name", &row.counter_name)?;
            if let Some(group_id) = row.group_id {
                if !tables.groups.contains_key(&group_id) {
                    return Err(StoreError::GroupNotFound { id: group_id });
                }
            }
            let key = row.counter_id;
            if tables.counters.insert(key, row).is_some() {
                return Err(StoreError::DuplicateKey {
                    table: schema::COUNTERS.name,
                    key: key.0,
                });
            }
            tables.last_counter_id = tables.last_counter_id.max(key.0);
        }

        Ok(tables)
    }

    fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            groups: self.groups.values().cloned().collect(),
            counters: self.counters.values().cloned().collect(),
            last_group_id: self.last_group_id,
            last_counter_id: self.last_counter_id,
        }
    }

    fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.counters.is_empty()
    }

    fn group(&self, id: GroupId) -> Option<Group> {
        self.groups.get(&id).map(|row| Group {
            group_id: row.group_id,
            group_name: row.group_name.clone(),
        })
    }

    fn resolve(&self, row: &CounterRow) -> Counter {
        Counter {
            counter_id: row.counter_id,
            counter_name: row.counter_name.clone(),
            value: row.value,
            group: row.group_id.and_then(|id| self.group(id)),
        }
    }

    fn check_group(&self, group_id: Option<GroupId>) -> Result<(), StoreError> {
        match group_id {
            Some(id) if !self.groups.contains_key(&id) => Err(StoreError::GroupNotFound { id }),
            _ => Ok(()),
        }
    }
}

impl CounterStore {
    /// Empty store without persistence.
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::default())),
            snapshot: None,
        }
    }

    /// Store backed by `file`. Existing contents are loaded and validated.
    pub fn with_snapshot(file: SnapshotFile) -> Result<Self, StoreError> {
        let tables = match file.load()? {
            Some(snapshot) => Tables::from_snapshot(snapshot)?,
            None => Tables::default(),
        };
        tracing::info!(
            path = %file.path().display(),
            groups = tables.groups.len(),
            counters = tables.counters.len(),
            "Loaded counter snapshot"
        );
        Ok(Self {
            tables: Arc::new(RwLock::new(tables)),
            snapshot: Some(Arc::new(file)),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.tables.read().is_empty()
    }

    /// Insert the configured seed records. Does nothing unless the store is empty,
    /// so restarting against a populated snapshot never duplicates them.
    pub fn seed(&self, seed: &SeedConfig) -> Result<bool, StoreError> {
        self.commit(|tables| {
            if !tables.is_empty() {
                return Ok(false);
            }
            let mut by_name = BTreeMap::new();
            for group in &seed.groups {
                let created = insert_group(tables, &group.name)?;
                by_name.insert(group.name.as_str(), created.group_id);
            }
            for counter in &seed.counters {
                let group_id = match &counter.group {
                    Some(name) => Some(*by_name.get(name.as_str()).ok_or_else(|| {
                        StoreError::Invalid {
                            field: "group",
                            reason: format!("unknown seed group '{}'", name),
                        }
                    })?),
                    None => None,
                };
                insert_counter(tables, &counter.name, counter.value, group_id)?;
            }
            tracing::info!(
                groups = seed.groups.len(),
                counters = seed.counters.len(),
                "Seeded empty store"
            );
            Ok(true)
        })
    }

    pub fn insert_group(&self, name: &str) -> Result<Group, StoreError> {
        self.commit(|tables| insert_group(tables, name))
    }

    pub fn insert_counter(
        &self,
        name: &str,
        value: i64,
        group: Option<GroupId>,
    ) -> Result<Counter, StoreError> {
        self.commit(|tables| insert_counter(tables, name, value, group))
    }

    pub fn groups(&self) -> Vec<Group> {
        let tables = self.tables.read();
        tables
            .groups
            .keys()
            .filter_map(|id| tables.group(*id))
            .collect()
    }

    /// Counters referencing `id`, the derived side of the group relation.
    pub fn group_counters(&self, id: GroupId) -> Result<Vec<Counter>, StoreError> {
        let tables = self.tables.read();
        if !tables.groups.contains_key(&id) {
            return Err(StoreError::GroupNotFound { id });
        }
        Ok(tables
            .counters
            .values()
            .filter(|row| row.group_id == Some(id))
            .map(|row| tables.resolve(row))
            .collect())
    }

    pub fn delete_counter(&self, id: CounterId) -> Result<Counter, StoreError> {
        self.commit(|tables| {
            let row = tables
                .counters
                .remove(&id)
                .ok_or(StoreError::CounterNotFound { id })?;
            Ok(tables.resolve(&row))
        })
    }

    /// Delete a group. Its counters follow the `counters.group_id` delete policy;
    /// returns the ids of counters removed by a cascade.
    pub fn delete_group(&self, id: GroupId) -> Result<Vec<CounterId>, StoreError> {
        self.commit(|tables| {
            if !tables.groups.contains_key(&id) {
                return Err(StoreError::GroupNotFound { id });
            }
            let members: Vec<CounterId> = tables
                .counters
                .values()
                .filter(|row| row.group_id == Some(id))
                .map(|row| row.counter_id)
                .collect();

            match schema::COUNTER_GROUP_FK.on_delete {
                OnDelete::Cascade => {
                    for counter_id in &members {
                        tables.counters.remove(counter_id);
                    }
                }
            }

            tables.groups.remove(&id);
            tracing::info!(group = %id, cascaded = members.len(), "Deleted group");
            Ok(members)
        })
    }

    /// Run a mutation under the write lock and persist the result.
    ///
    /// The tables are restored if the mutation or the snapshot write fails.
    fn commit<T>(
        &self,
        mutate: impl FnOnce(&mut Tables) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut tables = self.tables.write();
        let backup = tables.clone();

        let result = mutate(&mut *tables).and_then(|value| {
            if let Some(file) = &self.snapshot {
                file.write(&tables.to_snapshot())?;
            }
            Ok(value)
        });

        if result.is_err() {
            *tables = backup;
        }
        result
    }
}

impl Default for CounterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterRepository for CounterStore {
    fn find_all(&self) -> Result<Vec<Counter>, StoreError> {
        let tables = self.tables.read();
        Ok(tables
            .counters
            .values()
            .map(|row| tables.resolve(row))
            .collect())
    }

    fn find_by_id(&self, id: CounterId) -> Result<Option<Counter>, StoreError> {
        let tables = self.tables.read();
        Ok(tables.counters.get(&id).map(|row| tables.resolve(row)))
    }

    fn save(&self, counter: Counter) -> Result<Counter, StoreError> {
        self.commit(|tables| {
            require_name("counter_name", &counter.counter_name)?;
            let group_id = counter.group.as_ref().map(|g| g.group_id);
            tables.check_group(group_id)?;

            let row = tables
                .counters
                .get_mut(&counter.counter_id)
                .ok_or(StoreError::CounterNotFound {
                    id: counter.counter_id,
                })?;
            row.counter_name = counter.counter_name;
            row.value = counter.value;
            row.group_id = group_id;

            let row = row.clone();
            Ok(tables.resolve(&row))
        })
    }

    fn increment(&self, id: CounterId, delta: i64) -> Result<Counter, StoreError> {
        self.commit(|tables| {
            let row = tables
                .counters
                .get_mut(&id)
                .ok_or(StoreError::CounterNotFound { id })?;
            row.value = row
                .value
                .checked_add(delta)
                .ok_or(StoreError::Overflow { id, delta })?;

            let row = row.clone();
            Ok(tables.resolve(&row))
        })
    }
}

fn require_name(field: &'static str, name: &str) -> Result<(), StoreError> {
    if name.trim().is_empty() {
        return Err(StoreError::Invalid {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

fn insert_group(tables: &mut Tables, name: &str) -> Result<Group, StoreError> {
    require_name("group_name", name)?;
    tables.last_group_id += 1;
    let id = GroupId(tables.last_group_id);
    tables.groups.insert(
        id,
        GroupRow {
            group_id: id,
            group_name: name.to_string(),
        },
    );
    Ok(Group {
        group_id: id,
        group_name: name.to_string(),
    })
}

fn insert_counter(
    tables: &mut Tables,
    name: &str,
    value: i64,
    group: Option<GroupId>,
) -> Result<Counter, StoreError> {
    require_name("counter_name", name)?;
    tables.check_group(group)?;
    tables.last_counter_id += 1;
    let row = CounterRow {
        counter_id: CounterId(tables.last_counter_id),
        counter_name: name.to_string(),
        value,
        group_id: group,
    };
    let counter = tables.resolve(&row);
    tables.counters.insert(row.counter_id, row);
    Ok(counter)
}
