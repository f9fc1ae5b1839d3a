//! Table layout of the counter store.
//!
//! The two tables and their relation are declared here as data. The store
//! reads the delete rule of `counters.group_id` from [`COUNTER_GROUP_FK`], and
//! the row types below are what gets written to a snapshot file. Primary keys
//! are identities starting at 1 and are never reused.

use serde::{Deserialize, Serialize};

use crate::store::model::{CounterId, GroupId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub kind: ColumnKind,
    pub nullable: bool,
}

/// What happens to referencing rows when the referenced row is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnDelete {
    /// Referencing rows are deleted with the referenced row.
    Cascade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKey {
    pub column: &'static str,
    pub references_table: &'static str,
    pub references_column: &'static str,
    pub on_delete: OnDelete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    pub primary_key: &'static str,
    pub columns: &'static [ColumnDef],
    pub foreign_keys: &'static [ForeignKey],
}

impl TableDef {
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// The foreign key declared on `column`, if any.
    pub fn foreign_key(&self, column: &str) -> Option<&ForeignKey> {
        self.foreign_keys.iter().find(|fk| fk.column == column)
    }
}

pub const GROUPS: TableDef = TableDef {
    name: "groups",
    primary_key: "group_id",
    columns: &[
        ColumnDef {
            name: "group_id",
            kind: ColumnKind::Integer,
            nullable: false,
        },
        ColumnDef {
            name: "group_name",
            kind: ColumnKind::Text,
            nullable: false,
        },
    ],
    foreign_keys: &[],
};

pub const COUNTERS: TableDef = TableDef {
    name: "counters",
    primary_key: "counter_id",
    columns: &[
        ColumnDef {
            name: "counter_id",
            kind: ColumnKind::Integer,
            nullable: false,
        },
        ColumnDef {
            name: "counter_name",
            kind: ColumnKind::Text,
            nullable: false,
        },
        ColumnDef {
            name: "counter_value",
            kind: ColumnKind::Integer,
            nullable: false,
        },
        ColumnDef {
            name: "group_id",
            kind: ColumnKind::Integer,
            nullable: true,
        },
    ],
    foreign_keys: &[COUNTER_GROUP_FK],
};

/// `counters.group_id` references `groups.group_id`.
pub const COUNTER_GROUP_FK: ForeignKey = ForeignKey {
    column: "group_id",
    references_table: "groups",
    references_column: "group_id",
    on_delete: OnDelete::Cascade,
};

/// Stored form of a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRow {
    pub group_id: GroupId,
    pub group_name: String,
}

/// Stored form of a counter. `group_id` is the foreign key into `groups`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterRow {
    pub counter_id: CounterId,
    pub counter_name: String,
    #[serde(rename = "counter_value", default)]
    pub value: i64,
    #[serde(default)]
    pub group_id: Option<GroupId>,
}
