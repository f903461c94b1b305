use kernel::DataType;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, hash::Hash};

/// A reference to one column of the query being optimized.
///
/// Identity is the id alone: the column factory that owns the query assigns
/// each column a unique id, and rewrites that rename or retype a column keep
/// its id. Equality, hash, and ordering all follow the id so the name never
/// affects rule matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnRef {
    pub id: u32,
    pub name: String,
    pub data_type: DataType,
    pub nullable: bool,
}

impl ColumnRef {
    pub fn new(id: u32, name: &str, data_type: DataType, nullable: bool) -> Self {
        Self {
            id,
            name: name.to_string(),
            data_type,
            nullable,
        }
    }
}

impl PartialEq for ColumnRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for ColumnRef {}

impl Hash for ColumnRef {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u32(self.id)
    }
}

impl PartialOrd for ColumnRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ColumnRef {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.name, self.id)
    }
}
