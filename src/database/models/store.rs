use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

/// Repository-assigned store identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct StoreId(pub i64);

/// Identifier of a caller, as carried in verified tokens and in store ownership
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StoreId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(StoreId)
    }
}

/// A store record.
///
/// `store_id` and `user_id` are owned by the server: the id comes from the
/// repository and the owner from the verified caller. Every other JSON field
/// is kept verbatim in `attributes` and round-tripped without validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    pub store_id: StoreId,
    #[serde(default)]
    pub user_id: UserId,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Store {
    /// True when any attribute value contains `needle`, ignoring case.
    /// An empty needle matches every store. Null values never match.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        self.attributes.values().any(|value| {
            let text = match value {
                Value::Null => return false,
                Value::String(s) => s.to_lowercase(),
                other => other.to_string().to_lowercase(),
            };
            text.contains(&needle)
        })
    }
}

/// Row shape of the `stores` table
#[derive(Debug, FromRow)]
pub struct StoreRow {
    pub store_id: StoreId,
    pub user_id: UserId,
    pub attributes: sqlx::types::Json<Map<String, Value>>,
}

impl From<StoreRow> for Store {
    fn from(row: StoreRow) -> Self {
        Self {
            store_id: row.store_id,
            user_id: row.user_id,
            attributes: row.attributes.0,
        }
    }
}
