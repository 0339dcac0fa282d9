//! Column roles for schema-aware writes.
//!
//! A schema tells the compiler which columns are managed by the database or
//! by audit stamping, so CREATE and UPDATE can render or skip them.
//!
//! # Example
//! ```
//! use quarry::schema::{ColumnRole, Schema};
//!
//! let json = r#"[
//!     { "Column": "IDAnimal", "Type": "AutoIdentity" },
//!     { "Column": "CreateDate", "Type": "CreateDate" }
//! ]"#;
//!
//! let schema = Schema::from_json(json).unwrap();
//! assert_eq!(schema.role("IDAnimal"), ColumnRole::AutoIdentity);
//! assert_eq!(schema.role("Name"), ColumnRole::Standard);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The audit or identity role a column plays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnRole {
    AutoIdentity,
    #[serde(rename = "AutoGUID")]
    AutoGuid,
    CreateDate,
    #[serde(rename = "CreateIDUser")]
    CreateIdUser,
    UpdateDate,
    #[serde(rename = "UpdateIDUser")]
    UpdateIdUser,
    Deleted,
    #[serde(rename = "DeleteIDUser")]
    DeleteIdUser,
    DeleteDate,
    #[default]
    #[serde(other)]
    Standard,
}

impl ColumnRole {
    pub const ALL: [ColumnRole; 10] = [
        ColumnRole::AutoIdentity,
        ColumnRole::AutoGuid,
        ColumnRole::CreateDate,
        ColumnRole::CreateIdUser,
        ColumnRole::UpdateDate,
        ColumnRole::UpdateIdUser,
        ColumnRole::Deleted,
        ColumnRole::DeleteIdUser,
        ColumnRole::DeleteDate,
        ColumnRole::Standard,
    ];
}

impl std::fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ColumnRole::AutoIdentity => "AutoIdentity",
            ColumnRole::AutoGuid => "AutoGUID",
            ColumnRole::CreateDate => "CreateDate",
            ColumnRole::CreateIdUser => "CreateIDUser",
            ColumnRole::UpdateDate => "UpdateDate",
            ColumnRole::UpdateIdUser => "UpdateIDUser",
            ColumnRole::Deleted => "Deleted",
            ColumnRole::DeleteIdUser => "DeleteIDUser",
            ColumnRole::DeleteDate => "DeleteDate",
            ColumnRole::Standard => "Standard",
        };
        write!(f, "{}", name)
    }
}

/// Column definition as it appears in a schema file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    #[serde(rename = "Column")]
    pub column: String,
    #[serde(rename = "Type", default)]
    pub role: ColumnRole,
}

impl ColumnDefinition {
    pub fn new(column: impl Into<String>, role: ColumnRole) -> Self {
        Self {
            column: column.into(),
            role,
        }
    }
}

/// Normalized schema: column name to role, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ColumnDefinition>", into = "Vec<ColumnDefinition>")]
pub struct Schema {
    roles: IndexMap<String, ColumnRole>,
}

impl Schema {
    pub fn new(columns: Vec<ColumnDefinition>) -> Self {
        Self {
            roles: columns.into_iter().map(|c| (c.column, c.role)).collect(),
        }
    }

    /// Role of a column; columns not in the schema are `Standard`.
    pub fn role(&self, column: &str) -> ColumnRole {
        self.roles.get(column).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Load schema from the JSON array-of-records form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl From<Vec<ColumnDefinition>> for Schema {
    fn from(columns: Vec<ColumnDefinition>) -> Self {
        Schema::new(columns)
    }
}

impl From<Schema> for Vec<ColumnDefinition> {
    fn from(schema: Schema) -> Self {
        schema
            .roles
            .into_iter()
            .map(|(column, role)| ColumnDefinition { column, role })
            .collect()
    }
}
