//! The dialect-neutral description of one database operation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::conditions::{FilterClause, SortSpec};
use super::operators::{Connector, Operator};
use super::values::Value;
use crate::schema::{ColumnDefinition, Schema};

/// One row: column name to value, in insertion order.
pub type Record = IndexMap<String, Value>;

/// Row window for reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// First row offset. Only rendered together with `cap`.
    pub begin: Option<u64>,
    /// Maximum rows returned.
    pub cap: Option<u64>,
}

/// Everything the compiler needs to render a statement.
///
/// Built fluently:
///
/// ```
/// use quarry::prelude::*;
///
/// let query = QueryDescriptor::new("Animal")
///     .set_projection(["Name", "Age"])
///     .add_filter("Age", 25)
///     .set_cap(100);
///
/// let compiled = query.compile(Action::Read).unwrap();
/// assert_eq!(
///     compiled.body,
///     "SELECT Name, Age FROM `Animal` WHERE Age = :Age_w0 LIMIT 100;"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryDescriptor {
    /// Table name.
    pub scope: String,
    pub records: Vec<Record>,
    pub filters: Vec<FilterClause>,
    pub sort: Vec<SortSpec>,
    #[serde(flatten)]
    pub pagination: Pagination,
    /// Requested columns; empty means all.
    pub projection: Vec<String>,
    pub schema: Option<Schema>,
    /// Custom statement template with `<%= Name %>` placeholders.
    #[serde(rename = "override")]
    pub query_override: Option<String>,
    /// Verbosity of compile logging; 5 and above logs every compiled body.
    pub log_level: u8,
}

impl QueryDescriptor {
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            ..Self::default()
        }
    }

    pub fn set_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn add_record<K, V, I>(mut self, record: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.records.push(
            record
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    pub fn set_records(mut self, records: Vec<Record>) -> Self {
        self.records = records;
        self
    }

    /// Append `column = value` joined with AND.
    pub fn add_filter(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.add_filter_with(column, value, Operator::Eq, Connector::And)
    }

    /// Append a clause with an explicit operator and connector. An operator of
    /// `(` or `)` appends a raw grouping token.
    pub fn add_filter_with(
        self,
        column: impl Into<String>,
        value: impl Into<Value>,
        operator: impl Into<Operator>,
        connector: impl Into<Connector>,
    ) -> Self {
        self.add_filter_clause(FilterClause::new(column, value, operator, connector))
    }

    pub fn add_filter_clause(mut self, clause: impl Into<FilterClause>) -> Self {
        self.filters.push(clause.into());
        self
    }

    /// Replace the whole chain with a single clause.
    pub fn set_filter(mut self, clause: impl Into<FilterClause>) -> Self {
        self.filters = vec![clause.into()];
        self
    }

    pub fn set_filters(mut self, filters: Vec<FilterClause>) -> Self {
        self.filters = filters;
        self
    }

    pub fn add_sort(mut self, sort: SortSpec) -> Self {
        self.sort.push(sort);
        self
    }

    pub fn set_sort(mut self, sort: Vec<SortSpec>) -> Self {
        self.sort = sort;
        self
    }

    pub fn set_begin(mut self, begin: u64) -> Self {
        self.pagination.begin = Some(begin);
        self
    }

    pub fn set_cap(mut self, cap: u64) -> Self {
        self.pagination.cap = Some(cap);
        self
    }

    pub fn set_projection<S, I>(mut self, columns: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        self.projection = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn set_schema(mut self, columns: Vec<ColumnDefinition>) -> Self {
        self.schema = Some(Schema::new(columns));
        self
    }

    pub fn set_override(mut self, template: impl Into<String>) -> Self {
        self.query_override = Some(template.into());
        self
    }

    pub fn clear_override(mut self) -> Self {
        self.query_override = None;
        self
    }

    pub fn set_log_level(mut self, level: u8) -> Self {
        self.log_level = level;
        self
    }

    /// The record written by CREATE and UPDATE. Later records are carried
    /// but not compiled.
    pub fn record(&self) -> Option<&Record> {
        self.records.first()
    }

    /// Load a descriptor from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a descriptor from TOML.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnRole;

    #[test]
    fn test_builder_keeps_order() {
        let q = QueryDescriptor::new("Animal")
            .add_record([("Name", Value::from("Foo")), ("Age", Value::from(15))])
            .add_filter("Age", 25)
            .add_filter_with("", "", "(", "AND")
            .set_projection(["Name", "Age"]);

        let keys: Vec<&str> = q.record().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Name", "Age"]);
        assert_eq!(q.filters.len(), 2);
        assert_eq!(q.filters[1], FilterClause::open());
        assert_eq!(q.projection, vec!["Name".to_string(), "Age".to_string()]);
    }

    #[test]
    fn test_set_filter_replaces_chain() {
        let q = QueryDescriptor::new("Animal")
            .add_filter("A", 1)
            .add_filter("B", 2)
            .set_filter(FilterClause::new("C", 3, "=", "AND"));
        assert_eq!(q.filters.len(), 1);
    }

    #[test]
    fn test_from_json() {
        let q = QueryDescriptor::from_json(
            r#"{
                "scope": "Animal",
                "records": [{"IDAnimal": null, "Name": "Foo Foo", "Age": 15}],
                "filters": [{"Column": "IDAnimal", "Value": 9}],
                "sort": [{"Column": "Age", "Direction": "Descending"}],
                "begin": 0,
                "cap": 10,
                "schema": [{"Column": "IDAnimal", "Type": "AutoIdentity"}]
            }"#,
        )
        .unwrap();

        assert_eq!(q.scope, "Animal");
        assert_eq!(q.pagination, Pagination { begin: Some(0), cap: Some(10) });
        let keys: Vec<&str> = q.record().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["IDAnimal", "Name", "Age"]);
        assert_eq!(
            q.schema.unwrap().role("IDAnimal"),
            ColumnRole::AutoIdentity
        );
    }

    #[test]
    fn test_from_toml() {
        let q = QueryDescriptor::from_toml(
            r#"
            scope = "Animal"
            projection = ["Name", "Age"]
            cap = 100

            [[filters]]
            Column = "Age"
            Value = 25
            "#,
        )
        .unwrap();
        assert_eq!(q.pagination.cap, Some(100));
        assert_eq!(q.pagination.begin, None);
        assert_eq!(q.filters.len(), 1);
    }
}
