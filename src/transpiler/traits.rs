//! Transpiler traits.

use crate::ast::Direction;

/// Trait for dialect-specific SQL generation.
///
/// The statement assemblers only ever reach SQL text through these hooks, so
/// any conforming implementation can be handed to
/// [`Compile::compile_with`](crate::transpiler::Compile::compile_with).
pub trait SqlGenerator {
    /// Display name of the dialect.
    fn name(&self) -> &str;
    /// Quote the table reference.
    fn quote_table(&self, name: &str) -> String;
    /// Reference a named bind parameter (e.g. `:Age_w0`).
    fn bind_marker(&self, name: &str) -> String;
    /// Literal for "current timestamp".
    fn now_literal(&self) -> &str;
    /// Literal that lets the database assign an identity.
    fn null_literal(&self) -> &str;
    /// Alias given to the row count column.
    fn row_count_alias(&self) -> &str {
        "RowCount"
    }
    /// Suffix appended to a sorted column.
    fn sort_suffix(&self, direction: Direction) -> &str {
        match direction {
            Direction::Ascending => "",
            Direction::Descending => " DESC",
        }
    }
    /// Row window clause, with its leading space, or empty when no cap is set.
    fn limit_clause(&self, begin: Option<u64>, cap: Option<u64>) -> String;
}
