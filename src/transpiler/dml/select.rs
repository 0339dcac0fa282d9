//! SELECT SQL generation.

use crate::ast::*;
use crate::error::CompileResult;
use crate::transpiler::CompiledQuery;
use crate::transpiler::conditions::{build_where, Params};
use crate::transpiler::template::Fragments;
use crate::transpiler::traits::SqlGenerator;

/// Projection with its leading space: ` *` or ` a, b, c`.
pub fn field_list(cmd: &QueryDescriptor) -> String {
    if cmd.projection.is_empty() {
        " *".to_string()
    } else {
        format!(" {}", cmd.projection.join(", "))
    }
}

/// ` ORDER BY a, b DESC`, or empty without sort entries.
pub fn order_by(sort: &[SortSpec], generator: &dyn SqlGenerator) -> String {
    if sort.is_empty() {
        return String::new();
    }
    let entries: Vec<String> = sort
        .iter()
        .map(|s| format!("{}{}", s.column, generator.sort_suffix(s.direction)))
        .collect();
    format!(" ORDER BY {}", entries.join(", "))
}

/// Generate SELECT SQL.
pub fn build_select(cmd: &QueryDescriptor, generator: &dyn SqlGenerator) -> CompileResult<CompiledQuery> {
    let mut params = Params::new();
    let fragments = Fragments {
        table: format!(" {}", generator.quote_table(&cmd.scope)),
        field_list: field_list(cmd),
        where_clause: build_where(&cmd.filters, generator, &mut params),
        order_by: order_by(&cmd.sort, generator),
        limit: generator.limit_clause(cmd.pagination.begin, cmd.pagination.cap),
        ..Fragments::default()
    };

    super::finish(cmd, fragments, params, |f| {
        format!(
            "SELECT{} FROM{}{}{}{};",
            f.field_list, f.table, f.where_clause, f.order_by, f.limit
        )
    })
}
