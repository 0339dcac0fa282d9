//! UPDATE SQL generation.

use tracing::debug;

use crate::ast::*;
use crate::error::{CompileError, CompileResult};
use crate::transpiler::CompiledQuery;
use crate::transpiler::conditions::{build_where, Params};
use crate::transpiler::fields::{resolve_fields, FieldValue, WriteKind};
use crate::transpiler::template::Fragments;
use crate::transpiler::traits::SqlGenerator;

/// Generate UPDATE SQL for the first record.
pub fn build_update(cmd: &QueryDescriptor, generator: &dyn SqlGenerator) -> CompileResult<CompiledQuery> {
    let fields = cmd
        .record()
        .map(|record| resolve_fields(record, cmd.schema.as_ref(), WriteKind::Update, generator))
        .unwrap_or_default();
    if fields.is_empty() {
        debug!(scope = %cmd.scope, "update has no fields");
        return Err(CompileError::empty(&cmd.scope));
    }

    let mut params = Params::new();
    let mut set_clauses: Vec<String> = Vec::with_capacity(fields.len());
    for field in fields {
        match field.value {
            FieldValue::Bound { param, value } => {
                set_clauses.push(format!("{} = {}", field.column, generator.bind_marker(&param)));
                params.insert(param, value);
            }
            FieldValue::Literal(text) => set_clauses.push(format!("{} = {}", field.column, text)),
        }
    }

    let fragments = Fragments {
        table: format!(" {}", generator.quote_table(&cmd.scope)),
        set: format!(" {}", set_clauses.join(", ")),
        where_clause: build_where(&cmd.filters, generator, &mut params),
        ..Fragments::default()
    };

    super::finish(cmd, fragments, params, |f| {
        format!("UPDATE{} SET{}{};", f.table, f.set, f.where_clause)
    })
}
