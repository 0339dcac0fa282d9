//! INSERT SQL generation.

use tracing::debug;

use crate::ast::*;
use crate::error::{CompileError, CompileResult};
use crate::transpiler::CompiledQuery;
use crate::transpiler::conditions::Params;
use crate::transpiler::fields::{resolve_fields, FieldValue, WriteKind};
use crate::transpiler::template::Fragments;
use crate::transpiler::traits::SqlGenerator;

/// Generate INSERT SQL for the first record.
pub fn build_insert(cmd: &QueryDescriptor, generator: &dyn SqlGenerator) -> CompileResult<CompiledQuery> {
    let fields = cmd
        .record()
        .map(|record| resolve_fields(record, cmd.schema.as_ref(), WriteKind::Create, generator))
        .unwrap_or_default();
    if fields.is_empty() {
        debug!(scope = %cmd.scope, "insert has no fields");
        return Err(CompileError::empty(&cmd.scope));
    }

    let mut params = Params::new();
    let mut columns = String::new();
    let mut values = String::new();
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            columns.push(',');
            values.push(',');
        }
        columns.push(' ');
        columns.push_str(&field.column);
        values.push(' ');
        match field.value {
            FieldValue::Bound { param, value } => {
                values.push_str(&generator.bind_marker(&param));
                params.insert(param, value);
            }
            FieldValue::Literal(text) => values.push_str(&text),
        }
    }

    let fragments = Fragments {
        table: format!(" {}", generator.quote_table(&cmd.scope)),
        columns,
        values,
        ..Fragments::default()
    };

    super::finish(cmd, fragments, params, |f| {
        format!("INSERT INTO{} ({}) VALUES ({});", f.table, f.columns, f.values)
    })
}
