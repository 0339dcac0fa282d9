//! DELETE SQL generation.

use crate::ast::*;
use crate::error::CompileResult;
use crate::transpiler::CompiledQuery;
use crate::transpiler::conditions::{build_where, Params};
use crate::transpiler::template::Fragments;
use crate::transpiler::traits::SqlGenerator;

/// Generate DELETE SQL.
pub fn build_delete(cmd: &QueryDescriptor, generator: &dyn SqlGenerator) -> CompileResult<CompiledQuery> {
    let mut params = Params::new();
    let fragments = Fragments {
        table: format!(" {}", generator.quote_table(&cmd.scope)),
        where_clause: build_where(&cmd.filters, generator, &mut params),
        ..Fragments::default()
    };

    super::finish(cmd, fragments, params, |f| {
        format!("DELETE FROM{}{};", f.table, f.where_clause)
    })
}
