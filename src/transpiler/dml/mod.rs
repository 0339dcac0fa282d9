//! DML statement assembly.

pub mod count;
pub mod delete;
pub mod insert;
pub mod select;
pub mod update;

use super::conditions::Params;
use super::template::{self, Fragments};
use super::CompiledQuery;
use crate::ast::QueryDescriptor;
use crate::error::CompileResult;

/// Produce the final body: the override template when one is set, the
/// default statement otherwise. Fragments and params are kept either way.
pub(crate) fn finish(
    cmd: &QueryDescriptor,
    fragments: Fragments,
    params: Params,
    default: impl FnOnce(&Fragments) -> String,
) -> CompileResult<CompiledQuery> {
    let body = match &cmd.query_override {
        Some(custom) => template::render(custom, &fragments)?,
        None => default(&fragments),
    };
    Ok(CompiledQuery {
        body,
        params,
        fragments,
    })
}
