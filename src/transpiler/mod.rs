//! SQL Transpiler for query descriptors.
//!
//! Turns a [`QueryDescriptor`] into dialect-specific SQL text plus the bind
//! map the execution layer needs.

pub mod conditions;
pub mod dialect;
pub mod dml;
pub mod fields;
pub mod sql;
pub mod template;
pub mod traits;

#[cfg(test)]
mod tests;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::ast::*;
use crate::error::CompileResult;
pub use conditions::Params;
pub use dialect::Dialect;
pub use template::Fragments;
pub use traits::SqlGenerator;

/// Log level at which every compiled body is logged at info.
const LOG_BODY_LEVEL: u8 = 5;

/// Output of a successful compilation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledQuery {
    /// Final SQL text.
    pub body: String,
    /// Bind name to value, in statement order.
    pub params: Params,
    /// Clause texts the body was assembled from.
    #[serde(skip)]
    pub fragments: Fragments,
}

/// Trait for compiling a descriptor into SQL.
///
/// Compilation is pure: the result depends only on the descriptor and the
/// dialect, and data problems come back as [`CompileError`](crate::error::CompileError)
/// rather than panics.
pub trait Compile {
    /// Compile with the default dialect.
    fn compile(&self, action: Action) -> CompileResult<CompiledQuery> {
        self.compile_with_dialect(action, Dialect::default())
    }

    /// Compile with a registered dialect.
    fn compile_with_dialect(&self, action: Action, dialect: Dialect) -> CompileResult<CompiledQuery> {
        let generator = dialect.generator();
        self.compile_with(action, generator.as_ref())
    }

    /// Compile with any dialect implementation.
    fn compile_with(&self, action: Action, generator: &dyn SqlGenerator) -> CompileResult<CompiledQuery>;
}

impl Compile for QueryDescriptor {
    fn compile_with(&self, action: Action, generator: &dyn SqlGenerator) -> CompileResult<CompiledQuery> {
        let result = match action {
            Action::Create => dml::insert::build_insert(self, generator),
            Action::Read => dml::select::build_select(self, generator),
            Action::Update => dml::update::build_update(self, generator),
            Action::Delete => dml::delete::build_delete(self, generator),
            Action::Count => dml::count::build_count(self, generator),
        };

        match &result {
            Ok(query) => {
                debug!(
                    dialect = generator.name(),
                    %action,
                    scope = %self.scope,
                    params = query.params.len(),
                    body = %query.body,
                    "compiled query"
                );
                if self.log_level >= LOG_BODY_LEVEL {
                    info!(%action, "{}", query.body);
                }
            }
            Err(e) => warn!(dialect = generator.name(), %action, scope = %self.scope, "compile failed: {}", e),
        }

        result
    }
}
