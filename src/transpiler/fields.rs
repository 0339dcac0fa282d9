//! Schema-aware field resolution for CREATE and UPDATE.

use tracing::trace;

use super::traits::SqlGenerator;
use crate::ast::{Record, Value};
use crate::schema::{ColumnRole, Schema};

/// Which write a record is being resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteKind {
    Create,
    Update,
}

/// How a surviving field is rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Bound parameter with its name and value.
    Bound { param: String, value: Value },
    /// Fixed SQL text such as `NOW()`.
    Literal(String),
}

/// A column that participates in the statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedField {
    pub column: String,
    pub value: FieldValue,
}

enum Treatment {
    Bind,
    Now,
    Null,
    Omit,
}

fn treatment(role: ColumnRole, kind: WriteKind) -> Treatment {
    use ColumnRole::*;
    match (role, kind) {
        (AutoIdentity, WriteKind::Create) => Treatment::Null,
        (AutoIdentity, WriteKind::Update) => Treatment::Omit,
        (CreateDate, WriteKind::Create) => Treatment::Now,
        (CreateDate, WriteKind::Update) => Treatment::Omit,
        (CreateIdUser, WriteKind::Create) => Treatment::Bind,
        (CreateIdUser, WriteKind::Update) => Treatment::Omit,
        (UpdateDate, _) => Treatment::Now,
        (DeleteIdUser | DeleteDate, _) => Treatment::Omit,
        (AutoGuid | UpdateIdUser | Deleted | Standard, _) => Treatment::Bind,
    }
}

/// Bind name for the field at `index` among the surviving fields.
pub fn field_param_name(column: &str, index: usize) -> String {
    format!("{}_{}", column, index)
}

/// Resolve a record into the ordered fields a write statement renders.
///
/// Without a schema every column binds. With one, each column's role decides;
/// omitted fields do not consume an index, literal ones do.
pub fn resolve_fields(
    record: &Record,
    schema: Option<&Schema>,
    kind: WriteKind,
    generator: &dyn SqlGenerator,
) -> Vec<ResolvedField> {
    let mut fields = Vec::with_capacity(record.len());

    for (column, value) in record {
        let role = schema.map(|s| s.role(column)).unwrap_or_default();
        let index = fields.len();
        let value = match treatment(role, kind) {
            Treatment::Omit => {
                trace!(%column, %role, ?kind, "field omitted");
                continue;
            }
            Treatment::Now => FieldValue::Literal(generator.now_literal().to_string()),
            Treatment::Null => FieldValue::Literal(generator.null_literal().to_string()),
            Treatment::Bind => FieldValue::Bound {
                param: field_param_name(column, index),
                value: value.clone(),
            },
        };
        if let FieldValue::Literal(text) = &value {
            trace!(%column, %role, literal = %text, "field rendered as literal");
        }
        fields.push(ResolvedField {
            column: column.clone(),
            value,
        });
    }

    fields
}
