//! Override template rendering.
//!
//! A template is literal SQL with `<%= Name %>` placeholders. Parsing is done
//! up front with nom so a broken placeholder is reported as an error instead
//! of leaking half-substituted text.

use nom::{
    bytes::complete::{tag, take_until, take_while1},
    character::complete::multispace0,
    sequence::{delimited, tuple},
    IResult,
};

use crate::error::{CompileError, CompileResult};

const OPEN: &str = "<%";
const OPEN_EXPR: &str = "<%=";

/// Clause texts a template may reference. Each keeps the leading space the
/// default statement uses, and is empty when the clause is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragments {
    pub table: String,
    pub field_list: String,
    pub where_clause: String,
    pub order_by: String,
    pub limit: String,
    pub set: String,
    pub columns: String,
    pub values: String,
}

impl Fragments {
    /// Look up a placeholder by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        let text = match name {
            "TableName" => &self.table,
            "FieldList" => &self.field_list,
            "Where" => &self.where_clause,
            "OrderBy" => &self.order_by,
            "Limit" => &self.limit,
            "Set" => &self.set,
            "Columns" => &self.columns,
            "Values" => &self.values,
            _ => return None,
        };
        Some(text)
    }
}

/// One parsed piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    /// Placeholder name and the byte offset of its opening delimiter.
    Placeholder { name: &'a str, position: usize },
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_')(input)
}

/// `<%= Name %>`
fn placeholder(input: &str) -> IResult<&str, &str> {
    let (input, (_, name, _)) = tuple((
        tag(OPEN_EXPR),
        delimited(multispace0, identifier, multispace0),
        tag("%>"),
    ))(input)?;
    Ok((input, name))
}

/// Split a template into literal text and placeholders.
pub fn parse(template: &str) -> CompileResult<Vec<Segment<'_>>> {
    let mut segments = Vec::new();
    let mut rest = template;

    while !rest.is_empty() {
        let text = match take_until::<_, _, nom::error::Error<&str>>(OPEN)(rest) {
            Ok((remaining, text)) => {
                rest = remaining;
                text
            }
            Err(_) => {
                segments.push(Segment::Text(rest));
                break;
            }
        };
        if !text.is_empty() {
            segments.push(Segment::Text(text));
        }

        let position = template.len() - rest.len();
        match placeholder(rest) {
            Ok((remaining, name)) => {
                segments.push(Segment::Placeholder { name, position });
                rest = remaining;
            }
            Err(_) => return Err(CompileError::template(position, describe(rest))),
        }
    }

    Ok(segments)
}

fn describe(at: &str) -> String {
    if !at.starts_with(OPEN_EXPR) {
        return "only <%= Name %> placeholders are supported".to_string();
    }
    let body = &at[OPEN_EXPR.len()..];
    match (body.find("%>"), body.find(OPEN)) {
        (None, _) => "placeholder is never closed".to_string(),
        (Some(close), Some(open)) if open < close => {
            "placeholder opened again before it was closed".to_string()
        }
        _ => "placeholder must hold a single name".to_string(),
    }
}

/// Substitute every placeholder with its fragment text.
///
/// Surrounding whitespace is copied verbatim, so an empty fragment between two
/// spaces leaves both spaces in the output.
pub fn render(template: &str, fragments: &Fragments) -> CompileResult<String> {
    let segments = parse(template)?;
    let mut sql = String::with_capacity(template.len());

    for segment in segments {
        match segment {
            Segment::Text(text) => sql.push_str(text),
            Segment::Placeholder { name, position } => match fragments.get(name) {
                Some(text) => sql.push_str(text),
                None => {
                    return Err(CompileError::template(
                        position,
                        format!("unknown placeholder '{}'", name),
                    ));
                }
            },
        }
    }

    Ok(sql)
}
