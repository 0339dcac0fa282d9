use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::QuarryError;

/// The statement being compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
    Count,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Create => write!(f, "CREATE"),
            Action::Read => write!(f, "READ"),
            Action::Update => write!(f, "UPDATE"),
            Action::Delete => write!(f, "DELETE"),
            Action::Count => write!(f, "COUNT"),
        }
    }
}

impl FromStr for Action {
    type Err = QuarryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "create" | "insert" => Ok(Action::Create),
            "read" | "select" => Ok(Action::Read),
            "update" => Ok(Action::Update),
            "delete" => Ok(Action::Delete),
            "count" => Ok(Action::Count),
            _ => Err(QuarryError::InvalidAction(s.to_string())),
        }
    }
}

/// Comparison operators accepted in a filter chain.
///
/// `OpenGroup` and `CloseGroup` are the raw `(` and `)` tokens. Anything not
/// recognized is kept verbatim in `Custom` and rendered as a binary operator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Operator {
    #[default]
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    Like,
    NotLike,
    In,
    NotIn,
    IsNull,
    IsNotNull,
    OpenGroup,
    CloseGroup,
    Custom(String),
}

impl Operator {
    /// The operator text as it appears in SQL.
    pub fn as_sql(&self) -> &str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT LIKE",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
            Operator::IsNull => "IS NULL",
            Operator::IsNotNull => "IS NOT NULL",
            Operator::OpenGroup => "(",
            Operator::CloseGroup => ")",
            Operator::Custom(op) => op.as_str(),
        }
    }

    /// Operators that take no right-hand operand and bind nothing.
    pub fn is_unary(&self) -> bool {
        matches!(self, Operator::IsNull | Operator::IsNotNull)
    }

    /// Operators whose operand is a parenthesized list.
    pub fn is_list(&self) -> bool {
        matches!(self, Operator::In | Operator::NotIn)
    }

    pub fn is_grouping(&self) -> bool {
        matches!(self, Operator::OpenGroup | Operator::CloseGroup)
    }

    /// Parse operator text; never fails, unknown text becomes `Custom`.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        match trimmed.to_ascii_uppercase().as_str() {
            "" | "=" | "==" => Operator::Eq,
            "!=" | "<>" => Operator::Ne,
            "<" => Operator::Lt,
            "<=" => Operator::Lte,
            ">" => Operator::Gt,
            ">=" => Operator::Gte,
            "LIKE" => Operator::Like,
            "NOT LIKE" => Operator::NotLike,
            "IN" => Operator::In,
            "NOT IN" => Operator::NotIn,
            "IS NULL" => Operator::IsNull,
            "IS NOT NULL" => Operator::IsNotNull,
            "(" => Operator::OpenGroup,
            ")" => Operator::CloseGroup,
            _ => Operator::Custom(trimmed.to_string()),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_sql())
    }
}

impl From<&str> for Operator {
    fn from(text: &str) -> Self {
        Operator::parse(text)
    }
}

impl From<String> for Operator {
    fn from(text: String) -> Self {
        Operator::parse(&text)
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        op.as_sql().to_string()
    }
}

/// Keyword joining a clause to the one before it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Connector {
    #[default]
    And,
    Or,
    /// Suppress the connector keyword entirely.
    None,
}

impl Connector {
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Connector::And => Some("AND"),
            Connector::Or => Some("OR"),
            Connector::None => None,
        }
    }
}

impl From<&str> for Connector {
    fn from(text: &str) -> Self {
        match text.trim().to_ascii_uppercase().as_str() {
            "OR" => Connector::Or,
            "NONE" => Connector::None,
            _ => Connector::And,
        }
    }
}

impl From<String> for Connector {
    fn from(text: String) -> Self {
        Connector::from(text.as_str())
    }
}

impl From<Connector> for String {
    fn from(connector: Connector) -> Self {
        connector.keyword().unwrap_or("NONE").to_string()
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(alias = "ASC", alias = "Asc", alias = "asc")]
    Ascending,
    #[serde(alias = "DESC", alias = "Desc", alias = "desc")]
    Descending,
}
