use serde::{Deserialize, Serialize};

use super::operators::{Connector, Direction, Operator};
use super::values::Value;

/// A raw grouping token inside a filter chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    Open,
    Close,
}

impl Grouping {
    pub fn token(&self) -> &'static str {
        match self {
            Grouping::Open => "(",
            Grouping::Close => ")",
        }
    }
}

/// A single `column <op> value` test.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub column: String,
    pub operator: Operator,
    pub value: Value,
    pub connector: Connector,
    /// Base name of the bind parameter; the chain position is appended to it.
    pub parameter: String,
}

impl Condition {
    pub fn new(column: impl Into<String>, value: impl Into<Value>) -> Self {
        let column = column.into();
        Self {
            parameter: column.clone(),
            column,
            operator: Operator::Eq,
            value: value.into(),
            connector: Connector::And,
        }
    }

    pub fn operator(mut self, operator: impl Into<Operator>) -> Self {
        self.operator = operator.into();
        self
    }

    pub fn connector(mut self, connector: impl Into<Connector>) -> Self {
        self.connector = connector.into();
        self
    }

    pub fn parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameter = parameter.into();
        self
    }
}

/// One link of a filter chain.
///
/// Clauses are addressed by their position in the chain, and that position
/// names their bind parameter, so a chain is only ever appended to or replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawFilter", into = "RawFilter")]
pub enum FilterClause {
    Condition(Condition),
    Group {
        grouping: Grouping,
        connector: Connector,
    },
}

impl FilterClause {
    /// Build a clause the way `add_filter` receives it: a grouping operator
    /// turns into a raw token and the column/value are ignored.
    pub fn new(
        column: impl Into<String>,
        value: impl Into<Value>,
        operator: impl Into<Operator>,
        connector: impl Into<Connector>,
    ) -> Self {
        let operator = operator.into();
        let connector = connector.into();
        match operator {
            Operator::OpenGroup => FilterClause::Group {
                grouping: Grouping::Open,
                connector,
            },
            Operator::CloseGroup => FilterClause::Group {
                grouping: Grouping::Close,
                connector,
            },
            operator => FilterClause::Condition(
                Condition::new(column, value)
                    .operator(operator)
                    .connector(connector),
            ),
        }
    }

    pub fn open() -> Self {
        FilterClause::Group {
            grouping: Grouping::Open,
            connector: Connector::And,
        }
    }

    pub fn close() -> Self {
        FilterClause::Group {
            grouping: Grouping::Close,
            connector: Connector::And,
        }
    }

    pub fn connector(&self) -> Connector {
        match self {
            FilterClause::Condition(cond) => cond.connector,
            FilterClause::Group { connector, .. } => *connector,
        }
    }
}

impl From<Condition> for FilterClause {
    fn from(cond: Condition) -> Self {
        FilterClause::Condition(cond)
    }
}

/// Flat record shape used when a filter is read from or written to a file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawFilter {
    #[serde(default)]
    column: String,
    #[serde(default)]
    operator: Operator,
    #[serde(default)]
    value: Value,
    #[serde(default)]
    connector: Connector,
    #[serde(default)]
    parameter: Option<String>,
}

impl From<RawFilter> for FilterClause {
    fn from(raw: RawFilter) -> Self {
        let clause = FilterClause::new(raw.column, raw.value, raw.operator, raw.connector);
        match (clause, raw.parameter) {
            (FilterClause::Condition(cond), Some(parameter)) if !parameter.is_empty() => {
                FilterClause::Condition(cond.parameter(parameter))
            }
            (clause, _) => clause,
        }
    }
}

impl From<FilterClause> for RawFilter {
    fn from(clause: FilterClause) -> Self {
        match clause {
            FilterClause::Condition(cond) => RawFilter {
                column: cond.column,
                operator: cond.operator,
                value: cond.value,
                connector: cond.connector,
                parameter: Some(cond.parameter),
            },
            FilterClause::Group {
                grouping,
                connector,
            } => RawFilter {
                operator: Operator::parse(grouping.token()),
                connector,
                ..RawFilter::default()
            },
        }
    }
}

/// One ORDER BY entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SortSpec {
    pub column: String,
    #[serde(default)]
    pub direction: Direction,
}

impl SortSpec {
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: Direction::Ascending,
        }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: Direction::Descending,
        }
    }
}
