use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuarryError;
use crate::transpiler::sql::mysql::MysqlGenerator;
use crate::transpiler::traits::SqlGenerator;

/// Supported SQL Dialects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dialect {
    #[default]
    #[serde(alias = "mysql")]
    MySQL,
}

impl Dialect {
    pub const ALL: [Dialect; 1] = [Dialect::MySQL];

    pub fn generator(&self) -> Box<dyn SqlGenerator> {
        match self {
            Dialect::MySQL => Box::new(MysqlGenerator),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Dialect::MySQL => "MySQL",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Dialect {
    type Err = QuarryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| QuarryError::InvalidDialect(s.to_string()))
    }
}
