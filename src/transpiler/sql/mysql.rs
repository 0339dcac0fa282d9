use crate::transpiler::traits::SqlGenerator;

/// MySQL Generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct MysqlGenerator;

impl MysqlGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl SqlGenerator for MysqlGenerator {
    fn name(&self) -> &str {
        "MySQL"
    }

    fn quote_table(&self, name: &str) -> String {
        format!("`{}`", name.replace('`', "``"))
    }

    fn bind_marker(&self, name: &str) -> String {
        format!(":{}", name)
    }

    fn now_literal(&self) -> &str {
        "NOW()"
    }

    fn null_literal(&self) -> &str {
        "NULL"
    }

    fn limit_clause(&self, begin: Option<u64>, cap: Option<u64>) -> String {
        // MySQL's LIMIT [offset,] row_count; an offset alone has no form.
        let Some(cap) = cap else {
            return String::new();
        };
        match begin {
            Some(begin) => format!(" LIMIT {}, {}", begin, cap),
            None => format!(" LIMIT {}", cap),
        }
    }
}
