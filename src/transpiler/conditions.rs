//! Filter chain compilation.

use indexmap::IndexMap;
use tracing::trace;

use super::traits::SqlGenerator;
use crate::ast::*;

/// Bind name to value, in the order parameters appear in the statement.
pub type Params = IndexMap<String, Value>;

/// Bind name for the filter at `index` in the chain.
pub fn filter_param_name(parameter: &str, index: usize) -> String {
    format!("{}_w{}", parameter, index)
}

/// Render the WHERE fragment (leading space included) for a filter chain and
/// record its bind values in `params`.
///
/// Every clause consumes its chain position as the bind suffix, including
/// grouping tokens and unary tests that bind nothing. An empty chain renders
/// as an empty string.
pub fn build_where(filters: &[FilterClause], generator: &dyn SqlGenerator, params: &mut Params) -> String {
    if filters.is_empty() {
        return String::new();
    }

    let mut sql = String::from(" WHERE");
    let mut emitted = false;
    // Set after an opening token so the next clause does not repeat a connector.
    let mut after_open = false;

    for (index, clause) in filters.iter().enumerate() {
        let is_close = matches!(
            clause,
            FilterClause::Group {
                grouping: Grouping::Close,
                ..
            }
        );
        if emitted && !after_open && !is_close {
            if let Some(keyword) = clause.connector().keyword() {
                sql.push(' ');
                sql.push_str(keyword);
            }
        }
        after_open = false;
        emitted = true;

        match clause {
            FilterClause::Group { grouping, .. } => {
                sql.push(' ');
                sql.push_str(grouping.token());
                after_open = *grouping == Grouping::Open;
            }
            FilterClause::Condition(cond) => {
                sql.push(' ');
                sql.push_str(&condition_sql(cond, index, generator, params));
            }
        }
    }

    sql
}

fn condition_sql(cond: &Condition, index: usize, generator: &dyn SqlGenerator, params: &mut Params) -> String {
    if cond.operator.is_unary() {
        trace!(column = %cond.column, index, "unary filter binds nothing");
        return format!("{} {}", cond.column, cond.operator);
    }

    let name = filter_param_name(&cond.parameter, index);
    let marker = generator.bind_marker(&name);
    params.insert(name, cond.value.clone());

    if cond.operator.is_list() {
        format!("{} {} ( {} )", cond.column, cond.operator, marker)
    } else {
        format!("{} {} {}", cond.column, cond.operator, marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transpiler::sql::mysql::MysqlGenerator;

    fn render(filters: &[FilterClause]) -> (String, Params) {
        let mut params = Params::new();
        let sql = build_where(filters, &MysqlGenerator, &mut params);
        (sql, params)
    }

    #[test]
    fn test_empty_chain() {
        let (sql, params) = render(&[]);
        assert_eq!(sql, "");
        assert!(params.is_empty());
    }

    #[test]
    fn test_grouped_chain_positions() {
        let filters = vec![
            FilterClause::new("Age", "25", "=", "AND"),
            FilterClause::new("", "", "(", "AND"),
            FilterClause::new("Color", "Red", "=", "AND"),
            FilterClause::new("Color", "Green", "=", "OR"),
            FilterClause::new("", "", ")", "AND"),
            FilterClause::new("Description", "", "IS NOT NULL", "AND"),
            FilterClause::new("IDOffice", vec![10, 11, 15, 18, 22], "IN", "AND"),
        ];
        let (sql, params) = render(&filters);
        assert_eq!(
            sql,
            " WHERE Age = :Age_w0 AND ( Color = :Color_w2 OR Color = :Color_w3 ) AND Description IS NOT NULL AND IDOffice IN ( :IDOffice_w6 )"
        );
        let names: Vec<&str> = params.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Age_w0", "Color_w2", "Color_w3", "IDOffice_w6"]);
        assert_eq!(params["IDOffice_w6"], Value::from(vec![10, 11, 15, 18, 22]));
    }

    #[test]
    fn test_leading_group() {
        let filters = vec![
            FilterClause::open(),
            FilterClause::new("A", 1, "=", "AND"),
            FilterClause::new("B", 2, "=", "OR"),
            FilterClause::close(),
            FilterClause::new("C", 3, ">", "AND"),
        ];
        let (sql, _) = render(&filters);
        assert_eq!(sql, " WHERE ( A = :A_w1 OR B = :B_w2 ) AND C > :C_w4");
    }

    #[test]
    fn test_none_connector_and_custom_parameter() {
        let filters = vec![
            FilterClause::new("Age", 1, ">=", "AND"),
            FilterClause::Condition(
                Condition::new("Age", 9)
                    .operator("<=")
                    .connector("NONE")
                    .parameter("MaxAge"),
            ),
        ];
        let (sql, params) = render(&filters);
        assert_eq!(sql, " WHERE Age >= :Age_w0 Age <= :MaxAge_w1");
        assert!(params.contains_key("MaxAge_w1"));
    }

    #[test]
    fn test_null_and_false_values_still_bind() {
        let filters = vec![
            FilterClause::new("Deleted", false, "=", "AND"),
            FilterClause::new("Owner", Value::Null, "=", "AND"),
        ];
        let (sql, params) = render(&filters);
        assert_eq!(sql, " WHERE Deleted = :Deleted_w0 AND Owner = :Owner_w1");
        assert_eq!(params["Deleted_w0"], Value::Bool(false));
        assert_eq!(params["Owner_w1"], Value::Null);
    }
}
