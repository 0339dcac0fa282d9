//! End-to-end compilation against the MySQL dialect.

use pretty_assertions::assert_eq;
use quarry::prelude::*;

const ANIMAL_SCHEMA: &str = r#"[
    { "Column": "IDAnimal",       "Type": "AutoIdentity" },
    { "Column": "GUIDAnimal",     "Type": "AutoGUID" },
    { "Column": "CreateDate",     "Type": "CreateDate" },
    { "Column": "CreatingIDUser", "Type": "CreateIDUser" },
    { "Column": "UpdateDate",     "Type": "UpdateDate" },
    { "Column": "UpdatingIDUser", "Type": "UpdateIDUser" },
    { "Column": "Deleted",        "Type": "Deleted" },
    { "Column": "DeletingIDUser", "Type": "DeleteIDUser" },
    { "Column": "DeleteDate",     "Type": "DeleteDate" }
]"#;

fn mysql(query: &QueryDescriptor, action: Action) -> Result<String, CompileError> {
    let dialect: Dialect = "MySQL".parse().expect("MySQL is registered");
    query
        .compile_with_dialect(action, dialect)
        .map(|compiled| compiled.body)
}

#[test]
fn dialect_reports_its_name() {
    let dialect: Dialect = "MySQL".parse().unwrap();
    assert_eq!(dialect.generator().name(), "MySQL");
}

#[test]
fn create_query() {
    let q = QueryDescriptor::new("Animal")
        .set_log_level(5)
        .add_record([
            ("IDAnimal", Value::Null),
            ("Name", "Foo Foo".into()),
            ("Age", 15.into()),
        ]);
    assert_eq!(
        mysql(&q, Action::Create).unwrap(),
        "INSERT INTO `Animal` ( IDAnimal, Name, Age) VALUES ( :IDAnimal_0, :Name_1, :Age_2);"
    );
}

#[test]
fn bad_create_query() {
    let q = QueryDescriptor::default();
    assert!(mysql(&q, Action::Create).is_err());
    let q = q.add_record(Record::new());
    assert!(matches!(
        mysql(&q, Action::Create),
        Err(CompileError::EmptyFieldSet { .. })
    ));
}

#[test]
fn read_query() {
    let q = QueryDescriptor::new("Animal");
    assert_eq!(mysql(&q, Action::Read).unwrap(), "SELECT * FROM `Animal`;");
}

#[test]
fn complex_read_query() {
    let q = QueryDescriptor::new("Animal")
        .set_cap(10)
        .set_begin(0)
        .set_projection(["Name", "Age", "Cost"])
        .set_sort(vec![SortSpec::asc("Age"), SortSpec::desc("Cost")])
        .set_filter(Condition::new("Age", "15").operator("=").connector("AND").parameter("Age"));
    assert_eq!(
        mysql(&q, Action::Read).unwrap(),
        "SELECT Name, Age, Cost FROM `Animal` WHERE Age = :Age_w0 ORDER BY Age, Cost DESC LIMIT 0, 10;"
    );
}

#[test]
fn complex_read_query_2() {
    let q = QueryDescriptor::new("Animal")
        .set_projection(["Name", "Age", "Cost"])
        .set_cap(100)
        .add_filter("Age", "25")
        .add_filter_with("", "", "(", "AND")
        .add_filter("Color", "Red")
        .add_filter_with("Color", "Green", "=", "OR")
        .add_filter_with("", "", ")", "AND")
        .add_filter_with("Description", "", "IS NOT NULL", "AND")
        .add_filter_with("IDOffice", vec![10, 11, 15, 18, 22], "IN", "AND");
    let compiled = q.compile(Action::Read).unwrap();
    assert_eq!(
        compiled.body,
        "SELECT Name, Age, Cost FROM `Animal` WHERE Age = :Age_w0 AND ( Color = :Color_w2 OR Color = :Color_w3 ) AND Description IS NOT NULL AND IDOffice IN ( :IDOffice_w6 ) LIMIT 100;"
    );
    assert!(!compiled.params.contains_key("Description_w5"));
    assert_eq!(compiled.params["IDOffice_w6"], Value::from(vec![10, 11, 15, 18, 22]));
}

#[test]
fn custom_read_query() {
    let q = QueryDescriptor::new("Animal")
        .set_cap(10)
        .set_begin(0)
        .set_projection(["Name", "Age", "Cost"])
        .set_sort(vec![SortSpec::asc("Age"), SortSpec::desc("Cost")])
        .set_filter(Condition::new("Age", "15"))
        .set_override("SELECT Name, Age * 5, Cost FROM <%= TableName %> <%= Where %> <%= Limit %>;");
    assert_eq!(
        mysql(&q, Action::Read).unwrap(),
        "SELECT Name, Age * 5, Cost FROM  `Animal`  WHERE Age = :Age_w0  LIMIT 0, 10;"
    );
}

#[test]
fn bad_custom_read_query() {
    let q = QueryDescriptor::new("Animal")
        .set_cap(10)
        .set_begin(0)
        .set_filter(Condition::new("Age", "15"))
        .set_override("SELECT Name, Age * 5, Cost FROM <%= TableName  <%= Where %> <%= Limit ;");
    assert!(matches!(
        mysql(&q, Action::Read),
        Err(CompileError::MalformedTemplate { .. })
    ));
}

#[test]
fn custom_count_query() {
    let q = QueryDescriptor::new("Animal")
        .set_filter(Condition::new("Age", "15"))
        .set_override("SELECT COUNT(*) AS RowCount FROM <%= TableName %> <%= Where %>;");
    assert_eq!(
        mysql(&q, Action::Count).unwrap(),
        "SELECT COUNT(*) AS RowCount FROM  `Animal`  WHERE Age = :Age_w0;"
    );
}

#[test]
fn bad_custom_count_query() {
    let q = QueryDescriptor::new("Animal")
        .set_filter(Condition::new("Age", "15"))
        .set_override("SELECT COUNT(*) AS RowCount FROM <%= TableName  <%= TableName %> <%= Where;");
    assert!(mysql(&q, Action::Count).is_err());
}

#[test]
fn update_query() {
    let q = QueryDescriptor::new("Animal")
        .set_log_level(5)
        .add_filter("IDAnimal", 9)
        .add_record([("Age", Value::from(15)), ("Color", Value::from("Brown"))]);
    assert_eq!(
        mysql(&q, Action::Update).unwrap(),
        "UPDATE `Animal` SET Age = :Age_0, Color = :Color_1 WHERE IDAnimal = :IDAnimal_w0;"
    );
}

#[test]
fn bad_update_query() {
    let q = QueryDescriptor::default();
    assert!(mysql(&q, Action::Update).is_err());
    let q = q.add_record(Record::new());
    assert!(mysql(&q, Action::Update).is_err());
}

#[test]
fn delete_query() {
    let q = QueryDescriptor::new("Animal").add_filter("IDAnimal", 10);
    assert_eq!(
        mysql(&q, Action::Delete).unwrap(),
        "DELETE FROM `Animal` WHERE IDAnimal = :IDAnimal_w0;"
    );
}

#[test]
fn count_query() {
    let q = QueryDescriptor::new("Animal");
    assert_eq!(
        mysql(&q, Action::Count).unwrap(),
        "SELECT COUNT(*) AS RowCount FROM `Animal`;"
    );
}

#[test]
fn create_query_with_schema_from_json() {
    let q = QueryDescriptor::from_json(&format!(
        r#"{{
            "scope": "Animal",
            "records": [{{
                "IDAnimal": false, "GUIDAnimal": false, "CreateDate": false,
                "CreatingIDUser": false, "UpdateDate": false, "UpdatingIDUser": false,
                "Deleted": false, "DeletingIDUser": false, "DeleteDate": false,
                "Name": "Froo Froo", "Age": 18
            }}],
            "schema": {}
        }}"#,
        ANIMAL_SCHEMA
    ))
    .unwrap();
    assert_eq!(
        mysql(&q, Action::Create).unwrap(),
        "INSERT INTO `Animal` ( IDAnimal, GUIDAnimal, CreateDate, CreatingIDUser, UpdateDate, UpdatingIDUser, Deleted, Name, Age) VALUES ( NULL, :GUIDAnimal_1, NOW(), :CreatingIDUser_3, NOW(), :UpdatingIDUser_5, :Deleted_6, :Name_7, :Age_8);"
    );
}

#[test]
fn update_query_with_schema_from_json() {
    let mut q = QueryDescriptor::new("Animal")
        .add_filter("IDAnimal", 9)
        .add_record([
            ("IDAnimal", Value::from(82)),
            ("GUIDAnimal", "1111-2222-3333-4444-5555-6666-7777".into()),
            ("CreateDate", false.into()),
            ("CreatingIDUser", false.into()),
            ("UpdateDate", false.into()),
            ("UpdatingIDUser", false.into()),
            ("Deleted", false.into()),
            ("DeletingIDUser", false.into()),
            ("DeleteDate", false.into()),
            ("Name", "Froo Froo".into()),
            ("Age", 18.into()),
        ]);
    q.schema = Some(Schema::from_json(ANIMAL_SCHEMA).unwrap());
    assert_eq!(
        mysql(&q, Action::Update).unwrap(),
        "UPDATE `Animal` SET GUIDAnimal = :GUIDAnimal_0, UpdateDate = NOW(), UpdatingIDUser = :UpdatingIDUser_2, Deleted = :Deleted_3, Name = :Name_4, Age = :Age_5 WHERE IDAnimal = :IDAnimal_w0;"
    );
}

#[test]
fn compiled_query_serializes_for_the_binding_layer() {
    let q = QueryDescriptor::new("Animal")
        .add_filter("Age", 25)
        .add_filter_with("IDOffice", vec![10, 11], "IN", "AND");
    let compiled = q.compile(Action::Read).unwrap();
    let json = serde_json::to_value(&compiled).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "body": "SELECT * FROM `Animal` WHERE Age = :Age_w0 AND IDOffice IN ( :IDOffice_w1 );",
            "params": { "Age_w0": 25, "IDOffice_w1": [10, 11] }
        })
    );
}
