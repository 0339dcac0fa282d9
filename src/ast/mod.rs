//! Descriptor model: what to build, independent of any dialect.

pub mod conditions;
pub mod descriptor;
pub mod operators;
pub mod values;

pub use conditions::{Condition, FilterClause, Grouping, SortSpec};
pub use descriptor::{Pagination, QueryDescriptor, Record};
pub use operators::{Action, Connector, Direction, Operator};
pub use values::Value;
