//! # quarry
//!
//! > **Describe the rows. Get the SQL.**
//!
//! quarry compiles a dialect-neutral description of a database operation
//! (create, read, update, delete or count over a table) into parameterized
//! SQL text plus a bind map.
//!
//! ## Quick Example
//!
//! ```
//! use quarry::prelude::*;
//!
//! let query = QueryDescriptor::new("Animal")
//!     .set_projection(["Name", "Age"])
//!     .add_filter("Age", 25)
//!     .add_filter_with("IDOffice", vec![10, 11], "IN", "AND")
//!     .set_cap(100);
//!
//! let compiled = query.compile(Action::Read).unwrap();
//! assert_eq!(
//!     compiled.body,
//!     "SELECT Name, Age FROM `Animal` WHERE Age = :Age_w0 AND IDOffice IN ( :IDOffice_w1 ) LIMIT 100;"
//! );
//! assert_eq!(compiled.params.len(), 2);
//! ```
//!
//! ## Bind names
//!
//! | Source        | Name                     |
//! |---------------|--------------------------|
//! | Record field  | `<column>_<field index>` |
//! | Filter clause | `<parameter>_w<position>`|

pub mod ast;
pub mod config;
pub mod error;
pub mod schema;
pub mod transpiler;

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::error::*;
    pub use crate::schema::{ColumnDefinition, ColumnRole, Schema};
    pub use crate::transpiler::{Compile, CompiledQuery, Dialect, SqlGenerator};
}
