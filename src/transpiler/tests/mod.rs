//! Transpiler test modules.
//!
//! Tests are organized by category:
//! - `core`: Basic SELECT, INSERT, UPDATE, DELETE, COUNT tests
//! - `schema`: Audit/identity column handling on writes
//! - `overrides`: Custom template rendering through the compiler
//! - `dialects`: Dialect selection and pluggable generators
