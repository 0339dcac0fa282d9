//! Concrete dialect generators.

pub mod mysql;
