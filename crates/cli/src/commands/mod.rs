//! Sous-commandes

pub mod demo;
pub mod go;
pub mod query;
pub mod sequence;
