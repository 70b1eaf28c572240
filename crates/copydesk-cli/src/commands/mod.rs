//! Command implementations.

pub mod analyze;
pub mod concept;
pub mod convert;
pub mod copy;
pub mod favorites;
pub mod theme;
