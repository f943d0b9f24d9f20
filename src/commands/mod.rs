//! Command implementations for taxograph

pub mod check;
pub mod dispatch;
pub mod query;
pub mod show;
