//! HTTP route handlers.

pub mod attributes;
pub mod champion;
pub mod health;
pub mod search;
pub mod validate;
