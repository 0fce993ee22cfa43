//! Utility helpers shared across page components.

pub mod validate;
