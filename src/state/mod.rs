//! Page components.
//!
//! ARCHITECTURE
//! ============
//! Each component owns one behavior and talks to the page only through the
//! [`crate::view`] traits. Components share nothing with each other; the
//! [`crate::app`] module constructs them from one `PageContext`.

pub mod contact;
pub mod nav;
pub mod theme;
