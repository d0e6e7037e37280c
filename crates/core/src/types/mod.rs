//! Core types for Za'atar Kitchen.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod color;
pub mod email;
pub mod id;
pub mod price;
pub mod role;

pub use color::{HslColor, HslColorError};
pub use email::{Email, EmailError};
pub use id::*;
pub use price::Price;
pub use role::{Role, RoleError, RoleGrant};
