//! Business logic services for the admin API.

pub mod auth;
pub mod roles;

pub use auth::{AuthError, AuthService, IssuedToken};
pub use roles::{
    CollaboratorError, IdentityResolver, RoleCommand, RoleService, RoleServiceError, RoleStore,
};
