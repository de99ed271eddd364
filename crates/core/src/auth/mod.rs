//! Authentication - login and registration payloads, schemas, and the
//! client contract implemented by the API crate.

mod auth_model;
mod auth_schema;
mod auth_service;
mod auth_traits;

pub use auth_model::{LoginData, LoginResponse, RegisterData, RegisterPayload};
pub use auth_schema::{is_valid_email, is_valid_mobile_phone, validate_login, validate_register};
pub use auth_service::AuthService;
pub use auth_traits::AuthClientTrait;
