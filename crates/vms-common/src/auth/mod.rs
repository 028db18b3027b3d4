//! Authentication utilities

mod jwt;
mod password;
mod token_hash;

pub use jwt::{Claims, JwtService, TokenPair, TokenType};
pub use password::{hash_password, validate_password_strength, verify_password};
pub use token_hash::hash_token;
