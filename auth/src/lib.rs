//! Authentication primitives for the account service.
//!
//! Two concerns live here, each behind its own module:
//! - one-way password hashing and verification (Argon2id), producing the
//!   digest that replaces the plaintext in storage
//! - bearer-token issuance and verification (JWT, HS256) with a mandatory
//!   expiry claim
//!
//! The service composes these behind its own ports, so the crate stays free
//! of persistence and transport concerns.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("pa55w0rd").unwrap();
//! assert!(hasher.verify("pa55w0rd", &digest).unwrap());
//! assert!(!hasher.verify("wrong!pw", &digest).unwrap());
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::{AccessClaims, TokenIssuer};
//! use chrono::Duration;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = AccessClaims::for_subject("rob@example.com", Duration::hours(24));
//! let token = issuer.sign(&claims).unwrap();
//!
//! let decoded: AccessClaims = issuer.verify(&token).unwrap();
//! assert_eq!(decoded.sub, "rob@example.com");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::AccessClaims;
pub use token::TokenError;
pub use token::TokenIssuer;
