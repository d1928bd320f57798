/*!
Credential authentication service.

Registers users and authenticates them against stored Argon2 digests,
issuing a signed bearer token on login. The crate follows a hexagonal
layout: `domain` holds the flows and their ports, `inbound` the HTTP
surface, `outbound` the Postgres and hashing adapters.
*/

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::account;
