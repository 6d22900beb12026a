//! Session daemon client module for gRPC communication

mod client;
mod traits;

pub use client::AuthClient;
pub use traits::AuthClientTrait;

#[cfg(test)]
pub use traits::MockAuthClientTrait;
