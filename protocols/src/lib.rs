//! Wire formats spoken by the resolver adapters.

pub mod dns;
