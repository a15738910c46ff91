//! # Resolver Port
//!
//! The one outbound capability the classifier needs: turning an address back
//! into a name. Adapters live in `ipscope-core`; tests plug in their own.

use std::net::IpAddr;

use async_trait::async_trait;

use crate::error::ResolveError;

#[async_trait]
pub trait HostnameResolver: Send + Sync {
    /// Looks up the canonical name of `addr`.
    ///
    /// * `Ok(Some(name))`: a name was found.
    /// * `Ok(None)`: the resolver answered but knows no name.
    /// * `Err(_)`: the resolver could not be asked or did not answer in time.
    async fn resolve(&self, addr: IpAddr) -> Result<Option<String>, ResolveError>;
}
