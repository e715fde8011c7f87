//! Application layer with the page providers.

/// Page provider implementations.
pub mod providers;

pub use providers::{
    CacheFirstProvider, CachingRemoteProvider, LocalProvider, PrimaryWithFallbackProvider,
    ProviderAssembler,
};
