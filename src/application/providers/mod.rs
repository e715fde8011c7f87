//! First-page providers and their composition.

mod assembler;
mod cache_first_provider;
mod caching_remote_provider;
mod local_provider;
mod primary_with_fallback_provider;

pub use assembler::ProviderAssembler;
pub use cache_first_provider::CacheFirstProvider;
pub use caching_remote_provider::CachingRemoteProvider;
pub use local_provider::LocalProvider;
pub use primary_with_fallback_provider::PrimaryWithFallbackProvider;
