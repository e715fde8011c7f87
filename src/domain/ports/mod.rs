mod games_cache_port;
mod page_provider_port;
mod remote_games_port;

pub use games_cache_port::GamesCachePort;
#[cfg(test)]
pub use page_provider_port::MockPageProvider;
pub use page_provider_port::PageProvider;
pub use remote_games_port::RemoteGamesPort;
