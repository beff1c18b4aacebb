use std::path::PathBuf;
use std::sync::Arc;

use crate::app::error::{Result, TaproomError};
use crate::catalog::{PageEndpoint, PaginatedListController};
use crate::channel::FavoriteChannel;
use crate::config::Config;
use crate::decoder::Decoder;
use crate::fetcher::{Fetcher, HttpFetcher};

pub struct AppContext {
    pub config: Config,
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub decoder: Decoder,
    pub favorites: FavoriteChannel,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new(&config.api)?);
        Ok(Self::with_fetcher(config, fetcher))
    }

    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self {
            config,
            fetcher,
            decoder: Decoder::new(),
            favorites: FavoriteChannel::global().clone(),
        }
    }

    /// A fresh list controller for one browsing session.
    pub fn controller(&self) -> PaginatedListController {
        PaginatedListController::new(
            self.fetcher.clone(),
            self.decoder.clone(),
            PageEndpoint::from_config(&self.config.api),
            self.config.api.max_pages,
            self.favorites.clone(),
        )
    }

    /// File the TUI writes its logs to, so they stay off the screen.
    pub fn log_file_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| TaproomError::Config("Could not find data directory".into()))?;
        let taproom_dir = data_dir.join("taproom");
        std::fs::create_dir_all(&taproom_dir)?;
        Ok(taproom_dir.join("taproom.log"))
    }
}
