pub mod browse;
pub mod config;
pub mod list;
pub mod next_event;

use std::sync::Arc;

use anyhow::{Context as _, Result};
use sgpi_core::Resource;
use sgpi_core::config::SgpiConfig;
use sgpi_core::remote::HttpCatalogSource;
use sgpi_core::session::MemorySessionStore;
use sgpi_core::sync::CatalogSync;
use sgpi_core::url_state::QueryBridge;
use url::Url;

/// Everything a command needs: configuration plus one sync layer whose
/// session cache lives as long as the process.
pub struct Context {
    pub config: SgpiConfig,
    pub sync: CatalogSync,
}

impl Context {
    pub fn load() -> Result<Self> {
        let config = SgpiConfig::load()?;
        let source = HttpCatalogSource::new(&config.endpoint)?;
        let sync = CatalogSync::new(Arc::new(source), Arc::new(MemorySessionStore::new()));

        Ok(Context { config, sync })
    }

    /// The URL a view mounts at: a shared link when given, otherwise the
    /// configured site's route for `resource`.
    pub fn view_url(&self, resource: Resource, shared: Option<&str>) -> Result<Url> {
        match shared {
            Some(link) => Url::parse(link).with_context(|| format!("Invalid link '{link}'")),
            None => {
                let site = self.config.site_url()?;
                Ok(QueryBridge::for_site(&site, resource)?.url().clone())
            }
        }
    }
}
