//! Shared application state for the web server.

use std::path::PathBuf;
use std::sync::Arc;

use labsite_common::{Catalog, SiteProfile, YearFilter};

use crate::config::Config;
use crate::error::Result;
use crate::render::Renderer;

/// Shared state injected into every Axum handler. Read-only after startup.
pub struct AppState {
    pub catalog: Catalog,
    /// Derived once; the catalog never changes
    pub year_options: Vec<YearFilter>,
    pub profile: SiteProfile,
    pub renderer: Renderer,
    pub public_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(catalog: Catalog, profile: SiteProfile, renderer: Renderer) -> Self {
        let year_options = catalog.year_options();
        Self {
            catalog,
            year_options,
            profile,
            renderer,
            public_dir: None,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = config.catalog()?;
        let renderer = Renderer::new(config.content.templates_dir.as_deref())?;
        let mut state = Self::new(catalog, config.site.clone(), renderer);
        state.public_dir = config.content.public_dir.clone();
        Ok(state)
    }

    /// Demo catalog, default profile, embedded templates.
    pub fn demo() -> Result<Self> {
        Ok(Self::new(Catalog::demo(), SiteProfile::default(), Renderer::embedded()?))
    }
}

pub type SharedState = Arc<AppState>;
