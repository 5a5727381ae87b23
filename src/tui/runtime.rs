//! Browser state: the loaded network, the selected item and its chart.

use crate::catalog::{Catalog, Item};
use crate::config::AppConfig;
use crate::error::{InputError, RenderError};
use crate::io::load_catalog;
use crate::plot::Chart;

/// TUI application state.
pub struct App {
    /// Configuration the network was loaded from (kept for reload).
    config: AppConfig,
    catalog: Catalog,
    /// Index of the highlighted item.
    pub selected: usize,
    /// Chart of the highlighted item.
    chart: Result<Chart, RenderError>,
    /// One-line message shown in the footer.
    pub status: String,
    /// Whether the user has requested quit.
    pub quit: bool,
}

impl App {
    /// Loads the network described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if the network cannot be loaded.
    pub fn new(config: AppConfig) -> Result<Self, InputError> {
        let catalog = load_catalog(&config.input, &config.defaults.build_defaults())?;
        let status = format!("{} items loaded", catalog.len());
        Ok(Self::with_catalog(config, catalog, status))
    }

    /// Wraps an already-built catalog.
    pub fn with_catalog(config: AppConfig, catalog: Catalog, status: String) -> Self {
        let mut app = Self {
            config,
            catalog,
            selected: 0,
            chart: Err(RenderError::UnknownItem(String::new())),
            status,
            quit: false,
        };
        app.refresh_chart();
        app
    }

    pub fn items(&self) -> &[Item] {
        self.catalog.items()
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.catalog.items().get(self.selected)
    }

    /// Chart of the highlighted item, or why it could not be drawn.
    pub fn chart(&self) -> Result<&Chart, &RenderError> {
        self.chart.as_ref()
    }

    /// Highlights item `index`, clamped to the list.
    pub fn select(&mut self, index: usize) {
        let last = self.catalog.len().saturating_sub(1);
        let index = index.min(last);
        if index != self.selected {
            self.selected = index;
            self.refresh_chart();
        }
    }

    pub fn select_next(&mut self) {
        self.select(self.selected.saturating_add(1));
    }

    pub fn select_previous(&mut self) {
        self.select(self.selected.saturating_sub(1));
    }

    /// Rebuilds the network from its source, keeping the selection by name.
    ///
    /// On failure the current network stays and the error is shown.
    pub fn reload(&mut self) {
        match load_catalog(&self.config.input, &self.config.defaults.build_defaults()) {
            Ok(catalog) => {
                let name = self.selected_item().map(|i| i.name.clone());
                self.catalog = catalog;
                self.selected = name
                    .and_then(|n| self.catalog.items().iter().position(|i| i.name == n))
                    .unwrap_or(0);
                self.status = format!("reloaded, {} items", self.catalog.len());
                self.refresh_chart();
            }
            Err(e) => self.status = format!("reload failed: {e}"),
        }
    }

    fn refresh_chart(&mut self) {
        let style = self.config.plot.style();
        self.chart = match self.catalog.items().get(self.selected) {
            Some(item) => self.catalog.compose(&item.name, &style),
            None => Err(RenderError::UnknownItem(String::new())),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(AppConfig::reference()).expect("reference network loads")
    }

    #[test]
    fn starts_on_first_item_with_chart() {
        let app = app();
        assert_eq!(app.selected, 0);
        assert_eq!(app.selected_item().map(|i| i.name.as_str()), Some("TS5"));
        assert!(app.chart().is_ok());
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut app = app();
        app.select_previous();
        assert_eq!(app.selected, 0);
        for _ in 0..10 {
            app.select_next();
        }
        assert_eq!(app.selected, 3);
        let title = app.chart().map(|c| c.title.clone()).ok();
        assert_eq!(title.as_deref(), Some("Curves for Load"));
        app.select(0);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn reload_keeps_selection() {
        let mut app = app();
        app.select(2);
        app.reload();
        assert_eq!(app.selected, 2);
        assert!(app.status.starts_with("reloaded"));
    }

    #[test]
    fn failed_reload_keeps_network() {
        let mut app = app();
        app.config.input.preset = None;
        app.reload();
        assert!(app.status.starts_with("reload failed"));
        assert_eq!(app.items().len(), 4);
    }
}
