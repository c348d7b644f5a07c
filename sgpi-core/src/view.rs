//! State of one mounted listing view.
//!
//! A `CatalogView` owns the catalog copy, the pending/committed criteria,
//! the current page and the URL bridge for a single view, and keeps the
//! filtered result in step with them.

use url::Url;

use crate::catalog::Catalog;
use crate::pagination::{self, Paginator};
use crate::record::Record;
use crate::resource::Resource;
use crate::search::{self, Category, FilterCriteria, SearchState};
use crate::sync::CatalogHandle;
use crate::url_state::QueryBridge;

/// What the results area should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    /// Nothing searched yet on a view that requires a search.
    PreSearch,
    /// Still loading and nothing to show yet.
    Loading,
    /// A search ran and matched nothing.
    NoMatches,
    Results(usize),
}

pub struct CatalogView {
    resource: Resource,
    catalog: Catalog,
    loading: bool,
    search: SearchState,
    bridge: QueryBridge,
    paginator: Paginator,
    current_page: usize,
    matches: Vec<usize>,
}

impl CatalogView {
    /// Mount a view at `url`. Criteria come from the URL; the catalog starts
    /// empty and loading.
    pub fn mount(resource: Resource, url: Url) -> Self {
        let bridge = QueryBridge::new(url, resource);
        let search = SearchState::new(bridge.read());

        let mut view = CatalogView {
            resource,
            catalog: Catalog::empty(resource),
            loading: true,
            search,
            bridge,
            paginator: Paginator::default(),
            current_page: 1,
            matches: Vec::new(),
        };
        view.refilter();
        view
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn url(&self) -> &Url {
        self.bridge.url()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Take the latest state of an in-flight load.
    pub fn sync_from(&mut self, handle: &CatalogHandle) {
        self.loading = handle.is_loading();
        self.replace_catalog(handle.catalog());
    }

    pub fn replace_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.refilter();
    }

    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    /// Edit the pending keyword. Results and URL are unaffected.
    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.search.set_keyword(keyword);
    }

    /// Edit the pending category. Results and URL are unaffected.
    pub fn set_category(&mut self, category: Category) {
        self.search.set_category(category);
    }

    /// Apply pending criteria, reset to page 1 and update the URL.
    pub fn commit(&mut self) -> &FilterCriteria {
        self.search.commit();
        self.bridge.write(self.search.committed());
        self.current_page = 1;
        self.refilter();
        self.search.committed()
    }

    /// Reset criteria, URL and page.
    pub fn clear(&mut self) {
        self.search.clear();
        self.bridge.clear();
        self.current_page = 1;
        self.refilter();
    }

    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages(self.matches.len())
    }

    /// Move to `page`, clamped to the available pages.
    pub fn goto_page(&mut self, page: usize) -> usize {
        self.current_page = self.paginator.clamp(page, self.matches.len());
        self.current_page
    }

    pub fn next_page(&mut self) -> usize {
        self.goto_page(self.current_page + 1)
    }

    pub fn prev_page(&mut self) -> usize {
        self.goto_page(self.current_page.saturating_sub(1))
    }

    /// Page numbers for the navigation controls.
    pub fn page_window(&self) -> std::ops::RangeInclusive<usize> {
        pagination::window(self.current_page, self.total_pages())
    }

    /// 1-based first and last result on the current page.
    pub fn showing(&self) -> Option<(usize, usize)> {
        self.paginator.showing(self.matches.len(), self.current_page)
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Every matching record in catalog order.
    pub fn results(&self) -> impl Iterator<Item = &Record> {
        self.matches.iter().map(|&i| &self.catalog.records[i])
    }

    /// Matching records on the current page.
    pub fn page_records(&self) -> Vec<&Record> {
        self.paginator
            .page(&self.matches, self.current_page)
            .iter()
            .map(|&i| &self.catalog.records[i])
            .collect()
    }

    pub fn status(&self) -> ViewStatus {
        let committed = self.search.committed();
        if self.resource.requires_search() && !self.search.has_searched() && committed.is_default() {
            ViewStatus::PreSearch
        } else if self.matches.is_empty() && self.loading {
            ViewStatus::Loading
        } else if self.matches.is_empty() {
            ViewStatus::NoMatches
        } else {
            ViewStatus::Results(self.matches.len())
        }
    }

    fn refilter(&mut self) {
        self.matches = search::apply(
            &self.catalog.records,
            self.resource,
            self.search.committed(),
            self.search.has_searched(),
        );
        self.current_page = self.paginator.clamp(self.current_page, self.matches.len());
    }
}
