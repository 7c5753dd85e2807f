//! Explorer pagination.
//!
//! The routes rebuild a [`TableState`] from the page query on every request,
//! and the forms never send a page number alongside a filter or page-size
//! change, so the reset-to-page-1 rule holds through the query string. The
//! mutators ([`Pager::set_limit`], [`TableState::set_filters`]) state the
//! same rule for code that keeps a table state alive between edits.

use url::form_urlencoded;

use crate::domain::filters::{FilterState, QueryParams};

/// Rows per page offered by the explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Fifteen,
    Thirty,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Fifteen,
        PageSize::Thirty,
        PageSize::Fifty,
        PageSize::Hundred,
    ];

    pub fn get(self) -> u32 {
        match self {
            PageSize::Fifteen => 15,
            PageSize::Thirty => 30,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }

    pub fn from_value(value: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.get() == value)
    }
}

/// Page request sent to the `/tweets` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub limit: PageSize,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: PageSize::default(),
        }
    }
}

impl PageQuery {
    pub fn new(page: u32, limit: PageSize) -> Self {
        Self {
            page: page.max(1),
            limit,
        }
    }

    /// Reads `page` and `limit`; missing or unusable values fall back to page 1 of 15.
    pub fn from_query(query: &str) -> Self {
        let mut page = 1;
        let mut limit = PageSize::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "page" => page = value.parse().unwrap_or(1),
                "limit" => {
                    limit = value
                        .parse()
                        .ok()
                        .and_then(PageSize::from_value)
                        .unwrap_or_default()
                }
                _ => {}
            }
        }

        Self::new(page, limit)
    }

    pub fn query_params(&self) -> QueryParams {
        vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.get().to_string()),
        ]
    }
}

/// Pagination controller of the explorer.
///
/// `total` always comes from the last server response; the page count is
/// derived from it and never computed from local rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    query: PageQuery,
    total: u64,
}

impl Pager {
    pub fn new(query: PageQuery) -> Self {
        Self { query, total: 0 }
    }

    pub fn query(&self) -> PageQuery {
        self.query
    }

    pub fn page(&self) -> u32 {
        self.query.page
    }

    pub fn limit(&self) -> PageSize {
        self.query.limit
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn set_total(&mut self, total: u64) {
        self.total = total;
    }

    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(u64::from(self.query.limit.get()))
    }

    /// Page count shown to users, never below one.
    pub fn display_pages(&self) -> u64 {
        self.total_pages().max(1)
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.query.page) < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.query.page > 1
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.query.page += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.has_prev() {
            self.query.page -= 1;
        }
    }

    pub fn set_limit(&mut self, limit: PageSize) {
        if limit != self.query.limit {
            self.query.limit = limit;
            self.reset();
        }
    }

    pub fn reset(&mut self) {
        self.query.page = 1;
    }
}

/// Filters and pagination of the explorer, kept together so a filter edit
/// always sends the table back to its first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    filters: FilterState,
    pager: Pager,
}

impl TableState {
    pub fn new(filters: FilterState, query: PageQuery) -> Self {
        Self {
            filters,
            pager: Pager::new(query),
        }
    }

    pub fn from_query(query: &str) -> Self {
        Self::new(FilterState::from_query(query), PageQuery::from_query(query))
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn pager_mut(&mut self) -> &mut Pager {
        &mut self.pager
    }

    pub fn set_filters(&mut self, filters: FilterState) {
        if filters != self.filters {
            self.filters = filters;
            self.pager.reset();
        }
    }
}
