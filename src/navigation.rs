use crate::catalog::{CatalogPage, PageNumber};

pub const POPULAR_PATH: &str = "/popular";

/// Prev/next targets derived from the page the catalog returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub prev: Option<PageNumber>,
    pub next: Option<PageNumber>,
}

impl Navigation {
    pub fn for_page(page: &CatalogPage) -> Self {
        Self {
            prev: prev_target(page.page),
            next: next_target(page.page),
        }
    }
}

/// No upper bound: paging past `total_pages` is left to the catalog.
pub fn next_target(current: Option<PageNumber>) -> Option<PageNumber> {
    current.and_then(|p| p.get().checked_add(1)).map(PageNumber)
}

/// Never steps below page 1.
pub fn prev_target(current: Option<PageNumber>) -> Option<PageNumber> {
    current
        .filter(|p| p.get() > 1)
        .map(|p| PageNumber(p.get() - 1))
}

pub fn page_href(page: PageNumber) -> String {
    format!("{POPULAR_PATH}?page={page}")
}
