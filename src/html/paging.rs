// src/html/paging.rs

use std::fmt;

use crate::core::checkers::{check_positive_integer, Numeric};
use crate::core::errors::Result;

pub const DEFAULT_DISTANCE: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u64),
    Ellipsis,
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageItem::Page(page) => write!(f, "{}", page),
            PageItem::Ellipsis => write!(f, "..."),
        }
    }
}

/// Page links for a paginator: the first page, `current ± distance`, the last page,
/// with an ellipsis standing in for each run of pages left out.
pub fn get_pages<C: Numeric, T: Numeric, D: Numeric>(current: C, total: T, distance: D) -> Result<Vec<PageItem>> {
    let current = check_positive_integer(current, "current", true)?;
    let total = check_positive_integer(total, "total", true)?;
    let distance = check_positive_integer(distance, "distance", false)?;

    let first = current.saturating_sub(distance).max(2);
    let last = current.saturating_add(distance).min(total.saturating_sub(1));

    let mut pages = vec![PageItem::Page(1)];
    if first > 2 {
        pages.push(PageItem::Ellipsis);
    }
    pages.extend((first..=last).map(PageItem::Page));
    if last.max(1) < total.saturating_sub(1) {
        pages.push(PageItem::Ellipsis);
    }
    if total > 1 {
        pages.push(PageItem::Page(total));
    }
    Ok(pages)
}
