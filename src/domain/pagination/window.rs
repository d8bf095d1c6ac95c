// src/domain/pagination/window.rs

/// Offset/limit pair for one page of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub skip: u64,
    pub take: u32,
}

impl PageWindow {
    /// `page` below 1 is read as 1. `page_size` is a per-listing constant and
    /// never zero.
    #[must_use]
    pub fn compute(page: u32, page_size: u32) -> Self {
        let page = page.max(1);
        Self {
            page,
            skip: u64::from(page - 1) * u64::from(page_size),
            take: page_size,
        }
    }

    /// 1-based rank of the first and last row this window shows, given the
    /// match total. `None` when the window lies past the end.
    #[must_use]
    pub fn showing_range(&self, total: u64) -> Option<(u64, u64)> {
        if self.skip >= total {
            return None;
        }
        let last = (self.skip + u64::from(self.take)).min(total);
        Some((self.skip + 1, last))
    }
}

/// `ceil(total / page_size)`; zero matches give zero pages.
#[must_use]
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    let pages = total.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}
