// src/domain/pagination/links.rs

/// Above this many pages the numbered run is windowed around the current page.
const FULL_RUN_LIMIT: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page { number: u32, is_current: bool },
    Ellipsis,
}

impl PageLink {
    const fn page(number: u32, current: u32) -> Self {
        Self::Page {
            number,
            is_current: number == current,
        }
    }

    #[must_use]
    pub const fn number(self) -> Option<u32> {
        match self {
            Self::Page { number, .. } => Some(number),
            Self::Ellipsis => None,
        }
    }
}

/// Previous/next control. `target` may point outside `1..=total` when the
/// control is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControl {
    pub target: u32,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLinkModel {
    pub previous: NavControl,
    pub entries: Vec<PageLink>,
    pub next: NavControl,
}

impl PageLinkModel {
    #[must_use]
    pub fn build(current_page: u32, total_pages: u32) -> Self {
        let previous = NavControl {
            target: current_page.saturating_sub(1),
            disabled: current_page <= 1,
        };
        let next = NavControl {
            target: current_page.saturating_add(1),
            disabled: total_pages == 0 || current_page >= total_pages,
        };

        let entries = if total_pages <= FULL_RUN_LIMIT {
            (1..=total_pages)
                .map(|number| PageLink::page(number, current_page))
                .collect()
        } else {
            Self::windowed(current_page, total_pages)
        };

        Self {
            previous,
            entries,
            next,
        }
    }

    fn windowed(current: u32, total: u32) -> Vec<PageLink> {
        let mut entries = vec![PageLink::page(1, current)];

        if current > 3 {
            entries.push(PageLink::Ellipsis);
        }

        let neighbours = [
            current.checked_sub(1),
            Some(current),
            current.checked_add(1),
        ];
        entries.extend(
            neighbours
                .into_iter()
                .flatten()
                .filter(|number| *number != 1 && *number != total && (1..=total).contains(number))
                .map(|number| PageLink::page(number, current)),
        );

        if current < total.saturating_sub(2) {
            entries.push(PageLink::Ellipsis);
        }

        if total > 1 {
            entries.push(PageLink::page(total, current));
        }

        entries
    }

    #[must_use]
    pub fn page_numbers(&self) -> Vec<u32> {
        self.entries.iter().filter_map(|entry| entry.number()).collect()
    }
}
