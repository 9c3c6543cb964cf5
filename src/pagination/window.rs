//! Selection of the page numbers shown in the pagination strip.

use std::ops::RangeInclusive;

use super::options::PinMode;

/// Bounds of the visible page strip plus the jump-link flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub first: i64,
    pub last: i64,
    pub pin_first: bool,
    pub pin_last: bool,
}

impl Window {
    /// Centres a strip of `num_page_numbers` pages on `page`, sliding it
    /// against the left or right edge when the current page is close to one.
    ///
    /// When anchored to the right edge the strip holds one page more than
    /// `num_page_numbers`; existing templates are sized for that, so it stays.
    pub fn compute(page: i64, total_pages: i64, num_page_numbers: i64, pin_mode: PinMode) -> Self {
        let half = num_page_numbers / 2;

        let mut first = page.saturating_sub(half).max(1);
        let mut last = page.saturating_add(half).min(total_pages);

        if total_pages > num_page_numbers {
            if last < total_pages && page <= half {
                last = first.saturating_add(num_page_numbers).saturating_sub(1);
            }
            if page > total_pages.saturating_sub(half) {
                first = last.saturating_sub(num_page_numbers);
            }
        }

        let (pin_first, pin_last) = match pin_mode {
            PinMode::Distinct => (first != 1, last != total_pages),
            PinMode::Legacy => (first != 1 || last != total_pages, false),
        };

        Window {
            first,
            last,
            pin_first,
            pin_last,
        }
    }

    /// Page numbers inside the window. Empty when the requested page lies so
    /// far past the end that `first` overtakes `last`.
    pub fn pages(&self) -> RangeInclusive<i64> {
        self.first..=self.last
    }
}

/// Number of pages needed for `total` items, `per_page` at a time.
pub fn total_pages(total: i64, per_page: i64) -> i64 {
    if per_page < 1 || total < 1 {
        return 0;
    }

    total / per_page + i64::from(total % per_page != 0)
}
