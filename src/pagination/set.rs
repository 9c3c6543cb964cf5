use std::sync::Arc;

use serde::Serialize;

use super::options::Options;
use super::window::{self, Window};

/// Pagination values for a single request.
///
/// Only the page numbers and totals are serialized so the set can be embedded
/// in responses sent to the outside world; the rest is for queries and
/// rendering.
#[derive(Debug, Clone, Serialize)]
pub struct PageSet {
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
    pub total: i64,

    #[serde(skip)]
    pub offset: i64,
    #[serde(skip)]
    pub limit: i64,

    #[serde(skip)]
    pub pin_first: bool,
    #[serde(skip)]
    pub pin_last: bool,
    #[serde(skip)]
    pub pages: Vec<i64>,

    #[serde(skip)]
    pub(crate) options: Arc<Options>,
}

impl PageSet {
    pub(crate) fn new(page: i64, per_page: i64, options: Arc<Options>) -> Self {
        PageSet {
            page,
            per_page,
            total_pages: 0,
            total: 0,
            offset: (page - 1).saturating_mul(per_page),
            limit: per_page,
            pin_first: false,
            pin_last: false,
            pages: Vec::new(),
            options,
        }
    }

    /// Records the total item count and computes the page number strip.
    pub fn set_total(&mut self, total: i64) {
        self.total = total;
        self.total_pages = 0;
        self.pin_first = false;
        self.pin_last = false;
        self.pages.clear();

        // Everything fits on one page, or the client asked for all items.
        if total <= self.per_page || self.is_all() {
            return;
        }

        self.total_pages = window::total_pages(total, self.per_page);

        let window = Window::compute(
            self.page,
            self.total_pages,
            self.options.num_page_numbers,
            self.options.pin_mode,
        );

        log::debug!(
            "Page {} of {}: showing {}..={} (pin first: {}, pin last: {})",
            self.page,
            self.total_pages,
            window.first,
            window.last,
            window.pin_first,
            window.pin_last
        );

        self.pin_first = window.pin_first;
        self.pin_last = window.pin_last;
        self.pages = window.pages().collect();
    }

    /// True when the client asked for every item in one go.
    pub fn is_all(&self) -> bool {
        self.per_page == 0
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn prev_page(&self) -> Option<i64> {
        if self.has_prev() {
            Some(self.page - 1)
        } else {
            None
        }
    }

    pub fn next_page(&self) -> Option<i64> {
        if self.has_next() {
            Some(self.page + 1)
        } else {
            None
        }
    }
}
