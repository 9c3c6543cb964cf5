use std::collections::HashMap;
use std::sync::Arc;

use actix_web::web;

use super::options::{Options, OptionsError, DEFAULT_ALL_PARAM_VALUE};
use super::params::{int_param, QueryParams};
use super::set::PageSet;

/// Builds [`PageSet`]s from client input according to a fixed set of options.
///
/// Cloning is cheap; every clone and every set it produces share the same
/// options.
#[derive(Debug, Clone)]
pub struct Paginator {
    options: Arc<Options>,
}

impl Paginator {
    pub fn new(mut options: Options) -> Self {
        if options.all_param_value.is_empty() {
            options.all_param_value = DEFAULT_ALL_PARAM_VALUE.to_string();
        }

        Paginator {
            options: Arc::new(options),
        }
    }

    /// Like [`Paginator::new`], but refuses inconsistent options.
    pub fn try_new(options: Options) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self::new(options))
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Normalizes a raw page number and page size into a page set.
    ///
    /// A negative page size requests every item when `allow_all` is on;
    /// otherwise anything below 1 falls back to the default size.
    pub fn new_set(&self, page: i64, per_page: i64) -> PageSet {
        let o = &self.options;

        let per_page = if per_page < 0 && o.allow_all {
            0
        } else if per_page < 1 {
            o.default_per_page
        } else if !o.allow_all && per_page > o.max_per_page {
            log::debug!("Clamping per_page {per_page} to {}", o.max_per_page);
            o.max_per_page
        } else {
            per_page
        };

        let page = page.max(1);

        PageSet::new(page, per_page, Arc::clone(&self.options))
    }

    /// Reads the configured page and per-page parameters. Malformed values
    /// count as `0`; the all-items value counts as `-1`.
    pub fn from_params<Q: QueryParams + ?Sized>(&self, params: &Q) -> PageSet {
        let o = &self.options;

        let page = int_param(params, &o.page_param);
        let per_page = match params.param(&o.per_page_param) {
            Some(value) if value == o.all_param_value => -1,
            _ => int_param(params, &o.per_page_param),
        };

        self.new_set(page, per_page)
    }

    /// Parses a raw query string such as `page=2&per_page=25`.
    pub fn from_query_string(&self, query: &str) -> PageSet {
        let params = match web::Query::<HashMap<String, String>>::from_query(query) {
            Ok(params) => params.into_inner(),
            Err(e) => {
                log::debug!("Ignoring malformed query string {query:?}: {e}");
                HashMap::new()
            }
        };

        self.from_params(&params)
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
