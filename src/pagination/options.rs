/// How the window's boundary flags are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PinMode {
    /// `pin_first` tracks the first page, `pin_last` tracks the last page.
    #[default]
    Distinct,
    /// Both boundaries set `pin_first` and `pin_last` is never set.
    /// Matches the output of older deployments that render only the
    /// leading jump link.
    Legacy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Page size used when the client sends none (or an invalid one).
    pub default_per_page: i64,

    /// Upper bound on the page size a client may request.
    /// Ignored when `allow_all` is enabled.
    pub max_per_page: i64,

    /// Target width of the page number strip,
    /// e.g. with 5 the strip around page 10 reads `1 ... 8 9 10 11 12 ... 40`.
    pub num_page_numbers: i64,

    /// Query parameter holding the current page number.
    pub page_param: String,

    /// Query parameter holding the page size.
    pub per_page_param: String,

    /// Allows the client to request every item without pagination.
    pub allow_all: bool,

    /// Value of the per-page parameter that requests every item.
    pub all_param_value: String,

    pub pin_mode: PinMode,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            default_per_page: 10,
            max_per_page: 50,
            num_page_numbers: 10,
            page_param: "page".to_string(),
            per_page_param: "per_page".to_string(),
            allow_all: false,
            all_param_value: DEFAULT_ALL_PARAM_VALUE.to_string(),
            pin_mode: PinMode::Distinct,
        }
    }
}

pub(crate) const DEFAULT_ALL_PARAM_VALUE: &str = "all";

impl Options {
    /// Rejects option sets that cannot produce a sensible page state.
    ///
    /// `Paginator::new` accepts anything; call this (or use `Paginator::try_new`)
    /// when the values come from an untrusted source such as the environment.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.default_per_page < 1 {
            return Err(OptionsError::DefaultPerPage(self.default_per_page));
        }
        if self.max_per_page < self.default_per_page {
            return Err(OptionsError::MaxPerPage {
                max: self.max_per_page,
                default: self.default_per_page,
            });
        }
        if self.num_page_numbers < 1 {
            return Err(OptionsError::NumPageNumbers(self.num_page_numbers));
        }
        if self.page_param.is_empty() || self.per_page_param.is_empty() {
            return Err(OptionsError::EmptyParamName);
        }
        if self.page_param == self.per_page_param {
            return Err(OptionsError::DuplicateParamName(self.page_param.clone()));
        }

        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("default_per_page must be at least 1, got {0}")]
    DefaultPerPage(i64),
    #[error("max_per_page ({max}) must not be below default_per_page ({default})")]
    MaxPerPage { max: i64, default: i64 },
    #[error("num_page_numbers must be at least 1, got {0}")]
    NumPageNumbers(i64),
    #[error("Query parameter names must not be empty")]
    EmptyParamName,
    #[error("page and per-page parameters share the name {0:?}")]
    DuplicateParamName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_valid() {
        let options = Options::default();

        assert_eq!(options.default_per_page, 10);
        assert_eq!(options.max_per_page, 50);
        assert_eq!(options.num_page_numbers, 10);
        assert_eq!(options.all_param_value, "all");
        assert_eq!(options.pin_mode, PinMode::Distinct);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_max_below_default() {
        let options = Options {
            default_per_page: 20,
            max_per_page: 10,
            ..Options::default()
        };

        assert_eq!(
            options.validate(),
            Err(OptionsError::MaxPerPage {
                max: 10,
                default: 20
            })
        );
    }

    #[test]
    fn test_validate_rejects_zero_sizes() {
        let options = Options {
            default_per_page: 0,
            ..Options::default()
        };
        assert_eq!(options.validate(), Err(OptionsError::DefaultPerPage(0)));

        let options = Options {
            num_page_numbers: 0,
            ..Options::default()
        };
        assert_eq!(options.validate(), Err(OptionsError::NumPageNumbers(0)));
    }

    #[test]
    fn test_validate_rejects_bad_param_names() {
        let options = Options {
            page_param: String::new(),
            ..Options::default()
        };
        assert_eq!(options.validate(), Err(OptionsError::EmptyParamName));

        let options = Options {
            per_page_param: "page".to_string(),
            ..Options::default()
        };
        assert_eq!(
            options.validate(),
            Err(OptionsError::DuplicateParamName("page".to_string()))
        );
    }
}
