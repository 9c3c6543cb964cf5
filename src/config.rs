use std::env;
use std::str::FromStr;

use crate::pagination::{Options, PinMode};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub demo_items: i64,
    pub pagination: Options,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = Options::default();
        let legacy_pins: bool = parse_var("PAGINATION_LEGACY_PINS", false)?;

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3010".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidPort)?,
            demo_items: parse_var("DEMO_ITEMS", 237)?,
            pagination: Options {
                default_per_page: parse_var(
                    "PAGINATION_DEFAULT_PER_PAGE",
                    defaults.default_per_page,
                )?,
                max_per_page: parse_var("PAGINATION_MAX_PER_PAGE", defaults.max_per_page)?,
                num_page_numbers: parse_var(
                    "PAGINATION_NUM_PAGE_NUMBERS",
                    defaults.num_page_numbers,
                )?,
                page_param: env::var("PAGINATION_PAGE_PARAM").unwrap_or(defaults.page_param),
                per_page_param: env::var("PAGINATION_PER_PAGE_PARAM")
                    .unwrap_or(defaults.per_page_param),
                allow_all: parse_var("PAGINATION_ALLOW_ALL", defaults.allow_all)?,
                all_param_value: env::var("PAGINATION_ALL_PARAM_VALUE")
                    .unwrap_or(defaults.all_param_value),
                pin_mode: if legacy_pins {
                    PinMode::Legacy
                } else {
                    PinMode::Distinct
                },
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn pagination_options(&self) -> Options {
        self.pagination.clone()
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value")]
    InvalidPort,
    #[error("Invalid value {value:?} for {name}")]
    InvalidValue { name: &'static str, value: String },
}
