use std::collections::{BTreeMap, HashMap};

/// A string-keyed source of request parameters, e.g. a parsed query string.
pub trait QueryParams {
    fn param(&self, name: &str) -> Option<&str>;
}

impl QueryParams for HashMap<String, String> {
    fn param(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl QueryParams for BTreeMap<String, String> {
    fn param(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// Repeated keys resolve to their first occurrence.
impl QueryParams for [(String, String)] {
    fn param(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl QueryParams for Vec<(String, String)> {
    fn param(&self, name: &str) -> Option<&str> {
        self.as_slice().param(name)
    }
}

impl<T: QueryParams + ?Sized> QueryParams for &T {
    fn param(&self, name: &str) -> Option<&str> {
        (**self).param(name)
    }
}

/// Reads an integer parameter, treating anything missing or malformed as `0`.
pub(crate) fn int_param<Q: QueryParams + ?Sized>(params: &Q, name: &str) -> i64 {
    params
        .param(name)
        .and_then(|value| value.parse::<i64>().ok())
        .unwrap_or(0)
}
