//! Query string construction

use reqwest::Url;

use crate::error::{MarketDataError, Result};

/// Name of the query parameter carrying the API key
pub const API_KEY_PARAM: &str = "apikey";

/// Value of a single query parameter
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamValue {
    /// Omitted from the URL entirely
    Absent,
    /// One `key=value` pair
    Scalar(String),
    /// One `key=value` pair per element, in order
    List(Vec<String>),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Scalar(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Scalar(value.clone())
    }
}

macro_rules! scalar_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::Scalar(value.to_string())
                }
            }
        )*
    };
}

// f64's Display prints integral values without a fraction (`4`, not `4.0`)
scalar_from_display!(u32, u64, i32, i64, usize, f64);

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::List(values)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        ParamValue::List(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for ParamValue {
    fn from(values: &[&str]) -> Self {
        ParamValue::List(values.iter().map(|v| (*v).to_string()).collect())
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Absent, Into::into)
    }
}

/// Ordered mapping of query parameter names to values.
///
/// Keys are unique; setting an existing key replaces its value in place, so
/// iteration order is always first-insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, ParamValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`QueryParams::insert`]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve `<base_url><endpoint>?<params>&apikey=<api_key>`.
///
/// Absent values are skipped, lists expand to repeated keys, and the API key
/// is always appended last, exactly once, even when empty.
pub fn build_url(base_url: &str, endpoint: &str, params: &QueryParams, api_key: &str) -> Result<Url> {
    let raw = format!("{base_url}{endpoint}");
    let mut url = Url::parse(&raw).map_err(|e| MarketDataError::Construction(format!("{raw}: {e}")))?;

    {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params.iter() {
            match value {
                ParamValue::Absent => {}
                ParamValue::Scalar(v) => {
                    pairs.append_pair(key, v);
                }
                ParamValue::List(values) => {
                    for v in values {
                        pairs.append_pair(key, v);
                    }
                }
            }
        }
        pairs.append_pair(API_KEY_PARAM, api_key);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://financialmodelingprep.com/stable";

    fn pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_absent_values_are_omitted() {
        let params = QueryParams::new()
            .param("symbol", "AAPL")
            .param("from", None::<String>)
            .param("to", ParamValue::Absent);

        let url = build_url(BASE, "/quote", &params, "k").unwrap();
        assert_eq!(url.as_str(), format!("{BASE}/quote?symbol=AAPL&apikey=k"));
        assert!(!url.as_str().contains("from="));
        assert!(!url.as_str().contains("to="));
    }

    #[test]
    fn test_list_values_repeat_in_order() {
        let params = QueryParams::new()
            .param("symbol", vec!["MSFT", "AAPL", "GOOG"])
            .param("limit", 2_u32);

        let url = build_url(BASE, "/batch-quote", &params, "k").unwrap();
        let symbols: Vec<String> = pairs(&url)
            .into_iter()
            .filter(|(k, _)| k == "symbol")
            .map(|(_, v)| v)
            .collect();

        assert_eq!(symbols, vec!["MSFT", "AAPL", "GOOG"]);
        assert!(url.as_str().ends_with("symbol=MSFT&symbol=AAPL&symbol=GOOG&limit=2&apikey=k"));
    }

    #[test]
    fn test_empty_list_adds_nothing() {
        let params = QueryParams::new().param("symbol", Vec::<String>::new());
        let url = build_url(BASE, "/quote", &params, "k").unwrap();
        assert_eq!(url.query(), Some("apikey=k"));
    }

    #[test]
    fn test_api_key_present_once_even_when_empty() {
        let url = build_url(BASE, "/quote", &QueryParams::new().param("symbol", "AAPL"), "").unwrap();
        let keys: Vec<_> = pairs(&url).into_iter().filter(|(k, _)| k == API_KEY_PARAM).collect();

        assert_eq!(keys, vec![(API_KEY_PARAM.to_string(), String::new())]);
        assert!(url.as_str().ends_with("&apikey="));
    }

    #[test]
    fn test_numbers_render_like_text() {
        let params = QueryParams::new()
            .param("limit", 4.0_f64)
            .param("ratio", 0.25_f64)
            .param("page", 3_i64);

        let url = build_url(BASE, "/key-metrics", &params, "k").unwrap();
        assert_eq!(url.query(), Some("limit=4&ratio=0.25&page=3&apikey=k"));
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let params = QueryParams::new().param("query", "S&P 500");
        let url = build_url(BASE, "/search", &params, "k").unwrap();

        assert_eq!(url.query(), Some("query=S%26P+500&apikey=k"));
        assert_eq!(pairs(&url)[0].1, "S&P 500");
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut params = QueryParams::new().param("symbol", "AAPL").param("period", "annual");
        params.insert("symbol", "MSFT");

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("symbol"), Some(&ParamValue::Scalar("MSFT".into())));
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["symbol", "period"]);
    }

    #[test]
    fn test_unparseable_base_is_construction_failure() {
        let err = build_url("not a url", "/quote", &QueryParams::new(), "k").unwrap_err();
        assert!(matches!(err, MarketDataError::Construction(msg) if msg.starts_with("not a url/quote")));
    }
}
