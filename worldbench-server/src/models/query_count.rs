//! Query count parameter for `/queries` and `/updates`

/// Smallest number of rows a batch route will touch.
pub const MIN_QUERIES: usize = 1;

/// Largest number of rows a batch route will touch.
pub const MAX_QUERIES: usize = 500;

/// Name of the query-string key holding the count.
pub const QUERIES_KEY: &str = "queries";

/// Number of rows to fetch or update, always within `MIN_QUERIES..=MAX_QUERIES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryCount(usize);

impl QueryCount {
    /// Parse and clamp a raw parameter.
    ///
    /// - Missing or unparseable input (including overflow) becomes 1
    /// - Parsed values are clamped to 1..=500
    pub fn parse(raw: Option<&str>) -> Self {
        let requested = raw.and_then(|s| s.parse::<i64>().ok()).unwrap_or(1);
        Self::clamped(requested)
    }

    /// Clamp an already-parsed value.
    pub fn clamped(requested: i64) -> Self {
        let n = requested.clamp(MIN_QUERIES as i64, MAX_QUERIES as i64);
        Self(n as usize)
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Read the count from decoded query-string pairs.
    ///
    /// Only the first `queries` key counts; repeats and unrelated keys are
    /// ignored so no query string is ever rejected.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let raw = pairs
            .iter()
            .find(|(key, _)| key == QUERIES_KEY)
            .map(|(_, value)| value.as_str());
        Self::parse(raw)
    }
}

impl Default for QueryCount {
    fn default() -> Self {
        Self(MIN_QUERIES)
    }
}
