use dioxus::router::FromQuery;
use std::fmt;

/// Name of the query parameter that carries the page offset
pub const OFFSET_PARAM: &str = "offset";

/// Ordered query string parameters.
///
/// Keeps pairs in their original order and allows repeated keys. Pairs that
/// were parsed and never edited serialize back exactly as they arrived, so
/// filters we do not understand are forwarded untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<Pair>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pair {
    key: String,
    value: String,
    /// Source text of a parsed pair, `None` once built or edited here
    raw: Option<String>,
}

impl QueryParams {
    /// Parse a query string, with or without the leading `?`
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let pairs = query
            .split('&')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let (key, value) = match part.split_once('=') {
                    Some((key, value)) => (decode_component(key), decode_component(value)),
                    None => (decode_component(part), String::new()),
                };
                Pair {
                    key,
                    value,
                    raw: Some(part.to_string()),
                }
            })
            .collect();

        Self { pairs }
    }

    /// First value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|pair| pair.key == key)
            .map(|pair| pair.value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|pair| (pair.key.as_str(), pair.value.as_str()))
    }

    /// Current page offset. Absent, unparsable and negative values all read as 0.
    ///
    /// The value is not clamped: any `u64` passes through, including offsets
    /// far past the end of the result set. `PageBounds` saturates on them.
    pub fn offset(&self) -> u64 {
        self.get(OFFSET_PARAM)
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .unwrap_or(0)
    }

    /// Copy of these parameters pointing at `offset`.
    ///
    /// Every previous `offset` pair is dropped and the new one is appended
    /// at the end; all other pairs keep their position.
    pub fn with_offset(&self, offset: u64) -> Self {
        self.with_param(OFFSET_PARAM, &offset.to_string())
    }

    /// Copy with every `key` pair replaced by a single `key=value` at the end
    pub fn with_param(&self, key: &str, value: &str) -> Self {
        let mut next = self.without(key);
        next.pairs.push(Pair {
            key: key.to_string(),
            value: value.to_string(),
            raw: None,
        });
        next
    }

    /// Copy with every `key` pair removed
    pub fn without(&self, key: &str) -> Self {
        Self {
            pairs: self
                .pairs
                .iter()
                .filter(|pair| pair.key != key)
                .cloned()
                .collect(),
        }
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pair) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            match &pair.raw {
                Some(raw) => f.write_str(raw)?,
                None => write!(
                    f,
                    "{}={}",
                    encode_component(&pair.key),
                    encode_component(&pair.value)
                )?,
            }
        }
        Ok(())
    }
}

impl FromQuery for QueryParams {
    fn from_query(query: &str) -> Self {
        Self::parse(query)
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        // Invalid UTF-8 after unescaping: keep the text as it came
        Err(_) => spaced,
    }
}

fn encode_component(raw: &str) -> String {
    urlencoding::encode(raw).replace("%20", "+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_defaults_to_zero() {
        assert_eq!(QueryParams::parse("").offset(), 0);
        assert_eq!(QueryParams::parse("?category=news").offset(), 0);
        assert_eq!(QueryParams::parse("offset=abc").offset(), 0);
        assert_eq!(QueryParams::parse("offset=-20").offset(), 0);
        assert_eq!(QueryParams::parse("offset=").offset(), 0);
    }

    #[test]
    fn test_offset_parsed() {
        assert_eq!(QueryParams::parse("?offset=40&category=news").offset(), 40);
        assert_eq!(QueryParams::parse("category=news&offset=20").offset(), 20);
        assert_eq!(
            QueryParams::parse("offset=18446744073709551615").offset(),
            u64::MAX
        );
    }

    #[test]
    fn test_with_offset_preserves_other_params() {
        let query = QueryParams::parse("?language=en&offset=0&search=climate+change");
        let next = query.with_offset(20);

        assert_eq!(next.offset(), 20);
        assert_eq!(next.get("language"), Some("en"));
        assert_eq!(next.get("search"), Some("climate change"));
        assert_eq!(
            next.to_string(),
            "language=en&search=climate+change&offset=20"
        );
    }

    #[test]
    fn test_with_offset_drops_duplicate_offsets() {
        let query = QueryParams::parse("offset=1&a=b&offset=2");
        let next = query.with_offset(60);

        assert_eq!(next.to_string(), "a=b&offset=60");
    }

    #[test]
    fn test_with_offset_on_empty_query() {
        assert_eq!(QueryParams::default().with_offset(20).to_string(), "offset=20");
    }

    #[test]
    fn test_untouched_pairs_serialize_verbatim() {
        let query = QueryParams::parse("search=caf%C3%A9%20%26%20tea&flag");

        assert_eq!(query.get("search"), Some("café & tea"));
        assert_eq!(query.get("flag"), Some(""));
        assert_eq!(query.to_string(), "search=caf%C3%A9%20%26%20tea&flag");

        let next = query.with_offset(20);
        assert_eq!(next.to_string(), "search=caf%C3%A9%20%26%20tea&flag&offset=20");
    }

    #[test]
    fn test_edited_pairs_are_form_encoded() {
        let query = QueryParams::parse("flag&q=a%20b").with_param("q", "café & tea");

        assert_eq!(query.to_string(), "flag&q=caf%C3%A9+%26+tea");
    }

    #[test]
    fn test_without_removes_key() {
        let query = QueryParams::parse("date=Week&language=fr&offset=40");
        let next = query.without("offset").with_param("date", "Month");

        assert_eq!(next.to_string(), "language=fr&date=Month");
    }
}
