use crate::common::*;

use crate::enums::status_error::*;

#[doc = "A parsed response body. Only ever read through `JsonNode` lookups."]
#[derive(Debug, Clone)]
pub struct JsonDocument {
    root: Value,
}

impl JsonDocument {
    #[doc = "Function that parses the raw bytes of a response body into a dynamic json tree."]
    /// # Arguments
    /// * `body` - raw response body
    ///
    /// # Returns
    /// * Result<Self, StatusError> - `StatusError::Parse` when the body is not valid json
    pub fn parse(body: &[u8]) -> Result<Self, StatusError> {
        let root: Value = serde_json::from_slice(body)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> JsonNode<'_> {
        JsonNode(Some(&self.root))
    }
}

#[doc = "A position inside a `JsonDocument` that may or may not exist."]
/// Lookups on an absent node stay absent, so a whole path can be chained
/// without checking every step.
#[derive(Debug, Clone, Copy)]
pub struct JsonNode<'a>(Option<&'a Value>);

impl<'a> JsonNode<'a> {
    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    #[doc = "Function that steps into a single named child."]
    /// Objects are navigated by key, arrays by a base-10 index.
    /// Anything else yields an absent node.
    pub fn child(&self, key: &str) -> JsonNode<'a> {
        let next: Option<&'a Value> = match self.0 {
            Some(Value::Object(map)) => map.get(key),
            Some(Value::Array(items)) => key
                .parse::<usize>()
                .ok()
                .and_then(|idx| items.get(idx)),
            _ => None,
        };

        JsonNode(next)
    }

    #[doc = "Function that follows a path given as separate segments."]
    /// # Arguments
    /// * `segments` - keys to follow in order, e.g. `["status", "core1", "name"]`
    ///
    /// # Returns
    /// * JsonNode - absent if any segment is missing or not navigable
    pub fn path(&self, segments: &[&str]) -> JsonNode<'a> {
        segments
            .iter()
            .fold(*self, |node: JsonNode<'a>, key: &&str| node.child(key))
    }

    #[doc = "Function that follows a dot-delimited path such as `system.threadDump`."]
    pub fn dot_path(&self, path: &str) -> JsonNode<'a> {
        if path.is_empty() {
            return *self;
        }

        path.split('.')
            .fold(*self, |node: JsonNode<'a>, key: &str| node.child(key))
    }

    #[doc = "Function that reads the node as a non-negative integer. Returns 0 if absent or not numeric."]
    /// Fractions are truncated and negative numbers read as 0.
    pub fn as_u64(&self) -> u64 {
        match self.0 {
            Some(Value::Number(num)) => {
                if let Some(v) = num.as_u64() {
                    v
                } else if let Some(f) = num.as_f64() {
                    if f.is_finite() && f > 0.0 {
                        f as u64
                    } else {
                        0
                    }
                } else {
                    0
                }
            }
            _ => 0,
        }
    }

    #[doc = "Function that returns the json text of the node, e.g. `\"core1\"` (quotes included) for a string."]
    /// An absent node renders as `null`.
    pub fn raw_text(&self) -> String {
        match self.0 {
            Some(value) => value.to_string(),
            None => Value::Null.to_string(),
        }
    }

    #[doc = "Function that returns the json text of the node with surrounding quote characters stripped."]
    /// Trims the encoded text, so a string holding literal quotes keeps its escapes:
    /// `"\"x\""` becomes `\"x\`.
    pub fn trimmed_text(&self) -> String {
        self.raw_text().trim_matches('"').to_string()
    }

    #[doc = "Function that enumerates the elements of an array node (or the values of an object node)."]
    /// Scalars and absent nodes have no children.
    pub fn children(&self) -> Vec<JsonNode<'a>> {
        match self.0 {
            Some(Value::Array(items)) => items.iter().map(|v| JsonNode(Some(v))).collect(),
            Some(Value::Object(map)) => map.values().map(|v| JsonNode(Some(v))).collect(),
            _ => Vec::new(),
        }
    }
}
