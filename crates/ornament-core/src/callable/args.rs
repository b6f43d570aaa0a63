//! Args - 位置引数とキーワード引数の組
//!
//! # 学習ポイント
//! - 呼び出し順を保つため named は `Vec<(String, Value)>` で保持
//! - `decode::<T>()` で serde による型付き引数への変換

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Canonical debug text for a value: compact JSON.
///
/// Strings come out quoted and containers show the repr of their elements,
/// e.g. `"hi"`, `[1,"a"]`, `{"k":null}`.
pub fn repr(value: &Value) -> String {
    value.to_string()
}

/// Arguments passed to a [`Callable`](super::Callable).
///
/// # 使用例
/// ```ignore
/// let args = Args::new().arg("Richard").kwarg("age", 112);
/// assert_eq!(args.signature(), r#""Richard", age=112"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Args {
    #[serde(default)]
    positional: Vec<Value>,

    #[serde(default)]
    named: Vec<(String, Value)>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            positional: values.into_iter().map(Into::into).collect(),
            named: Vec::new(),
        }
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a named argument. Re-using a key replaces its value in place.
    pub fn kwarg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.named.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.named.push((key, value)),
        }
        self
    }

    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    pub fn named(&self) -> &[(String, Value)] {
        &self.named
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    pub fn get_named(&self, key: &str) -> Option<&Value> {
        self.named.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// Render as `a_repr, b_repr, key=value_repr`, positional first.
    pub fn signature(&self) -> String {
        self.positional
            .iter()
            .map(repr)
            .chain(self.named.iter().map(|(k, v)| format!("{k}={}", repr(v))))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Decode into a typed argument value.
    ///
    /// - positional only: decoded from a JSON array (tuples, tuple structs, `Vec`)
    /// - named only: decoded from a JSON object (structs, maps)
    /// - no arguments: `[]` first, then `null` (for `()` and `Option<_>`)
    /// - mixed positional and named: rejected
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        if self.is_empty() {
            return serde_json::from_value(Value::Array(Vec::new()))
                .or_else(|_| serde_json::from_value(Value::Null));
        }
        match (self.positional.is_empty(), self.named.is_empty()) {
            (false, true) => serde_json::from_value(Value::Array(self.positional.clone())),
            (true, false) => {
                let map: Map<String, Value> = self.named.iter().cloned().collect();
                serde_json::from_value(Value::Object(map))
            }
            _ => Err(serde_json::Error::custom(
                "cannot decode a mix of positional and named arguments",
            )),
        }
    }
}
