use crate::error::{DecodeError, JsonKind};
use serde_json::{Map, Number, Value};
use url::Url;

// Absent keys and `null` values are treated the same.
pub(crate) struct FieldReader<'a> {
    object: &'a Map<String, Value>,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(object: &'a Map<String, Value>) -> Self {
        Self { object }
    }

    pub(crate) fn required_string(&self, key: &str) -> Result<String, DecodeError> {
        let value = self.required(key)?;
        Ok(Self::as_string(key, value)?.to_string())
    }

    pub(crate) fn required_integer(&self, key: &str) -> Result<i64, DecodeError> {
        let value = self.required(key)?;
        let Value::Number(n) = value else {
            return Err(Self::mismatch(key, "integer", value));
        };

        as_integer(n).ok_or_else(|| Self::mismatch(key, "integer", value))
    }

    pub(crate) fn optional_string(&self, key: &str) -> Result<Option<String>, DecodeError> {
        let Some(value) = self.present(key) else {
            return Ok(None);
        };

        Ok(Some(Self::as_string(key, value)?.to_string()))
    }

    pub(crate) fn optional_absolute_url(&self, key: &str) -> Result<Option<Url>, DecodeError> {
        let Some(value) = self.present(key) else {
            return Ok(None);
        };

        let s = Self::as_string(key, value)?;
        parse_absolute_url(s)
            .map(Some)
            .map_err(|reason| DecodeError::MalformedUri {
                path: key.to_string(),
                value: s.to_string(),
                reason,
            })
    }

    fn present(&self, key: &str) -> Option<&'a Value> {
        self.object.get(key).filter(|v| !v.is_null())
    }

    fn required(&self, key: &str) -> Result<&'a Value, DecodeError> {
        self.present(key).ok_or_else(|| DecodeError::MissingField {
            path: key.to_string(),
        })
    }

    fn as_string<'v>(key: &str, value: &'v Value) -> Result<&'v str, DecodeError> {
        value
            .as_str()
            .ok_or_else(|| Self::mismatch(key, "string", value))
    }

    fn mismatch(key: &str, expected: &'static str, value: &Value) -> DecodeError {
        DecodeError::TypeMismatch {
            path: key.to_string(),
            expected,
            found: JsonKind::of(value),
        }
    }
}

// 2^53. A parsed float at or above this magnitude may already have been
// rounded from a different integer.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

// Integral floats such as `1.0` are accepted only below 2^53.
fn as_integer(n: &Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }

    n.as_f64()
        .filter(|f| f.fract() == 0.0 && f.abs() < MAX_EXACT_FLOAT)
        .map(|f| f as i64)
}

fn parse_absolute_url(s: &str) -> Result<Url, String> {
    if s.trim() != s {
        return Err(String::from("URI has surrounding whitespace"));
    }

    let url = s.parse::<Url>().map_err(|e| e.to_string())?;
    if !url.has_authority() {
        return Err(String::from("URI has no authority"));
    }
    if !url.host_str().is_some_and(|h| !h.is_empty()) {
        return Err(String::from("URI has no host"));
    }
    Ok(url)
}
