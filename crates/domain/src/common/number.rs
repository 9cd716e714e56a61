//! Numeric coercion for skill and boost values.
//!
//! Values typed into a form or read back from storage may be strings,
//! blanks, or garbage. Everything that is not a finite number becomes `0`.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};

/// Coerce user-entered text to a skill value.
///
/// Blank input is `0`, as is anything that does not parse to a finite number.
///
/// ```
/// use tmplbldr_domain::common::coerce_number;
///
/// assert_eq!(coerce_number(" 12.5 "), 12.5);
/// assert_eq!(coerce_number(""), 0.0);
/// assert_eq!(coerce_number("abc"), 0.0);
/// ```
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().map(finite_or_zero).unwrap_or(0.0)
}

/// Replace NaN and infinities with `0`.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// `deserialize_with` helper that never fails on a value's content.
///
/// Accepts numbers, numeric strings, booleans and `null`; any other
/// scalar or a structured value coerces to `0`.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientNumber)
}

struct LenientNumber;

impl<'de> Visitor<'de> for LenientNumber {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or numeric string")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        Ok(finite_or_zero(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<f64, E> {
        Ok(if v { 1.0 } else { 0.0 })
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        Ok(coerce_number(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
        Ok(0.0)
    }

    fn visit_none<E: de::Error>(self) -> Result<f64, E> {
        Ok(0.0)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<f64, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<f64, A::Error> {
        while seq.next_element::<de::IgnoredAny>()?.is_some() {}
        Ok(0.0)
    }

    fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<f64, A::Error> {
        while map.next_entry::<de::IgnoredAny, de::IgnoredAny>()?.is_some() {}
        Ok(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "deserialize_lenient")]
        value: f64,
    }

    fn value_of(json: &str) -> f64 {
        serde_json::from_str::<Holder>(json).unwrap().value
    }

    #[test]
    fn coerce_number_handles_js_style_input() {
        assert_eq!(coerce_number("100"), 100.0);
        assert_eq!(coerce_number("-5"), -5.0);
        assert_eq!(coerce_number("0.1"), 0.1);
        assert_eq!(coerce_number("   "), 0.0);
        assert_eq!(coerce_number("1e400"), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
        assert_eq!(coerce_number("12abc"), 0.0);
    }

    #[test]
    fn lenient_deserialize_accepts_numbers_and_strings() {
        assert_eq!(value_of(r#"{"value": 90}"#), 90.0);
        assert_eq!(value_of(r#"{"value": 72.5}"#), 72.5);
        assert_eq!(value_of(r#"{"value": "15"}"#), 15.0);
        assert_eq!(value_of(r#"{"value": true}"#), 1.0);
    }

    #[test]
    fn lenient_deserialize_degrades_to_zero() {
        assert_eq!(value_of(r#"{"value": null}"#), 0.0);
        assert_eq!(value_of(r#"{"value": "lots"}"#), 0.0);
        assert_eq!(value_of(r#"{"value": [1, 2]}"#), 0.0);
        assert_eq!(value_of(r#"{"value": {"a": 1}}"#), 0.0);
        assert_eq!(value_of(r#"{}"#), 0.0);
    }
}
