//! Serde helpers for Airflow records
//!
//! The API is not strict about the types of optional fields across versions,
//! so a value of the wrong type is read as absent instead of failing the
//! whole response.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Deserialize an optional field, mapping a wrong-typed value to `None`
///
/// Missing and `null` values are `None` as usual. Any other value is kept
/// only if it deserializes as `T`.
///
/// # Usage with serde
///
/// ```rust
/// use serde::Deserialize;
/// use dagwatch_core::utils::serde::deserialize_lenient_option;
///
/// #[derive(Deserialize)]
/// struct Record {
///     #[serde(default, deserialize_with = "deserialize_lenient_option")]
///     try_number: Option<i64>,
/// }
///
/// let record: Record = serde_json::from_str(r#"{"try_number": "1"}"#).unwrap();
/// assert_eq!(record.try_number, None);
/// ```
pub fn deserialize_lenient_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|value| T::deserialize(value).ok()))
}
