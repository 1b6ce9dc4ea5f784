//! JSON bodies and responses.
//!
//! Request documents are produced with `serde_json`. When an operation asks
//! for a specific date layout, every timestamp field serialized through
//! [`lenient_datetime`] is written with that strftime format. Other string
//! fields are never touched, whatever they contain.

use std::cell::RefCell;

use chrono::format::{Item, StrftimeItems};
use serde::{de::DeserializeOwned, Serialize};

use crate::{error::MambuErrorKind, APIResult};

thread_local! {
    static DATE_FORMAT: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Makes `format` the active date layout on this thread until dropped.
struct DateFormatScope(Option<String>);

impl DateFormatScope {
    fn enter(format: &str) -> Self {
        Self(DATE_FORMAT.with(|active| active.replace(Some(format.to_string()))))
    }
}

impl Drop for DateFormatScope {
    fn drop(&mut self) {
        DATE_FORMAT.with(|active| *active.borrow_mut() = self.0.take());
    }
}

/// Serializes `value`, writing timestamp fields with `date_format` when
/// given.
///
/// # Errors
///
/// Fails on serialization errors and on invalid strftime formats. Both are
/// detected before any request is made.
pub fn to_json_string<T: Serialize + ?Sized>(
    value: &T,
    date_format: Option<&str>,
) -> APIResult<String> {
    let _scope = match date_format {
        Some(format) => {
            validate_date_format(format)?;
            Some(DateFormatScope::enter(format))
        }
        None => None,
    };
    serde_json::to_string(value).map_err(|e| MambuErrorKind::Serialize(e).into())
}

/// Parses `json` as `T`, naming `T` in the error on failure.
pub fn from_json_str<T: DeserializeOwned>(json: &str) -> APIResult<T> {
    serde_json::from_str(json).map_err(|source| {
        MambuErrorKind::Deserialize {
            expected: std::any::type_name::<T>(),
            source,
        }
        .into()
    })
}

fn validate_date_format(format: &str) -> APIResult<()> {
    if format.is_empty() || StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(MambuErrorKind::DateFormat(format.to_string()).into());
    }
    Ok(())
}

/// Serde adapter for timestamps the API may echo in several layouts:
/// RFC 3339, `yyyy-MM-dd'T'HH:mm:ssZ` and plain `yyyy-MM-dd` (read as
/// midnight UTC). Serialization writes RFC 3339 unless [`to_json_string`]
/// is running with a date format.
///
/// ```
/// use chrono::{DateTime, Utc};
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Rate {
///     #[serde(default, with = "oxi_mambu::json::lenient_datetime")]
///     start_date: Option<DateTime<Utc>>,
/// }
///
/// let rate: Rate = serde_json::from_str(r#"{"start_date":"2024-03-01"}"#).unwrap();
/// assert_eq!(rate.start_date.unwrap().to_rfc3339(), "2024-03-01T00:00:00+00:00");
/// ```
pub mod lenient_datetime {
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use crate::api_data::YYYY_MM_DD_T_HH_MM_SS_FORMAT;

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let Some(date) = value else {
            return serializer.serialize_none();
        };
        let formatted = super::DATE_FORMAT.with(|active| {
            active
                .borrow()
                .as_deref()
                .map(|format| date.format(format).to_string())
        });
        serializer.serialize_str(&formatted.unwrap_or_else(|| date.to_rfc3339()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        parse(&raw).map(Some).ok_or_else(|| {
            D::Error::custom(format!("unrecognized date {raw:?}"))
        })
    }

    pub(crate) fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
            return Some(date.with_timezone(&Utc));
        }
        if let Ok(date) = DateTime::parse_from_str(raw, YYYY_MM_DD_T_HH_MM_SS_FORMAT) {
            return Some(date.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|d| d.and_utc())
    }
}
