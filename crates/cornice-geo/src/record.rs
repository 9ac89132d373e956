use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::GeoError;

/// Country code the lookup service returns for reserved address ranges.
pub const RESERVED_COUNTRY_CODE: &str = "RD";

/// Location record returned by the lookup endpoint.
///
/// Every field is optional; the service omits or empties what it cannot
/// resolve. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationRecord {
    pub ip: Option<String>,
    pub country_code: Option<String>,
    pub country_name: Option<String>,
    pub region_code: Option<String>,
    pub region_name: Option<String>,
    pub city: Option<String>,
    #[serde(alias = "zipcode")]
    pub zip_code: Option<String>,
    pub time_zone: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub latitude: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub longitude: Option<f64>,
    #[serde(alias = "metrocode", deserialize_with = "lenient")]
    pub metro_code: Option<i64>,
    #[serde(alias = "areacode", deserialize_with = "lenient")]
    pub area_code: Option<i64>,
}

impl LocationRecord {
    pub fn from_json(src: &str) -> Result<Self, GeoError> {
        Ok(serde_json::from_str(src)?)
    }

    /// True for reserved/private addresses, which never map anywhere.
    pub fn is_reserved(&self) -> bool {
        self.country_code.as_deref() == Some(RESERVED_COUNTRY_CODE)
    }

    pub fn country(&self) -> Option<&str> {
        non_empty(&self.country_name)
    }

    pub fn region(&self) -> Option<&str> {
        non_empty(&self.region_name)
    }

    pub fn city(&self) -> Option<&str> {
        non_empty(&self.city)
    }

    /// Both coordinates, when known. The service reports unknown as `0`.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if lat != 0.0 && lon != 0.0 => Some((lat, lon)),
            _ => None,
        }
    }

    pub fn metro_code_display(&self) -> String {
        code_display(self.metro_code)
    }

    pub fn area_code_display(&self) -> String {
        code_display(self.area_code)
    }
}

/// Numeric field as the service variants send it: a number, a numeric
/// string, `""` or `null`.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText<T> {
    Number(T),
    Text(String),
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
{
    let value = match Option::<NumberOrText<T>>::deserialize(deserializer)? {
        None => None,
        Some(NumberOrText::Number(n)) => Some(n),
        Some(NumberOrText::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                let parsed = s.parse().ok();
                if parsed.is_none() {
                    log::debug!("ignoring non-numeric field value {s:?}");
                }
                parsed
            }
        }
    };
    Ok(value)
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn code_display(code: Option<i64>) -> String {
    match code {
        Some(c) if c != 0 => c.to_string(),
        _ => "-".to_owned(),
    }
}
