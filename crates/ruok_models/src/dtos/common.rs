use anyhow::{Error, anyhow};
use chrono::DateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

/// Treats an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A point in time as reported by the server, either epoch microseconds or
/// an already formatted string. It is only ever displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Micros(i64),
    Text(String),
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Micros(micros) => match DateTime::from_timestamp_micros(*micros) {
                Some(date) => write!(f, "{}", date.format("%F %X")),
                None => write!(f, "{micros}"),
            },
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

impl Timestamp {
    pub fn display_option(value: &Option<Timestamp>) -> String {
        value
            .as_ref()
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 4] = [Self::Get, Self::Post, Self::Put, Self::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| anyhow!("invalid http method {value}, expected one of GET, POST, PUT, DELETE"))
    }
}

/// Method of a stored job as listed by the server. Stored values are not
/// normalized, so anything outside [`HttpMethod`] is kept verbatim for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListedMethod {
    Known(HttpMethod),
    Other(String),
}

impl From<&str> for ListedMethod {
    fn from(value: &str) -> Self {
        value
            .parse::<HttpMethod>()
            .map(Self::Known)
            .unwrap_or_else(|_| Self::Other(value.to_string()))
    }
}

impl From<HttpMethod> for ListedMethod {
    fn from(value: HttpMethod) -> Self {
        Self::Known(value)
    }
}

impl Display for ListedMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Known(method) => write!(f, "{method}"),
            Self::Other(raw) => write!(f, "{raw}"),
        }
    }
}

impl Serialize for ListedMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ListedMethod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw.as_str()))
    }
}
