use std::convert::TryFrom;
use std::str::FromStr;

use serde::Deserialize;

use crate::ParseError;

/// A gallery timestamp.  Stored in the definition file as a
/// `YYYY-MM-DD HH:MM:SS` string (interpreted as UTC), exposed
/// to clients as integer seconds since the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct Date
{
    timestamp: i64,
}

impl Date
{
    pub fn from_timestamp(timestamp: i64) -> Self
    {
        Date { timestamp }
    }

    pub fn timestamp(&self) -> i64
    {
        self.timestamp
    }
}

impl FromStr for Date
{
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        let naive = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
            .map_err(|_| ParseError::new(format!("Invalid date string: {:?}", s)))?;

        Ok(Date { timestamp: naive.timestamp() })
    }
}

impl TryFrom<String> for Date
{
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error>
    {
        s.parse()
    }
}
