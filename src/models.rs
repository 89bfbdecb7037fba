use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Minimum admissible release year (the year of the earliest film).
pub const MIN_YEAR: i32 = 1888;

/// MPA-style rating. The store only accepts these six values.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Rating {
    #[serde(rename = "G")]
    G,
    #[serde(rename = "PG")]
    Pg,
    #[serde(rename = "PG-13")]
    Pg13,
    #[serde(rename = "R")]
    R,
    #[serde(rename = "NC-17")]
    Nc17,
    #[serde(rename = "Unrated")]
    Unrated,
}

impl Rating {
    pub const ALL: [Rating; 6] = [
        Rating::G,
        Rating::Pg,
        Rating::Pg13,
        Rating::R,
        Rating::Nc17,
        Rating::Unrated,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Rating::G => "G",
            Rating::Pg => "PG",
            Rating::Pg13 => "PG-13",
            Rating::R => "R",
            Rating::Nc17 => "NC-17",
            Rating::Unrated => "Unrated",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rating {
    type Err = UnknownRating;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "G" => Ok(Rating::G),
            "PG" => Ok(Rating::Pg),
            "PG-13" => Ok(Rating::Pg13),
            "R" => Ok(Rating::R),
            "NC-17" => Ok(Rating::Nc17),
            "Unrated" => Ok(Rating::Unrated),
            other => Err(UnknownRating(other.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
pub struct UnknownRating(pub String);

impl fmt::Display for UnknownRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown rating {:?}", self.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Movie {
    pub title: String,
    pub year: i32,
    pub rating: Rating,
}

/// Form body for `POST /movies`. Raw strings; the store validates.
#[derive(Debug, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub rating: String,
}

/// Result of an update: how many rows matched the title filter vs how many
/// actually had their rating changed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct UpdateOutcome {
    pub matched: u64,
    pub modified: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct DeleteOutcome {
    pub deleted: u64,
}
