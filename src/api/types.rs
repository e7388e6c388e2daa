//! Wire and cache-key types for the listing and match endpoints.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One listed dog. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub id: String,
    pub img: String,
    pub name: String,
    pub age: u32,
    pub zip_code: String,
    pub breed: String,
}

/// Opaque continuation token returned by a page fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(pub String);

/// An ordered batch of dogs plus the cursor for the following batch.
///
/// `next` is `None` on the last page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub items: Vec<Dog>,
    #[serde(default)]
    pub next: Option<Cursor>,
}

/// Server-side listing filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DogFilter {
    pub breeds: Vec<String>,
    pub zip_codes: Vec<String>,
    pub age_min: Option<u32>,
    pub age_max: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Breed,
    Name,
    Age,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Listing order, written on the wire as `field:direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self {
            field: SortField::Breed,
            direction: SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid sort '{token}': expected <breed|name|age>:<asc|desc>")]
pub struct ParseSortError {
    pub token: String,
}

impl FromStr for SortOrder {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseSortError {
            token: s.to_string(),
        };
        let (field, direction) = s.split_once(':').ok_or_else(err)?;
        let field = match field.trim() {
            "breed" => SortField::Breed,
            "name" => SortField::Name,
            "age" => SortField::Age,
            _ => return Err(err()),
        };
        let direction = match direction.trim() {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            _ => return Err(err()),
        };
        Ok(Self { field, direction })
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = match self.field {
            SortField::Breed => "breed",
            SortField::Name => "name",
            SortField::Age => "age",
        };
        let direction = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{}:{}", field, direction)
    }
}

/// Cache key for accumulated pages. Any change restarts pagination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub filter: DogFilter,
    pub sort: SortOrder,
}

/// A single listing request: which query, where to resume, how many.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub key: QueryKey,
    /// `None` requests the first page.
    pub cursor: Option<Cursor>,
    pub size: u32,
}

impl PageRequest {
    /// Query-string pairs for `GET /dogs/search`.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let filter = &self.key.filter;
        let mut pairs = Vec::new();
        for breed in &filter.breeds {
            pairs.push(("breeds", breed.clone()));
        }
        for zip in &filter.zip_codes {
            pairs.push(("zipCodes", zip.clone()));
        }
        if let Some(min) = filter.age_min {
            pairs.push(("ageMin", min.to_string()));
        }
        if let Some(max) = filter.age_max {
            pairs.push(("ageMax", max.to_string()));
        }
        pairs.push(("size", self.size.to_string()));
        pairs.push(("sort", self.key.sort.to_string()));
        if let Some(cursor) = &self.cursor {
            pairs.push(("cursor", cursor.0.clone()));
        }
        pairs
    }
}

/// Response of `POST /dogs/match`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResponse {
    #[serde(rename = "match")]
    pub match_id: String,
}
