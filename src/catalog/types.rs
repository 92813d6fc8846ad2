//! Catalog domain types.
//!
//! Query-side types (`BeerQuery` → `ValidatedRequest`) and the normalized
//! record shape (`Beer`) that every response is built from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Beer categories the upstream catalog serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Ale,
    Stouts,
    RedAle,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Ale, Category::Stouts, Category::RedAle];

    /// Path segment used by the upstream API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ale => "ale",
            Category::Stouts => "stouts",
            Category::RedAle => "red-ale",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|c| c.as_str() == s).ok_or(())
    }
}

/// Fields a result list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Id,
    Name,
    Price,
    Average,
    Reviews,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Id,
        SortKey::Name,
        SortKey::Price,
        SortKey::Average,
        SortKey::Reviews,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Name => "name",
            SortKey::Price => "price",
            SortKey::Average => "average",
            SortKey::Reviews => "reviews",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|k| k.as_str() == s).ok_or(())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::Asc, SortOrder::Desc];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|o| o.as_str() == s).ok_or(())
    }
}

/// Raw query parameters of `GET /beers`, exactly as received.
///
/// Absent parameters deserialize to empty strings, which the validator
/// treats the same as "not supplied".
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct BeerQuery {
    #[serde(rename = "type")]
    pub category: String,
    pub name: String,
    pub order_by: String,
    pub order: String,
}

/// A query that passed validation. Built only by [`crate::catalog::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub category: Category,
    /// Case-insensitive substring filter on the beer name.
    pub name: Option<String>,
    /// `None` leaves the upstream order untouched.
    pub order_by: Option<SortKey>,
    pub order: SortOrder,
}

impl ValidatedRequest {
    /// A request for a category with no filter and no ordering.
    pub fn new(category: Category) -> Self {
        Self {
            category,
            name: None,
            order_by: None,
            order: SortOrder::Asc,
        }
    }
}

/// Rating summary of a beer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    pub average: f64,
    pub reviews: i64,
}

/// A normalized catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beer {
    pub id: i64,
    pub name: String,
    /// Always currency formatted, e.g. `"$12.50"`.
    pub price: String,
    pub rating: Rating,
    pub image: String,
}

/// Error body the upstream API returns instead of a record list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpstreamErrorEnvelope {
    pub error: i64,
    pub message: String,
}
