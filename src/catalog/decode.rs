//! Tolerant decoding of upstream beer records.
//!
//! The upstream catalog is inconsistent about field types: ids and prices
//! arrive as numbers or strings, ratings as objects or placeholder strings.
//! Each loosely-typed field is captured as an explicit sum type at the
//! boundary and normalized once into [`Beer`].
//!
//! Decoding is all-or-nothing: one bad record fails the whole batch.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::catalog::error::DecodeError;
use crate::catalog::types::{Beer, Rating};

/// A field the upstream sends either as a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericOrText {
    Number(f64),
    Text(String),
    Other(Value),
}

/// The `rating` field: a detail object, or a string meaning "no data".
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RatingField {
    Detailed(Map<String, Value>),
    Placeholder(String),
    Other(Value),
}

/// One upstream record before normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBeer {
    #[serde(default)]
    pub id: Option<NumericOrText>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<NumericOrText>,
    #[serde(default)]
    pub rating: Option<RatingField>,
    #[serde(default)]
    pub image: Option<String>,
}

impl TryFrom<RawBeer> for Beer {
    type Error = DecodeError;

    fn try_from(raw: RawBeer) -> Result<Self, Self::Error> {
        Ok(Beer {
            id: normalize_id(raw.id)?,
            price: normalize_price(raw.price)?,
            rating: normalize_rating(raw.rating)?,
            name: raw.name.unwrap_or_default(),
            image: raw.image.unwrap_or_default(),
        })
    }
}

/// Decode a JSON array of upstream records.
pub fn decode_batch(body: &[u8]) -> Result<Vec<Beer>, DecodeError> {
    let raw: Vec<RawBeer> = serde_json::from_slice(body)?;
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| {
            Beer::try_from(record).map_err(|e| DecodeError::Record {
                index,
                source: Box::new(e),
            })
        })
        .collect()
}

fn normalize_id(id: Option<NumericOrText>) -> Result<i64, DecodeError> {
    match id {
        // Fractional ids are truncated toward zero.
        Some(NumericOrText::Number(n)) => Ok(n.trunc() as i64),
        Some(NumericOrText::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| DecodeError::InvalidId(s)),
        Some(NumericOrText::Other(v)) => Err(unsupported("id", &v)),
        None => Err(unsupported("id", &Value::Null)),
    }
}

fn normalize_price(price: Option<NumericOrText>) -> Result<String, DecodeError> {
    match price {
        Some(NumericOrText::Number(n)) => Ok(format!("${n:.2}")),
        Some(NumericOrText::Text(s)) => Ok(s),
        Some(NumericOrText::Other(v)) => Err(unsupported("price", &v)),
        None => Err(unsupported("price", &Value::Null)),
    }
}

fn normalize_rating(rating: Option<RatingField>) -> Result<Rating, DecodeError> {
    match rating {
        Some(RatingField::Detailed(fields)) => Ok(Rating {
            average: fields.get("average").and_then(Value::as_f64).unwrap_or(0.0),
            reviews: fields
                .get("reviews")
                .and_then(Value::as_f64)
                .map(|r| r.trunc() as i64)
                .unwrap_or(0),
        }),
        Some(RatingField::Placeholder(_)) => Ok(Rating::default()),
        Some(RatingField::Other(v)) => Err(unsupported("rating", &v)),
        None => Err(unsupported("rating", &Value::Null)),
    }
}

fn unsupported(field: &'static str, value: &Value) -> DecodeError {
    DecodeError::UnsupportedType {
        field,
        found: json_kind(value),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
