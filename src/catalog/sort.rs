//! Result filtering and ordering.
//!
//! # Semantics
//! - Name filter is a case-insensitive substring match
//! - Ordering applies only when a sort key was requested
//! - Sorting is stable; equal keys keep upstream order in both directions
//! - `price` compares the formatted string unless numeric price ordering is
//!   enabled, in which case unparseable prices sort last

use std::cmp::Ordering;

use crate::catalog::types::{Beer, SortKey, SortOrder, ValidatedRequest};

/// Knobs that change ordering behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOptions {
    pub numeric_price: bool,
}

/// Filter and order `beers` as requested.
pub fn filter_and_sort(
    mut beers: Vec<Beer>,
    request: &ValidatedRequest,
    options: SortOptions,
) -> Vec<Beer> {
    if let Some(filter) = request.name.as_deref() {
        filter_by_name(&mut beers, filter);
    }
    if let Some(key) = request.order_by {
        sort_by_key(&mut beers, key, request.order, options);
    }
    beers
}

/// Keep only beers whose name contains `filter`, ignoring case.
pub fn filter_by_name(beers: &mut Vec<Beer>, filter: &str) {
    if filter.is_empty() {
        return;
    }
    let needle = filter.to_lowercase();
    beers.retain(|b| b.name.to_lowercase().contains(&needle));
}

/// Stable sort on `key`.
pub fn sort_by_key(beers: &mut [Beer], key: SortKey, order: SortOrder, options: SortOptions) {
    let compare = |a: &Beer, b: &Beer| -> Ordering {
        match key {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Price if options.numeric_price => {
                compare_amounts(parse_price(&a.price), parse_price(&b.price), order)
            }
            SortKey::Price => a.price.cmp(&b.price),
            SortKey::Average => a.rating.average.total_cmp(&b.rating.average),
            SortKey::Reviews => a.rating.reviews.cmp(&b.rating.reviews),
        }
    };

    match order {
        SortOrder::Asc => beers.sort_by(|a, b| compare(a, b)),
        SortOrder::Desc => beers.sort_by(|a, b| compare(b, a)),
    }
}

/// Parse a formatted price such as `"$1,299.00"`.
fn parse_price(price: &str) -> Option<f64> {
    let digits: String = price
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    digits.parse::<f64>().ok().filter(|v| v.is_finite())
}

// Missing amounts go last regardless of direction, so the comparator is
// pre-flipped for them when the caller will reverse it.
fn compare_amounts(a: Option<f64>, b: Option<f64>, order: SortOrder) -> Ordering {
    let last = match order {
        SortOrder::Asc => Ordering::Greater,
        SortOrder::Desc => Ordering::Less,
    };
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (None, Some(_)) => last,
        (Some(_), None) => last.reverse(),
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::{Category, Rating};

    fn beer(id: i64, name: &str, price: &str, average: f64, reviews: i64) -> Beer {
        Beer {
            id,
            name: name.to_string(),
            price: price.to_string(),
            rating: Rating { average, reviews },
            image: String::new(),
        }
    }

    fn sorted(key: SortKey, order: SortOrder) -> ValidatedRequest {
        ValidatedRequest {
            order_by: Some(key),
            order,
            ..ValidatedRequest::new(Category::Ale)
        }
    }

    fn sort_default(beers: Vec<Beer>, key: SortKey, order: SortOrder) -> Vec<Beer> {
        filter_and_sort(beers, &sorted(key, order), SortOptions::default())
    }

    fn ids(beers: &[Beer]) -> Vec<i64> {
        beers.iter().map(|b| b.id).collect()
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let beers = vec![
            beer(1, "Foo IPA", "$1.00", 0.0, 0),
            beer(2, "Bar Lager", "$1.00", 0.0, 0),
        ];
        let request = ValidatedRequest {
            name: Some("ipa".into()),
            ..ValidatedRequest::new(Category::Ale)
        };

        let result = filter_and_sort(beers, &request, SortOptions::default());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Foo IPA");
    }

    #[test]
    fn test_no_filter_keeps_everything_in_order() {
        let beers = vec![beer(3, "C", "$1", 0.0, 0), beer(1, "A", "$1", 0.0, 0)];
        let result = filter_and_sort(
            beers,
            &ValidatedRequest::new(Category::Ale),
            SortOptions::default(),
        );
        assert_eq!(ids(&result), vec![3, 1]);
    }

    #[test]
    fn test_sort_by_id() {
        let beers = vec![
            beer(3, "", "", 0.0, 0),
            beer(1, "", "", 0.0, 0),
            beer(2, "", "", 0.0, 0),
        ];

        let asc = sort_default(beers.clone(), SortKey::Id, SortOrder::Asc);
        assert_eq!(ids(&asc), vec![1, 2, 3]);

        let desc = sort_default(beers, SortKey::Id, SortOrder::Desc);
        assert_eq!(ids(&desc), vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let beers = vec![
            beer(1, "", "", 4.0, 0),
            beer(2, "", "", 3.0, 0),
            beer(3, "", "", 4.0, 0),
            beer(4, "", "", 3.0, 0),
        ];

        let asc = sort_default(beers.clone(), SortKey::Average, SortOrder::Asc);
        assert_eq!(ids(&asc), vec![2, 4, 1, 3]);

        let desc = sort_default(beers, SortKey::Average, SortOrder::Desc);
        assert_eq!(ids(&desc), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_name_sort_is_case_sensitive() {
        let beers = vec![beer(1, "amber", "", 0.0, 0), beer(2, "Zwickel", "", 0.0, 0)];
        let result = sort_default(beers, SortKey::Name, SortOrder::Asc);
        assert_eq!(ids(&result), vec![2, 1]);
    }

    #[test]
    fn test_price_sorts_as_text_by_default() {
        let beers = vec![beer(1, "", "$9.99", 0.0, 0), beer(2, "", "$10.00", 0.0, 0)];
        let result = sort_default(beers, SortKey::Price, SortOrder::Asc);
        assert_eq!(ids(&result), vec![2, 1]);
    }

    #[test]
    fn test_numeric_price_sort() {
        let beers = vec![
            beer(1, "", "$10.00", 0.0, 0),
            beer(2, "", "n/a", 0.0, 0),
            beer(3, "", "$9.99", 0.0, 0),
            beer(4, "", "$1,200.00", 0.0, 0),
        ];
        let options = SortOptions { numeric_price: true };

        let asc = filter_and_sort(beers.clone(), &sorted(SortKey::Price, SortOrder::Asc), options);
        assert_eq!(ids(&asc), vec![3, 1, 4, 2]);

        let desc = filter_and_sort(beers, &sorted(SortKey::Price, SortOrder::Desc), options);
        assert_eq!(ids(&desc), vec![4, 1, 3, 2]);
    }

    #[test]
    fn test_sort_by_reviews_after_filter() {
        let beers = vec![
            beer(1, "Hazy IPA", "", 0.0, 40),
            beer(2, "Stout", "", 0.0, 90),
            beer(3, "West Coast IPA", "", 0.0, 12),
        ];
        let request = ValidatedRequest {
            name: Some("IPA".into()),
            ..sorted(SortKey::Reviews, SortOrder::Desc)
        };
        let result = filter_and_sort(beers, &request, SortOptions::default());
        assert_eq!(ids(&result), vec![1, 3]);
    }
}
