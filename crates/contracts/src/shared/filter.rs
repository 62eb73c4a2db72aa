//! Client-side list filtering: free-text substring search combined with an
//! exact status match. Filtering is stable and never fails.

use serde::{Deserialize, Serialize};

/// Record that can be found by free-text search
pub trait Searchable {
    /// Text fields the query is matched against (name, location, id, ...)
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match over [`Searchable::search_fields`].
    /// An empty query matches everything.
    fn matches_filter(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Record carrying a status from a closed enumeration
pub trait HasStatus {
    type Status: Copy + PartialEq;

    fn status(&self) -> Self::Status;
}

/// Value of a status select box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StatusFilter<S> {
    All,
    Only(S),
    /// A select value that is not a code of the enumeration. Matches nothing.
    Unrecognized(String),
}

impl<S> Default for StatusFilter<S> {
    fn default() -> Self {
        StatusFilter::All
    }
}

impl<S: Copy + PartialEq> StatusFilter<S> {
    /// Parse a select value. `"all"` and the empty string select everything.
    pub fn parse(code: &str, from_code: impl Fn(&str) -> Option<S>) -> Self {
        match code {
            "" | "all" => StatusFilter::All,
            other => match from_code(other) {
                Some(status) => StatusFilter::Only(status),
                None => StatusFilter::Unrecognized(other.to_string()),
            },
        }
    }

    pub fn accepts(&self, status: S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(selected) => *selected == status,
            StatusFilter::Unrecognized(_) => false,
        }
    }
}

/// Criteria selected by the user. Both parts must hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria<S> {
    pub text_query: String,
    pub status: StatusFilter<S>,
}

impl<S> Default for FilterCriteria<S> {
    fn default() -> Self {
        Self {
            text_query: String::new(),
            status: StatusFilter::All,
        }
    }
}

impl<S: Copy + PartialEq> FilterCriteria<S> {
    pub fn new(text_query: impl Into<String>, status: StatusFilter<S>) -> Self {
        Self {
            text_query: text_query.into(),
            status,
        }
    }

    pub fn text(text_query: impl Into<String>) -> Self {
        Self::new(text_query, StatusFilter::All)
    }

    pub fn status(status: S) -> Self {
        Self::new(String::new(), StatusFilter::Only(status))
    }

    pub fn matches<T>(&self, item: &T) -> bool
    where
        T: Searchable + HasStatus<Status = S>,
    {
        self.status.accepts(item.status()) && item.matches_filter(&self.text_query)
    }
}

/// Ordered sublist of `items` matching `criteria`.
pub fn filter_entities<'a, T>(items: &'a [T], criteria: &FilterCriteria<T::Status>) -> Vec<&'a T>
where
    T: Searchable + HasStatus,
{
    items.iter().filter(|item| criteria.matches(*item)).collect()
}

/// Text-only search for lists without a status select.
pub fn search_entities<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    items.iter().filter(|item| item.matches_filter(query)).collect()
}

/// Number of items whose status equals `status`.
pub fn count_with_status<T: HasStatus>(items: &[T], status: T::Status) -> usize {
    items.iter().filter(|item| item.status() == status).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::SiteStatus;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Site {
        name: String,
        location: String,
        status: SiteStatus,
    }

    impl Searchable for Site {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name.as_str(), self.location.as_str()]
        }
    }

    impl HasStatus for Site {
        type Status = SiteStatus;

        fn status(&self) -> SiteStatus {
            self.status
        }
    }

    fn site(name: &str, status: SiteStatus) -> Site {
        Site {
            name: name.to_string(),
            location: "Assam".to_string(),
            status,
        }
    }

    #[test]
    fn test_status_filter_keeps_order() {
        let sites = vec![
            site("A", SiteStatus::Safe),
            site("B", SiteStatus::Unsafe),
            site("C", SiteStatus::Safe),
        ];
        let result = filter_entities(&sites, &FilterCriteria::status(SiteStatus::Safe));
        assert_eq!(result, vec![&sites[0], &sites[2]]);
    }

    #[test]
    fn test_text_query_is_case_insensitive() {
        let sites = vec![
            site("Majuli Village Well", SiteStatus::Unsafe),
            site("Dibrugarh Community Center", SiteStatus::Safe),
        ];
        let result = filter_entities(&sites, &FilterCriteria::text("majuli"));
        assert_eq!(result, vec![&sites[0]]);

        let result = filter_entities(&sites, &FilterCriteria::text("ASSAM"));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let sites = vec![site("Majuli", SiteStatus::Safe)];
        assert!(filter_entities(&sites, &FilterCriteria::text(" Majuli")).is_empty());
    }

    #[test]
    fn test_criteria_are_conjunctive() {
        let sites = vec![
            site("Majuli Village Well", SiteStatus::Unsafe),
            site("Majuli School", SiteStatus::Safe),
        ];
        let criteria = FilterCriteria::new("majuli", StatusFilter::Only(SiteStatus::Safe));
        assert_eq!(filter_entities(&sites, &criteria), vec![&sites[1]]);
    }

    #[test]
    fn test_absent_status_yields_empty() {
        let sites = vec![site("A", SiteStatus::Safe)];
        assert!(filter_entities(&sites, &FilterCriteria::status(SiteStatus::NeedsReview)).is_empty());
    }

    #[test]
    fn test_parse_select_value() {
        assert_eq!(StatusFilter::parse("all", SiteStatus::from_code), StatusFilter::All);
        assert_eq!(StatusFilter::parse("", SiteStatus::from_code), StatusFilter::All);
        assert_eq!(
            StatusFilter::parse("needs-review", SiteStatus::from_code),
            StatusFilter::Only(SiteStatus::NeedsReview)
        );

        let bogus = StatusFilter::parse("flooded", SiteStatus::from_code);
        assert_eq!(bogus, StatusFilter::Unrecognized("flooded".to_string()));
        let sites = vec![site("A", SiteStatus::Safe)];
        assert!(filter_entities(&sites, &FilterCriteria::new("", bogus)).is_empty());
    }

    #[test]
    fn test_count_with_status() {
        let sites = vec![
            site("A", SiteStatus::Safe),
            site("B", SiteStatus::Unsafe),
            site("C", SiteStatus::Safe),
        ];
        assert_eq!(count_with_status(&sites, SiteStatus::Safe), 2);
        assert_eq!(count_with_status(&sites, SiteStatus::NeedsReview), 0);
    }

    fn arb_status() -> impl Strategy<Value = SiteStatus> {
        prop_oneof![
            Just(SiteStatus::Safe),
            Just(SiteStatus::Unsafe),
            Just(SiteStatus::NeedsReview),
        ]
    }

    fn arb_sites() -> impl Strategy<Value = Vec<Site>> {
        prop::collection::vec(
            ("[a-zA-Z ]{0,12}", "[a-zA-Z ]{0,12}", arb_status()).prop_map(|(name, location, status)| Site {
                name,
                location,
                status,
            }),
            0..20,
        )
    }

    proptest! {
        #[test]
        fn prop_result_is_ordered_subset(sites in arb_sites(), query in "[a-z]{0,3}", status in arb_status()) {
            let criteria = FilterCriteria::new(query, StatusFilter::Only(status));
            let result = filter_entities(&sites, &criteria);
            let mut cursor = sites.iter();
            for item in result {
                prop_assert!(cursor.any(|s| std::ptr::eq(s, item)));
            }
        }

        #[test]
        fn prop_empty_criteria_is_identity(sites in arb_sites()) {
            let result: Vec<Site> = filter_entities(&sites, &FilterCriteria::default())
                .into_iter()
                .cloned()
                .collect();
            prop_assert_eq!(result, sites);
        }

        #[test]
        fn prop_status_filter_is_exact(sites in arb_sites(), status in arb_status()) {
            let result = filter_entities(&sites, &FilterCriteria::status(status));
            prop_assert!(result.iter().all(|s| s.status == status));
            prop_assert_eq!(result.len(), count_with_status(&sites, status));
        }
    }
}
