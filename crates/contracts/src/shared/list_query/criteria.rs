use super::field::{parse_iso_date, FieldValue, ListRecord};
use chrono::NaiveDate;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Conventional key carrying free-text search in a submitted filter form.
pub const SEARCH_KEY: &str = "search";

/// Constraint on a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// Field display text must equal the value exactly.
    Exact(String),
    /// Inclusive numeric bounds. Missing min is 0, missing max is unbounded.
    Range { min: Option<f64>, max: Option<f64> },
    /// Inclusive date bounds.
    DateRange {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl FilterValue {
    pub fn matches(&self, value: &FieldValue) -> bool {
        match self {
            FilterValue::Exact(expected) => {
                expected.is_empty() || value.display() == *expected
            }
            FilterValue::Range { min, max } => match value.as_number() {
                Some(n) => n >= min.unwrap_or(0.0) && n <= max.unwrap_or(f64::INFINITY),
                None => false,
            },
            FilterValue::DateRange { from, to } => match value.as_date() {
                Some(d) => from.map_or(true, |f| d >= f) && to.map_or(true, |t| d <= t),
                None => false,
            },
        }
    }
}

/// Search text plus per-field filters, as submitted from a list page's filter form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    pub search: String,
    pub filters: BTreeMap<String, FilterValue>,
}

#[derive(Clone, Copy)]
enum Bound {
    Min,
    Max,
    From,
    To,
}

fn split_bound(key: &str) -> Option<(&str, Bound)> {
    const SUFFIXES: &[(&str, Bound)] = &[
        ("_min", Bound::Min),
        ("Min", Bound::Min),
        ("_max", Bound::Max),
        ("Max", Bound::Max),
        ("_from", Bound::From),
        ("From", Bound::From),
        ("_to", Bound::To),
        ("To", Bound::To),
    ];
    SUFFIXES.iter().find_map(|(suffix, bound)| {
        key.strip_suffix(suffix)
            .filter(|base| !base.is_empty())
            .map(|base| (base, *bound))
    })
}

fn value_as_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn value_as_date(v: &Value) -> Option<NaiveDate> {
    match v {
        Value::String(s) => parse_iso_date(s),
        _ => None,
    }
}

fn value_as_text(v: &Value) -> Option<String> {
    let text = match v {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => FieldValue::Number(n.as_f64()?).display(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

impl Criteria {
    /// Builds criteria from a submitted form object.
    ///
    /// `search` becomes the search text, `<field>_min`/`<field>Min` and
    /// `<field>_max`/`<field>Max` build numeric ranges, `<field>_from`/`<field>_to`
    /// build date ranges, and every other key is an exact filter. Null, empty or
    /// unparsable values impose no constraint.
    pub fn from_values(values: &Map<String, Value>) -> Self {
        let mut criteria = Criteria::default();
        let mut ranges: BTreeMap<String, (Option<f64>, Option<f64>)> = BTreeMap::new();
        let mut dates: BTreeMap<String, (Option<NaiveDate>, Option<NaiveDate>)> = BTreeMap::new();

        for (key, value) in values {
            if key == SEARCH_KEY {
                criteria.search = match value {
                    Value::String(text) => text.clone(),
                    other => value_as_text(other).unwrap_or_default(),
                };
                continue;
            }
            match split_bound(key) {
                Some((base, Bound::Min)) => {
                    ranges.entry(base.to_string()).or_default().0 = value_as_number(value);
                }
                Some((base, Bound::Max)) => {
                    ranges.entry(base.to_string()).or_default().1 = value_as_number(value);
                }
                Some((base, Bound::From)) => {
                    dates.entry(base.to_string()).or_default().0 = value_as_date(value);
                }
                Some((base, Bound::To)) => {
                    dates.entry(base.to_string()).or_default().1 = value_as_date(value);
                }
                None => {
                    if let Some(text) = value_as_text(value) {
                        criteria.filters.insert(key.clone(), FilterValue::Exact(text));
                    }
                }
            }
        }

        for (field, (min, max)) in ranges {
            if min.is_some() || max.is_some() {
                criteria.filters.insert(field, FilterValue::Range { min, max });
            }
        }
        for (field, (from, to)) in dates {
            if from.is_some() || to.is_some() {
                criteria.filters.insert(field, FilterValue::DateRange { from, to });
            }
        }
        criteria
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_filter(mut self, field: impl Into<String>, filter: FilterValue) -> Self {
        self.filters.insert(field.into(), filter);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.filters.is_empty()
    }

    /// Number of active constraints, for the filter panel badge.
    pub fn active_count(&self) -> usize {
        let search = usize::from(!self.search.is_empty());
        search + self.filters.len()
    }

    pub fn matches_search<T: ListRecord>(&self, record: &T, search_fields: &[&str]) -> bool {
        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        search_fields
            .iter()
            .any(|f| record.field(f).display().to_lowercase().contains(&needle))
    }

    pub fn matches<T: ListRecord>(&self, record: &T, search_fields: &[&str]) -> bool {
        self.matches_search(record, search_fields)
            && self
                .filters
                .iter()
                .all(|(field, filter)| filter.matches(&record.field(field)))
    }
}

/// Stable filter of `records` by `criteria`.
pub fn apply<T: ListRecord + Clone>(
    records: &[T],
    criteria: &Criteria,
    search_fields: &[&str],
) -> Vec<T> {
    records
        .iter()
        .filter(|r| criteria.matches(*r, search_fields))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_values_splits_keys_by_convention() {
        let values = json!({
            "search": "Lúa",
            "cropType": "rice",
            "premiumMin": 5000,
            "premium_max": "10000",
            "created_from": "2024-01-01",
            "status": null,
            "province": ""
        });
        let criteria = Criteria::from_values(values.as_object().unwrap());

        assert_eq!(criteria.search, "Lúa");
        assert_eq!(
            criteria.filters.get("cropType"),
            Some(&FilterValue::Exact("rice".into()))
        );
        assert_eq!(
            criteria.filters.get("premium"),
            Some(&FilterValue::Range {
                min: Some(5000.0),
                max: Some(10000.0)
            })
        );
        assert_eq!(
            criteria.filters.get("created"),
            Some(&FilterValue::DateRange {
                from: NaiveDate::from_ymd_opt(2024, 1, 1),
                to: None
            })
        );
        assert!(!criteria.filters.contains_key("status"));
        assert!(!criteria.filters.contains_key("province"));
        assert_eq!(criteria.active_count(), 4);
    }

    #[test]
    fn test_unparsable_bounds_impose_nothing() {
        let values = json!({ "area_min": "abc", "area_max": null });
        let criteria = Criteria::from_values(values.as_object().unwrap());
        assert!(criteria.is_empty());
    }

    #[test]
    fn test_range_defaults() {
        let only_max = FilterValue::Range {
            min: None,
            max: Some(10.0),
        };
        assert!(only_max.matches(&FieldValue::Number(0.0)));
        assert!(!only_max.matches(&FieldValue::Number(-1.0)));
        assert!(!only_max.matches(&FieldValue::Empty));

        let only_min = FilterValue::Range {
            min: Some(10.0),
            max: None,
        };
        assert!(only_min.matches(&FieldValue::Number(1e12)));
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let filter = FilterValue::DateRange {
            from: NaiveDate::from_ymd_opt(2024, 5, 1),
            to: NaiveDate::from_ymd_opt(2024, 5, 31),
        };
        assert!(filter.matches(&FieldValue::Text("2024-05-01T00:00:00Z".into())));
        assert!(filter.matches(&FieldValue::Date(NaiveDate::from_ymd_opt(2024, 5, 31).unwrap())));
        assert!(!filter.matches(&FieldValue::Date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())));
    }
}
