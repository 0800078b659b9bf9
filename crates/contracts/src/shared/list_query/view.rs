use super::criteria::Criteria;
use super::field::ListRecord;
use serde_json::{Map, Value};

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Client-side list state: the fetched collection, the active criteria and
/// the pagination window (1-based page).
///
/// Every list page in the console goes through this type, so paging and
/// filtering behave the same everywhere.
#[derive(Debug, Clone)]
pub struct ListView<T> {
    source: Vec<T>,
    criteria: Criteria,
    search_fields: &'static [&'static str],
    page: usize,
    page_size: usize,
}

impl<T: ListRecord + Clone> ListView<T> {
    pub fn new(search_fields: &'static [&'static str]) -> Self {
        Self {
            source: Vec::new(),
            criteria: Criteria::default(),
            search_fields,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Replaces the source wholesale after a successful fetch.
    pub fn set_source(&mut self, records: Vec<T>) {
        self.source = records;
    }

    pub fn clear_source(&mut self) {
        self.source.clear();
    }

    pub fn source(&self) -> &[T] {
        &self.source
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// Replaces search text and filters from a submitted form object and
    /// returns to the first page.
    pub fn submit_criteria(&mut self, values: &Map<String, Value>) {
        self.set_criteria(Criteria::from_values(values));
    }

    pub fn set_criteria(&mut self, criteria: Criteria) {
        self.criteria = criteria;
        self.page = 1;
    }

    pub fn clear_criteria(&mut self) {
        self.set_criteria(Criteria::default());
    }

    /// Moves the window. Zero values are treated as 1.
    pub fn change_page(&mut self, page: usize, page_size: usize) {
        self.page = page.max(1);
        self.page_size = page_size.max(1);
    }

    pub fn filtered(&self) -> Vec<&T> {
        self.source
            .iter()
            .filter(|r| self.criteria.matches(*r, self.search_fields))
            .collect()
    }

    pub fn total_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&self) -> usize {
        let total = self.total_count();
        if total == 0 {
            1
        } else {
            total.div_ceil(self.page_size)
        }
    }

    /// Requested page clamped to the available range.
    pub fn current_page(&self) -> usize {
        self.page.min(self.total_pages())
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Slice `filtered[(page-1)*size .. page*size]` of the current page.
    pub fn visible(&self) -> Vec<T> {
        let filtered = self.filtered();
        let start = (self.current_page() - 1).saturating_mul(self.page_size);
        let end = start.saturating_add(self.page_size).min(filtered.len());
        filtered
            .get(start..end)
            .unwrap_or(&[])
            .iter()
            .map(|r| (*r).clone())
            .collect()
    }
}

/// Stable column sort for list pages.
pub fn sort_records<T: ListRecord>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.field(field).compare(&b.field(field));
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::{apply, FieldValue, FilterValue};
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        farmer: &'static str,
        crop_type: &'static str,
        premium: f64,
    }

    impl ListRecord for Row {
        fn field(&self, name: &str) -> FieldValue {
            match name {
                "id" => self.id.into(),
                "farmer" => self.farmer.into(),
                "cropType" => self.crop_type.into(),
                "premium" => self.premium.into(),
                _ => FieldValue::Empty,
            }
        }
    }

    const SEARCH_FIELDS: &[&str] = &["farmer", "cropType"];

    fn rows() -> Vec<Row> {
        vec![
            Row {
                id: 1,
                farmer: "Nguyễn Văn An",
                crop_type: "rice",
                premium: 4999.0,
            },
            Row {
                id: 2,
                farmer: "Trần Thị Bình",
                crop_type: "coffee",
                premium: 5000.0,
            },
            Row {
                id: 3,
                farmer: "Lê Văn Cường",
                crop_type: "rice",
                premium: 10000.0,
            },
        ]
    }

    fn view() -> ListView<Row> {
        let mut v = ListView::new(SEARCH_FIELDS);
        v.set_source(rows());
        v
    }

    fn ids(rows: &[Row]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_categorical_filter_keeps_source_order() {
        let mut v = view();
        v.submit_criteria(json!({ "cropType": "rice" }).as_object().unwrap());
        assert_eq!(ids(&v.visible()), vec![1, 3]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut v = view();
        v.submit_criteria(json!({ "search": "VĂN" }).as_object().unwrap());
        assert_eq!(ids(&v.visible()), vec![1, 3]);

        v.submit_criteria(json!({ "search": "COFF" }).as_object().unwrap());
        assert_eq!(ids(&v.visible()), vec![2]);

        v.submit_criteria(json!({ "search": "" }).as_object().unwrap());
        assert_eq!(v.total_count(), 3);
    }

    #[test]
    fn test_search_only_looks_at_configured_fields() {
        let mut v = view();
        // id is a column but not a search field
        v.submit_criteria(json!({ "search": "2" }).as_object().unwrap());
        assert_eq!(v.total_count(), 0);
    }

    #[test]
    fn test_search_text_is_matched_as_given() {
        let mut v = view();
        v.submit_criteria(json!({ "search": "   " }).as_object().unwrap());
        assert_eq!(v.total_count(), 0);

        // "Văn " only occurs mid-name
        v.submit_criteria(json!({ "search": "văn " }).as_object().unwrap());
        assert_eq!(ids(&v.visible()), vec![1, 3]);
        v.submit_criteria(json!({ "search": " an" }).as_object().unwrap());
        assert_eq!(ids(&v.visible()), vec![1]);
    }

    #[test]
    fn test_range_boundaries_are_inclusive() {
        let mut v = view();
        v.submit_criteria(
            json!({ "premium_min": 5000, "premium_max": 10000 })
                .as_object()
                .unwrap(),
        );
        assert_eq!(ids(&v.visible()), vec![2, 3]);
    }

    #[test]
    fn test_filters_commute() {
        let a = Criteria::default().with_filter("cropType", FilterValue::Exact("rice".into()));
        let b = Criteria::default().with_filter(
            "premium",
            FilterValue::Range { min: Some(5000.0), max: None },
        );
        let source = rows();
        let ab = apply(&apply(&source, &a, SEARCH_FIELDS), &b, SEARCH_FIELDS);
        let ba = apply(&apply(&source, &b, SEARCH_FIELDS), &a, SEARCH_FIELDS);
        assert_eq!(ab, ba);
        assert_eq!(ids(&ab), vec![3]);
    }

    #[test]
    fn test_clear_restores_source() {
        let mut v = view();
        v.submit_criteria(json!({ "search": "zzz", "cropType": "rice" }).as_object().unwrap());
        assert_eq!(v.total_count(), 0);
        v.clear_criteria();
        assert_eq!(v.visible(), rows());
    }

    #[test]
    fn test_pagination_window_and_reset() {
        let mut v = view();
        v.change_page(2, 2);
        assert_eq!(ids(&v.visible()), vec![3]);
        assert_eq!(v.total_pages(), 2);

        v.change_page(9, 2);
        assert_eq!(v.current_page(), 2);

        v.submit_criteria(json!({ "cropType": "rice" }).as_object().unwrap());
        assert_eq!(v.current_page(), 1);
        assert_eq!(ids(&v.visible()), vec![1, 3]);
    }

    #[test]
    fn test_empty_source_has_one_empty_page() {
        let v: ListView<Row> = ListView::new(SEARCH_FIELDS);
        assert_eq!(v.total_pages(), 1);
        assert!(v.visible().is_empty());
    }

    #[test]
    fn test_huge_page_size_shows_everything_on_one_page() {
        let mut v = view();
        v.change_page(1, usize::MAX);
        assert_eq!(v.total_pages(), 1);
        assert_eq!(ids(&v.visible()), vec![1, 2, 3]);

        v.change_page(usize::MAX, usize::MAX);
        assert_eq!(v.current_page(), 1);
        assert_eq!(ids(&v.visible()), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_records_by_number_desc() {
        let mut items = rows();
        sort_records(&mut items, "premium", false);
        assert_eq!(ids(&items), vec![3, 2, 1]);
    }
}
