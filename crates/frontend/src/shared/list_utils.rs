/// List page helpers: sort indicators and the per-page list state built on
/// the shared `ListView` (search, filters, pagination).
use contracts::shared::config::ListConfig;
use contracts::shared::list_query::{sort_records, Criteria, ListRecord, ListView};
use serde_json::{Map, Value};

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// State behind every list page. Kept in an `RwSignal` by the page.
///
/// Sorting reorders the source itself, so the search/filter/page pipeline of
/// `ListView` sees rows in column order.
#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub view: ListView<T>,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub is_loaded: bool,
}

impl<T: ListRecord + Clone> ListState<T> {
    pub fn new(search_fields: &'static [&'static str], config: &ListConfig) -> Self {
        Self {
            view: ListView::new(search_fields).with_page_size(config.default_page_size),
            sort_field: String::new(),
            sort_ascending: true,
            is_loaded: false,
        }
    }

    /// Replaces the rows after a fetch, keeping the chosen column order.
    pub fn load(&mut self, records: Vec<T>) {
        self.view.set_source(records);
        self.resort();
        self.is_loaded = true;
    }

    pub fn unload(&mut self) {
        self.view.clear_source();
        self.is_loaded = false;
    }

    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
        self.resort();
    }

    fn resort(&mut self) {
        if self.sort_field.is_empty() {
            return;
        }
        let mut rows = self.view.source().to_vec();
        sort_records(&mut rows, &self.sort_field, self.sort_ascending);
        self.view.set_source(rows);
    }

    pub fn submit(&mut self, values: &Map<String, Value>) {
        self.view.submit_criteria(values);
    }

    pub fn clear_filters(&mut self) {
        self.view.clear_criteria();
    }

    pub fn go_to_page(&mut self, page: usize) {
        let size = self.view.page_size();
        self.view.change_page(page, size);
    }

    /// Changing the page size returns to the first page.
    pub fn set_page_size(&mut self, size: usize) {
        self.view.change_page(1, size);
    }

    pub fn criteria(&self) -> &Criteria {
        self.view.criteria()
    }

    pub fn rows(&self) -> Vec<T> {
        self.view.visible()
    }

    pub fn indicator(&self, field: &str) -> &'static str {
        get_sort_indicator(&self.sort_field, field, self.sort_ascending)
    }

    pub fn indicator_class(&self, field: &str) -> &'static str {
        get_sort_class(&self.sort_field, field)
    }
}

/// Builds the submitted filter form object from `(key, raw input)` pairs.
/// Blank inputs are left out.
pub fn form_values<'a, I>(pairs: I) -> Map<String, Value>
where
    I: IntoIterator<Item = (&'a str, String)>,
{
    pairs
        .into_iter()
        .filter(|(_, v)| !v.trim().is_empty())
        .map(|(k, v)| (k.to_string(), Value::String(v.trim().to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_query::FieldValue;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        amount: f64,
    }

    impl ListRecord for Row {
        fn field(&self, name: &str) -> FieldValue {
            match name {
                "name" => self.name.into(),
                "amount" => self.amount.into(),
                _ => FieldValue::Empty,
            }
        }
    }

    fn config(page_size: usize) -> ListConfig {
        ListConfig {
            default_page_size: page_size,
            page_size_options: vec![page_size],
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Lúa", amount: 30.0 },
            Row { name: "Cà phê", amount: 10.0 },
            Row { name: "Lúa nếp", amount: 20.0 },
        ]
    }

    #[test]
    fn test_sort_survives_reload() {
        let mut state = ListState::new(&["name"], &config(10));
        state.load(rows());
        state.toggle_sort("amount");
        assert_eq!(
            state.rows().iter().map(|r| r.amount).collect::<Vec<_>>(),
            vec![10.0, 20.0, 30.0]
        );

        state.toggle_sort("amount");
        state.load(rows());
        assert_eq!(state.rows()[0].amount, 30.0);
        assert_eq!(state.indicator("amount"), " ▼");
        assert_eq!(state.indicator("name"), " ⇅");
    }

    #[test]
    fn test_submit_resets_page() {
        let mut state = ListState::new(&["name"], &config(1));
        state.load(rows());
        state.go_to_page(3);
        assert_eq!(state.view.current_page(), 3);

        state.submit(&form_values([
            ("search", "lúa".to_string()),
            ("amount_min", " ".to_string()),
        ]));
        assert_eq!(state.view.current_page(), 1);
        assert_eq!(state.view.total_count(), 2);
        assert_eq!(state.criteria().active_count(), 1);
    }

    #[test]
    fn test_page_size_change_returns_to_first_page() {
        let mut state = ListState::new(&["name"], &config(1));
        state.load(rows());
        state.go_to_page(2);
        state.set_page_size(2);
        assert_eq!(state.view.current_page(), 1);
        assert_eq!(state.rows().len(), 2);
    }
}
