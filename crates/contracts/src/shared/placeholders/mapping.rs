use super::Placeholder;
use std::collections::BTreeMap;

/// Working set of placeholders while a partner binds them to data fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceholderMap {
    items: Vec<Placeholder>,
}

impl PlaceholderMap {
    pub fn new(items: Vec<Placeholder>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Placeholder] {
        &self.items
    }

    /// Binds one placeholder. Returns false when the id is unknown.
    pub fn bind(&mut self, id: &str, tag_id: impl Into<String>) -> bool {
        match self.items.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                p.tag_id = Some(tag_id.into());
                p.mapped = true;
                true
            }
            None => false,
        }
    }

    /// Binds every occurrence of `key` (the same token often repeats across pages).
    pub fn bind_key(&mut self, key: &str, tag_id: &str) -> usize {
        let mut count = 0;
        for p in self.items.iter_mut().filter(|p| p.extracted_key == key) {
            p.tag_id = Some(tag_id.to_string());
            p.mapped = true;
            count += 1;
        }
        count
    }

    pub fn unbind(&mut self, id: &str) {
        if let Some(p) = self.items.iter_mut().find(|p| p.id == id) {
            p.tag_id = None;
            p.mapped = false;
        }
    }

    pub fn unmapped(&self) -> Vec<&Placeholder> {
        self.items.iter().filter(|p| !p.mapped).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.items.iter().all(|p| p.mapped)
    }

    /// `extracted_key -> tag_id` for everything bound so far.
    pub fn bindings(&self) -> BTreeMap<String, String> {
        self.items
            .iter()
            .filter_map(|p| {
                p.tag_id
                    .as_ref()
                    .map(|tag| (p.extracted_key.clone(), tag.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::placeholders::{scan_document, PageText, Rect, TextRun};

    fn sample() -> PlaceholderMap {
        let run = |text: &str| TextRun {
            text: text.to_string(),
            position: Rect::default(),
        };
        let report = scan_document(vec![
            PageText {
                page: 1,
                runs: Ok(vec![run("{{farmer_name}}"), run("[crop_type]")]),
            },
            PageText {
                page: 2,
                runs: Ok(vec![run("{{farmer_name}}")]),
            },
        ]);
        PlaceholderMap::new(report.placeholders)
    }

    #[test]
    fn test_bind_key_binds_all_occurrences() {
        let mut map = sample();
        assert_eq!(map.bind_key("farmer_name", "beneficiary.full_name"), 2);
        assert_eq!(map.unmapped().len(), 1);
        assert!(!map.is_complete());

        let id = map.unmapped()[0].id.clone();
        assert!(map.bind(&id, "beneficiary.crop_type"));
        assert!(map.is_complete());
        assert_eq!(map.bindings().len(), 2);
    }

    #[test]
    fn test_unbind_and_unknown_id() {
        let mut map = sample();
        assert!(!map.bind("missing", "x"));
        let id = map.items()[1].id.clone();
        map.bind(&id, "beneficiary.crop_type");
        map.unbind(&id);
        assert_eq!(map.unmapped().len(), 3);
    }
}
