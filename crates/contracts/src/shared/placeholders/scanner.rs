use super::{PageError, PageText, Placeholder, PlaceholderKind, ScanReport, TextRun};
use once_cell::sync::Lazy;
use regex::Regex;

static NUMBERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([0-9]+)\)").expect("valid regex"));
static HANDLEBARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([A-Za-z_][A-Za-z0-9_]*)\}\}").expect("valid regex"));
static BRACKETS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([A-Za-z_][A-Za-z0-9_]*)\]").expect("valid regex"));

fn grammars() -> [(PlaceholderKind, &'static Regex); 3] {
    [
        (PlaceholderKind::Numbered, &*NUMBERED),
        (PlaceholderKind::Handlebars, &*HANDLEBARS),
        (PlaceholderKind::Brackets, &*BRACKETS),
    ]
}

/// Classifies every token inside a single run. Tokens split across two runs
/// are not seen; matching never looks past the run boundary.
///
/// `base_offset` is the number of characters preceding this run.
pub fn scan_run(run: &TextRun, page: u32, base_offset: usize) -> Vec<Placeholder> {
    let mut found: Vec<(usize, Placeholder)> = Vec::new();

    for (kind, re) in grammars() {
        for caps in re.captures_iter(&run.text) {
            let (Some(whole), Some(key)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let char_start = run.text[..whole.start()].chars().count();
            found.push((
                whole.start(),
                Placeholder {
                    id: uuid::Uuid::new_v4().to_string(),
                    original: whole.as_str().to_string(),
                    extracted_key: key.as_str().to_string(),
                    kind,
                    page,
                    position: run.position,
                    char_offset: base_offset + char_start,
                    mapped: false,
                    tag_id: None,
                },
            ));
        }
    }

    found.sort_by_key(|(start, _)| *start);
    found.into_iter().map(|(_, p)| p).collect()
}

/// Scans extracted pages in order. Pages that failed to extract are recorded
/// in `page_errors` and skipped; the scan continues with the next page.
pub fn scan_document<I>(pages: I) -> ScanReport
where
    I: IntoIterator<Item = PageText>,
{
    let mut report = ScanReport::default();
    let mut offset = 0usize;

    for page in pages {
        report.page_count = report.page_count.max(page.page);
        match page.runs {
            Ok(runs) => {
                for run in &runs {
                    report
                        .placeholders
                        .extend(scan_run(run, page.page, offset));
                    offset += run.text.chars().count();
                }
            }
            Err(message) => {
                log::warn!("skipping page {}: {}", page.page, message);
                report.page_errors.push(PageError {
                    page: page.page,
                    message,
                });
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::placeholders::Rect;
    use rstest::rstest;

    fn run(text: &str) -> TextRun {
        TextRun {
            text: text.to_string(),
            position: Rect {
                x: 72.0,
                y: 100.0,
                width: 40.0,
                height: 12.0,
            },
        }
    }

    #[rstest]
    #[case("(12)", PlaceholderKind::Numbered, "12")]
    #[case("{{farmer_name}}", PlaceholderKind::Handlebars, "farmer_name")]
    #[case("[crop_type]", PlaceholderKind::Brackets, "crop_type")]
    #[case("[_id2]", PlaceholderKind::Brackets, "_id2")]
    fn test_grammar_classification(
        #[case] text: &str,
        #[case] kind: PlaceholderKind,
        #[case] key: &str,
    ) {
        let found = scan_run(&run(text), 2, 0);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, kind);
        assert_eq!(found[0].extracted_key, key);
        assert_eq!(found[0].original, text);
        assert_eq!(found[0].page, 2);
        assert!(!found[0].mapped);
        assert_eq!(found[0].tag_id, None);
    }

    #[rstest]
    #[case("(12a)")]
    #[case("(١٢)")]
    #[case("()")]
    #[case("{{2bad}}")]
    #[case("[crop-type]")]
    #[case("{{ spaced }}")]
    #[case("plain text")]
    fn test_rejected_tokens(#[case] text: &str) {
        assert!(scan_run(&run(text), 1, 0).is_empty());
    }

    #[test]
    fn test_multiple_tokens_in_run_are_ordered_by_position() {
        let found = scan_run(&run("Ông/Bà [farmer] số (3) {{area}}"), 1, 0);
        let keys: Vec<_> = found.iter().map(|p| p.extracted_key.as_str()).collect();
        assert_eq!(keys, vec!["farmer", "3", "area"]);
        // offsets count characters, not bytes
        assert_eq!(found[0].char_offset, 7);
    }

    #[test]
    fn test_split_token_is_not_detected() {
        let report = scan_document(vec![PageText {
            page: 1,
            runs: Ok(vec![run("{{farmer_"), run("name}}")]),
        }]);
        assert!(report.placeholders.is_empty());
    }

    #[test]
    fn test_page_errors_are_skipped_and_reported() {
        let report = scan_document(vec![
            PageText {
                page: 1,
                runs: Ok(vec![run("abc"), run("(1)")]),
            },
            PageText {
                page: 2,
                runs: Err("broken content stream".into()),
            },
            PageText {
                page: 3,
                runs: Ok(vec![run("[policy_no]")]),
            },
        ]);

        assert_eq!(report.page_count, 3);
        assert_eq!(report.placeholders.len(), 2);
        assert_eq!(report.placeholders[0].char_offset, 3);
        assert_eq!(report.placeholders[1].page, 3);
        assert_eq!(report.placeholders[1].char_offset, 6);
        assert!(report.is_partial());
        assert_eq!(report.page_errors[0].page, 2);
    }
}
