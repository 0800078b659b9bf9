//! Text extraction from PDF templates through pdf.js (`window.pdfjsLib`).
//!
//! Each page is extracted independently; a page that fails becomes an `Err`
//! entry and the remaining pages are still read.

use contracts::shared::placeholders::{
    scan_document, PageText, Rect, ScanError, ScanReport, TextRun,
};
use js_sys::{Array, Function, Object, Promise, Reflect, Uint8Array};
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = pdfjsLib, js_name = getDocument)]
    fn get_document(src: &JsValue) -> Result<JsValue, JsValue>;
}

/// One entry of `page.getTextContent().items`. Marked-content entries have
/// no `str` and are skipped.
#[derive(Debug, Clone, Default, Deserialize)]
struct TextItem {
    #[serde(default, rename = "str")]
    text: String,
    /// `[a, b, c, d, e, f]`, translation in `e`/`f`
    #[serde(default)]
    transform: Vec<f64>,
    #[serde(default)]
    width: f64,
    #[serde(default)]
    height: f64,
}

#[derive(Debug, Default, Deserialize)]
struct TextContent {
    #[serde(default)]
    items: Vec<TextItem>,
}

/// PDF space has its origin bottom-left; runs are reported top-left.
fn to_run(item: TextItem, page_height: f64) -> Option<TextRun> {
    if item.text.is_empty() {
        return None;
    }
    let x = item.transform.get(4).copied().unwrap_or(0.0);
    let baseline = item.transform.get(5).copied().unwrap_or(0.0);
    Some(TextRun {
        text: item.text,
        position: Rect {
            x,
            y: page_height - baseline - item.height,
            width: item.width,
            height: item.height,
        },
    })
}

fn js_message(err: &JsValue) -> String {
    if let Some(s) = err.as_string() {
        return s;
    }
    Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

fn call_method(target: &JsValue, name: &str, args: &[JsValue]) -> Result<JsValue, JsValue> {
    let method: Function = Reflect::get(target, &JsValue::from_str(name))?.dyn_into()?;
    let args: Array = args.iter().collect();
    method.apply(target, &args)
}

async fn resolve(value: JsValue) -> Result<JsValue, JsValue> {
    let promise: Promise = value.dyn_into()?;
    JsFuture::from(promise).await
}

async fn read_page(doc: &JsValue, number: u32) -> Result<Vec<TextRun>, JsValue> {
    let page = resolve(call_method(doc, "getPage", &[JsValue::from(number)])?).await?;

    let scale = Object::new();
    Reflect::set(&scale, &JsValue::from_str("scale"), &JsValue::from(1.0))?;
    let viewport = call_method(&page, "getViewport", &[scale.into()])?;
    let height = Reflect::get(&viewport, &JsValue::from_str("height"))?
        .as_f64()
        .unwrap_or(0.0);

    let content = resolve(call_method(&page, "getTextContent", &[])?).await?;
    let content: TextContent = serde_wasm_bindgen::from_value(content)?;
    Ok(content
        .items
        .into_iter()
        .filter_map(|item| to_run(item, height))
        .collect())
}

/// Opens the document and extracts every page in order.
pub async fn extract_pages(bytes: Uint8Array) -> Result<Vec<PageText>, ScanError> {
    let src = Object::new();
    Reflect::set(&src, &JsValue::from_str("data"), &bytes)
        .map_err(|e| ScanError::Unparseable(js_message(&e)))?;

    let task = get_document(&src).map_err(|e| ScanError::Unparseable(js_message(&e)))?;
    let promise = Reflect::get(&task, &JsValue::from_str("promise"))
        .map_err(|e| ScanError::Unparseable(js_message(&e)))?;
    let doc = resolve(promise)
        .await
        .map_err(|e| ScanError::Unparseable(js_message(&e)))?;

    let num_pages = Reflect::get(&doc, &JsValue::from_str("numPages"))
        .ok()
        .and_then(|n| n.as_f64())
        .unwrap_or(0.0) as u32;

    let mut pages = Vec::with_capacity(num_pages as usize);
    for number in 1..=num_pages {
        let runs = read_page(&doc, number).await.map_err(|e| {
            let message = js_message(&e);
            log::warn!("page {} could not be read: {}", number, message);
            message
        });
        pages.push(PageText { page: number, runs });
    }
    Ok(pages)
}

/// Reads the picked file and scans it for placeholders.
pub async fn scan_file(file: Option<File>) -> Result<ScanReport, ScanError> {
    let file = file.ok_or(ScanError::NoFile)?;
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ScanError::Unparseable(js_message(&e)))?;
    let pages = extract_pages(Uint8Array::new(&buffer)).await?;
    log::info!("extracted {} page(s) from {}", pages.len(), file.name());
    Ok(scan_document(pages))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_run_flips_y_axis() {
        let item = TextItem {
            text: "{{farmer_name}}".to_string(),
            transform: vec![12.0, 0.0, 0.0, 12.0, 72.0, 700.0],
            width: 90.0,
            height: 12.0,
        };
        let run = to_run(item, 842.0).unwrap();
        assert_eq!(run.position.x, 72.0);
        assert_eq!(run.position.y, 130.0);
        assert_eq!(run.position.width, 90.0);
    }

    #[test]
    fn test_to_run_skips_empty_items() {
        assert!(to_run(TextItem::default(), 842.0).is_none());
    }
}
