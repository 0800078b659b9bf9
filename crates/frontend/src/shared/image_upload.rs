//! Uploads a picked image to the external image host and returns its URL.

use crate::shared::config::config;
use contracts::shared::image_upload::{validate_image, HostedImageResponse, UploadError};
use contracts::shared::messages::{self, MessageDomain};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{AbortController, AbortSignal, Event, File, FormData, HtmlInputElement};

/// Validates, then posts `multipart/form-data` (`image` field) to the host
/// with the configured API key. The request is aborted once
/// `upload.timeout_ms` elapses.
pub async fn upload_image(file: Option<File>) -> Result<String, UploadError> {
    let file = file.ok_or(UploadError::NoFile)?;
    let upload = &config().upload;
    validate_image(file.size() as u64, &file.type_(), upload.max_bytes)?;

    if upload.api_key.is_empty() {
        log::error!("image upload key is not configured");
        return Err(UploadError::Failed("missing API key".to_string()));
    }

    let form = FormData::new()
        .map_err(|_| UploadError::Failed("FormData unavailable".to_string()))?;
    form.append_with_blob("image", &file)
        .map_err(|_| UploadError::Failed("could not attach file".to_string()))?;

    let url = format!(
        "{}?key={}",
        upload.endpoint,
        urlencoding::encode(&upload.api_key)
    );

    let controller = AbortController::new()
        .map_err(|_| UploadError::Failed("AbortController unavailable".to_string()))?;
    let signal = controller.signal();
    let timeout_ms = upload.timeout_ms;
    spawn_local(async move {
        TimeoutFuture::new(timeout_ms).await;
        // no-op once the request has settled
        controller.abort();
    });

    let hosted = match post_form(&url, form, &signal).await {
        Ok(hosted) => hosted,
        Err(_) if signal.aborted() => {
            log::warn!("image host did not answer within {} ms", timeout_ms);
            return Err(UploadError::Failed(format!(
                "timed out after {} ms",
                timeout_ms
            )));
        }
        Err(e) => return Err(e),
    };
    let url = hosted.into_url()?;
    log::info!("uploaded {} to {}", file.name(), url);
    Ok(url)
}

async fn post_form(
    url: &str,
    form: FormData,
    signal: &AbortSignal,
) -> Result<HostedImageResponse, UploadError> {
    let response = Request::post(url)
        .abort_signal(Some(signal))
        .body(form)
        .map_err(|e| UploadError::Failed(e.to_string()))?
        .send()
        .await
        .map_err(|e| UploadError::Failed(e.to_string()))?;

    if !response.ok() {
        return Err(UploadError::Failed(format!(
            "image host returned {}",
            response.status()
        )));
    }

    response
        .json()
        .await
        .map_err(|e| UploadError::Failed(e.to_string()))
}

/// Vietnamese text for an upload failure.
pub fn upload_message(error: &UploadError) -> String {
    MessageDomain::Upload
        .lookup(error.code())
        .unwrap_or(messages::UNKNOWN_ERROR)
        .to_string()
}

/// First file chosen in the `<input type="file">` that fired `ev`.
pub fn picked_file(ev: &Event) -> Option<File> {
    ev.target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}
