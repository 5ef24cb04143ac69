//! Save binary report bodies through the browser's download flow.
//!
//! The bytes become a Blob object URL, a transient anchor with a `download`
//! attribute is clicked and removed, and the URL is revoked on the next tick
//! whether or not the DOM steps succeeded. SSR builds report the action as
//! unavailable.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use schema::ApiError;

/// Runs its release closure exactly once, when dropped.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) struct ReleaseOnDrop<F: FnOnce()> {
    release: Option<F>,
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
impl<F: FnOnce()> ReleaseOnDrop<F> {
    pub(crate) fn new(release: F) -> Self {
        Self { release: Some(release) }
    }
}

impl<F: FnOnce()> Drop for ReleaseOnDrop<F> {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Offer `bytes` to the user as `file_name` with MIME type `mime`.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] if the browser refuses any DOM step, or
/// [`ApiError::Unavailable`] outside the browser.
pub fn save_bytes(bytes: &[u8], file_name: &str, mime: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let dom_err = |e: wasm_bindgen::JsValue| ApiError::Validation(format!("download failed: {e:?}"));

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(dom_err)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(dom_err)?;

        let _revoke = {
            let url = url.clone();
            ReleaseOnDrop::new(move || {
                leptos::task::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(0).await;
                    let _ = web_sys::Url::revoke_object_url(&url);
                });
            })
        };
        click_download(&url, file_name)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (bytes, file_name, mime);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
fn click_download(url: &str, file_name: &str) -> Result<(), ApiError> {
    use wasm_bindgen::JsCast;

    let dom_err = |e: wasm_bindgen::JsValue| ApiError::Validation(format!("download failed: {e:?}"));

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ApiError::Validation("download failed: no document".to_owned()))?;
    let body = document
        .body()
        .ok_or_else(|| ApiError::Validation("download failed: no body".to_owned()))?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(dom_err)?
        .dyn_into()
        .map_err(|_| ApiError::Validation("download failed: anchor cast".to_owned()))?;
    anchor.set_href(url);
    anchor.set_download(file_name);
    body.append_child(&anchor).map_err(dom_err)?;
    anchor.click();
    anchor.remove();
    Ok(())
}
