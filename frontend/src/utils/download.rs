use wasm_bindgen::JsCast;

use crate::api::ApiError;

pub fn trigger_csv_download(filename: &str, csv_data: &str) -> Result<(), ApiError> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(csv_data));
    let blob = web_sys::Blob::new_with_str_sequence(&array)
        .map_err(|_| ApiError::unknown("Failed to create the report file"))?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| ApiError::unknown("Failed to create a download link"))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ApiError::unknown("No document available"))?;
    let anchor = document
        .create_element("a")
        .map_err(|_| ApiError::unknown("Failed to create a download link"))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| ApiError::unknown("Failed to create a download link"))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.style().set_property("display", "none").ok();
    document
        .body()
        .ok_or_else(|| ApiError::unknown("No document body available"))?
        .append_child(&anchor)
        .map_err(|_| ApiError::unknown("Failed to start the download"))?;
    anchor.click();
    anchor.remove();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}
