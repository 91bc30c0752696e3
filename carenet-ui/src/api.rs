#![cfg(target_arch = "wasm32")]
//! Lớp vỏ fetch: header JSON, cookie phiên đính kèm mọi request,
//! lỗi quy về `CareError`.

use carenet_core::{ApiRequest, CareError};
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response};

fn js_text(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Gửi một request đã mô tả. Trả về JSON thô; trả lời 204 thành `null`.
pub async fn send(request: &ApiRequest) -> Result<JsValue, CareError> {
    let init = RequestInit::new();
    init.set_method(request.method().as_str());
    init.set_credentials(RequestCredentials::Include);
    if let Some(body) = request.body() {
        init.set_body(&JsValue::from_str(&body.to_string()));
    }

    let fetch_request = Request::new_with_str_and_init(&request.url(), &init)
        .map_err(|err| CareError::Network(js_text(err)))?;
    fetch_request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|err| CareError::Network(js_text(err)))?;

    let window =
        web_sys::window().ok_or_else(|| CareError::Network("Không có window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&fetch_request))
        .await
        .map_err(|err| CareError::Network(js_text(err)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|err| CareError::Network(js_text(err)))?;

    if response.status() == 204 {
        return Ok(JsValue::NULL);
    }

    // Thân trả lời có thể không phải JSON (lỗi proxy chẳng hạn); khi đó
    // coi như không có nội dung.
    let payload = match response.json() {
        Ok(promise) => JsFuture::from(promise).await.unwrap_or(JsValue::NULL),
        Err(_) => JsValue::NULL,
    };

    if !response.ok() {
        let detail = js_sys::Reflect::get(&payload, &JsValue::from_str("detail"))
            .ok()
            .and_then(|value| value.as_string());
        return Err(CareError::Http {
            status: response.status(),
            detail,
        });
    }

    Ok(payload)
}

/// Gửi rồi giải mã JSON về kiểu mong muốn.
pub async fn fetch_json<T: DeserializeOwned>(request: &ApiRequest) -> Result<T, CareError> {
    let payload = send(request).await?;
    serde_wasm_bindgen::from_value(payload).map_err(|err| CareError::Parse(err.to_string()))
}
