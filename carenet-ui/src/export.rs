#![cfg(target_arch = "wasm32")]
//! Xuất sơ đồ mạng lưới đã vẽ thành file tải về: SVG nguyên bản hoặc PNG
//! dựng qua canvas nền trắng.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Blob, BlobPropertyBag, CanvasRenderingContext2d, Document, Element, HtmlAnchorElement,
    HtmlCanvasElement, HtmlImageElement, Url,
};

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("Không có window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("Không truy cập được document"))
}

fn find_svg(document: &Document, selector: &str) -> Result<Element, JsValue> {
    document
        .query_selector(selector)
        .map_err(|err| JsValue::from_str(&format!("Selector lỗi: {err:?}")))?
        .ok_or_else(|| JsValue::from_str("Không tìm thấy sơ đồ theo selector"))
}

fn serialize_svg(element: &Element) -> Result<String, JsValue> {
    web_sys::XmlSerializer::new()?.serialize_to_string(element)
}

fn stamped_name(stem: &str, extension: &str) -> String {
    let epoch_ms = js_sys::Date::now() as u64;
    format!("network_{stem}_{epoch_ms}.{extension}")
}

fn trigger_download(document: &Document, url: &str, filename: &str) -> Result<(), JsValue> {
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(url);
    anchor.set_download(filename);
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("Document không có thẻ <body>"))?;
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();
    Ok(())
}

fn download_blob(document: &Document, blob: &Blob, filename: &str) -> Result<(), JsValue> {
    let url = Url::create_object_url_with_blob(blob)?;
    let result = trigger_download(document, &url, filename);
    let _ = Url::revoke_object_url(&url);
    result
}

/// Tải sơ đồ xuống dưới dạng SVG nguyên bản.
pub fn export_svg(selector: &str, stem: &str) -> Result<(), JsValue> {
    let document = document()?;
    let svg = serialize_svg(&find_svg(&document, selector)?)?;

    let options = BlobPropertyBag::new();
    options.set_type("image/svg+xml;charset=utf-8");
    let parts = js_sys::Array::of1(&JsValue::from_str(&svg));
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;

    download_blob(&document, &blob, &stamped_name(stem, "svg"))
}

/// Vẽ sơ đồ lên canvas nền trắng rồi tải xuống dưới dạng PNG.
pub fn export_png(selector: &str, stem: &str) -> Result<(), JsValue> {
    let document = document()?;
    let element = find_svg(&document, selector)?;
    let svg = serialize_svg(&element)?;

    let width = element.client_width().max(1) as u32;
    let height = element.client_height().max(1) as u32;

    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_width(width);
    canvas.set_height(height);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("Không lấy được context 2d"))?
        .dyn_into()?;

    let image = HtmlImageElement::new()?;
    let filename = stamped_name(stem, "png");

    let image_for_load = image.clone();
    let document_for_load = document.clone();
    let onload = Closure::once(move || {
        context.set_fill_style_str("#ffffff");
        context.fill_rect(0.0, 0.0, f64::from(width), f64::from(height));
        if context
            .draw_image_with_html_image_element(&image_for_load, 0.0, 0.0)
            .is_err()
        {
            return;
        }

        let to_blob = Closure::once(move |blob: Option<Blob>| {
            if let Some(blob) = blob {
                let _ = download_blob(&document_for_load, &blob, &filename);
            }
        });
        let _ = canvas.to_blob(to_blob.as_ref().unchecked_ref());
        to_blob.forget();
    });
    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    // SVG có thể chứa ký tự ngoài Latin-1 nên nhúng theo kiểu mã hóa
    // phần trăm thay vì base64.
    let data_url = format!(
        "data:image/svg+xml;charset=utf-8,{}",
        urlencoding::encode(&svg)
    );
    image.set_src(&data_url);

    Ok(())
}
