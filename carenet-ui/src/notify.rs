#![cfg(target_arch = "wasm32")]
//! Băng thông báo tạm thời và luồng xác nhận xóa dùng chung giữa các trang.

use carenet_core::{ApiRequest, CareError, RecordKind, SearchConfig};
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::console;

use crate::api;

/// Loại băng thông báo; mỗi loại chỉ hiển thị một băng tại một thời điểm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    fn level(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
            NoticeKind::Info => "info",
        }
    }

    fn duration_ms(self) -> u32 {
        match self {
            NoticeKind::Success | NoticeKind::Info => 3_000,
            NoticeKind::Error => 5_000,
        }
    }
}

/// Chèn một băng thông báo nổi đầu trang; băng cùng loại đang hiển thị
/// bị thay thế, băng mới tự biến mất sau thời hạn của loại.
pub fn show_notice(kind: NoticeKind, message: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };

    let selector = format!(".care-notice[data-level=\"{}\"]", kind.level());
    if let Ok(Some(existing)) = document.query_selector(&selector) {
        existing.remove();
    }

    let Ok(banner) = document.create_element("div") else {
        return;
    };
    banner.set_class_name("care-notice");
    let _ = banner.set_attribute("data-level", kind.level());

    if let Ok(text) = document.create_element("span") {
        text.set_class_name("care-notice-text");
        text.set_text_content(Some(message));
        let _ = banner.append_child(&text);
    }

    if let Ok(close) = document.create_element("button") {
        close.set_class_name("care-notice-close");
        let _ = close.set_attribute("type", "button");
        let _ = close.set_attribute("aria-label", "Đóng thông báo");
        close.set_text_content(Some("×"));
        let banner_for_close = banner.clone();
        let on_close = Closure::<dyn FnMut()>::new(move || {
            banner_for_close.remove();
        });
        if let Some(button) = close.dyn_ref::<web_sys::HtmlElement>() {
            button.set_onclick(Some(on_close.as_ref().unchecked_ref()));
        }
        on_close.forget();
        let _ = banner.append_child(&close);
    }

    let _ = body.append_child(&banner);

    let banner_for_timeout = banner.clone();
    Timeout::new(kind.duration_ms(), move || {
        banner_for_timeout.remove();
    })
    .forget();
}

/// Hộp thoại chặn duy nhất của lớp này: `window.alert`.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Ghi lỗi ra console rồi đưa ra hộp thoại chặn với thông điệp phù hợp.
pub fn surface_error(err: &CareError, fallback: &str) {
    console::error_1(&JsValue::from_str(&err.to_string()));
    alert(&err.surface_message(fallback));
}

/// Xác nhận rồi xóa một bản ghi; thành công thì hiện băng thông báo và
/// chuyển hướng sau một khoảng ngắn, thất bại thì ở lại trang hiện tại.
pub async fn confirm_delete(
    kind: RecordKind,
    id: i64,
    display_label: &str,
    redirect: Option<String>,
) {
    let message = format!(
        "Xóa {} của {display_label}?\n\nThao tác này không thể hoàn tác.",
        kind.display_name()
    );
    if !confirm(&message) {
        return;
    }

    match api::send(&ApiRequest::delete_record(kind, id)).await {
        Ok(_) => {
            show_notice(
                NoticeKind::Success,
                &format!("Đã xóa {}", kind.display_name()),
            );
            let target = redirect.unwrap_or_else(|| format!("/{}", kind.path_segment()));
            Timeout::new(SearchConfig::default().redirect_delay_ms, move || {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(&target);
                }
            })
            .forget();
        }
        Err(err) => surface_error(&err, "Xóa thất bại"),
    }
}
