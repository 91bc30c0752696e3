//! Thành phần giao diện cho hệ thống quản lý hồ sơ chăm sóc trong môi
//! trường WebAssembly: danh bạ người sử dụng dịch vụ, bảng thuốc với các
//! hộp thoại, thanh phiên làm việc và tiện ích xuất sơ đồ.

#[cfg(target_arch = "wasm32")]
mod api;
#[cfg(target_arch = "wasm32")]
mod directory;
#[cfg(target_arch = "wasm32")]
mod export;
#[cfg(target_arch = "wasm32")]
mod medication;
#[cfg(target_arch = "wasm32")]
mod notify;
#[cfg(target_arch = "wasm32")]
mod session;
#[cfg(target_arch = "wasm32")]
mod styles;

#[cfg(target_arch = "wasm32")]
mod mounts {
    use carenet_core::RecordKind;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, Window};

    use crate::{directory, export, medication, notify, session};

    fn mount_target(selector: &str) -> Result<Element, JsValue> {
        let window: Window =
            web_sys::window().ok_or_else(|| JsValue::from_str("Không có window"))?;
        let document: Document = window
            .document()
            .ok_or_else(|| JsValue::from_str("Không truy cập được document"))?;

        document
            .query_selector(selector)
            .map_err(|err| JsValue::from_str(&format!("Selector lỗi: {err:?}")))?
            .ok_or_else(|| JsValue::from_str("Không tìm thấy element theo selector"))
    }

    /// Gắn trang danh bạ người sử dụng dịch vụ vào element chỉ định.
    #[wasm_bindgen]
    pub fn mount_user_directory(selector: &str) -> Result<(), JsValue> {
        let target = mount_target(selector)?;
        yew::Renderer::<directory::UserDirectory>::with_root(target).render();
        Ok(())
    }

    /// Gắn bảng thuốc của một người sử dụng dịch vụ vào element chỉ định.
    #[wasm_bindgen]
    pub fn mount_medication_panel(selector: &str, user_id: u32) -> Result<(), JsValue> {
        let target = mount_target(selector)?;
        yew::Renderer::<medication::MedicationPanel>::with_root_and_props(
            target,
            medication::MedicationPanelProps {
                user_id: i64::from(user_id),
            },
        )
        .render();
        Ok(())
    }

    /// Gắn thanh phiên làm việc (tên nhân viên, menu quản trị, đăng xuất).
    #[wasm_bindgen]
    pub fn mount_session_nav(selector: &str) -> Result<(), JsValue> {
        let target = mount_target(selector)?;
        yew::Renderer::<session::SessionNav>::with_root(target).render();
        Ok(())
    }

    /// Xác nhận rồi xóa một bản ghi; dùng được từ nút bấm thuần của trang chủ.
    #[wasm_bindgen]
    pub async fn confirm_delete(
        record_kind: String,
        record_id: u32,
        display_label: String,
        redirect_url: Option<String>,
    ) -> Result<(), JsValue> {
        let kind = RecordKind::from_segment(&record_kind)
            .ok_or_else(|| JsValue::from_str("Loại bản ghi không hợp lệ"))?;
        notify::confirm_delete(kind, i64::from(record_id), &display_label, redirect_url).await;
        Ok(())
    }

    /// Tải sơ đồ mạng lưới đã vẽ xuống dưới dạng SVG.
    #[wasm_bindgen]
    pub fn export_network_svg(selector: &str, stem: &str) -> Result<(), JsValue> {
        export::export_svg(selector, stem)
    }

    /// Tải sơ đồ mạng lưới đã vẽ xuống dưới dạng PNG.
    #[wasm_bindgen]
    pub fn export_network_png(selector: &str, stem: &str) -> Result<(), JsValue> {
        export::export_png(selector, stem)
    }
}

#[cfg(target_arch = "wasm32")]
pub use mounts::{
    confirm_delete, export_network_png, export_network_svg, mount_medication_panel,
    mount_session_nav, mount_user_directory,
};

#[cfg(not(target_arch = "wasm32"))]
mod native_stub {
    use wasm_bindgen::JsValue;

    fn unsupported() -> JsValue {
        JsValue::from_str("carenet-ui chỉ hỗ trợ biên dịch target wasm32")
    }

    pub fn mount_user_directory(_: &str) -> Result<(), JsValue> {
        Err(unsupported())
    }

    pub fn mount_medication_panel(_: &str, _: u32) -> Result<(), JsValue> {
        Err(unsupported())
    }

    pub fn mount_session_nav(_: &str) -> Result<(), JsValue> {
        Err(unsupported())
    }

    pub fn export_network_svg(_: &str, _: &str) -> Result<(), JsValue> {
        Err(unsupported())
    }

    pub fn export_network_png(_: &str, _: &str) -> Result<(), JsValue> {
        Err(unsupported())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native_stub::{
    export_network_png, export_network_svg, mount_medication_panel, mount_session_nav,
    mount_user_directory,
};
