//! Bridge WASM <-> JavaScript trung lập framework: trang chủ đưa JSON vào,
//! nhận lại chuỗi truy vấn hoặc cấu hình vẽ đã dựng sẵn.

use serde::Deserialize;
use serde_wasm_bindgen::{from_value, to_value};
use carenet_core::{DashboardStats, NetworkData, SearchConfig, SearchState};
use carenet_viz::{dashboard_charts, GraphSpec};
use wasm_bindgen::prelude::*;

#[derive(Deserialize)]
struct JsSearchConfig {
    #[serde(default)]
    page_size: Option<usize>,
    #[serde(default)]
    suggest_limit: Option<usize>,
    #[serde(default)]
    suggest_debounce_ms: Option<u32>,
    #[serde(default)]
    suggest_hide_delay_ms: Option<u32>,
    #[serde(default)]
    redirect_delay_ms: Option<u32>,
}

impl From<JsSearchConfig> for SearchConfig {
    fn from(cfg: JsSearchConfig) -> Self {
        let mut base = SearchConfig::default();
        if let Some(page_size) = cfg.page_size {
            base.page_size = page_size;
        }
        if let Some(limit) = cfg.suggest_limit {
            base.suggest_limit = limit;
        }
        if let Some(debounce) = cfg.suggest_debounce_ms {
            base.suggest_debounce_ms = debounce;
        }
        if let Some(hide_delay) = cfg.suggest_hide_delay_ms {
            base.suggest_hide_delay_ms = hide_delay;
        }
        if let Some(redirect_delay) = cfg.redirect_delay_ms {
            base.redirect_delay_ms = redirect_delay;
        }
        base
    }
}

fn resolve_config(config: Option<JsValue>) -> Result<SearchConfig, JsValue> {
    match config {
        Some(js_cfg) => {
            let cfg: JsSearchConfig = from_value(js_cfg)
                .map_err(|err| JsValue::from_str(&format!("Không đọc được config: {err}")))?;
            Ok(SearchConfig::from(cfg))
        }
        None => Ok(SearchConfig::default()),
    }
}

/// Dựng chuỗi truy vấn `/api/users` từ trạng thái tìm kiếm do trang chủ giữ.
#[wasm_bindgen]
pub fn compose_user_query(state: JsValue, config: Option<JsValue>) -> Result<String, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let state: SearchState = from_value(state)
        .map_err(|err| JsValue::from_str(&format!("Không đọc được trạng thái tìm kiếm: {err}")))?;
    let cfg = resolve_config(config)?;

    Ok(state.query_string(&cfg))
}

/// Dựng bốn cấu hình biểu đồ bảng điều khiển từ số liệu tổng hợp.
#[wasm_bindgen]
pub fn build_dashboard_charts(stats: JsValue) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let stats: DashboardStats = from_value(stats)
        .map_err(|err| JsValue::from_str(&format!("Không đọc được số liệu tổng hợp: {err}")))?;

    to_value(&dashboard_charts(&stats))
        .map_err(|err| JsValue::from_str(&format!("Không serialize được biểu đồ: {err}")))
}

/// Chuyển dữ liệu mạng lưới thô thành chỉ dẫn vẽ cho thư viện bố cục lực.
#[wasm_bindgen]
pub fn build_network_graph(data: JsValue) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let network: NetworkData = from_value(data)
        .map_err(|err| JsValue::from_str(&format!("Không đọc được dữ liệu mạng lưới: {err}")))?;

    to_value(&GraphSpec::from_network(&network))
        .map_err(|err| JsValue::from_str(&format!("Không serialize được sơ đồ: {err}")))
}
