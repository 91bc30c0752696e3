#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-care-ui]";

/// CSS mặc định của bộ thành phần, biến màu đặt ở gốc để trang chủ dễ ghi đè.
pub const DEFAULT_STYLES: &str = r#"
:root {
  --care-font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --care-bg: #ffffff;
  --care-border: rgba(148, 163, 184, 0.35);
  --care-radius: 10px;
  --care-text: #1f2933;
  --care-muted: #52606d;
  --care-heading: #11181c;
  --care-surface: #f8fafc;
  --care-primary: #0d6efd;
  --care-primary-soft: rgba(13, 110, 253, 0.08);
  --care-danger: #dc3545;
  --care-danger-soft: rgba(220, 53, 69, 0.1);
  --care-success: #198754;
  --care-success-soft: rgba(25, 135, 84, 0.12);
  --care-info: #0dcaf0;
  --care-info-soft: rgba(13, 202, 240, 0.12);
  --care-warning-soft: rgba(255, 193, 7, 0.16);
}

.care-directory,
.care-meds,
.care-session,
.care-modal {
  font-family: var(--care-font-family);
  color: var(--care-text);
}

.care-toolbar {
  display: flex;
  flex-direction: column;
  gap: 12px;
  margin-bottom: 16px;
}

.care-search-simple {
  display: flex;
  gap: 8px;
  align-items: flex-start;
}

.care-search-simple input[type="search"] {
  width: 320px;
  padding: 8px 12px;
  border: 1px solid var(--care-border);
  border-radius: var(--care-radius);
  font-size: 0.95rem;
}

.care-directory button,
.care-meds button,
.care-modal button,
.care-session button {
  padding: 8px 14px;
  border: 1px solid transparent;
  border-radius: var(--care-radius);
  background: var(--care-primary);
  color: #ffffff;
  font-size: 0.9rem;
  cursor: pointer;
}

.care-directory button:disabled {
  opacity: 0.45;
  cursor: default;
}

button.care-toolbar-secondary {
  background: var(--care-surface);
  border-color: var(--care-border);
  color: var(--care-text);
}

button.care-primary {
  background: var(--care-primary);
}

.care-suggest-anchor {
  position: relative;
  display: inline-block;
}

.care-suggest-panel {
  position: absolute;
  top: calc(100% + 5px);
  left: 0;
  width: 100%;
  background: var(--care-bg);
  border: 1px solid var(--care-border);
  border-radius: var(--care-radius);
  box-shadow: 0 14px 32px rgba(15, 23, 42, 0.14);
  z-index: 40;
  overflow: hidden;
}

.care-suggest-item {
  display: flex;
  justify-content: space-between;
  align-items: center;
  gap: 12px;
  padding: 10px 14px;
  cursor: pointer;
}

.care-suggest-item:hover {
  background: var(--care-primary-soft);
}

.care-suggest-item + .care-suggest-item {
  border-top: 1px solid var(--care-border);
}

.care-suggest-name strong {
  font-size: 1rem;
  color: var(--care-heading);
}

.care-suggest-name small,
.care-suggest-meta small,
.care-muted {
  color: var(--care-muted);
}

.care-suggest-meta {
  display: flex;
  flex-direction: column;
  align-items: flex-end;
}

.care-suggest-empty {
  padding: 10px 14px;
  color: var(--care-muted);
}

.care-search-advanced {
  background: var(--care-surface);
  border: 1px solid var(--care-border);
  border-radius: var(--care-radius);
  padding: 14px;
}

.care-field-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
  gap: 12px;
}

.care-field {
  display: flex;
  flex-direction: column;
  gap: 4px;
  font-size: 0.85rem;
}

.care-field span {
  color: var(--care-muted);
  font-weight: 600;
}

.care-field input,
.care-field select,
.care-field textarea {
  padding: 7px 10px;
  border: 1px solid var(--care-border);
  border-radius: calc(var(--care-radius) - 4px);
  font-size: 0.9rem;
  font-family: inherit;
}

.care-field-wide {
  grid-column: 1 / -1;
}

.care-field-inline {
  display: flex;
  gap: 8px;
}

.care-field-inline input {
  flex: 1;
}

.care-required {
  color: var(--care-danger);
  font-style: normal;
}

.care-form-actions {
  display: flex;
  gap: 8px;
  margin-top: 12px;
}

.care-table {
  width: 100%;
  border-collapse: collapse;
  background: var(--care-bg);
}

.care-table th,
.care-table td {
  padding: 9px 12px;
  border-bottom: 1px solid var(--care-border);
  text-align: left;
  font-size: 0.92rem;
}

.care-table thead th {
  background: var(--care-surface);
  color: var(--care-muted);
  font-size: 0.82rem;
  text-transform: none;
}

.care-table-empty {
  text-align: center;
  color: var(--care-muted);
  padding: 22px 0;
}

button.care-sort {
  background: none;
  border: none;
  color: var(--care-muted);
  font-weight: 600;
  padding: 0;
  display: inline-flex;
  gap: 6px;
  align-items: center;
}

button.care-sort.is-active {
  color: var(--care-primary);
}

.care-sort-icon {
  font-size: 0.8rem;
}

.care-user-link {
  color: var(--care-primary);
  text-decoration: none;
}

.care-user-link:hover {
  text-decoration: underline;
}

a.care-row-action,
button.care-row-action {
  background: none;
  border: 1px solid var(--care-primary);
  color: var(--care-primary);
  border-radius: calc(var(--care-radius) - 4px);
  padding: 3px 10px;
  font-size: 0.82rem;
  text-decoration: none;
}

.care-pagination {
  display: flex;
  justify-content: center;
  align-items: center;
  gap: 12px;
  margin-top: 16px;
}

.care-page-current {
  min-width: 32px;
  text-align: center;
  font-weight: 700;
  color: var(--care-heading);
}

.care-meds-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 10px;
}

.care-badge {
  display: inline-block;
  padding: 2px 10px;
  border-radius: 999px;
  font-size: 0.78rem;
  background: var(--care-surface);
  color: var(--care-muted);
}

.care-badge[data-state="active"] {
  background: var(--care-success-soft);
  color: var(--care-success);
}

.care-badge[data-state="stopped"] {
  background: var(--care-danger-soft);
  color: var(--care-danger);
}

.care-modal {
  position: fixed;
  inset: 0;
  background: rgba(15, 23, 42, 0.45);
  display: flex;
  align-items: flex-start;
  justify-content: center;
  padding: 40px 16px;
  z-index: 50;
}

.care-modal-dialog {
  background: var(--care-bg);
  border-radius: var(--care-radius);
  width: min(480px, 100%);
  box-shadow: 0 24px 48px rgba(15, 23, 42, 0.22);
  display: flex;
  flex-direction: column;
  max-height: calc(100vh - 80px);
}

.care-modal-lg {
  width: min(760px, 100%);
}

.care-modal-scroll .care-modal-body {
  overflow-y: auto;
}

.care-modal-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 12px 16px;
  border-radius: var(--care-radius) var(--care-radius) 0 0;
  color: #ffffff;
}

.care-modal-header h4 {
  margin: 0;
  font-size: 1.02rem;
}

.care-modal-header[data-tone="danger"] {
  background: var(--care-danger);
}

.care-modal-header[data-tone="primary"] {
  background: var(--care-primary);
}

.care-modal-header[data-tone="info"] {
  background: var(--care-info);
  color: var(--care-heading);
}

button.care-modal-close {
  background: none;
  border: none;
  color: inherit;
  font-size: 1.3rem;
  line-height: 1;
  padding: 0 4px;
}

.care-modal-body {
  padding: 16px;
  overflow-y: auto;
}

.care-modal-body form {
  display: flex;
  flex-direction: column;
  gap: 12px;
}

.care-modal-footer {
  display: flex;
  justify-content: flex-end;
  gap: 8px;
  padding: 12px 16px;
  border-top: 1px solid var(--care-border);
}

.care-disclaimer {
  background: var(--care-info-soft);
  border-radius: calc(var(--care-radius) - 4px);
  padding: 10px 12px;
  font-size: 0.85rem;
}

.care-drug-card {
  border: 1px solid var(--care-border);
  border-radius: var(--care-radius);
  margin-bottom: 12px;
  overflow: hidden;
}

.care-drug-card.is-best {
  border-color: var(--care-primary);
}

.care-drug-card header {
  display: flex;
  gap: 8px;
  align-items: center;
  padding: 10px 12px;
  background: var(--care-surface);
}

.care-drug-card.is-best header {
  background: var(--care-primary-soft);
}

.care-drug-section {
  padding: 8px 12px;
  font-size: 0.88rem;
}

.care-drug-section p {
  margin: 4px 0 0;
}

.care-drug-warning {
  margin: 8px 12px;
  padding: 10px 12px;
  background: var(--care-warning-soft);
  border-radius: calc(var(--care-radius) - 4px);
  font-size: 0.88rem;
}

.care-drug-card footer {
  padding: 8px 12px;
  font-size: 0.78rem;
  text-align: right;
}

.care-session {
  display: flex;
  align-items: center;
  gap: 12px;
}

.care-session-name {
  font-weight: 700;
  color: var(--care-heading);
}

.care-session-admin {
  color: var(--care-primary);
  text-decoration: none;
  font-size: 0.9rem;
}

.care-notice {
  position: fixed;
  top: 16px;
  left: 50%;
  transform: translateX(-50%);
  display: flex;
  align-items: center;
  gap: 10px;
  padding: 10px 14px;
  border-radius: var(--care-radius);
  box-shadow: 0 14px 32px rgba(15, 23, 42, 0.18);
  font-family: var(--care-font-family);
  font-size: 0.92rem;
  z-index: 99;
  background: var(--care-surface);
}

.care-notice[data-level="success"] {
  background: var(--care-success-soft);
  color: var(--care-success);
}

.care-notice[data-level="error"] {
  background: var(--care-danger-soft);
  color: var(--care-danger);
}

.care-notice[data-level="info"] {
  background: var(--care-info-soft);
  color: var(--care-heading);
}

button.care-notice-close {
  background: none;
  border: none;
  color: inherit;
  font-size: 1.1rem;
  line-height: 1;
  cursor: pointer;
  padding: 0;
}

@media (max-width: 640px) {
  .care-search-simple {
    flex-direction: column;
    align-items: stretch;
  }

  .care-search-simple input[type="search"] {
    width: 100%;
  }

  .care-suggest-anchor {
    display: block;
  }

  .care-field-grid {
    grid-template-columns: 1fr;
  }

  .care-modal {
    padding: 16px 8px;
  }
}
"#;

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("Document không có thẻ <head>"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-care-ui", "v1")?;
    style_el.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style_el.clone().dyn_into::<Node>()?)?;

    Ok(())
}
