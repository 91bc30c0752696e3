#![cfg(target_arch = "wasm32")]
//! Thanh phiên làm việc: kiểm tra đăng nhập, tên nhân viên, menu quản trị
//! và nút đăng xuất. Phiên dựa hoàn toàn vào cookie của trình duyệt.

use carenet_core::{ApiRequest, StaffAccount};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::console;
use yew::events::MouseEvent;
use yew::prelude::*;

use crate::{api, notify, styles};

fn redirect_to_login() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let on_login_page = location
        .pathname()
        .map(|path| path.contains("/login"))
        .unwrap_or(false);
    if !on_login_page {
        let _ = location.set_href("/login");
    }
}

#[function_component(SessionNav)]
pub fn session_nav() -> Html {
    use_effect_with((), |_| {
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            if let Err(err) = styles::ensure_styles(&document) {
                console::error_1(&err);
            }
        }
        || ()
    });

    let staff = use_state(|| Option::<StaffAccount>::None);

    {
        let staff = staff.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api::fetch_json::<StaffAccount>(&ApiRequest::current_staff()).await {
                    Ok(account) => staff.set(Some(account)),
                    Err(err) => {
                        console::error_1(&JsValue::from_str(&err.to_string()));
                        redirect_to_login();
                    }
                }
            });
            || ()
        });
    }

    let on_logout = Callback::from(move |_: MouseEvent| {
        spawn_local(async move {
            match api::send(&ApiRequest::logout()).await {
                Ok(_) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
                    }
                }
                Err(err) => notify::surface_error(&err, "Đăng xuất thất bại"),
            }
        });
    });

    match staff.as_ref() {
        Some(account) => html! {
            <div class="care-session">
                <span class="care-session-name">{ account.name.clone() }</span>
                {
                    if account.is_admin() {
                        html! {
                            <a href="/staffs" class="care-session-admin">{"Quản lý nhân viên"}</a>
                        }
                    } else {
                        Html::default()
                    }
                }
                <button type="button" class="care-toolbar-secondary" onclick={on_logout}>
                    {"Đăng xuất"}
                </button>
            </div>
        },
        None => Html::default(),
    }
}
