#![cfg(target_arch = "wasm32")]
//! Trang danh bạ người sử dụng dịch vụ: tìm kiếm, sắp xếp, phân trang
//! và gợi ý nhanh khi gõ.

use std::collections::BTreeMap;

use carenet_core::{ApiRequest, PageInfo, SearchConfig, SearchState, SortDirection, UserSummary};
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{console, HtmlInputElement, HtmlSelectElement};
use yew::events::{Event, FocusEvent, InputEvent, MouseEvent, SubmitEvent};
use yew::prelude::*;
use yew::TargetCast;

use crate::{api, notify, styles};

#[derive(Clone, Default, PartialEq)]
struct SuggestState {
    items: Vec<UserSummary>,
    visible: bool,
}

/// Một lần tải danh sách; mọi thao tác đổi bộ lọc/sắp xếp/trang đều đi qua đây.
/// Request đang bay không bị hủy khi có request mới — trả lời về trễ có thể
/// đè kết quả mới hơn, hành vi được giữ nguyên từ thiết kế gốc.
fn load_users(state: SearchState, rows: UseStateHandle<Vec<UserSummary>>) {
    let config = SearchConfig::default();
    spawn_local(async move {
        match api::fetch_json::<Vec<UserSummary>>(&ApiRequest::user_search(&state, &config)).await {
            Ok(users) => rows.set(users),
            Err(err) => {
                notify::surface_error(&err, "Không tải được danh sách người sử dụng dịch vụ")
            }
        }
    });
}

fn scroll_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[function_component(UserDirectory)]
pub fn user_directory() -> Html {
    use_effect_with((), |_| {
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            if let Err(err) = styles::ensure_styles(&document) {
                console::error_1(&err);
            }
        }
        || ()
    });

    let config = SearchConfig::default();
    let search = use_state(SearchState::default);
    let rows = use_state(Vec::<UserSummary>::new);
    let keyword = use_state(String::new);
    let draft = use_state(BTreeMap::<String, String>::new);
    let advanced_open = use_state(|| false);
    let suggest = use_state(SuggestState::default);
    let debounce = use_mut_ref(|| Option::<Timeout>::None);

    {
        let search = search.clone();
        let rows = rows.clone();
        use_effect_with((), move |_| {
            load_users((*search).clone(), rows);
            || ()
        });
    }

    let on_keyword_input = {
        let keyword = keyword.clone();
        let suggest = suggest.clone();
        let debounce = debounce.clone();
        let config = config.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let value = input.value();
            keyword.set(value.clone());

            if let Some(pending) = debounce.borrow_mut().take() {
                pending.cancel();
            }

            let trimmed = value.trim().to_string();
            if trimmed.is_empty() {
                let mut next = (*suggest).clone();
                next.visible = false;
                suggest.set(next);
                return;
            }

            let suggest = suggest.clone();
            let config = config.clone();
            let timeout = Timeout::new(config.suggest_debounce_ms, move || {
                spawn_local(async move {
                    match api::fetch_json::<Vec<UserSummary>>(&ApiRequest::user_suggest(
                        &trimmed, &config,
                    ))
                    .await
                    {
                        Ok(items) => suggest.set(SuggestState {
                            items,
                            visible: true,
                        }),
                        Err(err) => {
                            console::error_1(&wasm_bindgen::JsValue::from_str(&err.to_string()));
                            suggest.set(SuggestState::default());
                        }
                    }
                });
            });
            *debounce.borrow_mut() = Some(timeout);
        })
    };

    // Ẩn trễ để cú bấm chuột trên gợi ý kịp chạy trước khi bảng biến mất.
    let on_keyword_blur = {
        let suggest = suggest.clone();
        let config = config.clone();
        Callback::from(move |_: FocusEvent| {
            let suggest = suggest.clone();
            Timeout::new(config.suggest_hide_delay_ms, move || {
                let mut next = (*suggest).clone();
                next.visible = false;
                suggest.set(next);
            })
            .forget();
        })
    };

    let on_keyword_focus = {
        let suggest = suggest.clone();
        let keyword = keyword.clone();
        Callback::from(move |_: FocusEvent| {
            if !keyword.trim().is_empty() && !suggest.items.is_empty() {
                let mut next = (*suggest).clone();
                next.visible = true;
                suggest.set(next);
            }
        })
    };

    let on_simple_submit = {
        let search = search.clone();
        let rows = rows.clone();
        let keyword = keyword.clone();
        let suggest = suggest.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut next = (*search).clone();
            next.apply_keyword(&keyword);
            search.set(next.clone());
            suggest.set(SuggestState::default());
            load_users(next, rows.clone());
        })
    };

    let on_advanced_submit = {
        let search = search.clone();
        let rows = rows.clone();
        let draft = draft.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut next = (*search).clone();
            next.apply_filters(draft.iter().map(|(key, value)| (key.clone(), value.clone())));
            search.set(next.clone());
            load_users(next, rows.clone());
        })
    };

    let on_clear = {
        let search = search.clone();
        let rows = rows.clone();
        let keyword = keyword.clone();
        let draft = draft.clone();
        let suggest = suggest.clone();
        Callback::from(move |_| {
            keyword.set(String::new());
            draft.set(BTreeMap::new());
            suggest.set(SuggestState::default());
            let mut next = (*search).clone();
            next.clear_filters();
            search.set(next.clone());
            load_users(next, rows.clone());
        })
    };

    let on_toggle_advanced = {
        let advanced_open = advanced_open.clone();
        Callback::from(move |_| {
            advanced_open.set(!*advanced_open);
        })
    };

    let page_info = PageInfo::from_row_count((*search).page, rows.len(), config.page_size);

    html! {
        <div class="care-directory">
            <header class="care-toolbar">
                <form class="care-search-simple" onsubmit={on_simple_submit}>
                    <div class="care-suggest-anchor">
                        <input
                            type="search"
                            name="search"
                            placeholder="Tìm theo họ tên hoặc phiên âm"
                            value={(*keyword).clone()}
                            oninput={on_keyword_input}
                            onblur={on_keyword_blur}
                            onfocus={on_keyword_focus}
                            aria-label="Tìm kiếm người sử dụng dịch vụ"
                        />
                        { render_suggestions(&suggest) }
                    </div>
                    <button type="submit">{"Tìm kiếm"}</button>
                    <button type="button" class="care-toolbar-secondary" onclick={on_toggle_advanced}>
                        { if *advanced_open { "Thu gọn bộ lọc" } else { "Tìm kiếm nâng cao" } }
                    </button>
                </form>
                {
                    if *advanced_open {
                        render_advanced_form(draft.clone(), on_advanced_submit, on_clear.clone())
                    } else {
                        Html::default()
                    }
                }
            </header>
            <table class="care-table">
                <thead>
                    <tr>
                        { render_sort_header("ID", "id", search.clone(), rows.clone()) }
                        { render_sort_header("Họ tên", "name", search.clone(), rows.clone()) }
                        <th>{"Phiên âm"}</th>
                        { render_sort_header("Tuổi", "age", search.clone(), rows.clone()) }
                        <th>{"Mức hỗ trợ"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {
                        if rows.is_empty() {
                            html! {
                                <tr>
                                    <td colspan="6" class="care-table-empty">
                                        {"Không tìm thấy người sử dụng dịch vụ phù hợp."}
                                    </td>
                                </tr>
                            }
                        } else {
                            html! { for rows.iter().map(render_user_row) }
                        }
                    }
                </tbody>
            </table>
            { render_pagination(page_info, search.clone(), rows.clone()) }
        </div>
    }
}

fn render_advanced_form(
    draft: UseStateHandle<BTreeMap<String, String>>,
    onsubmit: Callback<SubmitEvent>,
    onclear: Callback<MouseEvent>,
) -> Html {
    let text_field = |label: &str, name: &'static str, kind: &'static str| -> Html {
        let draft = draft.clone();
        let oninput = Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut next = (*draft).clone();
            next.insert(name.to_string(), input.value());
            draft.set(next);
        });
        html! {
            <label class="care-field">
                <span>{ label.to_string() }</span>
                <input type={kind} name={name} value={draft_value(&draft, name)} oninput={oninput} />
            </label>
        }
    };

    let level_select = {
        let draft = draft.clone();
        let onchange = Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            let mut next = (*draft).clone();
            next.insert("disability_support_level".to_string(), select.value());
            draft.set(next);
        });
        let current = draft_value(&draft, "disability_support_level");
        html! {
            <label class="care-field">
                <span>{"Mức hỗ trợ"}</span>
                <select name="disability_support_level" onchange={onchange}>
                    <option value="" selected={current.is_empty()}>{"Tất cả"}</option>
                    {
                        for (1..=6).map(|level| {
                            let value = level.to_string();
                            html! {
                                <option value={value.clone()} selected={current == value}>
                                    { format!("Mức {level}") }
                                </option>
                            }
                        })
                    }
                </select>
            </label>
        }
    };

    html! {
        <form class="care-search-advanced" onsubmit={onsubmit}>
            <div class="care-field-grid">
                { text_field("Họ tên", "name", "text") }
                { text_field("Phiên âm", "name_kana", "text") }
                { text_field("Tuổi từ", "min_age", "number") }
                { text_field("Tuổi đến", "max_age", "number") }
                { level_select }
                { text_field("Giới tính", "gender", "text") }
            </div>
            <div class="care-form-actions">
                <button type="submit">{"Áp dụng bộ lọc"}</button>
                <button type="button" class="care-toolbar-secondary" onclick={onclear}>
                    {"Xóa điều kiện"}
                </button>
            </div>
        </form>
    }
}

fn draft_value(draft: &UseStateHandle<BTreeMap<String, String>>, name: &str) -> String {
    draft.get(name).cloned().unwrap_or_default()
}

fn render_sort_header(
    label: &str,
    column: &'static str,
    search: UseStateHandle<SearchState>,
    rows: UseStateHandle<Vec<UserSummary>>,
) -> Html {
    let indicator = if search.sort.by == column {
        match search.sort.order {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    } else {
        "↕"
    };
    let is_active = search.sort.by == column;
    let onclick = {
        let search = search.clone();
        Callback::from(move |_| {
            let mut next = (*search).clone();
            next.toggle_sort(column);
            search.set(next.clone());
            load_users(next, rows.clone());
        })
    };

    html! {
        <th>
            <button
                type="button"
                class={classes!("care-sort", is_active.then_some("is-active"))}
                onclick={onclick}
            >
                { label.to_string() }
                <span class="care-sort-icon">{ indicator }</span>
            </button>
        </th>
    }
}

fn render_user_row(user: &UserSummary) -> Html {
    let detail_href = format!("/users/{}", user.id);
    html! {
        <tr>
            <td>{ user.id }</td>
            <td>
                <a href={detail_href.clone()} class="care-user-link">{ user.name.clone() }</a>
            </td>
            <td>{ user.name_kana.clone().unwrap_or_else(|| "-".to_string()) }</td>
            <td>
                {
                    user.age
                        .map(|age| format!("{age} tuổi"))
                        .unwrap_or_else(|| "-".to_string())
                }
            </td>
            <td>
                {
                    user.disability_support_level
                        .map(|level| format!("Mức {level}"))
                        .unwrap_or_else(|| "-".to_string())
                }
            </td>
            <td>
                <a href={detail_href} class="care-row-action">{"Chi tiết"}</a>
            </td>
        </tr>
    }
}

fn render_suggestions(suggest: &UseStateHandle<SuggestState>) -> Html {
    if !suggest.visible {
        return Html::default();
    }

    html! {
        <div class="care-suggest-panel" role="listbox">
            {
                if suggest.items.is_empty() {
                    html! { <div class="care-suggest-empty">{"Không tìm thấy người phù hợp."}</div> }
                } else {
                    html! { for suggest.items.iter().map(render_suggestion) }
                }
            }
        </div>
    }
}

fn render_suggestion(user: &UserSummary) -> Html {
    let href = format!("/users/{}", user.id);
    // Dùng mousedown thay vì click để đi trước bộ đếm ẩn bảng khi blur.
    let onmousedown = Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&href);
        }
    });

    html! {
        <div class="care-suggest-item" role="option" onmousedown={onmousedown}>
            <div class="care-suggest-name">
                <strong>{ user.name.clone() }</strong>
                {
                    user.name_kana
                        .as_ref()
                        .map(|kana| html! { <small>{ format!("（{kana}）") }</small> })
                        .unwrap_or_default()
                }
            </div>
            <div class="care-suggest-meta">
                <small>
                    {
                        user.age
                            .map(|age| format!("Tuổi: {age}"))
                            .unwrap_or_else(|| "Tuổi: không rõ".to_string())
                    }
                </small>
                {
                    user.disability_support_level
                        .map(|level| html! { <small>{ format!("Mức {level}") }</small> })
                        .unwrap_or_default()
                }
            </div>
        </div>
    }
}

fn render_pagination(
    info: PageInfo,
    search: UseStateHandle<SearchState>,
    rows: UseStateHandle<Vec<UserSummary>>,
) -> Html {
    let on_prev = {
        let search = search.clone();
        let rows = rows.clone();
        Callback::from(move |_| {
            let mut next = (*search).clone();
            next.prev_page();
            search.set(next.clone());
            load_users(next, rows.clone());
            scroll_top();
        })
    };
    let on_next = {
        let search = search.clone();
        Callback::from(move |_| {
            let mut next = (*search).clone();
            next.next_page();
            search.set(next.clone());
            load_users(next, rows.clone());
            scroll_top();
        })
    };

    html! {
        <nav class="care-pagination" aria-label="Phân trang kết quả">
            <button type="button" disabled={!info.has_prev} onclick={on_prev}>
                {"← Trang trước"}
            </button>
            <span class="care-page-current">{ info.page + 1 }</span>
            <button type="button" disabled={!info.has_next} onclick={on_next}>
                {"Trang sau →"}
            </button>
        </nav>
    }
}
