use carenet_core::{
    ApiRequest, CareError, PageInfo, SearchConfig, SearchState, SortDirection,
};

#[test]
fn apply_filters_resets_page_and_drops_empty_values() {
    let mut state = SearchState::default();
    state.set_page(3);

    state.apply_filters(vec![
        ("name", "Tanaka"),
        ("name_kana", "   "),
        ("min_age", "20"),
    ]);

    assert_eq!(state.page, 0);
    assert_eq!(state.filters.len(), 2);
    assert_eq!(state.filters.get("name").map(String::as_str), Some("Tanaka"));
    assert!(!state.filters.contains_key("name_kana"));
}

#[test]
fn keyword_search_replaces_filters_and_resets_page() {
    let mut state = SearchState::default();
    state.apply_filters(vec![("name", "Tanaka"), ("gender", "female")]);
    state.set_page(2);

    state.apply_keyword("  Suzuki ");

    assert_eq!(state.page, 0);
    assert_eq!(state.filters.len(), 1);
    assert_eq!(state.filters.get("search").map(String::as_str), Some("Suzuki"));

    state.apply_keyword("   ");
    assert!(state.filters.is_empty());
}

#[test]
fn toggling_active_column_flips_direction() {
    let mut state = SearchState::default();
    assert_eq!(state.sort.by, "id");
    assert_eq!(state.sort.order, SortDirection::Asc);

    state.toggle_sort("id");
    assert_eq!(state.sort.order, SortDirection::Desc);

    state.toggle_sort("id");
    assert_eq!(state.sort.order, SortDirection::Asc);
}

#[test]
fn selecting_new_column_resets_direction_to_ascending() {
    let mut state = SearchState::default();
    state.toggle_sort("id");
    assert_eq!(state.sort.order, SortDirection::Desc);

    state.set_page(4);
    state.toggle_sort("name");

    assert_eq!(state.sort.by, "name");
    assert_eq!(state.sort.order, SortDirection::Asc);
    assert_eq!(state.page, 0);
}

#[test]
fn clearing_filters_keeps_sort_spec() {
    let mut state = SearchState::default();
    state.apply_filters(vec![("name", "Tanaka")]);
    state.toggle_sort("age");
    state.toggle_sort("age");
    state.set_page(5);

    state.clear_filters();

    assert!(state.filters.is_empty());
    assert_eq!(state.page, 0);
    assert_eq!(state.sort.by, "age");
    assert_eq!(state.sort.order, SortDirection::Desc);
}

#[test]
fn page_cursor_never_goes_negative() {
    let mut state = SearchState::default();
    state.prev_page();
    assert_eq!(state.page, 0);

    state.next_page();
    state.next_page();
    state.prev_page();
    assert_eq!(state.page, 1);
}

#[test]
fn query_string_matches_reference_scenario() {
    let config = SearchConfig::default();
    let mut state = SearchState::default();
    state.apply_filters(vec![("name", "Tanaka")]);

    assert_eq!(
        state.query_string(&config),
        "skip=0&limit=20&sort_by=id&order=asc&name=Tanaka"
    );
}

#[test]
fn skip_advances_by_page_size() {
    let config = SearchConfig::default();
    let mut state = SearchState::default();
    state.set_page(2);

    let pairs = state.query_pairs(&config);
    assert_eq!(pairs[0], ("skip".to_string(), "40".to_string()));
    assert_eq!(pairs[1], ("limit".to_string(), "20".to_string()));
}

#[test]
fn query_values_are_percent_encoded() {
    let config = SearchConfig::default();
    let mut state = SearchState::default();
    state.apply_filters(vec![("name", "山田")]);

    assert!(state
        .query_string(&config)
        .ends_with("name=%E5%B1%B1%E7%94%B0"));
}

#[test]
fn full_page_enables_next_partial_page_disables_it() {
    let full = PageInfo::from_row_count(0, 20, 20);
    assert!(full.has_next);
    assert!(!full.has_prev);

    let partial = PageInfo::from_row_count(1, 19, 20);
    assert!(!partial.has_next);
    assert!(partial.has_prev);

    let empty = PageInfo::from_row_count(1, 0, 20);
    assert!(!empty.has_next);
}

#[test]
fn suggest_request_limits_result_count() {
    let config = SearchConfig::default();
    let request = ApiRequest::user_suggest(" Tanaka ", &config);
    assert_eq!(request.url(), "/api/users?search=Tanaka&limit=10");
}

#[test]
fn search_request_carries_state_query() {
    let config = SearchConfig::default();
    let mut state = SearchState::default();
    state.apply_filters(vec![("name", "Tanaka")]);
    state.toggle_sort("name");

    let request = ApiRequest::user_search(&state, &config);
    assert_eq!(
        request.url(),
        "/api/users?skip=0&limit=20&sort_by=name&order=asc&name=Tanaka"
    );
}

#[test]
fn surface_message_prefers_server_detail() {
    let with_detail = CareError::Http {
        status: 422,
        detail: Some("Tên thuốc đã tồn tại".to_string()),
    };
    assert_eq!(
        with_detail.surface_message("Lưu thất bại"),
        "Tên thuốc đã tồn tại"
    );

    let without_detail = CareError::Http {
        status: 500,
        detail: None,
    };
    assert_eq!(without_detail.surface_message("Lưu thất bại"), "Lưu thất bại");

    let network = CareError::Network("timeout".to_string());
    assert_eq!(network.surface_message("Lưu thất bại"), "Lưu thất bại");
}
