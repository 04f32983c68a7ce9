use crate::tests::utils::{body_string, get, get_err, lead_ids_in_order, send};
use astra::Body;
use http::Method;

#[test]
fn catalog_lists_every_lead_on_first_page() {
    let resp = get("/leads-catalog");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert_eq!(
        lead_ids_in_order(&body),
        ["lead-1", "lead-2", "lead-3", "lead-4", "lead-5", "lead-6"]
    );
    assert!(body.contains("Каталог лидов"));
    assert!(body.contains("Найдено 1\u{a0}234 лида"));
    assert!(body.contains("Отфильтровано: 6 результатов"));
    assert!(body.contains("Показано 1–6 из 6 результатов"));
    assert!(body.contains("Москва · Продажа · Квартира"));
    assert!(body.contains("Бюджет: 80-100k ₽ в мес."));
}

#[test]
fn city_filter_keeps_moscow_leads() {
    let body = body_string(get("/leads-catalog?city=moscow"));

    assert_eq!(lead_ids_in_order(&body), ["lead-1", "lead-3", "lead-6"]);
    assert!(body.contains("Отфильтровано: 3 результатов"));
    assert!(body.contains("Показано 1–3 из 3 результатов"));
    // The advertised counter ignores filtering.
    assert!(body.contains("Найдено 1\u{a0}234 лида"));
}

#[test]
fn four_plus_band_admits_bands_and_large_counts() {
    let body = body_string(get("/leads-catalog?rooms=4%2B"));
    assert_eq!(lead_ids_in_order(&body), ["lead-2", "lead-5", "lead-6"]);
}

#[test]
fn budget_bound_drops_leads_without_budget() {
    let body = body_string(get("/leads-catalog?budgetFrom=30000000"));
    assert_eq!(lead_ids_in_order(&body), ["lead-6"]);
}

#[test]
fn zero_budget_bounds_keep_every_lead() {
    for uri in [
        "/leads-catalog?budgetFrom=0",
        "/leads-catalog?budgetTo=0",
        "/leads-catalog?budgetFrom=0&budgetTo=0",
    ] {
        let body = body_string(get(uri));
        assert_eq!(lead_ids_in_order(&body).len(), 6, "{uri}");
        assert!(body.contains("Отфильтровано: 6 результатов"), "{uri}");
    }
}

#[test]
fn exclusive_and_deal_type_filters_combine() {
    let body = body_string(get("/leads-catalog?exclusive=on"));
    assert_eq!(lead_ids_in_order(&body), ["lead-1", "lead-4"]);

    let body = body_string(get("/leads-catalog?dealType=rent&sort=budget-asc"));
    assert_eq!(lead_ids_in_order(&body), ["lead-2", "lead-5"]);
}

#[test]
fn match_sort_orders_by_score() {
    let body = body_string(get("/leads-catalog?sort=match-desc"));
    assert_eq!(
        lead_ids_in_order(&body),
        ["lead-1", "lead-6", "lead-4", "lead-2", "lead-5", "lead-3"]
    );
    assert!(body.contains(r#"<option value="match-desc" selected>По совпадению</option>"#));
}

#[test]
fn page_past_the_end_shows_empty_state() {
    let body = body_string(get("/leads-catalog?page=2"));

    assert!(lead_ids_in_order(&body).is_empty());
    assert!(body.contains("Нет лидов, удовлетворяющих текущим фильтрам."));
    assert!(body.contains("Показано 0 из 6 результатов"));
}

#[test]
fn no_matches_shows_empty_state() {
    let body = body_string(get("/leads-catalog?city=kazan&dealType=rent"));

    assert!(body.contains("Нет лидов, удовлетворяющих текущим фильтрам."));
    assert!(body.contains("Отфильтровано: 0 результатов"));
}

#[test]
fn grid_view_only_changes_layout() {
    let list = body_string(get("/leads-catalog?city=moscow"));
    let grid = body_string(get("/leads-catalog?city=moscow&view=grid"));

    assert!(grid.contains(r#"class="lead-grid""#));
    assert!(list.contains(r#"class="lead-list""#));
    assert_eq!(lead_ids_in_order(&list), lead_ids_in_order(&grid));
}

#[test]
fn filter_panel_reflects_query() {
    let body = body_string(get("/leads-catalog?city=moscow&rooms=2&sort=budget-desc"));

    assert!(body.contains(r#"<option value="moscow" selected>Москва</option>"#));
    assert!(body.contains(r#"input type="radio" name="rooms" value="2" checked"#));
    // Reset keeps sort but drops the filter.
    assert!(body.contains(r#"href="/leads-catalog?sort=budget-desc""#));
}

#[test]
fn malformed_parameters_are_bad_requests() {
    assert_eq!(get_err("/leads-catalog?sort=cheapest").status(), 400);
    assert_eq!(get_err("/leads-catalog?budgetTo=many").status(), 400);
    assert_eq!(get_err("/leads-catalog?rooms=7").status(), 400);
    assert_eq!(get_err("/api/leads?view=tiles").status(), 400);
}

#[test]
fn contacts_partial_masks_details() {
    let resp = get("/leads-catalog/lead-1/contacts");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Иван П."));
    assert!(body.contains("+7 9•• ••• •• 12"));
    assert!(body.contains("i•••@mail.ru"));
    assert!(body.contains("Бюджет: 15\u{a0}000\u{a0}000–20\u{a0}000\u{a0}000 ₽"));
    assert!(!body.contains("<html"));
}

#[test]
fn contacts_for_unknown_lead_is_not_found() {
    assert_eq!(get_err("/leads-catalog/lead-99/contacts").status(), 404);
}

#[test]
fn export_returns_workbook_of_filtered_leads() {
    let resp = get("/leads-catalog/export?city=moscow&page=2");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["Content-Type"],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert_eq!(
        resp.headers()["Content-Disposition"],
        "attachment; filename=\"leads.xlsx\""
    );

    let mut bytes = Vec::new();
    std::io::Read::read_to_end(&mut resp.into_body().reader(), &mut bytes).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn api_returns_current_page_as_json() {
    let resp = get("/api/leads?city=moscow&sort=match-desc");
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["Content-Type"], "application/json");

    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["sort"], "match-desc");
    assert_eq!(json["criteria"]["city"], "moscow");
    assert_eq!(json["page"]["total"], 3);
    assert_eq!(json["page"]["start"], 1);
    assert_eq!(json["page"]["end"], 3);

    let ids: Vec<&str> = json["page"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["lead-1", "lead-6", "lead-3"]);
}

#[test]
fn catalog_rejects_other_methods() {
    let err = send(Method::POST, "/leads-catalog", Body::empty()).err().expect("expected an error");
    assert_eq!(err.status(), 404);
}
