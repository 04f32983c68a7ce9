use crate::tests::utils::{body_string, get, get_err, send};
use astra::Body;
use http::Method;

#[test]
fn dashboard_renders_default_range() {
    let resp = get("/");
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["Content-Type"], "text/html; charset=utf-8");

    let body = body_string(resp);
    assert!(body.contains("Рекомендации ИИ"));
    assert!(body.contains("Ключевые показатели"));
    assert!(body.contains(r#"href="/?range=30" class="segment active""#));
    assert_eq!(body.matches("График появится здесь").count(), 3);
    assert!(body.contains(r#"class="nav-item active" aria-current="page">Дашборд"#));
}

#[test]
fn dashboard_range_switches_and_validates() {
    let body = body_string(get("/?range=7"));
    assert!(body.contains(r#"href="/?range=7" class="segment active""#));
    assert!(body.contains(r#"href="/?range=30" class="segment""#));

    assert_eq!(get_err("/?range=365").status(), 400);
}

#[test]
fn unknown_paths_redirect_home() {
    for path in ["/finance", "/nope", "/leads-catalog/lead-1"] {
        let resp = get(path);
        assert_eq!(resp.status(), 302, "{path}");
        assert_eq!(resp.headers()["Location"], "/");
    }
}

#[test]
fn non_get_methods_are_not_found() {
    let err = send(Method::DELETE, "/", Body::empty()).err().expect("expected an error");
    assert_eq!(err.status(), 404);

    let err = send(Method::PUT, "/deals", Body::empty()).err().expect("expected an error");
    assert_eq!(err.status(), 404);
}

#[test]
fn stylesheet_is_served() {
    let resp = get("/static/main.css");
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["Content-Type"], "text/css; charset=utf-8");
    assert!(body_string(resp).contains(".lead-card"));
}

#[test]
fn error_page_carries_status() {
    let err = get_err("/leads-catalog/missing/contacts");
    let resp = crate::templates::html_error_response(err);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Страница не найдена"));
}
