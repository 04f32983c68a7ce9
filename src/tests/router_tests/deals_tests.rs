use crate::tests::utils::{body_string, get, get_err};

#[test]
fn incoming_tab_is_default() {
    let body = body_string(get("/deals"));

    assert!(body.contains("Предложения о сотрудничестве"));
    assert_eq!(body.matches(r#"class="proposal-card""#).count(), 3);
    assert!(body.contains(r#"href="/deals?tab=incoming" class="segment active""#));
    assert!(body.contains("Отказать"));
    assert!(body.contains("Согласиться"));
}

#[test]
fn outgoing_tab_shows_sent_proposals() {
    let body = body_string(get("/deals?tab=outgoing"));

    assert_eq!(body.matches(r#"class="proposal-card""#).count(), 1);
    assert!(body.contains("proposal-4"));
}

#[test]
fn unknown_tab_is_bad_request() {
    assert_eq!(get_err("/deals?tab=archived").status(), 400);
}
