use crate::domain::object_form::{MSG_INVALID, MSG_PUBLISHED, MSG_SAVED_DRAFT};
use crate::tests::utils::{body_string, get, get_err, post_form};
use url::form_urlencoded;

fn valid_form(publish: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("title", "Студия у метро")
        .append_pair("city", "Москва")
        .append_pair("address", "ул. Тверская, д. 10")
        .append_pair("price", "9 900 000")
        .append_pair("area", "28,5")
        .append_pair("floor", "3")
        .append_pair("floorsTotal", "9")
        .append_pair("rooms", "1")
        .append_pair("propertyType", "flat")
        .append_pair("dealType", "sale")
        .append_pair("description", "Светлая студия с ремонтом.")
        .append_pair("tags", "urgent")
        .append_pair("tags", "verified")
        .append_pair("buildingType", "secondary")
        .append_pair("publish", publish)
        .finish()
}

#[test]
fn objects_table_lists_all_listings() {
    let resp = get("/my-objects");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert_eq!(body.matches("<tr id=").count(), 4);
    assert!(body.contains("Активен"));
    assert!(body.contains("Скрыт"));
    assert!(body.contains("15.08.2023"));
    assert!(body.contains("Создать новый объект"));
}

#[test]
fn objects_search_is_case_insensitive() {
    let body = body_string(get("/my-objects?q=%D0%9B%D0%95%D0%9D%D0%98%D0%9D%D0%90"));
    assert_eq!(body.matches("<tr id=").count(), 1);
    assert!(body.contains("ул. Ленина"));

    let body = body_string(get("/my-objects?q=zzz"));
    assert!(body.contains("Объекты не найдены"));
}

#[test]
fn objects_grid_view_and_bad_view() {
    let body = body_string(get("/my-objects?view=grid"));
    assert!(body.contains(r#"class="objects-grid""#));
    assert_eq!(get_err("/my-objects?view=tiles").status(), 400);
}

#[test]
fn new_object_form_is_prefilled() {
    let body = body_string(get("/my-objects/new"));
    assert!(body.contains("Двухкомнатная квартира в ЖК «Горизонт»"));
    assert!(body.contains("Эксклюзив"));
    assert!(!body.contains(MSG_INVALID));
}

#[test]
fn publishing_valid_object_reports_success() {
    let body = body_string(post_form("/my-objects/new", &valid_form("1")));
    assert!(body.contains(MSG_PUBLISHED));
    assert!(body.contains("Срочно, Проверено"));
}

#[test]
fn saving_valid_draft_reports_draft() {
    let body = body_string(post_form("/my-objects/new", &valid_form("0")));
    assert!(body.contains(MSG_SAVED_DRAFT));
    assert!(!body.contains(MSG_INVALID));
}

#[test]
fn empty_submission_lists_field_errors() {
    let resp = post_form("/my-objects/new", "");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(MSG_INVALID));
    assert!(body.contains("Введите заголовок"));
    assert!(body.contains("Укажите адрес"));
    assert!(body.contains("Выберите тип сделки"));
    assert!(body.contains("Без тегов"));
}

#[test]
fn floor_above_building_is_rejected() {
    let form = valid_form("1").replace("floor=3", "floor=12");
    let body = body_string(post_form("/my-objects/new", &form));
    assert!(body.contains("Этаж не может быть выше этажности дома"));
    assert!(!body.contains(MSG_PUBLISHED));
}
