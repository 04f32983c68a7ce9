use crate::errors::{ResultResp, ServerError};
use crate::router::handle;
use crate::state::AppState;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

/// Fresh seeded state; cheap enough to build per test.
pub fn test_state() -> AppState {
    AppState::seeded().unwrap_or_else(|e| panic!("seed data rejected: {e}"))
}

pub fn send(method: Method, uri: &str, body: Body) -> ResultResp {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(body)
        .unwrap();

    handle(req, &test_state())
}

pub fn get(uri: &str) -> Response {
    send(Method::GET, uri, Body::empty()).expect("Handler failed")
}

pub fn get_err(uri: &str) -> ServerError {
    match send(Method::GET, uri, Body::empty()) {
        Ok(resp) => panic!("expected an error for {uri}, got {}", resp.status()),
        Err(err) => err,
    }
}

pub fn post_form(uri: &str, form: &str) -> Response {
    send(Method::POST, uri, Body::from(form.to_string())).expect("Handler failed")
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

/// Lead ids in the order their cards appear in a rendered page.
pub fn lead_ids_in_order(body: &str) -> Vec<String> {
    body.match_indices("id=\"lead-")
        .map(|(at, _)| {
            let rest = &body[at + "id=\"".len()..];
            rest[..rest.find('"').unwrap_or(rest.len())].to_string()
        })
        .collect()
}
