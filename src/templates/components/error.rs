use crate::errors::ServerError;
use crate::templates::layouts::desktop::{desktop_layout, NavItem};
use astra::{Body, Response, ResponseBuilder};
use maud::{html, Markup};

fn error_message(err: &ServerError) -> String {
    match err {
        ServerError::NotFound => "Страница не найдена".to_string(),
        ServerError::BadRequest(msg) => format!("Некорректный запрос: {msg}"),
        ServerError::XlsxError(msg) => format!("Не удалось сформировать файл: {msg}"),
        ServerError::InternalError => "Внутренняя ошибка сервера".to_string(),
    }
}

pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Ошибка {status}"),
        NavItem::Dashboard,
        html! {
            div class="error-page" {
                h1 { "Ошибка " (status) }
                p { (message) }
                p { a href="/" { "← На дашборд" } }
            }
        },
    )
}

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();
    let body = error_page(status, &error_message(&err)).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
