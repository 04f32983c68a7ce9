use crate::catalog::ViewMode;
use crate::domain::listing::Listing;
use crate::templates::components::{empty_state, segmented};
use crate::templates::{desktop_layout, NavItem};
use maud::{html, Markup};
use url::form_urlencoded;

fn objects_href(q: &str, view: ViewMode) -> String {
    let mut out = form_urlencoded::Serializer::new(String::new());
    if !q.is_empty() {
        out.append_pair("q", q);
    }
    if view != ViewMode::default() {
        out.append_pair("view", view.as_str());
    }
    let qs = out.finish();
    if qs.is_empty() {
        "/my-objects".to_string()
    } else {
        format!("/my-objects?{qs}")
    }
}

pub fn my_objects_page(listings: &[&Listing], q: &str, view: ViewMode) -> Markup {
    let toggle = [
        ("Список", objects_href(q, ViewMode::List), view == ViewMode::List),
        ("Плитка", objects_href(q, ViewMode::Grid), view == ViewMode::Grid),
    ];

    desktop_layout(
        "Мои объекты",
        NavItem::MyObjects,
        html! {
            div class="page-header" {
                h1 { "Мои объекты" }
                a class="button primary" href="/my-objects/new" { "Создать новый объект" }
            }

            div class="toolbar" {
                form method="get" action="/my-objects" class="search-form" {
                    input type="search" name="q" value=(q) placeholder="Поиск по объектам";
                    @if view != ViewMode::default() {
                        input type="hidden" name="view" value=(view.as_str());
                    }
                    button type="submit" class="button" { "Найти" }
                }
                (segmented("Вид", &toggle))
            }

            @if listings.is_empty() {
                (empty_state("Объекты не найдены", "Измените поисковый запрос."))
            } @else if view == ViewMode::Grid {
                div class="objects-grid" {
                    @for listing in listings {
                        article class="object-card" id=(listing.key) {
                            h3 { (listing.title) }
                            span class=(format!("status-tag {}", listing.status.css_class())) { (listing.status.label()) }
                            p class="object-price" { (listing.price_label()) }
                            p class="muted" { "Комнат: " (listing.rooms) " · обновлено " (listing.updated_label()) }
                        }
                    }
                }
            } @else {
                table class="objects-table" {
                    thead {
                        tr {
                            th { "Объект" }
                            th { "Статус" }
                            th { "Цена" }
                            th { "Комнаты" }
                            th { "Обновлено" }
                        }
                    }
                    tbody {
                        @for listing in listings {
                            tr id=(listing.key) {
                                td { (listing.title) }
                                td { span class=(format!("status-tag {}", listing.status.css_class())) { (listing.status.label()) } }
                                td { (listing.price_label()) }
                                td { (listing.rooms) }
                                td { (listing.updated_label()) }
                            }
                        }
                    }
                }
            }
        },
    )
}
