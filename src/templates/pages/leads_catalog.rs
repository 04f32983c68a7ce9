use crate::catalog::{CatalogController, CatalogQuery, SortKey, ViewMode, ADVERTISED_TOTAL};
use crate::domain::format::group_digits;
use crate::templates::components::{catalog_footer, empty_state, lead_card, lead_filters, segmented};
use crate::templates::{desktop_layout, NavItem};
use maud::{html, Markup};

pub fn leads_catalog_page(controller: &CatalogController<'_>, query: &CatalogQuery) -> Markup {
    let page = controller.page();
    let view = controller.view();
    let first_page = query.with_page(1);

    let toggle = [
        ("Список", first_page.with_view(ViewMode::List).href("/leads-catalog"), view == ViewMode::List),
        ("Плитка", first_page.with_view(ViewMode::Grid).href("/leads-catalog"), view == ViewMode::Grid),
    ];
    let export_href = first_page.href("/leads-catalog/export");

    let mut cleared = controller.clone();
    cleared.reset();
    let reset_href = CatalogQuery::from_controller(&cleared).href("/leads-catalog");

    desktop_layout(
        "Каталог лидов",
        NavItem::LeadsCatalog,
        html! {
            div class="catalog-layout" {
                aside class="catalog-sidebar" {
                    (lead_filters(query, &reset_href))
                }

                section class="catalog-main" aria-labelledby="catalog-title" {
                    div class="catalog-header" {
                        div {
                            h1 id="catalog-title" { "Каталог лидов" }
                            p class="muted" { "Найдено " (group_digits(ADVERTISED_TOTAL)) " лида" }
                        }
                        a class="button" href=(export_href) { "Экспорт в Excel" }
                    }

                    div class="catalog-toolbar" {
                        span class="results-count" { "Отфильтровано: " (page.total) " результатов" }

                        form method="get" action="/leads-catalog" class="sort-form" {
                            // Re-submit everything but the page; a new sort starts over.
                            @for (key, value) in form_fields(&first_page) {
                                input type="hidden" name=(key) value=(value);
                            }
                            label for="sort" { "Сортировка" }
                            select name="sort" id="sort" onchange="this.form.submit()" {
                                @for key in SortKey::ALL {
                                    option value=(key.as_str()) selected[controller.sort() == key] { (key.label()) }
                                }
                            }
                            noscript { button type="submit" class="button" { "OK" } }
                        }

                        (segmented("Вид", &toggle))
                    }

                    @if page.is_empty() {
                        (empty_state("Нет лидов, удовлетворяющих текущим фильтрам.", "Попробуйте ослабить условия поиска."))
                    } @else {
                        div class=(if view == ViewMode::Grid { "lead-grid" } else { "lead-list" }) {
                            @for lead in &page.items {
                                (lead_card(lead))
                            }
                        }
                    }

                    (catalog_footer(page, query))
                }
            }
        },
    )
}

/// Hidden inputs for every non-sort parameter of `query`.
fn form_fields(query: &CatalogQuery) -> Vec<(String, String)> {
    let encoded = query.to_query_string();
    url::form_urlencoded::parse(encoded.as_bytes())
        .filter(|(k, _)| k != "sort")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}
