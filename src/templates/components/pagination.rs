use crate::catalog::{CatalogQuery, Lead, Page};
use maud::{html, Markup};

/// "Показано a–b из N результатов" plus numbered page links.
pub fn catalog_footer(page: &Page<&Lead>, query: &CatalogQuery) -> Markup {
    let shown = if page.start == 0 && page.end == 0 {
        "0".to_string()
    } else {
        format!("{}–{}", page.start, page.end)
    };

    html! {
        div class="catalog-footer" {
            span { "Показано " (shown) " из " (page.total) " результатов" }
            @if page.total_pages > 1 {
                nav class="pagination" aria-label="Страницы" {
                    @if page.current > 1 {
                        a href=(query.with_page(page.current - 1).href("/leads-catalog")) rel="prev" { "‹" }
                    }
                    @for n in 1..=page.total_pages {
                        @if n == page.current {
                            span class="page-link current" aria-current="page" { (n) }
                        } @else {
                            a class="page-link" href=(query.with_page(n).href("/leads-catalog")) { (n) }
                        }
                    }
                    @if page.current < page.total_pages {
                        a href=(query.with_page(page.current + 1).href("/leads-catalog")) rel="next" { "›" }
                    }
                }
            }
        }
    }
}
