use crate::catalog::Lead;
use maud::{html, Markup};

pub fn lead_card(lead: &Lead) -> Markup {
    let title = lead.title();
    let contacts_url = format!("/leads-catalog/{}/contacts", lead.id);

    html! {
        article class="lead-card" id=(lead.id) aria-label=(format!("Лид: {title}")) {
            div class="lead-top" {
                div {
                    h4 class="lead-title" { (title) }
                    div class="lead-meta" {
                        @if lead.exclusive {
                            span class="badge badge-exclusive" { "Эксклюзив" }
                        }
                        @if let Some(budget) = lead.display_budget() {
                            span class="badge badge-budget" { (budget) }
                        }
                        span class="meta-item" { "Комнат: " (lead.rooms) }
                        span class="meta-item" { "Источник: " (lead.source) }
                    }
                }
                div class="lead-score" {
                    div class=(format!("score-badge {}", lead.score_tier().css_class())) {
                        (lead.match_percent) "%"
                    }
                    span class="score-label" { "совпадение" }
                }
            }
            div class="lead-contact" {
                div class="contact-info" {
                    span class="contact-name" { (lead.contact.name) }
                    span class="contact-detail" { (lead.contact.phone) }
                    span class="contact-detail" { (lead.contact.email) }
                }
                div class="lead-actions" {
                    a
                        class="button primary"
                        href=(contacts_url)
                        hx-get=(contacts_url)
                        hx-target="#contact-modal"
                        hx-swap="innerHTML"
                    { "Открыть контакты" }
                    button type="button" class="bookmark" title="Добавить в избранное" { "☆" }
                }
            }
        }
    }
}
