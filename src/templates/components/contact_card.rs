use crate::catalog::Lead;
use maud::{html, Markup};

/// Contact details for one lead, swapped into `#contact-modal` by htmx.
/// Mask asterisks are rendered as bullets.
pub fn contact_card(lead: &Lead) -> Markup {
    html! {
        div class="modal-backdrop" {
            div class="modal-card" role="dialog" aria-label=(format!("Контакты: {}", lead.contact.name)) {
                div class="modal-header" {
                    span class="avatar large" { (lead.contact.initials()) }
                    div {
                        h4 { (lead.contact.name) }
                        span class="muted" { "Лид из " (lead.city) }
                    }
                }
                div class="deal-meta" {
                    span class="badge" { (lead.deal_type.label()) }
                    span class="badge" { (lead.city) }
                    @if let Some(budget) = lead.display_budget() {
                        span class="badge badge-budget" { (budget) }
                    }
                }
                div class="contact-section" aria-label="Контактная информация" {
                    div class="contact-row" {
                        div class="contact-label" { "Телефон" }
                        span { (lead.contact.phone_protected()) }
                    }
                    div class="contact-row" {
                        div class="contact-label" { "Email" }
                        span { (lead.contact.email_protected()) }
                    }
                }
                div class="modal-actions" {
                    a class="button primary" href="/deals" { "Открыть карточку сделки" }
                    button type="button" class="button" onclick="this.closest('.modal-backdrop').remove()" { "Добавить заметку" }
                    p class="muted small" {
                        "Контакты защищены: вместо «*» отображены символы безопасности."
                    }
                }
            }
        }
    }
}
