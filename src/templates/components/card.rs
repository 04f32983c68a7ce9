use maud::{html, Markup};

/// Placeholder shown where a list or grid has nothing to display.
pub fn empty_state(title: &str, hint: &str) -> Markup {
    html! {
        div class="empty-state" {
            div class="empty-icon" aria-hidden="true" { "📭" }
            h5 { (title) }
            @if !hint.is_empty() {
                p class="muted" { (hint) }
            }
        }
    }
}
