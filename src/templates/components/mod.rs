use maud::{html, Markup};

pub mod card;
pub mod contact_card;
pub mod error;
pub mod lead_card;
pub mod lead_filters;
pub mod pagination;
pub mod proposal_card;

pub use card::empty_state;
pub use contact_card::contact_card;
pub use error::html_error_response;
pub use lead_card::lead_card;
pub use lead_filters::lead_filters;
pub use pagination::catalog_footer;
pub use proposal_card::proposal_card;

/// Two-or-more option switch rendered as links: (label, href, is_active).
pub fn segmented(aria_label: &str, options: &[(&str, String, bool)]) -> Markup {
    html! {
        div class="segmented" role="group" aria-label=(aria_label) {
            @for (label, href, active) in options {
                a href=(href) class=(if *active { "segment active" } else { "segment" }) { (label) }
            }
        }
    }
}
