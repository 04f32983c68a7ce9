use crate::domain::proposal::{DealsTab, ProposalBox};
use crate::templates::components::{empty_state, proposal_card, segmented};
use crate::templates::{desktop_layout, NavItem};
use maud::{html, Markup};

pub fn deals_page(proposals: &ProposalBox, tab: DealsTab) -> Markup {
    let tabs: Vec<(&str, String, bool)> = DealsTab::ALL
        .into_iter()
        .map(|t| (t.label(), format!("/deals?tab={}", t.as_str()), t == tab))
        .collect();
    let shown = proposals.for_tab(tab);

    desktop_layout(
        "Сделки",
        NavItem::Deals,
        html! {
            div class="page-header" {
                h1 { "Предложения о сотрудничестве" }
                (segmented("Предложения", &tabs))
            }

            @if shown.is_empty() {
                (empty_state("Нет предложений", "Новые предложения появятся здесь."))
            } @else {
                div class="proposals-grid" {
                    @for proposal in shown {
                        (proposal_card(proposal))
                    }
                }
            }
        },
    )
}
