use crate::domain::proposal::Proposal;
use maud::{html, Markup};

pub fn proposal_card(proposal: &Proposal) -> Markup {
    html! {
        article class="proposal-card" id=(proposal.id) aria-label=(format!("Предложение от {}", proposal.author_name)) {
            img class="proposal-cover" src=(proposal.image_url) alt=(proposal.title);
            div class="proposal-content" {
                div class="proposal-author" {
                    span class="avatar" { (proposal.author_initials) }
                    div {
                        span class="author-label" { "От: " (proposal.author_name) }
                        @if let Some(created) = &proposal.created_at {
                            span class="timestamp" { (created) }
                        }
                    }
                }
                h4 class="proposal-title" { (proposal.title) }
                p class="proposal-description" { (proposal.description) }
                div class="proposal-actions" {
                    button type="button" class="button reject" { "Отказать" }
                    button type="button" class="button accept" { "Согласиться" }
                }
                button type="button" class="chat-button" { "💬 Открыть чат" }
            }
        }
    }
}
