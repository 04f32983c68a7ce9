// src/domain/proposal.rs

use crate::errors::ServerError;
use std::str::FromStr;

/// A cooperation offer between agents.
#[derive(Debug, Clone)]
pub struct Proposal {
    pub id: String,
    pub author_name: String,
    pub author_initials: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Human relative time, e.g. "2 часа назад".
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DealsTab {
    #[default]
    Incoming,
    Outgoing,
}

impl DealsTab {
    pub const ALL: [DealsTab; 2] = [DealsTab::Incoming, DealsTab::Outgoing];

    pub fn as_str(self) -> &'static str {
        match self {
            DealsTab::Incoming => "incoming",
            DealsTab::Outgoing => "outgoing",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DealsTab::Incoming => "Входящие",
            DealsTab::Outgoing => "Исходящие",
        }
    }
}

impl FromStr for DealsTab {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "incoming" => Ok(DealsTab::Incoming),
            "outgoing" => Ok(DealsTab::Outgoing),
            other => Err(ServerError::BadRequest(format!("unknown deals tab '{other}'"))),
        }
    }
}

/// Both proposal boxes.
#[derive(Debug, Clone, Default)]
pub struct ProposalBox {
    pub incoming: Vec<Proposal>,
    pub outgoing: Vec<Proposal>,
}

impl ProposalBox {
    pub fn for_tab(&self, tab: DealsTab) -> &[Proposal] {
        match tab {
            DealsTab::Incoming => &self.incoming,
            DealsTab::Outgoing => &self.outgoing,
        }
    }
}
