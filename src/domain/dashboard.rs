// src/domain/dashboard.rs

use crate::errors::ServerError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    pub fn css_class(self) -> &'static str {
        match self {
            Trend::Up => "trend-up",
            Trend::Down => "trend-down",
            Trend::Neutral => "trend-neutral",
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Neutral => "–",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Metric {
    pub id: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub trend_label: &'static str,
    pub trend: Trend,
}

#[derive(Debug, Clone)]
pub struct Recommendation {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub action_label: &'static str,
    pub action_href: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone)]
pub struct ChartCard {
    pub id: &'static str,
    pub title: &'static str,
}

/// Period selector of the key metrics block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricsRange {
    Week,
    #[default]
    Month,
    Quarter,
}

impl MetricsRange {
    pub const ALL: [MetricsRange; 3] = [MetricsRange::Week, MetricsRange::Month, MetricsRange::Quarter];

    pub fn as_str(self) -> &'static str {
        match self {
            MetricsRange::Week => "7",
            MetricsRange::Month => "30",
            MetricsRange::Quarter => "90",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MetricsRange::Week => "7 дней",
            MetricsRange::Month => "30 дней",
            MetricsRange::Quarter => "90 дней",
        }
    }
}

impl FromStr for MetricsRange {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricsRange::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| ServerError::BadRequest(format!("unknown metrics range '{s}'")))
    }
}

/// Everything the dashboard renders.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub recommendations: Vec<Recommendation>,
    pub metrics: Vec<Metric>,
    pub charts: Vec<ChartCard>,
}
