// src/mock/dashboard.rs

use crate::domain::dashboard::{ChartCard, DashboardData, Metric, Recommendation, Trend};

pub fn sample_dashboard() -> DashboardData {
    DashboardData {
        recommendations: vec![
            Recommendation {
                id: "moscow-hot",
                title: "Горячие лиды в Москве",
                description: "5 новых премиум-лидов доступны в вашем районе.",
                action_label: "Посмотреть",
                action_href: "/leads-catalog?city=moscow",
                image: "https://images.unsplash.com/photo-1504384308090-c894fdcc538d?auto=format&fit=crop&w=1200&q=80",
            },
            Recommendation {
                id: "colleague-match",
                title: "Свяжитесь с коллегой",
                description: "У Алексея П. есть подходящий объект для вашего клиента.",
                action_label: "Написать",
                action_href: "/deals",
                image: "https://images.unsplash.com/photo-1522252234503-e356532cafd5?auto=format&fit=crop&w=1200&q=80",
            },
            Recommendation {
                id: "top-up",
                title: "Пополните баланс",
                description: "Получите доступ к премиум-лидам и расширенным функциям.",
                action_label: "Пополнить",
                action_href: "/finance",
                image: "https://images.unsplash.com/photo-1454165205744-3b78555e5572?auto=format&fit=crop&w=1200&q=80",
            },
        ],
        metrics: vec![
            Metric {
                id: "objects",
                label: "Мои объекты",
                value: "42",
                trend_label: "+2",
                trend: Trend::Up,
            },
            Metric {
                id: "new-leads",
                label: "Новые лиды",
                value: "125",
                trend_label: "+15%",
                trend: Trend::Up,
            },
            Metric {
                id: "conversion",
                label: "Конверсия",
                value: "8.7%",
                trend_label: "-1.2%",
                trend: Trend::Down,
            },
            Metric {
                id: "freshness",
                label: "Свежесть лидов",
                value: "3 дня",
                trend_label: "-1",
                trend: Trend::Neutral,
            },
        ],
        charts: vec![
            ChartCard {
                id: "leads-by-day",
                title: "Лиды по дням",
            },
            ChartCard {
                id: "property-types",
                title: "Типы объектов",
            },
            ChartCard {
                id: "credits-spending",
                title: "Расход кредитов",
            },
        ],
    }
}
