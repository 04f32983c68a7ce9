use maud::{html, Markup, DOCTYPE};

/// Sidebar destinations, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    MyObjects,
    LeadsCatalog,
    Deals,
    Finance,
}

impl NavItem {
    pub const ALL: [NavItem; 5] = [
        NavItem::Dashboard,
        NavItem::MyObjects,
        NavItem::LeadsCatalog,
        NavItem::Deals,
        NavItem::Finance,
    ];

    pub fn href(self) -> &'static str {
        match self {
            NavItem::Dashboard => "/",
            NavItem::MyObjects => "/my-objects",
            NavItem::LeadsCatalog => "/leads-catalog",
            NavItem::Deals => "/deals",
            NavItem::Finance => "/finance",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavItem::Dashboard => "Дашборд",
            NavItem::MyObjects => "Мои объекты",
            NavItem::LeadsCatalog => "Каталог лидов",
            NavItem::Deals => "Сделки",
            NavItem::Finance => "Финансы",
        }
    }
}

pub fn desktop_layout(title: &str, active: NavItem, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ru" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Lead Exchange" }
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {};
            }
            body {
                div class="app-shell" {
                    aside class="sidebar" {
                        a href="/" class="brand" {
                            svg
                                xmlns="http://www.w3.org/2000/svg"
                                width="24"
                                height="24"
                                viewBox="0 0 24 24"
                                fill="none"
                                stroke="#1f71ff"
                                stroke-width="2"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                            {
                                path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                                path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                                path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                                path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                            }
                            span { "Lead Exchange" }
                        }
                        nav {
                            ul {
                                @for item in NavItem::ALL {
                                    li {
                                        a
                                            href=(item.href())
                                            class=(if item == active { "nav-item active" } else { "nav-item" })
                                            aria-current=[(item == active).then_some("page")]
                                        { (item.label()) }
                                    }
                                }
                            }
                        }
                    }
                    div class="workspace" {
                        header class="app-header" {
                            form action="/my-objects" method="get" class="header-search" {
                                input type="search" name="q" placeholder="Поиск по объектам, лидам, коллегам...";
                            }
                            div class="header-actions" {
                                span class="icon-button" title="Уведомления" { "🔔" }
                                span class="icon-button" title="Сообщения" { "💬" }
                                span class="avatar" { "АП" }
                            }
                        }
                        main class="page" {
                            (content)
                        }
                    }
                }
                div id="contact-modal" {}
            }
        }
    }
}
