// src/mock/proposals.rs

use crate::domain::proposal::{Proposal, ProposalBox};

fn proposal(
    id: &str,
    (author_name, author_initials): (&str, &str),
    title: &str,
    description: &str,
    image_url: &str,
    created_at: &str,
) -> Proposal {
    Proposal {
        id: id.to_string(),
        author_name: author_name.to_string(),
        author_initials: author_initials.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
        created_at: Some(created_at.to_string()),
    }
}

pub fn sample_proposals() -> ProposalBox {
    ProposalBox {
        incoming: vec![
            proposal(
                "proposal-1",
                ("Elena Smirnova", "ES"),
                "В поисках трёхкомнатной квартиры в центре города",
                "Клиент готов оформить сделку в течение месяца. Рассматриваем объекты с панорамными окнами и паркингом.",
                "https://images.unsplash.com/photo-1616628182501-eho85NXWXTE?auto=format&fit=crop&w=1280&q=80",
                "2 часа назад",
            ),
            proposal(
                "proposal-2",
                ("Alexey Volkov", "AV"),
                "Клиент ищет современное офисное помещение, 200-300 кв.м",
                "Нужен офис в бизнес-центре класса А в пределах ТТК. Важны парковка и возможность гибкой планировки.",
                "https://images.unsplash.com/photo-1505691938895-1758d7feb511?auto=format&fit=crop&w=1280&q=80",
                "6 часов назад",
            ),
            proposal(
                "proposal-3",
                ("Olga Popova", "OP"),
                "Запрос на современный дом в пригороде",
                "Клиент ищет дом площадью 250-300 кв.м с участком от 10 соток в радиусе 20 км от города.",
                "https://images.unsplash.com/photo-1568605114967-8130f3a36994?auto=format&fit=crop&w=1280&q=80",
                "Вчера",
            ),
        ],
        outgoing: vec![proposal(
            "proposal-4",
            ("Lead Exchange", "LE"),
            "Предложение обмена клиентами по премиум-объектам",
            "У нас есть покупатели на премиум-квартиры в Москве. Давайте обменяемся клиентской базой для ускорения сделок.",
            "https://images.unsplash.com/photo-1529429617124-aee01c44c29d?auto=format&fit=crop&w=1280&q=80",
            "3 дня назад",
        )],
    }
}
