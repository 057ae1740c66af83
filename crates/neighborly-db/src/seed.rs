use neighborly_types::models::{Exchange, ExchangeType};

pub fn demo_exchanges() -> Vec<Exchange> {
    vec![
        Exchange {
            id: 1,
            user_id: 101,
            kind: ExchangeType::Offer,
            skill: "Gardening".into(),
            description: "Help with flowers".into(),
            location: "Main St".into(),
            points: 20,
        },
        Exchange {
            id: 2,
            user_id: 102,
            kind: ExchangeType::Need,
            skill: "Cooking".into(),
            description: "Learn pasta".into(),
            location: "Oak Ave".into(),
            points: 15,
        },
    ]
}
