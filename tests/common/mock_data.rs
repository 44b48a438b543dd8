//! Deterministic board builders for integration tests

// Not every test binary uses every builder
#![allow(dead_code)]

use funnelboard::types::{GroupMode, Status};
use funnelboard::{Board, Card, Funnel, Group};

pub fn mock_card(id: &str, name: &str) -> Card {
    Card {
        id: id.to_string(),
        name: name.to_string(),
        company: None,
        summary: None,
        minutes_ago: 4,
        assignee: None,
        statuses: vec![Status::Open],
        pinned: false,
        tags: Vec::new(),
    }
}

pub fn mock_group(id: &str, name: &str, cards: Vec<Card>) -> Group {
    Group {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        mode: GroupMode::Manual,
        color: "#5b9cf3".to_string(),
        cards,
        visible_count: 3,
    }
}

/// Two funnels; the active one has three groups with 3/2/0 cards.
pub fn mock_board() -> Board {
    Board {
        funnels: vec![
            Funnel {
                id: "f_marketing".to_string(),
                name: "Marketing".to_string(),
                groups: vec![
                    mock_group(
                        "g_lead",
                        "New Lead",
                        vec![
                            mock_card("card_c1", "Adani Wilmar Limited"),
                            mock_card("card_c2", "VIP Industries Ltd"),
                            mock_card("card_c3", "Voltas Limited"),
                        ],
                    ),
                    mock_group(
                        "g_warm",
                        "Warm",
                        vec![
                            mock_card("card_w1", "Kamdhenu Limited"),
                            mock_card("card_w2", "Hero Motors Ltd"),
                        ],
                    ),
                    mock_group("g_cold", "Cold", Vec::new()),
                ],
            },
            Funnel {
                id: "f_sales".to_string(),
                name: "Sales".to_string(),
                groups: vec![mock_group(
                    "g_prospect",
                    "Prospecting",
                    vec![mock_card("card_s1", "Eureka Forbes Ltd")],
                )],
            },
        ],
        active_funnel_id: "f_marketing".to_string(),
    }
}

/// All card ids of the active funnel, flattened in display order.
pub fn active_card_ids(board: &Board) -> Vec<String> {
    board
        .active_funnel()
        .expect("mock board has an active funnel")
        .groups
        .iter()
        .flat_map(|g| g.cards.iter().map(|c| c.id.clone()))
        .collect()
}
