//! Demo seed data
//!
//! The board ships with a static demo set of funnels. Group and card ids are
//! generated at seed time and become stable once the board is persisted.

use crate::board::{Board, Card, Funnel, Group, VISIBLE_STEP};
use crate::types::{CARD_PREFIX, GROUP_PREFIX, GroupMode, Status};
use crate::utils::make_id;

const CUSTOMER_NAMES: &[&str] = &[
    "Adani Wilmar Limited",
    "VIP Industries Ltd",
    "Voltas Limited",
    "Kamdhenu Limited",
    "Hero Motors Ltd",
    "Eureka Forbes Ltd",
    "Cadbury India Ltd",
];

const ASSIGNEES: &[&str] = &[
    "Barkha Barad",
    "Shaan Luthra",
    "Aalap Bhatnagar",
    "Ravi Rege",
    "Leela Magadum",
];

const STATUS_ROTATION: &[Status] = &[
    Status::Open,
    Status::Assigned,
    Status::InProgress,
    Status::Urgent,
    Status::SupportRequest,
    Status::OrderIntent,
    Status::OrderReceived,
    Status::CampaignEngaged,
    Status::Custom,
];

const TAG_POOL: &[&str] = &["bulk", "upload", "engaged", "custom", "support", "intent"];

const SUMMARY: &str =
    "Lorem Ipsum is simply dummy text of the printing and typesetting ind\u{2026}";

fn seed_cards(n: usize) -> Vec<Card> {
    (0..n)
        .map(|i| {
            let mut statuses = vec![STATUS_ROTATION[i % STATUS_ROTATION.len()]];
            if i % 3 == 0 {
                statuses.push(Status::Urgent);
            }
            Card {
                id: make_id(CARD_PREFIX),
                name: CUSTOMER_NAMES[i % CUSTOMER_NAMES.len()].to_string(),
                company: None,
                summary: Some(SUMMARY.to_string()),
                minutes_ago: ((i + 1) * 4) as u32,
                assignee: Some(ASSIGNEES[i % ASSIGNEES.len()].to_string()),
                statuses,
                pinned: false,
                tags: TAG_POOL[..(i % 5) + 1].iter().map(|t| t.to_string()).collect(),
            }
        })
        .collect()
}

fn seed_group(name: &str, color: &str, cards: usize) -> Group {
    Group {
        id: make_id(GROUP_PREFIX),
        name: name.to_string(),
        description: None,
        mode: GroupMode::Manual,
        color: color.to_string(),
        cards: seed_cards(cards),
        visible_count: VISIBLE_STEP,
    }
}

/// The static demo board: three funnels with their stage columns.
pub fn seed_board() -> Board {
    let funnels = vec![
        Funnel {
            id: "f_marketing".to_string(),
            name: "Marketing".to_string(),
            groups: vec![
                seed_group("New Lead", "#5b9cf3", 6),
                seed_group("Warm", "#f59f00", 4),
                seed_group("Activated", "#22c55e", 2),
                seed_group("Cold", "#94a3b8", 2),
            ],
        },
        Funnel {
            id: "f_sales".to_string(),
            name: "Sales".to_string(),
            groups: vec![
                seed_group("Prospecting", "#6366f1", 5),
                seed_group("Negotiation", "#eab308", 4),
            ],
        },
        Funnel {
            id: "f_conversations".to_string(),
            name: "Conversations".to_string(),
            groups: vec![
                seed_group("Open", "#0ea5e9", 4),
                seed_group("Closed", "#10b981", 2),
            ],
        },
    ];
    let active_funnel_id = funnels[0].id.clone();
    Board {
        funnels,
        active_funnel_id,
    }
}

/// A small deterministic board for unit tests: fixed ids, no randomness.
#[cfg(test)]
pub(crate) fn test_board() -> Board {
    fn card(id: &str, name: &str) -> Card {
        Card {
            id: id.to_string(),
            name: name.to_string(),
            company: None,
            summary: None,
            minutes_ago: 5,
            assignee: None,
            statuses: vec![Status::Open],
            pinned: false,
            tags: Vec::new(),
        }
    }

    fn group(id: &str, name: &str, cards: Vec<Card>) -> Group {
        Group {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            mode: GroupMode::Manual,
            color: "#94a3b8".to_string(),
            cards,
            visible_count: VISIBLE_STEP,
        }
    }

    Board {
        funnels: vec![
            Funnel {
                id: "f_marketing".to_string(),
                name: "Marketing".to_string(),
                groups: vec![
                    group(
                        "g_lead",
                        "New Lead",
                        vec![
                            card("card_a1", "Adani Wilmar Limited"),
                            card("card_a2", "VIP Industries Ltd"),
                            card("card_a3", "Voltas Limited"),
                        ],
                    ),
                    group(
                        "g_warm",
                        "Warm",
                        vec![card("card_b1", "Kamdhenu Limited"), card("card_b2", "Hero Motors Ltd")],
                    ),
                    group("g_cold", "Cold", Vec::new()),
                ],
            },
            Funnel {
                id: "f_sales".to_string(),
                name: "Sales".to_string(),
                groups: vec![group(
                    "g_prospect",
                    "Prospecting",
                    vec![card("card_s1", "Eureka Forbes Ltd")],
                )],
            },
        ],
        active_funnel_id: "f_marketing".to_string(),
    }
}
