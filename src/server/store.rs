//! In-memory collection store
//!
//! The service keeps its own flat copy of the tree (funnel, group and card
//! row tables with explicit order indexes) and materializes the nested
//! shape on read. State is an explicit object handed to the router, not a
//! module-level global, so tests and multiple instances construct their
//! own. Nothing is persisted; a restart starts from seed.

use crate::api::{CardPatch, GroupPatch};
use crate::board::{Board, Card, Funnel, Group, VISIBLE_STEP};
use crate::types::{CARD_PREFIX, GROUP_PREFIX, GroupMode, Status};
use crate::utils::make_id;

#[derive(Debug, Clone)]
pub struct FunnelRow {
    pub id: String,
    pub name: String,
    pub order_index: usize,
}

#[derive(Debug, Clone)]
pub struct GroupRow {
    pub id: String,
    pub funnel_id: String,
    pub name: String,
    pub description: Option<String>,
    pub mode: GroupMode,
    pub color: String,
    pub order_index: usize,
}

#[derive(Debug, Clone)]
pub struct CardRow {
    pub group_id: String,
    pub card: Card,
}

#[derive(Debug, Clone, Default)]
pub struct CollectionStore {
    funnels: Vec<FunnelRow>,
    groups: Vec<GroupRow>,
    cards: Vec<CardRow>,
}

impl CollectionStore {
    pub fn new() -> Self {
        CollectionStore::default()
    }

    /// The service's demo seed: two funnels, two stages, five customers.
    pub fn seeded() -> Self {
        let mut store = CollectionStore::new();
        store.funnels.push(FunnelRow {
            id: "f_marketing".to_string(),
            name: "Marketing".to_string(),
            order_index: 0,
        });
        store.funnels.push(FunnelRow {
            id: "f_sales".to_string(),
            name: "Sales".to_string(),
            order_index: 1,
        });
        let g1 = store.create_group("New Lead", "f_marketing", None, GroupMode::Manual, None);
        store.create_group("Warm", "f_marketing", None, GroupMode::Manual, None);
        for i in 0..5 {
            store.cards.push(CardRow {
                group_id: g1.clone(),
                card: Card {
                    id: make_id(CARD_PREFIX),
                    name: format!("Customer {}", i + 1),
                    company: None,
                    summary: Some("Demo".to_string()),
                    minutes_ago: 0,
                    assignee: None,
                    statuses: vec![Status::Open],
                    pinned: false,
                    tags: Vec::new(),
                },
            });
        }
        store
    }

    /// Flatten a board into row tables, preserving display order as order
    /// indexes. Used to serve a locally persisted board.
    pub fn from_board(board: &Board) -> Self {
        let mut store = CollectionStore::new();
        for (fi, funnel) in board.funnels.iter().enumerate() {
            store.funnels.push(FunnelRow {
                id: funnel.id.clone(),
                name: funnel.name.clone(),
                order_index: fi,
            });
            for (gi, group) in funnel.groups.iter().enumerate() {
                store.groups.push(GroupRow {
                    id: group.id.clone(),
                    funnel_id: funnel.id.clone(),
                    name: group.name.clone(),
                    description: group.description.clone(),
                    mode: group.mode,
                    color: group.color.clone(),
                    order_index: gi,
                });
                for card in &group.cards {
                    store.cards.push(CardRow {
                        group_id: group.id.clone(),
                        card: card.clone(),
                    });
                }
            }
        }
        store
    }

    /// Materialize the nested funnels → groups → cards shape, sorted by
    /// order index at each level.
    pub fn materialize(&self) -> Vec<Funnel> {
        let mut funnels: Vec<&FunnelRow> = self.funnels.iter().collect();
        funnels.sort_by_key(|f| f.order_index);
        funnels
            .into_iter()
            .map(|f| {
                let mut groups: Vec<&GroupRow> = self
                    .groups
                    .iter()
                    .filter(|g| g.funnel_id == f.id)
                    .collect();
                groups.sort_by_key(|g| g.order_index);
                Funnel {
                    id: f.id.clone(),
                    name: f.name.clone(),
                    groups: groups
                        .into_iter()
                        .map(|g| Group {
                            id: g.id.clone(),
                            name: g.name.clone(),
                            description: g.description.clone(),
                            mode: g.mode,
                            color: g.color.clone(),
                            cards: self
                                .cards
                                .iter()
                                .filter(|c| c.group_id == g.id)
                                .map(|c| c.card.clone())
                                .collect(),
                            visible_count: VISIBLE_STEP,
                        })
                        .collect(),
                }
            })
            .collect()
    }

    /// Create a group at the end of a funnel's group order; returns the
    /// assigned id. Presence of name and funnel id is the caller's
    /// (handler's) validation; the funnel itself is not checked.
    pub fn create_group(
        &mut self,
        name: &str,
        funnel_id: &str,
        description: Option<String>,
        mode: GroupMode,
        color: Option<String>,
    ) -> String {
        let order_index = self
            .groups
            .iter()
            .filter(|g| g.funnel_id == funnel_id)
            .count();
        let row = GroupRow {
            id: make_id(GROUP_PREFIX),
            funnel_id: funnel_id.to_string(),
            name: name.to_string(),
            description,
            mode,
            color: color.unwrap_or_else(|| "#94a3b8".to_string()),
            order_index,
        };
        let id = row.id.clone();
        self.groups.push(row);
        id
    }

    /// Apply a group patch: rename, reparent, and/or reorder its cards by an
    /// explicit id list (unknown ids sort last, prior relative order kept).
    /// Returns false when the group does not exist.
    pub fn patch_group(&mut self, id: &str, patch: &GroupPatch) -> bool {
        let Some(group) = self.groups.iter_mut().find(|g| g.id == id) else {
            return false;
        };
        if let Some(name) = &patch.name {
            group.name = name.clone();
        }
        if let Some(funnel_id) = &patch.funnel_id {
            group.funnel_id = funnel_id.clone();
        }
        if let Some(order) = &patch.card_order {
            let position = |card_id: &str| {
                order
                    .iter()
                    .position(|o| o == card_id)
                    .unwrap_or(usize::MAX)
            };
            let mut current: Vec<CardRow> = Vec::new();
            self.cards.retain(|c| {
                if c.group_id == id {
                    current.push(c.clone());
                    false
                } else {
                    true
                }
            });
            current.sort_by_key(|c| position(&c.card.id));
            self.cards.extend(current);
        }
        true
    }

    /// Delete a group, cascading to its cards. Returns how many cards went
    /// with it. Deleting an unknown id removes nothing and is not an error.
    pub fn delete_group(&mut self, id: &str) -> usize {
        let before = self.cards.len();
        self.cards.retain(|c| c.group_id != id);
        self.groups.retain(|g| g.id != id);
        before - self.cards.len()
    }

    /// Apply a card patch: reassign group first when present, then splice
    /// the card to `position` within its (possibly new) group, clamped to
    /// the list length. Returns false when the card does not exist.
    pub fn patch_card(&mut self, id: &str, patch: &CardPatch) -> bool {
        let Some(idx) = self.cards.iter().position(|c| c.card.id == id) else {
            return false;
        };
        if let Some(group_id) = &patch.group_id {
            self.cards[idx].group_id = group_id.clone();
        }
        if let Some(position) = patch.position {
            let moved = self.cards.remove(idx);
            let group_id = moved.group_id.clone();
            let mut arr: Vec<CardRow> = Vec::new();
            self.cards.retain(|c| {
                if c.group_id == group_id {
                    arr.push(c.clone());
                    false
                } else {
                    true
                }
            });
            let position = position.min(arr.len());
            arr.insert(position, moved);
            self.cards.extend(arr);
        }
        true
    }

    /// Ids of a group's cards in stored order.
    pub fn card_ids(&self, group_id: &str) -> Vec<String> {
        self.cards
            .iter()
            .filter(|c| c.group_id == group_id)
            .map(|c| c.card.id.clone())
            .collect()
    }

    pub fn group_count(&self, funnel_id: &str) -> usize {
        self.groups
            .iter()
            .filter(|g| g.funnel_id == funnel_id)
            .count()
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_shape() {
        let store = CollectionStore::seeded();
        let funnels = store.materialize();
        assert_eq!(funnels.len(), 2);
        assert_eq!(funnels[0].id, "f_marketing");
        assert_eq!(funnels[0].groups.len(), 2);
        assert_eq!(funnels[0].groups[0].name, "New Lead");
        assert_eq!(funnels[0].groups[0].cards.len(), 5);
        assert_eq!(funnels[1].groups.len(), 0);
    }

    #[test]
    fn test_create_group_appends_last() {
        let mut store = CollectionStore::seeded();
        let id = store.create_group("Hot", "f_sales", None, GroupMode::Manual, None);

        let funnels = store.materialize();
        let sales = funnels.iter().find(|f| f.id == "f_sales").unwrap();
        assert_eq!(sales.groups.len(), 1);
        assert_eq!(sales.groups.last().unwrap().id, id);

        // Next one lands after it
        let id2 = store.create_group("Won", "f_sales", None, GroupMode::Auto, None);
        let funnels = store.materialize();
        let sales = funnels.iter().find(|f| f.id == "f_sales").unwrap();
        assert_eq!(
            sales.groups.iter().map(|g| g.id.as_str()).collect::<Vec<_>>(),
            vec![id.as_str(), id2.as_str()]
        );
    }

    #[test]
    fn test_patch_group_rename_and_reparent() {
        let mut store = CollectionStore::seeded();
        let gid = store.materialize()[0].groups[0].id.clone();

        assert!(store.patch_group(
            &gid,
            &GroupPatch {
                name: Some("Renamed".to_string()),
                funnel_id: Some("f_sales".to_string()),
                card_order: None,
            }
        ));

        let funnels = store.materialize();
        let sales = funnels.iter().find(|f| f.id == "f_sales").unwrap();
        let moved = sales.groups.iter().find(|g| g.id == gid).unwrap();
        assert_eq!(moved.name, "Renamed");
        // Cards follow their group
        assert_eq!(moved.cards.len(), 5);
    }

    #[test]
    fn test_patch_group_unknown_id() {
        let mut store = CollectionStore::seeded();
        assert!(!store.patch_group("g_missing", &GroupPatch::default()));
    }

    #[test]
    fn test_card_order_reorders() {
        let mut store = CollectionStore::seeded();
        let gid = store.materialize()[0].groups[0].id.clone();
        let mut ids = store.card_ids(&gid);
        ids.reverse();

        store.patch_group(
            &gid,
            &GroupPatch {
                card_order: Some(ids.clone()),
                ..Default::default()
            },
        );
        assert_eq!(store.card_ids(&gid), ids);
    }

    #[test]
    fn test_card_order_unknown_ids_sort_last_stably() {
        let mut store = CollectionStore::seeded();
        let gid = store.materialize()[0].groups[0].id.clone();
        let ids = store.card_ids(&gid);

        // Only mention the last two cards; the other three are unknown to
        // the order list and must stay behind them in prior relative order
        store.patch_group(
            &gid,
            &GroupPatch {
                card_order: Some(vec![ids[4].clone(), ids[3].clone()]),
                ..Default::default()
            },
        );
        let reordered = store.card_ids(&gid);
        assert_eq!(
            reordered,
            vec![
                ids[4].clone(),
                ids[3].clone(),
                ids[0].clone(),
                ids[1].clone(),
                ids[2].clone()
            ]
        );
    }

    #[test]
    fn test_delete_group_cascades() {
        let mut store = CollectionStore::seeded();
        let gid = store.materialize()[0].groups[0].id.clone();
        let total = store.card_count();

        let removed = store.delete_group(&gid);
        assert_eq!(removed, 5);
        assert_eq!(store.card_count(), total - 5);
        assert!(store.card_ids(&gid).is_empty());
        assert_eq!(store.group_count("f_marketing"), 1);

        // Unknown id removes nothing
        assert_eq!(store.delete_group("g_missing"), 0);
    }

    #[test]
    fn test_patch_card_reassigns_and_splices() {
        let mut store = CollectionStore::seeded();
        let funnels = store.materialize();
        let from = funnels[0].groups[0].id.clone();
        let to = funnels[0].groups[1].id.clone();
        let card_id = funnels[0].groups[0].cards[0].id.clone();
        let total = store.card_count();

        assert!(store.patch_card(
            &card_id,
            &CardPatch {
                group_id: Some(to.clone()),
                position: Some(0),
            }
        ));

        assert_eq!(store.card_ids(&from).len(), 4);
        assert_eq!(store.card_ids(&to), vec![card_id]);
        assert_eq!(store.card_count(), total);
    }

    #[test]
    fn test_patch_card_position_clamps_to_append() {
        let mut store = CollectionStore::seeded();
        let gid = store.materialize()[0].groups[0].id.clone();
        let ids = store.card_ids(&gid);

        store.patch_card(
            &ids[0],
            &CardPatch {
                group_id: None,
                position: Some(999),
            },
        );
        let reordered = store.card_ids(&gid);
        assert_eq!(reordered.last(), Some(&ids[0]));
        assert_eq!(reordered.len(), ids.len());
    }

    #[test]
    fn test_patch_card_unknown_id() {
        let mut store = CollectionStore::seeded();
        assert!(!store.patch_card("card_missing", &CardPatch::default()));
    }

    #[test]
    fn test_from_board_roundtrips_through_materialize() {
        let board = crate::board::seed::seed_board();
        let store = CollectionStore::from_board(&board);
        let funnels = store.materialize();

        assert_eq!(funnels.len(), board.funnels.len());
        for (a, b) in funnels.iter().zip(&board.funnels) {
            assert_eq!(a.id, b.id);
            let a_groups: Vec<_> = a.groups.iter().map(|g| g.id.as_str()).collect();
            let b_groups: Vec<_> = b.groups.iter().map(|g| g.id.as_str()).collect();
            assert_eq!(a_groups, b_groups);
            for (ag, bg) in a.groups.iter().zip(&b.groups) {
                let a_cards: Vec<_> = ag.cards.iter().map(|c| c.id.as_str()).collect();
                let b_cards: Vec<_> = bg.cards.iter().map(|c| c.id.as_str()).collect();
                assert_eq!(a_cards, b_cards);
            }
        }
    }
}
