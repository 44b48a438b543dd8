//! Board move and lifecycle integration tests
//!
//! These complement the unit tests in `src/board/` by exercising sequences
//! of operations against a full board and checking the invariants the board
//! guarantees: no card is ever lost or duplicated, and no-op drops leave the
//! tree untouched.

mod common;

use std::collections::BTreeSet;

use common::mock_data::{active_card_ids, mock_board};
use funnelboard::types::GroupMode;
use funnelboard::{Move, perform_drag, resolve_drop};

#[test]
fn test_same_group_reorders_are_permutations() {
    let mut board = mock_board();
    let before: BTreeSet<_> = active_card_ids(&board).into_iter().collect();

    // Shuffle the first group around a few times
    perform_drag(&mut board, "card_c3", Some("card_c1")).unwrap();
    perform_drag(&mut board, "card_c1", Some("card_c2")).unwrap();
    perform_drag(&mut board, "card_c2", Some("card_c3")).unwrap();

    let after: BTreeSet<_> = active_card_ids(&board).into_iter().collect();
    assert_eq!(before, after);
}

#[test]
fn test_cross_group_moves_preserve_total_count() {
    let mut board = mock_board();
    let total = board.active_funnel().unwrap().card_count();

    perform_drag(&mut board, "card_c1", Some("card_w1")).unwrap();
    assert_eq!(board.active_funnel().unwrap().card_count(), total);

    perform_drag(&mut board, "card_w2", Some("g_cold")).unwrap();
    assert_eq!(board.active_funnel().unwrap().card_count(), total);

    perform_drag(&mut board, "card_c1", Some("g_lead")).unwrap();
    assert_eq!(board.active_funnel().unwrap().card_count(), total);
}

#[test]
fn test_drop_on_own_group_is_noop() {
    let mut board = mock_board();
    let before = serde_json::to_string(&board).unwrap();

    assert!(perform_drag(&mut board, "card_c2", Some("g_lead")).is_none());
    assert_eq!(serde_json::to_string(&board).unwrap(), before);
}

#[test]
fn test_drag_example_from_board_semantics() {
    // Group [c1,c2,c3]: dragging c3 onto c1 yields [c3,c1,c2]
    let mut board = mock_board();
    perform_drag(&mut board, "card_c3", Some("card_c1")).unwrap();

    let funnel = board.active_funnel().unwrap();
    let ids: Vec<_> = funnel.groups[0].cards.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["card_c3", "card_c1", "card_c2"]);
}

#[test]
fn test_resolution_is_pure() {
    let board = mock_board();
    let before = serde_json::to_string(&board).unwrap();

    let mv = resolve_drop(&board, "card_c1", Some("card_w2"));
    assert!(matches!(mv, Some(Move::CardAcrossGroups { .. })));
    assert_eq!(serde_json::to_string(&board).unwrap(), before);
}

#[test]
fn test_cards_in_inactive_funnels_do_not_resolve() {
    let mut board = mock_board();
    // card_s1 lives in f_sales; the active funnel is f_marketing
    assert!(resolve_drop(&board, "card_s1", Some("card_c1")).is_none());
    assert!(resolve_drop(&board, "card_c1", Some("card_s1")).is_none());

    board.set_active_funnel("f_sales").unwrap();
    assert!(resolve_drop(&board, "card_s1", Some("g_prospect")).is_none());
}

#[test]
fn test_delete_group_removes_exactly_its_cards() {
    let mut board = mock_board();
    let warm_cards = board.active_funnel().unwrap().groups[1].cards.len();
    let lead_cards = board.active_funnel().unwrap().groups[0].cards.len();

    let removed = board.delete_group("g_warm").unwrap();
    assert_eq!(removed, warm_cards);

    let funnel = board.active_funnel().unwrap();
    assert!(funnel.group_index("g_warm").is_none());
    assert_eq!(funnel.groups[0].cards.len(), lead_cards);
    assert_eq!(funnel.card_count(), lead_cards);
}

#[test]
fn test_group_lifecycle_in_sequence() {
    let mut board = mock_board();

    let id = board
        .create_group("Hot", Some("closing soon"), GroupMode::Auto)
        .unwrap();
    board.rename_group(&id, "Very Hot").unwrap();
    perform_drag(&mut board, "card_c1", Some(id.as_str())).unwrap();

    let funnel = board.active_funnel().unwrap();
    let group = funnel.groups.iter().find(|g| g.id == id).unwrap();
    assert_eq!(group.name, "Very Hot");
    assert_eq!(group.cards.len(), 1);
    assert_eq!(group.cards[0].id, "card_c1");

    board.move_group_to_funnel(&id, "f_sales").unwrap();
    assert!(board.active_funnel().unwrap().group_index(&id).is_none());
    let sales = board.funnels.iter().find(|f| f.id == "f_sales").unwrap();
    assert_eq!(sales.groups.last().unwrap().id, id);
    // The card travelled with its group
    assert_eq!(sales.groups.last().unwrap().cards[0].id, "card_c1");
}

#[test]
fn test_funnel_reorder_keeps_groups_intact() {
    let mut board = mock_board();
    let marketing_groups = board.funnels[0].groups.len();

    perform_drag(&mut board, "f_marketing", Some("f_sales")).unwrap();

    assert_eq!(board.funnels[1].id, "f_marketing");
    assert_eq!(board.funnels[1].groups.len(), marketing_groups);
}
