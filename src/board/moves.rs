//! Drag/reorder resolution
//!
//! A drag ends with a dragged entity id and an optional drop-target id.
//! [`resolve_drop`] classifies both ids (see [`EntityRef`]) and decides the
//! move to perform; [`apply_move`] performs it on the tree. Resolution is a
//! pure function so the two halves can be tested independently; every move
//! preserves total card count and set membership.

use serde::Serialize;

use crate::board::Board;
use crate::types::EntityRef;

/// A resolved drag-and-drop move, in board indices valid for the state the
/// move was resolved against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Move {
    /// Reorder the funnel tab list.
    FunnelToFunnel { from: usize, to: usize },
    /// Reorder the active funnel's group list.
    GroupToGroup { from: usize, to: usize },
    /// Reorder cards within one group of the active funnel.
    CardWithinGroup { group: usize, from: usize, to: usize },
    /// Move a card between two groups, inserting at the drop-target card's
    /// index.
    CardAcrossGroups {
        from_group: usize,
        from_index: usize,
        to_group: usize,
        to_index: usize,
    },
    /// Move a card onto a group (column) directly: append to the end.
    CardToGroupEnd {
        from_group: usize,
        from_index: usize,
        to_group: usize,
    },
}

/// Move an element of `items` from one index to another.
///
/// Remove-then-insert: the target index is interpreted against the list
/// after removal, so the moved element ends up exactly at `to`.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() {
        return;
    }
    let item = items.remove(from);
    let to = to.min(items.len());
    items.insert(to, item);
}

/// Decide which move (if any) a drag from `dragged_id` to `over_id` means.
///
/// Returns `None` for: no drop target, drop on self, unknown ids, and any
/// id-kind combination the board does not support (the drop is then a
/// no-op). Group and card moves resolve within the active funnel only.
pub fn resolve_drop(board: &Board, dragged_id: &str, over_id: Option<&str>) -> Option<Move> {
    let over_id = over_id?;
    if dragged_id == over_id {
        return None;
    }

    let dragged = EntityRef::classify(dragged_id)?;
    let over = EntityRef::classify(over_id)?;

    match (dragged, over) {
        (EntityRef::Funnel(a), EntityRef::Funnel(b)) => {
            let from = board.funnel_index(&a)?;
            let to = board.funnel_index(&b)?;
            Some(Move::FunnelToFunnel { from, to })
        }
        (EntityRef::Group(a), EntityRef::Group(b)) => {
            let funnel = board.active_funnel()?;
            let from = funnel.group_index(&a)?;
            let to = funnel.group_index(&b)?;
            Some(Move::GroupToGroup { from, to })
        }
        (EntityRef::Card(a), EntityRef::Card(b)) => {
            let funnel = board.active_funnel()?;
            let (from_group, from_index) = funnel.locate_card(&a)?;
            let (to_group, to_index) = funnel.locate_card(&b)?;
            if from_group == to_group {
                Some(Move::CardWithinGroup {
                    group: from_group,
                    from: from_index,
                    to: to_index,
                })
            } else {
                Some(Move::CardAcrossGroups {
                    from_group,
                    from_index,
                    to_group,
                    to_index,
                })
            }
        }
        (EntityRef::Card(a), EntityRef::Group(b)) => {
            let funnel = board.active_funnel()?;
            let (from_group, from_index) = funnel.locate_card(&a)?;
            let to_group = funnel.group_index(&b)?;
            if from_group == to_group {
                // Dropping a card back onto its own column changes nothing
                return None;
            }
            Some(Move::CardToGroupEnd {
                from_group,
                from_index,
                to_group,
            })
        }
        // Remaining kind combinations (group onto card, funnel onto group,
        // card onto funnel, ...) have no defined drop behavior
        _ => None,
    }
}

/// Apply a resolved move to the board.
///
/// Must be called on the same state the move was resolved against; insert
/// positions are clamped so application can never lose a card.
pub fn apply_move(board: &mut Board, mv: &Move) {
    match *mv {
        Move::FunnelToFunnel { from, to } => {
            array_move(&mut board.funnels, from, to);
        }
        Move::GroupToGroup { from, to } => {
            if let Some(funnel) = board.active_funnel_mut() {
                array_move(&mut funnel.groups, from, to);
            }
        }
        Move::CardWithinGroup { group, from, to } => {
            if let Some(funnel) = board.active_funnel_mut()
                && let Some(g) = funnel.groups.get_mut(group)
            {
                array_move(&mut g.cards, from, to);
            }
        }
        Move::CardAcrossGroups {
            from_group,
            from_index,
            to_group,
            to_index,
        } => {
            let Some(funnel) = board.active_funnel_mut() else {
                return;
            };
            if from_group >= funnel.groups.len()
                || to_group >= funnel.groups.len()
                || from_index >= funnel.groups[from_group].cards.len()
            {
                return;
            }
            let card = funnel.groups[from_group].cards.remove(from_index);
            let dest = &mut funnel.groups[to_group].cards;
            let to_index = to_index.min(dest.len());
            dest.insert(to_index, card);
        }
        Move::CardToGroupEnd {
            from_group,
            from_index,
            to_group,
        } => {
            let Some(funnel) = board.active_funnel_mut() else {
                return;
            };
            if from_group >= funnel.groups.len()
                || to_group >= funnel.groups.len()
                || from_index >= funnel.groups[from_group].cards.len()
            {
                return;
            }
            let card = funnel.groups[from_group].cards.remove(from_index);
            funnel.groups[to_group].cards.push(card);
        }
    }
}

/// Resolve and apply in one step. Returns the move that was applied, or
/// `None` when the drop was a no-op.
pub fn perform_drag(board: &mut Board, dragged_id: &str, over_id: Option<&str>) -> Option<Move> {
    let mv = resolve_drop(board, dragged_id, over_id)?;
    apply_move(board, &mv);
    Some(mv)
}
