use owo_colors::OwoColorize;

use crate::board::moves::{Move, perform_drag};
use crate::commands::{api_client, mirror, open_store};
use crate::error::Result;

/// A collection-API call equivalent to an applied move. Funnel and group
/// reorders have no API counterpart and mirror nothing.
enum MirrorOp {
    ReorderCards {
        group_id: String,
        ids: Vec<String>,
    },
    MoveCard {
        card_id: String,
        group_id: String,
        position: usize,
    },
}

/// Perform a drag from one entity onto another, exactly as a pointer drop
/// would: funnel onto funnel, group onto group, card onto card or group.
pub async fn cmd_mov(dragged_id: &str, target_id: &str) -> Result<()> {
    let store = open_store();

    let (applied, mirror_op) = store.mutate(|board| {
        let applied = perform_drag(board, dragged_id, Some(target_id));
        let mirror_op = applied.as_ref().and_then(|mv| {
            let funnel = board.active_funnel()?;
            match *mv {
                Move::CardWithinGroup { group, .. } => {
                    let g = funnel.groups.get(group)?;
                    Some(MirrorOp::ReorderCards {
                        group_id: g.id.clone(),
                        ids: g.cards.iter().map(|c| c.id.clone()).collect(),
                    })
                }
                Move::CardAcrossGroups {
                    to_group, to_index, ..
                } => Some(MirrorOp::MoveCard {
                    card_id: dragged_id.to_string(),
                    group_id: funnel.groups.get(to_group)?.id.clone(),
                    position: to_index,
                }),
                Move::CardToGroupEnd { to_group, .. } => {
                    let g = funnel.groups.get(to_group)?;
                    Some(MirrorOp::MoveCard {
                        card_id: dragged_id.to_string(),
                        group_id: g.id.clone(),
                        position: g.cards.len().saturating_sub(1),
                    })
                }
                Move::FunnelToFunnel { .. } | Move::GroupToGroup { .. } => None,
            }
        });
        Ok((applied, mirror_op))
    })?;

    match applied {
        None => {
            println!("{}", "Nothing to do.".dimmed());
            return Ok(());
        }
        Some(Move::FunnelToFunnel { .. }) => {
            println!("Reordered funnels: {} now sits at {}", dragged_id.bold(), target_id.dimmed());
        }
        Some(Move::GroupToGroup { .. }) => {
            println!("Reordered groups: {} now sits at {}", dragged_id.bold(), target_id.dimmed());
        }
        Some(Move::CardWithinGroup { .. }) => {
            println!("Reordered {} onto {}", dragged_id.bold(), target_id.dimmed());
        }
        Some(Move::CardAcrossGroups { .. }) => {
            println!("Moved {} next to {}", dragged_id.bold(), target_id.dimmed());
        }
        Some(Move::CardToGroupEnd { .. }) => {
            println!("Moved {} to the end of {}", dragged_id.bold(), target_id.dimmed());
        }
    }

    if let (Some(api), Some(op)) = (api_client(), mirror_op) {
        match op {
            MirrorOp::ReorderCards { group_id, ids } => {
                mirror("card reorder", api.reorder_cards(&group_id, &ids)).await;
            }
            MirrorOp::MoveCard {
                card_id,
                group_id,
                position,
            } => {
                mirror("card move", api.move_card(&card_id, &group_id, position)).await;
            }
        }
    }
    Ok(())
}

/// Toggle a card's pinned flag
pub fn cmd_pin(card_id: &str) -> Result<()> {
    let store = open_store();
    let pinned = store.mutate(|board| board.toggle_pin(card_id))?;
    if pinned {
        println!("Pinned {} to the top of its group", card_id.bold());
    } else {
        println!("Unpinned {}", card_id.bold());
    }
    Ok(())
}

/// Grow a group's visible-card window
pub fn cmd_more(group_id: &str) -> Result<()> {
    let store = open_store();
    let visible = store.mutate(|board| board.load_more(group_id))?;
    println!("{} now shows up to {} cards", group_id.bold(), visible);
    Ok(())
}
