use std::io::Write;

use owo_colors::OwoColorize;

use crate::api::CreateGroupBody;
use crate::commands::{api_client, mirror, open_store};
use crate::error::{FunnelboardError, Result};
use crate::types::GroupMode;

/// Create a group at the end of the active funnel
pub async fn cmd_group_add(name: &str, description: Option<&str>, mode: &str) -> Result<()> {
    let mode: GroupMode = mode.parse()?;
    let store = open_store();
    let id = store.mutate(|board| board.create_group(name, description, mode))?;

    // Re-read for the palette color the board picked
    let board = store.load();
    let funnel_id = board.active_funnel_id.clone();
    let color = board
        .active_funnel()
        .and_then(|f| f.groups.iter().find(|g| g.id == id))
        .map(|g| g.color.clone());

    println!("Created group {} {}", name.trim().bold(), format!("({id})").dimmed());

    if let Some(api) = api_client() {
        let body = CreateGroupBody {
            name: Some(name.trim().to_string()),
            funnel_id: Some(funnel_id),
            description: description.map(str::to_string),
            mode: Some(mode),
            color,
        };
        mirror("group create", async { api.create_group(&body).await.map(|_| ()) }).await;
    }
    Ok(())
}

/// Rename a group in the active funnel
pub async fn cmd_group_rename(group_id: &str, name: &str) -> Result<()> {
    let store = open_store();
    store.mutate(|board| board.rename_group(group_id, name))?;
    println!("Renamed {} to {}", group_id.dimmed(), name.trim().bold());

    if let Some(api) = api_client() {
        mirror("group rename", api.rename_group(group_id, name.trim())).await;
    }
    Ok(())
}

/// Move a group from the active funnel to another funnel
pub async fn cmd_group_move(group_id: &str, funnel_id: &str) -> Result<()> {
    let store = open_store();
    store.mutate(|board| board.move_group_to_funnel(group_id, funnel_id))?;
    println!("Moved {} to {}", group_id.dimmed(), funnel_id.bold());

    if let Some(api) = api_client() {
        mirror("group move", api.move_group(group_id, funnel_id)).await;
    }
    Ok(())
}

/// Delete a group and all its cards, after confirmation
pub async fn cmd_group_rm(group_id: &str, force: bool) -> Result<()> {
    let store = open_store();

    let board = store.load();
    let funnel = board
        .active_funnel()
        .ok_or_else(|| FunnelboardError::GroupNotFound(group_id.to_string()))?;
    let group = funnel
        .groups
        .iter()
        .find(|g| g.id == group_id)
        .ok_or_else(|| FunnelboardError::GroupNotFound(group_id.to_string()))?;

    if !force && !confirm_delete(&group.name, group.cards.len())? {
        println!("Aborted.");
        return Ok(());
    }

    let removed = store.mutate(|board| board.delete_group(group_id))?;
    println!(
        "Deleted group {} {}",
        group_id.bold(),
        format!("({removed} cards removed)").dimmed()
    );

    if let Some(api) = api_client() {
        mirror("group delete", api.delete_group(group_id)).await;
    }
    Ok(())
}

fn confirm_delete(name: &str, cards: usize) -> Result<bool> {
    if !atty::is(atty::Stream::Stdin) {
        return Err(FunnelboardError::Other(format!(
            "refusing to delete group '{name}' without confirmation; pass --force"
        )));
    }
    print!("Delete group '{name}' and its {cards} cards? [y/N] ");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
