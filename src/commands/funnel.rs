use owo_colors::OwoColorize;

use crate::commands::open_store;
use crate::error::Result;

/// List funnels in tab order, marking the active one
pub fn cmd_funnel_list() -> Result<()> {
    let board = open_store().load();
    for funnel in &board.funnels {
        let marker = if funnel.id == board.active_funnel_id {
            "*".green().to_string()
        } else {
            " ".to_string()
        };
        println!(
            "{marker} {} {} {}",
            funnel.name.bold(),
            format!("({})", funnel.id).dimmed(),
            format!(
                "\u{2014} {} groups, {} cards",
                funnel.groups.len(),
                funnel.card_count()
            )
            .dimmed()
        );
    }
    Ok(())
}

/// Switch the active funnel tab
pub fn cmd_funnel_use(funnel_id: &str) -> Result<()> {
    let store = open_store();
    store.mutate(|board| board.set_active_funnel(funnel_id))?;
    println!("Active funnel is now {}", funnel_id.bold());
    Ok(())
}
