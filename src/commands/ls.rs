use owo_colors::OwoColorize;
use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::board::filter::{CardFilter, FilteredGroup, filter_funnel};
use crate::commands::{format_card_line, open_store};
use crate::error::{FunnelboardError, Result};
use crate::types::Status;

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Assignee")]
    assignee: String,
    #[tabled(rename = "Statuses")]
    statuses: String,
    #[tabled(rename = "Last Activity")]
    last_activity: String,
}

/// Show the active funnel as a board (or table), filtered and searched
pub fn cmd_ls(
    query: Option<&str>,
    status: Option<&str>,
    all: bool,
    table: bool,
    output_json: bool,
) -> Result<()> {
    let status = status.map(str::parse::<Status>).transpose()?;
    let filter = CardFilter::parse(query.unwrap_or(""), status);

    let board = open_store().load();
    let funnel = board
        .active_funnel()
        .ok_or_else(|| FunnelboardError::FunnelNotFound(board.active_funnel_id.clone()))?;
    let groups = filter_funnel(funnel, &filter);

    if output_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "funnel": funnel.id,
                "groups": groups,
            }))?
        );
        return Ok(());
    }

    if table {
        print_table(&groups);
        return Ok(());
    }

    println!(
        "{} {} {}",
        funnel.name.bold(),
        format!("({})", funnel.id).dimmed(),
        format!("\u{2014} {} groups, {} cards", funnel.groups.len(), funnel.card_count()).dimmed()
    );

    for group in &groups {
        println!();
        println!(
            "{} {} {}",
            group.name.bold(),
            format!("({})", group.id).dimmed(),
            format!("{}/{}", group.cards.len(), group.total).dimmed()
        );

        if group.cards.is_empty() {
            if filter.is_empty() {
                println!("  {}", "empty".dimmed());
            } else {
                println!("  {}", "no matching cards".dimmed());
            }
            continue;
        }

        let shown = if all {
            group.cards.len()
        } else {
            group.visible_count.min(group.cards.len())
        };
        for card in &group.cards[..shown] {
            println!("  {}", format_card_line(card));
        }
        if shown < group.cards.len() {
            println!(
                "  {}",
                format!(
                    "+ {} more (funnelboard more {})",
                    group.cards.len() - shown,
                    group.id
                )
                .dimmed()
            );
        }
    }

    Ok(())
}

fn print_table(groups: &[FilteredGroup]) {
    let rows: Vec<TableRow> = groups
        .iter()
        .flat_map(|g| {
            g.cards.iter().map(|card| TableRow {
                customer: card.name.clone(),
                group: g.name.clone(),
                assignee: card.assignee.clone().unwrap_or_else(|| "\u{2014}".to_string()),
                statuses: card
                    .statuses
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
                last_activity: format!("{}m ago", card.minutes_ago),
            })
        })
        .collect();

    if rows.is_empty() {
        println!("{}", "No rows match your filters.".dimmed());
        return;
    }

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    println!("{table}");
}
