use clap::{CommandFactory, Parser, Subcommand};
use std::process::ExitCode;

use funnelboard::commands::{
    cmd_config_get, cmd_config_set, cmd_config_show, cmd_funnel_list, cmd_funnel_use,
    cmd_group_add, cmd_group_move, cmd_group_rename, cmd_group_rm, cmd_ls, cmd_more, cmd_mov,
    cmd_pin, cmd_pull, cmd_serve,
};
use funnelboard::types::{Status, VALID_STATUSES};

#[derive(Parser)]
#[command(name = "funnelboard")]
#[command(about = "Kanban funnel board for customer pipelines")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the active funnel as a board
    #[command(visible_alias = "board")]
    Ls {
        /// Search text; also accepts a status:<value> shorthand
        #[arg(short, long)]
        query: Option<String>,

        /// Filter by status (open, assigned, in_progress, ...)
        #[arg(long, value_parser = parse_status)]
        status: Option<String>,

        /// Show every card, ignoring each group's visible window
        #[arg(long)]
        all: bool,

        /// Render as a flat table instead of columns
        #[arg(long)]
        table: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage funnel tabs
    Funnel {
        #[command(subcommand)]
        action: FunnelAction,
    },

    /// Manage groups (columns) in the active funnel
    Group {
        #[command(subcommand)]
        action: GroupAction,
    },

    /// Drag an entity onto another: funnels and groups reorder, cards
    /// reorder or change group
    #[command(visible_alias = "mv")]
    Move {
        /// Id of the dragged entity
        dragged_id: String,
        /// Id of the drop target (a card or a group for card drags)
        target_id: String,
    },

    /// Pin a card to the top of its group (or unpin it)
    Pin {
        /// Card id
        card_id: String,
    },

    /// Show more cards in a group's board view
    More {
        /// Group id
        group_id: String,
    },

    /// Replace the local board with the collection API's tree
    Pull,

    /// Run the collection API service
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Serve the locally persisted board instead of the demo seed
        #[arg(long)]
        from_local: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum FunnelAction {
    /// List funnels in tab order
    #[command(visible_alias = "ls")]
    List,
    /// Switch the active funnel
    Use {
        /// Funnel id
        funnel_id: String,
    },
}

#[derive(Subcommand)]
enum GroupAction {
    /// Create a group at the end of the active funnel
    Add {
        /// Group name
        name: String,

        /// Optional description
        #[arg(short, long)]
        description: Option<String>,

        /// How customers are added: manual or auto
        #[arg(long, default_value = "manual")]
        mode: String,
    },
    /// Rename a group
    Rename {
        /// Group id
        group_id: String,
        /// New name
        name: String,
    },
    /// Move a group to another funnel (appends to its group list)
    Move {
        /// Group id
        group_id: String,
        /// Target funnel id
        funnel_id: String,
    },
    /// Delete a group and all its cards
    Rm {
        /// Group id
        group_id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Get a configuration value (api.base_url, api.token, api.timeout)
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a configuration value (api.base_url, api.token, api.timeout)
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },
}

fn parse_status(s: &str) -> Result<String, String> {
    s.parse::<Status>()
        .map(|_| s.to_string())
        .map_err(|_| format!("invalid status '{s}' (valid: {})", VALID_STATUSES.join(", ")))
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ls {
            query,
            status,
            all,
            table,
            json,
        } => cmd_ls(query.as_deref(), status.as_deref(), all, table, json),

        Commands::Funnel { action } => match action {
            FunnelAction::List => cmd_funnel_list(),
            FunnelAction::Use { funnel_id } => cmd_funnel_use(&funnel_id),
        },

        Commands::Group { action } => match action {
            GroupAction::Add {
                name,
                description,
                mode,
            } => cmd_group_add(&name, description.as_deref(), &mode).await,
            GroupAction::Rename { group_id, name } => cmd_group_rename(&group_id, &name).await,
            GroupAction::Move {
                group_id,
                funnel_id,
            } => cmd_group_move(&group_id, &funnel_id).await,
            GroupAction::Rm { group_id, force } => cmd_group_rm(&group_id, force).await,
        },

        Commands::Move {
            dragged_id,
            target_id,
        } => cmd_mov(&dragged_id, &target_id).await,

        Commands::Pin { card_id } => cmd_pin(&card_id),

        Commands::More { group_id } => cmd_more(&group_id),

        Commands::Pull => cmd_pull().await,

        Commands::Serve {
            host,
            port,
            from_local,
        } => cmd_serve(&host, port, from_local).await,

        Commands::Config { action } => match action {
            ConfigAction::Show => cmd_config_show(),
            ConfigAction::Get { key } => cmd_config_get(&key),
            ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
        },

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
