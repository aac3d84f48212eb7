// src/cli.rs
use anyhow::{Context as _, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::models::{LinkerState, STATE_FILE_NAME};
use crate::store::{DocumentStore, VaultStore};
use crate::utils::{print_candidates, print_links, print_progress, print_report};
use crate::workspace::Workspace;

/// Environment variable holding the log filter, e.g. `ZLINK_LOG=debug`.
pub const LOG_ENV: &str = "ZLINK_LOG";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Vault directory to work on (defaults to current directory)
    #[arg(short, long, default_value = ".", global = true)]
    pub directory: PathBuf,

    /// Log every document touched to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan the vault and show the top link candidates
    Scan,

    /// Show the saved candidates without rescanning
    List {
        /// Show every candidate instead of one page
        #[arg(short, long)]
        all: bool,
    },

    /// Show keywords that are already linked, with the notes linking them
    Links,

    /// Link every bare occurrence of the given candidates
    Link {
        #[arg(required = true)]
        keywords: Vec<String>,
    },

    /// Turn `[[keyword]]` back into plain text
    Unlink {
        #[arg(required = true)]
        keywords: Vec<String>,
    },

    /// Stop suggesting the given candidates
    Ignore {
        #[arg(required = true)]
        keywords: Vec<String>,
    },

    /// Suggest previously ignored keywords again
    Unignore {
        #[arg(required = true)]
        keywords: Vec<String>,
    },

    /// Show ignored keywords
    Ignored,

    /// Change and show settings
    Config {
        /// Skip notes whose path contains this text (empty to disable)
        #[arg(short, long)]
        exclude: Option<String>,

        /// Number of candidates shown per page
        #[arg(short, long)]
        page_size: Option<usize>,
    },
}

/// Installs the stderr log subscriber. `verbose` overrides [`LOG_ENV`].
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("zlink=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

/// Runs one command against the vault in `args.directory`.
///
/// # Errors
///
/// This function may return an error if:
/// * The vault cannot be opened or listed
/// * A keyword is not a current candidate or ignored entry
/// * The state file cannot be written
pub fn run(args: Args) -> Result<()> {
    let store = VaultStore::open(&args.directory)
        .with_context(|| format!("Failed to open vault: {}", args.directory.display()))?;
    let state_path = store.root().join(STATE_FILE_NAME);
    let state = LinkerState::load(&state_path);
    let mut workspace = Workspace::new(store, state).with_state_file(state_path);

    match args.command {
        Command::Scan => {
            workspace.classify().context("Failed to scan vault")?;
            print_candidates(workspace.page());
        }
        Command::List { all } => {
            workspace.refresh_link_index().context("Failed to read links")?;
            if all {
                print_candidates(&workspace.state().candidates);
            } else {
                print_candidates(workspace.page());
            }
        }
        Command::Links => {
            let index = workspace.refresh_link_index().context("Failed to read links")?;
            print_links(index);
        }
        Command::Link { keywords } => {
            workspace.classify().context("Failed to scan vault")?;
            select_all(&mut workspace, &keywords, false)?;
            let report = workspace
                .link_selected(print_progress)
                .context("Failed to link keywords")?;
            print_report("Linking", &report);
        }
        Command::Unlink { keywords } => {
            let report = workspace
                .unlink(&keywords, print_progress)
                .context("Failed to unlink keywords")?;
            print_report("Unlinking", &report);
        }
        Command::Ignore { keywords } => {
            workspace.classify().context("Failed to scan vault")?;
            select_all(&mut workspace, &keywords, false)?;
            let moved = workspace.ignore_selected().context("Failed to ignore keywords")?;
            println!("Ignored: {}", moved.join(", "));
        }
        Command::Unignore { keywords } => {
            select_all(&mut workspace, &keywords, true)?;
            let moved = workspace
                .unignore_selected()
                .context("Failed to unignore keywords")?;
            println!("No longer ignored: {}", moved.join(", "));
        }
        Command::Ignored => {
            print_candidates(&workspace.state().ignored);
        }
        Command::Config { exclude, page_size } => {
            if exclude.is_some() || page_size.is_some() {
                workspace
                    .configure(exclude, page_size)
                    .context("Failed to apply settings")?;
            }
            let state = workspace.state();
            println!("exclusionPath = {:?}", state.exclusion_path);
            println!("pageSize = {}", state.page_size);
        }
    }

    Ok(())
}

fn select_all<S: DocumentStore>(
    workspace: &mut Workspace<S>,
    keywords: &[String],
    ignored: bool,
) -> Result<()> {
    for keyword in keywords {
        let selected = if ignored {
            workspace.select_ignored(keyword, true).map(|_| ())
        } else {
            workspace.select(keyword, true).map(|_| ())
        };
        if selected.is_err() {
            let list = if ignored { "ignored keyword" } else { "current candidate" };
            bail!("`{keyword}` is not a {list}");
        }
    }
    Ok(())
}
