//! CLI Adapter.

mod form;
mod selection_args;
mod wizard;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::adapters::ArboardClipboard;
use crate::app::{api, export};
use crate::domain::{AppError, Selections};

pub use selection_args::SelectionArgs;

#[derive(Parser)]
#[command(name = "promptmaster")]
#[command(version)]
#[command(
    about = "Build a structured prompt, refine it with Gemini and run it",
    long_about = None
)]
struct Cli {
    /// Path to config.toml (defaults to $PROMPTMASTER_HOME/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive wizard (default)
    #[clap(visible_alias = "w")]
    Wizard,
    /// Print the meta-prompt without calling the service
    #[clap(visible_alias = "p")]
    Preview {
        #[command(flatten)]
        selections: SelectionArgs,
    },
    /// Refine and execute a prompt in one go
    #[clap(visible_alias = "r")]
    Run {
        #[command(flatten)]
        selections: SelectionArgs,
        /// Stop after printing the refined prompt
        #[arg(long)]
        prompt_only: bool,
        /// Also write the result as markdown to this path
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
        /// Also copy the result to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Manage saved configurations
    #[clap(visible_alias = "c")]
    Configs {
        #[command(subcommand)]
        command: ConfigsCommands,
    },
}

#[derive(Subcommand)]
enum ConfigsCommands {
    /// List saved configurations, newest first
    #[clap(visible_alias = "ls")]
    List,
    /// Show a saved configuration as JSON
    Show {
        /// Configuration id or name
        id: String,
    },
    /// Delete a saved configuration
    #[clap(visible_alias = "rm")]
    Delete {
        /// Configuration id or name
        id: String,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let result: Result<(), AppError> = match cli.command.unwrap_or(Commands::Wizard) {
        Commands::Wizard => run_wizard(config),
        Commands::Preview { selections } => run_preview(config, selections),
        Commands::Run { selections, prompt_only, output, copy } => {
            run_once(config, selections, prompt_only, output, copy)
        }
        Commands::Configs { command } => match command {
            ConfigsCommands::List => run_configs_list(config),
            ConfigsCommands::Show { id } => run_configs_show(config, &id),
            ConfigsCommands::Delete { id } => run_configs_delete(config, &id),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_wizard(config: Option<&Path>) -> Result<(), AppError> {
    let mut controller = api::open_session(config)?;
    wizard::run(&mut controller)
}

fn resolve_selections(config: Option<&Path>, args: SelectionArgs) -> Result<Selections, AppError> {
    let base = match args.from.as_deref() {
        Some(id_or_name) => api::show_config(config, id_or_name)?.selections,
        None => Selections::default(),
    };
    args.apply(base)
}

fn run_preview(config: Option<&Path>, args: SelectionArgs) -> Result<(), AppError> {
    let selections = resolve_selections(config, args)?;
    let meta = api::preview(&selections)?;
    println!("--- System instruction ---\n{}\n", meta.system_instruction);
    println!("--- Request ---\n{}", meta.content);
    Ok(())
}

fn run_once(
    config: Option<&Path>,
    args: SelectionArgs,
    prompt_only: bool,
    output: Option<PathBuf>,
    copy: bool,
) -> Result<(), AppError> {
    let selections = resolve_selections(config, args)?;
    let outcome = api::run(config, api::RunOptions { selections, prompt_only })?;

    let Some(result) = outcome.result else {
        println!("{}", outcome.prompt);
        return Ok(());
    };
    println!("--- Prompt ---\n{}\n", outcome.prompt);
    println!("--- Result ---\n{}", result);

    if let Some(target) = output {
        match export::download_result(&target, &result) {
            Ok(path) => eprintln!("✅ Saved {}", path.display()),
            Err(err) => eprintln!("⚠️  {}", err),
        }
    }
    if copy {
        let copied = ArboardClipboard::new()
            .and_then(|mut clipboard| export::copy_result(&mut clipboard, &result));
        match copied {
            Ok(()) => eprintln!("✅ Copied to clipboard"),
            Err(err) => eprintln!("⚠️  {}", err),
        }
    }
    Ok(())
}

fn run_configs_list(config: Option<&Path>) -> Result<(), AppError> {
    let configs = api::list_configs(config)?;
    if configs.is_empty() {
        println!("No saved configurations.");
        return Ok(());
    }
    for saved in &configs {
        println!("{}  {}", saved.id, wizard::describe_config(saved));
    }
    Ok(())
}

fn run_configs_show(config: Option<&Path>, id: &str) -> Result<(), AppError> {
    let saved = api::show_config(config, id)?;
    println!("{}", serde_json::to_string_pretty(&saved)?);
    Ok(())
}

fn run_configs_delete(config: Option<&Path>, id: &str) -> Result<(), AppError> {
    let removed = api::delete_config(config, id)?;
    println!("✅ Deleted '{}' ({})", removed.name, removed.id);
    Ok(())
}
