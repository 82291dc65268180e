use clap::{CommandFactory, Parser, Subcommand};
use repo_switcher::commands::*;
use repo_switcher::core::{context::AppContext, error::Result, print_error, Config};
use std::env;

#[derive(Parser)]
#[command(name = "repo-switcher")]
#[command(about = "Jump to a local git repository by short name")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Repository short name to resolve
    name: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rescan all configured paths and rebuild the repository cache
    Refresh,
    /// Print known repository names, one per line (completion candidates)
    #[command(hide = true)]
    List,
    /// Generate a shell completion script
    Completions {
        /// Shell to generate the script for
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            execute_completions(shell, &mut cmd)
        }
        Some(Commands::Refresh) => {
            let config = Config::load_or_create()?;
            execute_refresh(&config)
        }
        Some(Commands::List) => {
            let config = Config::load_or_create()?;
            let ctx = AppContext::load(&config)?;
            execute_list(&ctx)
        }
        None => match cli.name {
            Some(name) => {
                let config = Config::load_or_create()?;
                let ctx = AppContext::load(&config)?;
                execute_switch(&ctx, &name)
            }
            None => {
                Cli::command().print_help()?;
                std::process::exit(2);
            }
        },
    }
}
