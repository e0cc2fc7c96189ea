use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use lit::Repository;
use lit::commands::porcelain::log::LogOptions;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "LIT_LOG";

#[derive(Parser)]
#[command(
    name = "lit",
    version = "0.1.0",
    about = "A minimal content-addressed version control system",
    long_about = "lit tracks snapshots of a working directory in a local object store. \
    Files are staged into an index, committed as trees, and branches are plain \
    references to commits.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "add",
        about = "Stage changes for the next commit",
        long_about = "This command stages new, modified and deleted files under the given path. \
        Use '.' to stage everything."
    )]
    Add {
        #[arg(index = 1, help = "The file or directory to stage")]
        path: String,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command creates a new commit from the staged snapshot with the specified commit message."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "status",
        about = "Show the working tree status",
        long_about = "This command lists staged, unstaged and untracked changes."
    )]
    Status {
        #[arg(long, help = "Print one machine-readable line per path")]
        porcelain: bool,
    },
    #[command(
        name = "log",
        about = "Show the commit history",
        long_about = "This command lists every commit reachable from HEAD, newest first."
    )]
    Log {
        #[arg(long, help = "Print one line per commit")]
        oneline: bool,
    },
    #[command(
        name = "branch",
        about = "List, create or delete branches",
        long_about = "Without a name this command lists branches. With a name it creates a branch \
        at the current commit, or deletes it when --delete is given."
    )]
    Branch {
        #[arg(index = 1, help = "The branch name")]
        name: Option<String>,
        #[arg(short, long, requires = "name", help = "Delete the branch")]
        delete: bool,
    },
    #[command(
        name = "checkout",
        about = "Switch branches or check out a commit",
        long_about = "This command moves HEAD to a branch or commit and updates the working tree and index. \
        It refuses to run while there are uncommitted changes."
    )]
    Checkout {
        #[arg(index = 1, help = "The branch name or commit hash prefix")]
        target: String,
        #[arg(long, help = "Detach HEAD at the target commit")]
        detach: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_repository(path: &Path) -> Result<Repository> {
    Ok(Repository::new(path, Box::new(std::io::stdout()))?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();
    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let pwd = std::env::current_dir()?;

    match &cli.command {
        Commands::Init { path } => {
            let repository = open_repository(path.as_deref().unwrap_or(&pwd))?;
            repository.init()?
        }
        Commands::Add { path } => open_repository(&pwd)?.add(path)?,
        Commands::Commit { message } => open_repository(&pwd)?.commit(message)?,
        Commands::Status { porcelain } => open_repository(&pwd)?.status(*porcelain)?,
        Commands::Log { oneline } => {
            let opts = LogOptions { oneline: *oneline };
            open_repository(&pwd)?.log(&opts)?
        }
        Commands::Branch { name, delete } => {
            open_repository(&pwd)?.branch(name.as_deref(), *delete)?
        }
        Commands::Checkout { target, detach } => {
            open_repository(&pwd)?.checkout(target, *detach)?
        }
    }

    Ok(())
}
