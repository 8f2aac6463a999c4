use std::path::PathBuf;

use clap::{Parser, Subcommand};
use taskdeck_core::{JsonTaskStore, TaskFilter, TaskStatus};

mod commands;
mod interactive;

use commands::run_command;
use interactive::run_menu;

#[derive(Parser, Debug)]
#[command(name = "taskdeck", version = "0.1.0")]
#[command(about = "Taskdeck - personal task tracking backed by a local JSON file")]
struct Cli {
    /// Task file to use (overrides the TASKDECK_FILE variable)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Without a subcommand the interactive menu starts
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a new task
    Add {
        /// Task title
        title: String,
        /// Task description
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Rewrite the title and description of an existing task
    Update {
        /// Id of the task to change
        id: u64,
        /// New title
        title: String,
        /// New description
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Delete a task
    Delete {
        /// Id of the task to delete
        id: u64,
    },
    /// Move a task to another status
    Mark {
        /// Id of the task to move
        id: u64,
        /// Target status (todo, in_progress, done)
        status: TaskStatus,
    },
    /// List tasks, narrowed by an optional filter
    List {
        /// Which tasks to show (all, done, not_done, in_progress)
        #[arg(long, default_value_t = TaskFilter::All)]
        filter: TaskFilter,
    },
}

/// Resolve the task file location: `--file` flag first, then the
/// `TASKDECK_FILE` variable, then `tasks.json` in the working directory.
fn task_file_path(flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(|| {
        std::env::var("TASKDECK_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("tasks.json"))
    })
}

fn main() {
    // Keep store diagnostics on stderr and quiet by default.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env();
    let env_filter = match "warn".parse() {
        Ok(directive) => env_filter.add_directive(directive),
        Err(_) => env_filter, // fallback to default if parsing fails
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    let mut store = JsonTaskStore::new(task_file_path(cli.file));

    let result = match cli.command {
        Some(command) => run_command(command, &mut store),
        None => run_menu(&mut store),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        tracing::error!(error = %e, "Task command failed");
        std::process::exit(1);
    }
}
