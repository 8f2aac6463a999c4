//! Single-shot subcommand execution against the task store.

use taskdeck_core::{StoreResult, TaskStore};

use crate::Commands;

pub fn run_command(command: Commands, store: &mut dyn TaskStore) -> StoreResult<()> {
    match command {
        Commands::Add { title, description } => {
            let task = store.add(&title, &description)?;
            println!("✅ Task added:");
            println!("{task}");
        }
        Commands::Update {
            id,
            title,
            description,
        } => {
            if store.update(id, &title, &description)? {
                println!("✅ Task {id} updated.");
            } else {
                println!("❌ No task with id {id}.");
            }
        }
        Commands::Delete { id } => {
            if store.delete(id)? {
                println!("✅ Task {id} deleted.");
            } else {
                println!("❌ No task with id {id}.");
            }
        }
        Commands::Mark { id, status } => {
            if store.set_status(id, status)? {
                println!("✅ Task {id} moved to '{status}'.");
            } else {
                println!("❌ No task with id {id}.");
            }
        }
        Commands::List { filter } => {
            let tasks = store.list(filter)?;
            if tasks.is_empty() {
                println!("No tasks found for filter '{filter}'.");
            } else {
                println!("Tasks:");
                for task in tasks {
                    println!("{task}");
                }
            }
        }
    }
    Ok(())
}
