//! Interactive menu mode, started when no subcommand is given.

use std::io::{self, Write};

use taskdeck_core::{StoreResult, TaskFilter, TaskStatus, TaskStore};

/// Read one line of input after showing a prompt. `None` means the
/// input stream is gone (EOF or a read failure), so the caller should
/// wind down instead of asking again.
fn prompt(label: &str) -> Option<String> {
    print!("{label}");
    if let Err(e) = io::stdout().flush() {
        tracing::error!(error = %e, "Failed to flush stdout");
    }

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => None, // EOF reached
        Ok(_) => Some(input.trim().to_string()),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read user input");
            None
        }
    }
}

/// Ask for a task id. Rejects non-numeric input with a message and
/// sends the user back to the menu.
fn prompt_id(label: &str) -> Option<u64> {
    let input = prompt(label)?;
    match input.parse() {
        Ok(id) => Some(id),
        Err(_) => {
            println!("❌ Invalid id!");
            None
        }
    }
}

fn status_from_choice(choice: &str) -> Option<TaskStatus> {
    match choice {
        "1" => Some(TaskStatus::Todo),
        "2" => Some(TaskStatus::InProgress),
        "3" => Some(TaskStatus::Done),
        _ => None,
    }
}

fn filter_from_choice(choice: &str) -> Option<TaskFilter> {
    match choice {
        "1" => Some(TaskFilter::All),
        "2" => Some(TaskFilter::Done),
        "3" => Some(TaskFilter::NotDone),
        "4" => Some(TaskFilter::InProgress),
        _ => None,
    }
}

pub fn run_menu(store: &mut dyn TaskStore) -> StoreResult<()> {
    println!("📋 Taskdeck interactive mode");
    println!("{}", "─".repeat(50));

    loop {
        println!();
        println!("Choose an action:");
        println!("1. Add task");
        println!("2. Update task");
        println!("3. Delete task");
        println!("4. Change task status");
        println!("5. List tasks");
        println!("6. Exit");

        let Some(choice) = prompt("Enter action number: ") else {
            println!("\nGoodbye! 👋");
            break;
        };

        match choice.as_str() {
            "1" => menu_add(store)?,
            "2" => menu_update(store)?,
            "3" => menu_delete(store)?,
            "4" => menu_mark(store)?,
            "5" => menu_list(store)?,
            "6" => {
                println!("Goodbye! 👋");
                break;
            }
            "" => continue,
            _ => println!("❌ Invalid choice, try again."),
        }
    }

    Ok(())
}

fn menu_add(store: &mut dyn TaskStore) -> StoreResult<()> {
    let Some(title) = prompt("Task title: ") else {
        return Ok(());
    };
    let Some(description) = prompt("Task description (may be empty): ") else {
        return Ok(());
    };

    let task = store.add(&title, &description)?;
    println!("✅ Task added:");
    println!("{task}");
    Ok(())
}

fn menu_update(store: &mut dyn TaskStore) -> StoreResult<()> {
    let Some(id) = prompt_id("Id of the task to update: ") else {
        return Ok(());
    };
    let Some(title) = prompt("New title: ") else {
        return Ok(());
    };
    let Some(description) = prompt("New description (may be empty): ") else {
        return Ok(());
    };

    if store.update(id, &title, &description)? {
        println!("✅ Task updated!");
    } else {
        println!("❌ No task with that id.");
    }
    Ok(())
}

fn menu_delete(store: &mut dyn TaskStore) -> StoreResult<()> {
    let Some(id) = prompt_id("Id of the task to delete: ") else {
        return Ok(());
    };

    if store.delete(id)? {
        println!("✅ Task deleted!");
    } else {
        println!("❌ No task with that id.");
    }
    Ok(())
}

fn menu_mark(store: &mut dyn TaskStore) -> StoreResult<()> {
    let Some(id) = prompt_id("Id of the task to change: ") else {
        return Ok(());
    };

    println!("Choose the new status:");
    println!("1. todo");
    println!("2. in_progress");
    println!("3. done");
    let Some(choice) = prompt("Enter status number: ") else {
        return Ok(());
    };
    let Some(status) = status_from_choice(&choice) else {
        println!("❌ Invalid status choice!");
        return Ok(());
    };

    if store.set_status(id, status)? {
        println!("✅ Task {id} moved to '{status}'.");
    } else {
        println!("❌ No task with that id.");
    }
    Ok(())
}

fn menu_list(store: &mut dyn TaskStore) -> StoreResult<()> {
    println!("Choose a filter:");
    println!("1. All tasks");
    println!("2. Completed tasks (done)");
    println!("3. Tasks not completed (not_done)");
    println!("4. Tasks in progress (in_progress)");
    let Some(choice) = prompt("Enter filter number: ") else {
        return Ok(());
    };
    let Some(filter) = filter_from_choice(&choice) else {
        println!("❌ Invalid filter choice!");
        return Ok(());
    };

    let tasks = store.list(filter)?;
    if tasks.is_empty() {
        println!("No tasks for the chosen filter.");
    } else {
        println!("\nTasks:");
        for task in tasks {
            println!("{task}");
        }
    }
    Ok(())
}
