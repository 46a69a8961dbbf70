//! Taskdeck - Main Entry Point
//!
//! Command-line front end over a file-backed task board.
//! The actual implementation is in the `taskdeck` library.

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use taskdeck::{Config, FileStore, NewTask, TaskBoard, formatting, validation};
use tracing_subscriber::EnvFilter;

/// Taskdeck - tasks, recurring tasks and a calendar from the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the task file (overrides the configuration)
    #[arg(long)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List tasks: overdue first, then upcoming, then undated
    List,
    /// Show the next incomplete task due from today on
    Next,
    /// Add a task
    Add {
        /// Task title
        title: String,
        /// Priority: low/medium/high
        #[arg(long, default_value = "medium")]
        priority: String,
        /// Due date YYYY-MM-DD; for recurring tasks, the first occurrence
        #[arg(long)]
        due: Option<String>,
        /// Duration in hours (e.g. 1.5)
        #[arg(long)]
        duration: Option<String>,
        /// Repeat monthly on the weekday pattern of the due date
        #[arg(long)]
        recurring: bool,
    },
    /// Mark a task completed, or open again
    Toggle {
        /// Task ID
        id: String,
    },
    /// Edit a task. Use "" to clear the due date or duration
    Edit {
        /// Task ID
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        duration: Option<String>,
        /// true/false
        #[arg(long)]
        recurring: Option<bool>,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
    /// Show a month, or the tasks of a single day
    Calendar {
        /// Month YYYY-MM (default: current month)
        #[arg(long)]
        month: Option<String>,
        /// Day YYYY-MM-DD to list in detail
        #[arg(long)]
        day: Option<String>,
    },
    /// Manage the deliverables of a task
    Deliverable {
        #[command(subcommand)]
        action: DeliverableCommand,
    },
}

#[derive(Subcommand, Debug)]
enum DeliverableCommand {
    /// Append a deliverable
    Add { task: String, title: String },
    /// Flip a deliverable between open and done
    Toggle { task: String, id: String },
    /// Remove a deliverable
    Remove { task: String, id: String },
}

fn print_help_and_exit() -> ! {
    let mut cmd = Args::command();
    cmd.print_help().ok();
    println!(); // Add a newline after help
    std::process::exit(2);
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        print_help_and_exit();
    }

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(file) = args.file {
        config.data_file = file;
    }
    init_tracing(&config.log_filter);

    let Some(command) = args.command else {
        print_help_and_exit();
    };

    let store = FileStore::new(&config.data_file);
    let mut board = TaskBoard::open(store)
        .await
        .with_context(|| format!("Failed to load tasks from {}", config.data_file.display()))?;

    let output = run(&mut board, command).await?;
    println!("{}", output.trim_end());
    Ok(())
}

async fn run(board: &mut TaskBoard<FileStore>, command: Command) -> Result<String> {
    match command {
        Command::List => {
            let next = board.next_due_task_id();
            Ok(formatting::format_tasks(&board.ordered_tasks(), next))
        }

        Command::Next => Ok(match board.next_due_task_id().and_then(|id| board.find(id)) {
            Some(task) => formatting::format_task(task, true),
            None => "No upcoming tasks".to_string(),
        }),

        Command::Add {
            title,
            priority,
            due,
            duration,
            recurring,
        } => {
            let new_task = NewTask {
                title,
                priority: validation::parse_priority(&priority)?,
                due_date: match due {
                    Some(ref d) => validation::parse_date_input(d)?,
                    None => None,
                },
                duration: match duration {
                    Some(ref h) => validation::parse_duration_input(h)?,
                    None => None,
                },
                is_recurring: recurring,
            };
            let task = board.add_task(new_task).await?;
            Ok(format!(
                "Task created with ID: {}\n{}",
                task.id,
                formatting::format_task(&task, false)
            ))
        }

        Command::Toggle { id } => {
            let id = validation::parse_task_id(&id)?;
            let outcome = board.toggle_task(id).await?;
            let state = if outcome.task.completed {
                "completed"
            } else {
                "open"
            };
            let mut response = format!("Task #{} marked {}\n", id, state);
            if let Some(next) = outcome.successor {
                response.push_str(&format!(
                    "Next occurrence created: #{} on {}\n",
                    next.id,
                    next.due_date.map(|d| d.to_string()).unwrap_or_default()
                ));
            }
            if let Some(e) = outcome.successor_error {
                response.push_str(&format!(
                    "Warning: next occurrence was not created ({}). Toggle the task off and on again to retry.\n",
                    e
                ));
            }
            Ok(response)
        }

        Command::Edit {
            id,
            title,
            priority,
            due,
            duration,
            recurring,
        } => {
            let id = validation::parse_task_id(&id)?;
            let mut editor = board.editor(id)?;
            if let Some(title) = title {
                editor.title = title;
            }
            if let Some(ref priority) = priority {
                editor.priority = validation::parse_priority(priority)?;
            }
            if let Some(due) = due {
                editor.due_date = due;
            }
            if let Some(duration) = duration {
                editor.duration = duration;
            }
            if let Some(recurring) = recurring {
                editor.is_recurring = recurring;
            }

            Ok(match board.save_edits(id, &editor).await? {
                Some(task) => format!("Task updated\n{}", formatting::format_task(&task, false)),
                None => format!("No changes for task #{}", id),
            })
        }

        Command::Delete { id } => {
            let id = validation::parse_task_id(&id)?;
            board.delete_task(id).await?;
            Ok(format!("Task #{} deleted", id))
        }

        Command::Calendar { month, day } => {
            let today = board.today();
            if let Some(ref day) = day {
                let Some(date) = validation::parse_date_input(day)? else {
                    anyhow::bail!("--day requires a date in YYYY-MM-DD format");
                };
                let calendar = board.calendar(date.year(), date.month());
                return Ok(formatting::format_day(&calendar, date));
            }

            let (year, month) = match month {
                Some(ref m) => validation::parse_month_input(m)?,
                None => (today.year(), today.month()),
            };
            let calendar = board.calendar(year, month);
            Ok(formatting::format_calendar(&calendar, today))
        }

        Command::Deliverable { action } => match action {
            DeliverableCommand::Add { task, title } => {
                let task_id = validation::parse_task_id(&task)?;
                let deliverable = board.add_deliverable(task_id, &title).await?;
                Ok(format!(
                    "Deliverable added to task #{}: {} ({})",
                    task_id, deliverable.title, deliverable.id
                ))
            }
            DeliverableCommand::Toggle { task, id } => {
                let task_id = validation::parse_task_id(&task)?;
                board.toggle_deliverable(task_id, &id).await?;
                Ok(format!("Deliverable {} toggled on task #{}", id, task_id))
            }
            DeliverableCommand::Remove { task, id } => {
                let task_id = validation::parse_task_id(&task)?;
                board.remove_deliverable(task_id, &id).await?;
                Ok(format!("Deliverable {} removed from task #{}", id, task_id))
            }
        },
    }
}
