use std::path::Path;

use anyhow::Result;
use chrono::{Datelike, Local, NaiveTime};
use clap::{Parser, Subcommand};
use uuid::Uuid;

use crate::models::{Lesson, LessonUpdate, Weekday};
use crate::planner::Planner;
use crate::store::{FsStore, RecordStore};
use crate::tui;
use crate::utils::{
    data_dir, format_clock, format_duration_human, format_path_with_tilde, parse_time_of_day,
};

#[derive(Parser)]
#[command(name = "studybook")]
#[command(version = "0.1.0")]
#[command(about = "Plan lessons, track tasks, and time study sessions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the weekly lesson schedule
    Lesson {
        #[command(subcommand)]
        command: LessonCmd,
    },
    /// Manage the to-do list
    Task {
        #[command(subcommand)]
        command: TaskCmd,
    },
    /// Open the interactive study timer
    Study,
    /// Show recorded study sessions, newest first
    History {
        /// Show only the most recent N sessions
        #[arg(long)]
        limit: Option<usize>,
        #[command(subcommand)]
        command: Option<HistoryCmd>,
    },
    /// Show statistics about lessons, tasks, and study time
    Stats,
}

#[derive(Subcommand)]
pub enum LessonCmd {
    /// Add a lesson to the schedule
    Add {
        /// Lesson title
        title: String,
        /// Day of the week
        #[arg(long, value_enum)]
        day: Weekday,
        /// Start time, HH:MM
        #[arg(long, value_parser = parse_time_of_day)]
        time: NaiveTime,
        /// Instructor name
        #[arg(long, default_value = "")]
        instructor: String,
        /// Room or location
        #[arg(long, default_value = "")]
        room: String,
    },
    /// List the week's schedule
    List,
    /// Change fields of an existing lesson
    Edit {
        /// Lesson id or unique prefix
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        instructor: Option<String>,
        #[arg(long)]
        room: Option<String>,
        #[arg(long, value_enum)]
        day: Option<Weekday>,
        #[arg(long, value_parser = parse_time_of_day)]
        time: Option<NaiveTime>,
    },
    /// Remove a lesson from the schedule
    Remove {
        /// Lesson id or unique prefix
        id: String,
    },
}

#[derive(Subcommand)]
pub enum TaskCmd {
    /// Add a task to the list
    Add {
        /// Task title
        title: String,
    },
    /// List tasks
    List {
        /// Show only completed tasks
        #[arg(long, conflicts_with = "pending")]
        completed: bool,
        /// Show only pending tasks
        #[arg(long)]
        pending: bool,
    },
    /// Flip a task between pending and completed
    Toggle {
        /// Task id or unique prefix
        id: String,
    },
    /// Remove a task from the list
    Remove {
        /// Task id or unique prefix
        id: String,
    },
}

#[derive(Subcommand)]
pub enum HistoryCmd {
    /// Remove one recorded session
    Remove {
        /// Session id or unique prefix
        id: String,
    },
    /// Remove the whole session history
    Clear,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let dir = data_dir()?;
    let planner = Planner::new(FsStore::open(&dir)?);

    match cli.command {
        Some(Commands::Lesson { command }) => run_lesson(&planner, command),
        Some(Commands::Task { command }) => run_task(&planner, command),
        Some(Commands::Study) => tui::run_study_screen(&planner),
        Some(Commands::History { limit, command }) => match command {
            Some(HistoryCmd::Remove { id }) => {
                let removed = planner.remove_session(&id)?;
                println!(
                    "Removed session from {} ({})",
                    removed.start_time.format("%Y-%m-%d %H:%M"),
                    format_duration_human(removed.duration_secs)
                );
                Ok(())
            }
            Some(HistoryCmd::Clear) => {
                let count = planner.clear_sessions()?;
                if count == 0 {
                    println!("No study sessions to remove.");
                } else {
                    println!("Removed {} {}.", count, plural(count, "session"));
                }
                Ok(())
            }
            None => show_history(&planner, limit),
        },
        Some(Commands::Stats) => show_stats(&planner, &dir),
        None => show_overview(&planner),
    }
}

fn run_lesson<S: RecordStore>(planner: &Planner<S>, command: LessonCmd) -> Result<()> {
    match command {
        LessonCmd::Add { title, day, time, instructor, room } => {
            let lesson = planner.add_lesson(&title, &instructor, &room, day, time)?;
            println!(
                "Added \"{}\" on {} at {} [{}]",
                lesson.title,
                lesson.day,
                lesson.time.format("%H:%M"),
                short_id(&lesson.id)
            );
        }
        LessonCmd::List => {
            let week = planner.week_schedule();
            if week.is_empty() {
                println!("No lessons scheduled. Add one with 'studybook lesson add'.");
                return Ok(());
            }
            for (day, lessons) in week {
                println!("{day}");
                for lesson in lessons {
                    println!(
                        "  {}  {}  [{}]",
                        lesson.time.format("%H:%M"),
                        describe_lesson(&lesson),
                        short_id(&lesson.id)
                    );
                }
            }
        }
        LessonCmd::Edit { id, title, instructor, room, day, time } => {
            let update = LessonUpdate { title, instructor, room, day, time };
            let lesson = planner.edit_lesson(&id, update)?;
            println!(
                "Updated \"{}\": {} at {} [{}]",
                lesson.title,
                lesson.day,
                lesson.time.format("%H:%M"),
                short_id(&lesson.id)
            );
        }
        LessonCmd::Remove { id } => {
            let removed = planner.remove_lesson(&id)?;
            println!("Removed \"{}\" from {}", removed.title, removed.day);
        }
    }
    Ok(())
}

fn run_task<S: RecordStore>(planner: &Planner<S>, command: TaskCmd) -> Result<()> {
    match command {
        TaskCmd::Add { title } => {
            let task = planner.add_task(&title)?;
            println!("Added task \"{}\" [{}]", task.title, short_id(&task.id));
        }
        TaskCmd::List { completed, pending } => {
            let tasks = planner.tasks();
            let shown: Vec<_> = tasks
                .iter()
                .filter(|task| {
                    if completed {
                        task.is_completed
                    } else if pending {
                        !task.is_completed
                    } else {
                        true
                    }
                })
                .collect();

            if shown.is_empty() {
                if completed {
                    println!("No completed tasks.");
                } else if pending {
                    println!("No pending tasks.");
                } else {
                    println!("No tasks yet. Add one with 'studybook task add'.");
                }
                return Ok(());
            }
            for task in shown {
                let mark = if task.is_completed { "x" } else { " " };
                println!("[{}] {}  [{}]", mark, task.title, short_id(&task.id));
            }
        }
        TaskCmd::Toggle { id } => {
            let task = planner.toggle_task(&id)?;
            if task.is_completed {
                println!("Completed \"{}\"", task.title);
            } else {
                println!("Reopened \"{}\"", task.title);
            }
        }
        TaskCmd::Remove { id } => {
            let removed = planner.remove_task(&id)?;
            println!("Removed task \"{}\"", removed.title);
        }
    }
    Ok(())
}

fn show_history<S: RecordStore>(planner: &Planner<S>, limit: Option<usize>) -> Result<()> {
    let sessions = planner.sessions();
    if sessions.is_empty() {
        println!("No study sessions recorded yet.");
        return Ok(());
    }

    let total_secs: u64 = sessions.iter().map(|session| session.duration_secs).sum();
    let count = sessions.len();

    // Stored order is oldest first; show the most recent at the top.
    let shown = limit.unwrap_or(count);
    for session in sessions.iter().rev().take(shown) {
        println!(
            "{}  {}  [{}]",
            session.start_time.format("%Y-%m-%d %H:%M"),
            format_clock(session.duration_secs),
            short_id(&session.id)
        );
    }

    println!();
    println!("{} {}, {} total", count, plural(count, "session"), format_duration_human(total_secs));
    Ok(())
}

fn show_stats<S: RecordStore>(planner: &Planner<S>, data_dir: &Path) -> Result<()> {
    let sessions = planner.sessions();
    let tasks = planner.tasks();
    let lessons = planner.lessons();

    let total_secs: u64 = sessions.iter().map(|session| session.duration_secs).sum();
    let longest = sessions.iter().map(|session| session.duration_secs).max().unwrap_or(0);
    let completed = tasks.iter().filter(|task| task.is_completed).count();

    println!("Study Statistics");
    println!("================");
    println!("Sessions recorded: {}", sessions.len());
    println!("Total study time: {}", format_duration_human(total_secs));
    if !sessions.is_empty() {
        let average = total_secs / sessions.len() as u64;
        println!("Average session: {}", format_duration_human(average));
    }
    if longest > 0 {
        println!("Longest session: {}", format_duration_human(longest));
    }
    println!(
        "Tasks: {} total ({} completed, {} pending)",
        tasks.len(),
        completed,
        tasks.len() - completed
    );
    println!("Lessons scheduled: {}", lessons.len());
    println!();
    println!("Data directory: {}", format_path_with_tilde(data_dir));

    Ok(())
}

fn show_overview<S: RecordStore>(planner: &Planner<S>) -> Result<()> {
    let today = Weekday::from(Local::now().weekday());
    println!("Today is {today}.");

    let lessons = planner.lessons_on(today);
    if lessons.is_empty() {
        println!("No lessons today.");
    } else {
        for lesson in &lessons {
            println!("  {}  {}", lesson.time.format("%H:%M"), describe_lesson(lesson));
        }
    }

    let tasks = planner.tasks();
    let completed = tasks.iter().filter(|task| task.is_completed).count();
    println!("Tasks: {} pending, {} completed", tasks.len() - completed, completed);

    let sessions = planner.sessions();
    if sessions.is_empty() {
        println!("No study sessions recorded yet.");
    } else {
        let total_secs: u64 = sessions.iter().map(|session| session.duration_secs).sum();
        println!(
            "Study time: {} across {} {}",
            format_duration_human(total_secs),
            sessions.len(),
            plural(sessions.len(), "session")
        );
    }

    Ok(())
}

/// "Algebra (Dr. Noether, room 201)", parens trimmed to the fields present.
fn describe_lesson(lesson: &Lesson) -> String {
    match (lesson.instructor.is_empty(), lesson.room.is_empty()) {
        (false, false) => {
            format!("{} ({}, room {})", lesson.title, lesson.instructor, lesson.room)
        }
        (false, true) => format!("{} ({})", lesson.title, lesson.instructor),
        (true, false) => format!("{} (room {})", lesson.title, lesson.room),
        (true, true) => lesson.title.clone(),
    }
}

/// First 8 hex characters, the form listings show and lookups accept.
fn short_id(id: &Uuid) -> String {
    id.to_string()[..8].to_string()
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 { noun.to_string() } else { format!("{noun}s") }
}
