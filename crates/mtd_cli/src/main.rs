//! Command-line entry point.
//!
//! # Responsibility
//! - Wire the core services to a tasks directory and dispatch argv
//!   subcommands.
//! - Own the `<cwd>/tasks` default; the core never reads process state.

use mtd_core::{
    CreateTaskRequest, FsProjectRepository, FsTaskRepository, ProjectService, TaskService,
};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "usage: mtd <command>

commands:
  init                     create the tasks directory
  add <title> [text]       create a task
  list                     list all tasks
  done <slug>              mark a task done
  undone <slug>            mark a task not done
  delete <slug>            delete a task";

fn main() -> ExitCode {
    if let Ok(log_dir) = env::var("MTD_LOG_DIR") {
        if let Err(err) = mtd_core::init_logging(mtd_core::default_log_level(), &log_dir) {
            eprintln!("warning: {err}");
        }
    }

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let tasks_dir = default_tasks_dir()?;

    match args.first().map(String::as_str) {
        Some("init") => cmd_init(tasks_dir),
        Some("add") => cmd_add(tasks_dir, &args[1..]),
        Some("list") => cmd_list(tasks_dir),
        Some("done") => cmd_set_done(tasks_dir, &args[1..], true),
        Some("undone") => cmd_set_done(tasks_dir, &args[1..], false),
        Some("delete") => cmd_delete(tasks_dir, &args[1..]),
        Some(other) => Err(format!("unknown command `{other}`\n{USAGE}")),
        None => Err(USAGE.to_string()),
    }
}

fn default_tasks_dir() -> Result<PathBuf, String> {
    let cwd = env::current_dir().map_err(|err| format!("cannot determine working directory: {err}"))?;
    Ok(cwd.join("tasks"))
}

fn task_service(tasks_dir: PathBuf) -> TaskService<FsTaskRepository> {
    TaskService::new(FsTaskRepository::new(tasks_dir))
}

fn cmd_init(tasks_dir: PathBuf) -> Result<(), String> {
    let service = ProjectService::new(FsProjectRepository::new(tasks_dir));
    let result = service.initialize().map_err(|err| err.to_string())?;
    if result.created {
        println!("Initialized tasks directory at {}", result.tasks_dir.display());
    } else {
        println!(
            "Tasks directory already exists at {}",
            result.tasks_dir.display()
        );
    }
    Ok(())
}

fn cmd_add(tasks_dir: PathBuf, args: &[String]) -> Result<(), String> {
    let title = args.first().ok_or("add requires a title\n".to_string() + USAGE)?;
    let description = args.get(1).cloned().unwrap_or_default();

    let created = task_service(tasks_dir)
        .create_task(CreateTaskRequest {
            title: title.clone(),
            description,
            id: None,
        })
        .map_err(|err| err.to_string())?;

    println!("Created task: {}", created.title);
    println!("File: {}.md", created.slug);
    Ok(())
}

fn cmd_list(tasks_dir: PathBuf) -> Result<(), String> {
    let mut tasks = task_service(tasks_dir)
        .list_tasks()
        .map_err(|err| err.to_string())?;
    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }

    // Directory order is unspecified; sort here for stable display.
    tasks.sort_by(|a, b| a.slug.cmp(&b.slug));
    for task in tasks {
        let marker = if task.is_done { "x" } else { " " };
        println!("[{marker}] {} - {}", task.slug, task.title);
    }
    Ok(())
}

fn cmd_set_done(tasks_dir: PathBuf, args: &[String], done: bool) -> Result<(), String> {
    let slug = args.first().ok_or("missing task slug\n".to_string() + USAGE)?;
    let service = task_service(tasks_dir);
    let updated = if done {
        service.set_task_done(slug)
    } else {
        service.set_task_undone(slug)
    }
    .map_err(|err| err.to_string())?;

    let state = if updated.is_done { "done" } else { "not done" };
    println!("Marked {} as {state}", updated.slug);
    Ok(())
}

fn cmd_delete(tasks_dir: PathBuf, args: &[String]) -> Result<(), String> {
    let slug = args.first().ok_or("missing task slug\n".to_string() + USAGE)?;
    let deleted = task_service(tasks_dir)
        .delete_task(slug)
        .map_err(|err| err.to_string())?;

    println!("Deleted task: {}", deleted.title);
    Ok(())
}
