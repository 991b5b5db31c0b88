use clap::Parser;
use colored::*;
use std::path::PathBuf;

use quilt::dates;
use quilt::editor;
use quilt::error::Result;
use quilt::journal::{self, InvalidNotePolicy};
use quilt::model::Note;
use quilt::notebook::{Notebook, NotebookEnv, Resolution};
use quilt::todos;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => handle_init(),
        Commands::Journal { date } => handle_journal(&date),
        Commands::View { date } => handle_view(&date),
        Commands::Range { start, end } => handle_range(&start, &end),
        Commands::Path { date } => handle_path(&date),
        Commands::Todos => handle_todos(),
    }
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn resolve_notebook() -> Result<Notebook> {
    let Resolution { notebook, warnings } =
        Notebook::resolve(&current_dir(), &NotebookEnv::from_process())?;
    print_warnings(&warnings);
    Ok(notebook)
}

fn handle_init() -> Result<()> {
    let notebook = Notebook::init(&current_dir())?;
    println!(
        "{}",
        format!(
            "Initialized quilt notebook at {}",
            notebook.root().display()
        )
        .green()
    );
    Ok(())
}

fn handle_journal(date: &str) -> Result<()> {
    let notebook = resolve_notebook()?;
    let day = dates::parse_date_arg(date, dates::today())?;
    let path = journal::ensure_entry(&notebook, day)?;
    editor::open_in_editor(&path)
}

fn handle_view(date: &str) -> Result<()> {
    let notebook = resolve_notebook()?;
    let day = dates::parse_date_arg(date, dates::today())?;

    match journal::load_entry(&notebook, day)? {
        Some(decoded) => {
            print_warnings(&decoded.warnings);
            print_note(&decoded.note);
        }
        None => println!("{}", format!("No journal entry for {day}.").dimmed()),
    }
    Ok(())
}

fn handle_range(start: &str, end: &str) -> Result<()> {
    let notebook = resolve_notebook()?;
    let today = dates::today();
    let start = dates::parse_date_arg(start, today)?;
    let end = dates::parse_date_arg(end, today)?;

    let outcome = journal::entries_in_range(&notebook, start, end, InvalidNotePolicy::SkipAndWarn)?;
    print_warnings(&outcome.warnings);

    if outcome.notes.is_empty() {
        println!("{}", "No journal entries in range.".dimmed());
        return Ok(());
    }
    for (i, note) in outcome.notes.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_note(note);
    }
    Ok(())
}

fn handle_path(date: &str) -> Result<()> {
    let notebook = resolve_notebook()?;
    let day = dates::parse_date_arg(date, dates::today())?;
    println!("{}", journal::entry_path(&notebook, day).display());
    Ok(())
}

fn handle_todos() -> Result<()> {
    let notebook = resolve_notebook()?;
    let index = todos::load_index(&notebook)?;
    print_warnings(&index.warnings);

    if index.todos.is_empty() {
        println!("{}", "No todos.".dimmed());
        return Ok(());
    }
    for todo in &index.todos {
        println!("- {}{}", todo.title, format_tags(todo).cyan());
    }
    Ok(())
}

fn print_note(note: &Note) {
    let date = note
        .created_at
        .map(|d| d.to_string())
        .unwrap_or_default();
    println!("{} {}", date.yellow(), note.title.bold());
    for todo in &note.todos {
        println!("  [ ] {}{}", todo.title, format_tags(todo).cyan());
    }
}

fn format_tags(todo: &quilt::model::Todo) -> String {
    todo.tags
        .iter()
        .map(|t| format!(" +{}", t.name))
        .collect()
}

fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("{}", format!("Warning: {warning}").yellow());
    }
}
