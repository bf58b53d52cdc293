//! Line-oriented board driver.
//!
//! # Responsibility
//! - Read board commands from stdin and print the board after each change.
//! - Resolve configuration and logging from the environment at startup.

use log::{info, warn};
use projboard_core::{
    core_version, init_logging, BoardConfig, IdLookup, ProjectBoard, ProjectStatus,
};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

const HELP: &str = "commands:
  add <title> | <description> | <people>
  move <id-prefix> <active|finished>
  finish <id-prefix>
  activate <id-prefix>
  show
  help
  quit";

fn main() -> ExitCode {
    let config = match BoardConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("projboard: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_logging(&config.logging()) {
        eprintln!("projboard: logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok version={} rules={}",
        core_version(),
        config.rules.as_str()
    );

    let mut board = ProjectBoard::new(config.input_rules());
    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(stdin.lock(), stdout.lock(), &mut board) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("projboard: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Processes commands until `quit` or end of input.
fn run(input: impl BufRead, mut out: impl Write, board: &mut ProjectBoard) -> io::Result<()> {
    writeln!(out, "projboard {} (type `help`)", core_version())?;
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(command, rest)| (command, rest.trim()));
        match command.to_ascii_lowercase().as_str() {
            "add" => add(rest, &mut out, board)?,
            "move" => move_cmd(rest, &mut out, board)?,
            "finish" => move_to(rest, ProjectStatus::Finished, &mut out, board)?,
            "activate" => move_to(rest, ProjectStatus::Active, &mut out, board)?,
            "show" => writeln!(out, "{}", board.render())?,
            "help" => writeln!(out, "{HELP}")?,
            "quit" | "exit" => break,
            other => writeln!(out, "unknown command `{other}`; type `help`")?,
        }
    }
    out.flush()
}

fn add(args: &str, out: &mut impl Write, board: &mut ProjectBoard) -> io::Result<()> {
    // Title ends at the first `|`, headcount starts after the last one; any
    // pipes in between belong to the description.
    let Some((title, rest)) = args.split_once('|') else {
        return writeln!(out, "usage: add <title> | <description> | <people>");
    };
    let Some((description, people)) = rest.rsplit_once('|') else {
        return writeln!(out, "usage: add <title> | <description> | <people>");
    };
    let (title, description, people) = (title.trim(), description.trim(), people.trim());

    match board.submit(title, description, people) {
        Ok(_) => writeln!(out, "{}", board.render()),
        Err(err) => {
            writeln!(out, "invalid input please try again!!")?;
            let projboard_core::ProjectInputError::Invalid(fields) = &err;
            for entry in fields {
                for violation in &entry.violations {
                    writeln!(out, "  {}: {violation}", entry.field.as_str())?;
                }
            }
            Ok(())
        }
    }
}

fn move_cmd(args: &str, out: &mut impl Write, board: &mut ProjectBoard) -> io::Result<()> {
    let Some((prefix, status)) = args.rsplit_once(char::is_whitespace) else {
        return writeln!(out, "usage: move <id-prefix> <active|finished>");
    };
    match ProjectStatus::parse(status) {
        Ok(status) => move_to(prefix.trim(), status, out, board),
        Err(err) => writeln!(out, "{err}"),
    }
}

fn move_to(
    prefix: &str,
    status: ProjectStatus,
    out: &mut impl Write,
    board: &mut ProjectBoard,
) -> io::Result<()> {
    match board.resolve(prefix) {
        IdLookup::Found(id) => {
            if !board.move_project(id, status).is_changed() {
                return writeln!(out, "project is already {status}");
            }
            writeln!(out, "{}", board.render())
        }
        IdLookup::NotFound => writeln!(out, "no project matches `{prefix}`"),
        IdLookup::Ambiguous(ids) => {
            warn!(
                "event=id_resolve module=cli status=skipped reason=ambiguous matches={}",
                ids.len()
            );
            writeln!(
                out,
                "`{prefix}` matches {} projects; type more of the id",
                ids.len()
            )
        }
    }
}
