//! The interactive menu loop.
//!
//! Each iteration prints the numbered options, reads one choice and runs the
//! matching action to completion. Action errors are reported and the loop
//! carries on; only `Exit` or end of input ends it.

use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

use super::commands;
use super::session::Session;

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    StoreCredentials,
    Push,
    CreateRepository,
    CreateReadme,
    UpdateRepository,
    Exit,
}

impl Action {
    /// All actions in menu order.
    pub const ALL: [Action; 6] = [
        Action::StoreCredentials,
        Action::Push,
        Action::CreateRepository,
        Action::CreateReadme,
        Action::UpdateRepository,
        Action::Exit,
    ];

    /// Text shown next to the action's number.
    pub fn label(&self) -> &'static str {
        match self {
            Action::StoreCredentials => "Store Git credentials",
            Action::Push => "Push files to a Git repository",
            Action::CreateRepository => "Create a new repository",
            Action::CreateReadme => "Create a README.md file",
            Action::UpdateRepository => "Update repository with changes",
            Action::Exit => "Exit",
        }
    }

    /// Parses a 1-based menu number.
    pub fn from_choice(choice: &str) -> Option<Action> {
        let index = choice.trim().parse::<usize>().ok()?;
        Self::ALL.get(index.checked_sub(1)?).copied()
    }
}

/// What the loop does after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Runs one action. Errors are printed, never propagated.
pub fn dispatch<R: BufRead, W: Write>(session: &mut Session<R, W>, action: Action) -> Flow {
    tracing::debug!(?action, "Dispatching");

    let result = match action {
        Action::StoreCredentials => commands::credentials::run(session),
        Action::Push => commands::push::run(session),
        Action::CreateRepository => commands::create_repo::run(session),
        Action::CreateReadme => commands::readme::run(session),
        Action::UpdateRepository => commands::update::run(session),
        Action::Exit => {
            if let Err(e) = session.term.say("Exiting...") {
                tracing::warn!("Failed to write output: {e}");
            }
            return Flow::Exit;
        }
    };

    if let Err(e) = result {
        tracing::warn!(?action, "Action failed: {e:#}");
        if let Err(write_err) = session.failure(format!("An error occurred: {e:#}")) {
            tracing::warn!("Failed to write output: {write_err}");
        }
    }

    Flow::Continue
}

fn print_menu<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    session.term.blank()?;
    session.term.say("Options:".bold())?;
    for (i, action) in Action::ALL.iter().enumerate() {
        session.term.say(format!("{}. {}", i + 1, action.label()))?;
    }
    Ok(())
}

/// Runs the menu until the user exits or input ends.
pub fn run<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    loop {
        print_menu(session)?;
        session.term.prompt("Enter your choice: ")?;

        let Some(choice) = session.term.read_line()? else {
            session.term.blank()?;
            session.term.say("Exiting...")?;
            return Ok(());
        };

        match Action::from_choice(&choice) {
            Some(action) => {
                if dispatch(session, action) == Flow::Exit {
                    return Ok(());
                }
            }
            None => session.notice("Invalid choice. Please try again.")?,
        }
    }
}
