// menu.rs — `eq menu`: the interactive Eternal Quest loop.
//
// Input comes from a `LineSource` so the loop can be driven by a script in
// tests; the real terminal uses rustyline. Every prompt re-asks until it
// gets a valid answer. End of input (Ctrl-D) or Ctrl-C leaves the menu.
//
// The menu only saves on option 5. Saved goals are loaded on entry; if the
// file can't be read the failure is printed and the menu starts empty, the
// same as a failed option 6.

use std::io::Write;

use eq_goal::validate::validate_text;
use eq_goal::{GoalBehavior, GoalKind, QuestConfig};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::commands::goal::write_list;
use crate::commands::status::write_status;
use crate::session::Session;

/// Something that hands out lines of user input.
pub trait LineSource {
    /// `None` means the user is gone (EOF or interrupt).
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

struct Terminal {
    editor: DefaultEditor,
}

impl LineSource for Terminal {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Some(line)
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => None,
            Err(e) => {
                tracing::warn!("readline error: {}", e);
                None
            }
        }
    }
}

pub fn execute(config: &QuestConfig) -> anyhow::Result<()> {
    let mut input = Terminal {
        editor: DefaultEditor::new()?,
    };
    start(config, &mut input, &mut std::io::stdout())
}

/// Load the saved goals, then run the menu. A failed load is reported and
/// the menu continues with an empty store.
fn start(
    config: &QuestConfig,
    input: &mut impl LineSource,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut session = Session::new(config);
    if let Err(e) = session.load() {
        writeln!(out, "  → Load failed: {}", e)?;
    }
    run(&mut session, input, out)
}

pub fn run(
    session: &mut Session,
    input: &mut impl LineSource,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    loop {
        writeln!(out)?;
        writeln!(out, "Eternal Quest Menu:")?;
        writeln!(out, "1. Create Goal")?;
        writeln!(out, "2. List Goals")?;
        writeln!(out, "3. Record Event")?;
        writeln!(out, "4. Display Score")?;
        writeln!(out, "5. Save Goals")?;
        writeln!(out, "6. Load Goals")?;
        writeln!(out, "7. Exit")?;
        out.flush()?;

        let Some(choice) = input.read_line("Choose an option: ") else {
            return Ok(());
        };

        match choice.trim() {
            "1" => create_goal(session, input, out)?,
            "2" => {
                writeln!(out)?;
                write_list(session.store(), out)?;
            }
            "3" => record_event(session, input, out)?,
            "4" => {
                writeln!(out)?;
                write_status(session.store(), out)?;
            }
            "5" => match session.save() {
                Ok(()) => writeln!(out, "Goals saved.")?,
                Err(e) => writeln!(out, "  → Save failed: {}", e)?,
            },
            "6" => match session.load() {
                Ok(report) if report.found => writeln!(out, "Goals loaded.")?,
                Ok(_) => writeln!(out, "No saved goals found.")?,
                Err(e) => writeln!(out, "  → Load failed: {}", e)?,
            },
            "7" => return Ok(()),
            _ => writeln!(out, "Invalid choice.")?,
        }
    }
}

/// Ask `prompt` until `parse` accepts the answer. `None` if input ended.
fn ask<T>(
    input: &mut impl LineSource,
    out: &mut impl Write,
    prompt: &str,
    parse: impl Fn(&str) -> Result<T, String>,
) -> anyhow::Result<Option<T>> {
    loop {
        let Some(line) = input.read_line(prompt) else {
            return Ok(None);
        };
        match parse(line.trim()) {
            Ok(value) => return Ok(Some(value)),
            Err(hint) => writeln!(out, "  → {}", hint)?,
        }
    }
}

fn parse_kind(raw: &str) -> Result<&'static str, String> {
    match raw.to_ascii_lowercase().as_str() {
        "simple" => Ok("simple"),
        "eternal" => Ok("eternal"),
        "checklist" => Ok("checklist"),
        _ => Err("Please enter exactly \"simple\", \"eternal\" or \"checklist\".".to_string()),
    }
}

fn parse_text(field: &'static str) -> impl Fn(&str) -> Result<String, String> {
    move |raw| {
        validate_text(field, raw)
            .map(|()| raw.to_string())
            .map_err(|e| e.to_string())
    }
}

fn parse_count(min: u32, hint: &'static str) -> impl Fn(&str) -> Result<u32, String> {
    move |raw| match raw.parse::<u32>() {
        Ok(n) if n >= min => Ok(n),
        _ => Err(hint.to_string()),
    }
}

fn create_goal(
    session: &mut Session,
    input: &mut impl LineSource,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let kind_prompt = "Enter goal type (simple, eternal, checklist): ";
    let Some(kind) = ask(input, out, kind_prompt, parse_kind)? else {
        return Ok(());
    };
    let Some(name) = ask(input, out, "Name: ", parse_text("name"))? else {
        return Ok(());
    };
    let Some(description) = ask(input, out, "Description: ", parse_text("description"))? else {
        return Ok(());
    };
    let points_hint = "Please enter a non-negative integer for points.";
    let Some(points) = ask(input, out, "Points: ", parse_count(0, points_hint))? else {
        return Ok(());
    };

    let kind = match kind {
        "simple" => GoalKind::Simple,
        "eternal" => GoalKind::Eternal,
        _ => {
            let Some(target) = ask(
                input,
                out,
                "Target count: ",
                parse_count(1, "Enter an integer > 0."),
            )?
            else {
                return Ok(());
            };
            let Some(bonus) = ask(
                input,
                out,
                "Bonus points: ",
                parse_count(0, "Enter a non-negative integer for bonus."),
            )?
            else {
                return Ok(());
            };
            GoalKind::Checklist { target, bonus }
        }
    };

    match session.create_goal(kind, &name, &description, points) {
        Ok(_) => writeln!(out, "Goal created.")?,
        Err(e) => writeln!(out, "  → {}", e)?,
    }
    Ok(())
}

fn record_event(
    session: &mut Session,
    input: &mut impl LineSource,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let len = session.store().len();
    if len == 0 {
        writeln!(out, "No goals yet. Create one first.")?;
        return Ok(());
    }

    writeln!(out)?;
    for (i, goal) in session.store().goals().iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, goal.name())?;
    }

    let hint = format!("Enter a number between 1 and {}.", len);
    let Some(number) = ask(input, out, "Select goal number: ", |raw| {
        match raw.parse::<usize>() {
            Ok(n) if (1..=len).contains(&n) => Ok(n),
            _ => Err(hint.clone()),
        }
    })?
    else {
        return Ok(());
    };

    let earned = session.record(number)?;
    writeln!(out, "You earned {} points!", earned)?;
    Ok(())
}
