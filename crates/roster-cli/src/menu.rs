//! Interactive numbered menu
//!
//! A blocking read-eval loop over a fixed dispatch table. Each entry maps a
//! menu key to an action that receives the store explicitly.

use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::error;

use roster_core::{Store, StudentUpdate};

use crate::output::recovery_hint;
use crate::prompt::{read_line, read_with_default};

/// What the loop does after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

type Action<R, W> = fn(&mut Menu<R, W>, &mut Store) -> Result<Flow>;

struct MenuEntry<R, W> {
    key: &'static str,
    label: &'static str,
    action: Action<R, W>,
}

/// Interactive session state
pub struct Menu<R, W> {
    input: R,
    out: W,
    report_path: PathBuf,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, out: W, report_path: PathBuf) -> Self {
        Self {
            input,
            out,
            report_path,
        }
    }

    fn entries() -> [MenuEntry<R, W>; 7] {
        [
            MenuEntry { key: "1", label: "Add Student", action: Self::add },
            MenuEntry { key: "2", label: "View All Students", action: Self::view_all },
            MenuEntry { key: "3", label: "Search Student", action: Self::search },
            MenuEntry { key: "4", label: "Update Student", action: Self::update },
            MenuEntry { key: "5", label: "Delete Student", action: Self::delete },
            MenuEntry { key: "6", label: "Generate Report", action: Self::report },
            MenuEntry { key: "7", label: "Exit", action: Self::exit },
        ]
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self, store: &mut Store) -> Result<()> {
        let entries = Self::entries();

        loop {
            writeln!(self.out, "\nStudent Management System")?;
            for entry in &entries {
                writeln!(self.out, "{}. {}", entry.key, entry.label)?;
            }

            let Some(choice) = self.ask("\nEnter your choice (1-7): ")? else {
                // End of input behaves like Exit
                writeln!(self.out)?;
                Self::exit(self, store)?;
                return Ok(());
            };

            let Some(entry) = entries.iter().find(|e| e.key == choice.trim()) else {
                writeln!(
                    self.out,
                    "\nInvalid choice. Please enter a number between 1-7."
                )?;
                continue;
            };

            match (entry.action)(self, store) {
                Ok(Flow::Exit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(e) => {
                    error!("{} failed: {:#}", entry.label, e);
                    writeln!(self.out, "\nError: {:#}", e)?;
                    if let Some(hint) = recovery_hint(&e) {
                        writeln!(self.out, "Hint: {}", hint)?;
                    }
                }
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        Ok(read_line(&mut self.input, &mut self.out, prompt)?)
    }

    /// Ask for a field; end of input reads as empty
    fn ask_field(&mut self, prompt: &str) -> Result<String> {
        Ok(self.ask(prompt)?.unwrap_or_default())
    }

    /// Ask for a student ID, reporting unparseable input
    fn ask_id(&mut self, prompt: &str) -> Result<Option<u32>> {
        let raw = self.ask_field(prompt)?;
        match raw.trim().parse::<u32>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                writeln!(
                    self.out,
                    "\nInvalid student ID '{}'. Please enter a number.",
                    raw
                )?;
                Ok(None)
            }
        }
    }

    fn add(&mut self, store: &mut Store) -> Result<Flow> {
        let name = self.ask_field("Enter student name: ")?;
        let roll_number = self.ask_field("Enter roll number: ")?;
        let email = self.ask_field("Enter email: ")?;
        let grade = self.ask_field("Enter grade: ")?;

        store.add(name, roll_number, email, grade)?;
        writeln!(self.out, "\nStudent added successfully!")?;
        Ok(Flow::Continue)
    }

    fn view_all(&mut self, store: &mut Store) -> Result<Flow> {
        if store.is_empty() {
            writeln!(self.out, "\nNo students in the system.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.out, "\nAll Students:")?;
        for student in store.all() {
            writeln!(self.out, "{}", student)?;
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self, store: &mut Store) -> Result<Flow> {
        let Some(id) = self.ask_id("Enter student ID to search: ")? else {
            return Ok(Flow::Continue);
        };

        match store.search(id) {
            Some(student) => writeln!(self.out, "\nStudent Found:\n{}", student)?,
            None => writeln!(self.out, "\nStudent not found.")?,
        }
        Ok(Flow::Continue)
    }

    fn update(&mut self, store: &mut Store) -> Result<Flow> {
        let Some(id) = self.ask_id("Enter student ID to update: ")? else {
            return Ok(Flow::Continue);
        };

        let Some(current) = store.search(id).cloned() else {
            writeln!(self.out, "\nStudent not found.")?;
            return Ok(Flow::Continue);
        };

        writeln!(self.out, "\nLeave blank to keep current value")?;
        let update = StudentUpdate {
            name: read_with_default(&mut self.input, &mut self.out, "Enter new name", &current.name)?,
            roll_number: read_with_default(
                &mut self.input,
                &mut self.out,
                "Enter new roll number",
                &current.roll_number,
            )?,
            email: read_with_default(&mut self.input, &mut self.out, "Enter new email", &current.email)?,
            grade: read_with_default(&mut self.input, &mut self.out, "Enter new grade", &current.grade)?,
        };

        store.update(id, update)?;
        writeln!(self.out, "\nStudent updated successfully!")?;
        Ok(Flow::Continue)
    }

    fn delete(&mut self, store: &mut Store) -> Result<Flow> {
        let Some(id) = self.ask_id("Enter student ID to delete: ")? else {
            return Ok(Flow::Continue);
        };

        if store.delete(id)? {
            writeln!(self.out, "\nStudent deleted successfully!")?;
        } else {
            writeln!(self.out, "\nStudent not found.")?;
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self, store: &mut Store) -> Result<Flow> {
        store.report(&self.report_path)?;
        writeln!(
            self.out,
            "\nReport generated successfully: {}",
            self.report_path.display()
        )?;
        Ok(Flow::Continue)
    }

    fn exit(&mut self, _store: &mut Store) -> Result<Flow> {
        writeln!(self.out, "\nExiting the system. Goodbye!")?;
        Ok(Flow::Exit)
    }
}
