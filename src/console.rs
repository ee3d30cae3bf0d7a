//! Interactive menu over a [`ModelRegistry`].
//!
//! The console owns all parsing and messaging: the index only ever sees typed values and only
//! ever answers with outcomes, which are turned into text here.

use core::ops::ControlFlow;
use std::io::{self, BufRead, Write};
use std::string::String;

use tracing::{debug, info};

use crate::export::{self, ExportError};
use crate::outcome::{DeleteOutcome, InsertOutcome, UpdateOutcome};
use crate::report::{self, RecordLine};
use crate::ModelRegistry;

const MENU: &str = "\n--- Car Maintenance Record System ---\n\
                    1. Add Maintenance Record\n\
                    2. Display All Records\n\
                    3. Search for a Record by Date\n\
                    4. Delete a Record by Date\n\
                    5. Export Records to File\n\
                    6. Update Maintenance Record\n\
                    7. Exit\n";

/// A menu entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Add,
    Display,
    Search,
    Delete,
    Export,
    Update,
    Exit,
}

impl Command {
    /// Maps a menu number (1 to 7) to its command.
    #[must_use]
    pub const fn from_choice(choice: i64) -> Option<Self> {
        Some(match choice {
            1 => Self::Add,
            2 => Self::Display,
            3 => Self::Search,
            4 => Self::Delete,
            5 => Self::Export,
            6 => Self::Update,
            7 => Self::Exit,
            _ => return None,
        })
    }
}

/// Parses a cost as typed by the user. Only finite numbers are accepted.
#[must_use]
pub fn parse_cost(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|cost| cost.is_finite())
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Flow {
    Continue,
    Exit,
}

/// Reads menu choices from `input` and writes prompts and results to `output`.
///
/// # Examples
///
/// ```
/// use maintenance_index::console::Console;
///
/// let script = "1\nCivic\n2024-01-10\nOil change\n45\n7\n";
/// let mut console = Console::new(script.as_bytes(), Vec::new());
/// console.run().unwrap();
///
/// let (registry, _) = console.into_parts();
/// assert_eq!(registry.index("Civic").map(|index| index.len()), Some(1));
/// ```
pub struct Console<R, W> {
    input: R,
    output: W,
    registry: ModelRegistry,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_registry(input, output, ModelRegistry::new())
    }

    pub fn with_registry(input: R, output: W, registry: ModelRegistry) -> Self {
        Self {
            input,
            output,
            registry,
        }
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub fn into_parts(self) -> (ModelRegistry, W) {
        (self.registry, self.output)
    }

    /// Runs the menu until the user picks "Exit" or the input ends.
    ///
    /// # Errors
    ///
    /// Returns any error from reading `input` or writing `output`.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "{MENU}")?;
            let Some(line) = self.ask("Enter your choice: ")? else {
                return Ok(());
            };

            let Ok(choice) = line.parse::<i64>() else {
                debug!(input = %line, "non-numeric menu choice");
                writeln!(self.output, "Invalid input! Please enter a number between 1 and 7.")?;
                continue;
            };
            let Some(command) = Command::from_choice(choice) else {
                debug!(choice, "menu choice out of range");
                writeln!(self.output, "Invalid choice! Please try again.")?;
                continue;
            };

            info!(?command, "dispatching");
            if self.dispatch(command)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> io::Result<Flow> {
        match command {
            Command::Add => self.add(),
            Command::Display => self.display(),
            Command::Search => self.search(),
            Command::Delete => self.delete(),
            Command::Export => self.export(),
            Command::Update => self.update(),
            Command::Exit => {
                writeln!(self.output, "Exiting the system. Thank you!")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn add(&mut self) -> io::Result<Flow> {
        let Some(model) = self.ask("Enter vehicle model: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(date) = self.ask("Enter maintenance date (YYYY-MM-DD): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(description) = self.ask("Enter maintenance description: ")? else {
            return Ok(Flow::Exit);
        };
        let cost = match self.ask_cost("Enter cost: ")? {
            ControlFlow::Continue(cost) => cost,
            ControlFlow::Break(flow) => return Ok(flow),
        };

        match self.registry.insert(&model, date.as_str(), description, cost) {
            InsertOutcome::Inserted => {
                writeln!(self.output, "Maintenance record added successfully for {model}.")?;
            }
            InsertOutcome::Rejected(_) => {
                writeln!(self.output, "A record for {date} already exists for {model}; use update to change it.")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn display(&mut self) -> io::Result<Flow> {
        let Some(model) = self.ask("Enter vehicle model to display records: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(index) = self.registry.index(&model) else {
            return Self::unknown_model(&mut self.output, &model);
        };

        if index.is_empty() {
            writeln!(self.output, "{}", report::EMPTY)?;
        } else {
            export::write_records(index, &mut self.output)?;
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> io::Result<Flow> {
        let Some(model) = self.ask("Enter vehicle model: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(date) = self.ask("Enter date to search (YYYY-MM-DD): ")? else {
            return Ok(Flow::Exit);
        };

        let Some(index) = self.registry.index(&model) else {
            return Self::unknown_model(&mut self.output, &model);
        };
        match index.search(&date) {
            Some(record) => {
                writeln!(self.output, "=== Record Found ===")?;
                writeln!(self.output, "{}", RecordLine(record))?;
                writeln!(self.output, "====================")?;
            }
            None => writeln!(self.output, "No maintenance record found for date: {date}")?,
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> io::Result<Flow> {
        let Some(model) = self.ask("Enter vehicle model: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(date) = self.ask("Enter date to delete (YYYY-MM-DD): ")? else {
            return Ok(Flow::Exit);
        };

        match self.registry.delete(&model, &date) {
            None => return Self::unknown_model(&mut self.output, &model),
            Some(DeleteOutcome::Deleted) => writeln!(self.output, "Record deleted for {date}.")?,
            Some(DeleteOutcome::NotFound) => writeln!(self.output, "No record found for date: {date}")?,
        }
        Ok(Flow::Continue)
    }

    fn export(&mut self) -> io::Result<Flow> {
        let Some(filename) = self.ask("Enter filename to export records: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(model) = self.ask("Enter vehicle model: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(index) = self.registry.index(&model) else {
            return Self::unknown_model(&mut self.output, &model);
        };

        match export::export_to_file(index, &filename) {
            Ok(_) => writeln!(self.output, "Records exported to {filename}")?,
            Err(ExportError::Create { .. }) => writeln!(self.output, "Failed to open file: {filename}")?,
            Err(ExportError::Write { .. }) => writeln!(self.output, "Failed to write file: {filename}")?,
        }
        Ok(Flow::Continue)
    }

    fn update(&mut self) -> io::Result<Flow> {
        let Some(model) = self.ask("Enter vehicle model: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(date) = self.ask("Enter date of record to update (YYYY-MM-DD): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(description) = self.ask("Enter new description: ")? else {
            return Ok(Flow::Exit);
        };
        let cost = match self.ask_cost("Enter new cost: ")? {
            ControlFlow::Continue(cost) => cost,
            ControlFlow::Break(flow) => return Ok(flow),
        };

        match self.registry.update(&model, &date, description, cost) {
            None => return Self::unknown_model(&mut self.output, &model),
            Some(UpdateOutcome::Updated) => writeln!(self.output, "Record updated for {date}.")?,
            Some(UpdateOutcome::NotFound) => writeln!(self.output, "No record found for date: {date}")?,
        }
        Ok(Flow::Continue)
    }

    fn unknown_model(output: &mut W, model: &str) -> io::Result<Flow> {
        writeln!(output, "No records found for model: {model}")?;
        Ok(Flow::Continue)
    }

    // `Ok(None)` once the input is exhausted.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from(line.trim())))
    }

    // Breaks with `Exit` at end of input and with `Continue` (back to the menu) on a bad cost.
    fn ask_cost(&mut self, prompt: &str) -> io::Result<ControlFlow<Flow, f64>> {
        let Some(line) = self.ask(prompt)? else {
            return Ok(ControlFlow::Break(Flow::Exit));
        };
        if let Some(cost) = parse_cost(&line) {
            return Ok(ControlFlow::Continue(cost));
        }
        debug!(input = %line, "rejected cost");
        writeln!(self.output, "Invalid input for cost! Please enter a valid numeric value.")?;
        Ok(ControlFlow::Break(Flow::Continue))
    }
}

impl Console<io::StdinLock<'static>, io::StdoutLock<'static>> {
    /// A console on the process's standard input and output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout().lock())
    }
}

impl<R, W> core::fmt::Debug for Console<R, W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Console").field("registry", &self.registry).finish_non_exhaustive()
    }
}
