//! The interactive session: load once, then menu-dispatch until exit.

use std::io::{self, BufRead, Write};

use combstock_store::{JsonFile, RecordStore};

use crate::commands;
use crate::console::Console;
use crate::menu::{MENU, MenuChoice};

enum Flow {
    Continue,
    Quit,
}

/// One interactive session over a console and a persisted document.
pub struct Session<R, W> {
    console: Console<R, W>,
    file: JsonFile,
    store: RecordStore,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(console: Console<R, W>, file: JsonFile) -> Self {
        Self {
            console,
            file,
            store: RecordStore::new(),
        }
    }

    /// Run the session to completion.
    ///
    /// Nothing in here is fatal: corrupt data is reported and dropped,
    /// unknown menu input re-displays the menu, and end of input counts as
    /// a normal exit. Only a console write failure propagates.
    pub fn run(mut self) -> io::Result<Console<R, W>> {
        self.load()?;
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => break,
                Err(err) => return Err(err),
            }
        }
        Ok(self.console)
    }

    /// Load the persisted document and report whatever had to be dropped.
    fn load(&mut self) -> io::Result<()> {
        match self.file.load() {
            Ok(outcome) => {
                if let Some(reason) = &outcome.discarded_document {
                    tracing::warn!(
                        "discarding data file {}: {reason}",
                        self.file.path().display()
                    );
                    self.console
                        .write_line("Data file is corrupted. Starting with an empty inventory.")?;
                }
                for entry in &outcome.skipped {
                    tracing::warn!("skipping entry {}: {}", entry.index, entry.reason);
                    self.console.write_line(&format!(
                        "Ignored invalid entry {} in the data file: {}",
                        entry.index, entry.reason
                    ))?;
                }
                self.store = outcome.store;
            }
            Err(err) => {
                tracing::warn!(
                    "could not read data file {}: {err}",
                    self.file.path().display()
                );
                self.console
                    .write_line("Could not read the data file. Starting with an empty inventory.")?;
            }
        }
        Ok(())
    }

    /// Show the menu, read one choice, dispatch it.
    fn step(&mut self) -> io::Result<Flow> {
        self.console.write_line(MENU)?;
        let raw = self.console.read_trimmed("Choose an option: ")?;
        let Ok(choice) = raw.parse::<MenuChoice>() else {
            self.console.write_line("Invalid option. Try again.")?;
            return Ok(Flow::Continue);
        };

        match choice {
            MenuChoice::Create => {
                commands::create(&mut self.console, &mut self.store, &self.file)?
            }
            MenuChoice::List => commands::list(&mut self.console, &self.store)?,
            MenuChoice::Find => commands::find(&mut self.console, &self.store)?,
            MenuChoice::UpdateStock => {
                commands::update_stock(&mut self.console, &mut self.store, &self.file)?
            }
            MenuChoice::Delete => {
                commands::delete(&mut self.console, &mut self.store, &self.file)?
            }
            MenuChoice::Exit => {
                self.console.write_line("Leaving. See you!")?;
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }
}
