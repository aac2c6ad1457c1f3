//! The menu command handlers.
//!
//! Each handler runs one full command against the store: prompts, lookup,
//! mutation, then a full persistence flush for the mutating ones. Domain
//! failures (blank id, duplicate, not found) abort the command with a
//! message; only console I/O errors propagate.

use std::io::{self, BufRead, Write};

use combstock_core::Entity;
use combstock_inventory::{Comb, CombId};
use combstock_store::{JsonFile, RecordStore};

use crate::console::Console;

/// Register a new comb.
///
/// A blank or duplicate id aborts the command (no retry, per the original
/// flow); the remaining fields are only prompted for once the id is known
/// to be usable.
pub fn create<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut RecordStore,
    file: &JsonFile,
) -> io::Result<()> {
    let raw = console.read_trimmed("Comb id: ")?;
    let id = match CombId::new(&raw) {
        Ok(id) => id,
        Err(_) => {
            return console.write_line("The id cannot be empty.");
        }
    };
    if store.contains(&id) {
        return console.write_line("A comb with this id already exists.");
    }

    let model = console.read_trimmed("Model: ")?;
    let material = console.read_trimmed("Material: ")?;
    let unit_price = console.prompt_decimal("Unit price: ")?;
    let quantity = console.prompt_integer("Quantity on hand: ")?;

    match Comb::new(id, model, material, unit_price, quantity) {
        Ok(comb) => {
            if let Err(err) = store.insert(comb) {
                return console.write_line(&format!("Cannot register comb: {err}"));
            }
            persist(console, store, file)?;
            console.write_line("Comb registered.")
        }
        Err(err) => console.write_line(&format!("Cannot register comb: {err}")),
    }
}

/// List every registered comb, in id order.
pub fn list<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &RecordStore,
) -> io::Result<()> {
    if store.is_empty() {
        return console.write_line("No combs registered.");
    }

    console.write_line("\nComb inventory:")?;
    console.write_line(&"-".repeat(60))?;
    for comb in store.iter() {
        console.write_line(&format_comb(comb))?;
        console.write_line("")?;
    }
    console.write_line(&"-".repeat(60))
}

/// Look a comb up by id and print it.
pub fn find<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &RecordStore,
) -> io::Result<()> {
    let raw = console.read_trimmed("Id to find: ")?;
    let comb = CombId::new(&raw).ok().and_then(|id| store.get(&id));
    match comb {
        Some(comb) => {
            let line = format_comb(comb);
            console.write_line(&line)
        }
        None => console.write_line("Comb not found."),
    }
}

/// Overwrite the quantity on hand of an existing comb.
pub fn update_stock<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut RecordStore,
    file: &JsonFile,
) -> io::Result<()> {
    let raw = console.read_trimmed("Comb id: ")?;
    let id = match CombId::new(&raw) {
        Ok(id) if store.contains(&id) => id,
        _ => return console.write_line("Comb not found."),
    };

    let quantity = console.prompt_integer("New quantity: ")?;
    // contains() was just checked, so this cannot miss
    if let Err(err) = store.set_quantity(&id, quantity) {
        return console.write_line(&format!("Cannot update stock: {err}"));
    }
    persist(console, store, file)?;
    console.write_line("Stock updated.")
}

/// Remove a comb from the inventory.
pub fn delete<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut RecordStore,
    file: &JsonFile,
) -> io::Result<()> {
    let raw = console.read_trimmed("Id of the comb to remove: ")?;
    let removed = CombId::new(&raw)
        .ok()
        .map(|id| store.remove(&id))
        .and_then(Result::ok);
    match removed {
        Some(_) => {
            persist(console, store, file)?;
            console.write_line("Comb removed.")
        }
        None => console.write_line("Comb not found."),
    }
}

/// Flush the store to disk, reporting (not propagating) a failed write.
///
/// The in-memory store stays the session's source of truth; a save failure
/// must not undo a mutation that already happened.
fn persist<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &RecordStore,
    file: &JsonFile,
) -> io::Result<()> {
    if let Err(err) = file.save(store) {
        tracing::error!("failed to persist inventory to {}: {err}", file.path().display());
        console.write_line("Warning: the inventory could not be saved to disk.")?;
    }
    Ok(())
}

fn format_comb(comb: &Comb) -> String {
    format!(
        "Id: {}\n  Model: {}\n  Material: {}\n  Unit price: {:.2}\n  Quantity: {}",
        comb.id(),
        comb.model(),
        comb.material(),
        comb.unit_price(),
        comb.quantity_on_hand()
    )
}
