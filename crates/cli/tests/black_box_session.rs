//! Black-box tests driving whole interactive sessions over in-memory
//! consoles and a temp-dir-backed data file.

use std::io::Cursor;
use std::path::Path;

use combstock_cli::{Console, Session};
use combstock_store::JsonFile;

fn run_session(input: &str, path: &Path) -> String {
    let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let session = Session::new(console, JsonFile::new(path));
    let console = session.run().expect("session failed");
    String::from_utf8(console.into_output()).unwrap()
}

#[test]
fn full_lifecycle_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("combs.json");

    // create -> list -> update stock -> find -> delete -> find -> exit
    let input = "1\nC001\nClássico\nMadeira\n12,50\n30\n\
                 2\n\
                 4\nC001\n25\n\
                 3\nC001\n\
                 5\nC001\n\
                 3\nC001\n\
                 0\n";
    let output = run_session(input, &path);

    assert!(output.contains("Comb registered."));
    assert!(output.contains("Model: Clássico"));
    assert!(output.contains("Unit price: 12.50"));
    assert!(output.contains("Stock updated."));
    assert!(output.contains("Quantity: 25"));
    assert!(output.contains("Comb removed."));
    assert!(output.contains("Comb not found."));
    assert!(output.contains("Leaving. See you!"));

    // the persisted document no longer holds the deleted id
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(!text.contains("C001"));
}

#[test]
fn records_survive_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("combs.json");

    run_session("1\nC001\nClássico\nMadeira\n12.5\n30\n0\n", &path);
    let output = run_session("2\n0\n", &path);

    assert!(output.contains("Id: C001"));
    assert!(output.contains("Quantity: 30"));
}

#[test]
fn unknown_menu_input_redisplays_the_menu() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("combs.json");

    let output = run_session("7\n0\n", &path);

    assert!(output.contains("Invalid option. Try again."));
    assert_eq!(output.matches("=== Comb Inventory ===").count(), 2);
}

#[test]
fn corrupted_document_starts_empty_with_a_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("combs.json");
    std::fs::write(&path, "{definitely not json").unwrap();

    let output = run_session("2\n0\n", &path);

    assert!(output.contains("Data file is corrupted."));
    assert!(output.contains("No combs registered."));
}

#[test]
fn partially_corrupted_document_keeps_the_good_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("combs.json");
    std::fs::write(
        &path,
        r#"[
            {"id": "C001", "model": "Clássico", "material": "Madeira",
             "unitPrice": 12.5, "quantityOnHand": 30},
            {"id": "C002", "model": "Fino"}
        ]"#,
    )
    .unwrap();

    let output = run_session("2\n0\n", &path);

    assert!(output.contains("Ignored invalid entry 1"));
    assert!(output.contains("Id: C001"));
    assert!(!output.contains("Id: C002"));
}

#[test]
fn end_of_input_is_a_clean_exit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("combs.json");

    // input ends mid-create, after the id prompt
    let output = run_session("1\n", &path);

    assert!(output.contains("Comb id: "));
}
