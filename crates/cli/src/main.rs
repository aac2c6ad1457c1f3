use anyhow::Context;

use combstock_cli::{Console, Session};
use combstock_store::JsonFile;

fn main() -> anyhow::Result<()> {
    combstock_observability::init();

    // Optional positional override for the data file; no flags.
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "combs.json".to_string());
    tracing::debug!("using data file {path}");

    let console = Console::new(std::io::stdin().lock(), std::io::stdout().lock());
    let session = Session::new(console, JsonFile::new(&path));
    session
        .run()
        .with_context(|| format!("session over data file {path} failed"))?;
    Ok(())
}
