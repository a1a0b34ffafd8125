use std::io;

use anyhow::Context;
use stockroom_console::Console;

fn main() -> anyhow::Result<()> {
    let config = stockroom_observability::init().context("invalid telemetry configuration")?;
    tracing::debug!(filter = %config.filter, format = ?config.format, "telemetry initialized");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(stdin.lock(), stdout.lock()).run()
}
