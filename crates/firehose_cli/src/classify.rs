//! `firehose classify`: prints the identifier and class of each message.

use std::io::{self, Write};

use firehose_diagnostics::classify;

/// Runs the `firehose classify` command.
pub fn run(messages: &[String]) -> Result<i32, Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    write_classes(messages, &mut stdout.lock())?;
    Ok(0)
}

/// Writes one `id<TAB>class` line per message.
fn write_classes(messages: &[String], out: &mut impl Write) -> io::Result<()> {
    for message in messages {
        let id = classify(message);
        writeln!(out, "{id}\t{}", id.class())?;
    }
    Ok(())
}
