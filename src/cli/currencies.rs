use crate::core::CurrencyTable;
use crate::store::jsonl;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Converts the exchange-rate XML at `input` into currency documents written to `out`.
///
/// All documents are built before anything is written, so a lookup failure leaves
/// `out` untouched. An empty table still ends the output with a single newline.
/// Returns the number of documents emitted.
pub fn run<W: Write>(input: &Path, out: &mut W) -> Result<usize> {
    let xml = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read currency file: {}", input.display()))?;
    let table = CurrencyTable::from_xml(&xml)
        .with_context(|| format!("Failed to load currencies from {}", input.display()))?;
    let docs = table.documents()?;

    if docs.is_empty() {
        out.write_all(b"\n")?;
        out.flush()?;
    } else {
        jsonl::write_lines(out, &docs)?;
    }
    info!(count = docs.len(), input = %input.display(), "Emitted currency documents");
    Ok(docs.len())
}
