//! JSON export of the reference manual.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::codec::all_pairs;
use crate::domain::ExportError;

/// One manual entry as it appears in the JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualEntry {
    /// 1-based pair number
    pub pair: u8,
    /// Major color name
    pub major: String,
    /// Minor color name
    pub minor: String,
}

/// JSON document container.
#[derive(Debug, Serialize)]
struct ManualDocument {
    scheme: &'static str,
    entries: Vec<ManualEntry>,
}

/// Exporter for the reference manual.
///
/// Entry order equals [`all_pairs`] order: ascending pair number.
pub struct ManualExporter {
    entries: Vec<ManualEntry>,
}

impl ManualExporter {
    /// Collect the 25 entries in manual order.
    #[must_use]
    pub fn new() -> Self {
        let entries = all_pairs()
            .into_iter()
            .map(|(number, pair)| ManualEntry {
                pair: number.get(),
                major: pair.major.as_str().to_string(),
                minor: pair.minor.as_str().to_string(),
            })
            .collect();
        Self { entries }
    }

    /// Write the manual as pretty-printed JSON to any sink.
    pub fn export<W: Write>(&self, writer: &mut W) -> Result<(), ExportError> {
        let document = ManualDocument {
            scheme: "25-pair color code",
            entries: self.entries.clone(),
        };
        serde_json::to_writer_pretty(&mut *writer, &document)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

impl Default for ManualExporter {
    fn default() -> Self {
        Self::new()
    }
}
