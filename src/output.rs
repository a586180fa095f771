//! Output Module
//!
//! JSON serialization of the extracted registry.

use std::io::Write;

use crate::error::MenuGridError;
use crate::types::MenuRegistry;

/// JSON feed writer.
///
/// Emits the registry as pretty-printed UTF-8 JSON with 2-space indentation,
/// keys in ascending order (the registry is a `BTreeMap`) and non-ASCII
/// characters written literally, terminated by a newline.
pub(crate) struct JsonFeedWriter;

impl JsonFeedWriter {
    pub fn render<W: Write>(
        &self,
        registry: &MenuRegistry,
        writer: &mut W,
    ) -> Result<(), MenuGridError> {
        serde_json::to_writer_pretty(&mut *writer, registry)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
