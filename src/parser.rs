//! Parser Module
//!
//! Workbook access on top of calamine. The extractor only ever needs
//! computed cell values, so any format calamine auto-detects is accepted
//! and sheets are exposed as plain value ranges.

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use crate::error::MenuGridError;

/// Thin wrapper around a calamine workbook.
///
/// Resolves sheets by exact name; an unknown name is a fatal configuration
/// error, matching the contract that a workbook without the expected meal
/// sheets cannot be extracted at all.
pub(crate) struct WorkbookParser<R: Read + Seek> {
    sheets: Sheets<R>,
}

impl WorkbookParser<BufReader<std::fs::File>> {
    /// Open a workbook from a file path.
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self, MenuGridError> {
        let sheets = open_workbook_auto(path).map_err(MenuGridError::Parse)?;
        Ok(Self { sheets })
    }
}

impl<R: Read + Seek> WorkbookParser<R> {
    /// Open a workbook from any reader.
    pub fn open(reader: R) -> Result<Self, MenuGridError>
    where
        R: Clone,
    {
        let sheets = open_workbook_auto_from_rs(reader).map_err(MenuGridError::Parse)?;
        Ok(Self { sheets })
    }

    /// All sheet names in workbook order.
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names().to_vec()
    }

    /// Resolve a sheet by exact name to its computed-value range.
    ///
    /// # Errors
    ///
    /// * `MenuGridError::Config` - no sheet with that exact name exists
    /// * `MenuGridError::Parse` - calamine failed to read the sheet
    pub fn sheet_range(&mut self, name: &str) -> Result<Range<Data>, MenuGridError> {
        if !self.sheet_names().iter().any(|n| n == name) {
            return Err(MenuGridError::Config(format!("Sheet '{}' not found", name)));
        }
        self.sheets.worksheet_range(name).map_err(MenuGridError::Parse)
    }
}

// Tested through the integration tests (tests/extractor_test.rs), which
// exercise real workbook bytes.
