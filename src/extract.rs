//! Extract Module
//!
//! The positional grid extractor: walks the anchor grid of a meal sheet,
//! resolves dates, reads the item rows of each day block and fills the
//! registry. Anchors without a resolvable date mark unused calendar slots
//! (trailing blank weeks) and are skipped without error.

use calamine::{Data, Range};
use chrono::NaiveDateTime;
use regex::Regex;
use tracing::debug;

use crate::error::MenuGridError;
use crate::layout::MealLayout;
use crate::types::{MenuItem, MenuRegistry};

/// Marker text of summary rows in the source sheets. Item rows whose
/// trimmed, uppercased name equals it are never emitted.
const TOTAL_ROW_MARKER: &str = "TOPLAM";

/// Unit suffix appended to the raw calorie cell value.
const CALORIE_UNIT: &str = "kcal";

/// Registry key format: fixed-width ISO, so lexicographic order equals
/// chronological order.
const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

fn date_key(dt: NaiveDateTime) -> String {
    dt.format(DATE_KEY_FORMAT).to_string()
}

/// Grid extractor shared by both extraction passes.
#[derive(Debug)]
pub(crate) struct GridExtractor {
    /// Matches the first embedded ISO date in anchor text.
    iso_date: Regex,
}

impl GridExtractor {
    pub fn new() -> Result<Self, MenuGridError> {
        let iso_date = Regex::new(r"\d{4}-\d{2}-\d{2}")
            .map_err(|e| MenuGridError::Config(format!("Invalid date pattern: {}", e)))?;
        Ok(Self { iso_date })
    }

    /// Run one extraction pass over a sheet range.
    ///
    /// Every anchor that resolves to a date gets a registry entry (created
    /// with both slots empty if first seen) and this layout's meal slot is
    /// assigned the block's items. Assignment replaces any previous value
    /// for the slot, so a date appearing in two blocks keeps only the last
    /// block's items.
    pub fn run_pass(&self, layout: &MealLayout, range: &Range<Data>, registry: &mut MenuRegistry) {
        let mut resolved = 0usize;

        for &row in &layout.row_starts {
            for &col in &layout.col_starts {
                let date = match self.resolve_anchor(range, row, col) {
                    Some(date) => date,
                    None => {
                        debug!(sheet = %layout.sheet_name, row, col, "anchor has no date, block skipped");
                        continue;
                    }
                };

                let items = self.collect_items(layout, range, row, col);
                let day = registry.entry(date).or_default();
                *day.slot_mut(layout.slot) = items;
                resolved += 1;
            }
        }

        debug!(sheet = %layout.sheet_name, anchors = resolved, "extraction pass finished");
    }

    /// Resolve the anchor cell at (row, col) to a date string, if any.
    fn resolve_anchor(&self, range: &Range<Data>, row: u32, col: u32) -> Option<String> {
        self.resolve_date(range.get_value((row, col))?)
    }

    /// Interpret a cell as a calendar date.
    ///
    /// Native date cells format as `YYYY-MM-DD`; text cells contribute their
    /// first embedded ISO date substring; every other value resolves to
    /// nothing.
    fn resolve_date(&self, cell: &Data) -> Option<String> {
        match cell {
            Data::DateTime(dt) => dt.as_datetime().map(date_key),
            Data::String(s) => self.iso_date.find(s).map(|m| m.as_str().to_string()),
            _ => None,
        }
    }

    /// Read all item rows of the block anchored at (anchor_row, anchor_col).
    ///
    /// Each configured column pair contributes independently per row: a pair
    /// whose name cell is blank or a total-row marker is dropped without
    /// affecting the other pair on the same row.
    fn collect_items(
        &self,
        layout: &MealLayout,
        range: &Range<Data>,
        anchor_row: u32,
        anchor_col: u32,
    ) -> Vec<MenuItem> {
        let mut items = Vec::new();

        for offset in layout.first_item_offset..=layout.last_item_offset {
            let row = anchor_row + offset;

            for pair in &layout.pairs {
                let name_cell = range.get_value((row, anchor_col + pair.name_offset));
                let name = cell_text(name_cell).trim().to_string();

                if name.is_empty() {
                    continue;
                }
                if name.to_uppercase() == TOTAL_ROW_MARKER {
                    debug!(sheet = %layout.sheet_name, row, "total row filtered");
                    continue;
                }

                let calories_cell = range.get_value((row, anchor_col + pair.calories_offset));
                items.push(MenuItem {
                    category: pair.category.clone(),
                    name,
                    calories: format!("{} {}", cell_text(calories_cell), CALORIE_UNIT),
                });
            }
        }

        items
    }
}

/// Render a cell the way the sheet displays it. Calorie values keep their
/// raw form (no trimming); an absent or empty cell renders as "".
fn cell_text(cell: Option<&Data>) -> String {
    match cell {
        Some(Data::String(s)) => s.clone(),
        Some(Data::Int(i)) => i.to_string(),
        Some(Data::Float(f)) => f.to_string(),
        Some(Data::Bool(b)) => b.to_string(),
        Some(Data::Error(e)) => format!("{:?}", e),
        Some(Data::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
