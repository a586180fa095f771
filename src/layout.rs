//! Layout Module
//!
//! Block geometry of the fixed menu-plan grid, expressed as configuration
//! rather than inline literals. The defaults encode the two recurring sheet
//! templates; a workbook with shifted blocks can be handled by supplying a
//! custom layout to the builder.
//!
//! All coordinates are 0-based absolute sheet positions. The template
//! documentation below uses the sheet's 1-based row/column view.

use crate::types::MealSlot;

/// Column offsets of one name/calories pair inside a day block, together
/// with the category label stamped on items extracted from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemColumns {
    /// Column offset of the dish name, relative to the anchor column.
    pub name_offset: u32,

    /// Column offset of the calorie value, relative to the anchor column.
    pub calories_offset: u32,

    /// Category label for items from this pair.
    pub category: String,
}

impl ItemColumns {
    /// Create a column pair description.
    pub fn new(name_offset: u32, calories_offset: u32, category: impl Into<String>) -> Self {
        Self {
            name_offset,
            calories_offset,
            category: category.into(),
        }
    }
}

/// Positional layout of one meal sheet.
///
/// The sheet is a calendar grid: the Cartesian product of `row_starts` and
/// `col_starts` gives the anchor cells (five week blocks × seven day columns
/// in the default templates), each expected to hold that day's date. Rows
/// `anchor + first_item_offset ..= anchor + last_item_offset` of a block
/// hold the item data described by `pairs`. Anchors without a resolvable
/// date mark unused calendar slots and are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealLayout {
    /// Exact sheet name in the workbook.
    pub sheet_name: String,

    /// Meal slot this sheet's items are written into.
    pub slot: MealSlot,

    /// Row indices of the week-block anchors.
    pub row_starts: Vec<u32>,

    /// Column indices of the day-block anchors.
    pub col_starts: Vec<u32>,

    /// First item row, as an offset from the anchor row.
    pub first_item_offset: u32,

    /// Last item row (inclusive), as an offset from the anchor row.
    pub last_item_offset: u32,

    /// Name/calories column pairs read from every item row.
    pub pairs: Vec<ItemColumns>,
}

impl MealLayout {
    /// Dinner template: sheet `AKŞAM MENÜ`, anchors on rows 4/13/22/31/40
    /// and columns A/E/I/M/Q/U/Y. The row directly under an anchor is a
    /// header; the five rows after it each hold a main-dish pair and a
    /// salad-bar pair side by side.
    pub fn dinner() -> Self {
        Self {
            sheet_name: "AKŞAM MENÜ".to_string(),
            slot: MealSlot::Aksam,
            row_starts: vec![3, 12, 21, 30, 39],
            col_starts: vec![0, 4, 8, 12, 16, 20, 24],
            first_item_offset: 2,
            last_item_offset: 6,
            pairs: vec![
                ItemColumns::new(0, 1, "Ana Menü"),
                ItemColumns::new(2, 3, "Salatbar"),
            ],
        }
    }

    /// Breakfast template: sheet `KAHVALTI`, anchors on rows 3/12/21/30/39
    /// and every second column from B to N. The seven rows directly under an
    /// anchor each hold a single name/calories pair; there is no header row.
    pub fn breakfast() -> Self {
        Self {
            sheet_name: "KAHVALTI".to_string(),
            slot: MealSlot::Kahvalti,
            row_starts: vec![2, 11, 20, 29, 38],
            col_starts: vec![1, 3, 5, 7, 9, 11, 13],
            first_item_offset: 1,
            last_item_offset: 7,
            pairs: vec![ItemColumns::new(0, 1, "Kahvaltılık")],
        }
    }

    /// Check the layout for values that would make an extraction pass
    /// meaningless. Returns the problem description on failure.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.sheet_name.is_empty() {
            return Err("sheet name must not be empty".to_string());
        }
        if self.row_starts.is_empty() {
            return Err(format!("layout for '{}' has no row starts", self.sheet_name));
        }
        if self.col_starts.is_empty() {
            return Err(format!("layout for '{}' has no column starts", self.sheet_name));
        }
        if self.first_item_offset == 0 {
            return Err(format!(
                "layout for '{}' places item rows on the anchor row",
                self.sheet_name
            ));
        }
        if self.first_item_offset > self.last_item_offset {
            return Err(format!(
                "layout for '{}' has first item offset ({}) > last item offset ({})",
                self.sheet_name, self.first_item_offset, self.last_item_offset
            ));
        }
        if self.pairs.is_empty() {
            return Err(format!("layout for '{}' has no column pairs", self.sheet_name));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dinner_template_geometry() {
        let layout = MealLayout::dinner();

        assert_eq!(layout.sheet_name, "AKŞAM MENÜ");
        assert_eq!(layout.slot, MealSlot::Aksam);
        // 5 week blocks x 7 day columns = 35 anchor cells
        assert_eq!(layout.row_starts.len() * layout.col_starts.len(), 35);
        // header row under the anchor is skipped
        assert_eq!(layout.first_item_offset, 2);
        assert_eq!(layout.last_item_offset, 6);
        assert_eq!(layout.pairs.len(), 2);
        assert_eq!(layout.pairs[0].category, "Ana Menü");
        assert_eq!(layout.pairs[1].category, "Salatbar");
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_breakfast_template_geometry() {
        let layout = MealLayout::breakfast();

        assert_eq!(layout.sheet_name, "KAHVALTI");
        assert_eq!(layout.slot, MealSlot::Kahvalti);
        assert_eq!(layout.row_starts.len() * layout.col_starts.len(), 35);
        // no header row: items start directly under the anchor
        assert_eq!(layout.first_item_offset, 1);
        assert_eq!(layout.last_item_offset, 7);
        assert_eq!(layout.pairs.len(), 1);
        assert_eq!(layout.pairs[0].category, "Kahvaltılık");
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_row_starts() {
        let mut layout = MealLayout::dinner();
        layout.row_starts.clear();

        let err = layout.validate().unwrap_err();
        assert!(err.contains("row starts"));
    }

    #[test]
    fn test_validate_rejects_empty_col_starts() {
        let mut layout = MealLayout::breakfast();
        layout.col_starts.clear();

        let err = layout.validate().unwrap_err();
        assert!(err.contains("column starts"));
    }

    #[test]
    fn test_validate_rejects_inverted_item_offsets() {
        let mut layout = MealLayout::dinner();
        layout.first_item_offset = 6;
        layout.last_item_offset = 2;

        let err = layout.validate().unwrap_err();
        assert!(err.contains("first item offset"));
    }

    #[test]
    fn test_validate_rejects_zero_first_offset() {
        let mut layout = MealLayout::breakfast();
        layout.first_item_offset = 0;

        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_pairs() {
        let mut layout = MealLayout::dinner();
        layout.pairs.clear();

        let err = layout.validate().unwrap_err();
        assert!(err.contains("column pairs"));
    }

    #[test]
    fn test_validate_rejects_empty_sheet_name() {
        let mut layout = MealLayout::dinner();
        layout.sheet_name.clear();

        assert!(layout.validate().is_err());
    }
}
