//! Types Module
//!
//! Domain data model shared across the crate: menu items, per-day records,
//! and the date-keyed registry the extraction passes fill in.

use serde::Serialize;
use std::collections::BTreeMap;

/// A single extracted menu entry.
///
/// `calories` is a display string: the raw cell value with the `kcal` unit
/// suffix appended. A missing calorie cell yields the degenerate but
/// non-fatal `" kcal"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    /// Fixed category label of the source column pair
    /// ("Ana Menü", "Salatbar" or "Kahvaltılık").
    pub category: String,

    /// Trimmed dish name.
    pub name: String,

    /// Display string, e.g. `"350 kcal"`.
    pub calories: String,
}

/// One day's menus, split into the two meal slots.
///
/// A date first seen by either extraction pass starts with both slots empty;
/// each pass only ever assigns its own slot. A date present in only one
/// sheet therefore keeps the other slot as an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayMenu {
    /// Breakfast items.
    pub kahvalti: Vec<MenuItem>,

    /// Dinner items.
    pub aksam: Vec<MenuItem>,
}

impl DayMenu {
    /// Mutable access to one meal slot.
    pub(crate) fn slot_mut(&mut self, slot: MealSlot) -> &mut Vec<MenuItem> {
        match slot {
            MealSlot::Kahvalti => &mut self.kahvalti,
            MealSlot::Aksam => &mut self.aksam,
        }
    }
}

/// The meal slot an extraction pass writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealSlot {
    /// Breakfast (`kahvalti`).
    Kahvalti,

    /// Dinner (`aksam`).
    Aksam,
}

/// Date string (ISO `YYYY-MM-DD`) → day record.
///
/// A `BTreeMap` keeps keys unique and serializes them in ascending
/// lexicographic order, which equals chronological order for the fixed-width
/// ISO format.
pub type MenuRegistry = BTreeMap<String, DayMenu>;
