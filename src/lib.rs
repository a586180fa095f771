//! menugrid - positional menu-plan extractor
//!
//! This crate parses a rigidly laid-out menu-plan workbook (breakfast and
//! dinner sheets arranged as 5-week × 7-day calendar grids) and emits a
//! normalized JSON feed keyed by ISO date.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::fs::File;
//! use menugrid::ExtractorBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create an extractor with the default sheet templates
//!     let extractor = ExtractorBuilder::new().build()?;
//!
//!     // Open the source workbook
//!     let input = File::open("subat.xlsx")?;
//!
//!     // Create the output feed
//!     let output = File::create("menu.json")?;
//!
//!     // Extract both meal sheets and write the JSON feed
//!     extractor.convert(input, output)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! For in-memory conversion, use `Cursor`:
//!
//! ```rust,no_run
//! use std::io::Cursor;
//! use menugrid::ExtractorBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = ExtractorBuilder::new().build()?;
//! let workbook_bytes: Vec<u8> = vec![]; // Your workbook bytes
//! let json = extractor.convert_to_string(Cursor::new(workbook_bytes))?;
//! # Ok(())
//! # }
//! ```
//!
//! # Custom Layouts
//!
//! The block geometry (anchor rows/columns, item-row offsets, category
//! column pairs) is configuration, not hard-coded offsets:
//!
//! ```rust,no_run
//! use menugrid::{ExtractorBuilder, MealLayout};
//!
//! fn main() -> Result<(), menugrid::MenuGridError> {
//!     let mut dinner = MealLayout::dinner();
//!     dinner.sheet_name = "AKŞAM MENÜ ŞUBAT".to_string();
//!
//!     let extractor = ExtractorBuilder::new()
//!         .with_dinner_layout(dinner)
//!         .build()?;
//!
//!     let registry = extractor.extract_path("subat.xlsx")?;
//!     println!("{} days extracted", registry.len());
//!     Ok(())
//! }
//! ```

mod builder;
mod error;
mod extract;
mod layout;
mod output;
mod parser;
mod types;

pub use builder::{ExtractorBuilder, MenuExtractor};
pub use error::MenuGridError;
pub use layout::{ItemColumns, MealLayout};
pub use types::{DayMenu, MealSlot, MenuItem, MenuRegistry};
