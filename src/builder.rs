//! Builder Module
//!
//! Fluent builder API that configures and constructs the `MenuExtractor`
//! facade.

use std::io::{Read, Seek, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::MenuGridError;
use crate::extract::GridExtractor;
use crate::layout::MealLayout;
use crate::output::JsonFeedWriter;
use crate::parser::WorkbookParser;
use crate::types::MenuRegistry;

/// Extraction settings: one layout per meal sheet.
#[derive(Debug, Clone)]
pub(crate) struct ExtractorConfig {
    /// Dinner sheet layout (writes the `aksam` slot).
    pub dinner: MealLayout,

    /// Breakfast sheet layout (writes the `kahvalti` slot).
    pub breakfast: MealLayout,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            dinner: MealLayout::dinner(),
            breakfast: MealLayout::breakfast(),
        }
    }
}

/// Fluent builder for [`MenuExtractor`].
///
/// Defaults encode the documented sheet templates; only deviations need to
/// be specified.
///
/// # Example
///
/// ```rust,no_run
/// use menugrid::ExtractorBuilder;
///
/// # fn main() -> Result<(), menugrid::MenuGridError> {
/// let extractor = ExtractorBuilder::new()
///     .with_dinner_sheet_name("AKŞAM MENÜ ŞUBAT")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ExtractorBuilder {
    config: ExtractorConfig,
}

impl ExtractorBuilder {
    /// Builder with the default grid templates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole dinner layout.
    pub fn with_dinner_layout(mut self, layout: MealLayout) -> Self {
        self.config.dinner = layout;
        self
    }

    /// Replace the whole breakfast layout.
    pub fn with_breakfast_layout(mut self, layout: MealLayout) -> Self {
        self.config.breakfast = layout;
        self
    }

    /// Override only the dinner sheet name.
    pub fn with_dinner_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.config.dinner.sheet_name = name.into();
        self
    }

    /// Override only the breakfast sheet name.
    pub fn with_breakfast_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.config.breakfast.sheet_name = name.into();
        self
    }

    /// Validate the configuration and construct the extractor.
    ///
    /// # Errors
    ///
    /// `MenuGridError::Config` when a layout is degenerate (empty anchor
    /// lists, inverted item-row offsets, no column pairs, empty sheet name).
    pub fn build(self) -> Result<MenuExtractor, MenuGridError> {
        self.config.dinner.validate().map_err(MenuGridError::Config)?;
        self.config.breakfast.validate().map_err(MenuGridError::Config)?;

        let grid = GridExtractor::new()?;
        Ok(MenuExtractor {
            config: self.config,
            grid,
        })
    }
}

/// Extraction facade.
///
/// Runs the two extraction passes over a workbook and serializes the merged
/// registry, in the batch shape the tool is specified for: open workbook,
/// extract sequentially, write one JSON document.
///
/// # Example
///
/// ```rust,no_run
/// use std::fs::File;
/// use menugrid::ExtractorBuilder;
///
/// fn main() -> Result<(), menugrid::MenuGridError> {
///     let extractor = ExtractorBuilder::new().build()?;
///     let input = File::open("subat.xlsx")?;
///     let output = File::create("menu.json")?;
///     extractor.convert(input, output)?;
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MenuExtractor {
    config: ExtractorConfig,
    grid: GridExtractor,
}

impl MenuExtractor {
    /// Extract the registry from a workbook reader.
    pub fn extract<RS: Read + Seek + Clone>(&self, reader: RS) -> Result<MenuRegistry, MenuGridError> {
        let mut parser = WorkbookParser::open(reader)?;
        self.extract_from(&mut parser)
    }

    /// Extract the registry from a workbook file.
    pub fn extract_path(&self, path: impl AsRef<Path>) -> Result<MenuRegistry, MenuGridError> {
        let mut parser = WorkbookParser::open_path(path)?;
        self.extract_from(&mut parser)
    }

    /// Extract from a workbook reader and write the JSON feed in one step.
    pub fn convert<RS: Read + Seek + Clone, W: Write>(
        &self,
        input: RS,
        mut output: W,
    ) -> Result<(), MenuGridError> {
        let registry = self.extract(input)?;
        self.write_feed(&registry, &mut output)
    }

    /// Extract from a workbook reader into a JSON string.
    pub fn convert_to_string<RS: Read + Seek + Clone>(&self, input: RS) -> Result<String, MenuGridError> {
        let mut buffer = Vec::new();
        self.convert(input, &mut buffer)?;

        String::from_utf8(buffer).map_err(|e| {
            MenuGridError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }

    /// Serialize an extracted registry as the JSON feed.
    pub fn write_feed<W: Write>(
        &self,
        registry: &MenuRegistry,
        writer: &mut W,
    ) -> Result<(), MenuGridError> {
        JsonFeedWriter.render(registry, writer)
    }

    /// Run both passes sequentially against one open workbook.
    fn extract_from<R: Read + Seek>(
        &self,
        parser: &mut WorkbookParser<R>,
    ) -> Result<MenuRegistry, MenuGridError> {
        let mut registry = MenuRegistry::new();

        for layout in [&self.config.dinner, &self.config.breakfast] {
            let range = parser.sheet_range(&layout.sheet_name)?;
            self.grid.run_pass(layout, &range, &mut registry);
        }

        for (date, day) in &registry {
            if day.kahvalti.is_empty() != day.aksam.is_empty() {
                debug!(%date, "date present in only one sheet, other slot left empty");
            }
        }
        info!(dates = registry.len(), "extraction finished");

        Ok(registry)
    }
}
