//! Section prompt rendering

use super::templates::{section_template, DATA_TABLE_SLOT};
use crate::core::table::ResourceTable;
use crate::domain::Section;

/// Substituted for the data table when a section has no records
pub const NO_DATA_PLACEHOLDER: &str = "*No data available for this section*";

/// A rendered prompt for one clinical section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPrompt {
    pub section: Section,
    pub prompt: String,
}

/// Render `table` into the section's template.
///
/// A table with no records gets [`NO_DATA_PLACEHOLDER`] instead of a grid.
pub fn build_section_prompt(section: Section, table: &ResourceTable) -> SectionPrompt {
    let data_table = if table.is_empty() {
        NO_DATA_PLACEHOLDER.to_string()
    } else {
        table.to_grid()
    };

    SectionPrompt {
        section,
        prompt: section_template(section).replacen(DATA_TABLE_SLOT, &data_table, 1),
    }
}
