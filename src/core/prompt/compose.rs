//! Final synthesis prompt

use super::templates::{ALL_SECTIONS_SLOT, FINAL_SUMMARY_TEMPLATE};
use crate::domain::Section;
use std::collections::HashMap;

/// Combine section summaries into the final synthesis prompt.
///
/// Sections are emitted in canonical order under a `### {heading}` line,
/// whatever order the map was built in. Sections missing from the map are
/// left out.
pub fn compose_final_prompt(summaries: &HashMap<Section, String>) -> String {
    let all_sections = Section::ALL
        .iter()
        .filter_map(|section| {
            summaries
                .get(section)
                .map(|summary| format!("### {}\n{summary}", section.heading()))
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    FINAL_SUMMARY_TEMPLATE.replacen(ALL_SECTIONS_SLOT, &all_sections, 1)
}
