//! Fixed prompt text

use crate::domain::Section;

/// Substitution point for the rendered data table in section templates
pub const DATA_TABLE_SLOT: &str = "{data_table}";

/// Substitution point for the joined section summaries in the final template
pub const ALL_SECTIONS_SLOT: &str = "{all_sections}";

pub const DEMOGRAPHICS_TEMPLATE: &str = r#"## Patient Demographics

{data_table}

Summarize the patient's demographic information in a brief clinical format including:
- Full name, age, and gender
- Contact information if available
- Any relevant administrative details (language preferences, marital status)

Keep the summary concise (2-3 sentences) and professionally formatted."#;

pub const CONDITIONS_TEMPLATE: &str = r#"## Medical Conditions and Diagnoses

{data_table}

Provide a clinical summary of the patient's conditions:
1. **Active Conditions**: Current problems requiring attention, organized by clinical priority
2. **Chronic Conditions**: Ongoing conditions under management
3. **Resolved/Historical**: Significant past conditions if relevant to current care

Use standard medical terminology. Highlight clinically significant findings. If onset dates are available, note duration of conditions."#;

pub const MEDICATIONS_TEMPLATE: &str = r#"## Current Medications

{data_table}

Summarize the patient's medication regimen:
1. **Active Medications**: List current medications with dosing information
2. **Therapeutic Categories**: Note the general therapeutic purposes if apparent
3. **Notable Considerations**: Flag any high-alert medications if present

Format as a clear medication summary suitable for clinical review."#;

pub const OBSERVATIONS_TEMPLATE: &str = r#"## Vital Signs and Laboratory Results

{data_table}

Provide a clinical interpretation of the observations:

**Vital Signs** (if present):
- Recent vital sign values with any abnormalities noted

**Laboratory Results** (if present):
- Key lab values organized by category
- Flag abnormal values with clinical context
- Note interpretations (H/L) where provided

Focus on clinically significant findings. Reference normal ranges where interpretation aids understanding."#;

pub const ALLERGIES_TEMPLATE: &str = r#"## Allergies and Intolerances

{data_table}

Summarize allergy information:
1. **Drug Allergies**: List all medication allergies with reactions and severity
2. **Food Allergies**: Clinically significant food allergies
3. **Other Allergies**: Environmental or other sensitivities
4. **Criticality**: Note high-criticality allergies prominently

This is safety-critical information - be thorough and clear. Flag any high-risk allergies prominently."#;

/// Final synthesis template with the six fixed narrative headings
pub const FINAL_SUMMARY_TEMPLATE: &str = r#"You are creating a comprehensive clinical patient summary based on the following section summaries.

# Section Summaries

{all_sections}

---

# Instructions

Synthesize all available information into a unified, professionally-formatted clinical summary. Structure your response as follows:

## 1. Patient Overview
Brief identification including name, age, gender, and key demographics (2-3 sentences).

## 2. Active Problem List
Summary of current active conditions requiring clinical attention, organized by priority.

## 3. Medication Summary
Current medication regimen with key therapeutic goals noted.

## 4. Recent Clinical Data
Key vital signs and laboratory findings with any abnormalities highlighted.

## 5. Allergy Alert
List of known allergies with severity/criticality. Flag high-risk allergies prominently.

## 6. Clinical Impression
Brief synthesis of the patient's overall clinical picture (2-3 sentences).

---

**Important Guidelines:**
- Use clear medical terminology appropriate for clinical audiences
- Be concise but comprehensive
- Prioritize clinically significant information
- If data is missing for a section, note "No data available" rather than omitting
- Do not fabricate information not present in the source data
- Flag any safety-critical information (severe allergies, high-alert medications)

Generate the comprehensive clinical summary now:"#;
/// System prompt for per-section summary calls
pub const SECTION_SYSTEM_PROMPT: &str = "You are a clinical documentation specialist. \
Provide concise, accurate clinical summaries using standard medical terminology. \
Focus on clinically significant information.";

/// System prompt for the final narrative call
pub const FINAL_SYSTEM_PROMPT: &str = "You are a clinical documentation specialist creating a comprehensive patient summary. \
Synthesize all available clinical data into a cohesive, professionally-formatted narrative \
suitable for healthcare provider review.";

/// Instruction template for a clinical section
pub fn section_template(section: Section) -> &'static str {
    match section {
        Section::Demographics => DEMOGRAPHICS_TEMPLATE,
        Section::Conditions => CONDITIONS_TEMPLATE,
        Section::Medications => MEDICATIONS_TEMPLATE,
        Section::Observations => OBSERVATIONS_TEMPLATE,
        Section::Allergies => ALLERGIES_TEMPLATE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_section_template_has_one_slot() {
        for section in Section::ALL {
            assert_eq!(
                section_template(section).matches(DATA_TABLE_SLOT).count(),
                1,
                "{section}"
            );
        }
    }

    #[test]
    fn test_final_template_headings() {
        assert_eq!(FINAL_SUMMARY_TEMPLATE.matches(ALL_SECTIONS_SLOT).count(), 1);
        for heading in [
            "## 1. Patient Overview",
            "## 2. Active Problem List",
            "## 3. Medication Summary",
            "## 4. Recent Clinical Data",
            "## 5. Allergy Alert",
            "## 6. Clinical Impression",
        ] {
            assert!(FINAL_SUMMARY_TEMPLATE.contains(heading), "{heading}");
        }
    }
}
