//! Prompt assembly.
//!
//! - [`section`] renders one [`ResourceTable`](crate::core::table::ResourceTable)
//!   into its clinical section template
//! - [`compose`] joins section summaries into the final synthesis prompt
//! - [`templates`] holds the fixed instruction text and system prompts

pub mod compose;
pub mod section;
pub mod templates;

pub use compose::compose_final_prompt;
pub use section::{build_section_prompt, SectionPrompt, NO_DATA_PLACEHOLDER};
