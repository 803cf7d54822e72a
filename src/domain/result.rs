//! Result type alias for summary operations

use super::errors::SummaryError;

/// Result type alias using [`SummaryError`]
///
/// # Examples
///
/// ```
/// use clinical_summary::domain::result::Result;
/// use clinical_summary::domain::errors::SummaryError;
///
/// fn failing_function() -> Result<()> {
///     Err(SummaryError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, SummaryError>;
