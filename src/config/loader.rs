//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::SummaryConfig;
use super::secret::secret_string;
use crate::domain::errors::SummaryError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Prefix of environment variables that override file settings
pub const ENV_PREFIX: &str = "CLINICAL_SUMMARY";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into SummaryConfig
/// 4. Applies environment variable overrides (CLINICAL_SUMMARY_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`SummaryError::Configuration`] if the file is missing or
/// unreadable, a referenced variable is unset, parsing fails, or validation
/// fails.
///
/// # Examples
///
/// ```no_run
/// use clinical_summary::config::loader::load_config;
///
/// let config = load_config("clinical-summary.toml")?;
/// println!("FHIR server: {}", config.fhir.base_url);
/// # Ok::<(), clinical_summary::domain::SummaryError>(())
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<SummaryConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SummaryError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        SummaryError::Configuration(format!(
            "Failed to read configuration file {}: {e}",
            path.display()
        ))
    })?;

    let mut config = parse_config(&contents)?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        SummaryError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitute `${VAR}` references and parse, without overrides or validation
pub fn parse_config(contents: &str) -> Result<SummaryConfig> {
    let contents = substitute_env_vars(contents)?;
    toml::from_str(&contents)
        .map_err(|e| SummaryError::Configuration(format!("Failed to parse TOML: {e}")))
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| SummaryError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&format!("${{{var_name}}}"), &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(SummaryError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

fn env_override(section: &str, key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}_{section}_{key}")).ok()
}

fn parse_override<T: std::str::FromStr>(section: &str, key: &str) -> Result<Option<T>> {
    match env_override(section, key) {
        Some(raw) => raw.trim().parse().map(Some).map_err(|_| {
            SummaryError::Configuration(format!(
                "Invalid value '{raw}' for {ENV_PREFIX}_{section}_{key}"
            ))
        }),
        None => Ok(None),
    }
}

/// Applies environment variable overrides
///
/// Variables follow the pattern `CLINICAL_SUMMARY_<SECTION>_<KEY>`, e.g.
/// `CLINICAL_SUMMARY_FHIR_BASE_URL` or `CLINICAL_SUMMARY_LLM_API_KEY`.
fn apply_env_overrides(config: &mut SummaryConfig) -> Result<()> {
    // Application overrides
    if let Some(val) = env_override("APPLICATION", "LOG_LEVEL") {
        config.application.log_level = val;
    }

    // FHIR overrides
    if let Some(val) = env_override("FHIR", "BASE_URL") {
        config.fhir.base_url = val;
    }
    if let Some(val) = parse_override("FHIR", "TIMEOUT_SECONDS")? {
        config.fhir.timeout_seconds = val;
    }
    if let Some(val) = parse_override("FHIR", "SEARCH_COUNT")? {
        config.fhir.search_count = val;
    }
    if let Some(val) = parse_override("FHIR", "TLS_VERIFY")? {
        config.fhir.tls_verify = val;
    }

    // LLM overrides
    if let Some(val) = env_override("LLM", "BASE_URL") {
        config.llm.base_url = val;
    }
    if let Some(val) = env_override("LLM", "API_KEY") {
        config.llm.api_key = Some(secret_string(val));
    }
    if let Some(val) = env_override("LLM", "MODEL") {
        config.llm.model = val;
    }
    if let Some(val) = parse_override("LLM", "TEMPERATURE")? {
        config.llm.temperature = val;
    }
    if let Some(val) = parse_override("LLM", "MAX_TOKENS")? {
        config.llm.max_tokens = val;
    }
    if let Some(val) = parse_override("LLM", "SECTION_MAX_TOKENS")? {
        config.llm.section_max_tokens = val;
    }
    if let Some(val) = parse_override("LLM", "TIMEOUT_SECONDS")? {
        config.llm.timeout_seconds = val;
    }

    // Logging overrides
    if let Some(val) = parse_override("LOGGING", "LOCAL_ENABLED")? {
        config.logging.local_enabled = val;
    }
    if let Some(val) = env_override("LOGGING", "LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Some(val) = env_override("LOGGING", "LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
