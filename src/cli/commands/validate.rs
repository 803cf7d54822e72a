//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// Loading already validates; secrets are never printed.
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Environment: {:?}", config.environment);
        println!("  Log Level: {}", config.application.log_level);
        println!("  FHIR Server: {}", config.fhir.base_url);
        println!("  FHIR Timeout: {}s", config.fhir.timeout_seconds);
        println!("  Search Count: {}", config.fhir.search_count);
        println!("  TLS Verify: {}", config.fhir.tls_verify);
        println!("  LLM Endpoint: {}", config.llm.base_url);
        println!("  Model: {}", config.llm.model);
        println!(
            "  API Key: {}",
            if config.llm.api_key.is_some() { "set" } else { "not set" }
        );
        println!("  Temperature: {}", config.llm.temperature);
        println!(
            "  Max Tokens: {} (sections: {})",
            config.llm.max_tokens, config.llm.section_max_tokens
        );
        if config.logging.local_enabled {
            println!(
                "  Log Files: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        }
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_missing_file_is_configuration_error() {
        let code = ValidateArgs {}
            .execute("does-not-exist-clinical-summary.toml")
            .await
            .unwrap();
        assert_eq!(code, 2);
    }

    #[tokio::test]
    async fn test_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[fhir]\nbase_url = \"http://localhost:8080/fhir\"\n\n[llm]\napi_key = \"sk-validate\""
        )
        .unwrap();

        let code = ValidateArgs {}
            .execute(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, 0);
    }
}
