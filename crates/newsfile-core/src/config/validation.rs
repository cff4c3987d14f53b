//! Configuration validation

use std::collections::HashSet;

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::NewsConfig;

/// Validate configuration
pub fn validate_config(config: &NewsConfig) -> Result<()> {
    debug!("validating configuration");
    validate_templates(config)?;
    validate_credits(config)?;
    validate_categories(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn invalid(field: &str, message: impl Into<String>) -> crate::error::NewsfileError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.into(),
    }
    .into()
}

fn validate_templates(config: &NewsConfig) -> Result<()> {
    if !config.tag_format.contains("{version}") {
        return Err(invalid("tag_format", "must contain {version} placeholder"));
    }

    if !config.pr_url_template.contains("{id}") {
        return Err(invalid("pr_url_template", "must contain {id} placeholder"));
    }

    Ok(())
}

fn validate_credits(config: &NewsConfig) -> Result<()> {
    if config.wrap_width == 0 {
        return Err(invalid("wrap_width", "must be greater than zero"));
    }

    if config.team_members.iter().any(|m| m.trim().is_empty()) {
        return Err(invalid("team_members", "names cannot be empty"));
    }

    Ok(())
}

fn validate_categories(config: &NewsConfig) -> Result<()> {
    if config.categories.is_empty() {
        return Err(invalid("categories", "at least one category is required"));
    }

    let mut seen = HashSet::new();
    for category in &config.categories {
        if category.name.trim().is_empty() {
            return Err(invalid("categories.name", "name cannot be empty"));
        }
        if !category.pattern.ends_with(".md") {
            return Err(invalid(
                "categories.pattern",
                format!("pattern for '{}' must end with .md", category.name),
            ));
        }
        if !seen.insert(category.name.as_str()) {
            return Err(invalid(
                "categories.name",
                format!("duplicate category '{}'", category.name),
            ));
        }
    }

    Ok(())
}
