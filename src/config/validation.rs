use crate::config::types::{Config, CrawlerConfig, SiteConfig, UserAgentConfig};
use crate::crawler::ListMarkers;
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_markers("browse-markers", &config.browse_markers)?;
    validate_markers("definition-markers", &config.definition_markers)?;
    Ok(())
}

/// Validates the target site configuration
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url '{}' must use http or https",
            config.base_url
        )));
    }

    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.max_pages_per_letter < 1 {
        return Err(ConfigError::Validation(format!(
            "max-pages-per-letter must be >= 1, got {}",
            config.max_pages_per_letter
        )));
    }

    validate_letter("first-letter", config.first_letter)?;
    validate_letter("last-letter", config.last_letter)?;

    if config.first_letter > config.last_letter {
        return Err(ConfigError::Validation(format!(
            "first-letter '{}' comes after last-letter '{}'",
            config.first_letter, config.last_letter
        )));
    }

    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request-timeout-secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    Ok(())
}

fn validate_letter(name: &str, letter: char) -> Result<(), ConfigError> {
    if !letter.is_ascii_uppercase() {
        return Err(ConfigError::Validation(format!(
            "{} must be an uppercase letter A-Z, got '{}'",
            name, letter
        )));
    }
    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Validate crawler name: non-empty, alphanumeric + hyphens only
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler-name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler-name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    if config.crawler_version.is_empty() {
        return Err(ConfigError::Validation(
            "crawler-version cannot be empty".to_string(),
        ));
    }

    if let Some(contact_url) = config.contact_url.as_deref().filter(|u| !u.is_empty()) {
        Url::parse(contact_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact-url: {}", e)))?;
    }

    Ok(())
}

/// Validates one marker table
///
/// Empty extraneous tokens are rejected too: they would swallow blank lines
/// inside the list.
fn validate_markers(table: &str, markers: &ListMarkers) -> Result<(), ConfigError> {
    let required = [
        ("start-of-list", &markers.start_of_list),
        ("end-of-list", &markers.end_of_list),
        ("before-item", &markers.before_item),
        ("after-item", &markers.after_item),
    ];

    for (key, value) in required {
        if value.is_empty() {
            return Err(ConfigError::Validation(format!(
                "[{}] {} cannot be empty",
                table, key
            )));
        }
    }

    if markers.start_of_list == markers.end_of_list {
        return Err(ConfigError::Validation(format!(
            "[{}] start-of-list and end-of-list must differ",
            table
        )));
    }

    if markers.extraneous.iter().any(String::is_empty) {
        return Err(ConfigError::Validation(format!(
            "[{}] extraneous tokens cannot be empty",
            table
        )));
    }

    Ok(())
}
