//! Config validation.
//!
//! Collects every problem into a single `ConfigError::ValidationError`.

use crate::schema::RyzomConfig;
use regex::Regex;
use ryzom_common::ConfigError;
use std::sync::LazyLock;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Colors safe to place in a `style` attribute: a CSS name, a hex color,
/// or `rgb()`/`rgba()` with numeric arguments.
static CSS_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[a-zA-Z]+|#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})|rgba?\(\s*\d{1,3}\s*,\s*\d{1,3}\s*,\s*\d{1,3}\s*(?:,\s*[0-9]*\.?[0-9]+\s*)?\))$",
    )
    .unwrap()
});

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &RyzomConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_css_color(
        &mut errors,
        "render.single_segment_color",
        &config.render.single_segment_color,
    );
    validate_css_color(
        &mut errors,
        "render.multi_segment_color",
        &config.render.multi_segment_color,
    );

    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(format!(
            "logging.level = {:?} must be one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_css_color(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} is empty"));
    } else if !CSS_COLOR_RE.is_match(value.trim()) {
        errors.push(format!("{name} = {value:?} is not a recognized color"));
    }
}
