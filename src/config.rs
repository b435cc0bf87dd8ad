use log::{warn, Level};
use serde::Deserialize;
use web_sys::window;

use crate::error::SiteError;

/// Id of the optional `<script type="application/json">` block in index.html
/// that overrides the built-in defaults.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Fixed delays driving the staged transitions of the page, in milliseconds.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Timings {
    pub preloader_stage_ms: u32,
    pub page_ready_ms: u32,
    pub submit_delay_ms: u32,
    pub banner_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            preloader_stage_ms: 1500,
            page_ready_ms: 3500,
            submit_delay_ms: 1500,
            banner_ms: 5000,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Destination of the WhatsApp deep link, digits only with country code.
    pub whatsapp_number: String,
    /// Name used in the greeting line of the composed message.
    pub doctor_greeting: String,
    pub timings: Timings,
    pub header_scroll_threshold: f64,
    pub reveal_threshold: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: "5511973658355".to_string(),
            doctor_greeting: "Dra. Aline".to_string(),
            timings: Timings::default(),
            header_scroll_threshold: 50.0,
            reveal_threshold: 0.2,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let config = serde_json::from_str::<SiteConfig>(raw)?;
        Ok(config)
    }

    /// Reads the override block from the host document. Never fails: a missing
    /// block means defaults, a malformed one is logged and ignored.
    pub fn load() -> Self {
        match Self::read_override() {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                warn!("Ignoring site configuration override: {}", e);
                Self::default()
            }
        }
    }

    fn read_override() -> Result<Option<Self>, SiteError> {
        let document = window()
            .ok_or(SiteError::NoWindow)?
            .document()
            .ok_or(SiteError::NoDocument)?;
        let raw = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content());
        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).map(Some),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_constants() {
        let config = SiteConfig::default();
        assert_eq!(config.whatsapp_number, "5511973658355");
        assert_eq!(config.timings.preloader_stage_ms, 1500);
        assert_eq!(config.timings.page_ready_ms, 3500);
        assert_eq!(config.timings.banner_ms, 5000);
        assert_eq!(config.header_scroll_threshold, 50.0);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config =
            SiteConfig::from_json(r#"{"whatsapp_number":"5511999990000","timings":{"banner_ms":3000}}"#)
                .unwrap();
        assert_eq!(config.whatsapp_number, "5511999990000");
        assert_eq!(config.doctor_greeting, "Dra. Aline");
        assert_eq!(config.timings.banner_ms, 3000);
        assert_eq!(config.timings.submit_delay_ms, 1500);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_malformed_override_is_an_error() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }
}
