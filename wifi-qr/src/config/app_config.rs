//! Runtime application configuration loaded from environment variables.

use std::path::PathBuf;

use super::defaults::{
    LOGO, LOGO_SCALE, MARGIN_SCALE, OUTPUT, PLAIN_OUTPUT, QUIET_ZONE, SIZE, get_default,
};
use super::validation::validate_setting;

/// Runtime configuration; every field has a default.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub size: u32,
    pub logo_path: PathBuf,
    pub output_path: PathBuf,
    pub plain_output: Option<PathBuf>,
    pub quiet_zone: bool,
    pub logo_scale: f64,
    pub margin_scale: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_source(|_| None)
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Self {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Load configuration from `lookup`, falling back to defaults.
    ///
    /// Values that fail validation are logged and replaced by the default.
    pub fn from_source<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let g = |key: &str| -> String {
            let default = get_default(key).unwrap_or_default();
            match lookup(key) {
                Some(value) => match validate_setting(key, &value) {
                    Ok(()) => value,
                    Err(e) => {
                        tracing::warn!("Ignoring {key}={value:?}: {e}; using {default:?}");
                        default.to_string()
                    }
                },
                None => default.to_string(),
            }
        };

        let plain_output = g(PLAIN_OUTPUT);

        Self {
            size: parse_u32(&g(SIZE), 512),
            logo_path: PathBuf::from(g(LOGO)),
            output_path: PathBuf::from(g(OUTPUT)),
            plain_output: (!plain_output.is_empty()).then(|| PathBuf::from(plain_output)),
            quiet_zone: g(QUIET_ZONE) == "true",
            logo_scale: parse_f64(&g(LOGO_SCALE), qr_render::LOGO_SCALE),
            margin_scale: parse_f64(&g(MARGIN_SCALE), qr_render::MARGIN_SCALE),
        }
    }
}

fn parse_u32(s: &str, default: u32) -> u32 {
    if s.is_empty() {
        return default;
    }
    s.parse().unwrap_or(default)
}

fn parse_f64(s: &str, default: f64) -> f64 {
    if s.is_empty() {
        return default;
    }
    s.parse().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_source(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.size, 512);
        assert_eq!(config.logo_path, PathBuf::from("logo.png"));
        assert_eq!(config.output_path, PathBuf::from("wifi-qr-branded.png"));
        assert_eq!(config.plain_output, None);
        assert!(config.quiet_zone);
        assert_eq!(config.logo_scale, 0.20);
        assert_eq!(config.margin_scale, 1.4);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("WIFI_QR_SIZE", "256"),
            ("WIFI_QR_LOGO", "brand/cafe.png"),
            ("WIFI_QR_PLAIN_OUTPUT", "wifi-qr.png"),
            ("WIFI_QR_QUIET_ZONE", "false"),
            ("WIFI_QR_LOGO_SCALE", "0.15"),
        ]);
        assert_eq!(config.size, 256);
        assert_eq!(config.logo_path, PathBuf::from("brand/cafe.png"));
        assert_eq!(config.plain_output, Some(PathBuf::from("wifi-qr.png")));
        assert!(!config.quiet_zone);
        assert_eq!(config.logo_scale, 0.15);
        assert_eq!(config.margin_scale, 1.4);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("WIFI_QR_SIZE", "10"),
            ("WIFI_QR_QUIET_ZONE", "maybe"),
            ("WIFI_QR_MARGIN_SCALE", "abc"),
        ]);
        assert_eq!(config.size, 512);
        assert!(config.quiet_zone);
        assert_eq!(config.margin_scale, 1.4);
    }
}
