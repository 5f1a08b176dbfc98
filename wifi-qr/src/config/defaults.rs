//! All setting definitions with their default values.

/// A single setting definition.
#[derive(Debug, Clone, Copy)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

/// Accepted range for [`SIZE`], in pixels.
pub const MIN_SIZE: u32 = 21;
pub const MAX_SIZE: u32 = 4096;

pub const SIZE: &str = "WIFI_QR_SIZE";
pub const LOGO: &str = "WIFI_QR_LOGO";
pub const OUTPUT: &str = "WIFI_QR_OUTPUT";
pub const PLAIN_OUTPUT: &str = "WIFI_QR_PLAIN_OUTPUT";
pub const QUIET_ZONE: &str = "WIFI_QR_QUIET_ZONE";
pub const LOGO_SCALE: &str = "WIFI_QR_LOGO_SCALE";
pub const MARGIN_SCALE: &str = "WIFI_QR_MARGIN_SCALE";

pub const DEFAULT_SETTINGS: &[SettingDef] = &[
    SettingDef {
        key: SIZE,
        default: "512",
        description: "Side length of the generated QR image in pixels",
    },
    SettingDef {
        key: LOGO,
        default: "logo.png",
        description: "Logo composited onto the code; skipped when the file is missing",
    },
    SettingDef {
        key: OUTPUT,
        default: "wifi-qr-branded.png",
        description: "Path of the final image",
    },
    SettingDef {
        key: PLAIN_OUTPUT,
        default: "",
        description: "Optional path for a copy of the unbranded QR code",
    },
    SettingDef {
        key: QUIET_ZONE,
        default: "true",
        description: "Draw the 4-module light border around the symbol",
    },
    SettingDef {
        key: LOGO_SCALE,
        default: "0.20",
        description: "Largest logo dimension relative to the QR side",
    },
    SettingDef {
        key: MARGIN_SCALE,
        default: "1.4",
        description: "Pad diameter relative to the largest logo dimension",
    },
];

/// Help text listing every environment setting with its default.
pub fn env_help() -> String {
    let mut help = String::from("Environment settings (overridden by flags):\n");
    for def in DEFAULT_SETTINGS {
        help.push_str(&format!(
            "  {:<22} {} [default: {:?}]\n",
            def.key, def.description, def.default
        ));
    }
    help
}

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.iter().find(|d| d.key == key).map(|d| d.default)
}
