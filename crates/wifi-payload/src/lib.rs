//! WiFi network credentials and the `WIFI:` QR payload format.
//!
//! Payload layout: `WIFI:T:<type>;S:<ssid>;P:<password>;;`.
//! Values are not escaped; `;` and `:` must be escaped by the caller or absent.

use std::fmt;
use std::str::FromStr;

/// Errors raised while building credentials.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("SSID must not be empty")]
    EmptySsid,

    #[error("A password is required for {0} networks")]
    MissingPassword(NetworkType),

    #[error("Unknown network type '{0}' (expected WPA, WEP or nopass)")]
    UnknownNetworkType(String),
}

/// Result type alias for payload operations.
pub type Result<T> = std::result::Result<T, PayloadError>;

/// WiFi authentication type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NetworkType {
    #[default]
    Wpa,
    Wep,
    NoPass,
}

impl NetworkType {
    pub const ALL: [NetworkType; 3] = [Self::Wpa, Self::Wep, Self::NoPass];

    /// Canonical spelling used in the payload.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wpa => "WPA",
            Self::Wep => "WEP",
            Self::NoPass => "nopass",
        }
    }

    pub fn requires_password(self) -> bool {
        !matches!(self, Self::NoPass)
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkType {
    type Err = PayloadError;

    /// Case-insensitive match against `WPA`, `WEP` and `nopass`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| PayloadError::UnknownNetworkType(s.to_string()))
    }
}

/// Credentials for a single WiFi network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiCredentials {
    ssid: String,
    password: String,
    network_type: NetworkType,
}

impl WifiCredentials {
    /// Build credentials, trimming surrounding whitespace from both fields.
    pub fn new(ssid: &str, password: &str, network_type: NetworkType) -> Result<Self> {
        let ssid = ssid.trim();
        let password = password.trim();

        if ssid.is_empty() {
            return Err(PayloadError::EmptySsid);
        }
        if password.is_empty() && network_type.requires_password() {
            return Err(PayloadError::MissingPassword(network_type));
        }

        tracing::debug!(ssid, %network_type, "WiFi credentials accepted");
        Ok(Self {
            ssid: ssid.to_string(),
            password: password.to_string(),
            network_type,
        })
    }

    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn network_type(&self) -> NetworkType {
        self.network_type
    }

    /// Render the `WIFI:` payload string.
    pub fn payload(&self) -> String {
        format!(
            "WIFI:T:{};S:{};P:{};;",
            self.network_type, self.ssid, self.password
        )
    }
}
