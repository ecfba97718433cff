//! Static company branding bundles: display name, color pair, logo asset.

use std::path::{Path, PathBuf};

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CompanyConfig {
    pub key: &'static str,
    pub name: &'static str,
    /// Hex color like "#1e3a8a".
    pub primary_color: &'static str,
    pub secondary_color: &'static str,
    /// Logo file name under the configured asset directory.
    #[serde(skip)]
    pub logo_file: Option<&'static str>,
}

/// All known companies. The first entry is the hard-coded default for
/// unrecognized keys.
pub const COMPANIES: &[CompanyConfig] = &[
    CompanyConfig {
        key: "galdora",
        name: "Galdora",
        primary_color: "#1e3a8a",
        secondary_color: "#3b82f6",
        logo_file: Some("galdora-logo.png"),
    },
    CompanyConfig {
        key: "bejob",
        name: "BeJob",
        primary_color: "#059669",
        secondary_color: "#10b981",
        logo_file: Some("bejob-logo.png"),
    },
];

/// Case-insensitive lookup; unknown keys fall back to the default entry.
pub fn company_config(key: &str) -> &'static CompanyConfig {
    let key = key.to_lowercase();
    COMPANIES
        .iter()
        .find(|c| c.key == key)
        .unwrap_or(&COMPANIES[0])
}

impl CompanyConfig {
    pub fn logo_path(&self, asset_dir: &str) -> Option<PathBuf> {
        self.logo_file.map(|f| Path::new(asset_dir).join(f))
    }

    /// Primary color as an RGB triple for the PDF composer.
    pub fn primary_rgb(&self) -> (u8, u8, u8) {
        parse_hex_color(self.primary_color).unwrap_or((0, 0, 0))
    }

    /// Primary color as a bare hex string (no '#') for DOCX run properties.
    pub fn primary_hex(&self) -> &str {
        self.primary_color.trim_start_matches('#')
    }
}

fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(company_config("BeJob").key, "bejob");
        assert_eq!(company_config("GALDORA").key, "galdora");
    }

    #[test]
    fn test_unknown_key_falls_back_to_default() {
        let config = company_config("acme");
        assert_eq!(config.key, COMPANIES[0].key);
        assert_eq!(config.primary_color, "#1e3a8a");
    }

    #[test]
    fn test_primary_rgb() {
        assert_eq!(company_config("galdora").primary_rgb(), (0x1e, 0x3a, 0x8a));
        assert_eq!(company_config("bejob").primary_rgb(), (0x05, 0x96, 0x69));
    }

    #[test]
    fn test_primary_hex_has_no_hash() {
        assert_eq!(company_config("bejob").primary_hex(), "059669");
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert_eq!(parse_hex_color("1e3a8a"), None);
        assert_eq!(parse_hex_color("#xyzxyz"), None);
        assert_eq!(parse_hex_color("#fff"), None);
    }
}
