use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    pub barangay: BarangayConfig,
    pub contact: ContactConfig,
    pub office_hours: Vec<OfficeHours>,
    pub emergency: EmergencyConfig,
    pub about: AboutConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BarangayConfig {
    pub name: String,
    pub municipality: String,
    pub province: String,
    pub motto: String,
    pub copyright_year: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ContactConfig {
    pub address: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OfficeHours {
    pub days: String,
    pub hours: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EmergencyConfig {
    pub number: String,
    pub availability: String,
}

/// "About Our Barangay" section of the homepage
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AboutConfig {
    pub mission: String,
    pub vision: String,
    pub population: u32,
    pub households: u32,
    pub puroks: u32,
    pub area_sq_km: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SearchConfig {
    /// Delay between the last keystroke and the catalog query
    pub debounce_ms: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 250 }
    }
}

impl SiteConfig {
    /// "Barangay Paldit, Sison Pangasinan"
    pub fn full_name(&self) -> String {
        format!(
            "Barangay {}, {} {}",
            self.barangay.name, self.barangay.municipality, self.barangay.province
        )
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[barangay]
name = "Paldit"
municipality = "Sison"
province = "Pangasinan"
motto = "Serving our community with transparency, efficiency, and care"
copyright_year = 2025

[contact]
address = "Barangay Paldit, Sison Pangasinan"
phone = "(+63) 912-345-6789"
email = "paldit01@gmail.com"

[[office_hours]]
days = "Monday - Friday"
hours = "8:00 AM - 5:00 PM"

[[office_hours]]
days = "Saturday"
hours = "8:00 AM - 12:00 PM"

[[office_hours]]
days = "Sunday"
hours = "Closed"

[emergency]
number = "911"
availability = "Available 24/7"

[about]
mission = "To provide efficient, transparent, and responsive governance that promotes the welfare and development of our community while ensuring peace, order, and safety for all residents."
vision = "A progressive, united, and sustainable barangay where every resident enjoys quality life, equal opportunities, and active participation in community development."
population = 2450
households = 680
puroks = 15
area_sq_km = 8.5

[search]
debounce_ms = 250
"#;

/// Parse a site configuration document
pub fn parse_config(contents: &str) -> anyhow::Result<SiteConfig> {
    let config: SiteConfig = toml::from_str(contents)?;
    Ok(config)
}

/// Load `override_toml` when given, falling back to the embedded default.
///
/// A malformed override is logged and ignored; only a broken default is an error.
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<SiteConfig> {
    if let Some(contents) = override_toml {
        match parse_config(contents) {
            Ok(config) => {
                log::info!("Loaded site configuration for {}", config.barangay.name);
                return Ok(config);
            }
            Err(e) => log::warn!("Invalid site configuration, using defaults: {}", e),
        }
    }

    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.barangay.name, "Paldit");
        assert_eq!(config.emergency.number, "911");
        assert_eq!(config.office_hours.len(), 3);
        assert_eq!(config.full_name(), "Barangay Paldit, Sison Pangasinan");
        assert_eq!(config.about.households, 680);
    }

    #[test]
    fn test_invalid_override_falls_back() {
        let config = load_config(Some("[barangay]\nname = 3")).unwrap();
        assert_eq!(config, parse_config(DEFAULT_CONFIG).unwrap());
    }

    #[test]
    fn test_search_section_is_optional() {
        let trimmed = DEFAULT_CONFIG.replace("[search]\ndebounce_ms = 250\n", "");
        let config = parse_config(&trimmed).unwrap();
        assert_eq!(config.search.debounce_ms, 250);
    }
}
