use serde::{Deserialize, Serialize};
use std::fs;

use working_capital_core::{CovenantThresholds, EngineAssumptions};

/// Presentation identity shown in the table banner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Branding {
    pub name: String,
    pub instructor: String,
    pub credentials: String,
    pub icon: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            name: "The Mountain Path - World of Finance".into(),
            instructor: "Prof. V. Ravichandran".into(),
            credentials: "28+ Years Corporate Finance & Banking | 10+ Years Academic Excellence"
                .into(),
            icon: "🏔️".into(),
        }
    }
}

/// Colour palette for renderers. Carried as data only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub dark_blue: String,
    pub medium_blue: String,
    pub accent_gold: String,
    pub bg_dark: String,
    pub card_bg: String,
    pub text_primary: String,
    pub text_secondary: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            dark_blue: "#003366".into(),
            medium_blue: "#004d80".into(),
            accent_gold: "#FFD700".into(),
            bg_dark: "#0a1628".into(),
            card_bg: "#112240".into(),
            text_primary: "#e6f1ff".into(),
            text_secondary: "#8892b0".into(),
        }
    }
}

/// Contents of the `--config` YAML file. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub branding: Branding,
    pub theme: Theme,
    pub assumptions: EngineAssumptions,
    pub covenants: CovenantThresholds,
}

impl DashboardConfig {
    pub fn load(path: Option<&str>) -> Result<Self, Box<dyn std::error::Error>> {
        let Some(path) = path else {
            tracing::debug!("no config file given; using built-in defaults");
            return Ok(Self::default());
        };
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config '{}': {}", path, e))?;
        let config: DashboardConfig = serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config '{}': {}", path, e))?;
        config.assumptions.validate()?;
        tracing::info!(
            config = path,
            cash_flow_margin = %config.assumptions.cash_flow_margin,
            days_in_year = %config.assumptions.days_in_year,
            "loaded dashboard config"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "assumptions:\n  cash_flow_margin: 0.1\ncovenants:\n  max_ccc_days: 75\n";
        let config: DashboardConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.assumptions.cash_flow_margin, dec!(0.1));
        assert_eq!(config.assumptions.days_in_year, dec!(365));
        assert_eq!(config.covenants.max_ccc_days, dec!(75));
        assert_eq!(config.covenants.min_current_ratio, dec!(1.2));
        assert_eq!(config.theme.accent_gold, "#FFD700");
    }

    #[test]
    fn test_missing_file_defaults() {
        let config = DashboardConfig::load(None).unwrap();
        assert_eq!(config.branding.instructor, "Prof. V. Ravichandran");
    }
}
