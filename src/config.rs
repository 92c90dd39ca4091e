use log::{warn, Level};
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::Result;
use crate::motion::{BackdropConfig, EffectCoefficients};

const SITE_JSON: &str = include_str!("../site.json");

static SITE: Lazy<SiteConfig> = Lazy::new(|| match SiteConfig::from_json(SITE_JSON) {
    Ok(config) => config,
    Err(e) => {
        warn!("Falling back to default site config: {}", e);
        SiteConfig::default()
    }
});

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn site() -> &'static SiteConfig {
    &SITE
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,
    pub tagline: String,
    pub contact: ContactConfig,
    /// Fraction of a section that has to be on screen before it animates in.
    pub visibility_threshold: f64,
    /// Scroll offset in pixels after which the header turns opaque.
    pub header_scroll_offset: f64,
    pub effects: Effects,
    pub backdrop: BackdropConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "OPSIS".to_string(),
            tagline: "Sua marca com alma, forma e presença.".to_string(),
            contact: ContactConfig::default(),
            visibility_threshold: 0.1,
            header_scroll_offset: 20.0,
            effects: Effects::default(),
            backdrop: BackdropConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub phone: String,
    /// Optional text prefilled in the chat.
    pub message: Option<String>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            phone: "5521981905306".to_string(),
            message: None,
        }
    }
}

impl ContactConfig {
    pub fn whatsapp_url(&self) -> String {
        let digits: String = self.phone.chars().filter(char::is_ascii_digit).collect();
        match self.message.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => {
                format!("https://wa.me/{}?text={}", digits, urlencoding::encode(text))
            }
            _ => format!("https://wa.me/{}", digits),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Effects {
    pub hero: EffectCoefficients,
    pub about_title: EffectCoefficients,
    pub about_body: EffectCoefficients,
    pub about_stats: EffectCoefficients,
    pub services_card: EffectCoefficients,
    pub contact: EffectCoefficients,
}

impl Default for Effects {
    fn default() -> Self {
        Self {
            hero: EffectCoefficients::hero(),
            about_title: EffectCoefficients::about_title(),
            about_body: EffectCoefficients::about_body(),
            about_stats: EffectCoefficients::about_stats(),
            services_card: EffectCoefficients::service_card(),
            contact: EffectCoefficients::contact(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_parses() {
        let config = SiteConfig::from_json(SITE_JSON).unwrap();
        assert_eq!(config.brand, "OPSIS");
        assert_eq!(config.backdrop.particle_count, 2000);
        assert!(config.visibility_threshold > 0.0 && config.visibility_threshold <= 1.0);
    }

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_backdrop_keeps_other_defaults() {
        let config =
            SiteConfig::from_json(r#"{ "backdrop": { "particle_count": 300 } }"#).unwrap();
        assert_eq!(config.backdrop.particle_count, 300);
        assert_eq!(config.backdrop.inner_radius, 25.0);
        assert_eq!(config.effects, Effects::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SiteConfig::from_json("{ brand: ").is_err());
    }

    #[test]
    fn whatsapp_url_strips_formatting() {
        let contact = ContactConfig {
            phone: "+55 (21) 98190-5306".to_string(),
            message: None,
        };
        assert_eq!(contact.whatsapp_url(), "https://wa.me/5521981905306");
    }

    #[test]
    fn whatsapp_url_encodes_message() {
        let contact = ContactConfig {
            message: Some("Olá, quero um orçamento & prazo".to_string()),
            ..ContactConfig::default()
        };
        assert_eq!(
            contact.whatsapp_url(),
            "https://wa.me/5521981905306?text=Ol%C3%A1%2C%20quero%20um%20or%C3%A7amento%20%26%20prazo"
        );
    }

    #[test]
    fn blank_message_is_dropped() {
        let contact = ContactConfig {
            message: Some("   ".to_string()),
            ..ContactConfig::default()
        };
        assert_eq!(contact.whatsapp_url(), "https://wa.me/5521981905306");
    }
}
