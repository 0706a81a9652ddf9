//! Store configuration.
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! store's standard behavior: free delivery from 1000 ₽, a 199 ₽ fee below
//! that, and a three-day expiry warning.

use serde::{Deserialize, Serialize};
use vkusno_observability::{LogFormat, LogLevel};

use crate::cart::DeliveryPolicy;
use crate::catalog::ExpiryPolicy;
use crate::error::CommerceError;

/// Store configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Storefront identity and contacts.
    #[serde(default)]
    pub store: StoreInfo,

    /// Delivery pricing.
    #[serde(default)]
    pub delivery: DeliveryPolicy,

    /// Expiry warning window.
    #[serde(default)]
    pub expiry: ExpiryPolicy,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StoreConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        let config: StoreConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Render as a TOML document.
    pub fn to_toml_string(&self) -> Result<String, CommerceError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the pricing and expiry logic cannot use.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.delivery.flat_fee.amount() < 0 {
            return Err(CommerceError::Config(
                "delivery.flat_fee must not be negative".to_string(),
            ));
        }
        if self.delivery.free_threshold.amount() < 0 {
            return Err(CommerceError::Config(
                "delivery.free_threshold must not be negative".to_string(),
            ));
        }
        if self.expiry.warning_days < 0 {
            return Err(CommerceError::Config(
                "expiry.warning_days must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Storefront identity shown in the header and footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreInfo {
    /// Store name.
    #[serde(default = "default_name")]
    pub name: String,

    /// Contact phone.
    #[serde(default = "default_phone")]
    pub phone: String,

    /// Contact email.
    #[serde(default = "default_email")]
    pub email: String,

    /// Street address.
    #[serde(default = "default_address")]
    pub address: String,
}

fn default_name() -> String {
    "Вкусно & Свежо".to_string()
}

fn default_phone() -> String {
    "+7 (495) 123-45-67".to_string()
}

fn default_email() -> String {
    "info@vkusno-svezho.ru".to_string()
}

fn default_address() -> String {
    "Москва, ул. Примерная, 123".to_string()
}

impl Default for StoreInfo {
    fn default() -> Self {
        Self {
            name: default_name(),
            phone: default_phone(),
            email: default_email(),
            address: default_address(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Output format.
    #[serde(default)]
    pub format: LogFormat,

    /// Minimum level.
    #[serde(default)]
    pub level: LogLevel,
}
