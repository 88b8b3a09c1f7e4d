//! eBay marketplace (global id) identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Global id of the US marketplace.
pub const GLOBAL_ID_EBAY_US: &str = Marketplace::Us.global_id();
/// Global id of the French marketplace.
pub const GLOBAL_ID_EBAY_FR: &str = Marketplace::Fr.global_id();
/// Global id of the German marketplace.
pub const GLOBAL_ID_EBAY_DE: &str = Marketplace::De.global_id();
/// Global id of the Italian marketplace.
pub const GLOBAL_ID_EBAY_IT: &str = Marketplace::It.global_id();
/// Global id of the Spanish marketplace.
pub const GLOBAL_ID_EBAY_ES: &str = Marketplace::Es.global_id();

/// Marketplaces with a named global id.
///
/// The Finding service accepts more ids than these; `Session` takes the id
/// as a plain string so any of them can be passed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Marketplace {
    #[default]
    #[serde(rename = "EBAY-US")]
    Us,
    #[serde(rename = "EBAY-FR")]
    Fr,
    #[serde(rename = "EBAY-DE")]
    De,
    #[serde(rename = "EBAY-IT")]
    It,
    #[serde(rename = "EBAY-ES")]
    Es,
}

impl Marketplace {
    /// Returns the `GLOBAL-ID` value sent to the service.
    pub const fn global_id(&self) -> &'static str {
        match self {
            Marketplace::Us => "EBAY-US",
            Marketplace::Fr => "EBAY-FR",
            Marketplace::De => "EBAY-DE",
            Marketplace::It => "EBAY-IT",
            Marketplace::Es => "EBAY-ES",
        }
    }

    /// Returns the public site domain for this marketplace.
    pub fn domain(&self) -> &'static str {
        match self {
            Marketplace::Us => "ebay.com",
            Marketplace::Fr => "ebay.fr",
            Marketplace::De => "ebay.de",
            Marketplace::It => "ebay.it",
            Marketplace::Es => "ebay.es",
        }
    }

    /// Returns all named marketplaces.
    pub fn all() -> &'static [Marketplace] {
        &[Marketplace::Us, Marketplace::Fr, Marketplace::De, Marketplace::It, Marketplace::Es]
    }
}

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.global_id())
    }
}

impl FromStr for Marketplace {
    type Err = MarketplaceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ebay-us" | "us" | "united states" => Ok(Marketplace::Us),
            "ebay-fr" | "fr" | "france" => Ok(Marketplace::Fr),
            "ebay-de" | "de" | "germany" => Ok(Marketplace::De),
            "ebay-it" | "it" | "italy" => Ok(Marketplace::It),
            "ebay-es" | "es" | "spain" => Ok(Marketplace::Es),
            _ => Err(MarketplaceParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MarketplaceParseError(String);

impl fmt::Display for MarketplaceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown marketplace '{}'. Valid marketplaces: EBAY-US, EBAY-FR, EBAY-DE, EBAY-IT, EBAY-ES",
            self.0
        )
    }
}

impl std::error::Error for MarketplaceParseError {}
