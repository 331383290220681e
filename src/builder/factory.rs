use serde::{Deserialize, Serialize};

use crate::builder::class_builder::ClassBuilder;
use crate::builder::page_factory::PageFactoryBuilder;
use crate::error::GenError;

// ============================================================================
// Flavour and strategy enums
// ============================================================================

/// Which UI-automation library the generated classes target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Flavour {
    Selenium,
}

impl Flavour {
    pub fn token(&self) -> &'static str {
        match self {
            Flavour::Selenium => "selenium",
        }
    }

    pub fn from_token(token: &str) -> Option<Flavour> {
        match token {
            "selenium" => Some(Flavour::Selenium),
            _ => None,
        }
    }
}

/// Which code shape realizes the flavour. `ByLocator` (plain locator
/// constants resolved per access, no init-time binding) is declared but
/// has no registered builder yet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    PageFactory,
    ByLocator,
}

impl Strategy {
    pub fn token(&self) -> &'static str {
        match self {
            Strategy::PageFactory => "page-factory",
            Strategy::ByLocator => "by-locator",
        }
    }

    pub fn from_token(token: &str) -> Option<Strategy> {
        match token {
            "page-factory" => Some(Strategy::PageFactory),
            "by-locator" => Some(Strategy::ByLocator),
            _ => None,
        }
    }
}

// ============================================================================
// Builder selection
// ============================================================================

/// Resolve the configured (flavour, strategy) pair to a fresh builder for
/// one class. Adding a flavour or strategy means adding a builder variant
/// and an arm here; discovery and parsing stay untouched.
pub fn select(
    flavour: Flavour,
    strategy: Strategy,
    class_name: &str,
) -> Result<Box<dyn ClassBuilder>, GenError> {
    match (flavour, strategy) {
        (Flavour::Selenium, Strategy::PageFactory) => {
            Ok(Box::new(PageFactoryBuilder::new(class_name)))
        }
        (flavour, strategy) => Err(GenError::UnsupportedCombination { flavour, strategy }),
    }
}
