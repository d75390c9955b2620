use serde::{Deserialize, Serialize};
use std::fmt;

/// Renewal cadence of a subscription.
///
/// The store speaks the Portuguese codes (`mensal` / `anual`);
/// the English spellings are accepted on input as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenewalType {
    #[serde(rename = "mensal", alias = "monthly")]
    Monthly,
    #[serde(rename = "anual", alias = "yearly", alias = "annual")]
    Yearly,
}

impl RenewalType {
    pub fn code(&self) -> &'static str {
        match self {
            RenewalType::Monthly => "mensal",
            RenewalType::Yearly => "anual",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.code()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "mensal" => Some(RenewalType::Monthly),
            "anual" => Some(RenewalType::Yearly),
            _ => None,
        }
    }

    /// Lenient parser for CLI and wire input (case-insensitive, PT or EN).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "mensal" | "monthly" | "m" => Some(RenewalType::Monthly),
            "anual" | "yearly" | "annual" | "y" | "a" => Some(RenewalType::Yearly),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RenewalType::Monthly => "Monthly",
            RenewalType::Yearly => "Yearly",
        }
    }
}

impl fmt::Display for RenewalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
