//! Vehicle classification
//!
//! Two axes drive schedule partitioning: the title condition of the vehicle
//! and its weight class. Both default to the most common auction case
//! (salvage title, light duty) when a caller leaves them unspecified.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vehicle title condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleType {
    /// Damaged / rebuildable title
    Salvage,
    /// Undamaged title
    Clean,
}

impl Default for TitleType {
    fn default() -> Self {
        TitleType::Salvage
    }
}

impl fmt::Display for TitleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TitleType::Salvage => write!(f, "salvage"),
            TitleType::Clean => write!(f, "clean"),
        }
    }
}

impl FromStr for TitleType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "salvage" => Ok(TitleType::Salvage),
            "clean" => Ok(TitleType::Clean),
            _ => Err(()),
        }
    }
}

/// Vehicle weight class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    /// Light duty (cars, light trucks)
    Light,
    /// Heavy duty (commercial trucks, equipment)
    Heavy,
}

impl Default for VehicleType {
    fn default() -> Self {
        VehicleType::Light
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleType::Light => write!(f, "light"),
            VehicleType::Heavy => write!(f, "heavy"),
        }
    }
}

impl FromStr for VehicleType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(VehicleType::Light),
            "heavy" => Ok(VehicleType::Heavy),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(TitleType::default(), TitleType::Salvage);
        assert_eq!(VehicleType::default(), VehicleType::Light);
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("Clean".parse(), Ok(TitleType::Clean));
        assert_eq!(" HEAVY ".parse(), Ok(VehicleType::Heavy));
        assert!("rebuilt".parse::<TitleType>().is_err());
    }
}
