use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::id::Id;

/// Whether the owner is looking for a caretaker or the garden
/// is already being looked after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GardenStatus {
    Search,
    Guard,
}

#[derive(Debug, Error)]
#[error("Invalid garden status")]
pub struct GardenStatusParseError;

impl FromStr for GardenStatus {
    type Err = GardenStatusParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "search" => Ok(Self::Search),
            "guard" => Ok(Self::Guard),
            _ => Err(GardenStatusParseError),
        }
    }
}

impl fmt::Display for GardenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search => f.write_str("search"),
            Self::Guard => f.write_str("guard"),
        }
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Garden {
    pub id          : Id,
    pub latitude    : f64,
    pub longitude   : f64,
    pub address     : String,
    pub city        : String,
    pub zipcode     : String,
    pub owner_id    : Id,
    pub status      : GardenStatus,
    pub botanist_id : Option<Id>,
}

/// Ternary association: a photographed plant observed in a garden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantSighting {
    pub garden_id: Id,
    pub plant_id: Id,
    pub photo_id: Id,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_status() {
        assert_eq!("search".parse::<GardenStatus>().unwrap(), GardenStatus::Search);
        assert_eq!("guard".parse::<GardenStatus>().unwrap(), GardenStatus::Guard);
        assert!("Search".parse::<GardenStatus>().is_err());
        assert!("pending".parse::<GardenStatus>().is_err());
    }
}
