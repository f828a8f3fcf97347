use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::fmt::Formatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
pub enum CrewComplement {
    #[default]
    #[serde(rename = "standard")]
    #[value(name = "standard", alias = "2-crew")]
    Standard,
    #[serde(rename = "3-crew")]
    #[value(name = "3-crew")]
    ThreeCrew,
    #[serde(rename = "4-crew")]
    #[value(name = "4-crew")]
    FourCrew,
}

impl CrewComplement {
    pub fn pilots(self) -> u8 {
        match self {
            CrewComplement::Standard => 2,
            CrewComplement::ThreeCrew => 3,
            CrewComplement::FourCrew => 4,
        }
    }

    pub fn is_augmented(self) -> bool {
        self != CrewComplement::Standard
    }

    /// Case-insensitive, accepts the same names as the command line.
    pub fn parse(s: &str) -> Option<CrewComplement> {
        <CrewComplement as ValueEnum>::from_str(s.trim(), true).ok()
    }
}

impl fmt::Display for CrewComplement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CrewComplement::Standard => write!(f, "Standard (2-pilot)"),
            CrewComplement::ThreeCrew => write!(f, "3-Crew"),
            CrewComplement::FourCrew => write!(f, "4-Crew"),
        }
    }
}

/// In-flight rest accommodation for augmented crews. Class 1 allows the
/// longest duty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(into = "u8")]
pub enum RestFacilityClass {
    #[default]
    One,
    Two,
    Three,
}

impl RestFacilityClass {
    pub const ALL: [RestFacilityClass; 3] = [
        RestFacilityClass::One,
        RestFacilityClass::Two,
        RestFacilityClass::Three,
    ];

    /// Clamps into 1-3.
    pub fn from_number(class: i64) -> RestFacilityClass {
        match class {
            i64::MIN..=1 => RestFacilityClass::One,
            2 => RestFacilityClass::Two,
            _ => RestFacilityClass::Three,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            RestFacilityClass::One => 1,
            RestFacilityClass::Two => 2,
            RestFacilityClass::Three => 3,
        }
    }

    pub fn label(self) -> String {
        format!("Class {}", self.number())
    }

    pub fn description(self) -> &'static str {
        match self {
            RestFacilityClass::One => {
                "Bunk or equivalent allowing horizontal sleep, e.g. a crew rest compartment with a lie-flat bed."
            }
            RestFacilityClass::Two => {
                "Reclining seat with leg support, separated from passengers and the flight deck, e.g. a dedicated crew seat."
            }
            RestFacilityClass::Three => {
                "Seat in the passenger cabin, e.g. a business class seat. No dedicated crew rest area."
            }
        }
    }
}

impl From<RestFacilityClass> for u8 {
    fn from(class: RestFacilityClass) -> u8 {
        class.number()
    }
}

impl<'de> Deserialize<'de> for RestFacilityClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(RestFacilityClass::from_number(i64::deserialize(deserializer)?))
    }
}

impl fmt::Display for RestFacilityClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Scheduled flights in the duty period, clamped into 1-10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub struct Sectors(u8);

impl Sectors {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(sectors: i64) -> Sectors {
        Sectors(sectors.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn count(self) -> u8 {
        self.0
    }

    pub fn is_two_or_less(self) -> bool {
        self.0 <= 2
    }

    /// Column of the two-pilot FDP table. Columns for one and two flights
    /// are merged and ten flights saturates.
    pub fn fdp_column(self) -> usize {
        match self.0 {
            0..=2 => 0,
            10.. => 9,
            s => (s - 2) as usize,
        }
    }
}

impl From<Sectors> for u8 {
    fn from(sectors: Sectors) -> u8 {
        sectors.0
    }
}

impl<'de> Deserialize<'de> for Sectors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Sectors::new(i64::deserialize(deserializer)?))
    }
}

impl fmt::Display for Sectors {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crew_names() {
        assert_eq!(Some(CrewComplement::Standard), CrewComplement::parse("standard"));
        assert_eq!(Some(CrewComplement::Standard), CrewComplement::parse("2-crew"));
        assert_eq!(Some(CrewComplement::ThreeCrew), CrewComplement::parse("3-CREW"));
        assert_eq!(Some(CrewComplement::FourCrew), CrewComplement::parse(" 4-crew "));
        assert_eq!(None, CrewComplement::parse("5-crew"));
        assert_eq!(
            CrewComplement::ThreeCrew,
            serde_json::from_str::<CrewComplement>("\"3-crew\"").unwrap()
        );
    }

    #[test]
    fn test_rest_class_clamps() {
        assert_eq!(RestFacilityClass::One, RestFacilityClass::from_number(-7));
        assert_eq!(RestFacilityClass::One, RestFacilityClass::from_number(1));
        assert_eq!(RestFacilityClass::Two, RestFacilityClass::from_number(2));
        assert_eq!(RestFacilityClass::Three, RestFacilityClass::from_number(3));
        assert_eq!(RestFacilityClass::Three, RestFacilityClass::from_number(42));
        assert_eq!("Class 2", RestFacilityClass::Two.label());
        assert_eq!(
            RestFacilityClass::Three,
            serde_json::from_str::<RestFacilityClass>("9").unwrap()
        );
        assert_eq!("1", serde_json::to_string(&RestFacilityClass::One).unwrap());
    }

    #[test]
    fn test_sectors_clamp() {
        assert_eq!(1, Sectors::new(0).count());
        assert_eq!(1, Sectors::new(-3).count());
        assert_eq!(10, Sectors::new(11).count());
        assert_eq!(10, Sectors::new(i64::MAX).count());
        assert_eq!(5, Sectors::new(5).count());
    }

    #[test]
    fn test_fdp_column() {
        let columns: Vec<usize> = (1..=10).map(|s| Sectors::new(s).fdp_column()).collect();
        assert_eq!(vec![0, 0, 1, 2, 3, 4, 5, 6, 7, 9], columns);
    }
}
