//! Operations manual 8-5 duty limits, in hours.

use crate::crew::{CrewComplement, RestFacilityClass, Sectors};
use crate::fdp::band::{Band, BandTable};

/// Two-pilot FDP by report-time band. Columns follow [`Sectors::fdp_column`]:
/// 1-2 flights, then 3 through 9, with the last column used from 10 flights.
pub static TWO_PILOT_FDP: BandTable<[f64; 10]> = BandTable::new(&TWO_PILOT_FDP_BANDS);

static TWO_PILOT_FDP_BANDS: [Band<[f64; 10]>; 5] = [
    Band::new(0, 5 * 60, [11.0, 10.5, 10.0, 9.5, 9.0, 9.0, 9.0, 9.0, 9.0, 9.0]),
    Band::new(5 * 60, 6 * 60, [12.0, 11.5, 11.0, 10.5, 10.0, 9.5, 9.0, 9.0, 9.0, 9.0]),
    Band::new(6 * 60, 14 * 60, [13.0, 12.5, 12.0, 11.5, 11.0, 10.5, 10.0, 9.5, 9.0, 9.0]),
    Band::new(14 * 60, 16 * 60, [12.0, 11.5, 11.0, 10.5, 10.0, 9.5, 9.0, 9.0, 9.0, 9.0]),
    Band::new(16 * 60, 24 * 60, [11.0, 10.5, 10.0, 9.5, 9.0, 9.0, 9.0, 9.0, 9.0, 9.0]),
];

/// Two-pilot flight duty time. Coarser bands than [`TWO_PILOT_FDP`].
pub static TWO_PILOT_FDT: BandTable<SectorSplit> = BandTable::new(&TWO_PILOT_FDT_BANDS);

static TWO_PILOT_FDT_BANDS: [Band<SectorSplit>; 3] = [
    Band::new(0, 5 * 60, SectorSplit::new(9.0, 8.0)),
    Band::new(5 * 60, 17 * 60, SectorSplit::new(10.0, 9.0)),
    Band::new(17 * 60, 24 * 60, SectorSplit::new(9.0, 8.0)),
];

/// A limit that only distinguishes up to two sectors from three or more.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorSplit {
    pub two_or_less: f64,
    pub three_or_more: f64,
}

impl SectorSplit {
    pub const fn new(two_or_less: f64, three_or_more: f64) -> SectorSplit {
        SectorSplit { two_or_less, three_or_more }
    }

    pub fn pick(self, sectors: Sectors) -> f64 {
        if sectors.is_two_or_less() {
            self.two_or_less
        } else {
            self.three_or_more
        }
    }
}

/// Augmented crew FDP by rest facility. `None` for a standard crew.
pub fn augmented_fdp(crew: CrewComplement, class: RestFacilityClass) -> Option<SectorSplit> {
    use CrewComplement::{FourCrew, Standard, ThreeCrew};
    use RestFacilityClass::{One, Three, Two};

    match (crew, class) {
        (Standard, _) => None,
        (ThreeCrew, One) => Some(SectorSplit::new(17.0, 16.0)),
        (ThreeCrew, Two) => Some(SectorSplit::new(16.0, 15.0)),
        (ThreeCrew, Three) => Some(SectorSplit::new(15.0, 14.0)),
        (FourCrew, One) => Some(SectorSplit::new(18.0, 17.0)),
        (FourCrew, Two) => Some(SectorSplit::new(17.0, 16.0)),
        (FourCrew, Three) => Some(SectorSplit::new(16.0, 15.0)),
    }
}

/// Augmented crew flight duty time, independent of rest class and sectors.
pub fn augmented_fdt(crew: CrewComplement) -> Option<f64> {
    match crew {
        CrewComplement::Standard => None,
        CrewComplement::ThreeCrew => Some(15.0),
        CrewComplement::FourCrew => Some(17.0),
    }
}
