mod band;
mod resolver;
mod tables;

pub use band::{Band, BandTable};
pub use resolver::{FdpResult, LimitSource, resolve, resolve_fdp};
pub use tables::{SectorSplit, TWO_PILOT_FDP, TWO_PILOT_FDT};
