use crate::crew::{CrewComplement, RestFacilityClass, Sectors};
use crate::fdp::tables::{TWO_PILOT_FDP, TWO_PILOT_FDT, augmented_fdp, augmented_fdt};
use crate::time::ClockTime;
use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::Formatter;

/// Which table row a limit was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LimitSource {
    TwoPilot,
    Augmented {
        crew: CrewComplement,
        class: RestFacilityClass,
    },
}

impl fmt::Display for LimitSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LimitSource::TwoPilot => write!(f, "2-pilot"),
            LimitSource::Augmented { crew, class } => {
                write!(f, "{}-pilot Class {}", crew.pilots(), class)
            }
        }
    }
}

impl Serialize for LimitSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FdpResult {
    /// Max block time in hours.
    pub max_flight_duty_time_hours: f64,
    /// Max report-to-release time in hours.
    pub max_flight_duty_period_hours: f64,
    /// Band label for two pilots, otherwise the report time itself.
    pub report_time_window: String,
    pub source: LimitSource,
}

/// Looks up the FDP and FDT limits for a duty reporting at `report`.
///
/// The rest facility class only matters for augmented crews. `None` means the
/// report time fell outside every two-pilot band and no limit can be given.
pub fn resolve(
    report: ClockTime,
    sectors: Sectors,
    crew: CrewComplement,
    class: RestFacilityClass,
) -> Option<FdpResult> {
    let result = if crew.is_augmented() {
        FdpResult {
            max_flight_duty_time_hours: augmented_fdt(crew)?,
            max_flight_duty_period_hours: augmented_fdp(crew, class)?.pick(sectors),
            report_time_window: report.to_string(),
            source: LimitSource::Augmented { crew, class },
        }
    } else {
        let Some(band) = TWO_PILOT_FDP.classify(report) else {
            tracing::warn!(%report, "report time outside every two-pilot FDP band");
            return None;
        };
        let fdt = TWO_PILOT_FDT.classify(report)?;
        FdpResult {
            max_flight_duty_time_hours: fdt.value.pick(sectors),
            max_flight_duty_period_hours: band.value[sectors.fdp_column()],
            report_time_window: band.label(),
            source: LimitSource::TwoPilot,
        }
    };

    tracing::debug!(
        %report,
        sectors = sectors.count(),
        source = %result.source,
        fdp = result.max_flight_duty_period_hours,
        fdt = result.max_flight_duty_time_hours,
        "resolved duty limits"
    );
    Some(result)
}

/// Lenient entry point taking raw caller input: the report time is parsed
/// with [`ClockTime::parse`], sectors and rest class are clamped and the rest
/// class defaults to 1.
pub fn resolve_fdp(
    report_time: &str,
    sectors: i64,
    crew: CrewComplement,
    rest_class: Option<i64>,
) -> Option<FdpResult> {
    resolve(
        ClockTime::parse(report_time),
        Sectors::new(sectors),
        crew,
        rest_class.map(RestFacilityClass::from_number).unwrap_or_default(),
    )
}
