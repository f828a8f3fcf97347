mod timeline;

pub use timeline::{DutyTimeline, TimelineSegment};

use crate::time::{ClockTime, MINUTES_PER_DAY};
use serde::Serialize;

/// On chocks to sign-off.
pub const SIGN_OFF_MINUTES: i64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WheelsUp {
    pub time: ClockTime,
    /// Set when the duty period ends at or after midnight, even if the
    /// wheels-up instant itself is still on the report day.
    pub next_day: bool,
    /// Minutes from report to the latest wheels up.
    pub after_report: i64,
}

/// The end of a duty period worked backwards from its FDP limit, in exact
/// minutes from midnight of the report day. Only the final wheels-up instant
/// is rounded to a whole minute.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Budget {
    report: f64,
    fdp: f64,
    block: f64,
    taxi: f64,
}

impl Budget {
    /// `None` when there is no final sector or the sector, taxi and sign-off
    /// alone exceed the FDP.
    fn new(report: ClockTime, max_fdp_hours: f64, block_hours: f64, taxi_minutes: f64) -> Option<Budget> {
        if !block_hours.is_finite() || block_hours <= 0.0 || !max_fdp_hours.is_finite() {
            return None;
        }
        let taxi = if taxi_minutes.is_finite() { taxi_minutes.max(0.0) } else { 0.0 };
        let budget = Budget {
            report: report.minutes() as f64,
            fdp: max_fdp_hours * 60.0,
            block: block_hours * 60.0,
            taxi,
        };
        if !budget.fdp.is_finite() || !budget.tail().is_finite() || budget.tail() > budget.fdp {
            tracing::debug!(tail = budget.tail(), fdp = budget.fdp, "final sector does not fit the FDP");
            return None;
        }
        Some(budget)
    }

    fn tail(&self) -> f64 {
        self.block + self.taxi + SIGN_OFF_MINUTES as f64
    }

    fn fdp_end(&self) -> f64 {
        self.report + self.fdp
    }

    /// Offset of the latest wheels up from report, exact.
    fn before_wheels_up(&self) -> f64 {
        self.fdp - self.tail()
    }

    /// Offsets from report of wheels up, on chocks, taxi end and FDP end,
    /// each rounded to a whole minute. Non-decreasing, so consecutive
    /// differences are never negative.
    fn marks(&self) -> [i64; 4] {
        let wheels_up = self.before_wheels_up();
        [
            wheels_up,
            wheels_up + self.block,
            wheels_up + self.block + self.taxi,
            self.fdp,
        ]
        .map(whole_minutes)
    }
}

/// Saturates for offsets beyond `i64`.
fn whole_minutes(minutes: f64) -> i64 {
    minutes.round() as i64
}

/// Latest wheels up for the final sector so that
/// `wheels up + block + taxi + sign-off <= report + max FDP`.
pub fn back_calculate(
    report: ClockTime,
    max_fdp_hours: f64,
    block_hours: f64,
    taxi_minutes: f64,
) -> Option<WheelsUp> {
    let budget = Budget::new(report, max_fdp_hours, block_hours, taxi_minutes)?;
    let after_report = whole_minutes(budget.before_wheels_up());
    let wheels_up = WheelsUp {
        time: ClockTime::from_minutes(report.minutes().saturating_add(after_report)),
        next_day: budget.fdp_end() >= MINUTES_PER_DAY as f64,
        after_report,
    };
    tracing::debug!(
        %report,
        fdp_end = budget.fdp_end(),
        tail = budget.tail(),
        wheels_up = %wheels_up.time,
        next_day = wheels_up.next_day,
        "latest wheels up"
    );
    Some(wheels_up)
}

/// Lenient form of [`back_calculate`] for raw `HH:MM` input. Pass `0.0` for an
/// unknown destination taxi time.
pub fn latest_wheels_up(
    report_time: &str,
    max_fdp_hours: f64,
    final_sector_block_hours: f64,
    destination_taxi_minutes: f64,
) -> Option<WheelsUp> {
    back_calculate(
        ClockTime::parse(report_time),
        max_fdp_hours,
        final_sector_block_hours,
        destination_taxi_minutes,
    )
}
