use super::Budget;
use crate::time::{ClockTime, format_minutes};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineSegment {
    pub label: &'static str,
    pub minutes: i64,
}

impl fmt::Display for TimelineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, format_minutes(self.minutes))
    }
}

/// The FDP split into what happens before and after the latest wheels up.
/// Segments add up to the full FDP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DutyTimeline {
    pub segments: [TimelineSegment; 4],
}

impl DutyTimeline {
    pub fn build(
        report: ClockTime,
        max_fdp_hours: f64,
        block_hours: f64,
        taxi_minutes: f64,
    ) -> Option<DutyTimeline> {
        let budget = Budget::new(report, max_fdp_hours, block_hours, taxi_minutes)?;
        let [wheels_up, on_chocks, taxi_in, fdp_end] = budget.marks();
        Some(DutyTimeline {
            segments: [
                TimelineSegment {
                    label: "Duty to wheels up",
                    minutes: wheels_up,
                },
                TimelineSegment {
                    label: "Last sector (block)",
                    minutes: on_chocks - wheels_up,
                },
                TimelineSegment {
                    label: "Destination taxi",
                    minutes: taxi_in - on_chocks,
                },
                TimelineSegment {
                    label: "Sign off (50 min)",
                    minutes: fdp_end - taxi_in,
                },
            ],
        })
    }

    pub fn total_minutes(&self) -> i64 {
        self.segments.iter().fold(0, |total, s| total.saturating_add(s.minutes))
    }
}
