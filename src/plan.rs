use crate::crew::{CrewComplement, RestFacilityClass, Sectors};
use crate::fdp::{FdpResult, resolve};
use crate::time::{ClockTime, format_hours};
use crate::wheels_up::{WheelsUp, back_calculate};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use tabled::Tabled;

/// One planned duty as written in a plan file. Everything but `id`, `report`
/// and `sectors` may be left out.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Duty {
    pub id: String,
    pub report: ClockTime,
    pub sectors: Sectors,
    #[serde(default)]
    pub crew: CrewComplement,
    #[serde(default)]
    pub rest_class: Option<RestFacilityClass>,
    #[serde(default)]
    pub final_sector_block_hours: Option<f64>,
    #[serde(default)]
    pub destination_taxi_minutes: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DutyAssessment {
    pub id: String,
    pub limits: Option<FdpResult>,
    pub wheels_up: Option<WheelsUp>,
}

impl Duty {
    pub fn assess(&self) -> DutyAssessment {
        let limits = resolve(
            self.report,
            self.sectors,
            self.crew,
            self.rest_class.unwrap_or_default(),
        );
        let wheels_up = limits.as_ref().zip(self.final_sector_block_hours).and_then(|(limits, block)| {
            back_calculate(
                self.report,
                limits.max_flight_duty_period_hours,
                block,
                self.destination_taxi_minutes.unwrap_or(0.0),
            )
        });
        DutyAssessment {
            id: self.id.clone(),
            limits,
            wheels_up,
        }
    }
}

#[derive(Tabled)]
pub struct DutyRow {
    #[tabled(rename = "Duty")]
    pub id: String,
    #[tabled(rename = "Report")]
    pub report: String,
    #[tabled(rename = "Crew")]
    pub crew: String,
    #[tabled(rename = "Sectors")]
    pub sectors: u8,
    #[tabled(rename = "Window")]
    pub window: String,
    #[tabled(rename = "Source")]
    pub source: String,
    #[tabled(rename = "Max FDT")]
    pub max_fdt: String,
    #[tabled(rename = "Max FDP")]
    pub max_fdp: String,
    #[tabled(rename = "Latest wheels up")]
    pub wheels_up: String,
}

pub fn describe_wheels_up(wheels_up: &WheelsUp) -> String {
    if wheels_up.next_day {
        format!("{} (+1)", wheels_up.time)
    } else {
        wheels_up.time.to_string()
    }
}

impl DutyRow {
    fn new(duty: &Duty, assessment: &DutyAssessment) -> DutyRow {
        let none = || "-".to_string();
        let limits = assessment.limits.as_ref();
        let wheels_up = match (duty.final_sector_block_hours, &assessment.wheels_up) {
            (_, Some(wheels_up)) => describe_wheels_up(wheels_up),
            (Some(_), None) if limits.is_some() => "does not fit".to_string(),
            _ => none(),
        };
        DutyRow {
            id: duty.id.clone(),
            report: duty.report.to_string(),
            crew: duty.crew.to_string(),
            sectors: duty.sectors.count(),
            window: limits.map(|l| l.report_time_window.clone()).unwrap_or_else(none),
            source: limits.map(|l| l.source.to_string()).unwrap_or_else(none),
            max_fdt: limits
                .map(|l| format_hours(l.max_flight_duty_time_hours))
                .unwrap_or_else(none),
            max_fdp: limits
                .map(|l| format_hours(l.max_flight_duty_period_hours))
                .unwrap_or_else(none),
            wheels_up,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DutyPlan {
    pub duties: Vec<Duty>,
}

impl DutyPlan {
    pub fn from_json(data: &str) -> serde_json::Result<DutyPlan> {
        serde_json::from_str(data)
    }

    pub fn load_from_file(path: &Path) -> io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let plan = Self::from_json(&data)?;
        tracing::info!(path = %path.display(), duties = plan.duties.len(), "loaded duty plan");
        Ok(plan)
    }

    pub fn assess(&self) -> Vec<DutyAssessment> {
        self.duties.iter().map(Duty::assess).collect()
    }

    pub fn rows(&self) -> Vec<DutyRow> {
        self.duties
            .iter()
            .map(|duty| DutyRow::new(duty, &duty.assess()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN: &str = r#"{
        "duties": [
            {"id": "AJX101", "report": "09:00", "sectors": 4},
            {"id": "AJX202", "report": "9:00", "sectors": 3, "crew": "3-crew", "rest_class": 1,
             "final_sector_block_hours": 10, "destination_taxi_minutes": 30},
            {"id": "AJX303", "report": "20:00", "sectors": 2, "crew": "standard",
             "final_sector_block_hours": 10, "destination_taxi_minutes": 50},
            {"id": "AJX404", "report": "late", "sectors": 14, "crew": "4-crew", "rest_class": 7,
             "final_sector_block_hours": 12.5}
        ]
    }"#;

    #[test]
    fn test_parse_plan_leniently() {
        let plan = DutyPlan::from_json(PLAN).unwrap();

        assert_eq!(4, plan.duties.len());
        assert_eq!(CrewComplement::Standard, plan.duties[0].crew);
        assert_eq!(None, plan.duties[0].final_sector_block_hours);
        assert_eq!("09:00", plan.duties[1].report.to_string());
        assert_eq!(ClockTime::MIDNIGHT, plan.duties[3].report);
        assert_eq!(10, plan.duties[3].sectors.count());
        assert_eq!(Some(RestFacilityClass::Three), plan.duties[3].rest_class);
    }

    #[test]
    fn test_reject_missing_report() {
        assert!(DutyPlan::from_json(r#"{"duties": [{"id": "X", "sectors": 1}]}"#).is_err());
    }

    #[test]
    fn test_assess_plan() {
        let assessments = DutyPlan::from_json(PLAN).unwrap().assess();

        let limits = assessments[0].limits.as_ref().unwrap();
        assert_eq!(12.0, limits.max_flight_duty_period_hours);
        assert_eq!(None, assessments[0].wheels_up);

        // 16h from 09:00 ends after midnight
        let wheels_up = assessments[1].wheels_up.unwrap();
        assert_eq!("13:40", wheels_up.time.to_string());
        assert!(wheels_up.next_day);

        // 11h two-pilot FDP cannot hold a 10h sector with taxi and sign-off
        assert!(assessments[2].limits.is_some());
        assert_eq!(None, assessments[2].wheels_up);

        let wheels_up = assessments[3].wheels_up.unwrap();
        assert_eq!("01:40", wheels_up.time.to_string());
        assert!(!wheels_up.next_day);
        assert_eq!("4-pilot Class 3", assessments[3].limits.as_ref().unwrap().source.to_string());
    }

    #[test]
    fn test_rows() {
        let rows = DutyPlan::from_json(PLAN).unwrap().rows();

        assert_eq!("06:00-13:59", rows[0].window);
        assert_eq!("12h", rows[0].max_fdp);
        assert_eq!("9h", rows[0].max_fdt);
        assert_eq!("-", rows[0].wheels_up);
        assert_eq!("13:40 (+1)", rows[1].wheels_up);
        assert_eq!("does not fit", rows[2].wheels_up);
        assert_eq!("4-Crew", rows[3].crew);
    }

    #[test]
    fn test_describe_wheels_up() {
        let wheels_up = WheelsUp {
            time: ClockTime::from_minutes(1280),
            next_day: true,
            after_report: 80,
        };
        assert_eq!("21:20 (+1)", describe_wheels_up(&wheels_up));
    }

    #[test]
    fn test_assessment_serializes() {
        let plan = DutyPlan::from_json(PLAN).unwrap();
        let json = serde_json::to_value(plan.duties[1].assess()).unwrap();

        assert_eq!("AJX202", json["id"]);
        assert_eq!("3-pilot Class 1", json["limits"]["source"]);
        assert_eq!("13:40", json["wheels_up"]["time"]);
        assert_eq!(true, json["wheels_up"]["next_day"]);
    }
}
