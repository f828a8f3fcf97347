use crate::crew::{CrewComplement, RestFacilityClass};
use crate::time::ClockTime;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;

pub fn clock(s: &str) -> ClockTime {
    ClockTime::parse_strict(s).unwrap()
}

pub fn arb_clock() -> impl Strategy<Value = ClockTime> {
    (0..1440i64).prop_map(ClockTime::from_minutes)
}

pub fn arb_crew() -> impl Strategy<Value = CrewComplement> {
    prop_oneof![
        Just(CrewComplement::Standard),
        Just(CrewComplement::ThreeCrew),
        Just(CrewComplement::FourCrew),
    ]
}

pub fn arb_class() -> impl Strategy<Value = RestFacilityClass> {
    prop_oneof![
        Just(RestFacilityClass::One),
        Just(RestFacilityClass::Two),
        Just(RestFacilityClass::Three),
    ]
}
