use crate::crew::{CrewComplement, RestFacilityClass, Sectors};
use crate::fdp::tables::{augmented_fdp, augmented_fdt};
use crate::fdp::{Band, TWO_PILOT_FDP, TWO_PILOT_FDT};

fn assert_covers_day<T>(bands: &[Band<T>]) {
    assert_eq!(0, bands[0].from);
    assert_eq!(1440, bands[bands.len() - 1].until);
    for pair in bands.windows(2) {
        assert_eq!(pair[0].until, pair[1].from, "gap or overlap after {}", pair[0].label());
    }
}

#[test]
fn test_bands_cover_whole_day() {
    assert_covers_day(TWO_PILOT_FDP.bands());
    assert_covers_day(TWO_PILOT_FDT.bands());
}

#[test]
fn test_fdp_band_labels() {
    let labels: Vec<String> = TWO_PILOT_FDP.bands().iter().map(|b| b.label()).collect();
    assert_eq!(
        vec!["00:00-04:59", "05:00-05:59", "06:00-13:59", "14:00-15:59", "16:00-23:59"],
        labels
    );
    let labels: Vec<String> = TWO_PILOT_FDT.bands().iter().map(|b| b.label()).collect();
    assert_eq!(vec!["00:00-04:59", "05:00-16:59", "17:00-23:59"], labels);
}

#[test]
fn test_fdp_rows_never_grow_with_sectors() {
    for band in TWO_PILOT_FDP.bands() {
        for pair in band.value.windows(2) {
            assert!(pair[0] >= pair[1], "row {} increases", band.label());
        }
        assert_eq!(9.0, band.value[9], "row {} floor", band.label());
    }
}

#[test]
fn test_augmented_tables() {
    assert_eq!(None, augmented_fdp(CrewComplement::Standard, RestFacilityClass::One));
    assert_eq!(None, augmented_fdt(CrewComplement::Standard));
    assert_eq!(Some(15.0), augmented_fdt(CrewComplement::ThreeCrew));
    assert_eq!(Some(17.0), augmented_fdt(CrewComplement::FourCrew));

    let split = augmented_fdp(CrewComplement::FourCrew, RestFacilityClass::Two).unwrap();
    assert_eq!(17.0, split.pick(Sectors::new(2)));
    assert_eq!(16.0, split.pick(Sectors::new(3)));
}

#[test]
fn test_better_rest_never_shortens_duty() {
    for crew in [CrewComplement::ThreeCrew, CrewComplement::FourCrew] {
        let limits: Vec<_> = RestFacilityClass::ALL
            .iter()
            .map(|class| augmented_fdp(crew, *class).unwrap())
            .collect();
        for pair in limits.windows(2) {
            assert!(pair[0].two_or_less > pair[1].two_or_less);
            assert!(pair[0].three_or_more > pair[1].three_or_more);
        }
    }
}
