use crate::time::ClockTime;

/// A half-open time-of-day range `[from, until)` in minutes since midnight,
/// carrying the limit that applies to report times inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band<T> {
    pub from: u16,
    pub until: u16,
    pub value: T,
}

impl<T> Band<T> {
    pub const fn new(from: u16, until: u16, value: T) -> Band<T> {
        Band { from, until, value }
    }

    pub fn contains(&self, time: ClockTime) -> bool {
        (self.from as i64) <= time.minutes() && time.minutes() < self.until as i64
    }

    /// Inclusive clock range, e.g. `06:00-13:59`.
    pub fn label(&self) -> String {
        format!(
            "{}-{}",
            ClockTime::from_minutes(self.from as i64),
            ClockTime::from_minutes(self.until as i64 - 1)
        )
    }
}

/// Ordered bands of a lookup table. Lookups return the first band holding
/// the time, or `None` when the table leaves it uncovered.
#[derive(Debug)]
pub struct BandTable<T: 'static>(&'static [Band<T>]);

impl<T: 'static> BandTable<T> {
    pub const fn new(bands: &'static [Band<T>]) -> BandTable<T> {
        BandTable(bands)
    }

    pub fn classify(&self, time: ClockTime) -> Option<&'static Band<T>> {
        self.0.iter().find(|band| band.contains(time))
    }

    pub fn bands(&self) -> &'static [Band<T>] {
        self.0
    }
}
