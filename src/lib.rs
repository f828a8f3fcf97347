//! Flight duty period limits and the latest lawful wheels up of a duty's
//! final sector.
//!
//! ```
//! use duty_limits::crew::CrewComplement;
//! use duty_limits::fdp::resolve_fdp;
//! use duty_limits::wheels_up::latest_wheels_up;
//!
//! let limits = resolve_fdp("09:00", 3, CrewComplement::ThreeCrew, Some(1)).unwrap();
//! assert_eq!(16.0, limits.max_flight_duty_period_hours);
//!
//! let wheels_up = latest_wheels_up("09:00", 13.0, 10.0, 30.0).unwrap();
//! assert_eq!("10:40", wheels_up.time.to_string());
//! ```

pub mod crew;
pub mod fdp;
pub mod plan;
pub mod time;
pub mod wheels_up;
