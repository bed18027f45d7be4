/// Currency used when the investor has no preference on file
pub const DEFAULT_CURRENCY: &str = "USD";

/// Default horizontal commit distance in pixels
pub const DEFAULT_HORIZONTAL_THRESHOLD: f64 = 100.0;

/// Default upward commit distance in pixels
pub const DEFAULT_VERTICAL_THRESHOLD: f64 = 80.0;

/// Default release velocity (px/ms) that commits a flick regardless of distance
pub const DEFAULT_VELOCITY_THRESHOLD: f64 = 0.5;

/// Share of the card width a horizontal drag must cover to commit
pub const HORIZONTAL_WIDTH_RATIO: f64 = 0.25;

/// Share of the card width an upward drag must cover to commit
pub const VERTICAL_WIDTH_RATIO: f64 = 0.20;

/// Opportunity target types as sent to the invest endpoint
pub mod target_types {
    pub const DAO: &str = "dao";
    pub const GRANT: &str = "grant";
    pub const SCHOLARSHIP: &str = "scholarship";
}
