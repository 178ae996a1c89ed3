//! Router configuration with documented constants.

/// Where a spoken "home" should take the user.
///
/// Inside a course page, "home" can plausibly mean the course home rather
/// than the app dashboard, so both behaviors are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomePolicy {
    /// "home" always routes to the fixed dashboard destination
    AlwaysDashboard,
    /// While in a course context, "home" skips the fixed router and falls
    /// through to the on-page link scan (matching e.g. a "Home" course tab)
    SuppressInCourse,
}

/// Configuration for a resolution cycle.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// How "home" is routed; see [`HomePolicy`]
    pub home_policy: HomePolicy,

    /// Step applied by a relative volume change, saturating at 0 and 100.
    ///
    /// Consumed by [`crate::providers::AudioControls`] implementations; the
    /// in-crate ones move the volume by this amount per "volume up"/"down".
    pub volume_step: u8,

    /// How long a navigation confirmation stays readable, in milliseconds.
    ///
    /// Confirmations are written right before a page navigation destroys
    /// in-memory state and read back once after the reload; anything older
    /// than this window is treated as stale and dropped.
    pub confirmation_max_age_ms: u64,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            home_policy: HomePolicy::SuppressInCourse,
            volume_step: 10,
            confirmation_max_age_ms: 5_000,
        }
    }
}
