//! Timing configuration for driven playbacks.

use core::time::Duration;

/// The default delay between two ticks of a driven playback, in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 800;
/// The default delay between the end of a driven playback and the moment it is cleared, in milliseconds.
pub const DEFAULT_LINGER_MS: u64 = 3000;

/// The environment variable read by [`PlaybackConfig::from_env`] for the tick interval, in milliseconds.
///
/// [`PlaybackConfig::from_env`]: struct.PlaybackConfig.html#method.from_env " "
pub const ENV_TICK_MS: &str = "REPLAY_TICK_MS";
/// The environment variable read by [`PlaybackConfig::from_env`] for the linger delay, in milliseconds.
///
/// [`PlaybackConfig::from_env`]: struct.PlaybackConfig.html#method.from_env " "
pub const ENV_LINGER_MS: &str = "REPLAY_LINGER_MS";

/// How fast a driven playback advances and how long a finished one stays around.
///
/// # Example
/// ```rust
/// # use bst_replay::PlaybackConfig;
/// # use core::time::Duration;
/// let config = PlaybackConfig::default().with_tick_interval(Duration::from_millis(100));
/// assert_eq!(config.tick_interval, Duration::from_millis(100));
/// assert_eq!(config.linger, Duration::from_secs(3));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlaybackConfig {
    /// The delay between two ticks. Never zero.
    pub tick_interval: Duration,
    /// The delay between the playback finishing and it being cleared.
    pub linger: Duration,
}
impl PlaybackConfig {
    /// Creates a configuration with the given timings. A zero tick interval is replaced with one millisecond.
    #[inline]
    pub fn new(tick_interval: Duration, linger: Duration) -> Self {
        Self::default()
            .with_tick_interval(tick_interval)
            .with_linger(linger)
    }
    /// Sets the tick interval. A zero interval is replaced with one millisecond.
    #[inline]
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval.max(Duration::from_millis(1));
        self
    }
    /// Sets the linger delay.
    #[inline]
    pub const fn with_linger(mut self, linger: Duration) -> Self {
        self.linger = linger;
        self
    }
    /// Reads the configuration from the `REPLAY_TICK_MS` and `REPLAY_LINGER_MS` environment variables.
    ///
    /// Unset variables leave the defaults in place. Values which are not a valid number of milliseconds are ignored with a warning, and so is a zero tick interval.
    #[cfg(feature = "std")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }
    /// Same as [`from_env`], but looks the variables up with the provided function instead of reading the process environment.
    ///
    /// # Example
    /// ```rust
    /// # use bst_replay::PlaybackConfig;
    /// # use core::time::Duration;
    /// let config = PlaybackConfig::from_vars(|name| match name {
    ///     "REPLAY_TICK_MS" => Some("250".to_string()),
    ///     "REPLAY_LINGER_MS" => Some("soon".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(config.tick_interval, Duration::from_millis(250));
    /// assert_eq!(config.linger, PlaybackConfig::default().linger);
    /// ```
    ///
    /// [`from_env`]: #method.from_env " "
    #[cfg(feature = "std")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
    pub fn from_vars(mut lookup: impl FnMut(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(millis) = read_millis(&mut lookup, ENV_TICK_MS) {
            if millis == 0 {
                tracing::warn!(variable = ENV_TICK_MS, "tick interval must not be zero, using the default");
            } else {
                config.tick_interval = Duration::from_millis(millis);
            }
        }
        if let Some(millis) = read_millis(&mut lookup, ENV_LINGER_MS) {
            config.linger = Duration::from_millis(millis);
        }
        config
    }
}
impl Default for PlaybackConfig {
    #[inline]
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            linger: Duration::from_millis(DEFAULT_LINGER_MS),
        }
    }
}

#[cfg(feature = "std")]
fn read_millis(lookup: &mut impl FnMut(&str) -> Option<String>, name: &str) -> Option<u64> {
    let raw = lookup(name)?;
    match raw.trim().parse() {
        Ok(millis) => Some(millis),
        Err(err) => {
            tracing::warn!(variable = name, value = %raw, error = %err, "ignoring invalid duration");
            None
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> PlaybackConfig {
        let vars: HashMap<_, _> = vars.iter().copied().collect();
        PlaybackConfig::from_vars(|name| vars.get(name).map(|value| value.to_string()))
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]), PlaybackConfig::default());
        assert_eq!(PlaybackConfig::default().tick_interval, Duration::from_millis(800));
    }

    #[test]
    fn reads_both_variables() {
        let config = config_from(&[(ENV_TICK_MS, " 120 "), (ENV_LINGER_MS, "0")]);
        assert_eq!(config.tick_interval, Duration::from_millis(120));
        assert_eq!(config.linger, Duration::ZERO);
    }

    #[test]
    fn ignores_invalid_values() {
        let config = config_from(&[(ENV_TICK_MS, "0"), (ENV_LINGER_MS, "-5")]);
        assert_eq!(config, PlaybackConfig::default());
    }

    #[test]
    fn zero_tick_is_clamped() {
        let config = PlaybackConfig::new(Duration::ZERO, Duration::from_secs(1));
        assert_eq!(config.tick_interval, Duration::from_millis(1));
        assert_eq!(config.linger, Duration::from_secs(1));
    }
}
