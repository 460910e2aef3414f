//! Настройки авто-проигрывания реплея.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Профиль скорости.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlaybackProfile {
    /// 1.5 сек на действие.
    Standard,
    /// 0.5 сек на действие.
    Fast,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PlaybackRules {
    /// Период тика авто-проигрывания.
    pub tick_interval_ms: u64,
}

impl PlaybackRules {
    pub const fn new(tick_interval_ms: u64) -> Self {
        Self { tick_interval_ms }
    }

    pub const fn standard() -> Self {
        Self::new(1500)
    }

    pub const fn fast() -> Self {
        Self::new(500)
    }

    pub const fn from_profile(profile: PlaybackProfile) -> Self {
        match profile {
            PlaybackProfile::Standard => Self::standard(),
            PlaybackProfile::Fast => Self::fast(),
        }
    }

    /// Нулевой период превращаем в 1 мс: `tokio::time::interval` не принимает ноль.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

impl Default for PlaybackRules {
    fn default() -> Self {
        Self::standard()
    }
}
