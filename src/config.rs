//! Конфигурация движка: пороги классификатора + скорость реплея.

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::eval::classifier::{Classifier, Thresholds};
use crate::replay::rules::PlaybackRules;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub thresholds: Thresholds,
    pub playback: PlaybackRules,
}

impl EngineConfig {
    /// Стандартные значения: 66% / 33% банка, тик 1.5 сек.
    pub const fn standard() -> Self {
        Self {
            thresholds: Thresholds::standard(),
            playback: PlaybackRules::standard(),
        }
    }

    /// Разобрать JSON. Отсутствующие поля берутся из `standard()`.
    pub fn from_json_str(json: &str) -> Result<Self, ApiError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn classifier(&self) -> Classifier {
        Classifier::new(self.thresholds)
    }
}
