//! Сводка по диапазону: сколько решений оппонента попало в каждую
//! категорию и как они делятся на value / draw / bluff.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::hand::Street;
use crate::domain::record::DecisionPoint;
use crate::infra::rng::RandomSource;

use super::category::{HandCategory, RangeBucket};
use super::classifier::Classifier;

/// Сколько примеров отдаём вместе со сводкой.
pub const MAX_EXAMPLES: usize = 10;

/// Фильтр выборки. Пустые поля не ограничивают.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RangeFilter {
    pub street: Option<Street>,
    /// Подстрока действия без учёта регистра (`"bet"` ловит и `"Bet 3bb"`).
    pub action: Option<String>,
    pub pot_min: Option<f64>,
    pub pot_max: Option<f64>,
}

impl RangeFilter {
    pub fn matches(&self, point: &DecisionPoint) -> bool {
        if let Some(street) = self.street {
            if point.parsed_street() != Some(street) {
                return false;
            }
        }
        if let Some(action) = &self.action {
            if !point
                .villain_action
                .to_lowercase()
                .contains(&action.to_lowercase())
            {
                return false;
            }
        }
        if self.pot_min.is_some_and(|min| point.pot_bb < min) {
            return false;
        }
        if self.pot_max.is_some_and(|max| point.pot_bb > max) {
            return false;
        }
        true
    }
}

/// Доля одной категории в выборке.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CategoryShare {
    pub category: HandCategory,
    pub count: usize,
    /// Проценты с округлением до 0.1.
    pub percentage: f64,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RangeSummary {
    pub total_samples: usize,
    /// По убыванию количества.
    pub category_distribution: Vec<CategoryShare>,
    pub value_pct: f64,
    pub draw_pct: f64,
    pub bluff_pct: f64,
    /// `decision_id` случайных примеров (не больше [`MAX_EXAMPLES`]).
    pub examples: Vec<String>,
}

fn pct(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64 * 1000.0).round() / 10.0
}

/// Отфильтровать записи, классифицировать и собрать сводку.
/// Записи с нераспознанной улицей в выборку не попадают.
pub fn summarize_range<R: RandomSource>(
    points: &[DecisionPoint],
    filter: &RangeFilter,
    classifier: &Classifier,
    rng: &mut R,
) -> RangeSummary {
    let mut classified: Vec<(&DecisionPoint, HandCategory)> = Vec::new();

    for point in points.iter().filter(|p| filter.matches(p)) {
        match point.decision_context() {
            Some(ctx) => classified.push((point, classifier.classify(&ctx))),
            None => log::debug!(
                "decision {}: unknown street {:?}, skipped",
                point.decision_id,
                point.street
            ),
        }
    }

    let total = classified.len();
    if total == 0 {
        return RangeSummary::default();
    }

    let mut counts: HashMap<HandCategory, usize> = HashMap::new();
    let mut buckets: HashMap<RangeBucket, usize> = HashMap::new();
    for (_, category) in &classified {
        *counts.entry(*category).or_insert(0) += 1;
        *buckets.entry(category.bucket()).or_insert(0) += 1;
    }

    let mut category_distribution: Vec<CategoryShare> = HandCategory::ALL
        .iter()
        .filter_map(|category| {
            counts.get(category).map(|&count| CategoryShare {
                category: *category,
                count,
                percentage: pct(count, total),
            })
        })
        .collect();
    // Стабильная сортировка: при равенстве остаётся порядок ALL.
    category_distribution.sort_by(|a, b| b.count.cmp(&a.count));

    let examples = rng
        .sample_positions(total, MAX_EXAMPLES)
        .into_iter()
        .map(|i| classified[i].0.decision_id.clone())
        .collect();

    let bucket_pct = |bucket| pct(buckets.get(&bucket).copied().unwrap_or(0), total);

    RangeSummary {
        total_samples: total,
        category_distribution,
        value_pct: bucket_pct(RangeBucket::Value),
        draw_pct: bucket_pct(RangeBucket::Draw),
        bluff_pct: bucket_pct(RangeBucket::Bluff),
        examples,
    }
}
