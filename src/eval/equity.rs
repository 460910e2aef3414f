use super::category::HandCategory;

/// Эвристическая эквити категории, в процентах (0..=100).
/// Это грубая оценка, а не расчёт против диапазона.
pub const fn equity(category: HandCategory) -> u8 {
    match category {
        HandCategory::ValueStrong => 75,
        HandCategory::ValueMedium => 60,
        HandCategory::ValueWeak => 45,
        HandCategory::DrawStrong => 50,
        HandCategory::DrawWeak => 30,
        HandCategory::BluffPure => 15,
        HandCategory::BluffSemi => 40,
        HandCategory::ShowdownMedium => 50,
    }
}
