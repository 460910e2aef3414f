use core::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Размер в больших блайндах (банк, ставка). Обёртка над f64,
/// чтобы не путать с долями и процентами.
///
/// Значение никогда не бывает отрицательным или NaN.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct BigBlinds(pub f64);

impl BigBlinds {
    pub const ZERO: BigBlinds = BigBlinds(0.0);

    /// Отрицательные и не-конечные значения приводятся к нулю.
    pub fn new(amount: f64) -> Self {
        if amount.is_finite() && amount > 0.0 {
            BigBlinds(amount)
        } else {
            BigBlinds::ZERO
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Доля от `pot`. Для пустого банка — `None`.
    pub fn ratio_of(self, pot: BigBlinds) -> Option<f64> {
        if pot.is_zero() {
            None
        } else {
            Some(self.0 / pot.0)
        }
    }

    /// Безопасное вычитание, не даёт уйти в минус.
    pub fn saturating_sub(self, other: BigBlinds) -> BigBlinds {
        BigBlinds::new(self.0 - other.0)
    }
}

impl Add for BigBlinds {
    type Output = BigBlinds;

    fn add(self, rhs: BigBlinds) -> Self::Output {
        BigBlinds::new(self.0 + rhs.0)
    }
}

impl AddAssign for BigBlinds {
    fn add_assign(&mut self, rhs: BigBlinds) {
        *self = *self + rhs;
    }
}

impl Sub for BigBlinds {
    type Output = BigBlinds;

    fn sub(self, rhs: BigBlinds) -> Self::Output {
        self.saturating_sub(rhs)
    }
}

impl SubAssign for BigBlinds {
    fn sub_assign(&mut self, rhs: BigBlinds) {
        *self = self.saturating_sub(rhs);
    }
}

impl Mul<f64> for BigBlinds {
    type Output = BigBlinds;

    fn mul(self, rhs: f64) -> Self::Output {
        BigBlinds::new(self.0 * rhs)
    }
}
