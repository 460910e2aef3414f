use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Источник случайности для выборки примеров в сводке по диапазону.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// До `k` случайных позиций из `0..len`, по возрастанию
    /// (примеры выводятся в порядке исходной выборки).
    fn sample_positions(&mut self, len: usize, k: usize) -> Vec<usize> {
        let mut picks: Vec<usize> = (0..len).collect();
        if len > k {
            self.shuffle(&mut picks);
            picks.truncate(k);
            picks.sort_unstable();
        }
        picks
    }
}

/// `thread_rng` на каждый вызов.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut rand::thread_rng());
    }
}

/// Один seed — одни и те же примеры.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
