//! Авто-проигрывание: периодический тик, двигающий курсор вперёд.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::cursor::PlaybackCursor;
use super::errors::ReplayError;
use super::timeline::Timeline;

/// Общее состояние сессии: его видят и владелец, и задача таймера.
#[derive(Debug, Default)]
pub struct ReplayState {
    pub timeline: Timeline,
    pub cursor: PlaybackCursor,
    pub playing: bool,
    /// Растёт при каждой отмене таймера. Тик чужого поколения игнорируется.
    pub generation: u64,
}

/// Что сделал один тик.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Курсор сдвинулся; `finished` — дошли до последнего действия.
    Advanced { index: usize, finished: bool },
    /// Таймер устарел (пауза, новая раздача) — ничего не трогаем.
    Stale,
}

impl ReplayState {
    /// Остановить текущий таймер, если он есть.
    pub fn invalidate(&mut self) {
        self.playing = false;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn tick(&mut self, generation: u64) -> TickOutcome {
        if generation != self.generation || !self.playing {
            return TickOutcome::Stale;
        }

        let index = self.cursor.next().unwrap_or(0);
        let finished = self.cursor.is_at_end();
        if finished {
            self.playing = false;
        }

        TickOutcome::Advanced { index, finished }
    }
}

pub(crate) fn lock(state: &Mutex<ReplayState>) -> MutexGuard<'_, ReplayState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Хэндл запущенного таймера. Drop = отмена.
#[derive(Debug)]
pub struct AutoPlayHandle {
    task: JoinHandle<()>,
}

impl AutoPlayHandle {
    /// Запустить тики с периодом `period` для поколения `generation`.
    /// Первый тик — через один период после старта.
    pub fn spawn(
        state: Arc<Mutex<ReplayState>>,
        generation: u64,
        period: Duration,
    ) -> Result<Self, ReplayError> {
        let runtime = Handle::try_current().map_err(|_| ReplayError::NoRuntime)?;

        let task = runtime.spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let outcome = lock(&state).tick(generation);
                match outcome {
                    TickOutcome::Advanced { index, finished: false } => {
                        log::trace!("autoplay gen {generation}: action {index}");
                    }
                    TickOutcome::Advanced { index, finished: true } => {
                        log::debug!("autoplay gen {generation}: reached last action {index}, stopping");
                        break;
                    }
                    TickOutcome::Stale => break,
                }
            }
        });

        Ok(Self { task })
    }

}

impl Drop for AutoPlayHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
