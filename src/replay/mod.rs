//! Реплей точки решения.
//!
//! Здесь собираем:
//! - сборку раздачи по улицам (`Timeline`);
//! - курсор по плоской последовательности действий (`PlaybackCursor`);
//! - настройки скорости (`PlaybackRules`);
//! - таймер авто-проигрывания (`AutoPlayHandle`);
//! - фасад `Replayer`, которым пользуется UI.

pub mod autoplay;
pub mod cursor;
pub mod errors;
pub mod rules;
pub mod timeline;

pub use autoplay::{AutoPlayHandle, ReplayState, TickOutcome};
pub use cursor::PlaybackCursor;
pub use errors::ReplayError;
pub use rules::{PlaybackProfile, PlaybackRules};
pub use timeline::{StreetSnapshot, Timeline, TimelineEntry};

use std::sync::{Arc, Mutex};

use crate::domain::record::DecisionPoint;

use autoplay::lock;

/// Сессия реплея одной раздачи. Владеет раздачей, курсором и таймером.
///
/// Любая смена раздачи, пауза или drop отменяют таймер до того,
/// как он успеет сдвинуть курсор чужой раздачи.
#[derive(Debug)]
pub struct Replayer {
    pub rules: PlaybackRules,
    state: Arc<Mutex<ReplayState>>,
    autoplay: Option<AutoPlayHandle>,
}

impl Replayer {
    pub fn new(rules: PlaybackRules) -> Self {
        Self {
            rules,
            state: Arc::new(Mutex::new(ReplayState::default())),
            autoplay: None,
        }
    }

    /// Загрузить новую раздачу: старый таймер отменяется, курсор в начало.
    pub fn load(&mut self, timeline: Timeline) {
        self.cancel_autoplay();

        let mut state = lock(&self.state);
        state.cursor.reset(timeline.total_actions());
        state.timeline = timeline;
        log::debug!(
            "replay loaded: {} streets, {} actions",
            state.timeline.streets().len(),
            state.cursor.total()
        );
    }

    pub fn load_point(&mut self, point: &DecisionPoint) {
        self.load(Timeline::build(point));
    }

    /// Запустить авто-проигрывание. Повторный вызов во время игры ничего не делает.
    pub fn play(&mut self) -> Result<(), ReplayError> {
        if self.is_playing() {
            return Ok(());
        }

        self.cancel_autoplay();

        let generation = {
            let mut state = lock(&self.state);
            if state.timeline.is_empty() {
                return Err(ReplayError::EmptyTimeline);
            }
            state.playing = true;
            state.generation
        };

        match AutoPlayHandle::spawn(Arc::clone(&self.state), generation, self.rules.tick_interval()) {
            Ok(handle) => {
                log::info!("replay autoplay started (gen {generation})");
                self.autoplay = Some(handle);
                Ok(())
            }
            Err(err) => {
                lock(&self.state).playing = false;
                Err(err)
            }
        }
    }

    pub fn pause(&mut self) {
        if self.is_playing() {
            log::info!("replay autoplay paused");
        }
        self.cancel_autoplay();
    }

    /// Play/Pause. Возвращает, играет ли реплей после переключения.
    pub fn toggle(&mut self) -> Result<bool, ReplayError> {
        if self.is_playing() {
            self.pause();
            Ok(false)
        } else {
            self.play()?;
            Ok(true)
        }
    }

    pub fn is_playing(&self) -> bool {
        lock(&self.state).playing
    }

    pub fn index(&self) -> Option<usize> {
        lock(&self.state).cursor.index()
    }

    pub fn cursor(&self) -> PlaybackCursor {
        lock(&self.state).cursor
    }

    pub fn first(&mut self) -> Option<usize> {
        lock(&self.state).cursor.first()
    }

    pub fn last(&mut self) -> Option<usize> {
        lock(&self.state).cursor.last()
    }

    pub fn next(&mut self) -> Option<usize> {
        lock(&self.state).cursor.next()
    }

    pub fn prev(&mut self) -> Option<usize> {
        lock(&self.state).cursor.prev()
    }

    /// Текущая улица (копия).
    pub fn current_street(&self) -> Option<StreetSnapshot> {
        let state = lock(&self.state);
        let index = state.cursor.index()?;
        state.timeline.current_street(index).cloned()
    }

    /// Доступ к раздаче и курсору под одной блокировкой.
    pub fn with_state<T>(&self, f: impl FnOnce(&Timeline, &PlaybackCursor) -> T) -> T {
        let state = lock(&self.state);
        f(&state.timeline, &state.cursor)
    }

    fn cancel_autoplay(&mut self) {
        lock(&self.state).invalidate();
        // Drop хэндла делает abort задачи.
        self.autoplay = None;
    }
}

impl Default for Replayer {
    fn default() -> Self {
        Self::new(PlaybackRules::standard())
    }
}

impl Drop for Replayer {
    fn drop(&mut self) {
        self.cancel_autoplay();
    }
}
