use serde::Serialize;

/// Позиция в плоской последовательности действий.
///
/// При `total > 0` всегда `index < total`. При `total == 0` позиции нет,
/// и все переходы ничего не делают.
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub struct PlaybackCursor {
    index: usize,
    total: usize,
}

impl PlaybackCursor {
    pub fn new(total: usize) -> Self {
        Self { index: 0, total }
    }

    /// Новая раздача — курсор в начало.
    pub fn reset(&mut self, total: usize) {
        self.index = 0;
        self.total = total;
    }

    pub fn index(&self) -> Option<usize> {
        (self.total > 0).then_some(self.index)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_at_start(&self) -> bool {
        self.index == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.total == 0 || self.index + 1 >= self.total
    }

    pub fn first(&mut self) -> Option<usize> {
        self.index = 0;
        self.index()
    }

    pub fn last(&mut self) -> Option<usize> {
        self.index = self.total.saturating_sub(1);
        self.index()
    }

    pub fn next(&mut self) -> Option<usize> {
        if !self.is_at_end() {
            self.index += 1;
        }
        self.index()
    }

    pub fn prev(&mut self) -> Option<usize> {
        self.index = self.index.saturating_sub(1);
        self.index()
    }
}
