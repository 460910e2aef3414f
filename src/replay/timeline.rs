use serde::{Deserialize, Serialize};

use crate::domain::bb::BigBlinds;
use crate::domain::hand::Street;
use crate::domain::record::DecisionPoint;

/// Одна улица в реплее.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StreetSnapshot {
    pub name: Street,
    pub actions: Vec<String>,
    /// Банк точки решения. Одинаков на всех улицах: запись хранит
    /// один банк на решение, а не по улицам.
    pub pot: BigBlinds,
    /// На префлопе пустая строка.
    pub board: String,
}

/// Действие с плоским индексом во всей раздаче.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct TimelineEntry<'a> {
    pub index: usize,
    pub street: Street,
    pub action: &'a str,
}

/// Раздача по улицам. Неизменяема после сборки.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct Timeline {
    streets: Vec<StreetSnapshot>,
    total_actions: usize,
}

fn split_actions(actions: &str) -> Vec<String> {
    actions.split(',').map(|a| a.trim().to_string()).collect()
}

impl Timeline {
    pub fn from_streets(streets: Vec<StreetSnapshot>) -> Self {
        let total_actions = streets.iter().map(|s| s.actions.len()).sum();
        Self {
            streets,
            total_actions,
        }
    }

    /// Собрать реплей из записи.
    ///
    /// Префлоп попадает, если есть строка действий. Флоп, тёрн и ривер —
    /// только если есть и действия, и борд этой улицы.
    pub fn build(point: &DecisionPoint) -> Self {
        let pot = BigBlinds::new(point.pot_bb);

        let streets = Street::all()
            .into_iter()
            .filter_map(|street| {
                let (actions, board) = point.street_fields(street);
                let board = match street {
                    Street::Preflop => "",
                    _ => board?,
                };
                Some(StreetSnapshot {
                    name: street,
                    actions: split_actions(actions?),
                    pot,
                    board: board.to_string(),
                })
            })
            .collect();

        Self::from_streets(streets)
    }

    pub fn streets(&self) -> &[StreetSnapshot] {
        &self.streets
    }

    pub fn total_actions(&self) -> usize {
        self.total_actions
    }

    pub fn is_empty(&self) -> bool {
        self.total_actions == 0
    }

    /// Улица, на которой находится действие `index`.
    /// Индекс за пределами раздачи даёт последнюю улицу.
    pub fn current_street(&self, index: usize) -> Option<&StreetSnapshot> {
        let mut seen = 0;
        for street in &self.streets {
            seen += street.actions.len();
            if index < seen {
                return Some(street);
            }
        }
        self.streets.last()
    }

    /// Все действия раздачи подряд.
    pub fn entries(&self) -> Vec<TimelineEntry<'_>> {
        self.streets
            .iter()
            .flat_map(|street| street.actions.iter().map(move |action| (street.name, action)))
            .enumerate()
            .map(|(index, (street, action))| TimelineEntry {
                index,
                street,
                action: action.as_str(),
            })
            .collect()
    }

    pub fn entry(&self, index: usize) -> Option<TimelineEntry<'_>> {
        self.entries().into_iter().nth(index)
    }
}
