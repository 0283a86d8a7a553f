use crate::model::{ShiftCode, WorkerId, TEAM_SIZE};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Options de notation de l'affectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoringOptions {
    /// Poids de la pénalité d'écart, en dixièmes (1 => 0.1).
    pub imbalance_weight_tenths: u32,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            imbalance_weight_tenths: 1,
        }
    }
}

/// Score d'un ordre d'affectation, exprimé en dixièmes pour que les égalités soient exactes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Score(u64);

impl Score {
    pub fn from_tenths(tenths: u64) -> Self {
        Self(tenths)
    }

    pub fn tenths(self) -> u64 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 10.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

/// Compteurs (agent × poste) cumulés sur une génération mensuelle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftCounts {
    counts: [[u32; 3]; TEAM_SIZE],
}

impl ShiftCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, worker: WorkerId, shift: ShiftCode) -> u32 {
        self.counts[worker.index()][shift.slot()]
    }

    pub fn set(&mut self, worker: WorkerId, shift: ShiftCode, value: u32) {
        self.counts[worker.index()][shift.slot()] = value;
    }

    pub fn increment(&mut self, worker: WorkerId, shift: ShiftCode) {
        self.counts[worker.index()][shift.slot()] += 1;
    }

    pub fn of(&self, worker: WorkerId) -> [u32; 3] {
        self.counts[worker.index()]
    }

    /// max - min des compteurs de l'agent sur les trois postes.
    pub fn spread(&self, worker: WorkerId) -> u32 {
        let row = self.counts[worker.index()];
        let max = row.iter().copied().max().unwrap_or(0);
        let min = row.iter().copied().min().unwrap_or(0);
        max - min
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().flatten().sum()
    }
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("invalid month: {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("no worker rests on day {day}")]
    RotationGap { day: u32 },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
