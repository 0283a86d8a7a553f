mod assignment;
mod rotation;
mod types;

pub use assignment::{assign_day, best_ordering, enumerate_orderings, score_ordering};
pub use rotation::{off_worker, role_for};
pub use types::{SchedError, Score, ScoringOptions, ShiftCounts};

use crate::calendar::{self, YearMonth};
use crate::model::{Schedule, Week};
use std::collections::BTreeMap;

/// Générateur de roulement : repos tournant hebdomadaire puis affectation équilibrée des postes.
///
/// Aucun état n'est conservé entre deux appels : les compteurs vivent le temps d'un mois.
#[derive(Debug, Default, Clone, Copy)]
pub struct RotationScheduler {
    options: ScoringOptions,
}

impl RotationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ScoringOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ScoringOptions {
        self.options
    }

    pub fn generate(&self, month: YearMonth) -> Result<Schedule, SchedError> {
        let weeks = calendar::weeks_of_month(month)?;
        self.schedule_weeks(month, &weeks)
    }

    /// Planifie des semaines déjà découpées, dans l'ordre fourni.
    pub fn schedule_weeks(&self, month: YearMonth, weeks: &[Week]) -> Result<Schedule, SchedError> {
        let mut counts = ShiftCounts::new();
        let mut days = BTreeMap::new();

        for (week_index, week) in weeks.iter().enumerate() {
            for day in &week.days {
                let off = off_worker(day.weekday, week_index)
                    .ok_or(SchedError::RotationGap { day: day.date })?;
                let planned = assign_day(&mut counts, *day, week_index, off, self.options)?;
                days.insert(day.date, planned);
            }
        }

        #[cfg(feature = "logging")]
        tracing::debug!(%month, days = days.len(), assigned = counts.total(), "schedule generated");

        Ok(Schedule { month, days })
    }
}

/// Génère le planning du mois avec les options par défaut.
pub fn generate_schedule(month: YearMonth) -> Result<Schedule, SchedError> {
    RotationScheduler::new().generate(month)
}
