use crate::model::{Schedule, ShiftCode, WorkerId};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bilan mensuel d'un agent.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorkerSummary {
    pub worker: WorkerId,
    pub work_days: u32,
    pub off_days: u32,
    pub hours: u32,
    /// Dans l'ordre des créneaux (7, 9, 13).
    pub per_shift: [u32; 3],
}

impl WorkerSummary {
    pub fn shift_count(&self, shift: ShiftCode) -> u32 {
        self.per_shift[shift.slot()]
    }
}

/// Parcourt le planning une fois par agent.
pub fn summarize(schedule: &Schedule) -> Vec<WorkerSummary> {
    WorkerId::ALL
        .into_iter()
        .map(|worker| summarize_worker(schedule, worker))
        .collect()
}

pub fn summarize_worker(schedule: &Schedule, worker: WorkerId) -> WorkerSummary {
    let mut summary = WorkerSummary {
        worker,
        work_days: 0,
        off_days: 0,
        hours: 0,
        per_shift: [0; 3],
    };

    for day in schedule.iter() {
        if day.is_off(worker) {
            summary.off_days += 1;
            continue;
        }
        if let Some(shift) = day.shift_of(worker) {
            summary.work_days += 1;
            summary.hours += shift.duration_hours();
            summary.per_shift[shift.slot()] += 1;
        }
    }

    summary
}
