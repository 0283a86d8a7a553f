use crate::model::{Role, WorkerId};
use chrono::Weekday;

/// Rôle de `worker` pour la semaine `week_index` : `(worker + week_index) mod 4`.
pub fn role_for(worker: WorkerId, week_index: usize) -> Role {
    Role::wrapping(worker.index() + week_index)
}

/// Premier agent (0..=3) dont le rôle de la semaine inclut ce jour de repos.
pub fn off_worker(weekday: Weekday, week_index: usize) -> Option<WorkerId> {
    WorkerId::ALL
        .into_iter()
        .find(|w| role_for(*w, week_index).rests_on(weekday))
}
