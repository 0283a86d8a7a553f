#![forbid(unsafe_code)]
//! Roulement — planification mensuelle de quatre agents sur trois postes (7h, 9h, 13h).
//!
//! - Découpage du mois en semaines (coupure avant chaque dimanche).
//! - Repos tournant : rôle `(agent + semaine) mod 4`, avec 3 jours de repos consécutifs
//!   (samedi, dimanche, lundi) une semaine sur quatre pour chaque agent.
//! - Affectation des postes par recherche exhaustive des 6 permutations, équilibrée
//!   sur les compteurs du mois.
//! - Rendus texte et exports CSV/JSON en dehors du cœur de calcul.

pub mod calendar;
#[cfg(feature = "serde")]
pub mod config;
#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod render;
pub mod scheduler;
pub mod summary;

pub use calendar::{month_days, partition_weeks, weeks_of_month, YearMonth};
#[cfg(feature = "serde")]
pub use config::{export_config_json, load_config_from_file, RosterConfig};
pub use model::{
    Assignment, Day, DaySchedule, Role, Schedule, ShiftCode, Team, Week, WorkerId, TEAM_SIZE,
};
pub use render::{CalendarRenderer, ScheduleRenderer, TableRenderer};
pub use scheduler::{
    generate_schedule, RotationScheduler, SchedError, Score, ScoringOptions, ShiftCounts,
};
pub use summary::{summarize, WorkerSummary};
