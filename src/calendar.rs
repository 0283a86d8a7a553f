//! Découpage d'un mois en jours puis en semaines (coupure avant chaque dimanche).

use crate::model::{Day, Week};
use crate::scheduler::SchedError;
use chrono::{Datelike, NaiveDate, Weekday};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mois cible d'une génération. Possédé par l'appelant, aucune valeur globale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct YearMonth {
    pub year: i32,
    /// 1..=12
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Nombre de jours du mois (calendrier grégorien proleptique).
    pub fn days_in_month(&self) -> Option<u32> {
        let first = self.first_day()?;
        let next = self.next().first_day()?;
        u32::try_from(next.signed_duration_since(first).num_days()).ok()
    }

    pub fn next(&self) -> Self {
        self.offset(1)
    }

    pub fn prev(&self) -> Self {
        self.offset(-1)
    }

    /// Décale de `months` mois (négatif pour reculer).
    pub fn offset(&self, months: i32) -> Self {
        let total = i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(months);
        let year = total.div_euclid(12);
        let month = total.rem_euclid(12) + 1;
        Self {
            year: i32::try_from(year).unwrap_or(self.year),
            month: u32::try_from(month).unwrap_or(self.month),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = SchedError;

    /// Format `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SchedError::InvalidInput(format!("expected YYYY-MM, got {s:?}"));
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(SchedError::InvalidMonth { year, month });
        }
        Ok(Self { year, month })
    }
}

/// Jours 1..=N du mois, chacun avec son jour de semaine.
pub fn month_days(month: YearMonth) -> Result<Vec<Day>, SchedError> {
    let invalid = || SchedError::InvalidMonth {
        year: month.year,
        month: month.month,
    };
    let first = month.first_day().ok_or_else(invalid)?;
    let count = month.days_in_month().ok_or_else(invalid)?;

    Ok(first
        .iter_days()
        .take(count as usize)
        .map(|date| Day {
            date: date.day(),
            weekday: date.weekday(),
        })
        .collect())
}

/// Regroupe des jours consécutifs en semaines : nouvelle semaine avant chaque dimanche,
/// sauf avant le premier jour.
pub fn partition_weeks(days: &[Day]) -> Vec<Week> {
    let mut weeks: Vec<Week> = Vec::new();
    let mut current: Vec<Day> = Vec::new();

    for day in days {
        if day.weekday == Weekday::Sun && !current.is_empty() {
            weeks.push(Week {
                index: weeks.len(),
                days: std::mem::take(&mut current),
            });
        }
        current.push(*day);
    }
    if !current.is_empty() {
        weeks.push(Week {
            index: weeks.len(),
            days: current,
        });
    }

    weeks
}

pub fn weeks_of_month(month: YearMonth) -> Result<Vec<Week>, SchedError> {
    let days = month_days(month)?;
    let weeks = partition_weeks(&days);
    #[cfg(feature = "logging")]
    tracing::debug!(%month, days = days.len(), weeks = weeks.len(), "month partitioned");
    Ok(weeks)
}
