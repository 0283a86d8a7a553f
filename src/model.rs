use crate::calendar::YearMonth;
use chrono::{NaiveTime, Weekday};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Nombre d'agents du roulement (fixe).
pub const TEAM_SIZE: usize = 4;

/// Identifiant fort d'un agent : index 0..=3, sans sémantique de nom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WorkerId(u8);

impl WorkerId {
    pub const ALL: [WorkerId; TEAM_SIZE] = [WorkerId(0), WorkerId(1), WorkerId(2), WorkerId(3)];

    pub fn new(index: usize) -> Option<Self> {
        WorkerId::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Poste de la journée, identifié par son heure de prise de service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "u8", try_from = "u8"))]
pub enum ShiftCode {
    Early,
    Mid,
    Late,
}

impl ShiftCode {
    /// Ordre des créneaux utilisé par l'affectation.
    pub const ALL: [ShiftCode; 3] = [ShiftCode::Early, ShiftCode::Mid, ShiftCode::Late];

    pub fn code(self) -> u8 {
        match self {
            ShiftCode::Early => 7,
            ShiftCode::Mid => 9,
            ShiftCode::Late => 13,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        ShiftCode::ALL.into_iter().find(|s| s.code() == code)
    }

    /// Position du créneau dans `ALL` (et dans les compteurs).
    pub fn slot(self) -> usize {
        match self {
            ShiftCode::Early => 0,
            ShiftCode::Mid => 1,
            ShiftCode::Late => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShiftCode::Early => "07:00–15:00",
            ShiftCode::Mid => "09:00–17:00",
            ShiftCode::Late => "13:00–21:00",
        }
    }

    pub fn start_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.code()), 0, 0).unwrap_or_default()
    }

    pub fn end_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.code()) + 8, 0, 0).unwrap_or_default()
    }

    /// Durée en heures (8 pour chaque poste).
    pub fn duration_hours(self) -> u32 {
        let minutes = (self.end_time() - self.start_time()).num_minutes();
        u32::try_from(minutes / 60).unwrap_or(0)
    }
}

impl From<ShiftCode> for u8 {
    fn from(shift: ShiftCode) -> Self {
        shift.code()
    }
}

impl TryFrom<u8> for ShiftCode {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        ShiftCode::from_code(code).ok_or_else(|| format!("unknown shift code {code}"))
    }
}

impl fmt::Display for ShiftCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Rôle hebdomadaire d'un agent (0..=3) : fixe ses jours de repos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Role(u8);

impl Role {
    pub fn new(value: u8) -> Option<Self> {
        (usize::from(value) < TEAM_SIZE).then_some(Self(value))
    }

    /// Réduit modulo 4.
    pub fn wrapping(value: usize) -> Self {
        Self((value % TEAM_SIZE) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Jours de repos associés au rôle. Les quatre motifs couvrent la semaine sans recouvrement.
    pub fn rest_days(self) -> &'static [Weekday] {
        match self.0 {
            0 => &[Weekday::Sun, Weekday::Mon],
            1 => &[Weekday::Tue, Weekday::Wed],
            2 => &[Weekday::Thu, Weekday::Fri],
            _ => &[Weekday::Sat],
        }
    }

    pub fn rests_on(self, weekday: Weekday) -> bool {
        self.rest_days().contains(&weekday)
    }
}

/// Jour du mois avec son jour de semaine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Day {
    pub date: u32,
    pub weekday: Weekday,
}

impl Day {
    /// 0 = dimanche .. 6 = samedi
    pub fn weekday_index(&self) -> u32 {
        self.weekday.num_days_from_sunday()
    }
}

/// Semaine calendaire (éventuellement incomplète en début/fin de mois).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    pub index: usize,
    pub days: Vec<Day>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Assignment {
    pub worker: WorkerId,
    pub shift: ShiftCode,
}

/// Planning d'une journée : un agent au repos, trois postes distincts pour les autres.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DaySchedule {
    pub day: Day,
    pub week_index: usize,
    pub off: WorkerId,
    /// Dans l'ordre des créneaux (7, 9, 13).
    pub assignments: [Assignment; 3],
}

impl DaySchedule {
    pub fn shift_of(&self, worker: WorkerId) -> Option<ShiftCode> {
        self.assignments
            .iter()
            .find(|a| a.worker == worker)
            .map(|a| a.shift)
    }

    pub fn worker_on(&self, shift: ShiftCode) -> Option<WorkerId> {
        self.assignments
            .iter()
            .find(|a| a.shift == shift)
            .map(|a| a.worker)
    }

    pub fn is_off(&self, worker: WorkerId) -> bool {
        self.off == worker
    }

    fn validate(&self) -> Result<(), String> {
        let date = self.day.date;
        for shift in ShiftCode::ALL {
            let holders = self.assignments.iter().filter(|a| a.shift == shift).count();
            if holders != 1 {
                return Err(format!("day {date}: shift {shift} held {holders} times"));
            }
        }
        for worker in WorkerId::ALL {
            let slots = self.assignments.iter().filter(|a| a.worker == worker).count();
            let expected = usize::from(worker != self.off);
            if slots != expected {
                return Err(format!(
                    "day {date}: worker {worker} has {slots} shift(s), expected {expected}"
                ));
            }
        }
        Ok(())
    }
}

/// Planning complet d'un mois, indexé par numéro de jour.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Schedule {
    pub month: YearMonth,
    pub days: BTreeMap<u32, DaySchedule>,
}

impl Schedule {
    pub fn get(&self, date: u32) -> Option<&DaySchedule> {
        self.days.get(&date)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DaySchedule> {
        self.days.values()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Vérifie la couverture 1..=N sans trou et l'invariant repos/trois postes de chaque jour.
    pub fn validate(&self) -> Result<(), String> {
        for (expected, (date, day)) in (1u32..).zip(self.days.iter()) {
            if *date != expected || day.day.date != expected {
                return Err(format!("missing day {expected}"));
            }
            day.validate()?;
        }
        if let Some(total) = self.month.days_in_month() {
            if self.days.len() != total as usize {
                return Err(format!("expected {total} days, found {}", self.days.len()));
            }
        }
        Ok(())
    }
}

/// Noms d'affichage des quatre agents, liés par index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<String>", into = "Vec<String>"))]
pub struct Team {
    names: [String; TEAM_SIZE],
}

impl Team {
    pub fn from_names<I, S>(names: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let count = names.len();
        let names: [String; TEAM_SIZE] = names
            .try_into()
            .map_err(|_| format!("team must have exactly {TEAM_SIZE} names, got {count}"))?;
        Ok(Self { names })
    }

    pub fn name(&self, worker: WorkerId) -> &str {
        &self.names[worker.index()]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for Team {
    fn default() -> Self {
        Self {
            names: std::array::from_fn(|i| format!("Agent {}", i + 1)),
        }
    }
}

impl TryFrom<Vec<String>> for Team {
    type Error = String;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Team::from_names(names)
    }
}

impl From<Team> for Vec<String> {
    fn from(team: Team) -> Self {
        team.names.into()
    }
}
