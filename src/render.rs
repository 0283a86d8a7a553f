use crate::model::{DaySchedule, Schedule, ShiftCode, Team};
use chrono::Weekday;
use std::fmt::Write;

/// Permet de brancher différents rendus (tableau, calendrier, ...) sur un planning.
pub trait ScheduleRenderer {
    fn render(&self, schedule: &Schedule, team: &Team) -> String;
}

/// Une ligne par jour : colonnes 7h / 9h / 13h puis l'agent au repos.
#[derive(Debug, Default, Clone, Copy)]
pub struct TableRenderer;

impl ScheduleRenderer for TableRenderer {
    fn render(&self, schedule: &Schedule, team: &Team) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", schedule.month);
        let labels: Vec<&str> = ShiftCode::ALL.iter().map(|s| s.label()).collect();
        let _ = writeln!(out, "day | wd | {} | off", labels.join(" | "));

        for day in schedule.iter() {
            let on_duty: Vec<&str> = ShiftCode::ALL
                .iter()
                .map(|shift| day.worker_on(*shift).map_or("-", |w| team.name(w)))
                .collect();
            let _ = writeln!(
                out,
                "{:02} | {} | {} | {}",
                day.day.date,
                day.day.weekday,
                on_duty.join(" | "),
                team.name(day.off)
            );
        }
        out
    }
}

/// Grille mensuelle : une ligne par semaine, une case par jour (dimanche en tête).
#[derive(Debug, Default, Clone, Copy)]
pub struct CalendarRenderer;

const GRID: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

impl ScheduleRenderer for CalendarRenderer {
    fn render(&self, schedule: &Schedule, team: &Team) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", schedule.month);
        let header: Vec<String> = GRID.iter().map(|d| d.to_string()).collect();
        let _ = writeln!(out, "wk | {}", header.join(" | "));

        let mut weeks: Vec<Vec<&DaySchedule>> = Vec::new();
        for day in schedule.iter() {
            let same_week = weeks
                .last()
                .and_then(|w| w.first())
                .map(|d| d.week_index)
                == Some(day.week_index);
            match weeks.last_mut() {
                Some(week) if same_week => week.push(day),
                _ => weeks.push(vec![day]),
            }
        }

        for week in &weeks {
            let cells: Vec<String> = GRID
                .iter()
                .map(|weekday| {
                    week.iter()
                        .find(|d| d.day.weekday == *weekday)
                        .map_or_else(|| "--".to_string(), |d| cell(d))
                })
                .collect();
            let index = week.first().map_or(0, |d| d.week_index) + 1;
            let _ = writeln!(out, "S{index} | {}", cells.join(" | "));
        }

        let _ = writeln!(out);
        for (number, name) in team.names().iter().enumerate() {
            let _ = writeln!(out, "{} = {}", number + 1, name);
        }
        let legend: Vec<String> = ShiftCode::ALL
            .iter()
            .map(|s| format!("{} = {}", s.code(), s.label()))
            .collect();
        let _ = writeln!(out, "{}", legend.join(", "));
        out
    }
}

/// `JJ 7:a 9:b 13:c R:d`, agents numérotés à partir de 1.
fn cell(day: &DaySchedule) -> String {
    let mut cell = format!("{:02}", day.day.date);
    for a in &day.assignments {
        let _ = write!(cell, " {}:{}", a.shift.code(), a.worker.index() + 1);
    }
    let _ = write!(cell, " R:{}", day.off.index() + 1);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::YearMonth;
    use crate::scheduler::generate_schedule;

    #[test]
    fn calendar_pads_short_first_week() {
        // 1er octobre 2026 : jeudi
        let schedule = generate_schedule(YearMonth::new(2026, 10)).unwrap();
        let out = CalendarRenderer.render(&schedule, &Team::default());
        let first_week = out.lines().nth(2).unwrap();
        assert!(first_week.starts_with("S1 | -- | -- | -- | -- | 01 "));
        assert!(first_week.contains("R:3"));
        assert_eq!(out.lines().filter(|l| l.starts_with('S')).count(), 5);
        assert!(out.contains("13 = 13:00–21:00"));
    }
}
