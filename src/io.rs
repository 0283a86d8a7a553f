use crate::model::{Schedule, ShiftCode, Team};
use crate::summary::WorkerSummary;
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Import des noms d'agents depuis CSV : header `name`, exactement quatre lignes.
pub fn import_team_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Team> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let mut names = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        if name.is_empty() {
            bail!("invalid team row (empty name)");
        }
        names.push(name.to_string());
    }
    Team::from_names(names).map_err(anyhow::Error::msg)
}

/// Export JSON du planning, écrit de manière atomique.
pub fn export_schedule_json<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let json = serde_json::to_vec_pretty(schedule)?;
    write_atomic(path.as_ref(), &json)
}

pub fn load_schedule_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Schedule> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let schedule: Schedule = serde_json::from_slice(&data)
        .with_context(|| format!("parsing schedule {}", path.display()))?;
    schedule.validate().map_err(anyhow::Error::msg)?;
    Ok(schedule)
}

/// Export CSV, une ligne par jour : header `date,weekday,shift_7,shift_9,shift_13,off`
pub fn export_schedule_csv<P: AsRef<Path>>(
    path: P,
    schedule: &Schedule,
    team: &Team,
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["date", "weekday", "shift_7", "shift_9", "shift_13", "off"])?;
    for day in schedule.iter() {
        let date = format!("{}-{:02}", schedule.month, day.day.date);
        let weekday = day.day.weekday.to_string();
        let on = |shift: ShiftCode| day.worker_on(shift).map_or("", |worker| team.name(worker));
        w.write_record([
            date.as_str(),
            weekday.as_str(),
            on(ShiftCode::Early),
            on(ShiftCode::Mid),
            on(ShiftCode::Late),
            team.name(day.off),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Export CSV du bilan : header `worker,name,work_days,off_days,hours,shift_7,shift_9,shift_13`
pub fn export_summary_csv<P: AsRef<Path>>(
    path: P,
    summaries: &[WorkerSummary],
    team: &Team,
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record([
        "worker", "name", "work_days", "off_days", "hours", "shift_7", "shift_9", "shift_13",
    ])?;
    for s in summaries {
        let mut fields: Vec<String> = Vec::with_capacity(8);
        let mut buf = itoa::Buffer::new();
        fields.push(buf.format(s.worker.index() + 1).to_owned());
        fields.push(team.name(s.worker).to_owned());
        for n in [s.work_days, s.off_days, s.hours] {
            fields.push(buf.format(n).to_owned());
        }
        for shift in ShiftCode::ALL {
            fields.push(buf.format(s.shift_count(shift)).to_owned());
        }
        w.write_record(&fields)?;
    }
    w.flush()?;
    Ok(())
}

pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).with_context(|| "atomic rename")?;
    #[cfg(feature = "logging")]
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "file written");
    Ok(())
}
