#![forbid(unsafe_code)]
use roulement::{
    export_config_json, generate_schedule, io, load_config_from_file, summarize, RosterConfig,
    ScheduleRenderer, ScoringOptions, ShiftCode, TableRenderer, Team, WorkerId, YearMonth,
};
use std::fs;
use tempfile::tempdir;

fn february() -> roulement::Schedule {
    generate_schedule(YearMonth::new(2026, 2)).unwrap()
}

#[test]
fn table_renderer_one_row_per_day() {
    let mut schedule = february();
    schedule.days.retain(|date, _| *date <= 3);
    let out = TableRenderer.render(&schedule, &Team::default());
    insta::assert_snapshot!(out.trim_end(), @r"
    2026-02
    day | wd | 07:00–15:00 | 09:00–17:00 | 13:00–21:00 | off
    01 | Sun | Agent 2 | Agent 3 | Agent 4 | Agent 1
    02 | Mon | Agent 3 | Agent 4 | Agent 2 | Agent 1
    03 | Tue | Agent 4 | Agent 1 | Agent 3 | Agent 2
    ");
}

#[test]
fn february_summary_is_balanced() {
    let summaries = summarize(&february());
    for s in &summaries {
        assert_eq!(s.work_days, 21);
        assert_eq!(s.off_days, 7);
        assert_eq!(s.hours, 168);
        assert_eq!(s.per_shift, [7, 7, 7]);
        assert_eq!(s.shift_count(ShiftCode::Late), 7);
    }
}

#[test]
fn schedule_csv_has_header_and_named_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("planning.csv");
    let team = Team::from_names(["Ana", "Bruno", "Chloé", "Dan"]).unwrap();
    io::export_schedule_csv(&path, &february(), &team).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("date,weekday,shift_7,shift_9,shift_13,off"));
    assert_eq!(lines.next(), Some("2026-02-01,Sun,Bruno,Chloé,Dan,Ana"));
    assert_eq!(text.lines().count(), 29);
}

#[test]
fn summary_csv_lists_every_worker() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bilan.csv");
    let schedule = february();
    io::export_summary_csv(&path, &summarize(&schedule), &Team::default()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[0],
        "worker,name,work_days,off_days,hours,shift_7,shift_9,shift_13"
    );
    assert_eq!(lines[1], "1,Agent 1,21,7,168,7,7,7");
    assert_eq!(lines.len(), 5);
}

#[test]
fn schedule_json_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("planning.json");
    let schedule = generate_schedule(YearMonth::new(2026, 10)).unwrap();
    io::export_schedule_json(&path, &schedule).unwrap();

    let raw: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(raw["days"]["1"]["assignments"][0]["shift"], 7);

    let loaded = io::load_schedule_json(&path).unwrap();
    assert_eq!(loaded, schedule);
}

#[test]
fn team_csv_needs_four_names() {
    let dir = tempdir().unwrap();
    let ok = dir.path().join("team.csv");
    fs::write(&ok, "name\nAna\nBruno\nChloé\nDan\n").unwrap();
    let team = io::import_team_csv(&ok).unwrap();
    assert_eq!(team.name(WorkerId::new(2).unwrap()), "Chloé");

    let short = dir.path().join("short.csv");
    fs::write(&short, "name\nAna\nBruno\n").unwrap();
    assert!(io::import_team_csv(&short).is_err());
}

#[test]
fn config_roundtrip_drives_scheduler() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roulement.json");
    let config = RosterConfig {
        team: Team::from_names(["Ana", "Bruno", "Chloé", "Dan"]).unwrap(),
        scoring: ScoringOptions {
            imbalance_weight_tenths: 3,
        },
    };
    export_config_json(&path, &config).unwrap();

    let loaded = load_config_from_file(&path).unwrap();
    assert_eq!(loaded, config);
    // la pénalité est identique pour tous les ordres d'un même jour : même planning
    let month = YearMonth::new(2026, 2);
    assert_eq!(loaded.scheduler().generate(month).unwrap(), february());
}
