#![forbid(unsafe_code)]
use anyhow::{anyhow, Result};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use roulement::{
    config::{export_config_json, load_config_from_file, RosterConfig},
    io,
    render::{CalendarRenderer, ScheduleRenderer, TableRenderer},
    summary::summarize,
    Schedule, ShiftCode, Team, YearMonth,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de roulement : 4 agents, 3 postes, repos tournant
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de configuration (équipe + pondération)
    #[arg(long, global = true)]
    config: Option<String>,

    /// CSV des noms d'agents (header `name`), prioritaire sur la configuration
    #[arg(long, global = true)]
    team_csv: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Calendar,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer le planning d'un mois
    Generate {
        /// Mois cible `YYYY-MM` (mois courant par défaut)
        #[arg(long)]
        month: Option<String>,
        /// Décalage en mois (navigation : -1 = précédent, 1 = suivant)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i32,
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
        #[arg(long)]
        summary_csv: Option<String>,
    },

    /// Afficher le bilan par agent (jours travaillés, repos, heures, postes)
    Summary {
        #[arg(long)]
        month: Option<String>,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i32,
        /// Relire un planning exporté en JSON au lieu de le régénérer
        #[arg(long)]
        from: Option<String>,
    },

    /// Écrire un fichier de configuration par défaut
    InitConfig {
        #[arg(long, default_value = "roulement.json")]
        out: String,
        /// liste "nom1,nom2,nom3,nom4"
        #[arg(long)]
        names: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let mut config = match &cli.config {
        Some(path) => load_config_from_file(path)?,
        None => RosterConfig::default(),
    };
    if let Some(path) = &cli.team_csv {
        config.team = io::import_team_csv(path)?;
    }

    match cli.cmd {
        Commands::Generate {
            month,
            offset,
            format,
            out_json,
            out_csv,
            summary_csv,
        } => {
            let target = target_month(month.as_deref(), offset)?;
            let schedule = config.scheduler().generate(target)?;
            schedule.validate().map_err(|e| anyhow!(e))?;

            if let Some(path) = out_json {
                io::export_schedule_json(path, &schedule)?;
            }
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &schedule, &config.team)?;
            }
            if let Some(path) = summary_csv {
                io::export_summary_csv(path, &summarize(&schedule), &config.team)?;
            }

            match format {
                Format::Table => print!("{}", TableRenderer.render(&schedule, &config.team)),
                Format::Calendar => print!("{}", CalendarRenderer.render(&schedule, &config.team)),
                Format::Json => println!("{}", serde_json::to_string_pretty(&schedule)?),
            }
        }
        Commands::Summary {
            month,
            offset,
            from,
        } => {
            let schedule = match from {
                Some(path) => io::load_schedule_json(path)?,
                None => {
                    let target = target_month(month.as_deref(), offset)?;
                    config.scheduler().generate(target)?
                }
            };
            print_summary(&schedule, &config.team);
        }
        Commands::InitConfig { out, names } => {
            if let Some(list) = names {
                let names: Vec<String> = list
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                config.team = Team::from_names(names).map_err(|e| anyhow!(e))?;
            }
            export_config_json(&out, &config)?;
            println!("Config written to {out}");
        }
    }

    Ok(())
}

fn target_month(month: Option<&str>, offset: i32) -> Result<YearMonth> {
    let base = match month {
        Some(raw) => raw.parse::<YearMonth>()?,
        None => YearMonth::from_date(Utc::now().date_naive()),
    };
    Ok(base.offset(offset))
}

fn print_summary(schedule: &Schedule, team: &Team) {
    println!("{}", schedule.month);
    for s in summarize(schedule) {
        let shifts: Vec<String> = ShiftCode::ALL
            .iter()
            .map(|shift| format!("{}h={}", shift.code(), s.shift_count(*shift)))
            .collect();
        println!(
            "{} | work {} | off {} | {}h | {}",
            team.name(s.worker),
            s.work_days,
            s.off_days,
            s.hours,
            shifts.join(" ")
        );
    }
}
