use clap::Parser;
use colored::Colorize;
use duty_limits::crew::{CrewComplement, RestFacilityClass, Sectors};
use duty_limits::fdp::{FdpResult, resolve, resolve_fdp};
use duty_limits::plan::{DutyPlan, describe_wheels_up};
use duty_limits::time::{ClockTime, format_hours, format_minutes, parse_block_hours};
use duty_limits::wheels_up::{DutyTimeline, back_calculate};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "Flight duty period limits and latest wheels-up times")]
struct Args {
    /// Evaluate every duty in a JSON plan file and exit
    #[arg(short, long, value_name = "FILE")]
    plan: Option<PathBuf>,

    /// Print plan results as JSON instead of a table
    #[arg(long, requires = "plan")]
    json: bool,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let mut candidates = Vec::new();

        for cmd in &self.commands {
            if cmd.starts_with(line) {
                candidates.push(Pair {
                    display: cmd.clone(),
                    replacement: format!("{} ", cmd),
                });
            }
        }

        Ok((0, candidates))
    }
}

#[derive(Tabled)]
struct LimitRow {
    #[tabled(rename = "Report")]
    report: ClockTime,
    #[tabled(rename = "Window")]
    window: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Max FDT")]
    max_fdt: String,
    #[tabled(rename = "Max FDP")]
    max_fdp: String,
}

#[derive(Tabled)]
struct SegmentRow {
    #[tabled(rename = "Segment")]
    label: &'static str,
    #[tabled(rename = "Duration")]
    duration: String,
}

#[derive(Tabled)]
struct RestClassRow {
    #[tabled(rename = "Class")]
    label: String,
    #[tabled(rename = "3-crew FDP")]
    three_crew: String,
    #[tabled(rename = "4-crew FDP")]
    four_crew: String,
    #[tabled(rename = "Facility")]
    description: &'static str,
}

fn print_table<T: Tabled>(rows: &[T]) -> std::io::Result<()> {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.with(tabled::settings::Alignment::left());
    if rows.len() > 20 {
        paginate(&table.to_string())
    } else {
        println!("{}", table);
        Ok(())
    }
}

fn paginate(content: &str) -> std::io::Result<()> {
    let mut pager = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn())?;

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // Broken pipe is common if the user quits the pager early
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                return Err(e);
            }
        }
    }

    pager.wait()?;
    Ok(())
}

fn print_plan(path: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let plan = DutyPlan::load_from_file(path)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&plan.assess())?);
    } else if plan.duties.is_empty() {
        println!("Plan {} has no duties.", path.display());
    } else {
        print_table(&plan.rows())?;
    }
    Ok(())
}

fn print_limits(report: ClockTime, limits: &FdpResult) -> std::io::Result<()> {
    print_table(&[LimitRow {
        report,
        window: limits.report_time_window.clone(),
        source: limits.source.to_string(),
        max_fdt: format_hours(limits.max_flight_duty_time_hours),
        max_fdp: format_hours(limits.max_flight_duty_period_hours),
    }])
}

fn print_wheels_up(report: ClockTime, limits: &FdpResult, block_hours: f64, taxi_minutes: f64) -> std::io::Result<()> {
    let fdp = limits.max_flight_duty_period_hours;
    let Some(wheels_up) = back_calculate(report, fdp, block_hours, taxi_minutes) else {
        let reason = if block_hours > 0.0 {
            format!(
                "Final sector, taxi and sign-off do not fit into the max FDP of {}.",
                format_hours(fdp)
            )
        } else {
            "Final sector block time must be greater than zero.".to_string()
        };
        println!("{}", reason.red());
        return Ok(());
    };

    println!("Latest wheels up: {}", describe_wheels_up(&wheels_up).green().bold());
    if wheels_up.next_day {
        println!("{}", "Duty period ends on the next calendar day.".yellow());
    }

    if let Some(timeline) = DutyTimeline::build(report, fdp, block_hours, taxi_minutes) {
        let rows: Vec<SegmentRow> = timeline
            .segments
            .iter()
            .map(|s| SegmentRow {
                label: s.label,
                duration: format_minutes(s.minutes),
            })
            .collect();
        print_table(&rows)?;
    }
    Ok(())
}

fn rest_class_rows() -> Vec<RestClassRow> {
    let limits = |crew: CrewComplement, class: RestFacilityClass| {
        let fdp = |sectors| {
            resolve(ClockTime::MIDNIGHT, Sectors::new(sectors), crew, class)
                .map(|r| format_hours(r.max_flight_duty_period_hours))
                .unwrap_or_else(|| "-".to_string())
        };
        format!("{} / {}", fdp(2), fdp(3))
    };
    RestFacilityClass::ALL
        .iter()
        .map(|class| RestClassRow {
            label: class.label(),
            three_crew: limits(CrewComplement::ThreeCrew, *class),
            four_crew: limits(CrewComplement::FourCrew, *class),
            description: class.description(),
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Some(path) = args.plan {
        return print_plan(&path, args.json);
    }

    println!("Duty limits calculator. Type 'help' for commands.");

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: vec![
            "fdp".to_string(),
            "wheels".to_string(),
            "classes".to_string(),
            "plan".to_string(),
            "help".to_string(),
            "exit".to_string(),
        ],
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    let mut last: Option<(ClockTime, FdpResult)> = None;

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                match parts[0] {
                    "fdp" => {
                        if let (Some(report), Some(sectors)) = (parts.get(1), parts.get(2)) {
                            let crew = parts.get(3).map(|c| CrewComplement::parse(c)).unwrap_or(Some(CrewComplement::Standard));
                            let Some(crew) = crew else {
                                println!("Crew must be one of: standard, 3-crew, 4-crew");
                                continue;
                            };
                            let sectors = sectors.parse::<i64>().unwrap_or(1);
                            let class = parts.get(4).map(|c| c.parse::<i64>().unwrap_or(1));
                            match resolve_fdp(report, sectors, crew, class) {
                                Some(limits) => {
                                    let report = ClockTime::parse(report);
                                    print_limits(report, &limits)?;
                                    last = Some((report, limits));
                                }
                                None => println!("{}", "No FDP limit applies to this report time.".red()),
                            }
                        } else {
                            println!("Usage: fdp <HH:MM> <sectors> [standard|3-crew|4-crew] [class]");
                        }
                    },
                    "wheels" => {
                        match (parts.get(1), &last) {
                            (Some(block), Some((report, limits))) => {
                                let block_hours = parse_block_hours(block);
                                let taxi = parts.get(2).map(|t| t.parse::<f64>().unwrap_or(0.0)).unwrap_or(0.0);
                                print_wheels_up(*report, limits, block_hours, taxi)?;
                            },
                            (Some(_), None) => println!("Run 'fdp' first to set the duty limits."),
                            (None, _) => println!("Usage: wheels <block H:MM> [taxi minutes]"),
                        }
                    },
                    "classes" => print_table(&rest_class_rows())?,
                    "plan" => {
                        if let Some(path) = parts.get(1) {
                            if let Err(e) = print_plan(Path::new(path), false) {
                                println!("{}", format!("Cannot load plan: {}", e).red());
                            }
                        } else {
                            println!("Usage: plan <file>");
                        }
                    },
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  fdp <t> <n> [crew] [c] - Limits for report time <t>, <n> sectors, crew and rest class <c>");
                        println!("  wheels <block> [taxi]  - Latest wheels up for the last 'fdp' with final sector <block> (H:MM) and taxi minutes");
                        println!("  classes                - Show in-flight rest facility classes and their FDP limits");
                        println!("  plan <file>            - Evaluate every duty in a JSON plan file");
                        println!("  help / ?               - Show this help menu");
                        println!("  exit / quit            - Exit the calculator\n");
                    },
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", parts[0]),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
