// ==========================================
// 人力排班系统 - 命令行主入口
// ==========================================
// 用法:
//   workforce-aps <demand.csv> <employees.csv>
//       [--constraints <constraints.json>]
//       [--output <schedule.csv>]
//       [--coverage <coverage.csv>]
// ==========================================

use std::path::PathBuf;
use std::process;

use workforce_aps::config::SchedulingConstraints;
use workforce_aps::engine::orchestrator::write_coverage_report;
use workforce_aps::engine::ScheduleOrchestrator;
use workforce_aps::importer::{DemandImporter, EmployeeImporter};
use workforce_aps::logging;

struct CliArgs {
    demand_path: PathBuf,
    employees_path: PathBuf,
    constraints_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    coverage_path: Option<PathBuf>,
}

fn print_usage() {
    eprintln!("用法: workforce-aps <demand.csv> <employees.csv> [--constraints <json>] [--output <csv>] [--coverage <csv>]");
}

fn parse_args() -> Option<CliArgs> {
    let mut args = std::env::args().skip(1);
    let demand_path = PathBuf::from(args.next()?);
    let employees_path = PathBuf::from(args.next()?);

    let mut constraints_path = None;
    let mut output_path = None;
    let mut coverage_path = None;

    while let Some(flag) = args.next() {
        let value = args.next().map(PathBuf::from);
        match (flag.as_str(), value) {
            ("--constraints", Some(v)) => constraints_path = Some(v),
            ("--output", Some(v)) => output_path = Some(v),
            ("--coverage", Some(v)) => coverage_path = Some(v),
            _ => return None,
        }
    }

    Some(CliArgs {
        demand_path,
        employees_path,
        constraints_path,
        output_path,
        coverage_path,
    })
}

fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let demand = DemandImporter::new().import(&args.demand_path)?;
    let employees = EmployeeImporter::new().import(&args.employees_path)?;

    let constraints = match &args.constraints_path {
        Some(path) => Some(SchedulingConstraints::from_json_file(path)?),
        None => None,
    };

    let orchestrator = ScheduleOrchestrator::new();
    let result = orchestrator.generate_schedule(
        demand,
        employees,
        constraints.as_ref(),
        args.output_path.as_deref(),
    )?;

    if let Some(path) = &args.coverage_path {
        write_coverage_report(path, &result.coverage)?;
        tracing::info!(path = %path.display(), "覆盖率报告已写出");
    }

    // 汇总摘要
    let total_slots = result.coverage.len();
    let understaffed = result.coverage.iter().filter(|c| c.understaff > 0.0).count();
    let total_understaff: f64 = result.coverage.iter().map(|c| c.understaff).sum();
    println!("槽总数: {}", total_slots);
    println!("欠员槽数: {}", understaffed);
    println!("欠员总量: {:.2}", total_understaff);
    println!("平均产能: {:.4}", result.avg_capacity);

    Ok(())
}

fn main() {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 决策支持系统", workforce_aps::APP_NAME);
    tracing::info!("系统版本: {}", workforce_aps::VERSION);
    tracing::info!("==================================================");

    let args = match parse_args() {
        Some(args) => args,
        None => {
            print_usage();
            process::exit(2);
        }
    };

    if let Err(err) = run(args) {
        tracing::error!("排班失败: {}", err);
        process::exit(1);
    }
}
