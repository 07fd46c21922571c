//! 叫车仿真
//!
//! 读取事件文件，运行到事件耗尽，打印统计报告。

use clap::Parser;
use ride_sim::ride::{EventFormat, load_events};
use ride_sim::sim::Simulation;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "ride-sim", about = "叫车服务离散事件仿真")]
struct Args {
    /// 事件文件路径
    #[arg(long)]
    events: PathBuf,

    /// 事件文件格式；默认按扩展名推断（.json 为 json，其余为 text）
    #[arg(long, value_enum)]
    format: Option<EventFormat>,

    /// 以 JSON 输出报告
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    // 初始化 tracing；日志写 stderr，stdout 只留报告
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();
    let format = args
        .format
        .unwrap_or_else(|| EventFormat::from_path(&args.events));

    let events = match load_events(&args.events, format) {
        Ok(events) => events,
        Err(e) => {
            eprintln!("failed to load {}: {e}", args.events.display());
            return ExitCode::FAILURE;
        }
    };

    let mut sim = Simulation::new();
    let report = match sim.run(events) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("simulation failed after {} events: {e}", sim.processed());
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        match serde_json::to_string(&report) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("failed to encode report: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("rider_wait_time={}", report.rider_wait_time);
        println!("driver_total_distance={}", report.driver_total_distance);
        println!("driver_ride_distance={}", report.driver_ride_distance);
    }
    ExitCode::SUCCESS
}
