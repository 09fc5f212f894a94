//! 单部电梯仿真
//!
//! 随机（或按脚本）产生乘梯请求，逐回合调度直到全部送达，最后打印耗时统计。

use clap::Parser;
use elevator_sim::demand::{DemandGenerator, DemandScript, RandomDemand, ScriptedDemand};
use elevator_sim::error::SimError;
use elevator_sim::report::RunReport;
use elevator_sim::sim::{SimConfig, SimulationState, Simulator, Turn};
use elevator_sim::trace::{StatusPrinter, TraceLogger};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};

/// 命令行层的错误：仿真本身的错误之外，再加上文件读写与 JSON 编解码。
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Sim(#[from] SimError),

    #[error("cannot {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot encode {what} as JSON: {source}")]
    Encode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Parser)]
#[command(
    name = "elevator-sim",
    about = "单部电梯回合制仿真：生成请求、调度、统计行程耗时"
)]
struct Args {
    /// JSON 配置文件；下面的参数会覆盖其中的值
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    bottom: Option<i32>,

    #[arg(long)]
    top: Option<i32>,

    /// 轿厢起始楼层（默认底层）
    #[arg(long)]
    start: Option<i32>,

    /// 产生新请求的回合数
    #[arg(long)]
    generation_turns: Option<u64>,

    /// 每回合最多产生的请求数
    #[arg(long)]
    max_per_turn: Option<u32>,

    /// 请求者按“朝向轿厢”按钮的概率 [0, 1]
    #[arg(long)]
    toward_car_prob: Option<f64>,

    #[arg(long)]
    seed: Option<u64>,

    /// 按 JSON 需求脚本重放，而不是随机生成
    #[arg(long)]
    script: Option<PathBuf>,

    /// 最多运行到第几回合（不含）
    #[arg(long)]
    until_turn: Option<u64>,

    /// 每回合打印状态
    #[arg(long)]
    debug: bool,

    /// 把运行报告写成 JSON
    #[arg(long)]
    report_json: Option<PathBuf>,

    /// 把每回合快照写成 JSON
    #[arg(long)]
    trace_json: Option<PathBuf>,
}

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        action: "read",
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), CliError> {
    fs::write(path, contents).map_err(|source| CliError::Io {
        action: "write",
        path: path.to_path_buf(),
        source,
    })
}

fn load_config(args: &Args) -> Result<SimConfig, CliError> {
    let mut cfg: SimConfig = match &args.config {
        Some(path) => serde_json::from_str(&read_file(path)?).map_err(|e| {
            SimError::InvalidConfig(format!("parse {}: {e}", path.display()))
        })?,
        None => SimConfig::default(),
    };

    if let Some(v) = args.bottom {
        cfg.bottom_floor = v;
    }
    if let Some(v) = args.top {
        cfg.top_floor = v;
    }
    if let Some(v) = args.start {
        cfg.start_floor = Some(v);
    }
    if let Some(v) = args.generation_turns {
        cfg.generation_turns = v;
    }
    if let Some(v) = args.max_per_turn {
        cfg.max_requests_per_turn = v;
    }
    if let Some(v) = args.toward_car_prob {
        cfg.toward_car_prob = v;
    }
    if let Some(v) = args.seed {
        cfg.seed = v;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn run(args: Args) -> Result<(), CliError> {
    let cfg = load_config(&args)?;
    let state = SimulationState::from_config(&cfg)?;

    let demand: Box<dyn DemandGenerator> = match &args.script {
        Some(path) => {
            let script = DemandScript::from_json(&read_file(path)?)?;
            Box::new(ScriptedDemand::new(script, state.building())?)
        }
        None => Box::new(RandomDemand::from_config(&cfg)?),
    };
    info!(?cfg, scripted = args.script.is_some(), "配置");

    let printer = args.debug.then(StatusPrinter::stdout);
    let tracer = args.trace_json.as_ref().map(|_| TraceLogger::default());

    let mut sim = Simulator::new(state, demand, (printer, tracer));
    let outcome = match args.until_turn {
        Some(until) => sim.run_until(Turn(until))?,
        None => sim.run()?,
    };

    let (state, _, (_, tracer)) = sim.into_parts();
    let report = RunReport::new(&state, outcome, cfg.toward_car_prob);
    println!("{report}");

    if let Some(path) = &args.report_json {
        let raw = serde_json::to_string_pretty(&report)
            .map_err(|source| CliError::Encode {
                what: "report",
                source,
            })?;
        write_file(path, &raw)?;
    }
    if let (Some(path), Some(tracer)) = (&args.trace_json, tracer) {
        let raw = tracer
            .to_json()
            .map_err(|source| CliError::Encode {
                what: "trace",
                source,
            })?;
        write_file(path, &raw)?;
        info!(turns = tracer.turns.len(), path = %path.display(), "轨迹已写出");
    }
    Ok(())
}

fn main() {
    // 初始化 tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Args::parse()) {
        match &err {
            CliError::Sim(sim) => error!(%err, kind = ?sim.kind(), "仿真中止"),
            _ => error!(%err, "仿真中止"),
        }
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
