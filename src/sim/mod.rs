//! 仿真核心模块
//!
//! 此模块包含回合制仿真的核心组件：回合、配置、仿真状态、驱动器与诊断钩子。

// 子模块声明
mod config;
mod diagnostics;
mod simulator;
mod state;
mod time;

// 重新导出公共接口
pub use config::{
    DEFAULT_BOTTOM_FLOOR, DEFAULT_GENERATION_TURNS, DEFAULT_MAX_REQUESTS_PER_TURN, DEFAULT_SEED,
    DEFAULT_TOP_FLOOR, SimConfig,
};
pub use diagnostics::{Diagnostics, NoDiagnostics, TurnPhase};
pub use simulator::{RunOutcome, Simulator};
pub use state::{SimulationState, TurnSummary};
pub use time::Turn;
