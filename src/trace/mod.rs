//! 回合诊断输出
//!
//! - `StatusPrinter`：人读的每回合状态（楼层、方向、车内乘客、候梯队列），由 `--debug` 打开
//! - `TraceLogger`：结构化的每回合快照，仿真结束后写成 JSON 供离线回放
//!
//! 两者都只读状态，不影响调度。

mod status;
mod types;

pub use status::StatusPrinter;
pub use types::{TraceLogger, TurnSnapshot, WaitingFloor};
