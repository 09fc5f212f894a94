//! 轨迹快照
//!
//! 每回合末记录一次轿厢与候梯队列，仿真结束后整体写成 JSON。

use serde::{Deserialize, Serialize};

use crate::elevator::{Direction, Request};
use crate::sim::{Diagnostics, SimulationState, TurnPhase};

/// 某一层的候梯情况
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitingFloor {
    pub floor: i32,
    pub requests: Vec<Request>,
}

/// 回合末（移动之前）的状态快照
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnSnapshot {
    pub turn: u64,
    pub floor: i32,
    pub direction: Direction,
    pub onboard: Vec<Request>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub waiting: Vec<WaitingFloor>,
    pub completed: usize,
}

impl TurnSnapshot {
    pub fn capture(state: &SimulationState) -> Self {
        let car = state.elevator();
        Self {
            turn: state.turn().0,
            floor: car.floor().0,
            direction: car.direction(),
            onboard: car.passengers().to_vec(),
            waiting: state
                .queue()
                .iter()
                .map(|(floor, reqs)| WaitingFloor {
                    floor: floor.0,
                    requests: reqs.to_vec(),
                })
                .collect(),
            completed: car.completions().len(),
        }
    }
}

/// 一个简单的快照收集器（存内存，仿真结束写 JSON 文件）
#[derive(Debug, Default)]
pub struct TraceLogger {
    pub turns: Vec<TurnSnapshot>,
}

impl TraceLogger {
    pub fn push(&mut self, snap: TurnSnapshot) {
        self.turns.push(snap);
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.turns)
    }
}

impl Diagnostics for TraceLogger {
    fn on_turn(&mut self, phase: TurnPhase, state: &SimulationState) {
        if phase == TurnPhase::End {
            self.push(TurnSnapshot::capture(state));
        }
    }
}
