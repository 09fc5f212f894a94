//! 仿真驱动
//!
//! 反复调用 `SimulationState::step`，直到需求生成结束且所有请求都已送达。

use super::diagnostics::Diagnostics;
use super::state::SimulationState;
use super::time::Turn;
use crate::demand::DemandGenerator;
use crate::error::SimError;
use tracing::{debug, info};

/// 一次运行的结局
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// 已执行的回合数
    pub turns: u64,
    /// 是否已全部排空（到达 `until` 提前停下时为 false）
    pub drained: bool,
}

/// 回合驱动器：持有仿真状态、需求生成器与诊断观察者。
pub struct Simulator<G, D> {
    state: SimulationState,
    demand: G,
    diag: D,
}

impl<G: DemandGenerator, D: Diagnostics> Simulator<G, D> {
    pub fn new(state: SimulationState, demand: G, diag: D) -> Self {
        Self {
            state,
            demand,
            diag,
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn diagnostics(&self) -> &D {
        &self.diag
    }

    pub fn into_parts(self) -> (SimulationState, G, D) {
        (self.state, self.demand, self.diag)
    }

    /// 运行直到排空或到达 `until`（不执行 `until` 这一回合）。
    pub fn run_until(&mut self, until: Turn) -> Result<RunOutcome, SimError> {
        let start = self.state.turn();
        while self.state.has_work() && self.state.turn() < until {
            let summary = self.state.step(&mut self.demand, &mut self.diag)?;
            if !summary.alighted.is_empty() || summary.boarded > 0 {
                debug!(
                    turn = summary.turn.0,
                    alighted = summary.alighted.len(),
                    boarded = summary.boarded,
                    generated = summary.generated,
                    direction = %summary.direction,
                    "回合有乘降"
                );
            }
        }
        Ok(RunOutcome {
            turns: self.state.turn().since(start),
            drained: self.state.is_finished(),
        })
    }

    /// 运行直到需求生成结束并且所有请求都已完成。
    #[tracing::instrument(skip(self))]
    pub fn run(&mut self) -> Result<RunOutcome, SimError> {
        info!(
            floor = %self.state.elevator().floor(),
            bottom = %self.state.building().bottom(),
            top = %self.state.building().top(),
            "▶️  开始运行仿真"
        );
        let outcome = self.run_until(Turn(u64::MAX))?;
        info!(
            turns = outcome.turns,
            completed = self.state.elevator().completions().len(),
            generated = self.state.generated(),
            "✅ 仿真完成"
        );
        Ok(outcome)
    }
}
