//! 运行报告
//!
//! 汇总一次运行：总回合、生成/完成数量、按钮偏好比例与耗时统计。

mod latency;

pub use latency::LatencySummary;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sim::{RunOutcome, SimulationState};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub turns: u64,
    pub drained: bool,
    pub generated: u64,
    pub completed: usize,
    pub toward_car_prob: f64,
    pub summary: Option<LatencySummary>,
}

impl RunReport {
    pub fn new(state: &SimulationState, outcome: RunOutcome, toward_car_prob: f64) -> Self {
        let completions = state.elevator().completions();
        Self {
            turns: outcome.turns,
            drained: outcome.drained,
            generated: state.generated(),
            completed: completions.len(),
            toward_car_prob,
            summary: LatencySummary::from_latencies(completions),
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "done @ turn={}, drained={}, generated={}, completed={}",
            self.turns, self.drained, self.generated, self.completed
        )?;
        match &self.summary {
            Some(s) => {
                writeln!(f, "Min Turns: {}", s.min)?;
                writeln!(f, "Max Turns: {}", s.max)?;
                writeln!(f, "Mean Turns: {:.3}", s.mean)?;
                writeln!(f, "Median Turns: {}", s.median)?;
                writeln!(f, "Mode: {}", s.mode)?;
            }
            None => writeln!(f, "No completed rides")?,
        }
        write!(
            f,
            "{:3.1}% of requesters press toward the car",
            100.0 * self.toward_car_prob
        )
    }
}
