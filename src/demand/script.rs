//! 脚本化需求
//!
//! 从 JSON 读取固定的需求序列，用于可重放的场景：
//!
//! ```json
//! {
//!     "schema_version": 1,
//!     "requests": [
//!         { "turn": 0, "origin": 5, "destination": 8, "declared": "up" },
//!         { "turn": 3, "origin": 9, "destination": 2 }
//!     ]
//! }
//! ```
//!
//! 缺省 `declared` 时取真实出行方向。最后一个脚本回合过后生成即停止。

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::{Demand, DemandGenerator};
use crate::elevator::{Building, Floor, Heading};
use crate::error::SimError;
use crate::sim::Turn;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandScript {
    pub schema_version: u32,
    #[serde(default)]
    pub requests: Vec<ScriptedRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptedRequest {
    pub turn: u64,
    pub origin: i32,
    pub destination: i32,
    #[serde(default)]
    pub declared: Option<Heading>,
}

impl DemandScript {
    pub fn from_json(raw: &str) -> Result<Self, SimError> {
        serde_json::from_str(raw).map_err(|e| SimError::InvalidScript(e.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct ScriptedDemand {
    /// 按回合排序（同回合保持脚本顺序）
    pending: VecDeque<(Turn, Demand)>,
    last_turn: Option<Turn>,
}

impl ScriptedDemand {
    /// 校验脚本中的楼层并按回合排序
    pub fn new(script: DemandScript, building: &Building) -> Result<Self, SimError> {
        let mut pending = Vec::with_capacity(script.requests.len());
        for r in script.requests {
            let origin = building.check(Floor(r.origin))?;
            let destination = building.check(Floor(r.destination))?;
            if origin == destination {
                return Err(SimError::ZeroLengthTrip {
                    origin,
                    destination,
                });
            }
            let declared = r
                .declared
                .unwrap_or_else(|| Heading::between(origin, destination));
            pending.push((
                Turn(r.turn),
                Demand {
                    origin,
                    destination,
                    declared,
                },
            ));
        }
        pending.sort_by_key(|(t, _)| *t);
        let last_turn = pending.last().map(|(t, _)| *t);
        Ok(Self {
            pending: pending.into(),
            last_turn,
        })
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl DemandGenerator for ScriptedDemand {
    fn is_active(&self, turn: Turn) -> bool {
        self.last_turn.is_some_and(|last| turn <= last)
    }

    fn generate(&mut self, _car_floor: Floor, turn: Turn) -> Vec<Demand> {
        let mut out = Vec::new();
        while let Some((at, _)) = self.pending.front() {
            if *at > turn {
                break;
            }
            if let Some((_, d)) = self.pending.pop_front() {
                out.push(d);
            }
        }
        out
    }
}
