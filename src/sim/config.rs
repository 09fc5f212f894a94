//! 仿真配置
//!
//! 可从 JSON 读取；缺省字段取默认值。命令行参数会覆盖这里的值。

use serde::{Deserialize, Serialize};

use crate::elevator::{Building, Floor};
use crate::error::SimError;

pub const DEFAULT_BOTTOM_FLOOR: i32 = 1;
pub const DEFAULT_TOP_FLOOR: i32 = 10;
pub const DEFAULT_GENERATION_TURNS: u64 = 1000;
pub const DEFAULT_MAX_REQUESTS_PER_TURN: u32 = 3;
pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub bottom_floor: i32,
    pub top_floor: i32,
    /// 轿厢起始楼层，缺省为底层
    pub start_floor: Option<i32>,
    /// 新需求只在 `turn < generation_turns` 的回合产生
    pub generation_turns: u64,
    pub max_requests_per_turn: u32,
    /// 请求者按“朝向轿厢”的按钮（而不是真实出行方向）的概率
    pub toward_car_prob: f64,
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            bottom_floor: DEFAULT_BOTTOM_FLOOR,
            top_floor: DEFAULT_TOP_FLOOR,
            start_floor: None,
            generation_turns: DEFAULT_GENERATION_TURNS,
            max_requests_per_turn: DEFAULT_MAX_REQUESTS_PER_TURN,
            toward_car_prob: 1.0,
            seed: DEFAULT_SEED,
        }
    }
}

impl SimConfig {
    pub fn building(&self) -> Result<Building, SimError> {
        Building::new(Floor(self.bottom_floor), Floor(self.top_floor))
    }

    pub fn start(&self) -> Floor {
        Floor(self.start_floor.unwrap_or(self.bottom_floor))
    }

    /// 校验并返回楼宇
    pub fn validate(&self) -> Result<Building, SimError> {
        let building = self.building()?;
        building.check(self.start())?;
        if !(0.0..=1.0).contains(&self.toward_car_prob) {
            return Err(SimError::InvalidConfig(format!(
                "toward_car_prob must be within [0, 1], got {}",
                self.toward_car_prob
            )));
        }
        Ok(building)
    }
}
