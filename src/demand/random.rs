//! 随机需求
//!
//! 每回合抽取 [0, max_per_turn] 个需求，起点终点在楼宇内均匀抽取且互不相同。
//! 按钮方向：以 `toward_car_prob` 的概率按“朝向轿厢”的方向，否则按真实方向。
//! 使用 `ChaCha8Rng`，同一种子得到完全相同的需求序列。

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{Demand, DemandGenerator};
use crate::elevator::{Building, Floor, Heading};
use crate::error::SimError;
use crate::sim::{SimConfig, Turn};

#[derive(Debug, Clone)]
pub struct RandomDemand {
    building: Building,
    generation_turns: u64,
    max_per_turn: u32,
    toward_car_prob: f64,
    rng: ChaCha8Rng,
}

impl RandomDemand {
    pub fn new(
        building: Building,
        generation_turns: u64,
        max_per_turn: u32,
        toward_car_prob: f64,
        seed: u64,
    ) -> Self {
        Self {
            building,
            generation_turns,
            max_per_turn,
            toward_car_prob: toward_car_prob.clamp(0.0, 1.0),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_config(cfg: &SimConfig) -> Result<Self, SimError> {
        let building = cfg.validate()?;
        Ok(Self::new(
            building,
            cfg.generation_turns,
            cfg.max_requests_per_turn,
            cfg.toward_car_prob,
            cfg.seed,
        ))
    }

    fn draw_floor(&mut self) -> Floor {
        Floor(
            self.rng
                .gen_range(self.building.bottom().0..=self.building.top().0),
        )
    }

    fn draw_one(&mut self, car_floor: Floor) -> Demand {
        let (origin, destination) = loop {
            let origin = self.draw_floor();
            let destination = self.draw_floor();
            if origin != destination {
                break (origin, destination);
            }
        };

        let declared = if self.rng.gen_bool(self.toward_car_prob) {
            // 朝轿厢的方向：轿厢在上面就按下，否则按上
            if car_floor > origin {
                Heading::Down
            } else {
                Heading::Up
            }
        } else {
            Heading::between(origin, destination)
        };

        Demand {
            origin,
            destination,
            declared,
        }
    }
}

impl DemandGenerator for RandomDemand {
    fn is_active(&self, turn: Turn) -> bool {
        turn.0 < self.generation_turns
    }

    fn generate(&mut self, car_floor: Floor, _turn: Turn) -> Vec<Demand> {
        let n = self.rng.gen_range(0..=self.max_per_turn);
        (0..n).map(|_| self.draw_one(car_floor)).collect()
    }
}
