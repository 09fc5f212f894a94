//! 需求生成
//!
//! 核心之外的协作者：给定轿厢当前楼层与回合，产生零个或多个出行需求。
//! 需求在进入候梯队列时才分配 `RequestId` 与创建回合。

mod random;
mod script;

pub use random::RandomDemand;
pub use script::{DemandScript, ScriptedDemand, ScriptedRequest};

use crate::elevator::{Floor, Heading};
use crate::sim::Turn;

/// 一条尚未入队的出行需求
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Demand {
    pub origin: Floor,
    pub destination: Floor,
    pub declared: Heading,
}

/// 需求生成器
pub trait DemandGenerator {
    /// 本回合是否仍产生新需求。调用方在第一次得到 false 后不会再询问。
    fn is_active(&self, turn: Turn) -> bool;

    /// 产生本回合的新需求
    fn generate(&mut self, car_floor: Floor, turn: Turn) -> Vec<Demand>;
}

/// 从不产生需求（只排空已有请求时使用）
#[derive(Debug, Default)]
pub struct NoDemand;

impl DemandGenerator for NoDemand {
    fn is_active(&self, _turn: Turn) -> bool {
        false
    }

    fn generate(&mut self, _car_floor: Floor, _turn: Turn) -> Vec<Demand> {
        Vec::new()
    }
}

impl<G: DemandGenerator + ?Sized> DemandGenerator for Box<G> {
    fn is_active(&self, turn: Turn) -> bool {
        (**self).is_active(turn)
    }

    fn generate(&mut self, car_floor: Floor, turn: Turn) -> Vec<Demand> {
        (**self).generate(car_floor, turn)
    }
}
