//! 仿真状态与单回合推进
//!
//! `SimulationState` 把回合计数、轿厢和候梯队列放在一起显式传递，
//! `step` 按固定顺序推进一回合：
//! 下车 → 上车 → （生成新需求）→ 决定方向 → 再次上车 → 移动。

use tracing::{debug, trace};

use super::config::SimConfig;
use super::diagnostics::{Diagnostics, TurnPhase};
use super::time::Turn;
use crate::demand::{Demand, DemandGenerator};
use crate::elevator::{Building, Direction, Elevator, Floor, Request, RequestId, RequestQueue};
use crate::error::SimError;

/// 单回合发生了什么
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnSummary {
    pub turn: Turn,
    pub alighted: Vec<RequestId>,
    pub boarded: usize,
    pub generated: usize,
    pub direction: Direction,
    /// 移动后的楼层；停靠时为 `None`
    pub moved_to: Option<Floor>,
}

#[derive(Debug, Clone)]
pub struct SimulationState {
    building: Building,
    elevator: Elevator,
    queue: RequestQueue,
    turn: Turn,
    generating: bool,
    next_request_id: u64,
    generated: u64,
}

impl SimulationState {
    /// 空楼宇，轿厢停在 `start`，回合 0，需求生成处于开启状态。
    pub fn new(building: Building, start: Floor) -> Result<Self, SimError> {
        Ok(Self {
            building,
            elevator: Elevator::new(building, start)?,
            queue: RequestQueue::new(),
            turn: Turn::ZERO,
            generating: true,
            next_request_id: 0,
            generated: 0,
        })
    }

    pub fn from_config(cfg: &SimConfig) -> Result<Self, SimError> {
        let building = cfg.validate()?;
        Self::new(building, cfg.start())
    }

    pub fn building(&self) -> &Building {
        &self.building
    }

    pub fn elevator(&self) -> &Elevator {
        &self.elevator
    }

    pub fn queue(&self) -> &RequestQueue {
        &self.queue
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// 永久关闭需求生成
    pub fn stop_generation(&mut self) {
        self.generating = false;
    }

    /// 已入队的请求总数
    pub fn generated(&self) -> u64 {
        self.generated
    }

    /// 把一条需求变成请求放进起点楼层的队列，创建回合取当前回合。
    pub fn submit(&mut self, demand: Demand) -> Result<RequestId, SimError> {
        let origin = self.building.check(demand.origin)?;
        let destination = self.building.check(demand.destination)?;
        let id = RequestId(self.next_request_id);
        let req = Request::new(id, origin, destination, demand.declared, self.turn)?;
        self.next_request_id = self.next_request_id.wrapping_add(1);
        self.generated = self.generated.saturating_add(1);
        trace!(request = %req, "请求入队");
        self.queue.enqueue(origin, req);
        Ok(id)
    }

    /// 还有事可做：仍在生成需求，或车内有人，或有人候梯。
    pub fn has_work(&self) -> bool {
        self.generating || self.elevator.has_passengers() || self.queue.has_any()
    }

    pub fn is_finished(&self) -> bool {
        !self.has_work()
    }

    /// 推进一回合。出错时状态停在失败的阶段，回合计数不再前进。
    pub fn step(
        &mut self,
        demand: &mut dyn DemandGenerator,
        diag: &mut dyn Diagnostics,
    ) -> Result<TurnSummary, SimError> {
        let now = self.turn;
        diag.on_turn(TurnPhase::Start, self);

        let alighted = self
            .elevator
            .alight(now)
            .iter()
            .map(Request::id)
            .collect::<Vec<_>>();
        let mut boarded = self.elevator.board(&mut self.queue);

        let mut generated = 0;
        if self.generating {
            self.generating = demand.is_active(now);
            if self.generating {
                for d in demand.generate(self.elevator.floor(), now) {
                    self.submit(d)?;
                    generated += 1;
                }
            } else {
                debug!(turn = now.0, "需求生成结束");
            }
        }

        let direction = self.elevator.decide(&self.queue)?;
        boarded += self.elevator.board(&mut self.queue);
        diag.on_turn(TurnPhase::End, self);

        let moved_to = self.elevator.advance()?;
        trace!(
            turn = now.0,
            floor = %self.elevator.floor(),
            %direction,
            onboard = self.elevator.passengers().len(),
            waiting = self.queue.len(),
            "回合结束"
        );
        self.turn = now.next();

        Ok(TurnSummary {
            turn: now,
            alighted,
            boarded,
            generated,
            direction,
            moved_to,
        })
    }
}
