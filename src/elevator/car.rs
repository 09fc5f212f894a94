//! 电梯轿厢
//!
//! 维护当前楼层、下一步方向、车内乘客（按终点升序）以及完成行程的耗时统计。
//! 方向决策在 `dispatch.rs`。

use tracing::{debug, trace};

use super::direction::{Direction, Heading};
use super::floor::{Building, Floor};
use super::queue::RequestQueue;
use super::request::Request;
use crate::error::SimError;
use crate::sim::Turn;

#[derive(Debug, Clone)]
pub struct Elevator {
    pub(super) building: Building,
    pub(super) floor: Floor,
    pub(super) direction: Direction,
    pub(super) onboard: Vec<Request>,
    completions: Vec<u64>,
}

impl Elevator {
    /// 在 `start` 层创建一部空闲轿厢
    pub fn new(building: Building, start: Floor) -> Result<Self, SimError> {
        building.check(start)?;
        Ok(Self {
            building,
            floor: start,
            direction: Direction::None,
            onboard: Vec::new(),
            completions: Vec::new(),
        })
    }

    pub fn building(&self) -> &Building {
        &self.building
    }

    pub fn floor(&self) -> Floor {
        self.floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// 车内乘客（按终点升序）
    pub fn passengers(&self) -> &[Request] {
        &self.onboard
    }

    pub fn has_passengers(&self) -> bool {
        !self.onboard.is_empty()
    }

    /// 每个已完成行程的回合数（创建到下车）
    pub fn completions(&self) -> &[u64] {
        &self.completions
    }

    /// 让终点是当前楼层的乘客全部下车，记录耗时并返回这些请求。
    pub fn alight(&mut self, now: Turn) -> Vec<Request> {
        let floor = self.floor;
        let (leaving, staying): (Vec<_>, Vec<_>) = std::mem::take(&mut self.onboard)
            .into_iter()
            .partition(|p| p.destination() == floor);
        self.onboard = staying;

        for p in &leaving {
            let took = now.since(p.created_at());
            self.completions.push(took);
            debug!(request = %p.id(), %floor, turns = took, "乘客下车");
        }
        leaving
    }

    /// 接当前楼层按钮方向与电梯方向一致的请求；其余原样放回队列。
    ///
    /// 返回本次登梯人数。方向为 `None` 时没有人能上车。
    pub fn board(&mut self, queue: &mut RequestQueue) -> usize {
        let waiting = queue.take_all(self.floor);
        if waiting.is_empty() {
            return 0;
        }

        let direction = self.direction;
        let (boarding, left_behind): (Vec<_>, Vec<_>) = waiting
            .into_iter()
            .partition(|p| Direction::from(p.declared()) == direction);

        let boarded = boarding.len();
        if boarded > 0 {
            for p in &boarding {
                debug!(request = %p.id(), floor = %self.floor, %direction, "乘客上车");
            }
            self.onboard.extend(boarding);
            self.onboard.sort_by(Request::cmp_boarding);
        }
        if !left_behind.is_empty() {
            trace!(floor = %self.floor, left = left_behind.len(), "方向不符，留在原层");
        }
        queue.put_back(self.floor, left_behind);
        boarded
    }

    /// 向 `heading` 移动一层；已到顶/底时报 `OutOfBounds`。
    pub fn move_one(&mut self, heading: Heading) -> Result<Floor, SimError> {
        let next = match heading {
            Heading::Up if self.floor == self.building.top() => {
                return Err(SimError::OutOfBounds {
                    floor: self.floor,
                    heading,
                    limit: "top",
                });
            }
            Heading::Down if self.floor == self.building.bottom() => {
                return Err(SimError::OutOfBounds {
                    floor: self.floor,
                    heading,
                    limit: "bottom",
                });
            }
            Heading::Up => self.floor.above(),
            Heading::Down => self.floor.below(),
        };
        self.floor = next;
        Ok(next)
    }

    /// 按当前方向移动；方向为 `None` 时原地不动，返回 `None`。
    pub fn advance(&mut self) -> Result<Option<Floor>, SimError> {
        match self.direction.heading() {
            Some(h) => self.move_one(h).map(Some),
            None => Ok(None),
        }
    }
}
