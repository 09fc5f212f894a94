//! 方向决策
//!
//! 每回合调用一次，按车内是否有乘客分两种情形：
//! - 空车：先根据位置给出一个试探方向，再看候梯需求选目标楼层。
//! - 有乘客：保持能让至少一位乘客更接近终点的方向。

use tracing::debug;

use super::car::Elevator;
use super::direction::{Direction, Heading};
use super::floor::Floor;
use super::queue::RequestQueue;
use super::request::Request;
use crate::error::SimError;

impl Elevator {
    /// 决定下一步方向并写回 `self.direction`
    pub fn decide(&mut self, queue: &RequestQueue) -> Result<Direction, SimError> {
        let decided = if self.onboard.is_empty() {
            self.decide_empty(queue)?
        } else {
            self.decide_loaded()
        };
        self.direction = decided;
        Ok(decided)
    }

    /// 空车时的初始方向猜测：在两端就掉头，否则保持原方向；没有方向时默认向下。
    pub fn initial_guess(&self) -> Direction {
        if self.floor == self.building.top() {
            Direction::Down
        } else if self.floor == self.building.bottom() {
            Direction::Up
        } else if self.direction.is_none() {
            Direction::Down
        } else {
            self.direction
        }
    }

    /// 请求是否“顺路”：按钮方向等于 `toward`，且所在楼层严格位于该方向一侧。
    fn on_the_way(&self, toward: Direction, req: &Request) -> bool {
        toward.points_toward(self.floor, req.origin()) && Direction::from(req.declared()) == toward
    }

    fn decide_empty(&self, queue: &RequestQueue) -> Result<Direction, SimError> {
        let tentative = self.initial_guess();

        let on_the_way = candidate_floors(queue, |r| self.on_the_way(tentative, r));
        let candidates = if on_the_way.is_empty() {
            candidate_floors(queue, |r| !self.on_the_way(tentative, r))
        } else {
            on_the_way
        };

        // 有符号差而非绝对值：同距离时偏向上行，避免在中间两层之间来回摆
        let Some(target) = candidates
            .into_iter()
            .min_by_key(|f| f.offset_from(self.floor))
        else {
            debug!(floor = %self.floor, "无候梯需求，停靠");
            return Ok(Direction::None);
        };

        let decided: Direction = if target == self.floor && self.building.is_extreme(target) {
            Heading::opposite_at_extreme(&self.building, target)?.into()
        } else if target < self.floor {
            Direction::Down
        } else {
            Direction::Up
        };
        debug!(floor = %self.floor, %tentative, %target, %decided, "空车选定目标楼层");
        Ok(decided)
    }

    fn decide_loaded(&self) -> Direction {
        let mut direction = self.direction;
        if direction.is_none() {
            direction = self.onboard[0].true_direction().into();
        }

        let anyone_wants = self
            .onboard
            .iter()
            .any(|p| Direction::from(p.true_direction()) == direction);
        if !anyone_wants {
            direction = match direction {
                Direction::Up => Direction::Down,
                _ => Direction::Up,
            };
            debug!(floor = %self.floor, %direction, "车内无人同向，掉头");
        }
        direction
    }
}

/// 至少有一个请求满足 `pick` 的楼层
fn candidate_floors<F>(queue: &RequestQueue, pick: F) -> Vec<Floor>
where
    F: Fn(&Request) -> bool,
{
    queue
        .iter()
        .filter(|(_, reqs)| reqs.iter().any(&pick))
        .map(|(floor, _)| floor)
        .collect()
}
