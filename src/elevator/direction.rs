//! 方向
//!
//! `Direction` 是电梯的三态方向（含“未决定”），`Heading` 只包含真正能移动的两个方向。
//! 移动操作只接受 `Heading`，所以“按 None 方向移动”在类型层面无法表达。

use std::fmt;

use serde::{Deserialize, Serialize};

use super::floor::{Building, Floor};
use crate::error::SimError;

/// 可以移动的方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heading {
    Up,
    Down,
}

impl Heading {
    pub fn reversed(self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
        }
    }

    /// 在楼宇两端掉头：顶层只能向下，底层只能向上；其他楼层报错。
    pub fn opposite_at_extreme(building: &Building, floor: Floor) -> Result<Heading, SimError> {
        if floor == building.top() {
            Ok(Heading::Down)
        } else if floor == building.bottom() {
            Ok(Heading::Up)
        } else {
            Err(SimError::NotAnExtreme { floor })
        }
    }

    /// 从 `from` 去 `to` 的几何方向（`to == from` 时视为向下）
    pub fn between(from: Floor, to: Floor) -> Heading {
        if to > from { Heading::Up } else { Heading::Down }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heading::Up => f.write_str("up"),
            Heading::Down => f.write_str("down"),
        }
    }
}

/// 电梯的下一步方向；`None` 表示停靠/未决定。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    #[default]
    None,
}

impl Direction {
    /// 若是可移动方向则返回对应的 `Heading`
    pub fn heading(self) -> Option<Heading> {
        match self {
            Direction::Up => Some(Heading::Up),
            Direction::Down => Some(Heading::Down),
            Direction::None => None,
        }
    }

    pub fn is_none(self) -> bool {
        matches!(self, Direction::None)
    }

    /// 楼层 `floor` 是否严格位于 `current` 的本方向一侧；`None` 方向一律为 false。
    pub fn points_toward(self, current: Floor, floor: Floor) -> bool {
        match self {
            Direction::Up => floor > current,
            Direction::Down => floor < current,
            Direction::None => false,
        }
    }
}

impl From<Heading> for Direction {
    fn from(h: Heading) -> Self {
        match h {
            Heading::Up => Direction::Up,
            Heading::Down => Direction::Down,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => f.write_str("up"),
            Direction::Down => f.write_str("down"),
            Direction::None => f.write_str("none"),
        }
    }
}
