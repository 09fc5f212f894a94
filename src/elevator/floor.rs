//! 楼层与楼宇
//!
//! 定义楼层编号以及楼宇的上下边界（闭区间）。

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// 楼层编号
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Floor(pub i32);

impl Floor {
    /// 带符号的楼层差 `self - other`，用 i64 计算，整个 i32 范围都不会溢出
    pub fn offset_from(self, other: Floor) -> i64 {
        i64::from(self.0) - i64::from(other.0)
    }

    pub fn above(self) -> Floor {
        Floor(self.0 + 1)
    }

    pub fn below(self) -> Floor {
        Floor(self.0 - 1)
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 楼宇：楼层范围 [bottom, top]，两端都包含。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Building {
    bottom: Floor,
    top: Floor,
}

impl Building {
    /// 构造楼宇；要求 top > bottom。
    pub fn new(bottom: Floor, top: Floor) -> Result<Self, SimError> {
        if top <= bottom {
            return Err(SimError::InvalidBuilding { bottom, top });
        }
        Ok(Self { bottom, top })
    }

    pub fn bottom(&self) -> Floor {
        self.bottom
    }

    pub fn top(&self) -> Floor {
        self.top
    }

    pub fn contains(&self, floor: Floor) -> bool {
        self.bottom <= floor && floor <= self.top
    }

    /// 是否位于顶层或底层
    pub fn is_extreme(&self, floor: Floor) -> bool {
        floor == self.top || floor == self.bottom
    }

    /// 楼层数
    pub fn floors(&self) -> usize {
        usize::try_from(self.top.offset_from(self.bottom) + 1).unwrap_or(usize::MAX)
    }

    pub(crate) fn check(&self, floor: Floor) -> Result<Floor, SimError> {
        if self.contains(floor) {
            Ok(floor)
        } else {
            Err(SimError::FloorOutOfRange {
                floor,
                bottom: self.bottom,
                top: self.top,
            })
        }
    }
}
