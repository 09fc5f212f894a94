//! 仿真回合
//!
//! 离散时间单位：一回合电梯最多移动一层。

use serde::{Deserialize, Serialize};

/// 回合编号（从 0 开始）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Turn(pub u64);

impl Turn {
    pub const ZERO: Turn = Turn(0);

    pub fn next(self) -> Turn {
        Turn(self.0.saturating_add(1))
    }

    /// 从 `earlier` 到现在经过的回合数
    pub fn since(self, earlier: Turn) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}
