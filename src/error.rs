//! 错误类型
//!
//! 仿真核心的所有失败都收敛到 `SimError`，按 `ErrorKind` 分成两类：
//! 参数非法（调用方/配置问题）与越界移动（方向决策与移动步骤之间的契约被破坏）。

use thiserror::Error;

use crate::elevator::{Floor, Heading};

/// 错误大类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    OutOfBounds,
}

/// 仿真错误。任何一个都会让本次仿真中止。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("top floor {top} must be above bottom floor {bottom}")]
    InvalidBuilding { bottom: Floor, top: Floor },

    #[error("can only turn around at an extreme floor, got {floor}")]
    NotAnExtreme { floor: Floor },

    #[error("request {origin}->{destination} does not go anywhere")]
    ZeroLengthTrip { origin: Floor, destination: Floor },

    #[error("floor {floor} is outside the building [{bottom}, {top}]")]
    FloorOutOfRange {
        floor: Floor,
        bottom: Floor,
        top: Floor,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid demand script: {0}")]
    InvalidScript(String),

    #[error("cannot move {heading} from floor {floor}: already at the {limit} floor")]
    OutOfBounds {
        floor: Floor,
        heading: Heading,
        limit: &'static str,
    },
}

impl SimError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SimError::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            _ => ErrorKind::InvalidArgument,
        }
    }
}
