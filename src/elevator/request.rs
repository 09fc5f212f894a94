//! 乘梯请求
//!
//! 一个人的出行意图：起点、终点、在起点按下的方向按钮、创建回合。创建后不可变。

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::direction::Heading;
use super::floor::Floor;
use super::id::RequestId;
use crate::error::SimError;
use crate::sim::Turn;

/// 乘梯请求
///
/// `declared` 是按下的按钮方向，不一定等于 `true_direction()`：
/// 有人会为了“先搭上再说”而按朝向轿厢的按钮。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RequestRecord")]
pub struct Request {
    id: RequestId,
    origin: Floor,
    destination: Floor,
    declared: Heading,
    created_at: Turn,
}

impl Request {
    pub fn new(
        id: RequestId,
        origin: Floor,
        destination: Floor,
        declared: Heading,
        created_at: Turn,
    ) -> Result<Self, SimError> {
        if origin == destination {
            return Err(SimError::ZeroLengthTrip {
                origin,
                destination,
            });
        }
        Ok(Self {
            id,
            origin,
            destination,
            declared,
            created_at,
        })
    }

    pub fn id(&self) -> RequestId {
        self.id
    }

    pub fn origin(&self) -> Floor {
        self.origin
    }

    pub fn destination(&self) -> Floor {
        self.destination
    }

    pub fn declared(&self) -> Heading {
        self.declared
    }

    pub fn created_at(&self) -> Turn {
        self.created_at
    }

    /// 起点到终点的几何方向
    pub fn true_direction(&self) -> Heading {
        Heading::between(self.origin, self.destination)
    }

    /// 登梯排序：按终点升序。仅用于给乘客列表排序，不是严格的优先级。
    pub fn cmp_boarding(&self, other: &Request) -> Ordering {
        self.destination.cmp(&other.destination)
    }
}

/// 反序列化的中间形态；经 `Request::new` 校验后才成为 `Request`
#[derive(Deserialize)]
struct RequestRecord {
    id: RequestId,
    origin: Floor,
    destination: Floor,
    declared: Heading,
    created_at: Turn,
}

impl TryFrom<RequestRecord> for Request {
    type Error = SimError;

    fn try_from(r: RequestRecord) -> Result<Self, Self::Error> {
        Request::new(r.id, r.origin, r.destination, r.declared, r.created_at)
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}->{} (pressed {}, t={})",
            self.id, self.origin, self.destination, self.declared, self.created_at.0
        )
    }
}
