//! 电梯核心模块
//!
//! 楼层与楼宇、方向、请求、候梯队列，以及轿厢状态机与方向决策。

// 子模块声明
mod car;
mod direction;
mod dispatch;
mod floor;
mod id;
mod queue;
mod request;

// 重新导出公共接口
pub use car::Elevator;
pub use direction::{Direction, Heading};
pub use floor::{Building, Floor};
pub use id::RequestId;
pub use queue::RequestQueue;
pub use request::Request;
