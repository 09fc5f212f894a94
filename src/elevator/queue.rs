//! 候梯队列
//!
//! 楼层 -> 该层按到达顺序排列的请求。空序列与“没有该楼层”等价：
//! 取空后不会留下空条目，所以 `has_any` 只需看是否还有条目。

use std::collections::BTreeMap;

use super::floor::Floor;
use super::request::Request;

#[derive(Debug, Default, Clone)]
pub struct RequestQueue {
    floors: BTreeMap<Floor, Vec<Request>>,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加到 `floor` 的队尾
    pub fn enqueue(&mut self, floor: Floor, req: Request) {
        self.floors.entry(floor).or_default().push(req);
    }

    /// 取走 `floor` 上的全部请求（没有则返回空），不留条目。
    pub fn take_all(&mut self, floor: Floor) -> Vec<Request> {
        self.floors.remove(&floor).unwrap_or_default()
    }

    /// 把没上车的请求放回 `floor`，排在该层现有请求之前，保持相对顺序。
    pub fn put_back(&mut self, floor: Floor, mut left_behind: Vec<Request>) {
        if left_behind.is_empty() {
            return;
        }
        if let Some(existing) = self.floors.remove(&floor) {
            left_behind.extend(existing);
        }
        self.floors.insert(floor, left_behind);
    }

    pub fn has_any(&self) -> bool {
        !self.floors.is_empty()
    }

    /// 等候中的请求总数
    pub fn len(&self) -> usize {
        self.floors.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_any()
    }

    pub fn waiting_at(&self, floor: Floor) -> &[Request] {
        self.floors.get(&floor).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 按楼层升序遍历非空楼层
    pub fn iter(&self) -> impl Iterator<Item = (Floor, &[Request])> {
        self.floors.iter().map(|(f, v)| (*f, v.as_slice()))
    }
}
