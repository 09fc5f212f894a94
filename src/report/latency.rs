//! 行程耗时统计
//!
//! 对完成行程的回合数序列求 min/max/mean/median/mode，只用于汇报，不反馈给调度。

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencySummary {
    pub count: usize,
    pub min: u64,
    pub max: u64,
    pub mean: f64,
    pub median: f64,
    /// 出现次数最多的值；并列时取最先完成的那个
    pub mode: u64,
}

impl LatencySummary {
    /// 空序列返回 `None`
    pub fn from_latencies(latencies: &[u64]) -> Option<Self> {
        let count = latencies.len();
        let min = *latencies.iter().min()?;
        let max = *latencies.iter().max()?;

        let sum: u128 = latencies.iter().map(|&v| u128::from(v)).sum();
        let mean = sum as f64 / count as f64;

        let mut sorted = latencies.to_vec();
        sorted.sort_unstable();
        let mid = count / 2;
        let median = if count % 2 == 1 {
            sorted[mid] as f64
        } else {
            (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
        };

        Some(Self {
            count,
            min,
            max,
            mean,
            median,
            mode: mode_first_seen(latencies)?,
        })
    }
}

fn mode_first_seen(values: &[u64]) -> Option<u64> {
    // 值 -> (次数, 首次出现位置)
    let mut seen: HashMap<u64, (usize, usize)> = HashMap::new();
    for (idx, &v) in values.iter().enumerate() {
        seen.entry(v).or_insert((0, idx)).0 += 1;
    }
    seen.into_iter()
        .max_by(|(_, (ca, ia)), (_, (cb, ib))| ca.cmp(cb).then(ib.cmp(ia)))
        .map(|(v, _)| v)
}
