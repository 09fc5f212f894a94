//! 诊断钩子
//!
//! 每回合开始和结束时回调，只读状态，不影响调度。

use super::state::SimulationState;

/// 回调发生在回合的哪个位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// 下车/上车之前
    Start,
    /// 第二次上车之后、移动之前
    End,
}

impl TurnPhase {
    pub fn label(self) -> &'static str {
        match self {
            TurnPhase::Start => "Start",
            TurnPhase::End => "End",
        }
    }
}

/// 诊断观察者：由宿主程序实现（状态打印、轨迹记录等）。
pub trait Diagnostics {
    fn on_turn(&mut self, _phase: TurnPhase, _state: &SimulationState) {}
}

/// 什么都不做
#[derive(Debug, Default)]
pub struct NoDiagnostics;

impl Diagnostics for NoDiagnostics {}

/// 依次转发给多个观察者
impl<A: Diagnostics, B: Diagnostics> Diagnostics for (A, B) {
    fn on_turn(&mut self, phase: TurnPhase, state: &SimulationState) {
        self.0.on_turn(phase, state);
        self.1.on_turn(phase, state);
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for &mut D {
    fn on_turn(&mut self, phase: TurnPhase, state: &SimulationState) {
        (**self).on_turn(phase, state);
    }
}

impl<D: Diagnostics> Diagnostics for Option<D> {
    fn on_turn(&mut self, phase: TurnPhase, state: &SimulationState) {
        if let Some(d) = self {
            d.on_turn(phase, state);
        }
    }
}
