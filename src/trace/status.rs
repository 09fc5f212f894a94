//! 每回合状态打印

use std::io::{self, Write};

use tracing::warn;

use crate::sim::{Diagnostics, SimulationState, TurnPhase};

/// 把每回合开始/结束时的状态写到 `out`（默认 stdout）
pub struct StatusPrinter<W: Write> {
    out: W,
}

impl StatusPrinter<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> StatusPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn dump(&mut self, phase: TurnPhase, state: &SimulationState) -> io::Result<()> {
        let car = state.elevator();
        writeln!(
            self.out,
            "========{} of Turn {}========",
            phase.label(),
            state.turn().0
        )?;
        writeln!(
            self.out,
            "Current Floor: {}, Next Move: {}",
            car.floor(),
            car.direction()
        )?;
        let onboard: Vec<String> = car.passengers().iter().map(ToString::to_string).collect();
        writeln!(self.out, "Passengers: [{}]", onboard.join(", "))?;
        writeln!(self.out, "Request Queue:")?;
        for (floor, reqs) in state.queue().iter() {
            let waiting: Vec<String> = reqs.iter().map(ToString::to_string).collect();
            writeln!(self.out, "  {floor}: [{}]", waiting.join(", "))?;
        }
        Ok(())
    }
}

impl<W: Write> Diagnostics for StatusPrinter<W> {
    fn on_turn(&mut self, phase: TurnPhase, state: &SimulationState) {
        if let Err(err) = self.dump(phase, state) {
            warn!(%err, "写状态失败");
        }
    }
}
