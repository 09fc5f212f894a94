mod demand;
mod elevator;
mod queue;

use crate::elevator::{Building, Floor, Heading, Request, RequestId};
use crate::sim::Turn;

pub(crate) fn building() -> Building {
    Building::new(Floor(1), Floor(10)).expect("building")
}

pub(crate) fn req(id: u64, origin: i32, destination: i32, declared: Heading) -> Request {
    Request::new(
        RequestId(id),
        Floor(origin),
        Floor(destination),
        declared,
        Turn::ZERO,
    )
    .expect("request")
}
