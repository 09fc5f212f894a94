use super::{building, req};
use crate::elevator::{Direction, Elevator, Floor, Heading, RequestQueue};
use crate::error::{ErrorKind, SimError};
use crate::sim::Turn;

fn car_at(floor: i32, direction: Direction) -> Elevator {
    let mut car = Elevator::new(building(), Floor(floor)).expect("car");
    car.set_direction(direction);
    car
}

fn onboard_ids(car: &Elevator) -> Vec<u64> {
    car.passengers().iter().map(|r| r.id().0).collect()
}

#[test]
fn new_rejects_start_outside_building() {
    let err = Elevator::new(building(), Floor(11)).expect_err("above top");
    assert!(matches!(err, SimError::FloorOutOfRange { .. }));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let car = Elevator::new(building(), Floor(1)).expect("car");
    assert_eq!(car.direction(), Direction::None);
    assert!(!car.has_passengers());
    assert!(car.completions().is_empty());
}

#[test]
fn board_takes_matching_direction_and_requeues_the_rest_in_order() {
    let mut car = car_at(4, Direction::Up);
    let mut q = RequestQueue::new();
    q.enqueue(Floor(4), req(1, 4, 9, Heading::Up));
    q.enqueue(Floor(4), req(2, 4, 1, Heading::Down));
    q.enqueue(Floor(4), req(3, 4, 6, Heading::Up));
    q.enqueue(Floor(4), req(4, 4, 2, Heading::Down));
    q.enqueue(Floor(7), req(5, 7, 9, Heading::Up));

    assert_eq!(car.board(&mut q), 2);
    // 车内按终点升序
    assert_eq!(onboard_ids(&car), vec![3, 1]);
    let left: Vec<u64> = q.waiting_at(Floor(4)).iter().map(|r| r.id().0).collect();
    assert_eq!(left, vec![2, 4]);
    assert_eq!(q.waiting_at(Floor(7)).len(), 1);
}

#[test]
fn board_with_no_direction_admits_nobody() {
    let mut car = car_at(4, Direction::None);
    let mut q = RequestQueue::new();
    q.enqueue(Floor(4), req(1, 4, 9, Heading::Up));
    q.enqueue(Floor(4), req(2, 4, 1, Heading::Down));

    assert_eq!(car.board(&mut q), 0);
    assert!(!car.has_passengers());
    assert_eq!(q.len(), 2);
}

#[test]
fn second_boarding_pass_admits_nobody_new() {
    let mut car = car_at(6, Direction::Down);
    let mut q = RequestQueue::new();
    q.enqueue(Floor(6), req(1, 6, 2, Heading::Down));
    q.enqueue(Floor(6), req(2, 6, 8, Heading::Up));

    assert_eq!(car.board(&mut q), 1);
    assert_eq!(car.board(&mut q), 0);
    assert_eq!(onboard_ids(&car), vec![1]);
    assert_eq!(q.len(), 1);
}

#[test]
fn alight_removes_arrivals_and_records_elapsed_turns() {
    let mut car = car_at(2, Direction::Up);
    let mut q = RequestQueue::new();
    q.enqueue(Floor(2), req(1, 2, 5, Heading::Up));
    q.enqueue(Floor(2), req(2, 2, 8, Heading::Up));
    q.enqueue(Floor(2), req(3, 2, 5, Heading::Up));
    car.board(&mut q);

    for _ in 0..3 {
        car.advance().expect("move up");
    }
    assert_eq!(car.floor(), Floor(5));

    let off = car.alight(Turn(9));
    let off_ids: Vec<u64> = off.iter().map(|r| r.id().0).collect();
    assert_eq!(off_ids, vec![1, 3]);
    assert_eq!(onboard_ids(&car), vec![2]);
    assert_eq!(car.completions(), &[9, 9]);
    assert!(car.passengers().iter().all(|p| p.destination() != car.floor()));

    assert!(car.alight(Turn(10)).is_empty());
    assert_eq!(car.completions().len(), 2);
}

#[test]
fn move_past_top_or_bottom_is_out_of_bounds() {
    let mut car = car_at(10, Direction::Up);
    let err = car.move_one(Heading::Up).expect_err("through the roof");
    assert_eq!(err.kind(), ErrorKind::OutOfBounds);
    assert_eq!(car.floor(), Floor(10));
    assert_eq!(car.move_one(Heading::Down).expect("down"), Floor(9));

    let mut car = car_at(1, Direction::Down);
    let err = car.advance().expect_err("into the basement");
    assert!(matches!(
        err,
        SimError::OutOfBounds {
            floor: Floor(1),
            heading: Heading::Down,
            ..
        }
    ));
    assert_eq!(car.floor(), Floor(1));
}

#[test]
fn advance_without_direction_holds_position() {
    let mut car = car_at(5, Direction::None);
    assert_eq!(car.advance().expect("hold"), None);
    assert_eq!(car.floor(), Floor(5));
}
