use super::req;
use crate::elevator::{Floor, Heading, Request, RequestQueue};

fn ids(reqs: &[Request]) -> Vec<u64> {
    reqs.iter().map(|r| r.id().0).collect()
}

#[test]
fn enqueue_preserves_arrival_order_per_floor() {
    let mut q = RequestQueue::new();
    assert!(!q.has_any());
    assert!(q.is_empty());

    q.enqueue(Floor(3), req(1, 3, 7, Heading::Up));
    q.enqueue(Floor(5), req(2, 5, 1, Heading::Down));
    q.enqueue(Floor(3), req(3, 3, 1, Heading::Down));

    assert!(q.has_any());
    assert_eq!(q.len(), 3);
    assert_eq!(ids(q.waiting_at(Floor(3))), vec![1, 3]);
    assert_eq!(ids(q.waiting_at(Floor(5))), vec![2]);
    assert!(q.waiting_at(Floor(9)).is_empty());

    let floors: Vec<Floor> = q.iter().map(|(f, _)| f).collect();
    assert_eq!(floors, vec![Floor(3), Floor(5)]);
}

#[test]
fn take_all_drains_floor_and_leaves_no_entry() {
    let mut q = RequestQueue::new();
    q.enqueue(Floor(4), req(1, 4, 8, Heading::Up));
    q.enqueue(Floor(4), req(2, 4, 2, Heading::Down));

    let taken = q.take_all(Floor(4));
    assert_eq!(ids(&taken), vec![1, 2]);
    assert!(!q.has_any());
    assert_eq!(q.iter().count(), 0);

    assert!(q.take_all(Floor(4)).is_empty());
    assert!(q.take_all(Floor(6)).is_empty());
}

#[test]
fn put_back_keeps_leave_behinds_ahead_of_later_arrivals() {
    let mut q = RequestQueue::new();
    q.enqueue(Floor(2), req(1, 2, 9, Heading::Up));
    q.enqueue(Floor(2), req(2, 2, 8, Heading::Up));
    let taken = q.take_all(Floor(2));

    q.enqueue(Floor(2), req(3, 2, 1, Heading::Down));
    q.put_back(Floor(2), taken);
    assert_eq!(ids(q.waiting_at(Floor(2))), vec![1, 2, 3]);
}

#[test]
fn put_back_of_nothing_creates_no_entry() {
    let mut q = RequestQueue::new();
    q.put_back(Floor(7), Vec::new());
    assert!(!q.has_any());
    assert_eq!(q.len(), 0);
}
