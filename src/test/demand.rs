use super::building;
use crate::demand::{DemandGenerator, DemandScript, RandomDemand, ScriptedDemand};
use crate::elevator::{Floor, Heading};
use crate::error::SimError;
use crate::sim::Turn;

#[test]
fn random_demand_stays_in_building_and_respects_count() {
    let mut g = RandomDemand::new(building(), 1000, 3, 1.0, 5);
    let mut total = 0;
    for t in 0..500 {
        let batch = g.generate(Floor(5), Turn(t));
        assert!(batch.len() <= 3);
        total += batch.len();
        for d in batch {
            assert!(building().contains(d.origin));
            assert!(building().contains(d.destination));
            assert_ne!(d.origin, d.destination);
        }
    }
    // 期望约 1.5 个/回合
    assert!(total > 500 && total < 1000, "total={total}");
}

#[test]
fn random_demand_declares_toward_car_when_always_biased() {
    let mut g = RandomDemand::new(building(), 1000, 3, 1.0, 9);
    for t in 0..200 {
        for d in g.generate(Floor(6), Turn(t)) {
            let expected = if d.origin < Floor(6) {
                Heading::Down
            } else {
                Heading::Up
            };
            assert_eq!(d.declared, expected, "{d:?}");
        }
    }
}

#[test]
fn random_demand_declares_true_direction_when_never_biased() {
    let mut g = RandomDemand::new(building(), 1000, 3, 0.0, 9);
    for t in 0..200 {
        for d in g.generate(Floor(6), Turn(t)) {
            assert_eq!(d.declared, Heading::between(d.origin, d.destination));
        }
    }
}

#[test]
fn random_demand_is_active_for_configured_turns() {
    let g = RandomDemand::new(building(), 3, 3, 1.0, 1);
    assert!(g.is_active(Turn(0)));
    assert!(g.is_active(Turn(2)));
    assert!(!g.is_active(Turn(3)));
    assert!(!RandomDemand::new(building(), 0, 3, 1.0, 1).is_active(Turn::ZERO));
}

#[test]
fn random_demand_is_deterministic_per_seed() {
    let mut a = RandomDemand::new(building(), 100, 3, 0.5, 77);
    let mut b = RandomDemand::new(building(), 100, 3, 0.5, 77);
    for t in 0..50 {
        assert_eq!(a.generate(Floor(1), Turn(t)), b.generate(Floor(1), Turn(t)));
    }
}

#[test]
fn script_releases_requests_on_their_turn_in_order() {
    let raw = r#"
    {
        "schema_version": 1,
        "requests": [
            { "turn": 4, "origin": 2, "destination": 9 },
            { "turn": 1, "origin": 7, "destination": 3, "declared": "up" },
            { "turn": 1, "origin": 8, "destination": 1 }
        ]
    }
    "#;
    let script = DemandScript::from_json(raw).expect("parse script");
    let mut g = ScriptedDemand::new(script, &building()).expect("scripted");
    assert_eq!(g.remaining(), 3);

    assert!(g.generate(Floor(1), Turn(0)).is_empty());
    let t1 = g.generate(Floor(1), Turn(1));
    assert_eq!(t1.len(), 2);
    assert_eq!(t1[0].origin, Floor(7));
    assert_eq!(t1[0].declared, Heading::Up);
    assert_eq!(t1[1].origin, Floor(8));
    assert_eq!(t1[1].declared, Heading::Down);

    assert!(g.is_active(Turn(4)));
    assert!(!g.is_active(Turn(5)));
    // 跳过的回合也会补发
    let t6 = g.generate(Floor(1), Turn(6));
    assert_eq!(t6.len(), 1);
    assert_eq!(t6[0].declared, Heading::Up);
    assert_eq!(g.remaining(), 0);
}

#[test]
fn empty_script_is_never_active() {
    let script = DemandScript::from_json(r#"{ "schema_version": 1 }"#).expect("parse");
    let g = ScriptedDemand::new(script, &building()).expect("scripted");
    assert!(!g.is_active(Turn::ZERO));
}

#[test]
fn script_rejects_bad_floors_and_bad_json() {
    let script = DemandScript::from_json(
        r#"{ "schema_version": 1, "requests": [ { "turn": 0, "origin": 0, "destination": 3 } ] }"#,
    )
    .expect("parse");
    let err = ScriptedDemand::new(script, &building()).expect_err("floor 0");
    assert!(matches!(err, SimError::FloorOutOfRange { floor: Floor(0), .. }));

    let script = DemandScript::from_json(
        r#"{ "schema_version": 1, "requests": [ { "turn": 0, "origin": 3, "destination": 3 } ] }"#,
    )
    .expect("parse");
    assert!(matches!(
        ScriptedDemand::new(script, &building()),
        Err(SimError::ZeroLengthTrip { .. })
    ));

    assert!(matches!(
        DemandScript::from_json("{ \"requests\": 5 }"),
        Err(SimError::InvalidScript(_))
    ));
}
