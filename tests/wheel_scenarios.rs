//! End-to-end wheel scenarios through the public API

use wheel_of_choices::WheelError;
use wheel_of_choices::renderer::WheelView;
use wheel_of_choices::sim::{Session, WheelEvent, generate_colors, resolve};

fn session_with(labels: &[&str]) -> Session {
    let mut session = Session::new(2024);
    for label in labels {
        session.add_option(label).unwrap();
    }
    session
}

#[test]
fn test_four_options_rest_at_100_degrees() {
    let mut session = session_with(&["A", "B", "C", "D"]);
    session.set_angle(100.0);
    assert_eq!(resolve(session.angle(), 4), Some(1));
    assert_eq!(session.winner_at(session.angle()).unwrap().label, "B");
}

#[test]
fn test_two_options_rest_at_zero() {
    let session = session_with(&["X", "Y"]);
    assert_eq!(session.angle(), 0.0);
    assert_eq!(session.winner_at(0.0).unwrap().label, "Y");
}

#[test]
fn test_pizza_twice() {
    let mut session = Session::new(1);
    assert_eq!(session.add_option("Pizza"), Ok(0));
    assert_eq!(
        session.add_option("Pizza"),
        Err(WheelError::DuplicateOption("Pizza".to_string()))
    );
    assert_eq!(session.options().len(), 1);
}

#[test]
fn test_full_spin_cycle() {
    let mut session = session_with(&["Red", "Green", "Blue", "Gold", "Teal", "Plum"]);
    session.drain_events();
    assert_eq!(session.colors(), generate_colors(6).as_slice());

    let velocity = session.start_spin().unwrap();
    assert!((15.0..=25.0).contains(&velocity));

    let mut ticks = 0;
    let winner = loop {
        ticks += 1;
        assert!(ticks <= 200, "spin did not stop in time");
        if let Some(winner) = session.tick() {
            break winner;
        }
    };

    assert_eq!(ticks, session.spin_ticks());
    assert!((169..=194).contains(&ticks));
    assert_eq!(Some(winner.index), resolve(session.angle(), 6));

    let events = session.drain_events();
    assert_eq!(events.first(), Some(&WheelEvent::SpinStarted { velocity }));
    assert_eq!(events.last(), Some(&WheelEvent::SpinCompleted(winner.clone())));

    // The drawn pointer sits over the winning color
    let view = WheelView::new(12);
    let canvas = view.render(&session, true);
    let (col, row) = view.pointer_cell();
    assert_eq!(canvas.get(col, row).unwrap().bg, Some(winner.color));

    // Ready for another go
    assert!(session.can_spin());
    session.clear_options().unwrap();
    assert!(!session.can_spin());
    assert_eq!(session.start_spin(), Err(WheelError::EmptyWheel));
}

#[test]
fn test_replay_from_seed() {
    let labels = ["Mon", "Tue", "Wed", "Thu", "Fri"];
    let spin = |seed: u64| {
        let mut session = Session::new(seed);
        for label in labels {
            session.add_option(label).unwrap();
        }
        let mut winners = Vec::new();
        for _ in 0..3 {
            session.start_spin().unwrap();
            while session.is_spinning() {
                if let Some(winner) = session.tick() {
                    winners.push((winner.index, session.spin_ticks()));
                }
            }
        }
        winners
    };
    assert_eq!(spin(99), spin(99));
}
