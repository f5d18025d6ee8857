use assert_matches::assert_matches;
use pickpack::{
    catalog::ItemType,
    generator::{RngSource, SequenceSource, GRID_SIZE},
    session::{PickOutcome, Phase, Session, TickOutcome, MATCH_REWARD, SESSION_SECS},
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Random play against a random warehouse, checking the invariants after every step
#[test]
fn random_play_keeps_invariants() {
    let mut driver = StdRng::seed_from_u64(2024);

    for seed in 0..20u64 {
        let mut session = Session::new(RngSource(StdRng::seed_from_u64(seed)));
        session.start();

        let mut ended = 0;
        for _ in 0..400 {
            let before = session.state().clone();

            if driver.gen_bool(0.2) {
                if session.tick() == TickOutcome::Expired {
                    ended += 1;
                }
            } else {
                let index = driver.gen_range(0..GRID_SIZE + 2);
                match session.pick(index) {
                    PickOutcome::Matched { fulfilled } => {
                        assert_eq!(session.state().score, before.score + MATCH_REWARD);
                        let order = session.state().order.unwrap();
                        if fulfilled {
                            assert_eq!(order.collected, 0);
                        } else {
                            assert_eq!(order.collected, before.order.unwrap().collected + 1);
                        }
                    }
                    PickOutcome::Missed => {
                        assert_eq!(session.state().score, before.score.saturating_sub(5));
                    }
                    PickOutcome::Ignored => assert_eq!(session.state(), &before),
                }
            }

            let state = session.state();
            assert_eq!(state.grid.len(), GRID_SIZE);
            let order = state.order.unwrap();
            assert!(order.collected < order.quantity);
            assert!((1..=3).contains(&order.quantity));
            assert!(state.seconds_remaining <= SESSION_SECS);
        }

        assert!(ended <= 1, "a session ends at most once");
        if ended == 1 {
            assert_eq!(session.state().phase, Phase::Ended);
        }
    }
}

#[test]
fn fulfilling_orders_back_to_back() {
    // every cell and every order is Books, each order wants 2
    let mut session = Session::new(SequenceSource::new(vec![ItemType::Books], vec![2]));
    session.start();

    let mut fulfilled_count = 0;
    for i in 0..10 {
        assert_matches!(session.pick(i % GRID_SIZE), PickOutcome::Matched { fulfilled } => {
            if fulfilled {
                fulfilled_count += 1;
            }
        });
    }

    assert_eq!(fulfilled_count, 5);
    assert_eq!(session.state().score, 100);
    assert_eq!(session.state().order.unwrap().collected, 0);
}

#[test]
fn end_to_end_scenario() {
    let mut session = Session::new(SequenceSource::new(
        vec![ItemType::Electronics, ItemType::Clothing],
        vec![2],
    ));
    session.start();
    assert_eq!(session.state().phase, Phase::Active);
    assert_eq!(session.state().seconds_remaining, 60);
    assert_eq!(session.state().score, 0);

    assert_matches!(session.pick(0), PickOutcome::Matched { fulfilled: false });
    assert_eq!(session.state().score, 10);
    assert_eq!(session.state().order.unwrap().collected, 1);

    assert_eq!(session.pick(1), PickOutcome::Missed);
    assert_eq!(session.state().score, 5);

    let expirations = (0..60)
        .filter(|_| session.tick() == TickOutcome::Expired)
        .count();
    assert_eq!(expirations, 1);
    assert_eq!(session.state().phase, Phase::Ended);
    assert_eq!(session.state().score, 5);

    let frozen = session.state().clone();
    assert_eq!(session.pick(0), PickOutcome::Ignored);
    assert_eq!(session.tick(), TickOutcome::Ignored);
    assert_eq!(session.state(), &frozen);
}
