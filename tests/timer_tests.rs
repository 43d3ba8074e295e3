//! Countdown timer integration tests.
//!
//! The countdown is driven entirely by the logical clock: one tick per
//! 1000 ms of `advance`, pause cancels the recurring schedule, resume
//! re-arms it from the current remaining time.

use match_grid::{FaceState, GameEngine, GameEvent, GridConfig};

fn engine_with_limit(secs: u32) -> GameEngine {
    GameEngine::new(GridConfig::new(2, 2).with_time_limit_secs(secs), 42).unwrap()
}

#[test]
fn test_start_emits_full_time() {
    let mut engine = engine_with_limit(60);

    engine.start_timer();

    assert!(engine.is_timer_running());
    assert_eq!(engine.remaining_secs(), 60);
    assert_eq!(
        engine.drain_events(),
        vec![GameEvent::TimerTick { remaining_secs: 60 }]
    );
}

#[test]
fn test_tick_per_second() {
    let mut engine = engine_with_limit(60);
    engine.start_timer();
    engine.drain_events();

    engine.advance(999);
    assert_eq!(engine.remaining_secs(), 60);
    assert!(engine.drain_events().is_empty());

    engine.advance(1);
    assert_eq!(engine.remaining_secs(), 59);
    assert_eq!(
        engine.drain_events(),
        vec![GameEvent::TimerTick { remaining_secs: 59 }]
    );

    engine.advance(5000);
    assert_eq!(engine.remaining_secs(), 54);
    assert_eq!(engine.drain_events().len(), 5);
}

/// The full 60-second expiry: time up fires, the round resets with a fresh
/// shuffled card set of the same size, and the score is zeroed.
#[test]
fn test_expiry_resets_round() {
    let mut engine = engine_with_limit(60);

    // Bank a match so the reset is observable
    let pair: Vec<_> = engine
        .cards()
        .iter()
        .enumerate()
        .filter(|(_, c)| c.value().raw() == 1)
        .map(|(i, _)| match_grid::CardIndex::new(i as u16))
        .collect();
    engine.flip(pair[0]);
    engine.flip(pair[1]);
    assert_eq!(engine.matched_pairs(), 1);

    engine.start_timer();
    engine.drain_events();
    engine.advance(60_000);

    assert_eq!(engine.remaining_secs(), 60); // restored to the full limit
    assert!(!engine.is_timer_running());
    assert_eq!(engine.matched_pairs(), 0);
    assert_eq!(engine.round(), 2);
    assert_eq!(engine.cards().len(), 4);
    assert!(engine.cards().iter().all(|c| c.face() == FaceState::Down));

    let events = engine.drain_events();
    assert_eq!(events.iter().filter(|e| **e == GameEvent::TimeUp).count(), 1);
    assert!(events.contains(&GameEvent::TimerTick { remaining_secs: 0 }));
    assert!(events.contains(&GameEvent::RoundStarted { round: 2 }));
    assert!(events.contains(&GameEvent::ScoreChanged { matched_pairs: 0 }));
}

#[test]
fn test_expiry_stops_ticking() {
    let mut engine = engine_with_limit(3);
    engine.start_timer();
    engine.advance(3000);
    engine.drain_events();

    // Long after expiry: no stray ticks from a stale schedule
    engine.advance(30_000);
    assert!(engine.drain_events().is_empty());
    assert!(!engine.is_timer_running());
}

#[test]
fn test_pause_keeps_remaining() {
    let mut engine = engine_with_limit(60);
    engine.start_timer();
    engine.advance(10_000);
    assert_eq!(engine.remaining_secs(), 50);

    engine.pause_timer();
    assert!(!engine.is_timer_running());
    assert_eq!(engine.remaining_secs(), 50);

    engine.advance(60_000);
    assert_eq!(engine.remaining_secs(), 50);
}

#[test]
fn test_resume_continues_from_remaining() {
    let mut engine = engine_with_limit(60);
    engine.start_timer();
    engine.advance(10_000);
    engine.pause_timer();
    engine.advance(5000);

    engine.resume_timer();
    assert!(engine.is_timer_running());
    assert_eq!(engine.remaining_secs(), 50); // not reset to 60

    engine.advance(1000);
    assert_eq!(engine.remaining_secs(), 49);
}

#[test]
fn test_pause_when_stopped_is_noop() {
    let mut engine = engine_with_limit(60);
    engine.pause_timer();
    assert!(!engine.is_timer_running());
    assert_eq!(engine.remaining_secs(), 60);
}

#[test]
fn test_restart_resets_to_full_limit() {
    let mut engine = engine_with_limit(60);
    engine.start_timer();
    engine.advance(25_000);
    assert_eq!(engine.remaining_secs(), 35);

    engine.start_timer();
    assert_eq!(engine.remaining_secs(), 60);

    // No doubled tick from the old schedule
    engine.advance(1000);
    assert_eq!(engine.remaining_secs(), 59);
}

#[test]
fn test_reset_game_keeps_timer_running() {
    let mut engine = engine_with_limit(60);
    engine.start_timer();
    engine.advance(10_000);

    engine.reset_game();

    assert!(engine.is_timer_running());
    assert_eq!(engine.remaining_secs(), 60);

    engine.advance(1000);
    assert_eq!(engine.remaining_secs(), 59);
}

/// A mismatch delay and the countdown interleave in due-time order.
#[test]
fn test_resolution_and_ticks_interleave() {
    let mut engine = engine_with_limit(60);
    let ones: Vec<_> = engine
        .cards()
        .iter()
        .enumerate()
        .filter(|(_, c)| c.value().raw() == 1)
        .map(|(i, _)| match_grid::CardIndex::new(i as u16))
        .collect();
    let twos: Vec<_> = engine
        .cards()
        .iter()
        .enumerate()
        .filter(|(_, c)| c.value().raw() == 2)
        .map(|(i, _)| match_grid::CardIndex::new(i as u16))
        .collect();

    engine.start_timer();
    engine.advance(500); // half-way to the first tick
    engine.flip(ones[0]);
    engine.flip(twos[0]);
    engine.drain_events();

    // Tick lands at 1000 ms, flip-back at 1500 ms
    engine.advance(2000);
    let events = engine.drain_events();
    assert_eq!(
        events,
        vec![
            GameEvent::TimerTick { remaining_secs: 59 },
            GameEvent::PairResolved {
                first: ones[0],
                second: twos[0],
                matched: false
            },
            GameEvent::TimerTick { remaining_secs: 58 },
        ]
    );
}
