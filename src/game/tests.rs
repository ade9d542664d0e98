//! Tests for the game facade

use super::*;
use crate::puzzle::{ConnectLayout, ConnectPair, Difficulty};
use crate::session::SessionPhase;
use crate::storage::MemoryStore;
use crate::testing::{sample_answer, sample_catalog, ManualClock, RecordingObserver};

const DELAY: Duration = Duration::from_millis(500);

struct Harness {
    game: CookieGame,
    clock: Arc<ManualClock>,
    events: Arc<RecordingObserver>,
}

impl Harness {
    fn new(catalog: Catalog) -> Self {
        Self::with_storage(catalog, Arc::new(MemoryStore::new()))
    }

    fn with_storage(catalog: Catalog, storage: Arc<dyn KeyValueStore>) -> Self {
        let clock = Arc::new(ManualClock::new());
        let events = Arc::new(RecordingObserver::new());
        let game = CookieGame::builder()
            .catalog(catalog)
            .storage(storage)
            .credit_delay(DELAY)
            .clock(clock.clone())
            .observer(events.clone())
            .build()
            .unwrap();
        Self {
            game,
            clock,
            events,
        }
    }

    /// Answer the current puzzle correctly and let the credit land
    fn solve_current(&mut self) {
        let id = self.game.current_puzzle_id().get();
        let result = self.game.submit_answer(sample_answer(id)).unwrap();
        assert!(result.is_correct);
        self.clock.advance(DELAY);
        self.game.tick();
    }
}

fn connect_catalog() -> Catalog {
    let layout = ConnectLayout {
        grid_size: 5,
        pairs: vec![
            ConnectPair {
                id: "red".to_string(),
                color: "#ef4444".to_string(),
                start: [0, 0],
                end: [0, 4],
            },
            ConnectPair {
                id: "blue".to_string(),
                color: "#3b82f6".to_string(),
                start: [4, 0],
                end: [4, 4],
            },
        ],
    };
    let puzzles = vec![
        Puzzle::connect(1, "Connect the dots", Difficulty::Medium, Some(layout)).with_reward(4),
        Puzzle::choice(
            2,
            "Pick",
            crate::puzzle::PuzzleKind::Logic,
            Difficulty::Easy,
            "yes",
            vec!["yes".into(), "no".into()],
        ),
    ];
    Catalog::new(puzzles).unwrap()
}

#[test]
fn test_fresh_game_starts_at_first_puzzle() {
    let h = Harness::new(sample_catalog(3));
    assert_eq!(h.game.current_puzzle_id(), PuzzleId::FIRST);
    assert_eq!(h.game.current_puzzle().unwrap().title, "Puzzle 1");
    assert_eq!(h.game.total_cookies(), 0);
    assert_eq!(
        h.events.events(),
        vec![GameEvent::PuzzleChanged {
            from: None,
            to: PuzzleId::FIRST
        }]
    );
}

#[test]
fn test_correct_answer_is_credited_after_delay() {
    let mut h = Harness::new(sample_catalog(3));
    h.events.clear();

    let result = h.game.submit_answer(sample_answer(1)).unwrap();
    assert!(result.is_correct);
    assert!(h.game.session_state().is_solved);
    assert_eq!(h.game.total_cookies(), 0);
    assert_eq!(h.game.pending_credit_due(), Some(h.clock.now() + DELAY));

    h.clock.advance(Duration::from_millis(499));
    h.game.tick();
    assert_eq!(h.game.total_cookies(), 0);

    h.clock.advance(Duration::from_millis(1));
    h.game.tick();
    assert_eq!(h.game.total_cookies(), 1);
    assert!(h.game.is_completed(PuzzleId::FIRST));
    assert_eq!(h.game.current_puzzle_id(), PuzzleId::new(2));
    assert!(!h.game.session_state().is_solved);
    assert_eq!(h.game.pending_credit_due(), None);

    let earned = h
        .events
        .matching(|event| matches!(event, GameEvent::CookiesEarned { .. }));
    assert_eq!(
        earned,
        vec![GameEvent::CookiesEarned {
            puzzle_id: PuzzleId::FIRST,
            amount: 1,
            total: 1
        }]
    );
}

#[test]
fn test_zero_delay_credits_immediately() {
    let clock = Arc::new(ManualClock::new());
    let mut game = CookieGame::builder()
        .catalog(sample_catalog(2))
        .credit_delay(Duration::ZERO)
        .clock(clock)
        .build()
        .unwrap();

    game.submit_answer(sample_answer(1)).unwrap();
    assert_eq!(game.total_cookies(), 1);
    assert_eq!(game.current_puzzle_id(), PuzzleId::new(2));
}

#[test]
fn test_wrong_answers_do_not_credit() {
    let mut h = Harness::new(sample_catalog(2));

    let result = h.game.submit_answer(0).unwrap();
    assert!(!result.is_correct);
    let result = h.game.submit_answer(42).unwrap();
    assert!(!result.is_valid_option);
    assert_eq!(result.message, crate::puzzle::validator::MESSAGE_INVALID_OPTION);

    h.clock.advance(DELAY * 4);
    h.game.tick();
    assert_eq!(h.game.total_cookies(), 0);
    assert_eq!(h.game.session_state().selected_answer, Some(Answer::from(42)));
}

#[test]
fn test_navigating_away_discards_pending_credit() {
    let mut h = Harness::new(sample_catalog(3));

    h.game.submit_answer(sample_answer(1)).unwrap();
    assert!(h.game.select_puzzle(PuzzleId::new(3)));

    h.clock.advance(DELAY);
    h.game.tick();

    assert_eq!(h.game.total_cookies(), 0);
    assert!(h.game.completed_ids().is_empty());
    assert_eq!(h.game.session_state().puzzle_id, Some(PuzzleId::new(3)));
    assert_eq!(
        h.events
            .matching(|event| matches!(event, GameEvent::CreditDiscarded { .. })),
        vec![GameEvent::CreditDiscarded {
            puzzle_id: PuzzleId::FIRST
        }]
    );
}

#[test]
fn test_late_tick_still_credits_before_navigation() {
    let mut h = Harness::new(sample_catalog(3));

    h.game.submit_answer(sample_answer(1)).unwrap();
    h.clock.advance(DELAY * 2);
    h.game.go_next();

    assert_eq!(h.game.total_cookies(), 1);
    assert!(h.game.is_completed(PuzzleId::FIRST));
}

#[test]
fn test_course_finishes_once() {
    let mut h = Harness::new(sample_catalog(2));
    h.solve_current();
    h.solve_current();

    assert_eq!(h.game.total_cookies(), 3);
    assert!(h.game.progress_summary().finished);
    assert_eq!(h.game.current_puzzle_id(), PuzzleId::new(2));
    assert!(h.game.session_state().show_success);
    assert_eq!(h.game.go_next(), NavigationOutcome::Finished);
    h.game.tick();

    let finished = h
        .events
        .matching(|event| matches!(event, GameEvent::CourseFinished { .. }));
    assert_eq!(finished, vec![GameEvent::CourseFinished { total_cookies: 3 }]);
}

#[test]
fn test_completed_puzzle_ignores_answers() {
    let mut h = Harness::new(sample_catalog(2));
    h.solve_current();
    h.solve_current();

    assert!(h.game.submit_answer(sample_answer(2)).is_none());
    h.clock.advance(DELAY);
    h.game.tick();
    assert_eq!(h.game.total_cookies(), 3);
}

#[test]
fn test_missing_current_puzzle() {
    let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    storage
        .set(
            crate::state::PROGRESS_KEY,
            r#"{"currentPuzzleId":40,"completedPuzzleIds":[]}"#,
        )
        .unwrap();
    let mut h = Harness::with_storage(sample_catalog(3), storage);

    assert!(h.game.current_puzzle().is_none());
    assert!(h.game.submit_answer(1).is_none());
    assert_eq!(h.game.go_next(), NavigationOutcome::Moved(PuzzleId::FIRST));
}

#[test]
fn test_go_previous_falls_forward() {
    let mut h = Harness::new(sample_catalog(5));
    h.solve_current();
    h.solve_current();
    assert_eq!(h.game.current_puzzle_id(), PuzzleId::new(3));

    assert_eq!(h.game.go_previous(), NavigationOutcome::Moved(PuzzleId::new(3)));
    assert!(h.game.select_puzzle(PuzzleId::new(5)));
    assert_eq!(h.game.go_previous(), NavigationOutcome::Moved(PuzzleId::new(4)));
}

#[test]
fn test_select_completed_puzzle_is_refused() {
    let mut h = Harness::new(sample_catalog(3));
    h.solve_current();

    assert!(!h.game.select_puzzle(PuzzleId::FIRST));
    assert_eq!(h.game.current_puzzle_id(), PuzzleId::new(2));
}

#[test]
fn test_reset_all_clears_everything() {
    let mut h = Harness::new(sample_catalog(3));
    h.solve_current();
    h.game.submit_answer(sample_answer(2)).unwrap();

    h.game.reset_all();
    h.clock.advance(DELAY);
    h.game.tick();

    assert_eq!(h.game.total_cookies(), 0);
    assert!(h.game.completed_ids().is_empty());
    assert_eq!(h.game.current_puzzle_id(), PuzzleId::FIRST);
    assert!(h.game.session_state().selected_answer.is_none());
    assert_eq!(h.controller_phase(), SessionPhase::Unanswered);
    assert!(h.events.events().contains(&GameEvent::ProgressReset));
}

#[test]
fn test_connect_completion_matches_sentinel_submission() {
    let mut h = Harness::new(connect_catalog());

    assert!(h.game.report_connected_pair("red", true).is_none());
    assert!(h.game.report_connected_pair("red", false).is_none());
    assert!(h.game.report_connected_pair("blue", true).is_none());
    let result = h.game.report_connected_pair("red", true).unwrap();
    assert!(result.is_correct);
    assert_eq!(result.message, crate::puzzle::validator::MESSAGE_CONNECTED);

    assert!(h.game.report_connected_pair("red", true).is_none());
    h.clock.advance(DELAY);
    h.game.tick();

    assert_eq!(h.game.total_cookies(), 4);
    assert!(h.game.is_completed(PuzzleId::FIRST));
}

#[test]
fn test_connect_completed_callback() {
    let mut h = Harness::new(connect_catalog());
    let result = h.game.connect_completed().unwrap();
    assert!(result.is_correct);
    assert_eq!(h.game.session_state().selected_answer, Some(Answer::completed()));
}

#[test]
fn test_progress_summary() {
    let mut h = Harness::new(sample_catalog(3));
    h.solve_current();

    let summary = h.game.progress_summary();
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.percent, 33);
    assert!(!summary.finished);
    assert!(!summary.on_last_puzzle);

    h.solve_current();
    let summary = h.game.progress_summary();
    assert_eq!(summary.percent, 67);
    assert!(summary.on_last_puzzle);
}

#[test]
fn test_reconcile_cookies() {
    let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    storage
        .set(
            crate::state::PROGRESS_KEY,
            r#"{"currentPuzzleId":4,"completedPuzzleIds":[1,2,3]}"#,
        )
        .unwrap();
    storage
        .set(crate::state::COOKIE_KEY, r#"{"totalCookies":50}"#)
        .unwrap();
    let mut h = Harness::with_storage(sample_catalog(4), storage);

    assert_eq!(h.game.reconcile_cookies(), 6);
    assert_eq!(h.game.total_cookies(), 6);
}

#[test]
fn test_build_drops_unknown_completed_ids() {
    let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    storage
        .set(
            crate::state::PROGRESS_KEY,
            r#"{"currentPuzzleId":2,"completedPuzzleIds":[1,99]}"#,
        )
        .unwrap();
    let h = Harness::with_storage(sample_catalog(3), storage);

    assert_eq!(h.game.completed_ids().len(), 1);
    assert_eq!(h.game.current_puzzle_id(), PuzzleId::new(2));
}

#[test]
fn test_build_advances_past_completed_current() {
    let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    storage
        .set(
            crate::state::PROGRESS_KEY,
            r#"{"currentPuzzleId":1,"completedPuzzleIds":[1,2]}"#,
        )
        .unwrap();
    let h = Harness::with_storage(sample_catalog(3), storage);

    assert_eq!(h.game.current_puzzle_id(), PuzzleId::new(3));
    assert_eq!(h.controller_phase(), SessionPhase::Unanswered);
}

impl Harness {
    fn controller_phase(&self) -> SessionPhase {
        self.game.controller.phase()
    }
}
