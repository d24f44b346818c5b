/// Tests for the game session ticker and view switching. Time is paused, so
/// sleeping auto-advances the clock straight to the next timer.
use std::time::Duration;

use crate::navigator::Navigator;
use crate::session::GameSession;
use crate::types::View;

const SECOND: Duration = Duration::from_secs(1);

// ── GameSession ───────────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn session_ticks_once_per_second() {
    let session = GameSession::start(SECOND);
    assert_eq!(session.clock().remaining(), 120);

    tokio::time::sleep(Duration::from_millis(3_500)).await;
    assert_eq!(session.clock().remaining(), 117);
    assert_eq!(session.clock().round(), 1);
}

#[tokio::test(start_paused = true)]
async fn session_rolls_over_after_full_round() {
    let session = GameSession::start(SECOND);
    tokio::time::sleep(Duration::from_millis(120_500)).await;
    assert_eq!(session.clock().round(), 2);
    assert_eq!(session.clock().remaining(), 120);
}

#[tokio::test(start_paused = true)]
async fn shutdown_stops_the_ticker() {
    let session = GameSession::start(SECOND);
    let clock = session.shared_clock();
    let token = session.cancellation();

    tokio::time::sleep(Duration::from_millis(2_500)).await;
    session.shutdown().await;
    assert!(token.is_cancelled());

    let frozen = *clock.lock().unwrap();
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(*clock.lock().unwrap(), frozen);
    assert_eq!(frozen.remaining(), 118);
}

#[tokio::test(start_paused = true)]
async fn dropping_session_releases_ticker() {
    let session = GameSession::start(SECOND);
    let clock = session.shared_clock();
    let token = session.cancellation();

    drop(session);
    assert!(token.is_cancelled());

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(clock.lock().unwrap().remaining(), 120);
}

#[tokio::test(start_paused = true)]
async fn session_keeps_selection_between_ticks() {
    let session = GameSession::start(SECOND);
    session.update_selection(|s| s.select_color(crate::types::Color::Green));
    tokio::time::sleep(Duration::from_millis(1_500)).await;
    assert_eq!(session.selection().color, Some(crate::types::Color::Green));
}

// ── Navigator ─────────────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn nothing_mounted_before_first_navigation() {
    let nav = Navigator::new(SECOND);
    assert_eq!(nav.current(), None);
    assert!(nav.game().is_none());
}

#[tokio::test(start_paused = true)]
async fn only_game_view_owns_a_session() {
    let mut nav = Navigator::new(SECOND);
    nav.navigate(View::History);
    assert!(nav.game().is_none());
    nav.navigate(View::Game);
    assert_eq!(nav.current(), Some(View::Game));
    assert!(nav.game().is_some());
    nav.navigate(View::Rules);
    assert!(nav.game().is_none());
}

#[tokio::test(start_paused = true)]
async fn leaving_and_returning_resets_game_state() {
    let mut nav = Navigator::new(SECOND);
    nav.navigate(View::Game);
    tokio::time::sleep(Duration::from_millis(5_500)).await;
    let first = nav.game().map(|g| g.cancellation()).unwrap();
    assert_eq!(nav.game().unwrap().clock().remaining(), 115);

    nav.navigate(View::Rules);
    assert!(first.is_cancelled());

    nav.navigate(View::Game);
    let clock = nav.game().unwrap().clock();
    assert_eq!(clock.round(), 1);
    assert_eq!(clock.remaining(), 120);
}

#[tokio::test(start_paused = true)]
async fn reloading_game_view_remounts() {
    let mut nav = Navigator::new(SECOND);
    nav.navigate(View::Game);
    let first = nav.game().unwrap().cancellation();
    tokio::time::sleep(Duration::from_millis(2_500)).await;

    nav.navigate(View::Game);
    assert!(first.is_cancelled());
    assert_eq!(nav.game().unwrap().clock().remaining(), 120);
}

#[tokio::test(start_paused = true)]
async fn repeated_mounts_leave_one_live_ticker() {
    let mut nav = Navigator::new(SECOND);
    let mut tokens = Vec::new();
    for _ in 0..10 {
        nav.navigate(View::Game);
        tokens.push(nav.game().unwrap().cancellation());
        nav.navigate(View::History);
        nav.navigate(View::Game);
        tokens.push(nav.game().unwrap().cancellation());
    }
    let live = tokens.iter().filter(|t| !t.is_cancelled()).count();
    assert_eq!(live, 1);
    assert!(!tokens.last().unwrap().is_cancelled());
}

#[tokio::test(start_paused = true)]
async fn unmount_hands_back_live_session() {
    let mut nav = Navigator::new(SECOND);
    nav.navigate(View::Game);
    let game = nav.unmount().expect("game was mounted");
    let token = game.cancellation();
    assert_eq!(nav.current(), None);
    assert!(nav.game().is_none());
    assert!(!token.is_cancelled());

    game.shutdown().await;
    assert!(token.is_cancelled());
}
