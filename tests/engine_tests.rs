//! Host plumbing: frame ordering, touchdown log, async runtime

use std::io::BufRead;

use tris::core::{Session, Vec2};
use tris::engine::{Engine, EventQueue, GravityClock, HostEvent, TouchdownLog};
use tris::types::{GameAction, Shape};

fn session_with(shape: Shape, pivot: Vec2) -> Session {
    let mut s = Session::new(31337);
    s.spawn_at(shape, pivot);
    s
}

#[test]
fn test_clock_drives_queue() {
    let mut s = session_with(Shape::T, Vec2::new(4, 0));
    let mut clock = GravityClock::new(100);
    let mut queue = EventQueue::new();

    // Three simulated 40 ms frames: one tick is due after the third.
    for _ in 0..3 {
        queue.push_ticks(clock.advance(40));
        queue.process_frame(&mut s);
    }
    assert_eq!(s.active_piece().pivot.y, 1);
    assert_eq!(clock.remaining_ms(), 80);
}

#[test]
fn test_frame_applies_input_before_gravity() {
    let mut s = session_with(Shape::I, Vec2::new(5, 14));
    let mut queue = EventQueue::new();

    // Gravity arrives first but input is applied first, so the bar moves
    // right at row 14 and then drops to the floor row.
    queue.push(HostEvent::Gravity);
    queue.push(HostEvent::Action(GameAction::MoveRight));
    let report = queue.process_frame(&mut s);

    assert_eq!(report.applied, 2);
    assert!(report.touchdowns.is_empty());
    assert_eq!(s.active_piece().pivot, Vec2::new(6, 15));
}

#[test]
fn test_touchdown_log_lines() {
    let mut s = session_with(Shape::O, Vec2::new(0, 14));
    let mut log = TouchdownLog::new(Vec::new());

    let mut queue = EventQueue::new();
    queue.push(HostEvent::Gravity);
    for touchdown in queue.process_frame(&mut s).touchdowns {
        log.record(&touchdown).unwrap();
    }

    s.spawn_at(Shape::O, Vec2::new(2, 14));
    queue.push(HostEvent::Action(GameAction::ForceDown));
    for touchdown in queue.process_frame(&mut s).touchdowns {
        log.record(&touchdown).unwrap();
    }

    let bytes = log.into_inner();
    let records: Vec<serde_json::Value> = bytes
        .as_slice()
        .lines()
        .map(|line| serde_json::from_str(&line.unwrap()).unwrap())
        .collect();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["seq"], 1);
    assert_eq!(records[0]["forced"], false);
    assert_eq!(records[1]["seq"], 2);
    assert_eq!(records[1]["forced"], true);
    assert_eq!(records[1]["shape"], "o");
    assert_eq!(records[1]["score"], 0);
}

#[tokio::test]
async fn test_engine_round_trip() {
    let (engine, handle) = Engine::new(session_with(Shape::O, Vec2::new(4, 14)), 60_000);
    let mut landed = 0;
    let task = tokio::spawn(async move {
        let session = engine
            .run(|_| {
                landed += 1;
                Ok(())
            })
            .await?;
        anyhow::Ok((session, landed))
    });

    handle
        .send(HostEvent::Action(GameAction::MoveLeft))
        .await
        .unwrap();
    handle
        .send(HostEvent::Action(GameAction::ForceDown))
        .await
        .unwrap();
    handle.send(HostEvent::Quit).await.unwrap();

    let (session, landed) = task.await.unwrap().unwrap();
    assert_eq!(landed, 1);
    assert!(session.board().is_occupied(3, 15));
    assert_eq!(session.piece_id(), 3);
}

#[test]
fn test_engine_from_blocking_thread() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let (engine, handle) = Engine::new(session_with(Shape::T, Vec2::new(4, 0)), 60_000);

    let input = std::thread::spawn(move || {
        handle
            .blocking_send(HostEvent::Action(GameAction::MoveRight))
            .unwrap();
        // Dropping the last handle stops the engine.
    });

    let session = rt.block_on(engine.run(|_| Ok(()))).unwrap();
    input.join().unwrap();
    assert_eq!(session.active_piece().pivot, Vec2::new(5, 0));
}
