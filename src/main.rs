//! Terminal runner (default binary).
//!
//! Reads keys in raw mode and drives a session on the tokio engine. Nothing
//! is drawn; touchdowns are reported on stderr and the final score is
//! printed on exit.

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::terminal;
use tokio::runtime::Runtime;

use tris::core::{Session, Touchdown};
use tris::engine::{Engine, EngineConfig, EngineHandle, HostEvent, TouchdownLog};
use tris::input::{handle_key_event, should_quit};

fn main() -> Result<()> {
    let config = EngineConfig::from_env();
    eprintln!(
        "[Engine] seed {} gravity {} ms",
        config.seed, config.gravity_ms
    );

    let mut log = config
        .log_path
        .as_deref()
        .map(TouchdownLog::open)
        .transpose()?;

    let rt = Runtime::new()?;
    let (engine, handle) = Engine::new(Session::new(config.seed), config.gravity_ms);

    terminal::enable_raw_mode()?;

    // The input thread owns the last handle; when it exits the engine stops.
    std::thread::spawn(move || {
        if let Err(e) = read_input(&handle) {
            eprint!("[Input] {:#}\r\n", e);
        }
    });

    let result = rt.block_on(engine.run(|touchdown| {
        report(touchdown);
        if let Some(log) = log.as_mut() {
            log.record(touchdown)?;
        }
        Ok(())
    }));

    // Always try to restore terminal state.
    let _ = terminal::disable_raw_mode();

    if let Some(log) = log.as_mut() {
        log.flush()?;
    }
    let session = result?;
    println!("score {}", session.score());
    Ok(())
}

fn read_input(engine: &EngineHandle) -> Result<()> {
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if should_quit(key) {
            return engine.blocking_send(HostEvent::Quit);
        }
        if let Some(action) = handle_key_event(key) {
            engine.blocking_send(HostEvent::Action(action))?;
        }
    }
}

fn report(touchdown: &Touchdown) {
    let pivot = touchdown.piece.pivot;
    // Raw mode: no implicit carriage return.
    eprint!(
        "[Touchdown] piece {} {} at ({}, {}) rows {:?} +{} score {}{}\r\n",
        touchdown.piece_id,
        touchdown.piece.shape.as_str(),
        pivot.x,
        pivot.y,
        touchdown.clear.rows.as_slice(),
        touchdown.clear.score_delta,
        touchdown.score,
        if touchdown.forced { " (forced)" } else { "" },
    );
}
