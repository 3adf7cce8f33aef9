//! Async host loop.
//!
//! Bridges blocking input sources and a tokio gravity timer with the
//! synchronous session. Every event goes through one mpsc channel; the loop
//! wakes on the first event, drains whatever else is already queued into an
//! [`EventQueue`], and processes that batch as one frame.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

use tris_core::{Session, Touchdown};

use crate::queue::{EventQueue, HostEvent};
use crate::types::MIN_GRAVITY_MS;

const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Sending side of a running engine. Cheap to clone; the engine stops once
/// every handle is dropped.
#[derive(Clone)]
pub struct EngineHandle {
    events: mpsc::Sender<HostEvent>,
    gravity: Arc<watch::Sender<u32>>,
}

impl EngineHandle {
    pub async fn send(&self, event: HostEvent) -> Result<()> {
        self.events
            .send(event)
            .await
            .map_err(|_| anyhow!("engine stopped"))
    }

    /// Send from a plain thread. Must not be called inside the runtime.
    pub fn blocking_send(&self, event: HostEvent) -> Result<()> {
        self.events
            .blocking_send(event)
            .map_err(|_| anyhow!("engine stopped"))
    }

    /// Change the gravity interval; the timer restarts from now
    pub fn set_gravity_ms(&self, ms: u32) {
        self.gravity.send_replace(ms.max(MIN_GRAVITY_MS));
    }

    pub fn gravity_ms(&self) -> u32 {
        *self.gravity.borrow()
    }
}

/// Engine waiting to be run
pub struct Engine {
    session: Session,
    events_tx: mpsc::Sender<HostEvent>,
    events_rx: mpsc::Receiver<HostEvent>,
    gravity_rx: watch::Receiver<u32>,
}

impl Engine {
    pub fn new(session: Session, gravity_ms: u32) -> (Self, EngineHandle) {
        let (events_tx, events_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let (gravity_tx, gravity_rx) = watch::channel(gravity_ms.max(MIN_GRAVITY_MS));

        let handle = EngineHandle {
            events: events_tx.clone(),
            gravity: Arc::new(gravity_tx),
        };
        let engine = Self {
            session,
            events_tx,
            events_rx,
            gravity_rx,
        };
        (engine, handle)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run until a quit event arrives or every handle is gone.
    ///
    /// `on_touchdown` sees each touchdown in order; an error from it stops
    /// the engine and is returned. The final session is returned on a clean
    /// stop.
    pub async fn run<F>(self, mut on_touchdown: F) -> Result<Session>
    where
        F: FnMut(&Touchdown) -> Result<()>,
    {
        let Self {
            mut session,
            events_tx,
            mut events_rx,
            gravity_rx,
        } = self;

        let gravity = tokio::spawn(gravity_task(events_tx, gravity_rx));
        let mut queue = EventQueue::new();

        let result = loop {
            let Some(event) = events_rx.recv().await else {
                break Ok(());
            };
            queue.push(event);
            while let Ok(event) = events_rx.try_recv() {
                queue.push(event);
            }

            let report = queue.process_frame(&mut session);
            if let Err(e) = report.touchdowns.iter().try_for_each(&mut on_touchdown) {
                break Err(e);
            }
            if report.quit {
                break Ok(());
            }
        };

        gravity.abort();
        eprintln!(
            "[Engine] stopped: score {} lines {} pieces {}",
            session.score(),
            session.lines_cleared(),
            session.piece_id()
        );
        result.map(|()| session)
    }
}

fn ticker(ms: u32) -> Interval {
    let period = Duration::from_millis(ms.max(MIN_GRAVITY_MS) as u64);
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

async fn gravity_task(events: mpsc::Sender<HostEvent>, mut interval_rx: watch::Receiver<u32>) {
    let mut gravity = ticker(*interval_rx.borrow_and_update());

    loop {
        tokio::select! {
            _ = gravity.tick() => {
                if events.send(HostEvent::Gravity).await.is_err() {
                    break;
                }
            }
            changed = interval_rx.changed() => {
                // All handles dropped.
                if changed.is_err() {
                    break;
                }
                let ms = *interval_rx.borrow_and_update();
                gravity = ticker(ms);
                eprintln!("[Engine] gravity interval {} ms", ms);
            }
        }
    }
}
