//! The single processing task through which every display mutation flows.

use std::time::Instant;

use log::{debug, info};
use tokio::sync::mpsc;

use crate::error::RouteError;
use crate::router::{EventRouter, Transition};
use crate::surface::{DisplaySurface, GlyphLookup};

#[derive(Debug)]
enum GatewayEvent {
    Input {
        transition: Transition,
        received_at: Instant,
    },
    Shutdown,
}

/// Current time on the runtime clock, as a std instant.
pub fn now() -> Instant {
    tokio::time::Instant::now().into_std()
}

/// Posts transitions onto the gateway queue from any thread.
#[derive(Debug, Clone)]
pub struct GatewayHandle {
    tx: mpsc::UnboundedSender<GatewayEvent>,
}

impl GatewayHandle {
    /// Queues `transition`, stamped with its arrival time. Returns `false`
    /// once the gateway has stopped.
    pub fn send(&self, transition: Transition) -> bool {
        self.tx
            .send(GatewayEvent::Input {
                transition,
                received_at: now(),
            })
            .is_ok()
    }

    pub fn shutdown(&self) {
        let _ = self.tx.send(GatewayEvent::Shutdown);
    }
}

pub struct Gateway<G, S>
where
    G: GlyphLookup,
    S: DisplaySurface<G::Glyph>,
{
    router: EventRouter<G, S>,
    rx: mpsc::UnboundedReceiver<GatewayEvent>,
}

impl<G, S> Gateway<G, S>
where
    G: GlyphLookup,
    S: DisplaySurface<G::Glyph>,
{
    pub fn new(router: EventRouter<G, S>) -> (Self, GatewayHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { router, rx }, GatewayHandle { tx })
    }

    pub fn router(&self) -> &EventRouter<G, S> {
        &self.router
    }

    /// Processes inputs and release deadlines in time order until shutdown
    /// or until every handle is dropped. A routing error stops the loop.
    pub async fn run(&mut self) -> Result<(), RouteError> {
        loop {
            let deadline = self.router.next_deadline();

            tokio::select! {
                biased;

                event = self.rx.recv() => match event {
                    Some(GatewayEvent::Input { transition, received_at }) => {
                        // Releases that expired before this input arrived go first.
                        self.router.fire_due(received_at)?;
                        self.router.update(&transition, received_at)?;
                    }
                    Some(GatewayEvent::Shutdown) => {
                        info!("Gateway shutdown requested");
                        return Ok(());
                    }
                    None => {
                        debug!("All gateway handles dropped");
                        return Ok(());
                    }
                },
                _ = sleep_until(deadline) => {
                    self.router.fire_due(now())?;
                }
            }
        }
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}
