//! Runs a [`CarouselController`] on its own task.
//!
//! The rendering layer pushes [`CarouselEvent`]s in and executes the
//! [`CarouselEffect`]s that come out. The task also owns the auto-advance
//! timer, measured from the last settle or user navigation.

use tokio::{
    sync::{mpsc, oneshot, watch},
    task::JoinHandle,
    time::{sleep_until, Instant},
};
use tracing::{debug, info};

use crate::{
    carousel::{CarouselController, CarouselEffect, CarouselEvent},
    error::CarouselError,
};

const EVENT_QUEUE_DEPTH: usize = 64;
const EFFECT_QUEUE_DEPTH: usize = 64;

pub struct CarouselHandle {
    events: mpsc::Sender<CarouselEvent>,
    active: watch::Receiver<usize>,
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<CarouselController>,
}

/// Starts the driver. The returned receiver yields effects in the order the
/// controller produced them; dropping it stops the driver.
pub fn spawn(controller: CarouselController) -> (CarouselHandle, mpsc::Receiver<CarouselEffect>) {
    let (events_tx, events_rx) = mpsc::channel(EVENT_QUEUE_DEPTH);
    let (effects_tx, effects_rx) = mpsc::channel(EFFECT_QUEUE_DEPTH);
    let (active_tx, active_rx) = watch::channel(controller.active_index());
    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let task = tokio::spawn(run(controller, events_rx, effects_tx, active_tx, shutdown_rx));

    (
        CarouselHandle {
            events: events_tx,
            active: active_rx,
            shutdown: Some(shutdown_tx),
            task,
        },
        effects_rx,
    )
}

impl CarouselHandle {
    pub async fn send(&self, event: CarouselEvent) -> Result<(), CarouselError> {
        self.events
            .send(event)
            .await
            .map_err(|_| CarouselError::Stopped)
    }

    /// Extra sender for an independent producer such as the visibility
    /// observer. The driver keeps running while the handle is alive.
    pub fn sender(&self) -> mpsc::Sender<CarouselEvent> {
        self.events.clone()
    }

    pub fn active_index(&self) -> usize {
        *self.active.borrow()
    }

    pub fn subscribe_active(&self) -> watch::Receiver<usize> {
        self.active.clone()
    }

    /// Stops the driver and its timer, returning the final controller state.
    pub async fn shutdown(mut self) -> Result<CarouselController, CarouselError> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        (&mut self.task)
            .await
            .map_err(|e| CarouselError::Driver(e.to_string()))
    }
}

async fn run(
    mut controller: CarouselController,
    mut events: mpsc::Receiver<CarouselEvent>,
    effects: mpsc::Sender<CarouselEffect>,
    active: watch::Sender<usize>,
    mut shutdown: oneshot::Receiver<()>,
) -> CarouselController {
    let interval = controller.config().auto_advance_interval;
    let mut deadline = Instant::now() + interval;
    info!(slides = controller.len(), ?interval, "carousel driver started");

    loop {
        let produced = tokio::select! {
            biased;
            _ = &mut shutdown => break,
            event = events.recv() => {
                let Some(event) = event else { break };
                let restarts_dwell = event.restarts_dwell();
                let produced = controller.apply(event);
                if restarts_dwell {
                    deadline = Instant::now() + interval;
                }
                produced
            }
            _ = sleep_until(deadline), if !controller.is_dragging() => {
                debug!("carousel auto-advance");
                deadline = Instant::now() + interval;
                controller.advance()
            }
        };

        for effect in produced {
            if let CarouselEffect::ActiveChanged { index } = effect {
                deadline = Instant::now() + interval;
                active.send_replace(index);
            }
            if effects.send(effect).await.is_err() {
                info!("carousel effect receiver dropped");
                return controller;
            }
        }
    }

    info!(active = controller.active_index(), "carousel driver stopped");
    controller
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod tests;
