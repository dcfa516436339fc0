//! Running a plan on a background thread.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};

use waymark_core::Grid;

use crate::error::PlanError;
use crate::planner::{Planner, PlanningResult};

type Outcome = Result<PlanningResult, PlanError>;

/// A planning run on its own thread, delivering exactly one result.
///
/// Inputs are moved into the thread; the result is moved back out once,
/// through [`try_result`](Self::try_result) or [`wait`](Self::wait). A
/// worker that panics reports [`PlanError::WorkerLost`].
pub struct PlanWorker {
    rx: Receiver<Outcome>,
    handle: Option<JoinHandle<()>>,
    delivered: bool,
}

impl PlanWorker {
    pub fn spawn(planner: Planner, world: Grid<String>, regions: Vec<Grid<String>>) -> Self {
        let (tx, rx) = mpsc::channel();
        let handle = thread::spawn(move || {
            let outcome = planner.plan(&world, &regions);
            // The receiver may already be gone; nobody is left to tell.
            let _ = tx.send(outcome);
        });
        Self::from_parts(rx, Some(handle))
    }

    /// Wrap the receiving end of a worker thread's result channel.
    pub(crate) fn from_parts(rx: Receiver<Outcome>, handle: Option<JoinHandle<()>>) -> Self {
        Self {
            rx,
            handle,
            delivered: false,
        }
    }

    /// Poll without blocking. Returns the result once, then `None` forever.
    pub fn try_result(&mut self) -> Option<Outcome> {
        if self.delivered {
            return None;
        }
        let outcome = match self.rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(PlanError::WorkerLost),
        };
        self.delivered = true;
        self.join();
        Some(outcome)
    }

    /// Block until the result arrives.
    ///
    /// Returns [`PlanError::WorkerLost`] if the result was already taken
    /// by [`try_result`](Self::try_result).
    pub fn wait(mut self) -> Outcome {
        if self.delivered {
            return Err(PlanError::WorkerLost);
        }
        let outcome = self.rx.recv().unwrap_or(Err(PlanError::WorkerLost));
        self.delivered = true;
        self.join();
        outcome
    }

    /// Whether the result has been handed over.
    pub fn is_delivered(&self) -> bool {
        self.delivered
    }

    fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("planning worker panicked");
            }
        }
    }
}
