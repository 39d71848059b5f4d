/// Frame loop - host-driven animation frame scheduling
///
/// The host owns the timing: a `FrameScheduler` takes one callback per
/// requested frame and invokes it later with a timestamp in milliseconds.
/// `start_frame_loop` requests the first frame; each callback renders and,
/// in continuous mode, requests the next one.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use crate::error::Result;
use crate::graphics_context::GraphicsContext;
use crate::renderer::RenderContext;
use crate::{engine_debug, engine_error};

const LOG_SOURCE: &str = "triangle::frame_loop";

/// One-shot animation frame callback (argument: timestamp in ms)
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// What the loop does after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    /// Request another frame
    Continue,
    /// Do not request another frame
    Stop,
}

/// Host scheduler collaborator (`requestAnimationFrame`)
pub trait FrameScheduler {
    /// Run `callback` once on the next frame
    fn request_frame(&self, callback: FrameCallback) -> Result<()>;
}

/// Request the first frame for `context`
///
/// Returns once the request is registered; rendering happens in the
/// scheduler's callbacks.
pub fn start_frame_loop<C, S>(context: Rc<RefCell<RenderContext<C>>>, scheduler: S) -> Result<()>
where
    C: GraphicsContext + 'static,
    S: FrameScheduler + Clone + 'static,
{
    engine_debug!(LOG_SOURCE, "Requesting first animation frame");
    request_next(context, scheduler)
}

fn request_next<C, S>(context: Rc<RefCell<RenderContext<C>>>, scheduler: S) -> Result<()>
where
    C: GraphicsContext + 'static,
    S: FrameScheduler + Clone + 'static,
{
    let next_scheduler = scheduler.clone();
    scheduler.request_frame(Box::new(move |timestamp| {
        let control = context.borrow_mut().on_animation_frame(timestamp);
        if control == FrameControl::Continue {
            if let Err(error) = request_next(context, next_scheduler) {
                engine_error!(LOG_SOURCE, "Failed to request next frame: {}", error);
            }
        }
    }))
}

// ============================================================================
// Manual scheduler
// ============================================================================

/// Scheduler that queues callbacks until fired by hand
///
/// Clones share the same queue, so a callback may request the next frame
/// while being fired.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<VecDeque<FrameCallback>>>,
    requests: Rc<RefCell<u64>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callbacks waiting to be fired
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Total `request_frame` calls so far
    pub fn requests(&self) -> u64 {
        *self.requests.borrow()
    }

    /// Fire the oldest pending callback; `false` if none was queued
    pub fn fire_next(&self, timestamp: f64) -> bool {
        let callback = self.queue.borrow_mut().pop_front();
        match callback {
            Some(callback) => {
                callback(timestamp);
                true
            }
            None => false,
        }
    }

    /// Fire callbacks until the queue is empty or `max_frames` have run
    ///
    /// Timestamps advance by `frame_ms` from `start_ms`. Returns the number
    /// of callbacks fired.
    pub fn run(&self, max_frames: usize, start_ms: f64, frame_ms: f64) -> usize {
        let mut fired = 0;
        while fired < max_frames && self.fire_next(start_ms + fired as f64 * frame_ms) {
            fired += 1;
        }
        fired
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Result<()> {
        *self.requests.borrow_mut() += 1;
        self.queue.borrow_mut().push_back(callback);
        Ok(())
    }
}

#[cfg(test)]
#[path = "frame_loop_tests.rs"]
mod tests;
