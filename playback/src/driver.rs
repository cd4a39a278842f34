use std::cell::RefCell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

use model::{
    cumulative_lengths, sample_at_fraction, Coordinate, Route, RouteMetadata, TelemetrySample,
    TravelMode,
};

use crate::scheduler::{FrameHandle, FrameScheduler};
use crate::state::PlaybackState;

/// Compresses real-world travel time so a route animates within seconds.
pub const SIMULATION_SCALE: f64 = 25.0;
/// Even a zero-distance route gets a finite frame step.
pub const MIN_DURATION_MS: f64 = 100.0;
/// Floor applied to whatever multiplier the store holds, so a zero or
/// negative value can't blow up the duration.
pub const MIN_SPEED_MULTIPLIER: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No route.
    Idle,
    /// Route present, rewound to the start, not yet advancing.
    Ready,
    Running,
    /// Progress frozen; the session survives for a later resume.
    Paused,
    /// Progress reached 1. No more frames until an input changes or a reset.
    Completed,
}

/// Everything derived from one route and the pacing inputs. Rebuilt from
/// scratch whenever the route, metadata, travel mode, or speed multiplier
/// changes; samples from an old session never interleave with a new one.
struct AnimationSession {
    cumulative: Vec<f64>,
    total_length: f64,
    duration_ms: f64,
    /// Play time accumulated across play segments, in ms. Paused intervals
    /// never count towards travel.
    played_ms: f64,
}

impl AnimationSession {
    fn progress_at(&self, played_ms: f64) -> f64 {
        if self.total_length == 0.0 {
            // Nothing to travel; the first frame completes the animation
            return 1.0;
        }
        (played_ms / self.duration_ms).min(1.0)
    }
}

/// Animates a point along a route, emitting one telemetry sample per frame.
///
/// The driver never blocks and owns no event loop; it asks the injected
/// scheduler for one frame at a time and the host calls [`on_frame`] back.
/// At most one frame is ever in flight.
///
/// [`on_frame`]: AnimationDriver::on_frame
pub struct AnimationDriver {
    playback: Rc<PlaybackState>,
    scheduler: Rc<RefCell<dyn FrameScheduler>>,
    observer: Option<Box<dyn FnMut(TelemetrySample)>>,

    route: Option<Route>,
    metadata: Option<RouteMetadata>,
    travel_mode: TravelMode,

    session: Option<AnimationSession>,
    phase: Phase,
    position: Option<Coordinate>,
    pending_frame: Option<FrameHandle>,
    /// Timestamp of the first frame of the current play segment.
    segment_started_ms: Option<f64>,
    /// The multiplier the current session was built with.
    session_speed: f64,
    seen_reset_signal: u64,
}

impl AnimationDriver {
    pub fn new(playback: Rc<PlaybackState>, scheduler: Rc<RefCell<dyn FrameScheduler>>) -> Self {
        let seen_reset_signal = playback.reset_signal();
        let session_speed = playback.speed();
        Self {
            playback,
            scheduler,
            observer: None,
            route: None,
            metadata: None,
            travel_mode: TravelMode::Car,
            session: None,
            phase: Phase::Idle,
            position: None,
            pending_frame: None,
            segment_started_ms: None,
            session_speed,
            seen_reset_signal,
        }
    }

    /// Registers the telemetry observer, replacing any previous one.
    pub fn set_observer<F: FnMut(TelemetrySample) + 'static>(&mut self, observer: F) {
        self.observer = Some(Box::new(observer));
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_position(&self) -> Option<Coordinate> {
        self.position
    }

    /// The target animation duration, once a route is set.
    pub fn duration_ms(&self) -> Option<f64> {
        self.session.as_ref().map(|session| session.duration_ms)
    }

    /// Call whenever the route, its metadata, or the travel mode changes.
    /// Cancels any in-flight frame and rebuilds the session from scratch,
    /// rewound to the route's first point. (The speed multiplier is observed
    /// by [`sync`] instead, straight from the store.)
    ///
    /// [`sync`]: AnimationDriver::sync
    pub fn set_route(
        &mut self,
        route: Option<Route>,
        metadata: Option<RouteMetadata>,
        travel_mode: TravelMode,
    ) {
        self.route = route;
        self.metadata = metadata;
        self.travel_mode = travel_mode;
        self.rebuild_session();
    }

    /// Observes the playback store. Hosts call this after any control
    /// mutation (play/pause, speed, reset); redundant calls are harmless.
    pub fn sync(&mut self, now_ms: f64) {
        // Reset is a hard cancel-and-rewind, regardless of progress
        let reset_signal = self.playback.reset_signal();
        if reset_signal != self.seen_reset_signal {
            self.seen_reset_signal = reset_signal;
            self.handle_reset();
        }

        // A new multiplier invalidates the whole session
        if self.session.is_some() && self.playback.speed() != self.session_speed {
            self.rebuild_session();
        }

        let playing = self.playback.is_playing();
        match self.phase {
            Phase::Ready | Phase::Paused if playing => self.start_segment(),
            Phase::Running if !playing => self.pause_at(now_ms),
            _ => {}
        }
    }

    /// The scheduled frame firing. The host passes the handle it got from
    /// the scheduler plus the current time in ms. Stale handles (cancelled,
    /// or superseded by a newer schedule) are ignored, so two frame loops
    /// can never race and double-advance progress.
    pub fn on_frame(&mut self, handle: FrameHandle, now_ms: f64) {
        if self.pending_frame != Some(handle) {
            return;
        }
        self.pending_frame = None;
        if self.phase != Phase::Running {
            return;
        }
        let session = match &self.session {
            Some(session) => session,
            None => return,
        };

        let started = *self.segment_started_ms.get_or_insert(now_ms);
        let total_played = session.played_ms + (now_ms - started).max(0.0);
        let progress = session.progress_at(total_played);

        let route = self.route.as_ref().unwrap();
        let position = sample_at_fraction(route, &session.cumulative, progress);
        self.position = Some(position);

        let sample = TelemetrySample {
            position,
            elapsed_seconds: total_played / 1000.0,
            distance_meters: session.total_length * progress,
            speed_meters_per_second: session.total_length / (session.duration_ms / 1000.0),
        };
        self.emit(sample);

        if progress < 1.0 && self.playback.is_playing() {
            self.schedule_frame();
        } else if progress >= 1.0 {
            let session = self.session.as_mut().unwrap();
            session.played_ms = session.duration_ms;
            self.segment_started_ms = None;
            self.phase = Phase::Completed;
        } else {
            // The flag flipped since the last sync; freeze where we are
            let session = self.session.as_mut().unwrap();
            session.played_ms = total_played;
            self.segment_started_ms = None;
            self.phase = Phase::Paused;
        }
    }

    fn rebuild_session(&mut self) {
        self.cancel_pending_frame();
        self.segment_started_ms = None;
        self.session_speed = self.playback.speed();

        let route = match &self.route {
            Some(route) => route,
            None => {
                self.session = None;
                self.position = None;
                self.phase = Phase::Idle;
                return;
            }
        };

        let cumulative = cumulative_lengths(route);
        let total_length = *cumulative.last().unwrap();
        // The router's reported distance wins for pacing, but sampling still
        // needs the geometric table
        let distance_meters = self
            .metadata
            .as_ref()
            .and_then(|metadata| metadata.distance_meters)
            .unwrap_or(total_length);

        let reference_speed = self.travel_mode.reference_speed();
        let multiplier = self.session_speed.max(MIN_SPEED_MULTIPLIER);
        let duration_ms = ((distance_meters / reference_speed) * 100.0
            / (multiplier * SIMULATION_SCALE))
            .max(MIN_DURATION_MS);

        self.position = Some(route.first_point());
        self.session = Some(AnimationSession {
            cumulative,
            total_length,
            duration_ms,
            played_ms: 0.0,
        });
        self.phase = Phase::Ready;

        if self.playback.is_playing() {
            self.start_segment();
        }
    }

    fn handle_reset(&mut self) {
        self.cancel_pending_frame();
        self.segment_started_ms = None;
        if self.session.is_none() {
            // No route; nothing to rewind or report
            return;
        }
        self.session.as_mut().unwrap().played_ms = 0.0;
        let first = self.route.as_ref().unwrap().first_point();
        self.position = Some(first);
        self.phase = Phase::Ready;
        self.emit(TelemetrySample {
            position: first,
            elapsed_seconds: 0.0,
            distance_meters: 0.0,
            speed_meters_per_second: 0.0,
        });
    }

    fn start_segment(&mut self) {
        self.segment_started_ms = None;
        self.schedule_frame();
        self.phase = Phase::Running;
    }

    fn pause_at(&mut self, now_ms: f64) {
        self.cancel_pending_frame();
        if let Some(started) = self.segment_started_ms.take() {
            if let Some(session) = &mut self.session {
                session.played_ms += (now_ms - started).max(0.0);
            }
        }
        self.phase = Phase::Paused;
    }

    fn schedule_frame(&mut self) {
        self.cancel_pending_frame();
        self.pending_frame = Some(self.scheduler.borrow_mut().schedule_frame());
    }

    fn cancel_pending_frame(&mut self) {
        if let Some(handle) = self.pending_frame.take() {
            self.scheduler.borrow_mut().cancel_frame(handle);
        }
    }

    fn emit(&mut self, sample: TelemetrySample) {
        if let Some(observer) = &mut self.observer {
            // A misbehaving observer must not stall the frame loop
            if catch_unwind(AssertUnwindSafe(|| observer(sample))).is_err() {
                warn!("Telemetry observer panicked; continuing playback");
            }
        }
    }
}

impl Drop for AnimationDriver {
    fn drop(&mut self) {
        self.cancel_pending_frame();
    }
}
