use std::cell::Cell;

/// Session-wide playback controls, shared (behind an `Rc`) between the
/// control surface and the animation driver. All mutation goes through these
/// methods; everything runs on one thread, so plain `Cell`s suffice.
pub struct PlaybackState {
    is_playing: Cell<bool>,
    speed: Cell<f64>,
    reset_signal: Cell<u64>,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self {
            is_playing: Cell::new(false),
            speed: Cell::new(1.0),
            reset_signal: Cell::new(0),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing.get()
    }

    /// The speed multiplier. The range control keeps this within [0.5, 5.0],
    /// but nothing is enforced here; the driver clamps whatever it reads.
    pub fn speed(&self) -> f64 {
        self.speed.get()
    }

    /// Bumped on every reset. The driver treats any change as a hard
    /// cancel-and-rewind; this is the only channel carrying "jump back to
    /// the start".
    pub fn reset_signal(&self) -> u64 {
        self.reset_signal.get()
    }

    /// Flips play/pause and returns the new flag. Doesn't start or stop the
    /// frame loop by itself; the driver observes the flag on its next sync.
    pub fn toggle_play(&self) -> bool {
        let playing = !self.is_playing.get();
        self.is_playing.set(playing);
        playing
    }

    pub fn set_speed(&self, multiplier: f64) {
        self.speed.set(multiplier);
    }

    pub fn reset(&self) {
        self.is_playing.set(false);
        self.reset_signal.set(self.reset_signal.get() + 1);
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}
