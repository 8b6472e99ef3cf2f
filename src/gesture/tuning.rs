//! Tunable gesture thresholds
//!
//! Detection from noisy per-frame geometry is a filtering problem; every
//! threshold and window here is configuration, not contract. Defaults are
//! tuned for MediaPipe hand/face output at webcam framerates.

/// All classifier thresholds in one place, adjustable at runtime via the bridge
#[derive(Clone, Copy, Debug)]
pub struct GestureTuning {
    /// Exponential smoothing factor for the pointer (0 = frozen, 1 = raw)
    pub pointer_alpha: f32,
    /// Thumb tip to index tip distance (normalized) below which a pinch holds
    pub pinch_dist: f32,
    /// A pinch-start this close (ms) after the last release is a double pinch
    pub double_pinch_window_ms: f64,
    /// Mean fingertip-to-wrist distance below this enters the fist state
    pub fist_enter: f32,
    /// Mean fingertip-to-wrist distance above this leaves the fist state.
    /// The band between `fist_enter` and `palm_exit` is hysteresis.
    pub palm_exit: f32,
    /// Mouth height / face height above which the mouth counts as open
    pub mouth_open: f32,
    /// Mouth width/height ratio below which the mouth shape counts as a pout
    pub pout_ratio: f32,
    /// Mouth width / face height below which the mouth counts as narrow
    pub pout_width: f32,
    /// Wind keeps blowing this long (ms) after the last positive detection
    pub wind_sustain_ms: f64,
    /// Consecutive handless frames tolerated before the pointer is cleared
    pub missing_hand_frames: u32,
}

impl Default for GestureTuning {
    fn default() -> Self {
        Self {
            pointer_alpha: 0.35,
            pinch_dist: 0.06,
            double_pinch_window_ms: 400.0,
            fist_enter: 0.18,
            palm_exit: 0.28,
            mouth_open: 0.06,
            pout_ratio: 1.6,
            pout_width: 0.18,
            wind_sustain_ms: 500.0,
            missing_hand_frames: 10,
        }
    }
}
