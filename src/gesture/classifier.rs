//! Gesture classifier - one landmark frame in, one event bundle out
//!
//! Consumes the current hand/face landmark sets plus its own carried state
//! (smoothed pointer, pinch/fist trackers, wind sustain) and emits discrete
//! gesture events. Performs no particle mutation.

use super::tuning::GestureTuning;

// ============================================================================
// LANDMARK INDICES (MediaPipe Hands - 21 total)
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;
pub const PINKY_TIP: usize = 20;

/// Fingertips used for the fist / palm-open measurement (thumb excluded)
const GRIP_TIPS: [usize; 4] = [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

// ============================================================================
// FACE SLOT INDICES (packed order of the 6 tracked face-mesh points)
// ============================================================================

/// Face-mesh 13
pub const FACE_UPPER_LIP: usize = 0;
/// Face-mesh 14
pub const FACE_LOWER_LIP: usize = 1;
/// Face-mesh 61
pub const FACE_MOUTH_LEFT: usize = 2;
/// Face-mesh 291
pub const FACE_MOUTH_RIGHT: usize = 3;
/// Face-mesh 152
pub const FACE_CHIN: usize = 4;
/// Face-mesh 6
pub const FACE_NOSE_BRIDGE: usize = 5;

/// Width/height ratio reported when the mouth height is degenerate.
/// Guarantees the pout test evaluates to false instead of dividing by zero.
const DEGENERATE_RATIO: f32 = 999.0;

// ============================================================================
// FRAME INPUT / OUTPUT
// ============================================================================

/// One frame of upstream detection results, normalized [0,1] camera space
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    pub hand: Option<[(f32, f32); 21]>,
    pub face: Option<[(f32, f32); 6]>,
    /// Monotonically increasing capture timestamp
    pub timestamp_ms: f64,
}

/// Event/state bundle for one frame, consumed by the stroke controller
/// and the shape stamper. Positions are mirrored screen space.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureFrame {
    /// Smoothed pointer (index fingertip), held through brief dropouts
    pub pointer: Option<(f32, f32)>,
    /// Pointer from the previous frame, for path interpolation
    pub prev_pointer: Option<(f32, f32)>,
    pub pinch_start: bool,
    pub pinch_held: bool,
    pub pinch_release: bool,
    /// Pinch-start within the double-pinch window of the last release
    pub double_pinch: bool,
    pub fist_start: bool,
    pub fist_held: bool,
    /// Hand opened past the hysteresis band after a held fist
    pub palm_open: bool,
    /// Blow detected this frame or within the sustain window
    pub wind_active: bool,
    /// Wrist position, target for the gather gesture
    pub wrist: Option<(f32, f32)>,
}

// ============================================================================
// CLASSIFIER
// ============================================================================

/// Stateful per-frame gesture classifier
pub struct GestureClassifier {
    tuning: GestureTuning,

    // Carried tracking state (reset on tracking loss or canvas clear)
    pointer: Option<(f32, f32)>,
    missing_frames: u32,
    pinch: bool,
    last_pinch_release_ms: f64,
    fist: bool,
    wind_until_ms: f64,
}

impl GestureClassifier {
    pub fn new(tuning: GestureTuning) -> Self {
        Self {
            tuning,
            pointer: None,
            missing_frames: 0,
            pinch: false,
            last_pinch_release_ms: f64::NEG_INFINITY,
            fist: false,
            wind_until_ms: f64::NEG_INFINITY,
        }
    }

    pub fn tuning_mut(&mut self) -> &mut GestureTuning {
        &mut self.tuning
    }

    /// Drop all carried state (tracking lost or canvas cleared)
    pub fn reset(&mut self) {
        self.pointer = None;
        self.missing_frames = 0;
        self.pinch = false;
        self.last_pinch_release_ms = f64::NEG_INFINITY;
        self.fist = false;
        self.wind_until_ms = f64::NEG_INFINITY;
    }

    /// Classify one frame. `viewport` maps normalized camera space to
    /// mirrored screen space.
    pub fn classify(&mut self, input: &FrameInput, viewport: (f32, f32)) -> GestureFrame {
        let mut out = GestureFrame {
            prev_pointer: self.pointer,
            ..GestureFrame::default()
        };
        let t = input.timestamp_ms;

        match input.hand {
            Some(hand) => {
                self.missing_frames = 0;
                self.classify_hand(&hand, t, viewport, &mut out);
            }
            None => {
                self.missing_frames += 1;
                if self.missing_frames > self.tuning.missing_hand_frames {
                    // Tracking genuinely lost: end any held pinch and clear
                    if self.pinch {
                        out.pinch_release = true;
                        self.pinch = false;
                    }
                    self.fist = false;
                    self.pointer = None;
                } else {
                    // Brief dropout: hold the pointer and keep gestures alive
                    out.pointer = self.pointer;
                    out.pinch_held = self.pinch;
                    out.fist_held = self.fist;
                }
            }
        }

        // Facial wind, sustained past the last positive detection
        if let Some(face) = input.face {
            if is_blow(&face, &self.tuning) {
                self.wind_until_ms = t + self.tuning.wind_sustain_ms;
            }
        }
        out.wind_active = t < self.wind_until_ms;

        out
    }

    fn classify_hand(
        &mut self,
        hand: &[(f32, f32); 21],
        t: f64,
        viewport: (f32, f32),
        out: &mut GestureFrame,
    ) {
        // Pointer: mirrored index tip, exponentially smoothed
        let raw = mirror(hand[INDEX_TIP], viewport);
        let smoothed = match self.pointer {
            Some((px, py)) => (
                px + self.tuning.pointer_alpha * (raw.0 - px),
                py + self.tuning.pointer_alpha * (raw.1 - py),
            ),
            None => raw,
        };
        self.pointer = Some(smoothed);
        out.pointer = Some(smoothed);
        out.wrist = Some(mirror(hand[WRIST], viewport));

        // Pinch with double-pinch timing
        let pinching = dist(hand[THUMB_TIP], hand[INDEX_TIP]) < self.tuning.pinch_dist;
        match (self.pinch, pinching) {
            (false, true) => {
                out.pinch_start = true;
                out.pinch_held = true;
                out.double_pinch =
                    t - self.last_pinch_release_ms <= self.tuning.double_pinch_window_ms;
            }
            (true, true) => out.pinch_held = true,
            (true, false) => {
                out.pinch_release = true;
                self.last_pinch_release_ms = t;
            }
            (false, false) => {}
        }
        self.pinch = pinching;

        // Fist / palm-open with a hysteresis band between the thresholds
        let grip = mean_grip_distance(hand);
        if !self.fist && grip < self.tuning.fist_enter {
            self.fist = true;
            out.fist_start = true;
        } else if self.fist && grip > self.tuning.palm_exit {
            self.fist = false;
            out.palm_open = true;
        }
        out.fist_held = self.fist;
    }
}

// ============================================================================
// GEOMETRY
// ============================================================================

fn dist(a: (f32, f32), b: (f32, f32)) -> f32 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}

/// Normalized camera x flips left-right to behave like a mirror
fn mirror(p: (f32, f32), viewport: (f32, f32)) -> (f32, f32) {
    ((1.0 - p.0) * viewport.0, p.1 * viewport.1)
}

fn mean_grip_distance(hand: &[(f32, f32); 21]) -> f32 {
    let wrist = hand[WRIST];
    GRIP_TIPS.iter().map(|&i| dist(hand[i], wrist)).sum::<f32>() / GRIP_TIPS.len() as f32
}

/// Blow detection: the mouth must be open *and* pouted at the same time,
/// which separates blowing from talking or smiling wide.
fn is_blow(face: &[(f32, f32); 6], tuning: &GestureTuning) -> bool {
    // Face height proxy: twice the nose-bridge-to-chin distance
    let face_h = 2.0 * dist(face[FACE_NOSE_BRIDGE], face[FACE_CHIN]);
    if face_h < 1e-4 {
        return false;
    }

    let mouth_h = dist(face[FACE_UPPER_LIP], face[FACE_LOWER_LIP]);
    let mouth_w = dist(face[FACE_MOUTH_LEFT], face[FACE_MOUTH_RIGHT]);

    let openness = mouth_h / face_h;
    let ratio = if mouth_h < 1e-4 {
        DEGENERATE_RATIO
    } else {
        mouth_w / mouth_h
    };

    openness > tuning.mouth_open
        && ratio < tuning.pout_ratio
        && mouth_w / face_h < tuning.pout_width
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> (f32, f32) {
        (800.0, 600.0)
    }

    /// Synthetic hand: wrist at center, four fingertips `grip` away,
    /// thumb tip `pinch_gap` from the index tip.
    fn hand(grip: f32, pinch_gap: f32) -> [(f32, f32); 21] {
        let mut h = [(0.5, 0.5); 21];
        h[INDEX_TIP] = (0.5, 0.5 - grip);
        h[MIDDLE_TIP] = (0.5 + grip, 0.5);
        h[RING_TIP] = (0.5 - grip, 0.5);
        h[PINKY_TIP] = (0.5, 0.5 + grip);
        h[THUMB_TIP] = (0.5, 0.5 - grip + pinch_gap);
        h
    }

    fn frame(hand: Option<[(f32, f32); 21]>, t: f64) -> FrameInput {
        FrameInput {
            hand,
            face: None,
            timestamp_ms: t,
        }
    }

    /// Synthetic face with the given mouth box on a face of height ~0.5
    fn face(mouth_w: f32, mouth_h: f32) -> [(f32, f32); 6] {
        let mut f = [(0.5, 0.5); 6];
        f[FACE_NOSE_BRIDGE] = (0.5, 0.4);
        f[FACE_CHIN] = (0.5, 0.65);
        f[FACE_UPPER_LIP] = (0.5, 0.55 - mouth_h / 2.0);
        f[FACE_LOWER_LIP] = (0.5, 0.55 + mouth_h / 2.0);
        f[FACE_MOUTH_LEFT] = (0.5 - mouth_w / 2.0, 0.55);
        f[FACE_MOUTH_RIGHT] = (0.5 + mouth_w / 2.0, 0.55);
        f
    }

    #[test]
    fn pinch_start_hold_release() {
        let mut c = GestureClassifier::new(GestureTuning::default());
        let ev = c.classify(&frame(Some(hand(0.3, 0.01)), 0.0), viewport());
        assert!(ev.pinch_start && ev.pinch_held && !ev.pinch_release);

        let ev = c.classify(&frame(Some(hand(0.3, 0.01)), 16.0), viewport());
        assert!(!ev.pinch_start && ev.pinch_held);

        let ev = c.classify(&frame(Some(hand(0.3, 0.2)), 32.0), viewport());
        assert!(ev.pinch_release && !ev.pinch_held);
    }

    #[test]
    fn double_pinch_inside_window_only() {
        let mut c = GestureClassifier::new(GestureTuning::default());
        c.classify(&frame(Some(hand(0.3, 0.01)), 0.0), viewport());
        c.classify(&frame(Some(hand(0.3, 0.2)), 100.0), viewport()); // release

        let ev = c.classify(&frame(Some(hand(0.3, 0.01)), 300.0), viewport());
        assert!(ev.double_pinch, "re-pinch 200ms after release");

        c.classify(&frame(Some(hand(0.3, 0.2)), 320.0), viewport());
        let ev = c.classify(&frame(Some(hand(0.3, 0.01)), 900.0), viewport());
        assert!(!ev.double_pinch, "re-pinch past the 400ms window");
    }

    #[test]
    fn fist_hysteresis_band_is_quiet() {
        let mut c = GestureClassifier::new(GestureTuning::default());

        let ev = c.classify(&frame(Some(hand(0.1, 0.2)), 0.0), viewport());
        assert!(ev.fist_start && ev.fist_held);

        // In the band between fist_enter and palm_exit: no transition
        let ev = c.classify(&frame(Some(hand(0.22, 0.2)), 16.0), viewport());
        assert!(ev.fist_held && !ev.fist_start && !ev.palm_open);

        let ev = c.classify(&frame(Some(hand(0.35, 0.2)), 32.0), viewport());
        assert!(ev.palm_open && !ev.fist_held);

        // Back into the band from open: still no fist
        let ev = c.classify(&frame(Some(hand(0.22, 0.2)), 48.0), viewport());
        assert!(!ev.fist_held && !ev.fist_start);
    }

    #[test]
    fn pointer_survives_brief_dropout_then_clears() {
        let mut c = GestureClassifier::new(GestureTuning::default());
        c.classify(&frame(Some(hand(0.3, 0.01)), 0.0), viewport());

        for i in 0..10 {
            let ev = c.classify(&frame(None, 16.0 * (i + 1) as f64), viewport());
            assert!(ev.pointer.is_some(), "pointer held on dropout frame {}", i);
            assert!(ev.pinch_held);
        }

        let ev = c.classify(&frame(None, 16.0 * 11.0), viewport());
        assert!(ev.pointer.is_none());
        assert!(ev.pinch_release, "held pinch ends when tracking is lost");
    }

    #[test]
    fn pointer_is_smoothed_and_mirrored() {
        let mut c = GestureClassifier::new(GestureTuning::default());
        let mut h = hand(0.3, 0.2);
        h[INDEX_TIP] = (0.0, 0.0);
        let ev = c.classify(&frame(Some(h), 0.0), viewport());
        // First frame uses the raw position: x mirrored to the right edge
        assert_eq!(ev.pointer, Some((800.0, 0.0)));

        h[INDEX_TIP] = (1.0, 1.0);
        let ev = c.classify(&frame(Some(h), 16.0), viewport());
        let (x, y) = ev.pointer.unwrap();
        // Moves 35% of the way toward the (mirrored) raw target
        assert!((x - 800.0 * 0.65).abs() < 1e-3);
        assert!((y - 600.0 * 0.35).abs() < 1e-3);
    }

    #[test]
    fn wind_sustains_past_last_detection() {
        let mut c = GestureClassifier::new(GestureTuning::default());
        let blow = face(0.05, 0.04); // narrow and open: openness 0.08, ratio 1.25
        let input = FrameInput {
            hand: None,
            face: Some(blow),
            timestamp_ms: 1000.0,
        };
        assert!(c.classify(&input, viewport()).wind_active);

        let quiet = FrameInput {
            hand: None,
            face: Some(face(0.12, 0.001)),
            timestamp_ms: 1400.0,
        };
        assert!(c.classify(&quiet, viewport()).wind_active, "inside sustain");

        let late = FrameInput {
            hand: None,
            face: Some(face(0.12, 0.001)),
            timestamp_ms: 1600.0,
        };
        assert!(!c.classify(&late, viewport()).wind_active, "sustain expired");
    }

    #[test]
    fn talking_wide_is_not_a_blow() {
        let t = GestureTuning::default();
        // Open but wide: ratio 3.0 fails the pout test
        assert!(!is_blow(&face(0.15, 0.05), &t));
        // Closed mouth: degenerate height, sentinel ratio, never a blow
        assert!(!is_blow(&face(0.12, 0.0), &t));
        // Open and pouted
        assert!(is_blow(&face(0.05, 0.04), &t));
    }
}
