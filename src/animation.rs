//! Timing and geometry for the card animations. Nothing here draws.

use rand::Rng;

pub const FLIP_STEPS: usize = 15;
pub const SCATTER_SECONDS: f64 = 1.2;
pub const CONVERGE_SECONDS: f64 = 1.2;
/// Each stacked card is offset this much from the one below it.
pub const STACK_OFFSET: f32 = 3.0;

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

pub fn lerp_point(a: (f32, f32), b: (f32, f32), t: f32) -> (f32, f32) {
    (lerp(a.0, b.0, t), lerp(a.1, b.1, t))
}

/// Horizontal squeeze for `step` of a flip: 1 at both ends, 0 in the middle.
pub fn squeeze_factor(step: usize, steps: usize) -> f32 {
    let half = steps as f32 / 2.0;
    ((step as f32 - half) / half).abs()
}

/// The face that was showing stays visible until the card is edge-on.
pub fn shows_old_face(step: usize, steps: usize) -> bool {
    (step as f32) < steps as f32 / 2.0
}

/// A squeeze-and-turn animation advanced one step per frame.
#[derive(Clone, Debug)]
pub struct FlipAnimation {
    step: usize,
    steps: usize,
}

impl Default for FlipAnimation {
    fn default() -> Self {
        Self {
            step: 0,
            steps: FLIP_STEPS,
        }
    }
}

impl FlipAnimation {
    pub fn width_factor(&self) -> f32 {
        squeeze_factor(self.step, self.steps)
    }

    pub fn shows_old_face(&self) -> bool {
        shows_old_face(self.step, self.steps)
    }

    /// Fraction of the animation done, `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        self.step as f32 / (self.steps - 1) as f32
    }

    /// Advances one frame. Returns `true` once the last frame has been shown.
    pub fn advance(&mut self) -> bool {
        self.step += 1;
        self.step >= self.steps
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShufflePhase {
    Scatter,
    Converge,
    Done,
}

/// Cards fly apart from a stacked pile, the order changes, and they fly back.
#[derive(Clone, Debug)]
pub struct ShuffleAnimation {
    stacked: Vec<(f32, f32)>,
    scattered: Vec<(f32, f32)>,
}

impl ShuffleAnimation {
    pub fn new(card_count: usize, base: (f32, f32), rng: &mut impl Rng) -> Self {
        let stacked: Vec<(f32, f32)> = (0..card_count)
            .map(|i| stack_position(base, i))
            .collect();
        let scattered = stacked
            .iter()
            .map(|&(x, y)| {
                (
                    x + rng.gen_range(-200.0_f32..=200.0),
                    y + rng.gen_range(-150.0_f32..=150.0),
                )
            })
            .collect();
        Self { stacked, scattered }
    }

    pub fn phase(elapsed: f64) -> ShufflePhase {
        if elapsed < SCATTER_SECONDS {
            ShufflePhase::Scatter
        } else if elapsed < SCATTER_SECONDS + CONVERGE_SECONDS {
            ShufflePhase::Converge
        } else {
            ShufflePhase::Done
        }
    }

    /// Position of the card drawn in slot `index` after `elapsed` seconds.
    pub fn position(&self, index: usize, elapsed: f64) -> (f32, f32) {
        let (Some(&stacked), Some(&scattered)) =
            (self.stacked.get(index), self.scattered.get(index))
        else {
            return (0.0, 0.0);
        };
        match Self::phase(elapsed) {
            ShufflePhase::Scatter => {
                lerp_point(stacked, scattered, (elapsed / SCATTER_SECONDS) as f32)
            }
            ShufflePhase::Converge => {
                let t = ((elapsed - SCATTER_SECONDS) / CONVERGE_SECONDS) as f32;
                lerp_point(scattered, stacked, t)
            }
            ShufflePhase::Done => stacked,
        }
    }
}

pub fn stack_position(base: (f32, f32), index: usize) -> (f32, f32) {
    let offset = index as f32 * STACK_OFFSET;
    (base.0 + offset, base.1 + offset)
}
