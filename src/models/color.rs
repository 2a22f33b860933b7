//! Display colours for cards. Purely cosmetic, the study logic never reads them.
use rand::Rng;
use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const KNOWN_GREEN: Rgb = Rgb::new(0, 200, 0);
pub const UNKNOWN_RED: Rgb = Rgb::new(200, 0, 0);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Bright yellow-green tones make white card text unreadable.
    pub fn is_too_bright(&self) -> bool {
        self.r > 130 && self.g > 130 && self.b < 100
    }

    /// Rotates the hue by `turns` of a full circle, keeping saturation and value.
    pub fn rotate_hue(&self, turns: f32) -> Self {
        let (h, s, v) = rgb_to_hsv(*self);
        let h = (h + turns).rem_euclid(1.0);
        hsv_to_rgb(h, s, v)
    }
}

/// Draws a random colour with every channel in 50..=255, skipping the too-bright region.
pub fn random_card_color(rng: &mut impl Rng) -> Rgb {
    loop {
        let color = Rgb::new(
            rng.gen_range(50..=255),
            rng.gen_range(50..=255),
            rng.gen_range(50..=255),
        );
        if !color.is_too_bright() {
            return color;
        }
    }
}

/// Draws `count` pairwise distinct card colours.
pub fn distinct_card_colors(count: usize, rng: &mut impl Rng) -> Vec<Rgb> {
    let mut seen = HashSet::with_capacity(count);
    let mut colors = Vec::with_capacity(count);
    while colors.len() < count {
        let color = random_card_color(rng);
        if seen.insert(color) {
            colors.push(color);
        }
    }
    colors
}

fn rgb_to_hsv(color: Rgb) -> (f32, f32, f32) {
    let r = f32::from(color.r) / 255.0;
    let g = f32::from(color.g) / 255.0;
    let b = f32::from(color.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    if max == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    let s = delta / max;
    if delta == 0.0 {
        return (0.0, s, max);
    }

    let h = if max == r {
        ((g - b) / delta) / 6.0
    } else if max == g {
        (2.0 + (b - r) / delta) / 6.0
    } else {
        (4.0 + (r - g) / delta) / 6.0
    };
    (h.rem_euclid(1.0), s, max)
}

fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    let to_byte = |x: f32| (x * 255.0).round().clamp(0.0, 255.0) as u8;
    if s == 0.0 {
        let c = to_byte(v);
        return Rgb::new(c, c, c);
    }

    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match (sector as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb::new(to_byte(r), to_byte(g), to_byte(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn close(a: Rgb, b: Rgb) -> bool {
        let d = |x: u8, y: u8| (i16::from(x) - i16::from(y)).abs();
        d(a.r, b.r) <= 2 && d(a.g, b.g) <= 2 && d(a.b, b.b) <= 2
    }

    #[test]
    fn test_random_colors_avoid_bright_region() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let c = random_card_color(&mut rng);
            assert!(!c.is_too_bright());
            assert!(c.r >= 50 && c.g >= 50 && c.b >= 50);
        }
    }

    #[test]
    fn test_distinct_colors() {
        let mut rng = StdRng::seed_from_u64(1);
        let colors = distinct_card_colors(40, &mut rng);
        let unique: HashSet<_> = colors.iter().collect();
        assert_eq!(unique.len(), 40);
    }

    #[test]
    fn test_half_turn_twice_restores_color() {
        let original = Rgb::new(200, 80, 30);
        let rotated = original.rotate_hue(0.5);
        assert_ne!(rotated, original);
        assert!(close(rotated.rotate_hue(0.5), original));
    }

    #[test]
    fn test_rotate_grey_is_stable() {
        assert_eq!(BLACK.rotate_hue(0.5), BLACK);
        assert_eq!(Rgb::new(90, 90, 90).rotate_hue(0.3), Rgb::new(90, 90, 90));
    }
}
