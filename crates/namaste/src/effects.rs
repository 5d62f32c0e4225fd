//! Decorative celebration after a win.
//!
//! Purely cosmetic: positions are a function of the frame counter and the
//! drawing area, so nothing here feeds back into game state.

use tracing::debug;

/// Glyphs that float up the screen.
pub const EMOJIS: [&str; 5] = ["🎉", "🎊", "🏆", "⭐", "🎯"];

/// Number of floating glyphs per celebration.
const PARTICLES: u32 = 15;
/// Frames between successive launches.
const LAUNCH_STAGGER: u32 = 2;
/// Frames a glyph stays on screen.
const FLIGHT_FRAMES: u32 = 30;

/// One glyph to draw this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Particle {
    /// Column.
    pub x: u16,
    /// Row.
    pub y: u16,
    /// What to draw.
    pub glyph: &'static str,
}

/// A running burst of floating emoji.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Celebration {
    frame: u32,
}

impl Celebration {
    /// Starts a new burst.
    pub fn new() -> Self {
        debug!("Celebration started");
        Self { frame: 0 }
    }

    /// Advances one frame; returns false once every glyph has left.
    pub fn tick(&mut self) -> bool {
        self.frame += 1;
        !self.is_finished()
    }

    /// True after the last glyph's flight ends.
    pub fn is_finished(&self) -> bool {
        self.frame >= (PARTICLES - 1) * LAUNCH_STAGGER + FLIGHT_FRAMES
    }

    /// Glyphs visible in a `width` x `height` area this frame.
    pub fn particles(&self, width: u16, height: u16) -> Vec<Particle> {
        if width == 0 || height == 0 {
            return Vec::new();
        }
        (0..PARTICLES)
            .filter_map(|i| {
                let launched = i * LAUNCH_STAGGER;
                let age = self.frame.checked_sub(launched)?;
                if age >= FLIGHT_FRAMES {
                    return None;
                }
                let rise = age * u32::from(height) / FLIGHT_FRAMES;
                let y = u32::from(height - 1).checked_sub(rise)?;
                // Spread launches across the width with a fixed stride.
                let x = (i * 37 + 11) % u32::from(width.saturating_sub(1).max(1));
                Some(Particle {
                    x: x as u16,
                    y: y as u16,
                    glyph: EMOJIS[(i as usize) % EMOJIS.len()],
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_launches_one_glyph_at_bottom() {
        let celebration = Celebration::new();
        let particles = celebration.particles(80, 24);
        assert_eq!(particles.len(), 1);
        assert_eq!(particles[0].y, 23);
        assert_eq!(particles[0].glyph, "🎉");
    }

    #[test]
    fn test_particles_stay_inside_area() {
        let mut celebration = Celebration::new();
        while celebration.tick() {
            for p in celebration.particles(20, 10) {
                assert!(p.x < 20);
                assert!(p.y < 10);
            }
        }
        assert!(celebration.is_finished());
        assert!(celebration.particles(20, 10).is_empty());
    }

    #[test]
    fn test_empty_area_draws_nothing() {
        assert!(Celebration::new().particles(0, 10).is_empty());
    }
}
