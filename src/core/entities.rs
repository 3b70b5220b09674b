use super::constants::*;
use glam::Vec2;
use smallvec::SmallVec;
use std::fmt;

/// Straight-alpha colour rendered as a CSS `rgba()` string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(rgb: [u8; 3], a: f32) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a,
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Drawable area in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub pulse: f32,
    pub is_flag: bool,
    /// Pointer proximity in [0, 1]; 0 when the pointer is absent or beyond
    /// the influence radius. Refreshed by every update.
    pub influence: f32,
}

impl Node {
    /// Advance by one frame and reflect off the viewport edges.
    ///
    /// Each axis flips at most once per call, so a node that ends up outside
    /// the bounds heads back in on the next frame.
    pub fn step(&mut self, viewport: Viewport) {
        self.pos += self.vel;
        if self.pos.x < 0.0 || self.pos.x > viewport.width {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > viewport.height {
            self.vel.y = -self.vel.y;
        }
        self.pulse += PULSE_STEP;
    }

    /// Linear falloff from 1 at the pointer to 0 at the influence radius.
    pub fn refresh_influence(&mut self, pointer: Option<Vec2>) {
        self.influence = match pointer {
            Some(p) => {
                let d = self.pos.distance(p);
                if d < INFLUENCE_RADIUS {
                    1.0 - d / INFLUENCE_RADIUS
                } else {
                    0.0
                }
            }
            None => 0.0,
        };
    }

    pub fn render_radius(&self) -> f32 {
        let amplitude = if self.is_flag {
            FLAG_PULSE_AMPLITUDE
        } else {
            PULSE_AMPLITUDE
        };
        let pulsed = self.radius + self.pulse.sin() * amplitude;
        (pulsed * (1.0 + self.influence * INFLUENCE_SCALE)).max(NODE_RADIUS_FLOOR)
    }

    pub fn glow(&self) -> f32 {
        if self.influence > 0.0 {
            INFLUENCE_GLOW_BASE + self.influence * INFLUENCE_GLOW_SPAN
        } else if self.is_flag {
            FLAG_GLOW
        } else {
            NODE_GLOW
        }
    }

    pub fn color(&self) -> Rgba {
        if self.is_flag {
            Rgba::new(RED_RGB, 1.0)
        } else {
            Rgba::new(BLUE_RGB, NODE_ALPHA)
        }
    }
}

/// Colour variant of a packet, fixed for its lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PacketTint {
    Red,
    Blue,
}

impl PacketTint {
    #[inline]
    pub fn rgb(self) -> [u8; 3] {
        match self {
            PacketTint::Red => RED_RGB,
            PacketTint::Blue => BLUE_RGB,
        }
    }

    pub fn head(self) -> Rgba {
        Rgba::new(self.rgb(), 1.0)
    }

    /// Colour of the trail sample `i` steps behind the head.
    pub fn trail(self, i: usize) -> Rgba {
        Rgba::new(self.rgb(), TRAIL_ALPHA - i as f32 * TRAIL_ALPHA_FALLOFF)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailDot {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

/// A token moving along a segment whose endpoints were copied from two nodes
/// when it was (re)spawned.
#[derive(Clone, Debug)]
pub struct Packet {
    pub start: Vec2,
    pub end: Vec2,
    pub progress: f32,
    pub speed: f32,
    pub tint: PacketTint,
}

impl Packet {
    #[inline]
    pub fn point_at(&self, t: f32) -> Vec2 {
        self.start.lerp(self.end, t)
    }

    #[inline]
    pub fn head(&self) -> Vec2 {
        self.point_at(self.progress)
    }

    /// Fading samples behind the head, nearest first. Samples that would fall
    /// before the start of the segment are omitted.
    pub fn trail(&self) -> SmallVec<[TrailDot; TRAIL_LEN]> {
        (0..TRAIL_LEN)
            .filter_map(|i| {
                let t = self.progress - i as f32 * TRAIL_STEP;
                (t > 0.0).then(|| TrailDot {
                    pos: self.point_at(t),
                    radius: TRAIL_RADIUS - i as f32 * TRAIL_RADIUS_FALLOFF,
                    color: self.tint.trail(i),
                })
            })
            .collect()
    }
}

/// Expanding ring left behind by a flag capture.
#[derive(Clone, Debug)]
pub struct Ripple {
    pub origin: Vec2,
    pub radius: f32,
    pub max_radius: f32,
    pub life: f32,
}

impl Ripple {
    pub fn new(origin: Vec2) -> Self {
        Self {
            origin,
            radius: RIPPLE_START_RADIUS,
            max_radius: RIPPLE_MAX_RADIUS,
            life: 1.0,
        }
    }

    pub fn step(&mut self) {
        self.radius += RIPPLE_GROWTH;
        self.life -= RIPPLE_DECAY;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    #[inline]
    pub fn ring_radius(&self) -> f32 {
        self.radius.min(self.max_radius)
    }

    pub fn color(&self) -> Rgba {
        Rgba::new(BLUE_RGB, self.life * RIPPLE_ALPHA)
    }
}
