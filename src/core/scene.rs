use super::constants::*;
use super::entities::*;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Entity counts for a scene. The web front-end always uses the defaults.
#[derive(Clone, Copy, Debug)]
pub struct SceneParams {
    pub node_count: usize,
    pub packet_count: usize,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            node_count: NODE_COUNT,
            packet_count: PACKET_COUNT,
        }
    }
}

/// Outcome of a bounded search for an index different from a given one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Draw {
    Distinct(usize),
    /// Every retry landed on the excluded index; it is returned unchanged.
    Fallback(usize),
}

impl Draw {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Draw::Distinct(i) | Draw::Fallback(i) => i,
        }
    }

    #[inline]
    pub fn is_distinct(self) -> bool {
        matches!(self, Draw::Distinct(_))
    }
}

/// Draw a uniform index in `0..len`, redrawing up to `retries` times while it
/// equals `exclude`. `len` must be non-zero.
pub fn pick_distinct<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    exclude: usize,
    retries: usize,
) -> Draw {
    let mut i = rng.gen_range(0..len);
    let mut attempts = 0;
    while i == exclude && attempts < retries {
        i = rng.gen_range(0..len);
        attempts += 1;
    }
    if i == exclude {
        Draw::Fallback(i)
    } else {
        Draw::Distinct(i)
    }
}

/// Everything one frame of the background reads or writes.
///
/// Pointer and viewport are written by the input handlers only; `update` owns
/// the entity physics and `paint::render` only reads.
pub struct AnimationState {
    pub params: SceneParams,
    pub viewport: Viewport,
    pub pointer: Option<Vec2>,
    pub nodes: Vec<Node>,
    pub packets: Vec<Packet>,
    pub ripples: Vec<Ripple>,
    /// Phase driving the slow pulse of the backdrop gradient.
    pub ambient_phase: f32,
    pub frame: u64,
    rng: StdRng,
}

impl AnimationState {
    pub fn new(params: SceneParams, viewport: Viewport, seed: u64) -> Self {
        let mut state = Self {
            params,
            viewport,
            pointer: None,
            nodes: Vec::new(),
            packets: Vec::new(),
            ripples: Vec::new(),
            ambient_phase: 0.0,
            frame: 0,
            rng: StdRng::seed_from_u64(seed),
        };
        state.initialize();
        state
    }

    /// Discard every entity and repopulate for the current viewport.
    pub fn initialize(&mut self) {
        let Viewport { width, height } = self.viewport;
        let rng = &mut self.rng;
        self.nodes = (0..self.params.node_count)
            .map(|_| Node {
                pos: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
                vel: Vec2::new(
                    rng.gen_range(-NODE_SPEED_MAX..NODE_SPEED_MAX),
                    rng.gen_range(-NODE_SPEED_MAX..NODE_SPEED_MAX),
                ),
                radius: NODE_RADIUS_MIN + rng.gen::<f32>() * NODE_RADIUS_SPAN,
                pulse: rng.gen::<f32>() * TAU,
                is_flag: false,
                influence: 0.0,
            })
            .collect();
        if !self.nodes.is_empty() {
            let i = self.rng.gen_range(0..self.nodes.len());
            self.nodes[i].is_flag = true;
        }

        self.packets = Vec::with_capacity(self.params.packet_count);
        for _ in 0..self.params.packet_count {
            let tint = if self.rng.gen_bool(0.5) {
                PacketTint::Red
            } else {
                PacketTint::Blue
            };
            let packet = self.spawn_packet(tint);
            self.packets.push(packet);
        }
        self.ripples.clear();
    }

    /// Adopt a new viewport and rebuild the whole pool for it.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.initialize();
        log::info!(
            "[scene] reset for {}x{}: nodes={} packets={}",
            viewport.width,
            viewport.height,
            self.nodes.len(),
            self.packets.len()
        );
    }

    pub fn set_pointer(&mut self, pointer: Option<Vec2>) {
        self.pointer = pointer;
    }

    pub fn flagged_index(&self) -> Option<usize> {
        self.nodes.iter().position(|n| n.is_flag)
    }

    /// Node closest to the pointer, if the pointer is on the page.
    pub fn nearest_to_pointer(&self) -> Option<usize> {
        let p = self.pointer?;
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (i, n.pos.distance_squared(p)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    /// Advance the scene by one frame.
    pub fn update(&mut self) {
        self.frame += 1;
        self.ambient_phase += AMBIENT_STEP;

        let viewport = self.viewport;
        let pointer = self.pointer;
        for node in &mut self.nodes {
            node.step(viewport);
            node.refresh_influence(pointer);
        }

        self.try_capture_flag();

        for i in 0..self.packets.len() {
            self.packets[i].progress += self.packets[i].speed;
            if self.packets[i].progress >= 1.0 {
                let tint = self.packets[i].tint;
                self.packets[i] = self.spawn_packet(tint);
            }
        }

        for ripple in &mut self.ripples {
            ripple.step();
        }
        self.ripples.retain(Ripple::is_alive);
    }

    /// Move the flag away from the pointer if it got close enough.
    fn try_capture_flag(&mut self) {
        let (Some(pointer), Some(flagged)) = (self.pointer, self.flagged_index()) else {
            return;
        };
        let at = self.nodes[flagged].pos;
        if at.distance(pointer) >= CAPTURE_RADIUS {
            return;
        }

        self.ripples.push(Ripple::new(at));
        self.nodes[flagged].is_flag = false;
        let next = pick_distinct(&mut self.rng, self.nodes.len(), flagged, DISTINCT_PICK_RETRIES);
        self.nodes[next.index()].is_flag = true;
        match next {
            Draw::Distinct(i) => log::debug!("[flag] captured node {} -> {}", flagged, i),
            Draw::Fallback(i) => log::debug!("[flag] captured node {}, flag stays put", i),
        }
    }

    /// Fresh packet between two random nodes with progress 0. Endpoints are
    /// snapshots, later node motion does not bend the path.
    fn spawn_packet(&mut self, tint: PacketTint) -> Packet {
        let (start, end) = match self.nodes.len() {
            0 => (Vec2::ZERO, Vec2::ZERO),
            len => {
                let from = self.rng.gen_range(0..len);
                let to = pick_distinct(&mut self.rng, len, from, DISTINCT_PICK_RETRIES);
                if !to.is_distinct() && len > 1 {
                    log::debug!("[packet] no distinct endpoint for node {}", from);
                }
                (self.nodes[from].pos, self.nodes[to.index()].pos)
            }
        };
        Packet {
            start,
            end,
            progress: 0.0,
            speed: PACKET_SPEED_MIN + self.rng.gen::<f32>() * PACKET_SPEED_SPAN,
            tint,
        }
    }
}
