use super::constants::*;
use super::entities::*;
use super::scene::AnimationState;
use glam::Vec2;

/// Soft halo around a filled or stroked shape (canvas shadow).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub blur: f32,
    pub color: Rgba,
}

impl Glow {
    #[inline]
    pub fn new(blur: f32, color: Rgba) -> Self {
        Self { blur, color }
    }
}

/// Immediate-mode 2D drawing commands the renderer needs from a surface.
pub trait Painter {
    fn clear(&mut self, size: Vec2);
    /// Fill the whole `size` rect with a radial gradient from `inner` at
    /// `center` to `outer` at `radius`.
    fn fill_radial_gradient(
        &mut self,
        size: Vec2,
        center: Vec2,
        radius: f32,
        inner: Rgba,
        outer: Rgba,
    );
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, glow: Glow);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba, width: f32, glow: Glow);
}

/// Paint one frame, back to front: backdrop, grid, links, nodes, ripples,
/// packets.
pub fn render<P: Painter + ?Sized>(state: &AnimationState, painter: &mut P) {
    let viewport = state.viewport;
    painter.clear(viewport.size());
    paint_backdrop(state, painter);
    paint_grid(viewport, painter);
    paint_links(state, painter);
    paint_nodes(state, painter);
    paint_ripples(state, painter);
    paint_packets(state, painter);
}

fn paint_backdrop<P: Painter + ?Sized>(state: &AnimationState, painter: &mut P) {
    let v = state.viewport;
    let inner = AMBIENT_ALPHA_BASE + state.ambient_phase.sin() * AMBIENT_ALPHA_SWING;
    painter.fill_radial_gradient(
        v.size(),
        v.center(),
        v.width,
        Rgba::new(BLUE_RGB, inner),
        Rgba::new(BLUE_RGB, AMBIENT_EDGE_ALPHA),
    );
}

fn paint_grid<P: Painter + ?Sized>(viewport: Viewport, painter: &mut P) {
    let color = Rgba::new(BLUE_RGB, GRID_ALPHA);
    let mut x = 0.0;
    while x < viewport.width {
        let (top, bottom) = (Vec2::new(x, 0.0), Vec2::new(x, viewport.height));
        painter.stroke_line(top, bottom, color, GRID_LINE_WIDTH);
        x += GRID_SPACING;
    }
    let mut y = 0.0;
    while y < viewport.height {
        let (left, right) = (Vec2::new(0.0, y), Vec2::new(viewport.width, y));
        painter.stroke_line(left, right, color, GRID_LINE_WIDTH);
        y += GRID_SPACING;
    }
}

fn paint_links<P: Painter + ?Sized>(state: &AnimationState, painter: &mut P) {
    let hot = state.nearest_to_pointer();
    let nodes = &state.nodes;
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            if nodes[i].pos.distance(nodes[j].pos) >= LINK_DISTANCE {
                continue;
            }
            let alpha = if hot == Some(i) || hot == Some(j) {
                LINK_ALPHA_HOVER
            } else {
                LINK_ALPHA
            };
            painter.stroke_line(
                nodes[i].pos,
                nodes[j].pos,
                Rgba::new(BLUE_RGB, alpha),
                LINK_LINE_WIDTH,
            );
        }
    }
}

fn paint_nodes<P: Painter + ?Sized>(state: &AnimationState, painter: &mut P) {
    for node in &state.nodes {
        let color = node.color();
        painter.fill_circle(node.pos, node.render_radius(), color, Glow::new(node.glow(), color));
    }
}

fn paint_ripples<P: Painter + ?Sized>(state: &AnimationState, painter: &mut P) {
    let glow_color = Rgba::new(BLUE_RGB, 1.0);
    for ripple in state.ripples.iter().filter(|r| r.is_alive()) {
        painter.stroke_circle(
            ripple.origin,
            ripple.ring_radius(),
            ripple.color(),
            RIPPLE_LINE_WIDTH,
            Glow::new(RIPPLE_GLOW, glow_color),
        );
    }
}

fn paint_packets<P: Painter + ?Sized>(state: &AnimationState, painter: &mut P) {
    for packet in &state.packets {
        let head = packet.tint.head();
        for dot in packet.trail() {
            painter.fill_circle(dot.pos, dot.radius, dot.color, Glow::new(TRAIL_GLOW, head));
        }
        let glow = Glow::new(PACKET_HEAD_GLOW, head);
        painter.fill_circle(packet.head(), PACKET_HEAD_RADIUS, head, glow);
    }
}
