// Tuning constants for the particle network background.
// Distances are in CSS pixels, rates are per rendered frame.

// Population
pub const NODE_COUNT: usize = 150;
pub const PACKET_COUNT: usize = 60;

// Node motion and shape
pub const NODE_SPEED_MAX: f32 = 0.1; // each velocity axis is drawn from [-max, max)
pub const NODE_RADIUS_MIN: f32 = 1.5;
pub const NODE_RADIUS_SPAN: f32 = 2.0; // radius in [min, min + span)
pub const PULSE_STEP: f32 = 0.05; // radians per frame
pub const PULSE_AMPLITUDE: f32 = 1.5;
pub const FLAG_PULSE_AMPLITUDE: f32 = 2.5;
pub const NODE_RADIUS_FLOOR: f32 = 0.1;

// Pointer interaction
pub const INFLUENCE_RADIUS: f32 = 150.0;
pub const INFLUENCE_SCALE: f32 = 2.0; // radius multiplier at zero distance is 1 + scale
pub const CAPTURE_RADIUS: f32 = 20.0;
pub const DISTINCT_PICK_RETRIES: usize = 10;

// Glow (canvas shadow blur)
pub const NODE_GLOW: f32 = 8.0;
pub const FLAG_GLOW: f32 = 20.0;
pub const INFLUENCE_GLOW_BASE: f32 = 20.0;
pub const INFLUENCE_GLOW_SPAN: f32 = 10.0;

// Packets
pub const PACKET_SPEED_MIN: f32 = 0.005;
pub const PACKET_SPEED_SPAN: f32 = 0.008; // speed in [min, min + span)
pub const PACKET_HEAD_RADIUS: f32 = 2.5;
pub const PACKET_HEAD_GLOW: f32 = 15.0;
pub const TRAIL_LEN: usize = 5;
pub const TRAIL_STEP: f32 = 0.03; // progress gap between trail samples
pub const TRAIL_RADIUS: f32 = 2.0;
pub const TRAIL_RADIUS_FALLOFF: f32 = 0.3;
pub const TRAIL_ALPHA: f32 = 0.5;
pub const TRAIL_ALPHA_FALLOFF: f32 = 0.1;
pub const TRAIL_GLOW: f32 = 12.0;

// Ripples
pub const RIPPLE_START_RADIUS: f32 = 1.0;
pub const RIPPLE_MAX_RADIUS: f32 = 100.0;
pub const RIPPLE_GROWTH: f32 = 2.0;
pub const RIPPLE_DECAY: f32 = 0.02;
pub const RIPPLE_ALPHA: f32 = 0.6;
pub const RIPPLE_LINE_WIDTH: f32 = 2.0;
pub const RIPPLE_GLOW: f32 = 8.0;

// Backdrop
pub const AMBIENT_STEP: f32 = 0.001; // gradient phase per frame
pub const AMBIENT_ALPHA_BASE: f32 = 0.02;
pub const AMBIENT_ALPHA_SWING: f32 = 0.01;
pub const AMBIENT_EDGE_ALPHA: f32 = 0.005;
pub const GRID_SPACING: f32 = 100.0;
pub const GRID_ALPHA: f32 = 0.08;
pub const GRID_LINE_WIDTH: f32 = 0.5;

// Connections
pub const LINK_DISTANCE: f32 = 280.0;
pub const LINK_ALPHA: f32 = 0.25;
pub const LINK_ALPHA_HOVER: f32 = 0.8;
pub const LINK_LINE_WIDTH: f32 = 0.5;

// Palette
pub const BLUE_RGB: [u8; 3] = [0, 124, 240];
pub const RED_RGB: [u8; 3] = [255, 0, 0];
pub const NODE_ALPHA: f32 = 0.8;
