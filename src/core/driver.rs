use super::paint::{self, Painter};
use super::scene::AnimationState;

/// One frame: advance the scene, then paint it.
#[inline]
pub fn tick<P: Painter + ?Sized>(state: &mut AnimationState, painter: &mut P) {
    state.update();
    paint::render(state, painter);
}

/// Run frames back to back while `keep_running` allows it. The predicate sees
/// the number of frames already run and the state before each frame. Returns
/// the number of frames run.
pub fn run<P, F>(state: &mut AnimationState, painter: &mut P, mut keep_running: F) -> u64
where
    P: Painter + ?Sized,
    F: FnMut(u64, &AnimationState) -> bool,
{
    let mut frames = 0;
    while keep_running(frames, state) {
        tick(state, painter);
        frames += 1;
    }
    frames
}
