use bevy_ecs::system::ResMut;

use crate::constants::{ui, world};
use crate::systems::components::{AnimationClock, BackgroundScroll};

impl AnimationClock {
    /// Whether the two-frame sprites should show their second frame.
    pub fn alternate_frame(&self) -> bool {
        (self.frame / ui::FRAME_SWITCH_INTERVAL) % 2 == 1
    }

    /// Whether an invincible player is in the hidden phase of its blink.
    pub fn blink_hidden(&self) -> bool {
        (self.blink / ui::BLINK_INTERVAL) % 2 == 0
    }
}

/// Advances the sprite animation counters. Runs only while a session is being played.
pub fn animation_clock_system(mut clock: ResMut<AnimationClock>) {
    clock.frame = clock.frame.wrapping_add(1);
    clock.blink = clock.blink.wrapping_add(1);
}

/// Scrolls the background by a fixed fraction of its width every frame, wrapping back to zero.
pub fn background_scroll_system(mut scroll: ResMut<BackgroundScroll>) {
    scroll.0 += world::BACKGROUND_SCROLL_STEP;
    if scroll.0 >= 1.0 {
        scroll.0 = 0.0;
    }
}
