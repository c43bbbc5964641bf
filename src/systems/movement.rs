use bevy_ecs::{
    entity::Entity,
    system::{Commands, Query},
};
use tracing::trace;

use crate::systems::components::{EntityType, Position};

/// Moves every hazard left by its kind's per-frame speed and despawns those that have left the window.
///
/// One system covers cacti, pterodactyls and power-ups; the differences live in [`EntityType`].
pub fn scroll_system(mut commands: Commands, mut hazards: Query<(Entity, &EntityType, &mut Position)>) {
    for (entity, entity_type, mut position) in hazards.iter_mut() {
        position.0.x -= entity_type.speed();

        if entity_type.is_off_screen(position.0.x) {
            trace!(?entity, ?entity_type, x = position.0.x, "Despawning off-screen hazard");
            commands.entity(entity).despawn();
        }
    }
}
