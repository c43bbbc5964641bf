use bevy_ecs::{
    query::With,
    system::{Query, ResMut},
};
use tracing::trace;

use crate::systems::components::{EntityType, Passed, PlayerControlled, Position, ScoreResource};

/// Awards one point for every obstacle the player has moved beyond.
///
/// Each obstacle scores at most once; its [`Passed`] flag is set on the frame it scores.
pub fn scoring_system(
    mut score: ResMut<ScoreResource>,
    players: Query<&Position, With<PlayerControlled>>,
    mut obstacles: Query<(&EntityType, &Position, &mut Passed)>,
) {
    let Ok(player) = players.single() else {
        return;
    };

    for (entity_type, position, mut passed) in obstacles.iter_mut() {
        if passed.0 || player.0.x <= position.0.x {
            continue;
        }
        passed.0 = true;
        score.0 += 1;
        trace!(?entity_type, score = score.0, "Obstacle passed");
    }
}
