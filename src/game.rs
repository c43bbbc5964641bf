//! This module contains the main game logic and state.

use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule, SystemSet};
use bevy_ecs::system::{Res, ResMut};
use bevy_ecs::world::World;
use sdl2::event::EventType;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::ttf::Sdl2TtfContext;
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;
use tracing::{debug, info};

use crate::audio::Audio;
use crate::error::{GameError, GameResult};
use crate::events::GameEvent;
use crate::systems::{
    self, animation_clock_system, audio_system, background_scroll_system, collision_system, command_system,
    error_log_system, hud_render_system, invincibility_system, music_system, player_physics_system, present_system,
    render_system, scoring_system, scroll_system, spawner_system, stage_system, AnimationClock, AudioEvent, AudioResource,
    AudioState, BackgroundScroll, Bindings, CurrentTrack, DeltaTime, GameClock, GameStage, GlobalState, Invincibility,
    MouseInput, PlayerBundle, ScoreResource, SpawnRng, Spawner,
};
use crate::texture::sprite::SpriteSheet;
use crate::texture::text::TextRenderer;

/// System sets for the simulation, in the order they run each frame.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
enum GameplaySet {
    /// Drains SDL events into input resources
    Input,
    /// Applies keyboard commands
    Command,
    /// Menu buttons and session resets
    Stage,
    /// The simulation proper; only runs while a session is being played
    Update,
    /// Per-frame effects that run in every stage
    Respond,
}

/// System sets for output, after the simulation.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
enum RenderSet {
    Draw,
    Present,
    /// Error reporting and event buffer rotation
    Cleanup,
}

/// Core game state manager built on the Bevy ECS architecture.
///
/// The `World` holds the player, the hazards and every resource; the `Schedule` runs the systems once per
/// frame in a fixed order. SDL2 handles are stored as `NonSend` resources.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// Creates the game world, loads sprites, fonts and sounds, and configures the full schedule.
    ///
    /// Asset failures are not errors: missing textures draw as coloured rectangles, a missing font hides
    /// text and missing audio disables sound.
    pub fn new(
        canvas: Canvas<Window>,
        ttf_context: &'static Sdl2TtfContext,
        texture_creator: TextureCreator<WindowContext>,
        mut event_pump: EventPump,
        muted: bool,
    ) -> GameResult<Game> {
        info!("Starting game initialization");

        debug!("Disabling unnecessary SDL events");
        Self::disable_sdl_events(&mut event_pump);

        debug!("Loading sprites and fonts");
        let sprites = SpriteSheet::load(&texture_creator);
        let text = TextRenderer::new(ttf_context, texture_creator);
        if !text.is_available() {
            info!("No font available, menus will show buttons without labels");
        }

        debug!("Initializing audio subsystem");
        let audio = Audio::new();

        let mut world = World::default();
        Self::setup_world(&mut world, SpawnRng::from_os_rng(), muted);

        world.insert_non_send_resource(event_pump);
        world.insert_non_send_resource(canvas);
        world.insert_non_send_resource(sprites);
        world.insert_non_send_resource(text);
        world.insert_non_send_resource(AudioResource(audio));

        let mut schedule = Schedule::default();
        Self::configure_gameplay(&mut schedule);
        Self::configure_presentation(&mut schedule);

        info!("Game initialization completed successfully");
        Ok(Game { world, schedule })
    }

    /// A game without any SDL resources: the simulation runs, nothing is drawn or played.
    ///
    /// Input comes from whatever is written into [`MouseInput`] and the [`GameEvent`] queue.
    pub fn headless(rng: SpawnRng) -> Game {
        let mut world = World::default();
        Self::setup_world(&mut world, rng, false);

        let mut schedule = Schedule::default();
        Self::configure_gameplay(&mut schedule);

        Game { world, schedule }
    }

    fn disable_sdl_events(event_pump: &mut EventPump) {
        for event_type in [
            EventType::JoyAxisMotion,
            EventType::JoyBallMotion,
            EventType::JoyHatMotion,
            EventType::JoyButtonDown,
            EventType::JoyButtonUp,
            EventType::ControllerAxisMotion,
            EventType::ControllerButtonDown,
            EventType::ControllerButtonUp,
            EventType::FingerDown,
            EventType::FingerUp,
            EventType::FingerMotion,
            EventType::DropFile,
            EventType::DropText,
            EventType::TextInput,
            EventType::TextEditing,
            EventType::MouseWheel,
        ] {
            event_pump.disable_event(event_type);
        }
    }

    /// Registers events, inserts every SDL-independent resource and spawns the player.
    ///
    /// The world starts on the title screen.
    pub fn setup_world(world: &mut World, rng: SpawnRng, muted: bool) {
        EventRegistry::register_event::<GameError>(world);
        EventRegistry::register_event::<GameEvent>(world);
        EventRegistry::register_event::<AudioEvent>(world);

        world.insert_resource(GlobalState { exit: false });
        world.insert_resource(Bindings::default());
        world.insert_resource(MouseInput::default());
        world.insert_resource(DeltaTime { seconds: 0.0, ticks: 0 });
        world.insert_resource(GameClock::default());
        world.insert_resource(BackgroundScroll::default());
        world.insert_resource(AudioState { muted });
        world.insert_resource(CurrentTrack::default());
        world.insert_resource(rng);
        Self::insert_session_resources(world);
        world.insert_resource(GameStage::Start);

        world.spawn(PlayerBundle::default());
    }

    /// Inserts fresh values for every resource scoped to a single run.
    pub fn insert_session_resources(world: &mut World) {
        world.insert_resource(ScoreResource::default());
        world.insert_resource(Invincibility::default());
        world.insert_resource(Spawner::default());
        world.insert_resource(AnimationClock::default());
    }

    fn configure_gameplay(schedule: &mut Schedule) {
        schedule
            .add_systems((
                command_system.in_set(GameplaySet::Command),
                stage_system.in_set(GameplaySet::Stage),
                (
                    player_physics_system,
                    scroll_system,
                    spawner_system,
                    collision_system,
                    invincibility_system,
                    scoring_system,
                    animation_clock_system,
                )
                    .chain()
                    .in_set(GameplaySet::Update),
                (background_scroll_system, music_system).in_set(GameplaySet::Respond),
                (error_log_system, event_rotation_system).chain().in_set(RenderSet::Cleanup),
            ))
            .configure_sets(
                (
                    GameplaySet::Input,
                    GameplaySet::Command,
                    GameplaySet::Stage,
                    GameplaySet::Update.run_if(|stage: Res<GameStage>| stage.is_playing()),
                    GameplaySet::Respond,
                    RenderSet::Draw,
                    RenderSet::Present,
                    RenderSet::Cleanup,
                )
                    .chain(),
            );
    }

    fn configure_presentation(schedule: &mut Schedule) {
        schedule.add_systems((
            systems::input_system.in_set(GameplaySet::Input),
            (render_system, hud_render_system).chain().in_set(RenderSet::Draw),
            (present_system, audio_system).chain().in_set(RenderSet::Present),
        ));
    }

    /// Runs one frame.
    ///
    /// # Arguments
    ///
    /// * `dt` - Seconds since the previous frame
    ///
    /// # Returns
    ///
    /// `true` if the game should terminate (exit command received), `false` to continue
    pub fn tick(&mut self, dt: f32) -> bool {
        self.world.insert_resource(DeltaTime { seconds: dt, ticks: 1 });
        self.world.resource_mut::<GameClock>().seconds += dt as f64;

        self.schedule.run(&mut self.world);

        self.world.get_resource::<GlobalState>().is_some_and(|state| state.exit)
    }
}

/// Drops events that every reader has had a frame to see.
fn event_rotation_system(
    mut errors: ResMut<Events<GameError>>,
    mut game_events: ResMut<Events<GameEvent>>,
    mut audio_events: ResMut<Events<AudioEvent>>,
) {
    errors.update();
    game_events.update();
    audio_events.update();
}
