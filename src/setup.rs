// ./src/setup.rs
use crate::scene::resources::DisplaySettings;
use bevy::prelude::*;

pub fn setup_scene(
    mut commands: Commands,
    mut config_store: ResMut<GizmoConfigStore>,
    settings: Res<DisplaySettings>,
) {
    // Kamera (Ursprung in der Fenstermitte, y nach oben)
    commands.spawn(Camera2dBundle::default());

    let (config, _) = config_store.config_mut::<DefaultGizmoConfigGroup>();
    config.line_width = settings.stroke_width;
}
