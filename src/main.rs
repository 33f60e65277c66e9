// ./src/main.rs
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_egui::EguiPlugin;
use clap::Parser;
use std::process::ExitCode;

// Eigene Module deklarieren
pub mod cli;
pub mod debug;
pub mod input;
pub mod math;
pub mod scene;
pub mod setup; // Kamera und Gizmo-Konfiguration

use cli::Cli;
use debug::{ui::clip_control_ui_system, visualization::segments::draw_clip_scene_system};
use scene::resources::ClipScene;
use scene::systems::*;
use setup::setup_scene;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Vor dem App-Start gibt es noch keinen Logger
    let input = match cli.load_scene() {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let scene = ClipScene::new(input.window, input.segments);
    let settings = cli.display_settings();

    let mut app = App::new();
    if cli.headless {
        app.add_plugins((MinimalPlugins, LogPlugin::default()))
            .add_systems(
                Startup,
                (
                    log_scene_summary_system,
                    print_clipped_segments_system,
                    export_svg_system,
                    exit_headless_system,
                )
                    .chain(),
            );
    } else {
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Segment clipping (Cohen-Sutherland)".to_string(),
                resolution: WindowResolution::new(settings.canvas_width, settings.canvas_height),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .insert_resource(ClearColor(settings.background_color))
        .add_systems(Startup, (setup_scene, log_scene_summary_system))
        .add_systems(
            Update,
            (
                clip_control_ui_system,
                export_svg_system,
                draw_clip_scene_system,
            )
                .chain(),
        );
    }

    app.insert_resource(scene).insert_resource(settings).run();
    ExitCode::SUCCESS
}
