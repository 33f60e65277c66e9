use super::resources::{ClipScene, DisplaySettings};
use crate::debug::visualization::svg::save_clip_scene_svg;
use bevy::app::AppExit;
use bevy::prelude::*;

pub fn log_scene_summary_system(scene: Res<ClipScene>) {
    let stats = &scene.stats;
    info!(
        "Clipped {} segments against {}: {} accepted, {} rejected, {:.1}% of length retained",
        stats.total,
        scene.window,
        stats.accepted,
        stats.rejected,
        stats.length_retention_ratio * 100.0
    );
    for (index, trace) in scene.traces.iter().enumerate() {
        debug!(
            "Segment #{} {}: {:?} after {} corrections",
            index + 1,
            trace.input,
            trace.result,
            trace.steps.len()
        );
    }
}

/// Gibt die sichtbaren Segmente zeilenweise als `x1 y1 x2 y2` aus
pub fn print_clipped_segments_system(scene: Res<ClipScene>) {
    for segment in &scene.clipped {
        println!(
            "{} {} {} {}",
            segment.start.x, segment.start.y, segment.end.x, segment.end.y
        );
    }
}

/// Führt eine angeforderte SVG-Ausgabe aus (Startparameter oder UI-Button)
pub fn export_svg_system(scene: Res<ClipScene>, mut settings: ResMut<DisplaySettings>) {
    if !settings.export_svg_request {
        return;
    }
    settings.export_svg_request = false; // Anfrage verarbeitet

    if let Err(err) = save_clip_scene_svg(&settings.svg_path, &scene, &settings) {
        error!(
            "Failed to write SVG '{}': {}",
            settings.svg_path.display(),
            err
        );
    }
}

pub fn exit_headless_system(mut exit: EventWriter<AppExit>) {
    info!("Headless run complete, exiting.");
    exit.send(AppExit);
}
