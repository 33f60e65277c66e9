use super::viewport::CanvasTransform;
use crate::math::types::*;
use crate::scene::resources::{ClipScene, DisplaySettings};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// System, das Fensterrahmen, Original- und geclippte Segmente als Gizmos zeichnet.
///
/// Die Abbildung wird jedes Frame aus der aktuellen Fenstergröße neu berechnet.
pub fn draw_clip_scene_system(
    scene: Res<ClipScene>,
    settings: Res<DisplaySettings>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut gizmos: Gizmos,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let transform = CanvasTransform::fit(
        &scene.window,
        window.width() as f64,
        window.height() as f64,
    );

    if settings.show_window {
        let corners = scene.window.corners().map(|c| transform.to_world(c));
        for i in 0..corners.len() {
            gizmos.line_2d(
                corners[i],
                corners[(i + 1) % corners.len()],
                settings.window_color,
            );
        }
    }

    if settings.show_originals {
        draw_segments(&mut gizmos, &transform, &scene.originals, settings.original_color);
    }

    // Geclippte Segmente zuletzt, damit sie über den Originalen liegen
    if settings.show_clipped {
        draw_segments(&mut gizmos, &transform, &scene.clipped, settings.clipped_color);
    }

    if settings.show_intersections {
        for point in scene.intersection_points() {
            gizmos.circle_2d(
                transform.to_world(point),
                settings.marker_radius,
                settings.intersection_color,
            );
        }
    }
}

fn draw_segments(
    gizmos: &mut Gizmos,
    transform: &CanvasTransform,
    segments: &[Segment],
    color: Color,
) {
    for segment in segments {
        gizmos.line_2d(
            transform.to_world(segment.start),
            transform.to_world(segment.end),
            color,
        );
    }
}
