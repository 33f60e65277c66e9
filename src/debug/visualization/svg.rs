// src/debug/visualization/svg.rs
use super::viewport::CanvasTransform;
use crate::math::types::*;
use crate::scene::resources::{ClipScene, DisplaySettings};
use bevy::log::info;
use bevy::prelude::Color;
use std::path::Path;
use svg::Document;
use svg::node::element::{Circle, Group, Line, Rectangle};

/// Farbe als `#rrggbb` für SVG-Attribute
fn svg_color(color: Color) -> String {
    let [r, g, b, _] = color.as_rgba_u8();
    format!("#{r:02x}{g:02x}{b:02x}")
}

fn segment_group(
    segments: &[Segment],
    transform: &CanvasTransform,
    class: &str,
    color: Color,
    stroke_width: f32,
) -> Group {
    segments.iter().fold(
        Group::new()
            .set("class", class)
            .set("stroke", svg_color(color))
            .set("stroke-width", stroke_width),
        |group, segment| {
            let start = transform.to_screen(segment.start);
            let end = transform.to_screen(segment.end);
            group.add(
                Line::new()
                    .set("x1", start.x)
                    .set("y1", start.y)
                    .set("x2", end.x)
                    .set("y2", end.y),
            )
        },
    )
}

/// Baut das SVG-Dokument: Fensterrahmen, Originale, geclippte Segmente und optional Schnittpunkte.
///
/// Gleiche Abbildung und Ebenenreihenfolge wie die Gizmo-Darstellung.
pub fn build_clip_scene_svg(scene: &ClipScene, settings: &DisplaySettings) -> Document {
    let width = settings.canvas_width as f64;
    let height = settings.canvas_height as f64;
    let transform = CanvasTransform::fit(&scene.window, width, height);

    let mut document = Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0.0, 0.0, width, height))
        .add(
            Rectangle::new()
                .set("class", "background")
                .set("width", width)
                .set("height", height)
                .set("fill", svg_color(settings.background_color)),
        );

    if settings.show_window {
        let (x, y, w, h) = transform.window_rect(&scene.window);
        document = document.add(
            Rectangle::new()
                .set("class", "clip-window")
                .set("x", x)
                .set("y", y)
                .set("width", w)
                .set("height", h)
                .set("fill", "none")
                .set("stroke", svg_color(settings.window_color))
                .set("stroke-width", settings.stroke_width),
        );
    }

    if settings.show_originals {
        document = document.add(segment_group(
            &scene.originals,
            &transform,
            "original-segments",
            settings.original_color,
            settings.stroke_width,
        ));
    }

    if settings.show_clipped {
        document = document.add(segment_group(
            &scene.clipped,
            &transform,
            "clipped-segments",
            settings.clipped_color,
            settings.stroke_width,
        ));
    }

    if settings.show_intersections {
        let markers = scene.intersection_points().fold(
            Group::new()
                .set("class", "intersections")
                .set("fill", svg_color(settings.intersection_color)),
            |group, point| {
                let p = transform.to_screen(point);
                group.add(
                    Circle::new()
                        .set("cx", p.x)
                        .set("cy", p.y)
                        .set("r", settings.marker_radius),
                )
            },
        );
        document = document.add(markers);
    }

    document
}

/// Schreibt die Szene als SVG-Datei.
pub fn save_clip_scene_svg(
    path: &Path,
    scene: &ClipScene,
    settings: &DisplaySettings,
) -> std::io::Result<()> {
    let document = build_clip_scene_svg(scene, settings);
    svg::save(path, &document)?;
    info!("Debug SVG '{}' wurde erstellt.", path.display());
    Ok(())
}
