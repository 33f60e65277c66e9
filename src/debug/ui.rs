// ./src/debug/ui.rs
use crate::math::clipping::{ClipResult, ClipTrace, Endpoint};
use crate::scene::resources::{ClipScene, DisplaySettings};
use bevy::prelude::*;
use bevy_egui::{
    EguiContexts,
    egui::{self, ScrollArea, Window},
};

pub fn clip_control_ui_system(
    mut contexts: EguiContexts,
    scene: Res<ClipScene>,
    mut settings: ResMut<DisplaySettings>,
) {
    Window::new("Cohen-Sutherland")
        .default_width(320.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading("Clip-Fenster");
            ui.label(format!(
                "links {}  oben {}  rechts {}  unten {}",
                scene.window.left(),
                scene.window.top(),
                scene.window.right(),
                scene.window.bottom()
            ));

            ui.collapsing("Darstellung", |ui| {
                ui.checkbox(&mut settings.show_window, "Fensterrahmen");
                ui.checkbox(&mut settings.show_originals, "Original-Segmente");
                ui.checkbox(&mut settings.show_clipped, "Geclippte Segmente");
                ui.checkbox(&mut settings.show_intersections, "Schnittpunkte");
                ui.horizontal(|ui| {
                    if ui.button("SVG exportieren").clicked() {
                        settings.export_svg_request = true;
                    }
                    ui.label(settings.svg_path.display().to_string());
                });
            });

            ui.collapsing("Statistik", |ui| {
                let stats = &scene.stats;
                ui.label(format!("Segmente: {}", stats.total));
                ui.label(format!("Akzeptiert: {}", stats.accepted));
                ui.label(format!("Verworfen: {}", stats.rejected));
                ui.label(format!(
                    "Länge: {:.3} von {:.3} ({:.1} %)",
                    stats.clipped_length,
                    stats.original_length,
                    stats.length_retention_ratio * 100.0
                ));
            });

            ui.separator();
            ScrollArea::vertical().max_height(300.0).show(ui, |ui| {
                for (index, trace) in scene.traces.iter().enumerate() {
                    trace_entry(ui, index, trace);
                }
            });
        });
}

fn trace_entry(ui: &mut egui::Ui, index: usize, trace: &ClipTrace) {
    let summary = match trace.result {
        ClipResult::Accepted(segment) => format!("#{} → {}", index + 1, segment),
        ClipResult::Rejected => format!("#{} → verworfen", index + 1),
    };
    ui.collapsing(summary, |ui| {
        ui.label(format!("Eingabe: {}", trace.input));
        if trace.steps.is_empty() {
            ui.label("Trivial entschieden");
        }
        for step in &trace.steps {
            let endpoint = match step.endpoint {
                Endpoint::Start => "Start",
                Endpoint::End => "Ende",
            };
            ui.label(format!(
                "{endpoint} an {}: ({}, {})",
                step.boundary, step.point.x, step.point.y
            ));
        }
    });
}
