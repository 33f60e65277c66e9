// src/input/random.rs
use super::{error::*, scene::SceneInput};
use crate::math::{types::*, utils::random::random_point_in_rect};
use rand::{SeedableRng, rngs::StdRng};

/// Faktor, um den der Erzeugungsbereich größer ist als das Clip-Fenster
pub const SPAWN_AREA_FACTOR: f64 = 1.5;

/// Erzeugt `count` zufällige Segmente rund um das Fenster.
///
/// Mit `seed` ist das Ergebnis reproduzierbar.
pub fn random_scene(window: ClipWindow, count: usize, seed: Option<u64>) -> InputResult<SceneInput> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let area = window.scaled(SPAWN_AREA_FACTOR)?;

    let segments = (0..count)
        .map(|_| {
            Segment::new(
                random_point_in_rect(area.min(), area.max(), &mut rng),
                random_point_in_rect(area.min(), area.max(), &mut rng),
            )
        })
        .collect();

    Ok(SceneInput { window, segments })
}
