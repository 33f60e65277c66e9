// ./src/cli.rs
use crate::input::{InputResult, SceneInput, TokenReader, random_scene, read_scene};
use crate::math::types::ClipWindow;
use crate::scene::resources::DisplaySettings;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

/// Clips line segments against a rectangular window (Cohen-Sutherland) and shows the result.
///
/// Input format: `left top right bottom`, the segment count, then `x1 y1 x2 y2` per segment.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {
    /// Read window and segments from this file instead of stdin
    #[arg(short, long, conflicts_with = "random")]
    pub input: Option<PathBuf>,

    /// Generate N random segments instead of reading input
    #[arg(long, value_name = "N")]
    pub random: Option<usize>,

    /// Seed for --random
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Clip window for --random
    #[arg(
        long,
        num_args = 4,
        value_names = ["LEFT", "TOP", "RIGHT", "BOTTOM"],
        allow_negative_numbers = true,
        requires = "random"
    )]
    pub window: Option<Vec<f64>>,

    /// Write the rendered scene to this SVG file at startup
    #[arg(long, value_name = "FILE")]
    pub svg: Option<PathBuf>,

    /// Do not open a window; print the clipped segments and exit
    #[arg(long)]
    pub headless: bool,

    #[arg(long, default_value_t = 800.0)]
    pub canvas_width: f32,

    #[arg(long, default_value_t = 600.0)]
    pub canvas_height: f32,

    /// Never print input prompts, even on a terminal
    #[arg(long)]
    pub no_prompt: bool,
}

impl Cli {
    /// Liest die Szene aus der gewählten Quelle
    pub fn load_scene(&self) -> InputResult<SceneInput> {
        if let Some(count) = self.random {
            return random_scene(self.random_window()?, count, self.seed);
        }

        match &self.input {
            Some(path) => {
                let file = File::open(path)?;
                read_scene(&mut TokenReader::new(BufReader::new(file)))
            }
            None => {
                let stdin = io::stdin();
                let interactive = stdin.is_terminal() && !self.no_prompt;
                let mut reader = TokenReader::new(stdin.lock());
                if interactive {
                    reader = reader.with_prompts(Box::new(io::stdout()));
                }
                read_scene(&mut reader)
            }
        }
    }

    fn random_window(&self) -> InputResult<ClipWindow> {
        let window = match self.window.as_deref() {
            Some(&[left, top, right, bottom]) => ClipWindow::new(left, top, right, bottom)?,
            _ => ClipWindow::new(0.0, 10.0, 10.0, 0.0)?,
        };
        Ok(window)
    }

    pub fn display_settings(&self) -> DisplaySettings {
        let mut settings = DisplaySettings {
            canvas_width: self.canvas_width,
            canvas_height: self.canvas_height,
            ..DisplaySettings::default()
        };
        if let Some(path) = &self.svg {
            settings.svg_path = path.clone();
            settings.export_svg_request = true;
        }
        settings
    }
}
