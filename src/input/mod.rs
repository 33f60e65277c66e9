// src/input/mod.rs
pub mod error;
pub mod random;
pub mod reader;
pub mod scene;

pub use error::{InputError, InputResult};
pub use random::random_scene;
pub use reader::TokenReader;
pub use scene::{SceneInput, read_scene};
