pub mod clipping;
pub mod error;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        clipping::*,
        error::{MathError, MathResult},
        types::*,
    };
}
