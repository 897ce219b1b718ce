//! Interned text and source positions shared by every tree.

mod symbol;

pub use symbol::{IntoSymbol, Symbol};
pub use text_size::{TextRange, TextSize};
