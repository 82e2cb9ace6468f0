//! Commands that read or change session state

mod convert;
mod favorites;
mod history;
mod theme;

pub use convert::{ConvertAndRecord, Chart};
pub use favorites::{ToggleFavorite, Favorites};
pub use history::{History, ClearHistory};
pub use theme::SetTheme;
