//! Convertor Session - state owned by one user interaction stream
//!
//! A [`Session`] keeps the last ten conversions (newest first), a set of
//! favorite unit pairs and the display theme. Nothing here is persisted.

mod history;
mod favorites;
mod theme;
mod chart;
mod session;

pub use history::{History, HistoryEntry, HISTORY_LIMIT, TIMESTAMP_FORMAT};
pub use favorites::{Favorites, FavoritePair, PAIR_SEPARATOR};
pub use theme::Theme;
pub use chart::{ChartBar, ConversionChart};
pub use session::{Conversion, ConversionRequest, Session};
