//! Pure functions over the catalog and the conversion engine

pub(crate) mod args;
mod convert;
mod catalog;

pub use convert::{Convert, ToBase, Compatible, Formula};
pub use catalog::{ListCategories, SearchUnits, UnitInfo, FormatUnit};
