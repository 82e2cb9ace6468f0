//! Convertor Plugin System
//!
//! Provides traits for extending Convertor with:
//! - Functions (pure lookups and conversions)
//! - Commands (change session state)

mod traits;
mod registry;
mod context;

pub use traits::{
    FunctionPlugin, FunctionMeta,
    CommandPlugin, CommandMeta,
    ArgMeta,
};
pub use registry::PluginRegistry;
pub use context::SessionContext;

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{
        FunctionPlugin, FunctionMeta,
        CommandPlugin, CommandMeta,
        ArgMeta, PluginRegistry, SessionContext,
    };
    pub use convertor_core::prelude::*;
}
