//! Convertor Standard Library

pub mod functions;
pub mod commands;
mod values;

use convertor_plugin::PluginRegistry;

/// Load standard library into registry
pub fn load_standard_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        // Conversion
        .with_function(functions::Convert)
        .with_function(functions::ToBase)
        .with_function(functions::Compatible)
        .with_function(functions::Formula)
        // Catalog
        .with_function(functions::ListCategories)
        .with_function(functions::SearchUnits)
        .with_function(functions::UnitInfo)
        .with_function(functions::FormatUnit)
        // Session
        .with_command(commands::ConvertAndRecord)
        .with_command(commands::ToggleFavorite)
        .with_command(commands::History)
        .with_command(commands::Favorites)
        .with_command(commands::ClearHistory)
        .with_command(commands::SetTheme)
        .with_command(commands::Chart)
}

/// Create registry with standard library
pub fn standard_registry() -> PluginRegistry {
    load_standard_library(PluginRegistry::new())
}
