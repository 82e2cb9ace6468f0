//! Session context passed to plugins

use std::sync::Arc;
use convertor_session::Session;
use convertor_units::Converter;
use crate::PluginRegistry;

/// Everything a plugin may touch while serving one session
pub struct SessionContext {
    pub session: Session,
    pub registry: Arc<PluginRegistry>,
}

impl SessionContext {
    pub fn new(registry: Arc<PluginRegistry>, session: Session) -> Self {
        Self { session, registry }
    }

    /// A fresh session over an engine without exchange rates
    pub fn with_defaults(registry: Arc<PluginRegistry>) -> Self {
        Self::new(registry, Session::default())
    }

    pub fn engine(&self) -> &Converter {
        self.session.engine()
    }
}
