use redis::aio::ConnectionManager;
use sqlx::PgPool;
use tera::Tera;

use crate::instance::InstanceInfo;

/// Shared application state, built once at startup and injected into
/// every handler. No process-wide globals.
pub struct AppState {
    pub pool: PgPool,
    pub cache: ConnectionManager,
    pub templates: Tera,
    pub instance: InstanceInfo,
}

impl AppState {
    /// Template context pre-filled with the instance identity that every
    /// page displays.
    pub fn base_context(&self) -> tera::Context {
        let mut ctx = tera::Context::new();
        ctx.insert("instance", &self.instance.instance);
        ctx.insert("ip", &self.instance.ip);
        ctx
    }
}
