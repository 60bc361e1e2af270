use axum::Router;

/// A service module that contributes HTTP routes.
///
/// A business module implements this trait to register its API
/// endpoints. The binary entry point collects all modules and merges
/// their routes into a single Router at the application root.
pub trait Module: Send + Sync {
    /// Module name, used for logging.
    fn name(&self) -> &str;

    /// Return the module's routes, merged at the application root.
    fn routes(&self) -> Router;
}
