// ============================================================================
// STATE MODULE - Contenedor reactivo compartido por los viewmodels
// ============================================================================

pub mod reactivity;

pub use reactivity::*;
