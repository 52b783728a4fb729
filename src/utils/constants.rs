/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Por defecto: la API pública de FastFeast
/// - Override via BACKEND_URL (env var o .env, ver build.rs)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "https://fastfeast-apiv2.onrender.com",
};

/// Prefijo de versión de la API
pub const API_PREFIX: &str = "/api/v1";

/// Clave de localStorage donde vive la sesión (un solo blob JSON)
pub const STORAGE_KEY_SESSION: &str = "fastfeast_session";
