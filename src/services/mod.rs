pub mod api_client;
pub mod auth_service;
pub mod error;
pub mod platillo_service;

pub use api_client::ApiClient;
pub use auth_service::AuthService;
pub use error::ApiError;
pub use platillo_service::PlatilloService;
