// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP contra el backend
// de FastFeast y clasifica los status no-2xx.
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::models::{
    ComercianteRegisterRequest, ComercianteResponseWrapper, ComidasResponse, CategoriasResponse,
    CreatePlatilloRequest, CreatePlatilloWrapper, LoginRequest, LoginResponse,
    StudentRegisterRequest, StudentResponseWrapper, UserDetailWrapper, UserRegisterRequest,
    UserResponseWrapper,
};
use crate::services::error::ApiError;
use crate::utils::{API_PREFIX, BACKEND_URL};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: format!("{}{}", BACKEND_URL, API_PREFIX),
        }
    }

    /// GET /comidas - catálogo de platillos
    pub async fn get_comidas(&self) -> Result<ComidasResponse, ApiError> {
        self.get("comidas").await
    }

    /// GET /categories - categorías del catálogo
    pub async fn get_categorias(&self) -> Result<CategoriasResponse, ApiError> {
        self.get("categories").await
    }

    /// POST /usuarios - alta del usuario base
    pub async fn register_user(
        &self,
        request: &UserRegisterRequest,
    ) -> Result<UserResponseWrapper, ApiError> {
        self.post("usuarios", request).await
    }

    /// POST /comerciantes - alta del perfil de comercio
    pub async fn register_comerciante(
        &self,
        request: &ComercianteRegisterRequest,
    ) -> Result<ComercianteResponseWrapper, ApiError> {
        self.post("comerciantes", request).await
    }

    /// POST /estudiantes - alta del perfil de estudiante
    pub async fn register_estudiante(
        &self,
        request: &StudentRegisterRequest,
    ) -> Result<StudentResponseWrapper, ApiError> {
        self.post("estudiantes", request).await
    }

    /// POST /login. 400/401/422 se clasifican como credenciales rechazadas.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = format!("{}/login", self.base_url);
        let response = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::from_login_status(response.status()));
        }

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// GET /usuarios/{id} - detalle de usuario (lookup secundario del login
    /// y primera llamada del perfil)
    pub async fn get_user_by_id(&self, user_id: &str) -> Result<UserDetailWrapper, ApiError> {
        self.get(&format!("usuarios/{}", user_id)).await
    }

    /// GET /comerciantes/{owner_id} - comercio asociado a un usuario
    pub async fn get_merchant_by_owner(
        &self,
        owner_id: &str,
    ) -> Result<ComercianteResponseWrapper, ApiError> {
        self.get(&format!("comerciantes/{}", owner_id)).await
    }

    /// POST /comidas - creación de platillo
    pub async fn create_platillo(
        &self,
        request: &CreatePlatilloRequest,
    ) -> Result<CreatePlatilloWrapper, ApiError> {
        self.post("comidas", request).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, path);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::parse_body(response).await
    }

    async fn post<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, path);
        let response = Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::parse_body(response).await
    }

    async fn parse_body<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            let status = response.status();
            // El body de error ayuda a depurar los 422 del backend
            if let Ok(body) = response.text().await {
                log::error!("❌ HTTP {}: {}", status, body);
            }
            return Err(ApiError::from_status(status));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
