// ============================================================================
// PLATILLO SERVICE - Gateway de catálogo
// ============================================================================
// Listado de platillos/categorías (fetch + mapeo DTO -> modelo de UI) y
// creación de platillos, que primero resuelve el merchant_id del usuario.
// ============================================================================

use crate::models::{
    Categoria, CategoriaDto, ComidaDto, CreatePlatilloRequest, CreatePlatilloResponse,
    NuevoPlatillo, Platillo,
};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;

#[derive(Clone)]
pub struct PlatilloService {
    api: ApiClient,
}

impl PlatilloService {
    pub fn new() -> Self {
        Self {
            api: ApiClient::new(),
        }
    }

    /// Catálogo de platillos, ya mapeado al modelo de UI
    pub async fn obtener_platillos(&self) -> Result<Vec<Platillo>, ApiError> {
        let response = self.api.get_comidas().await?;
        let platillos: Vec<Platillo> = response
            .data
            .into_iter()
            .map(ComidaDto::into_platillo)
            .collect();
        log::info!("🍔 {} platillos en el catálogo", platillos.len());
        Ok(platillos)
    }

    /// Categorías del catálogo
    pub async fn obtener_categorias(&self) -> Result<Vec<Categoria>, ApiError> {
        let response = self.api.get_categorias().await?;
        Ok(response
            .data
            .into_iter()
            .map(CategoriaDto::into_categoria)
            .collect())
    }

    /// Merchant_id del comercio asociado a un usuario.
    /// Sin registro de comercio -> NotFound.
    pub async fn buscar_comercio_de_usuario(&self, user_id: &str) -> Result<String, ApiError> {
        let comercio = match self.api.get_merchant_by_owner(user_id).await {
            Ok(wrapper) => wrapper.data,
            Err(ApiError::NotFound(_)) => {
                return Err(ApiError::NotFound(
                    "No se encontró un comercio asociado a este usuario".to_string(),
                ))
            }
            Err(otro) => return Err(otro),
        };

        comercio
            .resolved_id()
            .map(str::to_string)
            .ok_or_else(|| {
                ApiError::NotFound(
                    "No se encontró un comercio asociado a este usuario".to_string(),
                )
            })
    }

    /// Crear un platillo a nombre del comercio del usuario.
    /// El lookup del comercio va primero: sin comercio no se crea nada.
    pub async fn crear_platillo(
        &self,
        user_id: &str,
        nuevo: &NuevoPlatillo,
    ) -> Result<CreatePlatilloResponse, ApiError> {
        let merchant_id = self.buscar_comercio_de_usuario(user_id).await?;

        let request = CreatePlatilloRequest {
            name: nuevo.nombre.clone(),
            description: nuevo.descripcion.clone(),
            price: nuevo.precio,
            category: nuevo.categoria_nombre.clone(),
            image_url: nuevo.imagen_url.clone(),
            merchant_id,
            is_available: true,
            category_id: nuevo.categoria_id.clone(),
        };

        let wrapper = self.api.create_platillo(&request).await?;
        log::info!("✅ Platillo creado: {}", wrapper.data.id);
        Ok(wrapper.data)
    }
}

impl Default for PlatilloService {
    fn default() -> Self {
        Self::new()
    }
}
