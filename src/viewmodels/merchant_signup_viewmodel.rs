// ============================================================================
// MERCHANT SIGNUP VIEWMODEL - Paso 2 del registro (perfil de comercio)
// ============================================================================

use wasm_bindgen_futures::spawn_local;

use crate::models::ComercianteRegisterRequest;
use crate::services::{ApiError, AuthService};
use crate::state::ReactiveState;

#[derive(Clone, PartialEq, Debug)]
pub struct MerchantSignUpUiState {
    pub owner_id: String,
    pub name: String,
    pub description: String,
    pub address: String,
    pub logo_url: String,
    pub location_latitude: String,
    pub location_longitude: String,
    pub opening_time: String,
    pub closing_time: String,
    pub is_loading: bool,
    pub error: Option<String>,
    pub is_success: bool,
}

impl Default for MerchantSignUpUiState {
    fn default() -> Self {
        Self {
            owner_id: String::new(),
            name: String::new(),
            description: String::new(),
            address: String::new(),
            logo_url: String::new(),
            location_latitude: String::new(),
            location_longitude: String::new(),
            opening_time: "09:00:00".to_string(),
            closing_time: "22:00:00".to_string(),
            is_loading: false,
            error: None,
            is_success: false,
        }
    }
}

#[derive(Clone)]
pub struct MerchantSignUpViewModel {
    pub state: ReactiveState<MerchantSignUpUiState>,
    auth: AuthService,
}

impl MerchantSignUpViewModel {
    pub fn new(auth: AuthService) -> Self {
        Self {
            state: ReactiveState::new(MerchantSignUpUiState::default()),
            auth,
        }
    }

    pub fn on_name_change(&self, v: &str) {
        let v = v.to_string();
        self.state.update(|s| s.name = v);
    }

    pub fn on_description_change(&self, v: &str) {
        let v = v.to_string();
        self.state.update(|s| s.description = v);
    }

    pub fn on_logo_url_change(&self, v: &str) {
        let v = v.to_string();
        self.state.update(|s| s.logo_url = v);
    }

    pub fn on_location_latitude_change(&self, v: &str) {
        let v = v.to_string();
        self.state.update(|s| s.location_latitude = v);
    }

    pub fn on_location_longitude_change(&self, v: &str) {
        let v = v.to_string();
        self.state.update(|s| s.location_longitude = v);
    }

    pub fn on_address_change(&self, v: &str) {
        let v = v.to_string();
        self.state.update(|s| s.address = v);
    }

    pub fn on_opening_time_change(&self, v: &str) {
        let v = v.to_string();
        self.state.update(|s| s.opening_time = v);
    }

    pub fn on_closing_time_change(&self, v: &str) {
        let v = v.to_string();
        self.state.update(|s| s.closing_time = v);
    }

    pub fn set_owner_id(&self, id: &str) {
        let id = id.to_string();
        self.state.update(|s| s.owner_id = id);
    }

    /// Registrar el comercio. `owner_id` viene del paso 1 (o ya está en el
    /// formulario); sin él no hay nada que registrar.
    pub fn registrar_comerciante(&self, owner_id: Option<&str>) {
        let form = self.state.snapshot();

        if form.name.trim().is_empty() || form.address.trim().is_empty() {
            self.state.update(|s| {
                s.error = Some("El nombre y la dirección son obligatorios".to_string())
            });
            return;
        }

        let owner_final = owner_id
            .map(str::to_string)
            .unwrap_or_else(|| form.owner_id.clone());
        if owner_final.trim().is_empty() {
            self.state
                .update(|s| s.error = Some("Error: ID de usuario no encontrado".to_string()));
            return;
        }

        // Coordenadas: se acepta coma decimal ("12,34")
        let latitud = normalizar_coordenada(&form.location_latitude);
        let longitud = normalizar_coordenada(&form.location_longitude);
        let (latitud, longitud) = match (latitud, longitud) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => {
                self.state.update(|s| {
                    s.error = Some(
                        "La latitud o longitud no son números válidos (ej: 12.34)".to_string(),
                    )
                });
                return;
            }
        };

        let request = ComercianteRegisterRequest {
            owner_id: owner_final,
            name: form.name.clone(),
            description: form.description.clone(),
            logo_url: form.logo_url.clone(),
            location_latitude: latitud,
            location_longitude: longitud,
            address: form.address.clone(),
            opening_time: formatear_hora(&form.opening_time),
            closing_time: formatear_hora(&form.closing_time),
        };

        self.state.update(|s| {
            s.is_loading = true;
            s.error = None;
        });

        let state = self.state.clone();
        let auth = self.auth.clone();

        spawn_local(async move {
            match auth.registrar_comerciante(&request).await {
                Ok(_) => {
                    state.update(|s| {
                        s.is_loading = false;
                        s.is_success = true;
                    });
                }
                Err(e) => {
                    log::error!("❌ Error registrando comercio: {}", e);
                    let mensaje = match e {
                        ApiError::Server { status: 422 } => {
                            "Error de validación (422). Revisa el formato de la hora o datos faltantes."
                                .to_string()
                        }
                        ApiError::Server { status } => format!("Error del servidor ({})", status),
                        otro => format!("Error al registrar: {}", otro),
                    };
                    state.update(|s| {
                        s.is_loading = false;
                        s.error = Some(mensaje);
                    });
                }
            }
        });
    }
}

/// Parsear una coordenada aceptando coma decimal
fn normalizar_coordenada(input: &str) -> Option<f32> {
    input.replace(',', ".").trim().parse::<f32>().ok()
}

/// La API espera SOLO hora "HH:MM:SS".
/// Un datetime "2025-...T09:00:00Z" se reduce a su parte de hora,
/// y a "HH:MM" se le agregan los segundos.
fn formatear_hora(input: &str) -> String {
    if let Some(resto) = input.split_once('T').map(|(_, t)| t) {
        return resto.split('Z').next().unwrap_or(resto).to_string();
    }

    let mut hora = input.trim().to_string();
    if hora.chars().filter(|c| *c == ':').count() == 1 {
        hora.push_str(":00");
    }
    hora
}
