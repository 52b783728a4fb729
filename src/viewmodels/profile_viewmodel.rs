// ============================================================================
// PROFILE VIEWMODEL - Pantalla de perfil (agregación usuario + comercio)
// ============================================================================
// Observa el user_id de la sesión: mientras no haya id (el storage lo
// entrega asíncrono) se queda en loading. Con id: carga el perfil base y,
// si es comercio, una segunda llamada cuyos campos pisan los placeholders.
// Si falla solo la sub-carga del comercio, se degrada al perfil base.
// ============================================================================

use wasm_bindgen_futures::spawn_local;

use crate::models::{UserDetail, UserType};
use crate::services::AuthService;
use crate::state::ReactiveState;
use crate::stores::SessionStore;

#[derive(Clone, PartialEq, Debug)]
pub struct ProfileUiState {
    pub is_loading: bool,
    pub user_data: Option<UserDetail>,
    pub error: Option<String>,
}

impl Default for ProfileUiState {
    fn default() -> Self {
        Self {
            is_loading: true,
            user_data: None,
            error: None,
        }
    }
}

#[derive(Clone)]
pub struct ProfileViewModel {
    pub state: ReactiveState<ProfileUiState>,
    auth: AuthService,
    session: SessionStore,
}

impl ProfileViewModel {
    pub fn new(auth: AuthService, session: SessionStore) -> Self {
        Self {
            state: ReactiveState::new(ProfileUiState::default()),
            auth,
            session,
        }
    }

    /// Cargar ahora y re-cargar cada vez que cambie la sesión.
    /// El flujo tolera reinicios re-entrantes: gana la última escritura.
    pub fn observar_sesion(&self) {
        self.cargar_perfil();

        let vm = self.clone();
        self.session.subscribe(move || vm.cargar_perfil());
    }

    pub fn cargar_perfil(&self) {
        let user_id = match self.session.user_id() {
            Some(id) if !id.is_empty() => id,
            _ => {
                // El id todavía no llega del storage: seguimos esperando,
                // sin mostrar error
                log::warn!("⏳ El ID de sesión es nulo todavía...");
                self.state.update(|s| s.is_loading = true);
                return;
            }
        };

        self.state.update(|s| s.is_loading = true);

        let state = self.state.clone();
        let auth = self.auth.clone();

        spawn_local(async move {
            // 1. Primera llamada: datos básicos (email, tipo)
            let base = match auth.obtener_perfil_usuario(&user_id).await {
                Ok(base) => base,
                Err(e) => {
                    log::error!("❌ Error API usuario: {}", e);
                    state.update(|s| {
                        s.is_loading = false;
                        s.error = Some(format!("Error al cargar perfil: {}", e));
                    });
                    return;
                }
            };

            let completo = if base.tipo() == UserType::Merchant {
                // 2. Segunda llamada: datos del negocio (nombre, logo, desc)
                match auth.obtener_datos_comerciante(&user_id).await {
                    Ok(comercio) => base.merge_comercio(&comercio),
                    Err(e) => {
                        // Degradación: se muestran al menos los datos básicos
                        log::warn!("⚠️ No se pudo cargar el detalle del comercio: {}", e);
                        base
                    }
                }
            } else {
                base
            };

            state.update(|s| {
                s.is_loading = false;
                s.user_data = Some(completo);
                s.error = None;
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sin_user_id_se_queda_en_loading_sin_error() {
        let session = SessionStore::new();
        let vm = ProfileViewModel::new(AuthService::new(session.clone()), session);

        vm.cargar_perfil();

        let state = vm.state.snapshot();
        assert!(state.is_loading);
        assert!(state.error.is_none());
        assert!(state.user_data.is_none());
    }
}
