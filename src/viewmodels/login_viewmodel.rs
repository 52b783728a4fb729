// ============================================================================
// LOGIN VIEWMODEL - Pantalla de inicio de sesión
// ============================================================================

use wasm_bindgen_futures::spawn_local;

use crate::models::UserType;
use crate::services::AuthService;
use crate::state::ReactiveState;

#[derive(Clone, PartialEq, Debug, Default)]
pub struct LoginUiState {
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub is_success: bool,
    pub user_type: Option<UserType>,
}

#[derive(Clone)]
pub struct LoginViewModel {
    pub state: ReactiveState<LoginUiState>,
    auth: AuthService,
}

impl LoginViewModel {
    pub fn new(auth: AuthService) -> Self {
        Self {
            state: ReactiveState::new(LoginUiState::default()),
            auth,
        }
    }

    /// Un solo flujo por pulsación: validar, llamar, volcar el resultado
    pub fn login(&self, email: &str, password: &str) {
        if email.trim().is_empty() || password.trim().is_empty() {
            self.state
                .update(|s| s.error_message = Some("Llena todos los campos".to_string()));
            return;
        }

        self.state.update(|s| {
            s.is_loading = true;
            s.error_message = None;
        });

        let state = self.state.clone();
        let auth = self.auth.clone();
        let email = email.to_string();
        let password = password.to_string();

        spawn_local(async move {
            match auth.iniciar_sesion(&email, &password).await {
                Ok(tipo) => {
                    state.update(|s| {
                        s.is_loading = false;
                        s.is_success = true;
                        s.user_type = Some(tipo);
                    });
                }
                Err(e) => {
                    log::error!("❌ Error en login: {}", e);
                    state.update(|s| {
                        s.is_loading = false;
                        s.error_message = Some(e.to_string());
                    });
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::SessionStore;

    fn viewmodel() -> LoginViewModel {
        LoginViewModel::new(AuthService::new(SessionStore::new()))
    }

    #[test]
    fn campos_vacios_no_disparan_red() {
        let vm = viewmodel();
        vm.login("", "secreta");

        let state = vm.state.snapshot();
        assert_eq!(state.error_message.as_deref(), Some("Llena todos los campos"));
        assert!(!state.is_loading);
        assert!(!state.is_success);
    }

    #[test]
    fn password_en_blanco_tambien_se_rechaza() {
        let vm = viewmodel();
        vm.login("a@b.com", "   ");
        assert!(vm.state.snapshot().error_message.is_some());
    }
}
