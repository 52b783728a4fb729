// ============================================================================
// SIGNUP VIEWMODEL - Paso 1 del registro (usuario base)
// ============================================================================
// Máquina del flujo: Unauthenticated -> BaseUserCreated (user_id_created)
// -> RoleProfileCreated (pantallas de comercio/estudiante). Cada paso
// necesita el id del anterior.
// ============================================================================

use wasm_bindgen_futures::spawn_local;

use crate::models::UserType;
use crate::services::AuthService;
use crate::state::ReactiveState;

#[derive(Clone, PartialEq, Debug, Default)]
pub struct SignUpUiState {
    pub email: String,
    pub password: String,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Con valor: el paso 1 terminó y toca crear el perfil de rol
    pub user_id_created: Option<String>,
    pub is_user_step_completed: bool,
}

#[derive(Clone)]
pub struct SignUpViewModel {
    pub state: ReactiveState<SignUpUiState>,
    auth: AuthService,
}

impl SignUpViewModel {
    pub fn new(auth: AuthService) -> Self {
        Self {
            state: ReactiveState::new(SignUpUiState::default()),
            auth,
        }
    }

    pub fn on_email_change(&self, value: &str) {
        let value = value.to_string();
        self.state.update(|s| s.email = value);
    }

    pub fn on_password_change(&self, value: &str) {
        let value = value.to_string();
        self.state.update(|s| s.password = value);
    }

    /// Paso 1: crear el usuario en la tabla 'users'
    pub fn crear_usuario_base(&self, user_type: UserType) {
        let form = self.state.snapshot();

        if form.email.trim().is_empty() || form.password.trim().is_empty() {
            self.state
                .update(|s| s.error = Some("Email y contraseña son obligatorios".to_string()));
            return;
        }

        self.state.update(|s| {
            s.is_loading = true;
            s.error = None;
        });

        let state = self.state.clone();
        let auth = self.auth.clone();

        spawn_local(async move {
            match auth
                .registrar_usuario_base(&form.email, &form.password, user_type)
                .await
            {
                Ok(usuario) => {
                    state.update(|s| {
                        s.is_loading = false;
                        s.user_id_created = usuario.id.clone();
                        s.is_user_step_completed = true;
                        s.error = None;
                    });
                }
                Err(e) => {
                    state.update(|s| {
                        s.is_loading = false;
                        s.error = Some(format!("Error al crear usuario: {}", e));
                    });
                }
            }
        });
    }

    pub fn clear_error(&self) {
        self.state.update(|s| s.error = None);
    }

    pub fn reset_state(&self) {
        self.state.set(SignUpUiState::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::SessionStore;

    fn viewmodel() -> SignUpViewModel {
        SignUpViewModel::new(AuthService::new(SessionStore::new()))
    }

    #[test]
    fn formulario_vacio_se_rechaza_antes_de_la_red() {
        let vm = viewmodel();
        vm.crear_usuario_base(UserType::Student);

        let state = vm.state.snapshot();
        assert_eq!(
            state.error.as_deref(),
            Some("Email y contraseña son obligatorios")
        );
        assert!(!state.is_user_step_completed);
    }

    #[test]
    fn los_setters_actualizan_el_formulario() {
        let vm = viewmodel();
        vm.on_email_change("a@b.com");
        vm.on_password_change("x");

        let state = vm.state.snapshot();
        assert_eq!(state.email, "a@b.com");
        assert_eq!(state.password, "x");
    }

    #[test]
    fn reset_vuelve_al_estado_inicial() {
        let vm = viewmodel();
        vm.on_email_change("a@b.com");
        vm.crear_usuario_base(UserType::Merchant); // falla la validación (password vacío)
        vm.reset_state();

        assert_eq!(vm.state.snapshot(), SignUpUiState::default());
    }
}
