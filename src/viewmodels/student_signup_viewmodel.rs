// ============================================================================
// STUDENT SIGNUP VIEWMODEL - Paso 2 del registro (perfil de estudiante)
// ============================================================================

use wasm_bindgen_futures::spawn_local;

use crate::models::StudentRegisterRequest;
use crate::services::{ApiError, AuthService};
use crate::state::ReactiveState;

#[derive(Clone, PartialEq, Debug, Default)]
pub struct StudentSignUpUiState {
    pub user_id: String,
    pub full_name: String,
    pub student_id_number: String,
    pub profile_picture_url: String,
    pub is_loading: bool,
    pub error: Option<String>,
    pub is_success: bool,
}

#[derive(Clone)]
pub struct StudentSignUpViewModel {
    pub state: ReactiveState<StudentSignUpUiState>,
    auth: AuthService,
}

impl StudentSignUpViewModel {
    pub fn new(auth: AuthService) -> Self {
        Self {
            state: ReactiveState::new(StudentSignUpUiState::default()),
            auth,
        }
    }

    pub fn on_full_name_change(&self, v: &str) {
        let v = v.to_string();
        self.state.update(|s| s.full_name = v);
    }

    pub fn on_student_id_number_change(&self, v: &str) {
        let v = v.to_string();
        self.state.update(|s| s.student_id_number = v);
    }

    pub fn on_profile_picture_url_change(&self, v: &str) {
        let v = v.to_string();
        self.state.update(|s| s.profile_picture_url = v);
    }

    pub fn set_user_id(&self, id: &str) {
        let id = id.to_string();
        self.state.update(|s| s.user_id = id);
    }

    /// Registrar el perfil de estudiante con el user_id del paso 1
    pub fn registrar_estudiante(&self, user_id: Option<&str>) {
        let form = self.state.snapshot();

        if form.full_name.trim().is_empty() || form.student_id_number.trim().is_empty() {
            self.state
                .update(|s| s.error = Some("Llena todos los campos obligatorios".to_string()));
            return;
        }

        let user_final = user_id
            .map(str::to_string)
            .unwrap_or_else(|| form.user_id.clone());
        if user_final.trim().is_empty() {
            self.state
                .update(|s| s.error = Some("Error: ID de usuario no encontrado".to_string()));
            return;
        }

        let request = StudentRegisterRequest {
            user_id: user_final,
            full_name: form.full_name.clone(),
            student_id_number: form.student_id_number.clone(),
            profile_picture_url: form.profile_picture_url.clone(),
        };

        self.state.update(|s| {
            s.is_loading = true;
            s.error = None;
        });

        let state = self.state.clone();
        let auth = self.auth.clone();

        spawn_local(async move {
            match auth.registrar_estudiante(&request).await {
                Ok(_) => {
                    state.update(|s| {
                        s.is_loading = false;
                        s.is_success = true;
                    });
                }
                Err(ApiError::Server { status: 422 }) => {
                    state.update(|s| {
                        s.is_loading = false;
                        s.error = Some("Error de validación: Revisa tus datos".to_string());
                    });
                }
                Err(e) => {
                    log::error!("❌ Error registrando estudiante: {}", e);
                    state.update(|s| {
                        s.is_loading = false;
                        s.error = Some(e.to_string());
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

    fn viewmodel() -> StudentSignUpViewModel {
        StudentSignUpViewModel::new(AuthService::new(SessionStore::new()))
    }

    #[test]
    fn campos_obligatorios_vacios() {
        let vm = viewmodel();
        vm.registrar_estudiante(Some("u1"));
        assert_eq!(
            vm.state.snapshot().error.as_deref(),
            Some("Llena todos los campos obligatorios")
        );
    }

    #[test]
    fn sin_user_id_no_hay_registro() {
        let vm = viewmodel();
        vm.on_full_name_change("Ana López");
        vm.on_student_id_number_change("A01234567");

        vm.registrar_estudiante(None);
        assert_eq!(
            vm.state.snapshot().error.as_deref(),
            Some("Error: ID de usuario no encontrado")
        );
    }

    #[test]
    fn el_user_id_del_formulario_sirve_de_fallback() {
        let vm = viewmodel();
        vm.set_user_id("u9");
        assert_eq!(vm.state.snapshot().user_id, "u9");
    }
}
