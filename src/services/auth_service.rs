// ============================================================================
// AUTH SERVICE - Gateway de autenticación
// ============================================================================
// Registro (usuario base / comercio / estudiante), login con fallback de
// tipo, lecturas de perfil y logout. Todo éxito de registro/login termina
// en UN solo commit de sesión (los tres campos juntos, nunca parciales).
// ============================================================================

use crate::models::{
    ComercianteRegisterRequest, ComercianteRegisterResponse, LoginRequest, StudentRegisterRequest,
    StudentRegisterResponse, UserDetail, UserRegisterRequest, UserRegisterResponse, UserType,
};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;
use crate::stores::SessionStore;

#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
    session: SessionStore,
}

impl AuthService {
    pub fn new(session: SessionStore) -> Self {
        Self {
            api: ApiClient::new(),
            session,
        }
    }

    /// Paso 1 del registro: crear el usuario base y guardar sesión
    /// con el id resuelto (`id`, si no `uuid`, si no error).
    pub async fn registrar_usuario_base(
        &self,
        email: &str,
        password: &str,
        user_type: UserType,
    ) -> Result<UserRegisterResponse, ApiError> {
        let request = UserRegisterRequest {
            email: email.to_string(),
            password_hash: password.to_string(),
            user_type: user_type.as_str().to_string(),
        };

        let wrapper = self.api.register_user(&request).await?;
        let mut usuario = wrapper.data;

        let id_final = usuario
            .resolved_id()
            .ok_or_else(|| {
                ApiError::Parse("la respuesta de registro no trae id ni uuid".to_string())
            })?
            .to_string();

        self.session.commit(user_type, &id_final);
        log::info!("✅ Usuario base creado: {}", id_final);

        usuario.id = Some(id_final);
        Ok(usuario)
    }

    /// Paso 2 del registro de comercio. Requiere el owner_id del paso 1.
    pub async fn registrar_comerciante(
        &self,
        request: &ComercianteRegisterRequest,
    ) -> Result<ComercianteRegisterResponse, ApiError> {
        let wrapper = self.api.register_comerciante(request).await?;
        let mut comercio = wrapper.data;

        let id_final = comercio
            .resolved_id()
            .ok_or_else(|| {
                ApiError::Parse("la respuesta del comercio no trae id ni uuid".to_string())
            })?
            .to_string();

        self.session.commit(UserType::Merchant, &id_final);
        log::info!("✅ Comercio registrado: {}", id_final);

        comercio.id = Some(id_final);
        Ok(comercio)
    }

    /// Paso 2 del registro de estudiante. Requiere el user_id del paso 1.
    pub async fn registrar_estudiante(
        &self,
        request: &StudentRegisterRequest,
    ) -> Result<StudentRegisterResponse, ApiError> {
        let wrapper = self.api.register_estudiante(request).await?;
        let mut estudiante = wrapper.data;

        let id_final = estudiante
            .resolved_id()
            .ok_or_else(|| {
                ApiError::Parse("la respuesta del estudiante no trae id".to_string())
            })?
            .to_string();

        self.session.commit(UserType::Student, &id_final);
        log::info!("✅ Estudiante registrado: {}", id_final);

        estudiante.id = Some(id_final);
        Ok(estudiante)
    }

    /// Login. Si la respuesta no trae `user_type`, se resuelve con un
    /// lookup secundario por id antes de declarar éxito; si tampoco ahí
    /// aparece, el login falla y la sesión queda intacta.
    pub async fn iniciar_sesion(&self, email: &str, password: &str) -> Result<UserType, ApiError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self.api.login(&request).await?;
        log::info!(
            "🔐 Respuesta de login - id: {:?}, tipo: {:?}",
            response.user_id,
            response.user_type
        );

        let user_id = response.user_id_valido().map(str::to_string);
        let user_id = match user_id {
            Some(id) => id,
            None => {
                let mensaje = response
                    .message
                    .unwrap_or_else(|| "Credenciales inválidas".to_string());
                return Err(ApiError::Auth(mensaje));
            }
        };

        // Fallback: el login a veces no devuelve el tipo
        let mut tipo = UserType::from_wire(response.user_type.as_deref());
        if tipo == UserType::Unknown {
            log::info!("🔎 Login sin tipo, buscando usuario {} por id...", user_id);
            tipo = match self.api.get_user_by_id(&user_id).await {
                Ok(wrapper) => wrapper.data.tipo(),
                Err(_) => UserType::Unknown,
            };
        }

        if tipo == UserType::Unknown {
            return Err(ApiError::Auth(
                "No se pudo obtener el tipo de usuario".to_string(),
            ));
        }

        self.session.commit(tipo, &user_id);
        log::info!("✅ Sesión guardada. id: {}, tipo: {}", user_id, tipo.as_str());
        Ok(tipo)
    }

    /// Perfil base del usuario
    pub async fn obtener_perfil_usuario(&self, user_id: &str) -> Result<UserDetail, ApiError> {
        let wrapper = self.api.get_user_by_id(user_id).await?;
        Ok(wrapper.data)
    }

    /// Datos del comercio asociado a un usuario
    pub async fn obtener_datos_comerciante(
        &self,
        owner_id: &str,
    ) -> Result<ComercianteRegisterResponse, ApiError> {
        let wrapper = self.api.get_merchant_by_owner(owner_id).await?;
        Ok(wrapper.data)
    }

    /// Logout: limpia la sesión incondicionalmente
    pub fn cerrar_sesion(&self) {
        log::info!("👋 Logout");
        self.session.clear();
    }
}
