use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Respuesta de POST /login. A diferencia del resto de endpoints,
/// NO viene envuelta bajo `data`, y `user_type` puede faltar.
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "user_id", default)]
    pub user_id: Option<String>,
    #[serde(rename = "user_type", default)]
    pub user_type: Option<String>,
}

impl LoginResponse {
    /// Id del usuario autenticado, descartando strings vacíos
    pub fn user_id_valido(&self) -> Option<&str> {
        self.user_id.as_deref().filter(|id| !id.is_empty())
    }
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct UserRegisterRequest {
    pub email: String,
    #[serde(rename = "password_hash")]
    pub password_hash: String,
    #[serde(rename = "user_type")]
    pub user_type: String,
}

/// El id del usuario creado llega a veces como `id` y a veces como `uuid`
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct UserRegisterResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

impl UserRegisterResponse {
    /// Política de resolución de id: `id`, si no `uuid`
    pub fn resolved_id(&self) -> Option<&str> {
        primer_id_no_vacio(&[self.id.as_deref(), self.uuid.as_deref()])
    }
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct UserResponseWrapper {
    pub data: UserRegisterResponse,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct ComercianteRegisterRequest {
    #[serde(rename = "owner_id")]
    pub owner_id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "logo_url")]
    pub logo_url: String,
    #[serde(rename = "location_latitude")]
    pub location_latitude: f32,
    #[serde(rename = "location_longitude")]
    pub location_longitude: f32,
    pub address: String,
    #[serde(rename = "opening_time")]
    pub opening_time: String,
    #[serde(rename = "closing_time")]
    pub closing_time: String,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct ComercianteRegisterResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(rename = "owner_id", default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "location_latitude", default)]
    pub location_latitude: Option<f32>,
    #[serde(rename = "location_longitude", default)]
    pub location_longitude: Option<f32>,
    #[serde(rename = "is_validated", default)]
    pub is_validated: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "logo_url", default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(rename = "opening_time", default)]
    pub opening_time: Option<String>,
    #[serde(rename = "closing_time", default)]
    pub closing_time: Option<String>,
}

impl ComercianteRegisterResponse {
    pub fn resolved_id(&self) -> Option<&str> {
        primer_id_no_vacio(&[self.id.as_deref(), self.uuid.as_deref()])
    }
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct ComercianteResponseWrapper {
    pub data: ComercianteRegisterResponse,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct StudentRegisterRequest {
    #[serde(rename = "user_id")]
    pub user_id: String,
    #[serde(rename = "full_name")]
    pub full_name: String,
    #[serde(rename = "student_id_number")]
    pub student_id_number: String,
    #[serde(rename = "profile_picture_url")]
    pub profile_picture_url: String,
}

/// En estudiantes el fallback del id es `user_id` (no `uuid`)
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct StudentRegisterResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "user_id", default)]
    pub user_id: Option<String>,
    #[serde(rename = "full_name", default)]
    pub full_name: Option<String>,
    #[serde(rename = "student_id_number", default)]
    pub student_id_number: Option<String>,
    #[serde(rename = "profile_picture_url", default)]
    pub profile_picture_url: Option<String>,
    #[serde(rename = "is_verified", default)]
    pub is_verified: Option<bool>,
}

impl StudentRegisterResponse {
    pub fn resolved_id(&self) -> Option<&str> {
        primer_id_no_vacio(&[self.id.as_deref(), self.user_id.as_deref()])
    }
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct StudentResponseWrapper {
    pub data: StudentRegisterResponse,
}

/// Resolución de id centralizada: primer candidato presente y no vacío
fn primer_id_no_vacio<'a>(candidatos: &[Option<&'a str>]) -> Option<&'a str> {
    candidatos
        .iter()
        .flatten()
        .copied()
        .find(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_resuelve_id_directo() {
        let wrapper: UserResponseWrapper =
            serde_json::from_str(r#"{"data":{"id":"u1"}}"#).unwrap();
        assert_eq!(wrapper.data.resolved_id(), Some("u1"));
    }

    #[test]
    fn register_cae_a_uuid_si_no_hay_id() {
        let wrapper: UserResponseWrapper =
            serde_json::from_str(r#"{"data":{"uuid":"abc-123","email":"a@b.com"}}"#).unwrap();
        assert_eq!(wrapper.data.resolved_id(), Some("abc-123"));
    }

    #[test]
    fn register_sin_id_ni_uuid_falla_la_resolucion() {
        let wrapper: UserResponseWrapper =
            serde_json::from_str(r#"{"data":{"email":"a@b.com"}}"#).unwrap();
        assert_eq!(wrapper.data.resolved_id(), None);
    }

    #[test]
    fn id_vacio_cuenta_como_ausente() {
        let wrapper: UserResponseWrapper =
            serde_json::from_str(r#"{"data":{"id":"","uuid":"u9"}}"#).unwrap();
        assert_eq!(wrapper.data.resolved_id(), Some("u9"));
    }

    #[test]
    fn estudiante_usa_user_id_como_fallback() {
        let response: StudentRegisterResponse =
            serde_json::from_str(r#"{"user_id":"u7","full_name":"Ana"}"#).unwrap();
        assert_eq!(response.resolved_id(), Some("u7"));
    }

    #[test]
    fn login_sin_user_type_parsea_igual() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"success":true,"user_id":"u1"}"#).unwrap();
        assert_eq!(response.user_id_valido(), Some("u1"));
        assert!(response.user_type.is_none());
    }

    #[test]
    fn login_con_user_id_vacio_no_es_valido() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"user_id":"","message":"Credenciales inválidas"}"#).unwrap();
        assert_eq!(response.user_id_valido(), None);
    }
}
