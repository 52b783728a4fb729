use serde::Deserialize;

use crate::models::auth::ComercianteRegisterResponse;
use crate::models::session::UserType;

/// Detalle de usuario de GET /usuarios/{id}.
/// El id puede venir como `id`, `user_id` o `uuid` según el endpoint de origen;
/// los campos de rol (estudiante/comercio) llegan vacíos si no aplican.
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct UserDetail {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "user_id", default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "user_type", default)]
    pub user_type: Option<String>,
    #[serde(rename = "full_name", default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "student_id_number", default)]
    pub student_id_number: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "logo_url", default)]
    pub logo_url: Option<String>,
}

impl UserDetail {
    /// Id real sin importar bajo qué campo llegó
    pub fn resolved_id(&self) -> &str {
        [&self.id, &self.user_id, &self.uuid]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|id| !id.is_empty())
            .unwrap_or("unknown_id")
    }

    pub fn tipo(&self) -> UserType {
        UserType::from_wire(self.user_type.as_deref())
    }

    /// Fusión del perfil base con los datos del comercio: los campos
    /// del comercio pisan los placeholders del usuario base.
    pub fn merge_comercio(mut self, comercio: &ComercianteRegisterResponse) -> Self {
        self.name = comercio.name.clone();
        self.description = comercio.description.clone();
        self.logo_url = comercio.logo_url.clone();
        self
    }
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct UserDetailWrapper {
    pub data: UserDetail,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_merchant() -> UserDetail {
        serde_json::from_str(
            r#"{"uuid":"m1","email":"tacos@uni.mx","user_type":"merchant"}"#,
        )
        .unwrap()
    }

    #[test]
    fn resolved_id_prefiere_id_sobre_user_id_y_uuid() {
        let detail: UserDetail =
            serde_json::from_str(r#"{"id":"a","user_id":"b","uuid":"c","email":null,"user_type":null,"full_name":null,"description":null,"student_id_number":null,"name":null}"#)
                .unwrap();
        assert_eq!(detail.resolved_id(), "a");
    }

    #[test]
    fn resolved_id_sin_ningun_campo() {
        let detail: UserDetail = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(detail.resolved_id(), "unknown_id");
    }

    #[test]
    fn merge_pisa_los_campos_del_comercio() {
        let comercio: ComercianteRegisterResponse = serde_json::from_str(
            r#"{"id":"c1","name":"Tacos El Güero","description":"Tacos al pastor","logo_url":"https://img/logo.png"}"#,
        )
        .unwrap();

        let completo = base_merchant().merge_comercio(&comercio);
        assert_eq!(completo.name.as_deref(), Some("Tacos El Güero"));
        assert_eq!(completo.description.as_deref(), Some("Tacos al pastor"));
        assert_eq!(completo.logo_url.as_deref(), Some("https://img/logo.png"));
        // Los campos base sobreviven a la fusión
        assert_eq!(completo.email.as_deref(), Some("tacos@uni.mx"));
        assert_eq!(completo.tipo(), UserType::Merchant);
    }

    #[test]
    fn tipo_desconocido_no_rompe() {
        let detail: UserDetail =
            serde_json::from_str(r#"{"id":"u1","user_type":"admin"}"#).unwrap();
        assert_eq!(detail.tipo(), UserType::Unknown);
    }
}
