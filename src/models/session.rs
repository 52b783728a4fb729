use serde::{Deserialize, Deserializer, Serialize};

/// Rol del usuario autenticado
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Student,
    Merchant,
    #[default]
    Unknown,
}

// Un rol que el backend no conozca degrada a Unknown en vez de romper
// la restauración de la sesión
impl<'de> Deserialize<'de> for UserType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let valor = String::deserialize(deserializer)?;
        Ok(UserType::from_wire(Some(&valor)))
    }
}

impl UserType {
    /// Valor tal como viaja en el wire ("student" / "merchant")
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Student => "student",
            UserType::Merchant => "merchant",
            UserType::Unknown => "unknown",
        }
    }

    /// Parsear el campo `user_type` del backend (None o vacío -> Unknown)
    pub fn from_wire(value: Option<&str>) -> Self {
        match value {
            Some("student") => UserType::Student,
            Some("merchant") => UserType::Merchant,
            _ => UserType::Unknown,
        }
    }
}

/// Sesión local: los tres campos se escriben siempre juntos
/// (nunca un user_id sin user_type) y se persisten como UN solo blob JSON.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct SessionData {
    pub is_logged_in: bool,
    pub user_id: Option<String>,
    pub user_type: UserType,
}

impl SessionData {
    /// Sesión autenticada con identidad completa
    pub fn logged_in(user_type: UserType, user_id: &str) -> Self {
        Self {
            is_logged_in: true,
            user_id: Some(user_id.to_string()),
            user_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_type_round_trip() {
        assert_eq!(UserType::from_wire(Some("student")), UserType::Student);
        assert_eq!(UserType::from_wire(Some("merchant")), UserType::Merchant);
        assert_eq!(UserType::from_wire(Some("admin")), UserType::Unknown);
        assert_eq!(UserType::from_wire(None), UserType::Unknown);
        assert_eq!(UserType::Merchant.as_str(), "merchant");
    }

    #[test]
    fn user_type_serde_lowercase() {
        let json = serde_json::to_string(&UserType::Student).unwrap();
        assert_eq!(json, "\"student\"");
        let parsed: UserType = serde_json::from_str("\"merchant\"").unwrap();
        assert_eq!(parsed, UserType::Merchant);
        // Un rol desconocido del backend no rompe la deserialización
        let parsed: UserType = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(parsed, UserType::Unknown);
    }

    #[test]
    fn logged_in_escribe_los_tres_campos() {
        let session = SessionData::logged_in(UserType::Student, "u1");
        assert!(session.is_logged_in);
        assert_eq!(session.user_id.as_deref(), Some("u1"));
        assert_eq!(session.user_type, UserType::Student);
    }

    #[test]
    fn session_vacia_por_defecto() {
        let session = SessionData::default();
        assert!(!session.is_logged_in);
        assert!(session.user_id.is_none());
        assert_eq!(session.user_type, UserType::Unknown);
    }

    #[test]
    fn session_sobrevive_el_round_trip_json() {
        let session = SessionData::logged_in(UserType::Merchant, "m-42");
        let json = serde_json::to_string(&session).unwrap();
        let restored: SessionData = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }
}
