use thiserror::Error;

/// Taxonomía de errores de los gateways.
/// Los viewmodels traducen estas variantes a mensajes de estado para la UI;
/// ningún fallo tira el proceso.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Entrada inválida detectada en el cliente, antes de tocar la red
    #[error("{0}")]
    Validation(String),
    /// Credenciales rechazadas (HTTP 400/401/422 en login)
    #[error("{0}")]
    Auth(String),
    /// El recurso buscado no existe (perfil o comercio inexistente)
    #[error("{0}")]
    NotFound(String),
    /// Cualquier otro status no-2xx
    #[error("Error del servidor ({status})")]
    Server { status: u16 },
    /// Fallo de transporte (sin conexión, DNS, CORS)
    #[error("Error de red: {0}")]
    Network(String),
    /// El body no tiene la forma esperada
    #[error("Respuesta inesperada del servidor: {0}")]
    Parse(String),
}

impl ApiError {
    /// Clasificar un status no-2xx genérico
    pub fn from_status(status: u16) -> Self {
        if status == 404 {
            ApiError::NotFound("El recurso solicitado no existe".to_string())
        } else {
            ApiError::Server { status }
        }
    }

    /// Clasificar un status no-2xx del endpoint de login:
    /// 400/401/422 significan credenciales rechazadas
    pub fn from_login_status(status: u16) -> Self {
        match status {
            400 | 401 | 422 => ApiError::Auth("Correo o contraseña incorrectos".to_string()),
            otro => ApiError::Server { status: otro },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_clasifica_credenciales_rechazadas() {
        for status in [400, 401, 422] {
            assert!(matches!(
                ApiError::from_login_status(status),
                ApiError::Auth(_)
            ));
        }
        assert_eq!(
            ApiError::from_login_status(500),
            ApiError::Server { status: 500 }
        );
    }

    #[test]
    fn status_generico_distingue_not_found() {
        assert!(matches!(ApiError::from_status(404), ApiError::NotFound(_)));
        assert_eq!(ApiError::from_status(422), ApiError::Server { status: 422 });
        assert_eq!(ApiError::from_status(503), ApiError::Server { status: 503 });
    }

    #[test]
    fn los_mensajes_son_legibles() {
        let error = ApiError::Server { status: 500 };
        assert_eq!(error.to_string(), "Error del servidor (500)");
        let error = ApiError::Auth("Correo o contraseña incorrectos".to_string());
        assert_eq!(error.to_string(), "Correo o contraseña incorrectos");
    }
}
