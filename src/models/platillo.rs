use serde::{Deserialize, Serialize};

/// DTO de comida tal como lo devuelve el backend.
/// El precio llega serializado como string ("12.50").
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ComidaDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(rename = "image_url", default)]
    pub image_url: Option<String>,
    #[serde(rename = "is_available", default)]
    pub is_available: Option<bool>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct ComidasResponse {
    pub data: Vec<ComidaDto>,
}

/// Modelo limpio para la UI
#[derive(Clone, PartialEq, Debug)]
pub struct Platillo {
    pub id: String,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: f64,
    pub imagen_url: Option<String>,
}

impl ComidaDto {
    /// Mapear el DTO al modelo de UI.
    /// Un precio no numérico degrada a 0.0 en vez de tirar todo el catálogo.
    pub fn into_platillo(self) -> Platillo {
        let precio = match self.price.parse::<f64>() {
            Ok(p) => p,
            Err(_) => {
                log::warn!("⚠️ Precio no numérico para '{}': {:?}", self.name, self.price);
                0.0
            }
        };

        Platillo {
            id: self.id,
            nombre: self.name,
            descripcion: self.description,
            precio,
            imagen_url: self.image_url,
        }
    }
}

/// Payload del formulario de alta de platillo (lado cliente,
/// todavía sin merchant_id resuelto)
#[derive(Clone, PartialEq, Debug, Default)]
pub struct NuevoPlatillo {
    pub nombre: String,
    pub descripcion: String,
    pub precio: f64,
    pub imagen_url: String,
    pub categoria_nombre: String,
    pub categoria_id: String,
}

/// Request de creación: el precio se envía como número
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct CreatePlatilloRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(rename = "image_url")]
    pub image_url: String,
    #[serde(rename = "merchant_id")]
    pub merchant_id: String,
    #[serde(rename = "is_available")]
    pub is_available: bool,
    #[serde(rename = "category_id")]
    pub category_id: String,
}

/// Respuesta de creación: la API devuelve el precio como string largo
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct CreatePlatilloResponse {
    pub id: String,
    #[serde(rename = "merchant_id")]
    pub merchant_id: String,
    #[serde(rename = "category_id")]
    pub category_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: String,
    #[serde(rename = "image_url", default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(rename = "is_available", default)]
    pub is_available: Option<bool>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct CreatePlatilloWrapper {
    pub data: CreatePlatilloResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapea_dto_a_platillo() {
        let dto = ComidaDto {
            id: "d1".to_string(),
            name: "Pizza Pepperoni".to_string(),
            description: Some("Salsa de tomate y pepperoni".to_string()),
            price: "12.50".to_string(),
            category: Some("Pizza".to_string()),
            image_url: None,
            is_available: Some(true),
        };

        let platillo = dto.into_platillo();
        assert_eq!(platillo.id, "d1");
        assert_eq!(platillo.nombre, "Pizza Pepperoni");
        assert_eq!(platillo.precio, 12.5);
        assert!(platillo.imagen_url.is_none());
    }

    #[test]
    fn precio_invalido_degrada_a_cero() {
        let dto = ComidaDto {
            id: "d2".to_string(),
            name: "Tarta".to_string(),
            description: None,
            price: "gratis".to_string(),
            category: None,
            image_url: None,
            is_available: None,
        };

        assert_eq!(dto.into_platillo().precio, 0.0);
    }

    #[test]
    fn parsea_el_envelope_data() {
        let json = r#"{"data":[{"id":"d1","name":"Hamburguesa","price":"10.99"}]}"#;
        let response: ComidasResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].name, "Hamburguesa");
        // Campos opcionales ausentes no rompen el parseo
        assert!(response.data[0].description.is_none());
    }
}
