use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CategoriaDto {
    pub id: String,
    pub name: String,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct CategoriasResponse {
    pub data: Vec<CategoriaDto>,
}

/// Categoría para la UI (dropdown de creación de platillo, filtros del catálogo)
#[derive(Clone, PartialEq, Debug)]
pub struct Categoria {
    pub id: String,
    pub nombre: String,
}

impl CategoriaDto {
    pub fn into_categoria(self) -> Categoria {
        Categoria {
            id: self.id,
            nombre: self.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapea_dto_a_categoria() {
        let json = r#"{"data":[{"id":"c1","name":"Bebidas"},{"id":"c2","name":"Postres"}]}"#;
        let response: CategoriasResponse = serde_json::from_str(json).unwrap();
        let categorias: Vec<Categoria> = response
            .data
            .into_iter()
            .map(CategoriaDto::into_categoria)
            .collect();
        assert_eq!(categorias.len(), 2);
        assert_eq!(categorias[0].nombre, "Bebidas");
        assert_eq!(categorias[1].id, "c2");
    }
}
