// ============================================================================
// CREATE PLATILLO VIEWMODEL - Alta de platillo (solo comercios)
// ============================================================================

use wasm_bindgen_futures::spawn_local;

use crate::models::{Categoria, NuevoPlatillo};
use crate::services::{ApiError, PlatilloService};
use crate::state::ReactiveState;

/// Estados de la operación de creación
#[derive(Clone, PartialEq, Debug, Default)]
pub enum CreatePlatilloStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct CreatePlatilloUiState {
    pub nombre: String,
    pub descripcion: String,
    pub precio: String,
    pub imagen_url: String,
    pub categoria_nombre: String,
    pub categoria_id: String,
    pub status: CreatePlatilloStatus,
    pub categorias: Vec<Categoria>,
}

#[derive(Clone)]
pub struct CreatePlatilloViewModel {
    pub state: ReactiveState<CreatePlatilloUiState>,
    service: PlatilloService,
}

impl CreatePlatilloViewModel {
    pub fn new() -> Self {
        Self {
            state: ReactiveState::new(CreatePlatilloUiState::default()),
            service: PlatilloService::new(),
        }
    }

    /// Llenar el dropdown de categorías (la pantalla lo invoca al montarse).
    /// Un fallo aquí es silencioso: el formulario sigue usable.
    pub fn cargar_categorias(&self) {
        let state = self.state.clone();
        let service = self.service.clone();

        spawn_local(async move {
            match service.obtener_categorias().await {
                Ok(categorias) => state.update(|s| s.categorias = categorias),
                Err(e) => log::warn!("⚠️ Error cargando categorías: {}", e),
            }
        });
    }

    pub fn on_nombre_change(&self, v: &str) {
        let v = v.to_string();
        self.state.update(|s| s.nombre = v);
    }

    pub fn on_descripcion_change(&self, v: &str) {
        let v = v.to_string();
        self.state.update(|s| s.descripcion = v);
    }

    pub fn on_precio_change(&self, v: &str) {
        let v = v.to_string();
        self.state.update(|s| s.precio = v);
    }

    pub fn on_imagen_url_change(&self, v: &str) {
        let v = v.to_string();
        self.state.update(|s| s.imagen_url = v);
    }

    /// Selección de una opción del dropdown
    pub fn seleccionar_categoria(&self, categoria: &Categoria) {
        let nombre = categoria.nombre.clone();
        let id = categoria.id.clone();
        self.state.update(|s| {
            s.categoria_nombre = nombre;
            s.categoria_id = id;
        });
    }

    /// Crear el platillo. El gateway resuelve primero el merchant_id del
    /// usuario; sin comercio registrado no se crea nada (NotFound).
    pub fn crear_platillo(&self, user_id: &str) {
        let form = self.state.snapshot();

        let precio = form.precio.trim().parse::<f64>().ok();
        let precio = match precio {
            Some(p)
                if !form.nombre.trim().is_empty()
                    && !form.descripcion.trim().is_empty()
                    && !form.categoria_nombre.trim().is_empty()
                    && !form.categoria_id.trim().is_empty() =>
            {
                p
            }
            _ => {
                self.state.update(|s| {
                    s.status = CreatePlatilloStatus::Error(
                        "Por favor llena todos los campos correctamente.".to_string(),
                    )
                });
                return;
            }
        };

        let nuevo = NuevoPlatillo {
            nombre: form.nombre.clone(),
            descripcion: form.descripcion.clone(),
            precio,
            imagen_url: form.imagen_url.clone(),
            categoria_nombre: form.categoria_nombre.clone(),
            categoria_id: form.categoria_id.clone(),
        };

        self.state
            .update(|s| s.status = CreatePlatilloStatus::Loading);

        let state = self.state.clone();
        let service = self.service.clone();
        let user_id = user_id.to_string();

        spawn_local(async move {
            match service.crear_platillo(&user_id, &nuevo).await {
                Ok(_) => state.update(|s| s.status = CreatePlatilloStatus::Success),
                Err(ApiError::Server { status: 422 }) => {
                    state.update(|s| {
                        s.status = CreatePlatilloStatus::Error(
                            "Error de validación: revisa los datos del platillo".to_string(),
                        )
                    });
                }
                Err(e) => {
                    log::error!("❌ Error creando platillo: {}", e);
                    state.update(|s| s.status = CreatePlatilloStatus::Error(e.to_string()));
                }
            }
        });
    }

    /// Volver a Idle y limpiar el formulario (se conservan las categorías)
    pub fn reset_state(&self) {
        self.state.update(|s| {
            s.status = CreatePlatilloStatus::Idle;
            s.nombre.clear();
            s.descripcion.clear();
            s.precio.clear();
            s.imagen_url.clear();
            s.categoria_nombre.clear();
            s.categoria_id.clear();
        });
    }
}

impl Default for CreatePlatilloViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formulario_completo(vm: &CreatePlatilloViewModel) {
        vm.on_nombre_change("Hamburguesa BBQ");
        vm.on_descripcion_change("Carne jugosa con salsa BBQ");
        vm.on_precio_change("11.99");
        vm.on_imagen_url_change("https://img/bbq.jpg");
        vm.seleccionar_categoria(&Categoria {
            id: "c1".to_string(),
            nombre: "Hamburguesas".to_string(),
        });
    }

    #[test]
    fn formulario_incompleto_queda_en_error() {
        let vm = CreatePlatilloViewModel::new();
        vm.on_nombre_change("Hamburguesa BBQ");
        vm.crear_platillo("u1");

        assert_eq!(
            vm.state.snapshot().status,
            CreatePlatilloStatus::Error(
                "Por favor llena todos los campos correctamente.".to_string()
            )
        );
    }

    #[test]
    fn precio_no_numerico_queda_en_error() {
        let vm = CreatePlatilloViewModel::new();
        formulario_completo(&vm);
        vm.on_precio_change("caro");
        vm.crear_platillo("u1");

        assert!(matches!(
            vm.state.snapshot().status,
            CreatePlatilloStatus::Error(_)
        ));
    }

    #[test]
    fn seleccionar_categoria_llena_nombre_e_id() {
        let vm = CreatePlatilloViewModel::new();
        vm.seleccionar_categoria(&Categoria {
            id: "c2".to_string(),
            nombre: "Postres".to_string(),
        });

        let state = vm.state.snapshot();
        assert_eq!(state.categoria_nombre, "Postres");
        assert_eq!(state.categoria_id, "c2");
    }

    #[test]
    fn reset_limpia_el_formulario_pero_no_las_categorias() {
        let vm = CreatePlatilloViewModel::new();
        formulario_completo(&vm);
        vm.state.update(|s| {
            s.categorias = vec![Categoria {
                id: "c1".to_string(),
                nombre: "Hamburguesas".to_string(),
            }]
        });

        vm.reset_state();

        let state = vm.state.snapshot();
        assert_eq!(state.status, CreatePlatilloStatus::Idle);
        assert!(state.nombre.is_empty());
        assert!(state.precio.is_empty());
        assert_eq!(state.categorias.len(), 1);
    }
}
