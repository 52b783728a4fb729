// ============================================================================
// MAIN VIEWMODEL - Pantalla principal (catálogo)
// ============================================================================

use wasm_bindgen_futures::spawn_local;

use crate::models::{Categoria, Platillo};
use crate::services::PlatilloService;
use crate::state::ReactiveState;

/// Todo lo que la pantalla principal necesita mostrar
#[derive(Clone, PartialEq, Debug)]
pub struct MainUiState {
    pub categorias: Vec<Categoria>,
    pub platillos: Vec<Platillo>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for MainUiState {
    fn default() -> Self {
        Self {
            categorias: Vec::new(),
            platillos: Vec::new(),
            is_loading: true,
            error: None,
        }
    }
}

#[derive(Clone)]
pub struct MainViewModel {
    pub state: ReactiveState<MainUiState>,
    service: PlatilloService,
}

impl MainViewModel {
    pub fn new() -> Self {
        Self {
            state: ReactiveState::new(MainUiState::default()),
            service: PlatilloService::new(),
        }
    }

    /// Carga inicial del catálogo (la pantalla lo invoca al montarse).
    /// Un fallo no es fatal: se muestra un mensaje y la app sigue viva.
    pub fn cargar_datos(&self) {
        let state = self.state.clone();
        let service = self.service.clone();

        state.update(|s| s.is_loading = true);

        spawn_local(async move {
            let categorias = service.obtener_categorias().await;
            let platillos = service.obtener_platillos().await;

            match (categorias, platillos) {
                (Ok(categorias), Ok(platillos)) => {
                    state.update(|s| {
                        s.categorias = categorias;
                        s.platillos = platillos;
                        s.is_loading = false;
                        s.error = None;
                    });
                }
                (categorias, platillos) => {
                    if let Err(e) = &categorias {
                        log::error!("❌ Error cargando categorías: {}", e);
                    }
                    if let Err(e) = &platillos {
                        log::error!("❌ Error cargando platillos: {}", e);
                    }
                    state.update(|s| {
                        // Lo que sí llegó se muestra; el resto queda vacío
                        s.categorias = categorias.unwrap_or_default();
                        s.platillos = platillos.unwrap_or_default();
                        s.is_loading = false;
                        s.error = Some(
                            "No se pudieron cargar los datos. Inténtalo de nuevo.".to_string(),
                        );
                    });
                }
            }
        });
    }
}

impl Default for MainViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estado_inicial_en_loading_sin_datos() {
        let state = MainUiState::default();
        assert!(state.is_loading);
        assert!(state.categorias.is_empty());
        assert!(state.platillos.is_empty());
        assert!(state.error.is_none());
    }
}
