// ============================================================================
// CART VIEWMODEL - Carrito en memoria
// ============================================================================
// Vive solo lo que vive la app: sin persistencia, se vacía al reiniciar.
// Sin dedup: agregar el mismo platillo dos veces son dos líneas.
// ============================================================================

use crate::models::Platillo;
use crate::state::ReactiveState;

#[derive(Clone, PartialEq, Debug, Default)]
pub struct CartUiState {
    pub platillos: Vec<Platillo>,
    pub total: f64,
}

#[derive(Clone)]
pub struct CartViewModel {
    pub state: ReactiveState<CartUiState>,
}

impl CartViewModel {
    pub fn new() -> Self {
        Self {
            state: ReactiveState::new(CartUiState::default()),
        }
    }

    /// Agregar una línea y recalcular el total como suma de precios
    pub fn agregar_al_carrito(&self, platillo: Platillo) {
        self.state.update(|s| {
            s.platillos.push(platillo);
            s.total = s.platillos.iter().map(|p| p.precio).sum();
        });
    }
}

impl Default for CartViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platillo(id: &str, precio: f64) -> Platillo {
        Platillo {
            id: id.to_string(),
            nombre: format!("Platillo {}", id),
            descripcion: None,
            precio,
            imagen_url: None,
        }
    }

    #[test]
    fn carrito_vacio_suma_cero() {
        let vm = CartViewModel::new();
        let state = vm.state.snapshot();
        assert!(state.platillos.is_empty());
        assert_eq!(state.total, 0.0);
    }

    #[test]
    fn el_total_es_la_suma_de_las_lineas() {
        let vm = CartViewModel::new();
        vm.agregar_al_carrito(platillo("d1", 10.0));
        vm.agregar_al_carrito(platillo("d2", 5.5));

        let state = vm.state.snapshot();
        assert_eq!(state.platillos.len(), 2);
        assert_eq!(state.total, 15.5);
    }

    #[test]
    fn repetir_platillo_crea_dos_lineas() {
        let vm = CartViewModel::new();
        let hamburguesa = platillo("d1", 10.99);
        vm.agregar_al_carrito(hamburguesa.clone());
        vm.agregar_al_carrito(hamburguesa);

        let state = vm.state.snapshot();
        assert_eq!(state.platillos.len(), 2);
        assert!((state.total - 21.98).abs() < 1e-9);
    }

    #[test]
    fn conserva_el_orden_de_insercion() {
        let vm = CartViewModel::new();
        for (id, precio) in [("a", 1.0), ("b", 2.0), ("c", 3.0)] {
            vm.agregar_al_carrito(platillo(id, precio));
        }

        let state = vm.state.snapshot();
        let ids: Vec<&str> = state.platillos.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(state.total, 6.0);
    }
}
