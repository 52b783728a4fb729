// ============================================================================
// FASTFEAST PWA - CLIENTE DE PEDIDOS DE COMIDA (RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - ViewModels: Estado + Lógica UI (un contenedor por pantalla)
// - Services: SOLO comunicación API (gateways de auth y catálogo)
// - Stores: Sesión persistida y observable
// - Models: DTOs del backend + modelos limpios para la UI
// ============================================================================

pub mod app;
pub mod models;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;
pub mod viewmodels;

pub use app::App;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 FastFeast PWA - Rust Puro + MVVM");
}
