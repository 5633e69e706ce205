// ============================================================================
// MULTIMODAL MAP - FRONTEND YEW + LEAFLET (WASM)
// ============================================================================
// Capas:
// - Components: UI (mapa, login, formulario de direcciones, avisos)
// - Hooks: contextos de sesión y avisos, formulario, geolocalización, mapa
// - Stores: reducers puros (sesión, avisos)
// - Services: SOLO comunicación API
// - Maps: GeoJSON → marcadores/overlay sobre Leaflet
// ============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod forms;
pub mod hooks;
pub mod maps;
pub mod models;
pub mod services;
pub mod stores;
pub mod utils;

pub use components::{App, AppProps};

use crate::config::CONFIG;
use crate::stores::Session;
use crate::utils::LocalStore;

/// Punto de entrada: logging, sesión persistida y montaje de la app
pub fn run() {
    // Panic hook para ver los panics en la consola del navegador
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 Multimodal Map starting (backend: {})", CONFIG.backend_url());

    let initial_session = Session::restore(&LocalStore);
    if initial_session.is_logged_in() {
        log::info!("🔐 Sesión restaurada desde localStorage");
    }

    yew::Renderer::<App>::with_props(AppProps { initial_session }).render();
}
