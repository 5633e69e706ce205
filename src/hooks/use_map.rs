// ============================================================================
// USE MAP HOOK - Ciclo de vida del mapa Leaflet
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::maps::{LeafletMapRenderer, MapConfig, MapRenderer};

/// Handle del hook
#[derive(Clone)]
pub struct UseMapHandle {
    renderer: Rc<RefCell<Option<LeafletMapRenderer>>>,
    pub ready: bool,
}

impl UseMapHandle {
    /// Ejecuta `f` solo si el mapa ya está inicializado
    pub fn with_renderer<T>(&self, f: impl FnOnce(&mut dyn MapRenderer) -> T) -> Option<T> {
        let mut renderer = self.renderer.borrow_mut();
        renderer.as_mut().map(|r| f(r as &mut dyn MapRenderer))
    }
}

#[hook]
pub fn use_map(container_id: &'static str) -> UseMapHandle {
    let renderer = use_mut_ref(|| None::<LeafletMapRenderer>);
    let ready = use_state(|| false);

    {
        let renderer = renderer.clone();
        let ready = ready.clone();
        // El contenedor ya está en el DOM cuando corren los efectos
        use_effect_with((), move |_| {
            match LeafletMapRenderer::initialize(container_id, &MapConfig::default()) {
                Ok(map) => {
                    *renderer.borrow_mut() = Some(map);
                    ready.set(true);
                }
                Err(e) => log::error!("❌ Error inicializando el mapa: {}", e),
            }

            move || {
                // Drop → destroyLeafletMap()
                renderer.borrow_mut().take();
            }
        });
    }

    UseMapHandle {
        renderer,
        ready: *ready,
    }
}
