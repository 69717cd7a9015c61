use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Por debajo de este ancho el sidebar pasa a modo overlay (móvil).
pub const SIDEBAR_BREAKPOINT_PX: f64 = 768.0;

/// Modo de vista derivado del breakpoint del viewport: `true` = móvil
/// ("broken"), el sidebar se superpone y se abre con el botón hamburguesa.
#[hook]
pub fn use_viewport() -> bool {
    let broken = use_state(viewport_is_broken);

    {
        let broken = broken.clone();
        use_effect_with((), move |_| {
            let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                broken.set(viewport_is_broken());
            }) as Box<dyn FnMut(web_sys::Event)>);

            if let Some(win) = web_sys::window() {
                let _ = win
                    .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            }

            // El closure vive dentro del destructor del efecto: al desmontar
            // la vista, el listener se quita y el closure se libera
            move || {
                if let Some(win) = web_sys::window() {
                    let _ = win.remove_event_listener_with_callback(
                        "resize",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    *broken
}

fn viewport_is_broken() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|width| width < SIDEBAR_BREAKPOINT_PX)
        .unwrap_or(false)
}
