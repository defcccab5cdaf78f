use dioxus::prelude::*;

use crate::api::models::Song;
use crate::components::songs::{SongsCardList, SongsTable};
use crate::songlist::SortSpec;

/// Below this viewport width the table collapses into stacked cards.
pub const MOBILE_BREAKPOINT: f64 = 640.0;

fn current_width() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|win| win.inner_width().ok())
            .and_then(|value| value.as_f64())
            .unwrap_or(1024.0)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        1024.0
    }
}

/// Viewport width as a signal, updated from the window resize listener on
/// web builds. Desktop builds settle on the table layout.
pub fn use_viewport_width() -> Signal<f64> {
    let width = use_signal(current_width);

    #[cfg(target_arch = "wasm32")]
    {
        use dioxus::core::{Runtime, RuntimeGuard};
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        use_effect(move || {
            let Some(win) = web_sys::window() else {
                return;
            };

            let runtime = Runtime::current();
            let mut width = width;
            let resize_cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
                let _guard = RuntimeGuard::new(runtime.clone());
                width.set(current_width());
            }) as Box<dyn FnMut(_)>);
            let _ = win
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
            // Listener lives for the whole session.
            resize_cb.forget();
        });
    }

    width
}

/// Layout switch: both arms consume the same sorted/paginated slice and the
/// same sort callback, they differ only in presentation.
#[component]
pub fn SongsListResponsive(
    songs: Vec<Song>,
    sort: SortSpec,
    selected_id: Option<u32>,
    highlighted_id: Option<u32>,
    on_sort: EventHandler<SortSpec>,
    on_row_click: EventHandler<u32>,
) -> Element {
    let width = use_viewport_width();
    let mobile = width() < MOBILE_BREAKPOINT;

    if mobile {
        rsx! {
            SongsCardList {
                songs,
                sort,
                selected_id,
                highlighted_id,
                on_sort,
                on_row_click,
            }
        }
    } else {
        rsx! {
            SongsTable {
                songs,
                sort,
                selected_id,
                highlighted_id,
                on_sort,
                on_row_click,
            }
        }
    }
}
