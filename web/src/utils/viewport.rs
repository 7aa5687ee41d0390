/// Viewport utility for switching between the compact card list and the
/// full table rendering of booking history.
use leptos::prelude::*;

const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Returns a signal that is `false` during SSR and updates once client-side
/// hydration can read the window width.
pub fn use_is_mobile() -> ReadSignal<bool> {
    let (is_mobile, set_is_mobile) = signal(false);

    // Effect that only runs on the client side
    Effect::new(move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(width) = window.inner_width() {
                    if let Some(width) = width.as_f64() {
                        set_is_mobile.set(width < MOBILE_BREAKPOINT_PX);
                    }
                }
            }
        }
    });

    is_mobile
}
