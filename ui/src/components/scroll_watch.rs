//! Window scroll subscription behind the compact-navbar flag.
//!
//! The listener lives exactly as long as the subscribing component: it is
//! registered once in `use_hook` and removed in `use_drop`, so an early
//! unmount can never leave a dangling callback behind.

use dioxus::prelude::*;

/// Subscribe to the viewport scroll position and get the compact-navbar
/// flag. Updates only when the derived boolean flips, so consumers re-render
/// per transition rather than per scroll event.
///
/// Off the browser (tests, non-interactive contexts) the flag stays `false`
/// and the navbar keeps its expanded presentation.
pub fn use_scroll_flag() -> Signal<bool> {
    let flag = use_signal(|| false);

    #[cfg(target_arch = "wasm32")]
    {
        let watcher = use_hook(move || std::rc::Rc::new(wasm::ScrollWatcher::attach(flag)));
        use_drop(move || watcher.release());
    }

    flag
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;

    use dioxus::prelude::*;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::core::scroll::ScrollSampler;

    pub(super) struct ScrollWatcher {
        listener: RefCell<Option<Closure<dyn FnMut()>>>,
    }

    impl ScrollWatcher {
        pub(super) fn attach(mut flag: Signal<bool>) -> Self {
            let watcher = Self {
                listener: RefCell::new(None),
            };
            let Some(window) = web_sys::window() else {
                // No scroll source; the flag keeps its initial value.
                return watcher;
            };

            let mut sampler = ScrollSampler::new();
            let win = window.clone();
            let closure = Closure::wrap(Box::new(move || {
                let offset = win.scroll_y().unwrap_or(0.0);
                if let Some(compact) = sampler.sample(offset) {
                    flag.set(compact);
                }
            }) as Box<dyn FnMut()>);

            if window
                .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
                .is_ok()
            {
                watcher.listener.replace(Some(closure));
            }
            watcher
        }

        /// Remove the listener and drop the closure. Idempotent.
        pub(super) fn release(&self) {
            let Some(closure) = self.listener.borrow_mut().take() else {
                return;
            };
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    closure.as_ref().unchecked_ref(),
                );
            }
        }
    }
}
