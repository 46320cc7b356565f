//! Count-up stat label driven by an intersection observer and a
//! `requestAnimationFrame` loop.
//!
//! The observer is a one-shot trigger: it disconnects on the first
//! intersecting entry, so scrolling away and back never restarts the run.
//! All mutable animation state sits behind a [`CounterHandle`]; unmounting
//! releases the handle, which turns any late frame delivery into a no-op.

use dioxus::prelude::*;

use crate::core::counter::DEFAULT_DURATION_MS;
use crate::core::format;

#[component]
pub fn AnimatedCounter(
    /// Final value the label counts up to.
    target: u64,
    #[props(default = DEFAULT_DURATION_MS)] duration_ms: u64,
    /// Appended verbatim after the formatted number, e.g. `"+"`.
    #[props(default = String::new())] suffix: String,
) -> Element {
    let shown = use_signal(|| 0u64);
    let dom_id = use_hook(next_counter_id);

    #[cfg(target_arch = "wasm32")]
    {
        let runtime = use_hook({
            let dom_id = dom_id.clone();
            move || wasm::CounterRuntime::new(dom_id, target, duration_ms, shown)
        });
        use_effect({
            let runtime = runtime.clone();
            move || runtime.attach()
        });
        use_drop(move || runtime.cancel());
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (target, duration_ms);

    rsx! {
        span { id: "{dom_id}", class: "stat-counter",
            "{format::format_count(shown())}{suffix}"
        }
    }
}

/// Each counter owns its own observer and frame loop; the id only has to be
/// unique within the page so the runtime can find its element after mount.
fn next_counter_id() -> String {
    use std::sync::atomic::{AtomicUsize, Ordering};
    static NEXT: AtomicUsize = AtomicUsize::new(0);
    format!("stat-counter-{}", NEXT.fetch_add(1, Ordering::Relaxed))
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use dioxus::prelude::*;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::core::counter::{CounterHandle, FrameStep, VISIBILITY_THRESHOLD};

    type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

    pub(super) struct CounterRuntime {
        dom_id: String,
        handle: CounterHandle,
        value: Signal<u64>,
        attached: Cell<bool>,
        observer: RefCell<Option<web_sys::IntersectionObserver>>,
        observer_cb: RefCell<Option<ObserverCallback>>,
        frame_cb: RefCell<Option<Closure<dyn FnMut(f64)>>>,
        raf_id: Cell<Option<i32>>,
    }

    impl CounterRuntime {
        pub(super) fn new(
            dom_id: String,
            target: u64,
            duration_ms: u64,
            value: Signal<u64>,
        ) -> Rc<Self> {
            Rc::new(Self {
                dom_id,
                handle: CounterHandle::new(target, duration_ms),
                value,
                attached: Cell::new(false),
                observer: RefCell::new(None),
                observer_cb: RefCell::new(None),
                frame_cb: RefCell::new(None),
                raf_id: Cell::new(None),
            })
        }

        /// Start observing the rendered element. Runs after the first commit
        /// (the element must exist in the DOM); later effect runs are no-ops.
        pub(super) fn attach(self: &Rc<Self>) {
            if self.attached.replace(true) || self.handle.is_released() {
                return;
            }
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let Some(element) = document.get_element_by_id(&self.dom_id) else {
                return;
            };

            let runtime = self.clone();
            let callback = Closure::wrap(Box::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    let intersecting = entries.iter().any(|entry| {
                        entry
                            .dyn_ref::<web_sys::IntersectionObserverEntry>()
                            .map(|e| e.is_intersecting())
                            .unwrap_or(false)
                    });
                    if intersecting {
                        // One-shot trigger: the observer's job is done.
                        observer.disconnect();
                        runtime.begin();
                    }
                },
            )
                as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
            match web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            ) {
                Ok(observer) => {
                    observer.observe(&element);
                    self.observer.replace(Some(observer));
                    self.observer_cb.replace(Some(callback));
                }
                // No observer facility: the label stays frozen at 0.
                Err(_) => {}
            }
        }

        fn begin(self: &Rc<Self>) {
            if !self.handle.mark_visible() {
                return;
            }
            #[cfg(debug_assertions)]
            println!("[counter] {} entered view, animating", self.dom_id);

            let runtime = self.clone();
            let callback = Closure::wrap(
                Box::new(move |now_ms: f64| runtime.on_frame(now_ms)) as Box<dyn FnMut(f64)>
            );
            self.frame_cb.replace(Some(callback));
            self.schedule();
        }

        /// At most one frame callback in flight at a time.
        fn schedule(&self) {
            if self.handle.is_released() {
                return;
            }
            let Some(window) = web_sys::window() else {
                return;
            };
            let slot = self.frame_cb.borrow();
            if let Some(callback) = slot.as_ref() {
                if let Ok(id) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                    self.raf_id.set(Some(id));
                }
            }
        }

        fn on_frame(&self, now_ms: f64) {
            self.raf_id.set(None);
            let step = self.handle.frame(now_ms);
            if step == FrameStep::Idle {
                return;
            }
            let mut value = self.value;
            value.set(self.handle.current());
            if step == FrameStep::Continue {
                self.schedule();
            }
            // On Settled the frame closure stays allocated until cancel();
            // dropping it from inside its own invocation is not allowed.
        }

        /// Teardown on unmount: release the handle, cancel the pending frame,
        /// disconnect the observer, reclaim the closures.
        pub(super) fn cancel(&self) {
            self.handle.release();
            if let Some(id) = self.raf_id.take() {
                if let Some(window) = web_sys::window() {
                    let _ = window.cancel_animation_frame(id);
                }
            }
            if let Some(observer) = self.observer.borrow_mut().take() {
                observer.disconnect();
            }
            self.observer_cb.borrow_mut().take();
            self.frame_cb.borrow_mut().take();
        }
    }
}
