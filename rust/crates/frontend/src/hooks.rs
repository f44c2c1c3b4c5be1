//! Custom hooks.

use std::rc::Rc;

use gloo_events::EventListener;
use portfolio_types::PointerPosition;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

/// Pointer coordinates as a reducer so every event applies to the latest
/// state rather than a value captured at mount.
#[derive(Default, PartialEq)]
struct PointerState(PointerPosition);

struct PointerMove {
    x: i32,
    y: i32,
}

impl Reducible for PointerState {
    type Action = PointerMove;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self(self.0.moved_to(action.x, action.y)))
    }
}

/// Track the pointer across the whole viewport.
///
/// Subscribes to `mousemove` on the window when the calling component
/// mounts. Every event replaces the stored position and re-renders the
/// caller. The listener is dropped, and so detached, on unmount.
#[hook]
pub fn use_pointer_position() -> PointerPosition {
    let state = use_reducer(PointerState::default);

    {
        let dispatcher = state.dispatcher();

        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                log::debug!("Attaching pointer listener");
                EventListener::new(&window, "mousemove", move |event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        dispatcher.dispatch(PointerMove {
                            x: event.client_x(),
                            y: event.client_y(),
                        });
                    }
                })
            });

            if listener.is_none() {
                log::warn!("No window available, pointer effects disabled");
            }

            move || {
                if listener.is_some() {
                    log::debug!("Detaching pointer listener");
                }
                drop(listener);
            }
        });
    }

    state.0
}
