use log::{debug, error, warn};
use wasm_bindgen::prelude::*;
use web_sys::js_sys::{Array, Function};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};
use yew::prelude::*;

use crate::config;
use crate::motion::browser::WindowScroll;
use crate::motion::engine::TransformEngine;
use crate::motion::reveal::RevealGate;

const SCROLL_EVENTS: [&str; 2] = ["scroll", "resize"];

struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    fn detach(self) {
        for event in SCROLL_EVENTS {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref());
        }
        debug!("hero motion detached");
    }
}

fn attach_hero_motion(tracked: &NodeRef, target: &NodeRef) -> Option<ScrollListener> {
    let window = web_sys::window()?;
    let tracked = tracked.cast::<Element>()?;
    let target = target.cast::<Element>()?;

    let engine = match TransformEngine::hero(WindowScroll::new(window.clone(), tracked)) {
        Ok(engine) => engine,
        Err(e) => {
            error!("Hero motion disabled: {}", e);
            return None;
        }
    };

    let mut last = None;
    let callback = Closure::wrap(Box::new(move || {
        let Some(frame) = engine.sample() else {
            return;
        };
        // Both outputs are functions of progress alone
        if last == Some(frame.progress) {
            return;
        }
        last = Some(frame.progress);
        if let Err(e) = target.set_attribute("style", &frame.style()) {
            warn!("Failed to apply hero frame: {:?}", e);
        }
    }) as Box<dyn FnMut()>);

    for event in SCROLL_EVENTS {
        if let Err(e) = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            error!("Failed to listen for {}: {:?}", event, e);
        }
    }

    // Initial frame, in case the page loads already scrolled
    if let Err(e) = callback.as_ref().unchecked_ref::<Function>().call0(&JsValue::NULL) {
        warn!("Failed to apply initial hero frame: {:?}", e);
    }

    debug!("hero motion attached");
    Some(ScrollListener { window, callback })
}

/// Drives the hero parallax: `tracked` sets the scroll range, `target` gets
/// the transform. Listeners live as long as the calling component.
#[hook]
pub fn use_scroll_transform(tracked: NodeRef, target: NodeRef) {
    use_effect_with_deps(
        move |(tracked, target)| {
            let listener = attach_hero_motion(tracked, target);
            move || {
                if let Some(listener) = listener {
                    listener.detach();
                }
            }
        },
        (tracked, target),
    );
}

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

fn observe_once(node: &NodeRef, revealed: UseStateHandle<bool>) -> Option<RevealObserver> {
    let element = node.cast::<Element>()?;

    let mut gate = RevealGate::default();
    let on_reveal = revealed.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let visible = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .any(|entry| entry.is_intersecting());
        if gate.observe(visible) {
            observer.disconnect();
            on_reveal.set(true);
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(&element);
            Some(RevealObserver { observer, _callback: callback })
        }
        Err(e) => {
            // No observer support: show the content rather than hide it forever
            warn!("IntersectionObserver unavailable, revealing immediately: {:?}", e);
            revealed.set(true);
            None
        }
    }
}

/// True once the referenced element has been on screen. Never goes back to
/// false.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node| {
                let observer = if *revealed { None } else { observe_once(node, revealed) };
                move || {
                    if let Some(observer) = observer {
                        observer.observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *revealed
}
