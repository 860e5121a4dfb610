// crates/trustybot-app/src/reveal.rs
// IntersectionObserver glue for `.animate-on-scroll` elements

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use trustybot_widget::{RevealConfig, RevealTracker, Sighting};

use crate::schedule::timeout_millis;

const ANIMATED_SELECTOR: &str = ".animate-on-scroll";
const KEY_ATTR: &str = "data-reveal-id";
const VISIBLE_CLASS: &str = "visible";

/// Observe every animated element in the document. Each one gets the
/// `visible` class once, staggered within a batch, then is unobserved.
pub fn observe_animated(config: RevealConfig) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.threshold));
    init.set_root_margin(config.root_margin);

    let tracker = Rc::new(RefCell::new(RevealTracker::<String>::new(config)));
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            on_batch(&tracker, entries, observer);
        },
    );
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    // Lives as long as the page
    callback.forget();

    let elements = document.query_selector_all(ANIMATED_SELECTOR)?;
    for i in 0..elements.length() {
        let Some(element) = elements.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        if !element.has_attribute(KEY_ATTR) {
            element.set_attribute(KEY_ATTR, &i.to_string())?;
        }
        observer.observe(&element);
    }
    log::debug!("observing {} animated elements", elements.length());

    Ok(())
}

fn on_batch(
    tracker: &Rc<RefCell<RevealTracker<String>>>,
    entries: Array,
    observer: IntersectionObserver,
) {
    let seen: Vec<(Sighting<String>, Element)> = entries
        .iter()
        .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
        .map(|entry| {
            let target = entry.target();
            let key = target.get_attribute(KEY_ATTR).unwrap_or_default();
            let sighting = Sighting {
                key,
                intersecting: entry.is_intersecting(),
            };
            (sighting, target)
        })
        .collect();

    let plan = tracker
        .borrow_mut()
        .plan(seen.iter().map(|(sighting, _)| sighting.clone()));

    for reveal in plan {
        let Some((_, element)) = seen.iter().find(|(s, _)| s.key == reveal.key) else {
            continue;
        };
        let element = element.clone();
        let observer = observer.clone();
        let millis = timeout_millis(reveal.delay);
        spawn_local(async move {
            TimeoutFuture::new(millis).await;
            if let Err(e) = element.class_list().add_1(VISIBLE_CLASS) {
                log::warn!("reveal failed: {:?}", e);
            }
            observer.unobserve(&element);
        });
    }
}
