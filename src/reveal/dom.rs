use std::collections::HashMap;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::Callback;

use crate::error::ObserveError;
use crate::reveal::tracker::{Region, RevealOptions, ViewportObserver, VisibilityEvent};

/// Attribute on each observed element naming its region.
pub const REGION_ATTR: &str = "data-region";

const FOLLOW_UP_STEP: f64 = 0.05;

/// `IntersectionObserver` feeding [`VisibilityEvent`]s into a Yew callback.
pub struct DomViewportObserver {
    observer: IntersectionObserver,
    observed: HashMap<Region, Element>,
    // Must outlive `observer`; the browser holds a raw reference to it.
    _on_entries: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl DomViewportObserver {
    pub fn new(
        options: &RevealOptions,
        on_event: Callback<VisibilityEvent>,
    ) -> Result<Self, ObserveError> {
        let on_entries = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let Some(name) = entry.target().get_attribute(REGION_ATTR) else {
                    continue;
                };
                match name.parse::<Region>() {
                    Ok(region) => on_event.emit(VisibilityEvent {
                        region,
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    }),
                    Err(e) => warn!("ignoring intersection entry: {}", e),
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let mut init = IntersectionObserverInit::new();
        init.root_margin(&options.root_margin());
        // A crossing can be reported a hair under the threshold; the second
        // step guarantees a later report above it while the region scrolls in.
        let steps = Array::of2(
            &JsValue::from_f64(options.threshold),
            &JsValue::from_f64((options.threshold + FOLLOW_UP_STEP).min(1.0)),
        );
        init.threshold(&steps);

        let observer =
            IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &init)
                .map_err(|e| ObserveError::Unsupported(format!("{:?}", e)))?;

        Ok(Self {
            observer,
            observed: HashMap::new(),
            _on_entries: on_entries,
        })
    }
}

impl ViewportObserver for DomViewportObserver {
    type Boundary = Element;

    fn observe(&mut self, region: Region, boundary: &Element) -> Result<(), ObserveError> {
        boundary
            .set_attribute(REGION_ATTR, region.as_str())
            .map_err(|e| ObserveError::Unsupported(format!("{:?}", e)))?;
        self.observer.observe(boundary);
        self.observed.insert(region, boundary.clone());
        Ok(())
    }

    fn unobserve(&mut self, region: Region) {
        if let Some(element) = self.observed.remove(&region) {
            self.observer.unobserve(&element);
        }
    }

    fn disconnect(&mut self) {
        self.observer.disconnect();
        self.observed.clear();
    }
}
