use log::{info, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::reveal::dom::DomViewportObserver;
use crate::reveal::tracker::{Region, RevealOptions, RevealSet, RevealTracker, VisibilityEvent};

/// Watches the given sections and returns which of them have been seen.
///
/// The tracker lives as long as the calling component; on unmount the
/// observer is disconnected and pending events are ignored.
#[hook]
pub fn use_reveal(regions: Vec<(Region, NodeRef)>) -> RevealSet {
    let snapshot = use_state(RevealSet::default);
    let tracker = use_mut_ref(|| None::<RevealTracker<DomViewportObserver>>);

    {
        let snapshot = snapshot.clone();
        use_effect_with_deps(
            move |_| {
                let on_event = {
                    let tracker = tracker.clone();
                    let snapshot = snapshot.clone();
                    Callback::from(move |event: VisibilityEvent| {
                        let next = tracker.borrow_mut().as_mut().and_then(|active| {
                            active.handle(event).then(|| active.snapshot().clone())
                        });
                        if let Some(next) = next {
                            snapshot.set(next);
                        }
                    })
                };

                let options = RevealOptions::default();
                match DomViewportObserver::new(&options, on_event) {
                    Ok(observer) => {
                        let mut active = RevealTracker::new(observer, options);
                        for (region, node) in &regions {
                            let boundary = node.cast::<Element>();
                            if let Err(e) = active.register(*region, boundary.as_ref()) {
                                warn!("region {} renders without animation: {}", region, e);
                            }
                        }
                        snapshot.set(active.snapshot().clone());
                        *tracker.borrow_mut() = Some(active);
                    }
                    Err(e) => {
                        warn!("scroll reveal disabled: {}", e);
                        snapshot.set(RevealSet::all_static());
                    }
                }

                move || {
                    let active = tracker.borrow_mut().take();
                    if let Some(mut active) = active {
                        active.teardown();
                        info!("scroll reveal observer released");
                    }
                }
            },
            (),
        );
    }

    (*snapshot).clone()
}
