use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use log::{debug, warn};

use crate::config;
use crate::error::{ObserveError, UnknownRegion};

/// Sections of the landing page that fade in on first sight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    Hero,
    Curriculum,
    Audience,
    Enroll,
    Faq,
    Footer,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Hero,
        Region::Curriculum,
        Region::Audience,
        Region::Enroll,
        Region::Faq,
        Region::Footer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Region::Hero => "hero",
            Region::Curriculum => "curriculum",
            Region::Audience => "audience",
            Region::Enroll => "enroll",
            Region::Faq => "faq",
            Region::Footer => "footer",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|region| region.as_str() == s)
            .ok_or_else(|| UnknownRegion(s.to_string()))
    }
}

/// One intersection report for a region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityEvent {
    pub region: Region,
    pub is_intersecting: bool,
    pub ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub bottom_margin_px: u32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: config::REVEAL_THRESHOLD,
            bottom_margin_px: config::REVEAL_BOTTOM_MARGIN_PX,
        }
    }
}

impl RevealOptions {
    /// CSS margin string handed to the host observer (only the bottom edge moves).
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }

    pub fn qualifies(&self, event: &VisibilityEvent) -> bool {
        event.is_intersecting && event.ratio >= self.threshold
    }
}

/// Host-side viewport observation, e.g. `IntersectionObserver`.
///
/// Implementors deliver [`VisibilityEvent`]s out of band; the tracker only
/// tells them what to watch.
pub trait ViewportObserver {
    type Boundary;

    fn observe(&mut self, region: Region, boundary: &Self::Boundary) -> Result<(), ObserveError>;
    fn unobserve(&mut self, region: Region);
    fn disconnect(&mut self);
}

/// Read-only view of reveal state, handed down to sections as a prop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealSet {
    revealed: BTreeSet<Region>,
    unobserved: BTreeSet<Region>,
}

impl RevealSet {
    /// Every region shown as plain static content.
    pub fn all_static() -> Self {
        Self {
            revealed: BTreeSet::new(),
            unobserved: Region::ALL.into_iter().collect(),
        }
    }

    pub fn is_revealed(&self, region: Region) -> bool {
        self.revealed.contains(&region)
    }

    pub fn is_unobserved(&self, region: Region) -> bool {
        self.unobserved.contains(&region)
    }

    /// Class names for a section wrapper.
    pub fn reveal_class(&self, region: Region) -> &'static str {
        if self.is_unobserved(region) {
            ""
        } else if self.is_revealed(region) {
            "reveal visible"
        } else {
            "reveal"
        }
    }
}

/// Latches regions as revealed the first time they scroll into view.
pub struct RevealTracker<O: ViewportObserver> {
    observer: Option<O>,
    options: RevealOptions,
    // Regions the observer accepted; events for anything else are ignored.
    observed: BTreeSet<Region>,
    state: RevealSet,
}

impl<O: ViewportObserver> RevealTracker<O> {
    pub fn new(observer: O, options: RevealOptions) -> Self {
        Self {
            observer: Some(observer),
            options,
            observed: BTreeSet::new(),
            state: RevealSet::default(),
        }
    }

    /// Starts watching `region`. On failure the region is marked unobserved
    /// and stays that way; the error is returned for logging only.
    pub fn register(
        &mut self,
        region: Region,
        boundary: Option<&O::Boundary>,
    ) -> Result<(), ObserveError> {
        let Some(observer) = self.observer.as_mut() else {
            return Err(ObserveError::Detached);
        };
        let result = match boundary {
            Some(boundary) => observer.observe(region, boundary),
            None => Err(ObserveError::MissingBoundary(region)),
        };

        match &result {
            Ok(()) => {
                debug!("observing region {}", region);
                self.observed.insert(region);
                self.state.unobserved.remove(&region);
            }
            Err(_) => {
                self.observed.remove(&region);
                self.state.unobserved.insert(region);
            }
        }
        result
    }

    /// Applies one event. Returns `true` only when it revealed a new region.
    pub fn handle(&mut self, event: VisibilityEvent) -> bool {
        if self.is_revealed(event.region) || !self.options.qualifies(&event) {
            return false;
        }
        let Some(observer) = self.observer.as_mut() else {
            warn!("dropping {:?} after teardown", event);
            return false;
        };
        if !self.observed.remove(&event.region) {
            debug!("ignoring event for unregistered region {}", event.region);
            return false;
        }

        self.state.revealed.insert(event.region);
        observer.unobserve(event.region);
        debug!("revealed region {} at ratio {:.2}", event.region, event.ratio);
        true
    }

    pub fn is_revealed(&self, region: Region) -> bool {
        self.state.is_revealed(region)
    }

    pub fn snapshot(&self) -> &RevealSet {
        &self.state
    }

    #[cfg(test)]
    pub fn is_attached(&self) -> bool {
        self.observer.is_some()
    }

    /// Releases every subscription. Later events are ignored.
    pub fn teardown(&mut self) {
        if let Some(mut observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Observe(Region),
        Unobserve(Region),
        Disconnect,
    }

    /// Records calls; `boundary == false` simulates a host-side attach failure.
    #[derive(Clone, Default)]
    struct RecordingObserver {
        calls: Rc<RefCell<Vec<Call>>>,
    }

    impl ViewportObserver for RecordingObserver {
        type Boundary = bool;

        fn observe(&mut self, region: Region, boundary: &bool) -> Result<(), ObserveError> {
            if !*boundary {
                return Err(ObserveError::MissingBoundary(region));
            }
            self.calls.borrow_mut().push(Call::Observe(region));
            Ok(())
        }

        fn unobserve(&mut self, region: Region) {
            self.calls.borrow_mut().push(Call::Unobserve(region));
        }

        fn disconnect(&mut self) {
            self.calls.borrow_mut().push(Call::Disconnect);
        }
    }

    fn mounted() -> (RevealTracker<RecordingObserver>, Rc<RefCell<Vec<Call>>>) {
        let observer = RecordingObserver::default();
        let calls = observer.calls.clone();
        let mut tracker = RevealTracker::new(observer, RevealOptions::default());
        for region in Region::ALL {
            tracker.register(region, Some(&true)).unwrap();
        }
        (tracker, calls)
    }

    fn event(region: Region, is_intersecting: bool, ratio: f64) -> VisibilityEvent {
        VisibilityEvent { region, is_intersecting, ratio }
    }

    #[test]
    fn nothing_is_revealed_on_mount() {
        let (tracker, _) = mounted();
        for region in Region::ALL {
            assert!(!tracker.is_revealed(region));
        }
    }

    #[test]
    fn hero_reveals_above_threshold() {
        let (mut tracker, calls) = mounted();
        assert!(!tracker.is_revealed(Region::Hero));

        assert!(tracker.handle(event(Region::Hero, true, 0.15)));
        assert!(tracker.is_revealed(Region::Hero));
        assert!(!tracker.is_revealed(Region::Faq));
        assert_eq!(calls.borrow().last(), Some(&Call::Unobserve(Region::Hero)));
    }

    #[test]
    fn reveal_latches_after_leaving_viewport() {
        let (mut tracker, _) = mounted();
        tracker.handle(event(Region::Faq, true, 0.4));

        assert!(!tracker.handle(event(Region::Faq, false, 0.0)));
        assert!(!tracker.handle(event(Region::Faq, true, 0.9)));
        assert!(tracker.is_revealed(Region::Faq));
    }

    #[test]
    fn below_threshold_does_not_reveal() {
        let (mut tracker, _) = mounted();
        assert!(!tracker.handle(event(Region::Enroll, true, 0.05)));
        assert!(!tracker.handle(event(Region::Enroll, false, 0.5)));
        assert!(!tracker.handle(event(Region::Enroll, true, 0.0999)));
        assert!(!tracker.is_revealed(Region::Enroll));

        assert!(tracker.handle(event(Region::Enroll, true, 0.1)));
        assert!(tracker.is_revealed(Region::Enroll));
    }

    #[test]
    fn failed_registration_leaves_region_static() {
        let observer = RecordingObserver::default();
        let mut tracker = RevealTracker::new(observer, RevealOptions::default());

        assert_eq!(
            tracker.register(Region::Footer, None),
            Err(ObserveError::MissingBoundary(Region::Footer))
        );
        assert!(tracker.register(Region::Hero, Some(&false)).is_err());

        let snapshot = tracker.snapshot();
        assert!(snapshot.is_unobserved(Region::Footer));
        assert!(snapshot.is_unobserved(Region::Hero));
        assert!(!snapshot.is_revealed(Region::Footer));
        assert_eq!(snapshot.reveal_class(Region::Footer), "");
        assert_eq!(snapshot.reveal_class(Region::Faq), "reveal");
    }

    #[test]
    fn events_for_unregistered_regions_are_ignored() {
        let observer = RecordingObserver::default();
        let calls = observer.calls.clone();
        let mut tracker = RevealTracker::new(observer, RevealOptions::default());
        tracker.register(Region::Faq, Some(&true)).unwrap();
        assert!(tracker.register(Region::Footer, None).is_err());

        // Failed registration stays static, never revealed.
        assert!(!tracker.handle(event(Region::Footer, true, 0.5)));
        assert!(!tracker.is_revealed(Region::Footer));
        assert!(tracker.snapshot().is_unobserved(Region::Footer));

        // Never registered at all.
        assert!(!tracker.handle(event(Region::Hero, true, 1.0)));
        assert!(!tracker.is_revealed(Region::Hero));

        assert!(tracker.handle(event(Region::Faq, true, 0.5)));
        assert_eq!(
            *calls.borrow(),
            vec![Call::Observe(Region::Faq), Call::Unobserve(Region::Faq)]
        );
    }

    #[test]
    fn teardown_stops_mutation() {
        let (mut tracker, calls) = mounted();
        tracker.teardown();
        tracker.teardown();
        let before = tracker.snapshot().clone();

        assert!(!tracker.is_attached());
        assert!(!tracker.handle(event(Region::Hero, true, 1.0)));
        assert!(!tracker.is_revealed(Region::Hero));
        assert_eq!(
            tracker.register(Region::Hero, Some(&true)),
            Err(ObserveError::Detached)
        );
        assert!(tracker.register(Region::Faq, None).is_err());
        assert_eq!(tracker.snapshot(), &before);
        assert!(!tracker.snapshot().is_unobserved(Region::Faq));

        let disconnects = calls.borrow().iter().filter(|c| **c == Call::Disconnect).count();
        assert_eq!(disconnects, 1);
    }

    #[test]
    fn region_names_round_trip() {
        for region in Region::ALL {
            assert_eq!(region.as_str().parse::<Region>(), Ok(region));
        }
        assert_eq!(
            "pricing".parse::<Region>(),
            Err(UnknownRegion("pricing".to_string()))
        );
    }

    #[test]
    fn default_options_match_page_config() {
        let options = RevealOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin(), "0px 0px -50px 0px");
    }

    #[test]
    fn reveal_class_follows_state() {
        let (mut tracker, _) = mounted();
        assert_eq!(tracker.snapshot().reveal_class(Region::Hero), "reveal");
        tracker.handle(event(Region::Hero, true, 0.5));
        assert_eq!(tracker.snapshot().reveal_class(Region::Hero), "reveal visible");
        assert!(RevealSet::all_static().is_unobserved(Region::Audience));
    }
}
