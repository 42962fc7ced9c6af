/// Scroll tracking for the header: compact/visible flags and the active section
use crate::config::TrackerConfig;

/// A navigable page region, identified by a CSS selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationSection {
    pub name: &'static str,
    pub anchor: &'static str,
}

/// Registered sections, in page order
pub const SECTIONS: &[NavigationSection] = &[
    NavigationSection { name: "Home", anchor: "#home" },
    NavigationSection { name: "About", anchor: "#about" },
    NavigationSection { name: "Projects", anchor: "#projects" },
    NavigationSection { name: "Roadmap", anchor: "#roadmap" },
    NavigationSection { name: "Services", anchor: "#services" },
    NavigationSection { name: "Articles", anchor: "#articles" },
    NavigationSection { name: "Contact", anchor: "#contact" },
];

pub const DEFAULT_SECTION: &str = "Home";

/// A section whose anchor resolved on this tick, with its document-relative top
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub name: &'static str,
    pub top: f64,
}

/// Header state derived from the scroll position
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    pub scroll_offset: u32,
    pub is_compacted: bool,
    pub is_bar_visible: bool,
    pub active_section: &'static str,
}

impl Default for ScrollState {
    fn default() -> Self {
        ScrollState {
            scroll_offset: 0,
            is_compacted: false,
            is_bar_visible: true,
            active_section: DEFAULT_SECTION,
        }
    }
}

/// The parts of the state the header actually renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavChrome {
    pub compacted: bool,
    pub visible: bool,
    pub active_section: &'static str,
}

impl Default for NavChrome {
    fn default() -> Self {
        ScrollState::default().chrome()
    }
}

impl ScrollState {
    pub fn chrome(&self) -> NavChrome {
        NavChrome {
            compacted: self.is_compacted,
            visible: self.is_bar_visible,
            active_section: self.active_section,
        }
    }

    /// Compute the next state for a scroll offset
    ///
    /// Algorithm:
    /// 1. Compacted once the offset passes `compact_threshold`
    /// 2. Bar visible when scrolling up, or while inside the top dead zone
    /// 3. Active section = the LAST resolved section (registration order)
    ///    with `top <= offset + look_ahead`
    /// 4. No qualifying section keeps the previous active section
    /// 5. The offset is remembered for the next comparison
    pub fn advance(&self, offset: u32, sections: &[SectionOffset], config: &TrackerConfig) -> ScrollState {
        let horizon = offset as f64 + config.look_ahead;

        let active_section = sections
            .iter()
            .filter(|s| s.top <= horizon)
            .last()
            .map(|s| s.name)
            .unwrap_or(self.active_section);

        ScrollState {
            scroll_offset: offset,
            is_compacted: offset > config.compact_threshold,
            is_bar_visible: offset < self.scroll_offset || offset < config.top_dead_zone,
            active_section,
        }
    }
}

/// Looks up where a section currently starts in the document
pub trait SectionLocator {
    fn section_top(&self, anchor: &str) -> Option<f64>;
}

/// Resolve registered sections, skipping any whose anchor is missing
pub fn resolve_sections(sections: &[NavigationSection], locator: &impl SectionLocator) -> Vec<SectionOffset> {
    sections
        .iter()
        .filter_map(|section| {
            locator
                .section_top(section.anchor)
                .map(|top| SectionOffset { name: section.name, top })
        })
        .collect()
}

/// Clamp a raw `scrollY` (which can go negative on overscroll) to a pixel offset
pub fn clamp_offset(raw: f64) -> u32 {
    if raw.is_finite() && raw > 0.0 {
        raw.round().min(u32::MAX as f64) as u32
    } else {
        0
    }
}

/// Minimum-interval gate around the scroll handler
#[derive(Debug, Clone)]
pub struct Throttle {
    interval_ms: f64,
    last_run: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Throttle {
            interval_ms,
            last_run: None,
        }
    }

    /// Returns true (and records `now_ms`) if enough time has passed since the last run
    pub fn ready(&mut self, now_ms: f64) -> bool {
        if self.remaining(now_ms) > 0.0 {
            false
        } else {
            self.mark(now_ms);
            true
        }
    }

    /// Milliseconds until the gate opens again, 0 if it is open
    pub fn remaining(&self, now_ms: f64) -> f64 {
        match self.last_run {
            Some(last) => (self.interval_ms - (now_ms - last)).max(0.0),
            None => 0.0,
        }
    }

    /// Record a run without asking the gate
    pub fn mark(&mut self, now_ms: f64) {
        self.last_run = Some(now_ms);
    }
}

/// Owns the scroll state for one header instance
///
/// Events swallowed by the throttle are kept as `pending`; the header
/// calls [`ScrollTracker::flush`] once the gate reopens so the last event
/// of a gesture is never lost.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    state: ScrollState,
    throttle: Throttle,
    pending: Option<f64>,
    config: TrackerConfig,
}

impl ScrollTracker {
    pub fn new(config: TrackerConfig) -> Self {
        ScrollTracker {
            state: ScrollState::default(),
            throttle: Throttle::new(config.throttle_ms),
            pending: None,
            config,
        }
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Milliseconds to wait before a pending event can be flushed
    pub fn flush_delay(&self, now_ms: f64) -> f64 {
        self.throttle.remaining(now_ms)
    }

    /// Handle one scroll event; returns the new state if the throttle let it through
    pub fn on_scroll(&mut self, now_ms: f64, raw_offset: f64, locator: &impl SectionLocator) -> Option<ScrollState> {
        if !self.throttle.ready(now_ms) {
            self.pending = Some(raw_offset);
            return None;
        }

        self.pending = None;
        Some(self.apply(raw_offset, locator))
    }

    /// Apply the last throttled event, if one is still waiting
    pub fn flush(&mut self, now_ms: f64, locator: &impl SectionLocator) -> Option<ScrollState> {
        let raw_offset = self.pending.take()?;
        self.throttle.mark(now_ms);
        Some(self.apply(raw_offset, locator))
    }

    fn apply(&mut self, raw_offset: f64, locator: &impl SectionLocator) -> ScrollState {
        let sections = resolve_sections(SECTIONS, locator);
        self.state = self.state.advance(clamp_offset(raw_offset), &sections, &self.config);
        self.state.clone()
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

/// Locator backed by the live document
pub struct DomLocator {
    document: web_sys::Document,
    scroll_y: f64,
}

impl DomLocator {
    pub fn new(window: &web_sys::Window) -> Option<DomLocator> {
        let document = window.document()?;
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        Some(DomLocator { document, scroll_y })
    }
}

impl SectionLocator for DomLocator {
    fn section_top(&self, anchor: &str) -> Option<f64> {
        match self.document.query_selector(anchor) {
            Ok(Some(element)) => Some(element.get_bounding_client_rect().top() + self.scroll_y),
            Ok(None) => None,
            Err(e) => {
                log::debug!("Section lookup failed for {}: {:?}", anchor, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FixedLocator(HashMap<&'static str, f64>);

    impl SectionLocator for FixedLocator {
        fn section_top(&self, anchor: &str) -> Option<f64> {
            self.0.get(anchor).copied()
        }
    }

    fn offsets(pairs: &[(&'static str, f64)]) -> Vec<SectionOffset> {
        pairs.iter().map(|(name, top)| SectionOffset { name: *name, top: *top }).collect()
    }

    #[test]
    fn test_default_state() {
        let state = ScrollState::default();
        assert_eq!(state.active_section, "Home");
        assert!(state.is_bar_visible);
        assert!(!state.is_compacted);
    }

    #[test]
    fn test_active_section_with_look_ahead() {
        let config = TrackerConfig::default();
        let sections = offsets(&[("A", 0.0), ("B", 500.0), ("C", 1200.0)]);

        let state = ScrollState::default().advance(550, &sections, &config);
        assert_eq!(state.active_section, "B");

        // 1200 - 120 = 1080 is the first offset where C qualifies
        let state = state.advance(1079, &sections, &config);
        assert_eq!(state.active_section, "B");
        let state = state.advance(1080, &sections, &config);
        assert_eq!(state.active_section, "C");
    }

    #[test]
    fn test_no_sections_keeps_default() {
        let state = ScrollState::default().advance(0, &[], &TrackerConfig::default());
        assert_eq!(state.active_section, "Home");
    }

    #[test]
    fn test_no_qualifying_section_keeps_previous() {
        let config = TrackerConfig::default();
        let mut state = ScrollState::default();
        state.active_section = "About";

        let sections = offsets(&[("Projects", 2000.0)]);
        let state = state.advance(100, &sections, &config);
        assert_eq!(state.active_section, "About");
    }

    #[test]
    fn test_identical_tops_later_section_wins() {
        let sections = offsets(&[("A", 300.0), ("B", 300.0)]);
        let state = ScrollState::default().advance(300, &sections, &TrackerConfig::default());
        assert_eq!(state.active_section, "B");
    }

    #[test]
    fn test_last_qualifying_not_first_match() {
        // Registration order is not sorted by top; the later entry still wins
        let sections = offsets(&[("Late", 100.0), ("Early", 0.0)]);
        let state = ScrollState::default().advance(50, &sections, &TrackerConfig::default());
        assert_eq!(state.active_section, "Early");
    }

    #[test]
    fn test_compacted_while_scrolling_down() {
        let config = TrackerConfig::default();
        let mut state = ScrollState::default();
        for offset in [5, 15, 20, 21, 40, 300, 900] {
            state = state.advance(offset, &[], &config);
            assert_eq!(state.is_compacted, offset > 20, "offset {}", offset);
        }
        state = state.advance(20, &[], &config);
        assert!(!state.is_compacted);
    }

    #[test]
    fn test_bar_visibility() {
        let config = TrackerConfig::default();
        let state = ScrollState::default();

        // Inside the dead zone
        let state = state.advance(9, &[], &config);
        assert!(state.is_bar_visible);

        // Scrolling down past it hides the bar
        let state = state.advance(10, &[], &config);
        assert!(!state.is_bar_visible);
        let state = state.advance(400, &[], &config);
        assert!(!state.is_bar_visible);

        // Any upward motion shows it again
        let state = state.advance(399, &[], &config);
        assert!(state.is_bar_visible);

        // Holding still is not upward motion
        let state = state.advance(399, &[], &config);
        assert!(!state.is_bar_visible);
    }

    #[test]
    fn test_resolve_sections_skips_missing() {
        let mut tops = HashMap::new();
        tops.insert("#home", 0.0);
        tops.insert("#projects", 1400.0);
        tops.insert("#contact", 5000.0);
        let locator = FixedLocator(tops);

        let resolved = resolve_sections(SECTIONS, &locator);

        let names: Vec<&str> = resolved.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Home", "Projects", "Contact"]);
    }

    #[test]
    fn test_clamp_offset() {
        assert_eq!(clamp_offset(-35.0), 0);
        assert_eq!(clamp_offset(0.0), 0);
        assert_eq!(clamp_offset(120.6), 121);
        assert_eq!(clamp_offset(f64::NAN), 0);
    }

    #[test]
    fn test_throttle() {
        let mut throttle = Throttle::new(16.0);
        assert!(throttle.ready(1000.0));
        assert!(!throttle.ready(1005.0));
        assert!(!throttle.ready(1015.9));
        assert!(throttle.ready(1016.0));
        assert!(!throttle.ready(1020.0));
    }

    #[test]
    fn test_tracker_on_scroll() {
        let mut tops = HashMap::new();
        tops.insert("#home", 0.0);
        tops.insert("#about", 800.0);
        let locator = FixedLocator(tops);
        let mut tracker = ScrollTracker::default();

        let state = tracker.on_scroll(0.0, 700.0, &locator).unwrap();
        assert_eq!(state.active_section, "About");
        assert!(state.is_compacted);

        // Throttled: state unchanged
        assert!(tracker.on_scroll(5.0, 0.0, &locator).is_none());
        assert_eq!(tracker.state().scroll_offset, 700);

        let state = tracker.on_scroll(40.0, 0.0, &locator).unwrap();
        assert_eq!(state.active_section, "Home");
        assert!(state.is_bar_visible);
    }

    #[test]
    fn test_throttle_remaining() {
        let mut throttle = Throttle::new(16.0);
        assert_eq!(throttle.remaining(0.0), 0.0);
        assert!(throttle.ready(100.0));
        assert_eq!(throttle.remaining(108.0), 8.0);
        assert_eq!(throttle.remaining(200.0), 0.0);
    }

    #[test]
    fn test_throttled_event_applied_on_flush() {
        let mut tops = HashMap::new();
        tops.insert("#home", 0.0);
        tops.insert("#about", 800.0);
        let locator = FixedLocator(tops);
        let mut tracker = ScrollTracker::default();

        assert!(tracker.on_scroll(0.0, 900.0, &locator).is_some());

        // Last event of the gesture lands inside the window
        assert!(tracker.on_scroll(8.0, 0.0, &locator).is_none());
        assert!(tracker.has_pending());
        assert_eq!(tracker.flush_delay(8.0), 8.0);

        let state = tracker.flush(16.0, &locator).unwrap();
        assert_eq!(state.active_section, "Home");
        assert_eq!(state.scroll_offset, 0);
        assert!(state.is_bar_visible);
        assert!(!state.is_compacted);
        assert!(!tracker.has_pending());
    }

    #[test]
    fn test_flush_without_pending_is_noop() {
        let locator = FixedLocator(HashMap::new());
        let mut tracker = ScrollTracker::default();

        assert!(tracker.flush(0.0, &locator).is_none());

        assert!(tracker.on_scroll(0.0, 300.0, &locator).is_some());
        assert!(tracker.on_scroll(5.0, 310.0, &locator).is_none());
        // A later leading-edge run supersedes the pending event
        assert!(tracker.on_scroll(20.0, 320.0, &locator).is_some());
        assert!(tracker.flush(40.0, &locator).is_none());
        assert_eq!(tracker.state().scroll_offset, 320);
    }
}
