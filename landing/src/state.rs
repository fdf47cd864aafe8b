//! Scroll-driven and tap-driven UI state.
//!
//! All of it is pure: components own a signal and derive classes and
//! transforms from these functions, so the rules are testable off-browser.

/// Vertical offset (px) past which the navbar switches to its compact style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Scroll range (px) that drives the hero parallax.
pub const PARALLAX_SCROLL_RANGE: (f64, f64) = (0.0, 500.0);

/// Background translation (px) the scroll range maps onto.
pub const PARALLAX_TRANSLATE_RANGE: (f64, f64) = (0.0, 200.0);

/// `true` iff the page has scrolled strictly past the threshold.
///
/// No hysteresis: re-evaluated on every scroll event.
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD_PX
}

/// Hero background offset for a scroll position.
///
/// Linear on [0, 500] -> [0, 200], clamped to the nearest endpoint outside it.
/// NaN (never reported by browsers) maps to 0.
pub fn parallax_offset(scroll_y: f64) -> f64 {
    let (in_lo, in_hi) = PARALLAX_SCROLL_RANGE;
    let (out_lo, out_hi) = PARALLAX_TRANSLATE_RANGE;
    if scroll_y.is_nan() {
        return out_lo;
    }
    let t = ((scroll_y - in_lo) / (in_hi - in_lo)).clamp(0.0, 1.0);
    out_lo + t * (out_hi - out_lo)
}

/// CSS transform for the hero background layer.
pub fn parallax_transform(scroll_y: f64) -> String {
    format!("transform: translate3d(0, {:.2}px, 0);", parallax_offset(scroll_y))
}

/// Navbar class list for the current scroll position.
pub fn navbar_class(scroll_y: f64) -> &'static str {
    if is_scrolled(scroll_y) {
        "navbar navbar-compact"
    } else {
        "navbar navbar-expanded"
    }
}

/// Mobile navigation panel state. Starts closed on every mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MobileMenu {
    #[default]
    Closed,
    Open,
}

impl MobileMenu {
    /// The menu icon was tapped.
    pub fn toggled(self) -> Self {
        match self {
            MobileMenu::Closed => MobileMenu::Open,
            MobileMenu::Open => MobileMenu::Closed,
        }
    }

    /// A link inside the panel was chosen. Always closes.
    pub fn link_selected(self) -> Self {
        MobileMenu::Closed
    }

    pub fn is_open(self) -> bool {
        self == MobileMenu::Open
    }
}

/// Entrance animation flavour for a revealed element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    /// Rise from below.
    Up,
    /// Slide in from the left.
    Left,
    /// Grow from slightly smaller.
    Scale,
}

impl Reveal {
    pub fn class(self) -> &'static str {
        match self {
            Reveal::Up => "reveal reveal-up",
            Reveal::Left => "reveal reveal-left",
            Reveal::Scale => "reveal reveal-scale",
        }
    }
}

/// Inline style carrying a stagger delay for the `index`-th item of a list.
pub fn stagger_style(index: usize, step_ms: u32) -> String {
    format!("--reveal-delay: {}ms;", index as u64 * u64::from(step_ms))
}
