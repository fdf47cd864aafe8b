//! SVG icon components using Lucide-style stroke icons.
//!
//! Icons are inline SVG so the page needs no icon font or extra request.
//! Content refers to icons by [`IconKind`], spelled kebab-case in JSON.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Every icon the page can draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    Star,
    CheckCircle,
    ShieldCheck,
    Users,
    Instagram,
    Facebook,
    Twitter,
    Menu,
    Close,
    ArrowRight,
    Phone,
    MapPin,
    Clock,
    Heart,
    Award,
    Sparkles,
    MessageCircle,
}

impl IconKind {
    /// SVG path data (the `d` attribute) on a 24x24 grid.
    pub fn path(self) -> &'static str {
        match self {
            IconKind::Star => ICON_STAR,
            IconKind::CheckCircle => ICON_CHECK_CIRCLE,
            IconKind::ShieldCheck => ICON_SHIELD_CHECK,
            IconKind::Users => ICON_USERS,
            IconKind::Instagram => ICON_INSTAGRAM,
            IconKind::Facebook => ICON_FACEBOOK,
            IconKind::Twitter => ICON_TWITTER,
            IconKind::Menu => ICON_MENU,
            IconKind::Close => ICON_CLOSE,
            IconKind::ArrowRight => ICON_ARROW_RIGHT,
            IconKind::Phone => ICON_PHONE,
            IconKind::MapPin => ICON_MAP_PIN,
            IconKind::Clock => ICON_CLOCK,
            IconKind::Heart => ICON_HEART,
            IconKind::Award => ICON_AWARD,
            IconKind::Sparkles => ICON_SPARKLES,
            IconKind::MessageCircle => ICON_MESSAGE_CIRCLE,
        }
    }
}

/// Renders an inline stroke icon.
///
/// # Props
///
/// * `kind` - Which icon to draw
/// * `size` - Icon size in pixels (default: 20)
/// * `class` - Additional CSS classes (default: "")
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon kind=IconKind::Star size=16 class="icon-gold icon-filled" /> }
/// ```
#[component]
pub fn Icon(
    kind: IconKind,
    /// Icon size in pixels
    #[prop(default = 20)]
    size: u32,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let size = size.to_string();
    let class = if class.is_empty() {
        "icon".to_string()
    } else {
        format!("icon {class}")
    };

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d={kind.path()}></path>
        </svg>
    }
}

// =============================================================================
// Lucide-style icons (24x24, stroke 2)
// =============================================================================

const ICON_STAR: &str = "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z";

const ICON_CHECK_CIRCLE: &str = "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM9 12l2 2 4-4";

const ICON_SHIELD_CHECK: &str = "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10zM9 12l2 2 4-4";

const ICON_USERS: &str = "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8zM22 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75";

const ICON_INSTAGRAM: &str = "M17 2H7a5 5 0 0 0-5 5v10a5 5 0 0 0 5 5h10a5 5 0 0 0 5-5V7a5 5 0 0 0-5-5zM16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37zM17.5 6.5h.01";

const ICON_FACEBOOK: &str = "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z";

const ICON_TWITTER: &str = "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z";

const ICON_MENU: &str = "M4 6h16M4 12h16M4 18h16";

const ICON_CLOSE: &str = "M18 6 6 18M6 6l12 12";

const ICON_ARROW_RIGHT: &str = "M5 12h14M12 5l7 7-7 7";

const ICON_PHONE: &str = "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z";

const ICON_MAP_PIN: &str = "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0zM12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z";

const ICON_CLOCK: &str = "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM12 6v6l4 2";

const ICON_HEART: &str = "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7z";

const ICON_AWARD: &str = "M12 15a7 7 0 1 0 0-14 7 7 0 0 0 0 14zM8.21 13.89 7 23l5-3 5 3-1.21-9.12";

const ICON_SPARKLES: &str = "M12 3l1.9 5.8L20 10.7l-6.1 1.9L12 18.5l-1.9-5.9L4 10.7l6.1-1.9L12 3zM5 3v4M3 5h4M19 17v4M17 19h4";

const ICON_MESSAGE_CIRCLE: &str = "M7.9 20A9 9 0 1 0 4 16.1L2 22z";

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_svg_with_requested_size_and_class() {
        let html = view! { <Icon kind=IconKind::Star size=16 class="icon-gold" /> }.to_html();
        assert!(html.contains("<svg"));
        assert!(html.contains("width=\"16\""));
        assert!(html.contains("class=\"icon icon-gold\""));
        assert!(html.contains(ICON_STAR));
    }

    #[test]
    fn default_class_is_plain_icon() {
        let html = view! { <Icon kind=IconKind::Menu /> }.to_html();
        assert!(html.contains("class=\"icon\""));
        assert!(html.contains("width=\"20\""));
    }

    #[test]
    fn icon_names_round_trip_through_kebab_case() {
        let kind: IconKind = serde_json::from_str("\"shield-check\"").unwrap();
        assert_eq!(kind, IconKind::ShieldCheck);
        assert_eq!(
            serde_json::to_string(&IconKind::MessageCircle).unwrap(),
            "\"message-circle\""
        );
    }
}
