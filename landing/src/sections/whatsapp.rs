use leptos::prelude::*;

use crate::content::WhatsAppContent;
use crate::icons::{Icon, IconKind};

/// Floating chat link. Opens the messaging app in a new context; the label
/// slides out on hover.
#[component]
pub fn WhatsAppButton(whatsapp: WhatsAppContent) -> impl IntoView {
    let aria_label = whatsapp.label.clone();

    view! {
        <a
            href=whatsapp.href
            target="_blank"
            rel="noopener noreferrer"
            class="whatsapp-button"
            aria-label=aria_label
        >
            <Icon kind=IconKind::MessageCircle size=28 />
            <span class="whatsapp-label">{whatsapp.label}</span>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn chat_link_opens_in_new_context() {
        let whatsapp = WhatsAppContent {
            href: "https://wa.me/919876543210".into(),
            label: "Chat with us".into(),
        };
        let html =
            Owner::new().with(|| view! { <WhatsAppButton whatsapp=whatsapp /> }.to_html());
        assert!(html.contains("href=\"https://wa.me/919876543210\""));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
        assert!(html.contains("aria-label=\"Chat with us\""));
        assert_eq!(html.matches("Chat with us").count(), 2);
    }
}
