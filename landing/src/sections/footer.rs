use leptos::prelude::*;

use crate::content::{Brand, FooterContent, NavLink};
use crate::icons::{Icon, IconKind};

#[component]
pub fn Footer(brand: Brand, footer: FooterContent) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="brand">
                            <span class="brand-name">{brand.name}</span>
                            <span class="brand-tagline">{brand.tagline}</span>
                        </div>
                        <p class="footer-about">{footer.about}</p>
                        <div class="footer-socials">
                            {footer
                                .socials
                                .into_iter()
                                .map(|social| {
                                    view! {
                                        <a href=social.href class="social-link" aria-label=social.label>
                                            <Icon kind=social.icon size=18 />
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>

                    <div>
                        <h4 class="footer-heading">"Quick Links"</h4>
                        <ul class="footer-list">{link_items(footer.quick_links)}</ul>
                    </div>

                    <div>
                        <h4 class="footer-heading">"Contact Us"</h4>
                        <ul class="footer-list">
                            <li class="contact-item">
                                <Icon kind=IconKind::MapPin size=18 class="icon-gold icon-fixed" />
                                <span>{footer.address}</span>
                            </li>
                            <li class="contact-item">
                                <Icon kind=IconKind::Phone size=18 class="icon-gold icon-fixed" />
                                <span>{footer.phone}</span>
                            </li>
                            <li class="contact-item">
                                <Icon kind=IconKind::Clock size=18 class="icon-gold icon-fixed" />
                                <span>{footer.hours}</span>
                            </li>
                        </ul>
                    </div>

                    <div>
                        <h4 class="footer-heading">{footer.newsletter_title}</h4>
                        <p class="footer-newsletter-body">{footer.newsletter_body}</p>
                        // Inert: no form, nothing is submitted anywhere.
                        <div class="newsletter">
                            <input
                                type="email"
                                class="newsletter-input"
                                placeholder=footer.newsletter_placeholder
                            />
                            <button type="button" class="newsletter-button" aria-label="Subscribe">
                                <Icon kind=IconKind::ArrowRight size=18 />
                            </button>
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{footer.copyright}</p>
                    <ul class="footer-legal">{link_items(footer.legal_links)}</ul>
                </div>
            </div>
        </footer>
    }
}

fn link_items(links: Vec<NavLink>) -> impl IntoView {
    links
        .into_iter()
        .map(|link| {
            view! {
                <li>
                    <a href=link.target class="footer-link">{link.label}</a>
                </li>
            }
        })
        .collect::<Vec<_>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;
    use leptos::tachys::view::RenderHtml;

    fn render() -> String {
        let content = SiteContent::embedded().unwrap();
        Owner::new().with(|| {
            view! { <Footer brand=content.brand footer=content.footer /> }.to_html()
        })
    }

    #[test]
    fn renders_contact_details_and_links() {
        let html = render();
        assert!(html.contains("Hazratganj, Lucknow, Uttar Pradesh 226001"));
        assert!(html.contains("+91 98765 43210"));
        assert!(html.contains("Mon - Sun: 10:00 AM - 8:00 PM"));
        assert_eq!(html.matches("class=\"social-link\"").count(), 3);
        // four quick links plus two legal links
        assert_eq!(html.matches("class=\"footer-link\"").count(), 6);
        assert!(html.contains("Privacy Policy"));
    }

    #[test]
    fn newsletter_is_inert() {
        let html = render();
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("placeholder=\"Your email\""));
        assert!(!html.contains("<form"));
        assert!(!html.contains("action="));
    }
}
