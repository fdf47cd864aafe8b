use leptos::prelude::*;

use crate::content::HeroContent;
use crate::dom::use_scroll_offset;
use crate::icons::Icon;
use crate::state::parallax_transform;

/// Full-viewport banner. The backdrop drifts with scroll and slowly zooms
/// in a 15s loop (CSS `hero-zoom`); every button is inert.
#[component]
pub fn Hero(hero: HeroContent) -> impl IntoView {
    let scroll_y = use_scroll_offset();

    let badges = hero
        .badges
        .into_iter()
        .map(|badge| {
            view! {
                <li class="hero-badge">
                    <Icon kind=badge.icon size=16 class="icon-gold" />
                    {badge.label}
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="hero">
            <div class="hero-backdrop" style=move || parallax_transform(scroll_y.get())>
                <img
                    class="hero-image"
                    src=hero.image_url
                    alt=hero.image_alt
                    referrerpolicy="no-referrer"
                />
                <div class="hero-gradient"></div>
            </div>

            <div class="container hero-content">
                <div class="hero-copy">
                    <span class="eyebrow">{hero.eyebrow}</span>
                    <h1 class="hero-title">
                        {hero.headline}
                        " "
                        <em>{hero.headline_emphasis}</em>
                    </h1>
                    <p class="hero-subtitle">{hero.subheadline}</p>

                    <div class="hero-actions">
                        <button type="button" class="btn btn-gold btn-pill btn-lift shimmer">
                            {hero.primary_cta}
                        </button>
                        <button type="button" class="btn btn-glass btn-pill btn-lift">
                            {hero.secondary_cta}
                        </button>
                    </div>

                    <ul class="hero-badges">{badges}</ul>
                </div>
            </div>

            <div class="scroll-indicator" aria-hidden="true">
                <span class="scroll-indicator-line"></span>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;
    use leptos::tachys::view::RenderHtml;

    fn render() -> String {
        let hero = SiteContent::embedded().unwrap().hero;
        Owner::new().with(|| view! { <Hero hero=hero /> }.to_html())
    }

    #[test]
    fn backdrop_starts_untranslated() {
        let html = render();
        assert!(html.contains("translate3d(0, 0.00px, 0)"));
        assert!(html.contains("referrerpolicy=\"no-referrer\""));
    }

    #[test]
    fn renders_copy_buttons_and_badges() {
        let html = render();
        assert!(html.contains("<em>Masterpiece</em>"));
        assert!(html.contains("Book Bridal Consultation"));
        assert!(html.contains("View Bridal Gallery"));
        assert_eq!(html.matches("class=\"hero-badge\"").count(), 4);
        assert!(html.contains("LGBTQ+ Friendly"));
    }

    #[test]
    fn buttons_have_no_form_to_submit() {
        let html = render();
        assert!(!html.contains("<form"));
        assert_eq!(
            html.matches("<button").count(),
            html.matches("type=\"button\"").count()
        );
    }
}
