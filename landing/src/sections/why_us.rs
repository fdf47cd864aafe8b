use leptos::prelude::*;

use crate::content::{FeatureCard as FeatureCardContent, WhyUsContent};
use crate::icons::Icon;
use crate::state::{Reveal, stagger_style};

/// Cards enter one after another, 100ms apart.
const STAGGER_MS: u32 = 100;

#[component]
pub fn WhyUs(why_us: WhyUsContent) -> impl IntoView {
    view! {
        <section class="section section-beige why-us">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{why_us.title}</h2>
                    <div class="section-rule"></div>
                </div>
                <div class="features-grid">
                    {why_us
                        .features
                        .into_iter()
                        .enumerate()
                        .map(|(index, feature)| view! { <FeatureCard feature=feature index=index /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: FeatureCardContent, index: usize) -> impl IntoView {
    view! {
        <article
            class={format!("{} feature-card", Reveal::Up.class())}
            style={stagger_style(index, STAGGER_MS)}
        >
            <div class="feature-icon">
                <Icon kind=feature.icon size=32 />
            </div>
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-description">{feature.description}</p>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn four_cards_with_increasing_delay() {
        let why_us = SiteContent::embedded().unwrap().why_us;
        let html = Owner::new().with(|| view! { <WhyUs why_us=why_us /> }.to_html());

        assert_eq!(html.matches("feature-card").count(), 4);
        for delay in ["0ms", "100ms", "200ms", "300ms"] {
            assert!(html.contains(&format!("--reveal-delay: {delay};")), "missing {delay}");
        }
        assert!(html.contains("100+ Happy Brides"));
    }
}
