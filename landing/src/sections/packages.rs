use leptos::prelude::*;

use crate::content::{PackagesContent, PricingTier};
use crate::icons::{Icon, IconKind};
use crate::state::Reveal;

#[component]
pub fn Packages(packages: PackagesContent) -> impl IntoView {
    let PackagesContent {
        eyebrow,
        title,
        popular_badge,
        select_label,
        tiers,
    } = packages;

    view! {
        <section id="packages" class="section section-offwhite packages">
            <div class="container">
                <div class="section-header">
                    <span class="eyebrow">{eyebrow}</span>
                    <h2 class="section-title">{title}</h2>
                </div>
                <div class="pricing-grid">
                    {tiers
                        .into_iter()
                        .map(|tier| {
                            view! {
                                <PricingCard
                                    tier=tier
                                    badge=popular_badge.clone()
                                    select_label=select_label.clone()
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// One tier. The badge and filled button appear only when `tier.popular`.
#[component]
fn PricingCard(tier: PricingTier, badge: String, select_label: String) -> impl IntoView {
    let (card_class, button_class) = if tier.popular {
        ("pricing-card pricing-card-popular", "btn btn-gold btn-block shimmer")
    } else {
        ("pricing-card", "btn btn-outline btn-block")
    };

    view! {
        <article class={format!("{} {}", Reveal::Up.class(), card_class)}>
            {tier.popular.then(|| view! { <div class="pricing-badge">{badge}</div> })}
            <h3 class="pricing-name">{tier.name}</h3>
            <div class="pricing-price">{tier.price}</div>
            <ul class="pricing-features">
                {tier
                    .features
                    .into_iter()
                    .map(|feature| {
                        view! {
                            <li>
                                <Icon kind=IconKind::CheckCircle size=16 class="icon-gold" />
                                {feature}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <button type="button" class=button_class>
                {select_label}
            </button>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;
    use leptos::tachys::view::RenderHtml;

    fn render(packages: PackagesContent) -> String {
        Owner::new().with(|| view! { <Packages packages=packages /> }.to_html())
    }

    #[test]
    fn exactly_one_card_carries_the_badge() {
        let html = render(SiteContent::embedded().unwrap().packages);
        assert_eq!(html.matches("Most Preferred").count(), 1);
        assert_eq!(html.matches("pricing-card-popular").count(), 1);
        assert_eq!(html.matches("Select Package").count(), 3);
    }

    #[test]
    fn badge_belongs_to_the_flagged_tier() {
        let mut packages = SiteContent::embedded().unwrap().packages;
        for tier in &mut packages.tiers {
            tier.popular = tier.name == "Engagement Glow";
        }
        let html = render(packages);

        let badge = html.find("Most Preferred").unwrap();
        let glow = html.find("Engagement Glow").unwrap();
        let minimalist = html.find("Elegant Minimalist").unwrap();
        assert!(badge > minimalist && badge < glow);
    }

    #[test]
    fn every_tier_lists_its_features() {
        let html = render(SiteContent::embedded().unwrap().packages);
        assert!(html.contains("HD Airbrush Makeup"));
        assert!(html.contains("Premium Lashes"));
        assert!(html.contains("Mac/Huda Products"));
        assert!(html.contains("₹10,000+"));
    }
}
