//! Site content: every string, list and image URL the page renders.
//!
//! Content lives in `content/site.json`, is embedded into the binary and
//! parsed once at startup. Nothing here is mutated after loading.
//!
//! ```rust
//! use bright_beauty_landing::content::SiteContent;
//!
//! let content = SiteContent::embedded().unwrap();
//! assert_eq!(content.packages.tiers.iter().filter(|t| t.popular).count(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::icons::IconKind;

const EMBEDDED_SITE_JSON: &str = include_str!("../content/site.json");

/// Everything the page shows, section by section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub brand: Brand,
    pub nav_links: Vec<NavLink>,
    pub hero: HeroContent,
    pub experience: ExperienceContent,
    pub why_us: WhyUsContent,
    pub packages: PackagesContent,
    pub testimonials: TestimonialsContent,
    pub gallery: GalleryContent,
    pub final_cta: FinalCtaContent,
    pub footer: FooterContent,
    pub whatsapp: WhatsAppContent,
    pub cta: CtaLabels,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    pub tagline: String,
}

/// Same-document link. `target` is `#` (top of page) or `#anchor`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub target: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrustBadge {
    pub label: String,
    pub icon: IconKind,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    pub eyebrow: String,
    pub headline: String,
    pub headline_emphasis: String,
    pub subheadline: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub image_url: String,
    pub image_alt: String,
    pub badges: Vec<TrustBadge>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperienceContent {
    pub eyebrow: String,
    pub title: String,
    pub title_emphasis: String,
    pub body: String,
    pub checklist: Vec<String>,
    pub quote: String,
    pub image_url: String,
    pub image_alt: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureCard {
    pub title: String,
    pub description: String,
    pub icon: IconKind,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WhyUsContent {
    pub title: String,
    pub features: Vec<FeatureCard>,
}

/// One pricing card. `popular` is static input, never computed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    pub name: String,
    pub price: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PackagesContent {
    pub eyebrow: String,
    pub title: String,
    pub popular_badge: String,
    pub select_label: String,
    pub tiers: Vec<PricingTier>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    pub role: String,
    pub quote: String,
    pub rating: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestimonialsContent {
    pub title: String,
    pub subtitle: String,
    pub reviews: Vec<Review>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GalleryContent {
    pub eyebrow: String,
    pub title: String,
    pub follow_label: String,
    pub images: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinalCtaContent {
    pub title: String,
    pub body: String,
    pub button: String,
    pub note: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: IconKind,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FooterContent {
    pub about: String,
    pub socials: Vec<SocialLink>,
    pub quick_links: Vec<NavLink>,
    pub address: String,
    pub phone: String,
    pub hours: String,
    pub newsletter_title: String,
    pub newsletter_body: String,
    pub newsletter_placeholder: String,
    pub copyright: String,
    pub legal_links: Vec<NavLink>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WhatsAppContent {
    pub href: String,
    pub label: String,
}

/// Labels for the inert booking buttons outside the hero and final CTA.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CtaLabels {
    pub nav: String,
    pub mobile_menu: String,
    pub sticky: String,
}

impl SiteContent {
    /// Parse and validate the content compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_SITE_JSON)
    }

    /// Parse and validate a content document.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Check the invariants the page relies on.
    pub fn validate(&self) -> Result<(), ContentError> {
        match self.packages.tiers.iter().filter(|t| t.popular).count() {
            0 => return Err(ContentError::NoPopularTier),
            1 => {}
            count => return Err(ContentError::MultiplePopularTiers { count }),
        }

        if let Some(review) = self
            .testimonials
            .reviews
            .iter()
            .find(|r| !(1..=5).contains(&r.rating))
        {
            return Err(ContentError::RatingOutOfRange {
                author: review.author.clone(),
                rating: review.rating,
            });
        }

        let links = self
            .nav_links
            .iter()
            .chain(&self.footer.quick_links)
            .chain(&self.footer.legal_links);
        for link in links {
            if !is_anchor(&link.target) {
                return Err(ContentError::InvalidAnchor {
                    label: link.label.clone(),
                    target: link.target.clone(),
                });
            }
        }

        if self.gallery.images.is_empty() {
            return Err(ContentError::EmptyGallery);
        }

        let images = [&self.hero.image_url, &self.experience.image_url]
            .into_iter()
            .chain(&self.gallery.images);
        for url in images {
            if !url.starts_with("https://") {
                return Err(ContentError::InsecureImageUrl { url: url.clone() });
            }
        }

        Ok(())
    }

    /// The tier carrying the "popular" flag. Present once `validate` passed.
    pub fn popular_tier(&self) -> Option<&PricingTier> {
        self.packages.tiers.iter().find(|t| t.popular)
    }
}

fn is_anchor(target: &str) -> bool {
    match target.strip_prefix('#') {
        Some(rest) => !rest.contains(char::is_whitespace),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn embedded() -> SiteContent {
        SiteContent::embedded().expect("embedded content is valid")
    }

    #[test]
    fn embedded_content_has_fixed_list_sizes() {
        let content = embedded();
        assert_eq!(content.nav_links.len(), 5);
        assert_eq!(content.hero.badges.len(), 4);
        assert_eq!(content.why_us.features.len(), 4);
        assert_eq!(content.packages.tiers.len(), 3);
        assert_eq!(content.testimonials.reviews.len(), 3);
        assert_eq!(content.gallery.images.len(), 6);
    }

    #[test]
    fn nav_links_point_at_section_anchors() {
        let content = embedded();
        let targets: Vec<&str> = content.nav_links.iter().map(|l| l.target.as_str()).collect();
        assert_eq!(
            targets,
            vec!["#", "#experience", "#packages", "#gallery", "#reviews"]
        );
    }

    #[test]
    fn royal_bride_is_the_popular_tier() {
        let content = embedded();
        let popular = content.popular_tier().expect("one popular tier");
        assert_eq!(popular.name, "The Royal Bride");
        assert_eq!(popular.price, "₹25,000+");
    }

    #[test]
    fn badge_icons_parse_from_kebab_case() {
        let content = embedded();
        let icons: Vec<IconKind> = content.hero.badges.iter().map(|b| b.icon).collect();
        assert_eq!(
            icons,
            vec![
                IconKind::Star,
                IconKind::Heart,
                IconKind::Sparkles,
                IconKind::ShieldCheck
            ]
        );
    }

    #[test]
    fn rejects_second_popular_tier() {
        let mut content = embedded();
        content.packages.tiers[1].popular = true;
        assert!(matches!(
            content.validate(),
            Err(ContentError::MultiplePopularTiers { count: 2 })
        ));
    }

    #[test]
    fn rejects_missing_popular_tier() {
        let mut content = embedded();
        for tier in &mut content.packages.tiers {
            tier.popular = false;
        }
        assert!(matches!(content.validate(), Err(ContentError::NoPopularTier)));
    }

    #[test]
    fn rejects_out_of_range_rating() {
        let mut content = embedded();
        content.testimonials.reviews[2].rating = 0;
        match content.validate() {
            Err(ContentError::RatingOutOfRange { author, rating }) => {
                assert_eq!(author, "Sanya Gupta");
                assert_eq!(rating, 0);
            }
            other => panic!("unexpected: {other:?}"),
        }

        content.testimonials.reviews[2].rating = 6;
        assert!(content.validate().is_err());
    }

    #[test]
    fn rejects_non_anchor_links() {
        let mut content = embedded();
        content.nav_links[3].target = "gallery".into();
        assert!(matches!(
            content.validate(),
            Err(ContentError::InvalidAnchor { .. })
        ));

        let mut content = embedded();
        content.footer.quick_links[0].target = "https://example.com".into();
        assert!(content.validate().is_err());
    }

    #[test]
    fn rejects_plain_http_images_and_empty_gallery() {
        let mut content = embedded();
        content.gallery.images[0] = "http://images.example.com/a.jpg".into();
        assert!(matches!(
            content.validate(),
            Err(ContentError::InsecureImageUrl { .. })
        ));

        let mut content = embedded();
        content.gallery.images.clear();
        assert!(matches!(content.validate(), Err(ContentError::EmptyGallery)));
    }

    #[test]
    fn unknown_icon_is_a_parse_error() {
        let json = EMBEDDED_SITE_JSON.replacen("\"award\"", "\"unicorn\"", 1);
        assert!(matches!(
            SiteContent::from_json(&json),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn anchor_rule() {
        assert!(is_anchor("#"));
        assert!(is_anchor("#reviews"));
        assert!(!is_anchor("reviews"));
        assert!(!is_anchor("# bad"));
        assert!(!is_anchor(""));
    }
}
