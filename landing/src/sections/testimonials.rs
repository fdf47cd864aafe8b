use leptos::prelude::*;

use crate::content::{Review, TestimonialsContent};
use crate::icons::{Icon, IconKind};
use crate::state::Reveal;

#[component]
pub fn Testimonials(testimonials: TestimonialsContent) -> impl IntoView {
    view! {
        <section id="reviews" class="section section-blush testimonials">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{testimonials.title}</h2>
                    <p class="section-subtitle">{testimonials.subtitle}</p>
                </div>
                <div class="reviews-grid">
                    {testimonials
                        .reviews
                        .into_iter()
                        .map(|review| view! { <ReviewCard review=review /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ReviewCard(review: Review) -> impl IntoView {
    let stars = (0..review.rating)
        .map(|_| view! { <Icon kind=IconKind::Star size=16 class="icon-gold icon-filled review-star" /> })
        .collect::<Vec<_>>();

    view! {
        <article class={format!("{} review-card", Reveal::Scale.class())}>
            <div class="review-stars">{stars}</div>
            <p class="review-quote">{format!("\"{}\"", review.quote)}</p>
            <div class="review-author">{review.author}</div>
            <div class="review-role">{review.role}</div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn star_row_matches_rating() {
        let review = Review {
            author: "Test Bride".into(),
            role: "Lucknow Bride".into(),
            quote: "Lovely".into(),
            rating: 3,
        };
        let html = Owner::new().with(|| view! { <ReviewCard review=review /> }.to_html());
        assert_eq!(html.matches("review-star\"").count(), 3);
        assert_eq!(html.matches("class=\"review-stars\"").count(), 1);
    }

    #[test]
    fn three_reviews_with_five_stars_each() {
        let testimonials = SiteContent::embedded().unwrap().testimonials;
        let html =
            Owner::new().with(|| view! { <Testimonials testimonials=testimonials /> }.to_html());
        assert_eq!(html.matches("review-card").count(), 3);
        assert_eq!(html.matches("review-star\"").count(), 15);
        assert!(html.contains("Priya Verma"));
        assert!(html.contains("Destination Bride"));
    }
}
