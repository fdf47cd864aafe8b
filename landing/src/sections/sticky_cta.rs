use leptos::prelude::*;

/// Booking bar pinned to the bottom of narrow viewports (hidden from `md` up).
#[component]
pub fn StickyCta(label: String) -> impl IntoView {
    view! {
        <div class="sticky-cta">
            <button type="button" class="btn btn-gold btn-block shimmer">
                {label}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn bar_holds_one_inert_button() {
        let html = Owner::new()
            .with(|| view! { <StickyCta label="Book Bridal Slot".to_string() /> }.to_html());
        assert!(html.contains("class=\"sticky-cta\""));
        assert_eq!(html.matches("<button").count(), 1);
        assert!(html.contains("type=\"button\""));
        assert!(html.contains("Book Bridal Slot"));
    }
}
