use leptos::prelude::*;

use crate::content::FinalCtaContent;
use crate::state::Reveal;

#[component]
pub fn FinalCta(final_cta: FinalCtaContent) -> impl IntoView {
    view! {
        <section class="section final-cta">
            <div class={format!("{} final-cta-panel", Reveal::Up.class())}>
                <div class="final-cta-rings" aria-hidden="true">
                    <span class="ring ring-small"></span>
                    <span class="ring ring-large"></span>
                </div>
                <h2 class="section-title section-title-xl">{final_cta.title}</h2>
                <p class="final-cta-body">{final_cta.body}</p>
                <button type="button" class="btn btn-gold btn-pill btn-lg btn-press shimmer">
                    {final_cta.button}
                </button>
                <div class="final-cta-note">{final_cta.note}</div>
            </div>
        </section>
    }
}
