use leptos::prelude::*;

use crate::content::ExperienceContent;
use crate::icons::{Icon, IconKind};
use crate::state::Reveal;

#[component]
pub fn Experience(experience: ExperienceContent) -> impl IntoView {
    let checklist = experience
        .checklist
        .into_iter()
        .map(|item| {
            view! {
                <li class="checklist-item">
                    <Icon kind=IconKind::CheckCircle size=20 class="icon-gold icon-fixed" />
                    <span>{item}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="experience" class="section section-offwhite experience">
            <div class="container experience-grid">
                <div class={Reveal::Left.class()}>
                    <span class="eyebrow">{experience.eyebrow}</span>
                    <h2 class="section-title section-title-lg">
                        {experience.title}
                        " "
                        <em>{experience.title_emphasis}</em>
                    </h2>
                    <div class="experience-body">
                        <p>{experience.body}</p>
                        <ul class="checklist">{checklist}</ul>
                        <p class="experience-quote">{experience.quote}</p>
                    </div>
                </div>

                <div class={format!("{} experience-media", Reveal::Scale.class())}>
                    <div class="experience-frame">
                        <img
                            src=experience.image_url
                            alt=experience.image_alt
                            referrerpolicy="no-referrer"
                        />
                    </div>
                    <div class="experience-accent experience-accent-fill"></div>
                    <div class="experience-accent experience-accent-line"></div>
                </div>
            </div>
        </section>
    }
}
