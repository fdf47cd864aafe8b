use leptos::prelude::*;

use crate::content::GalleryContent;
use crate::icons::{Icon, IconKind};
use crate::state::Reveal;

/// Masonry portfolio. Column flow is pure CSS (`columns`), so tiles keep
/// their natural heights; there is no lightbox.
#[component]
pub fn Gallery(gallery: GalleryContent) -> impl IntoView {
    view! {
        <section id="gallery" class="section section-offwhite gallery">
            <div class="container">
                <div class="gallery-header">
                    <div>
                        <span class="eyebrow">{gallery.eyebrow}</span>
                        <h2 class="section-title">{gallery.title}</h2>
                    </div>
                    <button type="button" class="link-button">
                        {gallery.follow_label}
                        <Icon kind=IconKind::Instagram size=16 />
                    </button>
                </div>
                <div class="gallery-columns">
                    {gallery
                        .images
                        .into_iter()
                        .enumerate()
                        .map(|(index, url)| view! { <GalleryTile url=url index=index /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn GalleryTile(url: String, index: usize) -> impl IntoView {
    view! {
        <figure class={format!("{} gallery-tile", Reveal::Up.class())}>
            <img
                src=url
                alt={format!("Gallery {index}")}
                loading="lazy"
                referrerpolicy="no-referrer"
            />
            <div class="gallery-overlay">
                <Icon kind=IconKind::Instagram size=32 />
            </div>
        </figure>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn each_tile_has_one_image_and_one_overlay() {
        let gallery = SiteContent::embedded().unwrap().gallery;
        let urls = gallery.images.clone();
        let html = Owner::new().with(|| view! { <Gallery gallery=gallery /> }.to_html());

        assert_eq!(html.matches("gallery-tile").count(), 6);
        assert_eq!(html.matches("<img").count(), 6);
        assert_eq!(html.matches("class=\"gallery-overlay\"").count(), 6);
        for (i, url) in urls.iter().enumerate() {
            assert!(html.contains(&format!("alt=\"Gallery {i}\"")));
            let path = url.split('?').next().unwrap();
            assert_eq!(html.matches(path).count(), 1);
        }
    }
}
