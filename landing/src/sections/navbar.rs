use leptos::prelude::*;

use crate::content::{Brand, NavLink};
use crate::dom::use_scroll_offset;
use crate::icons::{Icon, IconKind};
use crate::state::{MobileMenu, navbar_class};

#[component]
pub fn Navbar(
    brand: Brand,
    links: Vec<NavLink>,
    /// Desktop booking button label
    cta: String,
    /// Booking button label inside the mobile panel
    menu_cta: String,
) -> impl IntoView {
    let scroll_y = use_scroll_offset();
    let (menu, set_menu) = signal(MobileMenu::default());

    let desktop_links = links
        .iter()
        .map(|link| {
            view! {
                <a href={link.target.clone()} class="nav-link">{link.label.clone()}</a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav class=move || navbar_class(scroll_y.get())>
            <div class="container navbar-inner">
                <div class="brand brand-enter">
                    <span class="brand-name">{brand.name}</span>
                    <span class="brand-tagline">{brand.tagline}</span>
                </div>

                <div class="nav-links">
                    {desktop_links}
                    <button type="button" class="btn btn-gold btn-pill btn-press shimmer">
                        {cta}
                    </button>
                </div>

                <button
                    type="button"
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu.get().is_open().to_string()
                    on:click=move |_| toggle_menu(set_menu)
                >
                    {move || {
                        if menu.get().is_open() {
                            view! { <Icon kind=IconKind::Close size=28 /> }.into_any()
                        } else {
                            view! { <Icon kind=IconKind::Menu size=28 /> }.into_any()
                        }
                    }}
                </button>
            </div>

            <MobilePanel links=links menu=menu set_menu=set_menu cta=menu_cta />
        </nav>
    }
}

/// Menu icon handler.
fn toggle_menu(set_menu: WriteSignal<MobileMenu>) {
    set_menu.update(|m| {
        *m = m.toggled();
        log::debug!("mobile menu {m:?}");
    });
}

/// Mobile link handler; the panel always closes.
fn close_menu(set_menu: WriteSignal<MobileMenu>) {
    set_menu.update(|m| *m = m.link_selected());
}

/// Narrow-viewport navigation. Choosing any link closes the panel; the
/// browser then scrolls to the link's anchor.
#[component]
pub fn MobilePanel(
    links: Vec<NavLink>,
    menu: ReadSignal<MobileMenu>,
    set_menu: WriteSignal<MobileMenu>,
    cta: String,
) -> impl IntoView {
    view! {
        <Show when=move || menu.get().is_open()>
            <div class="mobile-panel">
                {links
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href={link.target.clone()}
                                class="mobile-link"
                                on:click=move |_| close_menu(set_menu)
                            >
                                {link.label.clone()}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
                <button type="button" class="btn btn-gold btn-block shimmer">
                    {cta.clone()}
                </button>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;
    use leptos::tachys::view::RenderHtml;

    fn content() -> SiteContent {
        SiteContent::embedded().unwrap()
    }

    #[test]
    fn renders_expanded_at_top_of_page() {
        let c = content();
        let html = Owner::new().with(|| {
            view! {
                <Navbar
                    brand=c.brand
                    links=c.nav_links
                    cta=c.cta.nav
                    menu_cta=c.cta.mobile_menu
                />
            }
            .to_html()
        });

        assert!(html.contains("class=\"navbar navbar-expanded\""));
        assert!(html.contains("BRIGHT BEAUTY"));
        assert_eq!(html.matches("class=\"nav-link\"").count(), 5);
        assert!(html.contains("Book Now"));
        // panel starts closed
        assert!(!html.contains("mobile-panel"));
        assert!(html.contains("aria-expanded=\"false\""));
    }

    #[test]
    fn open_panel_lists_five_links_and_one_button() {
        let c = content();
        let html = Owner::new().with(|| {
            let (menu, set_menu) = signal(MobileMenu::Open);
            view! {
                <MobilePanel
                    links=c.nav_links
                    menu=menu
                    set_menu=set_menu
                    cta=c.cta.mobile_menu
                />
            }
            .to_html()
        });

        assert_eq!(html.matches("class=\"mobile-link\"").count(), 5);
        assert_eq!(html.matches("<button").count(), 1);
        assert!(html.contains("Book Consultation"));
        assert!(html.contains("href=\"#gallery\""));
    }

    #[test]
    fn closed_panel_renders_nothing() {
        let c = content();
        let html = Owner::new().with(|| {
            let (menu, set_menu) = signal(MobileMenu::Open.link_selected());
            view! {
                <MobilePanel
                    links=c.nav_links
                    menu=menu
                    set_menu=set_menu
                    cta=c.cta.mobile_menu
                />
            }
            .to_html()
        });

        assert!(!html.contains("mobile-link"));
        assert!(!html.contains("Book Consultation"));
    }

    #[test]
    fn menu_handlers_open_and_close_the_panel() {
        let c = content();
        Owner::new().with(|| {
            let (menu, set_menu) = signal(MobileMenu::default());
            let render = || {
                view! {
                    <MobilePanel
                        links=c.nav_links.clone()
                        menu=menu
                        set_menu=set_menu
                        cta=c.cta.mobile_menu.clone()
                    />
                }
                .to_html()
            };

            assert!(!render().contains("mobile-link"));

            toggle_menu(set_menu);
            assert_eq!(menu.get_untracked(), MobileMenu::Open);
            assert_eq!(render().matches("class=\"mobile-link\"").count(), 5);

            close_menu(set_menu);
            assert_eq!(menu.get_untracked(), MobileMenu::Closed);
            assert!(!render().contains("mobile-link"));

            // selecting a link on a closed panel keeps it closed
            close_menu(set_menu);
            assert!(!menu.get_untracked().is_open());

            toggle_menu(set_menu);
            toggle_menu(set_menu);
            assert!(!render().contains("Book Consultation"));
        });
    }
}
