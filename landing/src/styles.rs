//! CSS for the landing page.
//!
//! One stylesheet, inlined by [`crate::App`]. Palette: gold on off-white with
//! beige and blush accents, serif display type over a light sans body.
//!
//! Motion lives here too:
//! - `hero-zoom`: backdrop scale 1.15 -> 1.0, 15s, alternating, forever
//! - `.reveal` / `.is-visible`: one-shot entrance transitions, optionally
//!   delayed by `--reveal-delay`
//! - hover lifts and scales on cards, buttons and gallery tiles
//!
//! Breakpoints: `md` = 768px, `lg` = 1024px.

/// Complete stylesheet for the page.
pub const PAGE_CSS: &str = r#"
:root {
    --gold: #c5a059;
    --gold-soft: rgba(197, 160, 89, 0.2);
    --offwhite: #fdfbf7;
    --beige: #f5eee4;
    --blush: #f4dcd6;
    --dark: #2a2420;
    --dark-70: rgba(42, 36, 32, 0.7);
    --dark-60: rgba(42, 36, 32, 0.6);
    --serif: "Playfair Display", Georgia, serif;
    --sans: "Inter", system-ui, -apple-system, sans-serif;
    --ease-out-soft: cubic-bezier(0.33, 1, 0.68, 1);
}

*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    background: var(--offwhite);
    color: var(--dark);
    font-family: var(--sans);
    -webkit-font-smoothing: antialiased;
}

h1, h2, h3, h4 { font-family: var(--serif); font-weight: 400; margin: 0; }
p { margin: 0; }
ul { list-style: none; margin: 0; padding: 0; }
a { color: inherit; text-decoration: none; }
img { display: block; max-width: 100%; }
em { font-style: italic; }

.page { position: relative; overflow-x: hidden; }

.container {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.icon { display: inline-block; vertical-align: middle; }
.icon-gold { color: var(--gold); }
.icon-filled { fill: var(--gold); }
.icon-fixed { flex-shrink: 0; margin-top: 0.15rem; }

.eyebrow {
    display: inline-block;
    color: var(--gold);
    text-transform: uppercase;
    letter-spacing: 0.3em;
    font-size: 0.75rem;
    font-weight: 700;
    margin-bottom: 1rem;
}

/* ---------- Buttons ---------- */

.btn {
    border: 0;
    cursor: pointer;
    font-family: var(--sans);
    text-transform: uppercase;
    letter-spacing: 0.2em;
    font-size: 0.75rem;
    font-weight: 700;
    transition: transform 0.3s ease, background 0.3s ease, color 0.3s ease, box-shadow 0.3s ease;
}
.btn-gold { background: var(--gold); color: #fff; box-shadow: 0 10px 25px -8px rgba(197, 160, 89, 0.6); }
.btn-glass {
    background: rgba(255, 255, 255, 0.1);
    color: #fff;
    border: 1px solid rgba(255, 255, 255, 0.3);
    backdrop-filter: blur(12px);
}
.btn-glass:hover { background: rgba(255, 255, 255, 0.2); }
.btn-outline { background: transparent; color: var(--gold); border: 1px solid var(--gold); }
.btn-outline:hover { background: var(--gold); color: #fff; }
.btn-pill { border-radius: 9999px; padding: 0.6rem 1.5rem; }
.btn-lg { padding: 1.25rem 3rem; font-size: 0.875rem; }
.btn-block { display: block; width: 100%; padding: 1rem; border-radius: 0.75rem; }
.btn-press:hover { transform: scale(1.05); }
.btn-press:active { transform: scale(0.95); }
.btn-lift:hover { transform: translateY(-2px) scale(1.05); }
.btn-lift:active { transform: scale(0.98); }

.shimmer { position: relative; overflow: hidden; }
.shimmer::after {
    content: "";
    position: absolute;
    top: 0;
    left: -150%;
    width: 50%;
    height: 100%;
    background: linear-gradient(120deg, transparent, rgba(255, 255, 255, 0.45), transparent);
    transform: skewX(-20deg);
    animation: shimmer 3s ease-in-out infinite;
}
@keyframes shimmer {
    0% { left: -150%; }
    60%, 100% { left: 150%; }
}

/* ---------- Navbar ---------- */

.navbar {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    z-index: 50;
    transition: all 0.5s ease;
}
.navbar-expanded { background: transparent; padding: 1.5rem 0; }
.navbar-compact {
    background: rgba(253, 251, 247, 0.8);
    backdrop-filter: blur(14px);
    -webkit-backdrop-filter: blur(14px);
    border-bottom: 1px solid rgba(197, 160, 89, 0.15);
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.06);
    padding: 0.75rem 0;
}
.navbar-inner { display: flex; justify-content: space-between; align-items: center; }

.brand { display: flex; flex-direction: column; }
.brand-name {
    font-family: var(--serif);
    font-size: 1.5rem;
    font-weight: 700;
    letter-spacing: 0.1em;
    color: var(--gold);
}
.brand-tagline {
    font-size: 0.625rem;
    letter-spacing: 0.3em;
    text-transform: uppercase;
    opacity: 0.7;
    margin-top: -0.25rem;
}
.brand-enter { animation: brand-enter 0.6s ease-out both; }
@keyframes brand-enter {
    from { opacity: 0; transform: translateX(-20px); }
    to { opacity: 1; transform: none; }
}

.nav-links { display: none; align-items: center; gap: 2rem; }
.nav-link {
    font-size: 0.875rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    transition: color 0.3s ease;
}
.nav-link:hover { color: var(--gold); }

.nav-toggle {
    display: inline-flex;
    background: none;
    border: 0;
    padding: 0;
    color: var(--dark);
    cursor: pointer;
}

.mobile-panel {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    padding: 1.5rem;
    background: #fff;
    border-top: 1px solid var(--beige);
    overflow: hidden;
    animation: panel-open 0.3s ease-out both;
}
@keyframes panel-open {
    from { opacity: 0; max-height: 0; }
    to { opacity: 1; max-height: 32rem; }
}
.mobile-link { font-family: var(--serif); font-size: 1.125rem; transition: color 0.3s ease; }
.mobile-link:hover { color: var(--gold); }

/* ---------- Hero ---------- */

.hero {
    position: relative;
    height: 100vh;
    width: 100%;
    overflow: hidden;
    display: flex;
    align-items: center;
    justify-content: center;
}
.hero-backdrop { position: absolute; inset: 0; z-index: 0; will-change: transform; }
.hero-image {
    width: 100%;
    height: 125%;
    object-fit: cover;
    filter: brightness(0.8);
    animation: hero-zoom 15s var(--ease-out-soft) infinite alternate;
}
@keyframes hero-zoom {
    from { transform: scale(1.15); }
    to { transform: scale(1); }
}
.hero-gradient {
    position: absolute;
    inset: 0;
    background: linear-gradient(to bottom, rgba(0, 0, 0, 0.4), transparent, var(--offwhite));
}
.hero-content { position: relative; z-index: 10; max-width: 56rem; text-align: center; }
.hero-copy { animation: rise-in 0.8s ease-out both; }
@keyframes rise-in {
    from { opacity: 0; transform: translateY(30px); }
    to { opacity: 1; transform: none; }
}
.hero-title {
    color: #fff;
    font-size: 3rem;
    line-height: 1.15;
    margin-bottom: 1.5rem;
}
.hero-subtitle {
    color: rgba(255, 255, 255, 0.9);
    font-size: 1.125rem;
    font-weight: 300;
    letter-spacing: 0.02em;
    max-width: 42rem;
    margin: 0 auto 2.5rem;
}
.hero-actions {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 1rem;
}
.hero-actions .btn { width: 100%; padding: 1rem 2.5rem; }
.hero-badges {
    margin-top: 4rem;
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 2rem;
    animation: fade-in 1s ease 1s both;
}
.hero-badge {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    color: rgba(255, 255, 255, 0.8);
    font-size: 0.625rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
}
@keyframes fade-in {
    from { opacity: 0; }
    to { opacity: 1; }
}
.scroll-indicator {
    position: absolute;
    bottom: 2.5rem;
    left: 50%;
    transform: translateX(-50%);
    animation: bob 2s ease-in-out infinite;
}
.scroll-indicator-line {
    display: block;
    width: 1px;
    height: 3rem;
    background: linear-gradient(to bottom, rgba(255, 255, 255, 0.5), transparent);
}
@keyframes bob {
    0%, 100% { transform: translate(-50%, 0); }
    50% { transform: translate(-50%, 10px); }
}

/* ---------- Sections ---------- */

.section { padding: 6rem 0; }
.section-offwhite { background: var(--offwhite); }
.section-beige { background: rgba(245, 238, 228, 0.3); }
.section-blush { background: rgba(244, 220, 214, 0.1); }
.section-header { text-align: center; margin-bottom: 4rem; }
.section-title { font-size: 2.25rem; line-height: 1.2; }
.section-title-lg { margin-bottom: 2rem; }
.section-title-xl { margin-bottom: 1.5rem; }
.section-subtitle { color: var(--dark-60); margin-top: 1rem; }
.section-rule { width: 6rem; height: 1px; background: var(--gold); margin: 1rem auto 0; }

/* ---------- Reveal (one-shot entrance) ---------- */

.reveal {
    opacity: 0;
    transition: opacity 0.8s ease, transform 0.8s ease;
    transition-delay: var(--reveal-delay, 0ms);
}
.reveal-up { transform: translateY(30px); }
.reveal-left { transform: translateX(-50px); }
.reveal-scale { transform: scale(0.92); }
.reveal.is-visible { opacity: 1; transform: none; }

@media (prefers-reduced-motion: reduce) {
    .reveal { opacity: 1; transform: none; transition: none; }
    .hero-image, .shimmer::after, .scroll-indicator { animation: none; }
}

/* ---------- Experience ---------- */

.experience { overflow: hidden; }
.experience-grid { display: grid; grid-template-columns: 1fr; gap: 4rem; align-items: center; }
.experience-body { display: flex; flex-direction: column; gap: 1.5rem; color: rgba(42, 36, 32, 0.8); font-size: 1.125rem; line-height: 1.7; }
.checklist { display: flex; flex-direction: column; gap: 1rem; }
.checklist-item { display: flex; align-items: flex-start; gap: 0.75rem; }
.experience-quote { font-family: var(--serif); font-style: italic; color: var(--gold); font-size: 1.25rem; padding-top: 1rem; }
.experience-media { position: relative; }
.experience-frame {
    aspect-ratio: 4 / 5;
    border-radius: 1rem;
    overflow: hidden;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}
.experience-frame img { width: 100%; height: 100%; object-fit: cover; }
.experience-accent { position: absolute; border-radius: 1rem; z-index: -1; }
.experience-accent-fill { bottom: -2rem; left: -2rem; width: 12rem; height: 12rem; background: var(--beige); }
.experience-accent-line { top: -2rem; right: -2rem; width: 16rem; height: 16rem; border: 1px solid var(--gold-soft); }

/* ---------- Why us ---------- */

.features-grid { display: grid; grid-template-columns: 1fr; gap: 2rem; }
.feature-card {
    background: #fff;
    padding: 2rem;
    border-radius: 1rem;
    text-align: center;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    transition: opacity 0.8s ease, transform 0.5s ease, box-shadow 0.5s ease;
}
.feature-card.is-visible:hover { transform: translateY(-10px); box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1); }
.feature-icon {
    width: 4rem;
    height: 4rem;
    margin: 0 auto 1.5rem;
    border-radius: 9999px;
    background: var(--beige);
    color: var(--gold);
    display: flex;
    align-items: center;
    justify-content: center;
    transition: background 0.5s ease, color 0.5s ease;
}
.feature-card:hover .feature-icon { background: var(--gold); color: #fff; }
.feature-title { font-size: 1.25rem; margin-bottom: 0.75rem; }
.feature-description { color: var(--dark-60); font-size: 0.875rem; line-height: 1.6; }

/* ---------- Packages ---------- */

.pricing-grid { display: grid; grid-template-columns: 1fr; gap: 2rem; }
.pricing-card {
    position: relative;
    display: flex;
    flex-direction: column;
    padding: 2.5rem;
    border-radius: 1.5rem;
    border: 1px solid var(--beige);
    background: rgba(255, 255, 255, 0.5);
}
.pricing-card-popular {
    border-color: var(--gold);
    background: #fff;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}
.pricing-badge {
    position: absolute;
    top: -1rem;
    left: 50%;
    transform: translateX(-50%);
    background: var(--gold);
    color: #fff;
    font-size: 0.625rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    padding: 0.25rem 1rem;
    border-radius: 9999px;
    white-space: nowrap;
}
.pricing-name { font-size: 1.5rem; margin-bottom: 0.5rem; }
.pricing-price { font-family: var(--serif); font-size: 1.875rem; color: var(--gold); margin-bottom: 2rem; }
.pricing-features { display: flex; flex-direction: column; gap: 1rem; margin-bottom: 2.5rem; flex-grow: 1; }
.pricing-features li { display: flex; align-items: center; gap: 0.75rem; font-size: 0.875rem; color: var(--dark-70); }

/* ---------- Testimonials ---------- */

.reviews-grid { display: grid; grid-template-columns: 1fr; gap: 2rem; }
.review-card {
    background: #fff;
    padding: 2.5rem;
    border-radius: 1.5rem;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    font-style: italic;
    text-align: center;
}
.review-stars { display: flex; justify-content: center; gap: 0.25rem; margin-bottom: 1.5rem; }
.review-quote { color: rgba(42, 36, 32, 0.8); line-height: 1.7; margin-bottom: 2rem; }
.review-author { font-family: var(--serif); font-size: 1.125rem; font-style: normal; }
.review-role {
    font-size: 0.625rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    color: var(--gold);
    font-weight: 700;
    font-style: normal;
    margin-top: 0.25rem;
}

/* ---------- Gallery ---------- */

.gallery-header {
    display: flex;
    flex-direction: column;
    justify-content: space-between;
    align-items: flex-start;
    gap: 1.5rem;
    margin-bottom: 3rem;
}
.link-button {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    background: none;
    border: 0;
    border-bottom: 1px solid var(--gold);
    padding: 0 0 0.25rem;
    color: var(--gold);
    text-transform: uppercase;
    letter-spacing: 0.1em;
    font-size: 0.75rem;
    font-weight: 700;
    cursor: pointer;
    transition: gap 0.3s ease;
}
.link-button:hover { gap: 1rem; }
.gallery-columns { columns: 1; column-gap: 1.5rem; }
.gallery-tile {
    position: relative;
    margin: 0 0 1.5rem;
    break-inside: avoid;
    border-radius: 1rem;
    overflow: hidden;
    cursor: pointer;
}
.gallery-tile.is-visible:hover { transform: scale(1.02); }
.gallery-tile img {
    width: 100%;
    object-fit: cover;
    border-radius: 1rem;
    transition: transform 0.7s ease;
}
.gallery-tile:hover img { transform: scale(1.1); }
.gallery-overlay {
    position: absolute;
    inset: 0;
    background: rgba(0, 0, 0, 0.4);
    color: #fff;
    opacity: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    transition: opacity 0.5s ease;
}
.gallery-tile:hover .gallery-overlay { opacity: 1; }

/* ---------- Final CTA ---------- */

.final-cta { padding-left: 1.5rem; padding-right: 1.5rem; }
.final-cta-panel {
    position: relative;
    overflow: hidden;
    max-width: 64rem;
    margin: 0 auto;
    padding: 3rem;
    text-align: center;
    border-radius: 3rem;
    background: linear-gradient(to bottom right, rgba(197, 160, 89, 0.2), rgba(244, 220, 214, 0.1), rgba(245, 238, 228, 0.2));
}
.final-cta-rings { position: absolute; inset: 0; opacity: 0.1; pointer-events: none; }
.ring { position: absolute; border: 1px solid var(--gold); border-radius: 9999px; }
.ring-small { top: 2.5rem; left: 2.5rem; width: 8rem; height: 8rem; }
.ring-large { bottom: 2.5rem; right: 2.5rem; width: 16rem; height: 16rem; }
.final-cta-body { color: var(--dark-70); font-size: 1.125rem; max-width: 36rem; margin: 0 auto 2.5rem; }
.final-cta .btn { margin-bottom: 1.5rem; }
.final-cta-note {
    font-size: 0.625rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    color: var(--gold);
    font-weight: 700;
}

/* ---------- Footer ---------- */

.footer { background: var(--dark); color: rgba(255, 255, 255, 0.8); padding: 5rem 0; }
.footer-grid { display: grid; grid-template-columns: 1fr; gap: 3rem; margin-bottom: 4rem; }
.footer-brand { display: flex; flex-direction: column; gap: 1.5rem; }
.footer-about { font-size: 0.875rem; line-height: 1.7; font-weight: 300; }
.footer-socials { display: flex; gap: 1rem; }
.social-link {
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 9999px;
    border: 1px solid rgba(255, 255, 255, 0.1);
    display: flex;
    align-items: center;
    justify-content: center;
    transition: all 0.3s ease;
}
.social-link:hover { background: var(--gold); border-color: var(--gold); }
.footer-heading { color: #fff; font-size: 1.125rem; margin-bottom: 1.5rem; }
.footer-list { display: flex; flex-direction: column; gap: 1rem; font-size: 0.875rem; }
.footer-link { transition: color 0.3s ease; }
.footer-link:hover { color: var(--gold); }
.contact-item { display: flex; align-items: flex-start; gap: 0.75rem; }
.footer-newsletter-body { font-size: 0.875rem; margin-bottom: 1rem; }
.newsletter { display: flex; }
.newsletter-input {
    width: 100%;
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 0.75rem 0 0 0.75rem;
    padding: 0.5rem 1rem;
    color: #fff;
    font-size: 0.875rem;
}
.newsletter-input:focus { outline: none; border-color: var(--gold); }
.newsletter-button {
    background: var(--gold);
    color: #fff;
    border: 0;
    padding: 0.5rem 1rem;
    border-radius: 0 0.75rem 0.75rem 0;
    cursor: pointer;
}
.footer-bottom {
    padding-top: 2rem;
    border-top: 1px solid rgba(255, 255, 255, 0.05);
    display: flex;
    flex-direction: column;
    justify-content: space-between;
    align-items: center;
    gap: 1rem;
    font-size: 0.625rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
}
.footer-legal { display: flex; gap: 1.5rem; }

/* ---------- Floating controls ---------- */

.whatsapp-button {
    position: fixed;
    bottom: 2rem;
    right: 2rem;
    z-index: 50;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
    border-radius: 9999px;
    background: #25d366;
    color: #fff;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    animation: pop-in 0.4s ease-out both;
    transition: transform 0.3s ease;
}
.whatsapp-button:hover { transform: scale(1.1); }
.whatsapp-button:active { transform: scale(0.9); }
@keyframes pop-in {
    from { opacity: 0; transform: scale(0); }
    to { opacity: 1; transform: scale(1); }
}
.whatsapp-label {
    max-width: 0;
    overflow: hidden;
    white-space: nowrap;
    font-size: 0.875rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    transition: all 0.5s ease;
}
.whatsapp-button:hover .whatsapp-label { max-width: 20rem; margin-left: 0.5rem; }

.sticky-cta {
    position: fixed;
    bottom: 0;
    left: 0;
    width: 100%;
    padding: 1rem;
    z-index: 40;
    background: rgba(255, 255, 255, 0.8);
    backdrop-filter: blur(12px);
    border-top: 1px solid var(--beige);
}

/* ---------- Breakpoints ---------- */

@media (min-width: 640px) {
    .hero-actions { flex-direction: row; }
    .hero-actions .btn { width: auto; }
}

@media (min-width: 768px) {
    .nav-links { display: flex; }
    .nav-toggle, .mobile-panel, .sticky-cta { display: none; }
    .hero-title { font-size: 6rem; }
    .hero-subtitle { font-size: 1.25rem; }
    .hero-badges { gap: 3rem; }
    .section-title-lg { font-size: 3rem; }
    .section-title-xl { font-size: 3.75rem; }
    .features-grid, .footer-grid { grid-template-columns: repeat(2, 1fr); }
    .pricing-grid, .reviews-grid { grid-template-columns: repeat(3, 1fr); }
    .gallery-header { flex-direction: row; align-items: flex-end; }
    .gallery-columns { columns: 2; }
    .final-cta-panel { padding: 6rem; }
    .footer-bottom { flex-direction: row; }
}

@media (min-width: 1024px) {
    .experience-grid { grid-template-columns: repeat(2, 1fr); }
    .features-grid, .footer-grid { grid-template-columns: repeat(4, 1fr); }
    .gallery-columns { columns: 3; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_zoom_loops_for_fifteen_seconds() {
        assert!(PAGE_CSS.contains("animation: hero-zoom 15s var(--ease-out-soft) infinite alternate;"));
        assert!(PAGE_CSS.contains("--ease-out-soft: cubic-bezier(0.33, 1, 0.68, 1);"));
    }

    #[test]
    fn mobile_only_controls_hide_from_md_up() {
        let md = PAGE_CSS
            .split("@media (min-width: 768px)")
            .nth(1)
            .expect("md breakpoint");
        assert!(md.contains(".nav-toggle, .mobile-panel, .sticky-cta { display: none; }"));
        assert!(md.contains(".nav-links { display: flex; }"));
    }
}
