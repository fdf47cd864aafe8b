// Landing page sections, top to bottom
// Bright Beauty Zone (c)2026

mod experience;
mod final_cta;
mod footer;
mod gallery;
mod hero;
mod navbar;
mod packages;
mod sticky_cta;
mod testimonials;
mod whatsapp;
mod why_us;

pub use experience::Experience;
pub use final_cta::FinalCta;
pub use footer::Footer;
pub use gallery::Gallery;
pub use hero::Hero;
pub use navbar::{MobilePanel, Navbar};
pub use packages::Packages;
pub use sticky_cta::StickyCta;
pub use testimonials::Testimonials;
pub use whatsapp::WhatsAppButton;
pub use why_us::WhyUs;
