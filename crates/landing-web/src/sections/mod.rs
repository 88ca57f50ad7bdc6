//! Landing page sections, top to bottom

mod closing_cta;
mod faq;
mod features;
mod footer;
mod header;
mod hero;
mod pricing;
mod testimonials;

pub use closing_cta::ClosingCta;
pub use faq::Faq;
pub use features::Features;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use pricing::Pricing;
pub use testimonials::Testimonials;
