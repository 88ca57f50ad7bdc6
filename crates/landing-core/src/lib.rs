//! # landing-core
//!
//! Host-independent state machines and static content for the FlowVision
//! landing site. Nothing in here touches the DOM; the Leptos frontend binds
//! browser events to these types.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Testimonials carousel                    │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────┐  │
//! │  │   Swipe     │  │ Pagination  │  │   Autoplay<T>       │  │
//! │  │   Tracker   │──│ (Carousel   │──│   (IntervalTimer)   │  │
//! │  │             │  │   State)    │  │                     │  │
//! │  └─────────────┘  └─────────────┘  └─────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `IntervalTimer` trait lets the browser interval and the deterministic
//! `VirtualInterval` drive the same autoplay logic.

pub mod accordion;
pub mod carousel;
pub mod config;
pub mod content;
pub mod error;
pub mod forms;
pub mod gesture;
pub mod model;
pub mod nav;
pub mod reveal;
pub mod theme;

pub use accordion::Accordion;
pub use carousel::{CarouselInput, CarouselState, Effect, ViewMode};
pub use carousel::autoplay::{Autoplay, IntervalTimer, VirtualInterval};
pub use config::SiteConfig;
pub use error::{LandingError, Result};
pub use forms::EmailCapture;
pub use gesture::{SwipeDirection, SwipeTracker};
pub use model::{BillingPeriod, Feature, FaqItem, NavItem, PricingTier, Testimonial};
pub use nav::NavMenu;
pub use reveal::{Motion, Reveal, RevealOptions, RevealVariant};
pub use theme::Theme;
