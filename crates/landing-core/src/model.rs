//! Domain Models
//!
//! Static display records for the landing page sections. Everything here is
//! defined at compile time and never mutated.

use serde::{Deserialize, Serialize};

/// Number of stars a testimonial rating is drawn against
pub const MAX_RATING: u8 = 5;

/// A customer testimonial shown in the carousel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    /// Unique identifier, also used as the render key
    pub id: u32,

    /// Customer full name
    pub name: &'static str,

    /// Job title
    pub role: &'static str,

    /// Employer
    pub company: &'static str,

    /// Avatar image URL
    pub avatar_url: &'static str,

    /// Quote body
    pub content: &'static str,

    /// Star rating (0 to `MAX_RATING`)
    pub rating: u8,
}

impl Testimonial {
    /// Initials used when the avatar image fails to load.
    ///
    /// First character of every space-separated word.
    pub fn initials(&self) -> String {
        self.name
            .split(' ')
            .filter_map(|word| word.chars().next())
            .collect()
    }

    /// Filled flag for each of the `MAX_RATING` stars
    pub fn stars(&self) -> impl Iterator<Item = bool> + '_ {
        (0..MAX_RATING).map(move |i| i < self.rating)
    }

    /// "Role, Company" byline
    pub fn byline(&self) -> String {
        format!("{}, {}", self.role, self.company)
    }
}

/// Icon shown on a feature card
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeatureIcon {
    LineChart,
    BarChart,
    PieChart,
    Settings,
    Zap,
    Refresh,
    Database,
    Shield,
}

/// A product feature card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: FeatureIcon,
}

/// Billing cadence selected on the pricing tabs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Annually,
}

impl BillingPeriod {
    pub const ALL: [Self; 2] = [Self::Monthly, Self::Annually];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Annually => "Annually",
        }
    }
}

/// Displayed price for each billing period
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Price {
    pub monthly: &'static str,
    pub annually: &'static str,
}

/// A line on a pricing card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanFeature {
    pub text: &'static str,
    pub included: bool,
}

/// A pricing plan
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    pub description: &'static str,
    pub price: Price,
    pub features: &'static [PlanFeature],

    /// Rendered with the "Most Popular" badge
    pub highlighted: bool,

    /// Call-to-action button label
    pub cta: &'static str,
}

impl PricingTier {
    pub const fn price_for(&self, period: BillingPeriod) -> &'static str {
        match period {
            BillingPeriod::Monthly => self.price.monthly,
            BillingPeriod::Annually => self.price.annually,
        }
    }
}

/// A question in the FAQ accordion
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

/// In-page navigation link
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

/// Headline number with a caption
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// A titled column of footer links
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(rating: u8) -> Testimonial {
        Testimonial {
            id: 1,
            name: "Sarah Johnson",
            role: "Marketing Director",
            company: "TechGrowth Inc.",
            avatar_url: "https://example.com/a.jpg",
            content: "Great.",
            rating,
        }
    }

    #[test]
    fn test_initials() {
        assert_eq!(sample(5).initials(), "SJ");
    }

    #[test]
    fn test_stars() {
        let stars: Vec<bool> = sample(4).stars().collect();
        assert_eq!(stars, vec![true, true, true, true, false]);
        assert!(sample(0).stars().all(|filled| !filled));
    }

    #[test]
    fn test_byline() {
        assert_eq!(sample(5).byline(), "Marketing Director, TechGrowth Inc.");
    }

    #[test]
    fn test_billing_period_serde() {
        let json = serde_json::to_string(&BillingPeriod::Annually).unwrap();
        assert_eq!(json, "\"annually\"");
        assert_eq!(BillingPeriod::default(), BillingPeriod::Monthly);
    }

    #[test]
    fn test_price_for_period() {
        let tier = PricingTier {
            name: "Starter",
            description: "",
            price: Price { monthly: "$29", annually: "$290" },
            features: &[],
            highlighted: false,
            cta: "Start Free Trial",
        };
        assert_eq!(tier.price_for(BillingPeriod::Monthly), "$29");
        assert_eq!(tier.price_for(BillingPeriod::Annually), "$290");
    }
}
