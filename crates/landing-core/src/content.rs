//! Static Site Content
//!
//! Every piece of copy, every list and every image URL the landing page shows.

use crate::model::{
    FaqItem, Feature, FeatureIcon, FooterColumn, NavItem, PlanFeature, Price, PricingTier, Stat,
    Testimonial,
};

pub const BRAND: &str = "FlowVision";
pub const SUPPORT_EMAIL: &str = "support@flowvision.com";

/// Fragment targeted by every "Get Started" link
pub const GET_STARTED_ANCHOR: &str = "#get-started";

const PEXELS_PARAMS: &str = "?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";

pub const DASHBOARD_IMAGE: &str = "https://images.pexels.com/photos/7688336/pexels-photo-7688336.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";
pub const VISUALIZATION_IMAGE: &str = "https://images.pexels.com/photos/7688454/pexels-photo-7688454.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";
pub const TRUSTED_BY_IMAGE: &str = "https://images.pexels.com/photos/13845302/pexels-photo-13845302.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";
pub const PAYMENT_METHODS_IMAGE: &str = "https://images.pexels.com/photos/5698697/pexels-photo-5698697.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";

pub const NAVIGATION: &[NavItem] = &[
    NavItem { label: "Features", href: "#features" },
    NavItem { label: "Testimonials", href: "#testimonials" },
    NavItem { label: "Pricing", href: "#pricing" },
    NavItem { label: "FAQ", href: "#faq" },
];

pub const HERO_HIGHLIGHTS: &[&str] = &[
    "30-day free trial",
    "No credit card required",
    "Cancel anytime",
];

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Real-time Analytics",
        description: "Track your business metrics in real-time to make quick, data-driven decisions.",
        icon: FeatureIcon::LineChart,
    },
    Feature {
        title: "Comprehensive Reports",
        description: "Generate detailed reports with customizable metrics and visualization options.",
        icon: FeatureIcon::BarChart,
    },
    Feature {
        title: "User Behavior Insights",
        description: "Understand how users interact with your product through heat maps and user journeys.",
        icon: FeatureIcon::PieChart,
    },
    Feature {
        title: "Advanced Segmentation",
        description: "Segment your audience based on demographics, behavior, and custom attributes.",
        icon: FeatureIcon::Settings,
    },
    Feature {
        title: "Performance Optimization",
        description: "Identify bottlenecks and optimize your application performance with automated suggestions.",
        icon: FeatureIcon::Zap,
    },
    Feature {
        title: "Automated Workflows",
        description: "Create custom workflows that trigger based on specific events or conditions.",
        icon: FeatureIcon::Refresh,
    },
    Feature {
        title: "Data Integration",
        description: "Connect with over 100+ tools and platforms to consolidate your data in one place.",
        icon: FeatureIcon::Database,
    },
    Feature {
        title: "Enterprise Security",
        description: "Keep your data secure with enterprise-grade encryption and compliance controls.",
        icon: FeatureIcon::Shield,
    },
];

pub const WHY_CHOOSE_US: &[&str] = &[
    "Interactive data visualization tools",
    "Customizable dashboard layouts",
    "Export reports in multiple formats",
    "Share insights with your team",
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Sarah Johnson",
        role: "Marketing Director",
        company: "TechGrowth Inc.",
        avatar_url: "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        content: "FlowVision has completely transformed our marketing analytics. We've seen a 40% increase in conversion rates since implementing their platform. The real-time dashboard has become an essential part of our daily operations.",
        rating: 5,
    },
    Testimonial {
        id: 2,
        name: "Michael Chen",
        role: "CTO",
        company: "InnovateSphere",
        avatar_url: "https://images.pexels.com/photos/614810/pexels-photo-614810.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        content: "As a tech leader, I'm impressed by FlowVision's architecture and performance. The platform handles our enterprise-scale data with ease, and the insights we've gained have directly contributed to our product roadmap.",
        rating: 5,
    },
    Testimonial {
        id: 3,
        name: "Emily Rodriguez",
        role: "E-commerce Manager",
        company: "StyleTrend",
        avatar_url: "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        content: "The customer segmentation tools in FlowVision helped us identify a completely new target audience. We've tailored our campaigns to this segment and seen remarkable engagement. The ROI has been exceptional.",
        rating: 4,
    },
    Testimonial {
        id: 4,
        name: "David Patel",
        role: "Growth Lead",
        company: "SaaSMaster",
        avatar_url: "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        content: "FlowVision provided exactly what we needed to scale our user acquisition strategy. The integration was seamless, and their support team was exceptional throughout the process. Highly recommended!",
        rating: 5,
    },
    Testimonial {
        id: 5,
        name: "Lisa Nakamura",
        role: "Analytics Manager",
        company: "DataDriven Co.",
        avatar_url: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        content: "I've used many analytics platforms, but FlowVision stands out with its intuitive interface and powerful capabilities. Our team was up and running quickly, and we discovered insights we had missed for years.",
        rating: 5,
    },
];

pub const STATS: &[Stat] = &[
    Stat { value: "500+", label: "Happy Customers" },
    Stat { value: "99.9%", label: "Uptime" },
    Stat { value: "35%", label: "Avg. ROI Increase" },
    Stat { value: "24/7", label: "Customer Support" },
];

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Starter",
        description: "Perfect for small businesses and startups",
        price: Price { monthly: "$29", annually: "$290" },
        features: &[
            PlanFeature { text: "Up to 5,000 events/mo", included: true },
            PlanFeature { text: "Basic analytics dashboard", included: true },
            PlanFeature { text: "3 user seats", included: true },
            PlanFeature { text: "Email support", included: true },
            PlanFeature { text: "Custom reports", included: false },
            PlanFeature { text: "Advanced segmentation", included: false },
            PlanFeature { text: "Data retention (30 days)", included: true },
            PlanFeature { text: "API access", included: false },
        ],
        highlighted: false,
        cta: "Start Free Trial",
    },
    PricingTier {
        name: "Professional",
        description: "For growing teams and businesses",
        price: Price { monthly: "$79", annually: "$790" },
        features: &[
            PlanFeature { text: "Up to 100,000 events/mo", included: true },
            PlanFeature { text: "Advanced analytics dashboard", included: true },
            PlanFeature { text: "10 user seats", included: true },
            PlanFeature { text: "Priority email & chat support", included: true },
            PlanFeature { text: "Custom reports", included: true },
            PlanFeature { text: "Advanced segmentation", included: true },
            PlanFeature { text: "Data retention (90 days)", included: true },
            PlanFeature { text: "API access", included: true },
        ],
        highlighted: true,
        cta: "Start Free Trial",
    },
    PricingTier {
        name: "Enterprise",
        description: "For large organizations with complex needs",
        price: Price { monthly: "$299", annually: "$2,990" },
        features: &[
            PlanFeature { text: "Unlimited events", included: true },
            PlanFeature { text: "Enterprise dashboard & controls", included: true },
            PlanFeature { text: "Unlimited user seats", included: true },
            PlanFeature { text: "24/7 phone, email & chat support", included: true },
            PlanFeature { text: "Custom reports", included: true },
            PlanFeature { text: "Advanced segmentation", included: true },
            PlanFeature { text: "Data retention (12 months)", included: true },
            PlanFeature { text: "API access & dedicated support", included: true },
        ],
        highlighted: false,
        cta: "Contact Sales",
    },
];

pub const CORE_PLAN_FEATURES: &[&str] = &[
    "Unlimited projects",
    "Free updates",
    "Data export",
    "SSL encryption",
    "GDPR compliant",
];

pub const FAQS: &[FaqItem] = &[
    FaqItem {
        question: "How does the 30-day free trial work?",
        answer: "Our 30-day free trial gives you full access to all features of your selected plan with no credit card required. You can explore the platform, set up your dashboards, and evaluate if FlowVision is right for your business. At the end of the trial, you can choose to subscribe or your account will automatically downgrade to a limited free version.",
    },
    FaqItem {
        question: "Can I change plans later?",
        answer: "Yes, you can upgrade or downgrade your plan at any time. When upgrading, the new features will be immediately available and we'll prorate your billing. When downgrading, the change will take effect at the start of your next billing cycle.",
    },
    FaqItem {
        question: "What happens to my data if I cancel?",
        answer: "If you cancel your subscription, you'll have 30 days to export your data. After that period, we'll permanently delete all your data from our servers in accordance with our data retention policy and privacy regulations.",
    },
    FaqItem {
        question: "Is there a limit to how much data I can track?",
        answer: "Each plan has specific limits on the number of events you can track monthly. The Starter plan includes up to 5,000 events/mo, Professional up to 100,000 events/mo, and Enterprise offers unlimited events. If you exceed your plan's limits, you'll have the option to upgrade or purchase additional capacity.",
    },
    FaqItem {
        question: "Do you offer custom solutions for enterprise needs?",
        answer: "Absolutely. Our Enterprise plan is highly customizable to meet the specific needs of large organizations. We offer dedicated account managers, custom integrations, on-premise deployment options, and tailored training sessions. Contact our sales team to discuss your requirements.",
    },
    FaqItem {
        question: "How secure is my data on FlowVision?",
        answer: "Security is our top priority. We implement industry-leading security measures including end-to-end encryption, regular security audits, and compliance with SOC 2, GDPR, and HIPAA regulations. All data is stored in secure, redundant data centers with 99.9% uptime guarantee.",
    },
    FaqItem {
        question: "Can I integrate FlowVision with my existing tools?",
        answer: "Yes, FlowVision integrates seamlessly with 100+ popular business tools including CRM systems, marketing platforms, e-commerce solutions, and more. We offer native integrations, a comprehensive API, and webhooks to ensure flexibility for your tech stack.",
    },
    FaqItem {
        question: "What kind of support do you provide?",
        answer: "Our support varies by plan: Starter includes email support with 24-hour response time, Professional adds priority email and chat support with 4-hour response time, and Enterprise offers 24/7 phone, email, and chat support with a dedicated account manager and 1-hour guaranteed response for critical issues.",
    },
];

pub const SOCIAL_LINKS: &[&str] = &["Twitter", "Instagram", "LinkedIn", "Facebook"];

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Product",
        links: &["Features", "Pricing", "Integrations", "Case Studies", "Documentation"],
    },
    FooterColumn {
        title: "Company",
        links: &["About Us", "Blog", "Careers", "Press", "Partners"],
    },
    FooterColumn {
        title: "Support",
        links: &["Help Center", "Contact Us", "Privacy Policy", "Terms of Service", "Status"],
    },
];

/// Pexels photo URL for a numeric photo id
pub fn pexels_photo(id: u32) -> String {
    format!("https://images.pexels.com/photos/{id}/pexels-photo-{id}.jpeg{PEXELS_PARAMS}")
}

/// Avatars stacked next to the "Trusted by 10,000+" line
pub fn social_proof_avatars() -> impl Iterator<Item = String> {
    (1..=3).map(|i| pexels_photo(1_000_000 + i))
}

/// Client logos under the closing call-to-action
pub fn client_logos() -> impl Iterator<Item = String> {
    (1..=6).map(|i| pexels_photo(5_000_000 + i))
}

/// Footer copyright line
pub fn copyright(year: i32) -> String {
    format!("© {year} {BRAND}. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::model::MAX_RATING;

    #[test]
    fn test_testimonial_ids_unique() {
        let ids: HashSet<u32> = TESTIMONIALS.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TESTIMONIALS.len());
        assert!(TESTIMONIALS.iter().all(|t| t.rating <= MAX_RATING));
    }

    #[test]
    fn test_single_highlighted_tier() {
        let highlighted: Vec<_> = PRICING_TIERS.iter().filter(|t| t.highlighted).collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].name, "Professional");
    }

    #[test]
    fn test_navigation_targets_are_anchors() {
        let hrefs: Vec<&str> = NAVIGATION.iter().map(|n| n.href).collect();
        assert_eq!(hrefs, vec!["#features", "#testimonials", "#pricing", "#faq"]);
    }

    #[test]
    fn test_pexels_photo() {
        assert_eq!(
            pexels_photo(1_000_001),
            "https://images.pexels.com/photos/1000001/pexels-photo-1000001.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"
        );
        assert_eq!(client_logos().count(), 6);
        assert_eq!(social_proof_avatars().count(), 3);
    }

    #[test]
    fn test_copyright() {
        assert_eq!(copyright(2026), "© 2026 FlowVision. All rights reserved.");
    }
}
