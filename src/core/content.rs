//! Static page content
//!
//! Literal descriptor tables for both skins. Nothing here is mutated or
//! validated; identity is array position.

use super::motion::stagger;

/// Placeholder substituted for missing or failed images.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Element ids of the fixed page sections, targets of `#` anchors.
pub const ABOUT_ID: &str = "about";
pub const CONTACT_ID: &str = "contact";
pub const PRIVACY_ID: &str = "privacy";

/// Icons drawn inline by the UI layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    MapPin,
    Bell,
    BarChart,
    Award,
    Shield,
    Clock,
    ChevronRight,
    Menu,
    Close,
    Facebook,
    Pinterest,
    X,
    LinkedIn,
}

/// Palette role used to tint a feature icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Gold,
    Tech,
    Mint,
}

impl Accent {
    /// CSS variable carrying the accent color.
    pub fn var(self) -> &'static str {
        match self {
            Accent::Primary => "var(--brand-primary)",
            Accent::Gold => "var(--brand-gold)",
            Accent::Tech => "var(--brand-tech)",
            Accent::Mint => "var(--brand-mint)",
        }
    }
}

/// Same-page navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub rating: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub image: Option<&'static str>,
    pub alt: &'static str,
}

impl Step {
    pub fn image_or_placeholder(&self) -> &'static str {
        self.image.unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn label(&self) -> String {
        format!("Step {}", self.number)
    }
}

/// Small trust marker under the hero copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Badge {
    pub icon: IconKind,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: IconKind,
    pub label: &'static str,
    pub href: &'static str,
}

/// Header copy for a steps section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepsSection {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub steps: &'static [Step],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Images {
    pub logo: &'static str,
    pub mockup: &'static str,
    pub crisis: &'static str,
    pub mission: &'static str,
}

/// Everything a skin renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageContent {
    pub brand: &'static str,
    pub navigation: &'static [NavItem],
    pub header_cta: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub hero_primary_cta: &'static str,
    pub hero_secondary_cta: &'static str,
    pub badges: &'static [Badge],
    pub ai_pill: &'static str,
    pub donors: StepsSection,
    pub hospitals: StepsSection,
    pub crisis_title: &'static str,
    pub crisis_paragraphs: &'static [&'static str],
    pub crisis_closing: &'static str,
    pub mission_title: &'static str,
    pub mission_paragraphs: &'static [&'static str],
    pub features: &'static [Feature],
    pub testimonials_title: &'static str,
    pub testimonials: &'static [Testimonial],
    pub cta_title: &'static str,
    pub cta_body: &'static str,
    pub cta_placeholder: &'static str,
    pub cta_button: &'static str,
    pub cta_legal: &'static str,
    pub cta_legal_link: &'static str,
    pub footer_links: &'static [NavItem],
    pub social: &'static [SocialLink],
    pub images: Images,
}

impl PageContent {
    pub fn donor_steps(&self) -> &'static [Step] {
        self.donors.steps
    }

    pub fn hospital_steps(&self) -> &'static [Step] {
        self.hospitals.steps
    }

    /// The mission image zooms in after every feature card has started.
    pub fn mission_image_delay(&self) -> f64 {
        stagger(self.features.len(), 0.1)
    }

    /// Ids of every section the page renders for this content.
    pub fn section_ids(&self) -> [&'static str; 5] {
        [self.donors.id, self.hospitals.id, ABOUT_ID, CONTACT_ID, PRIVACY_ID]
    }

    /// Features shown left and right of the mission image on wide screens.
    pub fn feature_columns(&self) -> (&'static [Feature], &'static [Feature]) {
        self.features.split_at(self.features.len().div_ceil(2))
    }
}

const NAVIGATION: &[NavItem] = &[
    NavItem { label: "Home", href: "#" },
    NavItem { label: "About", href: "#about" },
    NavItem { label: "Contact", href: "#contact" },
    NavItem { label: "Privacy policy", href: "#privacy" },
    NavItem { label: "How it works", href: "#how-it-works" },
];

const FOOTER_LINKS: &[NavItem] = &[
    NavItem { label: "Home", href: "#" },
    NavItem { label: "About us", href: "#about" },
    NavItem { label: "Contact us", href: "#contact" },
    NavItem { label: "How it works", href: "#how-it-works" },
    NavItem { label: "Help Center", href: "#contact" },
];

const SOCIAL: &[SocialLink] = &[
    SocialLink { icon: IconKind::Facebook, label: "Facebook", href: "#" },
    SocialLink { icon: IconKind::Pinterest, label: "Pinterest", href: "#" },
    SocialLink { icon: IconKind::X, label: "X", href: "#" },
    SocialLink { icon: IconKind::LinkedIn, label: "LinkedIn", href: "#" },
];

const BADGES: &[Badge] = &[
    Badge { icon: IconKind::Shield, label: "Verified & Secure" },
    Badge { icon: IconKind::Clock, label: "Real-time Matching" },
    Badge { icon: IconKind::MapPin, label: "Nationwide Coverage" },
];

const CRIMSON_FEATURES: &[Feature] = &[
    Feature {
        icon: IconKind::MapPin,
        title: "Real-time blood availability",
        description: "Hospitals and users can instantly view available blood types and stock levels from nearby blood banks.",
        accent: Accent::Primary,
    },
    Feature {
        icon: IconKind::Bell,
        title: "Smart donor alerts",
        description: "Sends timely notifications to donors when their blood type is urgently needed in their area.",
        accent: Accent::Gold,
    },
    Feature {
        icon: IconKind::BarChart,
        title: "Predictive demand tracking",
        description: "Predicts blood shortages using health data, local trends, and hospital reports, so supply meets demand before emergencies hit.",
        accent: Accent::Tech,
    },
    Feature {
        icon: IconKind::Award,
        title: "Lifepoints for recurring donations",
        description: "Tracks donation history and rewards frequent donors with health screenings, badges, and referral perks.",
        accent: Accent::Mint,
    },
];

const CRIMSON_TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "BloodChain helped us find blood for my sister's surgery in under 10 minutes. This platform is a blessing.",
        author: "Chinwe, Lagos",
        rating: 5,
    },
    Testimonial {
        quote: "I always wanted to donate blood but didn't know where to go. Now I get alerts when my blood type is needed.",
        author: "Ahmed, Ibadan",
        rating: 5,
    },
    Testimonial {
        quote: "As a nurse, this is the tool I've been waiting for. It will save countless lives.",
        author: "Nurse Bisi, UCH Hospital",
        rating: 5,
    },
];

const CRIMSON_DONOR_STEPS: &[Step] = &[
    Step {
        number: 1,
        title: "Sign Up & Get Verified",
        description: "Register in seconds. We'll match you to nearby verified blood banks and hospitals.",
        image: Some("/images/healthcare-worker-female.jpg"),
        alt: "Healthcare worker assisting a donor registration",
    },
    Step {
        number: 2,
        title: "Donate Blood",
        description: "Receive timely alerts when your blood type is needed. Donate at a convenient location.",
        image: Some("/images/blood-donation.jpg"),
        alt: "Blood donation process",
    },
    Step {
        number: 3,
        title: "Earn LifePoints & Redeem",
        description: "Track your donation history, earn LifePoints, and redeem them for health screenings or perks.",
        image: Some("/images/heart-hands-cupping.jpg"),
        alt: "Hands holding a heart, symbolizing care and reward",
    },
];

const CRIMSON_HOSPITAL_STEPS: &[Step] = &[
    Step {
        number: 1,
        title: "Log In & Search",
        description: "Access real-time blood inventory. Search for specific blood types and quantities needed.",
        image: Some("/images/doctor-consultation.jpg"),
        alt: "Doctors consulting, symbolizing hospital operations",
    },
    Step {
        number: 2,
        title: "Choose Delivery Option",
        description: "Select standard or emergency delivery based on urgency. Our system optimizes dispatch.",
        image: Some("/images/mockup-clean.png"),
        alt: "Mobile app showing delivery options",
    },
    Step {
        number: 3,
        title: "Blood Delivered by Certified Riders",
        description: "Ensure safe and timely delivery of blood units by our network of certified logistics partners.",
        image: Some("/images/blood-donation.jpg"),
        alt: "Certified rider delivering blood",
    },
];

pub static CRIMSON_CONTENT: PageContent = PageContent {
    brand: "BloodChain",
    navigation: NAVIGATION,
    header_cta: "Sign Up",
    hero_title: "Connecting Lives With Every Drop",
    hero_subtitle: "BloodChain connects blood donors, hospitals, and banks - fast, smart, and in real-time.",
    hero_primary_cta: "Become A Donor",
    hero_secondary_cta: "Sign Up as Hospital",
    badges: BADGES,
    ai_pill: "Smart matching & dispatch powered by AI",
    donors: StepsSection {
        id: "how-it-works",
        title: "How BloodChain Works for Donors",
        subtitle: "Become a life-saver. Here's how you can make a difference.",
        steps: CRIMSON_DONOR_STEPS,
    },
    hospitals: StepsSection {
        id: "how-it-works-hospitals",
        title: "How BloodChain Works for Hospitals",
        subtitle: "Streamline your blood supply management and save critical time.",
        steps: CRIMSON_HOSPITAL_STEPS,
    },
    crisis_title: "The Blood Crisis in Nigeria",
    crisis_paragraphs: &[
        "Every year, Nigeria needs over 1.8 million pints of blood, yet less than 10% comes from voluntary donors. This severe shortage puts thousands of lives at risk, from women experiencing childbirth complications to accident victims and patients awaiting urgent surgery.",
        "Many of these deaths are preventable. The real issue isn't just the lack of blood, it's the lack of access, connection, and timely response.",
    ],
    crisis_closing: "That's where BloodChain comes in.",
    mission_title: "Our Mission",
    mission_paragraphs: &[
        "We're building a smart, connected blood donation ecosystem, powered by AI and driven by community.",
        "BloodChain connects verified donors, blood banks, and hospitals in real time, ensuring that safe blood is available exactly when and where it's needed.",
    ],
    features: CRIMSON_FEATURES,
    testimonials_title: "What People Are Saying",
    testimonials: CRIMSON_TESTIMONIALS,
    cta_title: "Ready to Save Lives? Let's Start.",
    cta_body: "Sign up now to become a blood hero in your community. Whether you're a donor, a hospital, or a blood bank we need you.",
    cta_placeholder: "Enter your email",
    cta_button: "Register As a Donor",
    cta_legal: "By clicking Sign Up you're confirming that you agree with our ",
    cta_legal_link: "Terms and Conditions",
    footer_links: FOOTER_LINKS,
    social: SOCIAL,
    images: Images {
        logo: "/images/bloodchain-logo.png",
        mockup: "/images/mockup.png",
        crisis: "/images/blood-donation.jpg",
        mission: "/images/heart-hands-holding.jpg",
    },
};

const EMBER_FEATURES: &[Feature] = &[
    Feature {
        icon: IconKind::MapPin,
        title: "Live stock map",
        description: "See which nearby blood banks hold the type you need, updated the moment stock changes.",
        accent: Accent::Primary,
    },
    Feature {
        icon: IconKind::Bell,
        title: "Urgent-need alerts",
        description: "Donors hear about shortages of their blood type in their area before they become emergencies.",
        accent: Accent::Gold,
    },
    Feature {
        icon: IconKind::BarChart,
        title: "Shortage forecasting",
        description: "Local trends and hospital reports feed forecasts so supply is moved ahead of demand.",
        accent: Accent::Tech,
    },
    Feature {
        icon: IconKind::Award,
        title: "Rewards for regulars",
        description: "Repeat donors collect LifePoints toward health screenings, badges and referral perks.",
        accent: Accent::Mint,
    },
];

const EMBER_TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "We found a matching donor for my father within the hour. I didn't know that was possible here.",
        author: "Tunde, Abuja",
        rating: 5,
    },
    Testimonial {
        quote: "The alerts tell me exactly where to go. Donating finally fits into my week.",
        author: "Amaka, Enugu",
        rating: 5,
    },
    Testimonial {
        quote: "Our theatre no longer waits on phone calls to find blood. That time matters.",
        author: "Dr. Femi, LUTH",
        rating: 5,
    },
];

const EMBER_DONOR_STEPS: &[Step] = &[
    Step {
        number: 1,
        title: "Create Your Donor Profile",
        description: "Tell us your blood type and location. Verification takes minutes, not days.",
        image: Some("/images/ember/donor-signup.jpg"),
        alt: "Donor filling in a profile on a phone",
    },
    Step {
        number: 2,
        title: "Answer the Call",
        description: "Get notified when your type is needed nearby and book a slot that suits you.",
        image: Some("/images/ember/donation-chair.jpg"),
        alt: "Donor giving blood at a clinic",
    },
    Step {
        number: 3,
        title: "Collect LifePoints",
        description: "Every donation adds LifePoints you can trade for screenings and perks.",
        image: None,
        alt: "LifePoints reward summary",
    },
];

const EMBER_HOSPITAL_STEPS: &[Step] = &[
    Step {
        number: 1,
        title: "Check Live Inventory",
        description: "Search nearby stock by blood type and quantity from one dashboard.",
        image: Some("/images/ember/inventory.jpg"),
        alt: "Hospital staff checking blood inventory",
    },
    Step {
        number: 2,
        title: "Pick Your Urgency",
        description: "Choose standard or emergency delivery. Dispatch is routed automatically.",
        image: Some("/images/ember/dispatch.png"),
        alt: "App screen with delivery urgency options",
    },
    Step {
        number: 3,
        title: "Receive Certified Delivery",
        description: "Trained riders bring blood units to your ward with cold-chain tracking.",
        image: Some("/images/ember/rider.jpg"),
        alt: "Rider delivering a blood cooler",
    },
];

pub static EMBER_CONTENT: PageContent = PageContent {
    brand: "BloodChain",
    navigation: NAVIGATION,
    header_cta: "Join Now",
    hero_title: "Every Drop Finds Its Way",
    hero_subtitle: "Donors, hospitals and blood banks on one live network, matched in minutes instead of hours.",
    hero_primary_cta: "Start Donating",
    hero_secondary_cta: "For Hospitals",
    badges: BADGES,
    ai_pill: "AI-assisted matching and dispatch",
    donors: StepsSection {
        id: "how-it-works",
        title: "Giving Blood, Simplified",
        subtitle: "Three steps from sign-up to saving a life.",
        steps: EMBER_DONOR_STEPS,
    },
    hospitals: StepsSection {
        id: "how-it-works-hospitals",
        title: "Built for Hospital Teams",
        subtitle: "Less time searching, more time treating.",
        steps: EMBER_HOSPITAL_STEPS,
    },
    crisis_title: "Why It Matters",
    crisis_paragraphs: &[
        "Nigeria needs more than 1.8 million pints of blood each year, and under 10% of it comes from voluntary donors. Mothers in labour, accident victims and surgical patients all wait on that gap.",
        "Most of those losses can be prevented. What is missing is not only blood but the connection that gets it where it is needed in time.",
    ],
    crisis_closing: "BloodChain closes that gap.",
    mission_title: "What We're Building",
    mission_paragraphs: &[
        "A connected donation network, powered by AI and run by the community it serves.",
        "Verified donors, blood banks and hospitals share one live view, so safe blood is there when and where it's needed.",
    ],
    features: EMBER_FEATURES,
    testimonials_title: "Voices From the Network",
    testimonials: EMBER_TESTIMONIALS,
    cta_title: "Be Someone's Lifeline.",
    cta_body: "Join the waitlist and be first in line when BloodChain launches in your city.",
    cta_placeholder: "you@example.com",
    cta_button: "Join the Waitlist",
    cta_legal: "By joining you agree to our ",
    cta_legal_link: "Terms and Conditions",
    footer_links: FOOTER_LINKS,
    social: SOCIAL,
    images: Images {
        logo: "/images/ember/logo.png",
        mockup: "/images/ember/mockup.png",
        crisis: "/images/ember/crisis.jpg",
        mission: "/images/ember/mission.jpg",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_anchors_are_same_page() {
        for item in CRIMSON_CONTENT.navigation.iter().chain(CRIMSON_CONTENT.footer_links) {
            assert!(item.href.starts_with('#'), "{} is not an anchor", item.label);
        }
    }

    #[test]
    fn test_every_anchor_has_a_target() {
        for content in [&CRIMSON_CONTENT, &EMBER_CONTENT] {
            let ids = content.section_ids();
            for item in content.navigation.iter().chain(content.footer_links) {
                let target = &item.href[1..];
                assert!(
                    target.is_empty() || ids.contains(&target),
                    "{} points at missing section {}",
                    item.label,
                    item.href
                );
            }
        }
    }

    #[test]
    fn test_mission_image_waits_for_features() {
        assert_eq!(CRIMSON_CONTENT.features.len(), 4);
        assert!((CRIMSON_CONTENT.mission_image_delay() - 0.4).abs() < 1e-9);
        let last_card = stagger(CRIMSON_CONTENT.features.len() - 1, 0.1);
        assert!(CRIMSON_CONTENT.mission_image_delay() > last_card);
    }

    #[test]
    fn test_steps_are_numbered_in_order() {
        for content in [&CRIMSON_CONTENT, &EMBER_CONTENT] {
            for steps in [content.donor_steps(), content.hospital_steps()] {
                let numbers: Vec<u8> = steps.iter().map(|s| s.number).collect();
                assert_eq!(numbers, vec![1, 2, 3]);
            }
        }
    }

    #[test]
    fn test_missing_step_image_uses_placeholder() {
        let step = EMBER_DONOR_STEPS[2];
        assert_eq!(step.image_or_placeholder(), PLACEHOLDER_IMAGE);
        assert_eq!(
            CRIMSON_DONOR_STEPS[0].image_or_placeholder(),
            "/images/healthcare-worker-female.jpg"
        );
    }

    #[test]
    fn test_step_label() {
        assert_eq!(CRIMSON_HOSPITAL_STEPS[1].label(), "Step 2");
    }

    #[test]
    fn test_feature_columns_split_evenly() {
        let (left, right) = CRIMSON_CONTENT.feature_columns();
        assert_eq!(left.len(), 2);
        assert_eq!(right.len(), 2);
        assert_eq!(left[0].title, "Real-time blood availability");
        assert_eq!(right[0].title, "Predictive demand tracking");
    }

    #[test]
    fn test_testimonial_ratings_in_range() {
        for t in CRIMSON_CONTENT.testimonials.iter().chain(EMBER_CONTENT.testimonials) {
            assert!((1..=5).contains(&t.rating));
        }
    }

    #[test]
    fn test_how_it_works_anchor_exists() {
        assert!(NAVIGATION.iter().any(|n| n.href == "#how-it-works"));
        assert_eq!(CRIMSON_CONTENT.donors.id, "how-it-works");
    }
}
