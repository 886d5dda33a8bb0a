//! Static site content: everything the carousels rotate through and the
//! grids render. The engine treats all of these as opaque slide types.

use crate::Route;

/// Landing splash background images.
pub const HERO_SLIDES: [&str; 3] = [
    "https://images.unsplash.com/photo-1549921296-3a976e7cde98?auto=format&fit=crop&w=1470&q=80",
    "https://images.unsplash.com/photo-1528747045269-390fe33c19d3?auto=format&fit=crop&w=1470&q=80",
    "https://images.unsplash.com/photo-1543269865-cbf427effbad?auto=format&fit=crop&w=1470&q=80",
];

/// One card in the homepage feature carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub desc: &'static str,
    pub image: &'static str,
    pub accent: &'static str,
    pub destination: Route,
}

pub fn feature_cards() -> Vec<FeatureCard> {
    vec![
        FeatureCard {
            title: "Expert Lawyers",
            desc: "Connect with top-rated lawyers across criminal, civil, family, corporate \
                   and more. Get trusted legal advice and professional representation \
                   tailored to your needs.",
            image: "https://images.unsplash.com/photo-1589829545856-d10d557cf95f?auto=format&fit=crop&w=1050&q=80",
            accent: "#3b82f6",
            destination: Route::Lawyers,
        },
        FeatureCard {
            title: "Legal Services",
            desc: "Access a wide range of services including legal documentation, case \
                   filing, legal consultations, contract review, and more—all at your \
                   fingertips.",
            image: "https://images.unsplash.com/photo-1589391886645-d51941baf7fb?auto=format&fit=crop&w=1050&q=80",
            accent: "#10b981",
            destination: Route::Services,
        },
        FeatureCard {
            title: "Connect With Us",
            desc: "Need help or have a question? Our dedicated team is here to support you \
                   with personalized guidance and fast resolutions to your legal queries.",
            image: "https://images.unsplash.com/photo-1600880292203-757bb62b4b8d?auto=format&fit=crop&w=1050&q=80",
            accent: "#8b5cf6",
            destination: Route::Contact,
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lawyer {
    pub name: &'static str,
    pub domain: &'static str,
    pub experience: &'static str,
    pub rating: &'static str,
    pub portrait: &'static str,
}

pub fn lawyers() -> Vec<Lawyer> {
    vec![
        Lawyer {
            name: "Adv. Priya Sharma",
            domain: "Family Law",
            experience: "8+ years",
            rating: "4.8/5",
            portrait: "https://randomuser.me/api/portraits/women/44.jpg",
        },
        Lawyer {
            name: "Adv. Raj Mehta",
            domain: "Criminal Law",
            experience: "10+ years",
            rating: "4.9/5",
            portrait: "https://randomuser.me/api/portraits/men/32.jpg",
        },
        Lawyer {
            name: "Adv. Neha Kapoor",
            domain: "Corporate Law",
            experience: "6+ years",
            rating: "4.7/5",
            portrait: "https://randomuser.me/api/portraits/women/65.jpg",
        },
        Lawyer {
            name: "Adv. Ankit Desai",
            domain: "Civil Litigation",
            experience: "12+ years",
            rating: "5.0/5",
            portrait: "https://randomuser.me/api/portraits/men/27.jpg",
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub desc: &'static str,
    pub emoji: &'static str,
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            title: "Legal Consultation",
            desc: "Talk to experienced lawyers for advice on any legal matter.",
            emoji: "🧑‍⚖️",
        },
        Service {
            title: "Contract Review",
            desc: "Get your contracts reviewed by professionals to avoid loopholes.",
            emoji: "📄",
        },
        Service {
            title: "Case Filing",
            desc: "File criminal, civil or corporate cases with expert help.",
            emoji: "⚖️",
        },
        Service {
            title: "Legal Documentation",
            desc: "From affidavits to agreements, get all legal docs drafted.",
            emoji: "📝",
        },
        Service {
            title: "Property Disputes",
            desc: "Resolve disputes related to land, property, and inheritance.",
            emoji: "🏡",
        },
        Service {
            title: "Divorce & Family",
            desc: "Handle sensitive family matters with confidentiality.",
            emoji: "👨‍👩‍👧‍👦",
        },
    ]
}
