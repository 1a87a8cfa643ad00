//! Everything the landing page says. All of it is fixed at build time.

pub const TITLE: &str = "Speak Smart Weekend";
pub const TAGLINE: &str = "2-day online bootcamp to speak with confidence, fix everyday grammar slips, crack interviews & win group discussions.";

pub const BADGES: &[&str] = &[
    "📅 Dates: 11–12 Oct",
    "💻 Mode: Zoom",
    "⏱️ Total time: ~6 hours",
    "👥 Batch size: 25–35",
];

pub const PRICE_LABEL: &str = "Intro Price";
pub const PRICE: &str = "₹100";
pub const SEAT_NOTICE: &str = "⚡ Limited seats · First-come first-served";

pub const LOGO_SRC: &str = "/assets/logo.svg";

pub struct CurriculumDay {
    pub title: &'static str,
    pub format: &'static str,
    pub theme: &'static str,
    pub outcomes: &'static [&'static str],
    pub sessions: &'static [&'static str],
}

pub const CURRICULUM: &[CurriculumDay] = &[
    CurriculumDay {
        title: "Day 1 - Saturday",
        format: "2 sessions x 90 mins",
        theme: "The Foundation",
        outcomes: &[
            "Beat stage fear with mindset, breathing & grounding tools.",
            "Project confidence using the Preparation → Practice → Presence approach.",
            "Grammar that speaks: tense fixes, subject-verb agreement, transitions.",
            "Hands-on: Extempore + \"Spot & Fix\" grammar game.",
        ],
        sessions: &[
            "Building Confidence & Overcoming Fear — mindset, quick hacks, extempore practice.",
            "Grammar that Speaks — practical fixes + live \"Spot & Fix\".",
        ],
    },
    CurriculumDay {
        title: "Day 2 - Sunday",
        format: "2 sessions x 90 mins",
        theme: "Career Communication",
        outcomes: &[
            "Answer \"Tell me about yourself\" with clarity using STAR.",
            "Virtual interview do's & don'ts that actually matter.",
            "Mock interviews in pairs with rapid feedback.",
            "Group Discussion drills with a simple scoring rubric.",
        ],
        sessions: &[
            "Mastering Interviews — STAR, TMAY structure, mock interview.",
            "Communication Games & Real-Life Practice — extempore, grammar game, GD with scoring.",
        ],
    },
];

pub const WHO_SHOULD_JOIN: &[&str] = &[
    "Students & freshers preparing for placements.",
    "Early-career professionals polishing speaking skills.",
    "Anyone who freezes on camera or in GDs.",
];

pub const WHAT_YOU_NEED: &[&str] = &[
    "Zoom on laptop/phone, stable internet.",
    "Mic + camera (recommended for practice rooms).",
    "Willingness to speak & try!",
];

// Enrollment: pay first, then submit the form with the screenshot.
pub const ENROLL_SECTION_ID: &str = "enroll-section";
pub const UPI_ID: &str = "ajveer.choudhry@oksbi";
pub const UPI_QR_SRC: &str = "/assets/upi-qr.jpg";
pub const PAYMENT_NOTE: &str = "💡 Add your name in the payment note for faster verification.";
pub const REGISTRATION_FORM_URL: &str = "https://docs.google.com/forms/d/e/1FAIpQLSdmKVYfSSSGoHJ3cTK2xUc28MaDvsV_s-xYsdmo5FhRrJLhPw/viewform?usp=dialog";
pub const ENROLL_NOTES: &[&str] = &[
    "Seats are confirmed only after form submission.",
    "Fee is non-refundable; transfer allowed to next batch if you inform 24h prior.",
];

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "Will sessions be recorded?",
        answer: "Core sections may be recorded, but most learning happens in live practice rooms. Recordings (if any) are shared only with participants.",
    },
    FaqEntry {
        question: "Do I get a certificate?",
        answer: "Yes, an e-certificate of participation from Grow100x.",
    },
    FaqEntry {
        question: "How are breakout rooms managed?",
        answer: "2-3 facilitators moderate for timing and feedback. Expect 5–8 participants per room.",
    },
];

pub struct Contact {
    pub label: &'static str,
    pub href: &'static str,
}

pub const CONTACTS: &[Contact] = &[
    Contact {
        label: "WhatsApp: +91-7983151059",
        href: "https://wa.me/917983151059",
    },
    Contact {
        label: "Email: ajveer.choudhry@gmail.com",
        href: "https://mail.google.com/mail/?view=cm&fs=1&to=ajveer.choudhry@gmail.com",
    },
];

pub const COPYRIGHT: &str = "© 2025 Grow100x.ai All rights reserved.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faq_list_is_populated() {
        assert!(!FAQ_ENTRIES.is_empty());
        assert!(FAQ_ENTRIES
            .iter()
            .all(|entry| entry.question.ends_with('?') && !entry.answer.is_empty()));
    }

    #[test]
    fn outbound_links_are_absolute() {
        assert!(REGISTRATION_FORM_URL.starts_with("https://"));
        for contact in CONTACTS {
            assert!(contact.href.starts_with("https://"), "{}", contact.href);
        }
    }

    #[test]
    fn images_are_served_from_assets() {
        for src in [LOGO_SRC, UPI_QR_SRC] {
            assert!(src.starts_with("/assets/"), "{}", src);
        }
        let logo = include_str!("../assets/logo.svg");
        assert!(logo.trim_start().starts_with("<svg"));
    }

    #[test]
    fn curriculum_covers_both_days() {
        assert_eq!(CURRICULUM.len(), 2);
        assert!(CURRICULUM.iter().all(|day| !day.outcomes.is_empty()));
    }
}
