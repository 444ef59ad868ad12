//! Who the page is about: hero copy, contact links, intro statistics,
//! the research publication, and creative talents.

use super::{Link, LinkTarget, Profile, Publication, Stat, Talent};

pub static PROFILE: Profile = Profile {
    short_name: "VSS Krishna Chaitanya",
    name_lines: ["VSS Krishna", "Chaitanya Annamraju"],
    disciplines: "Analytics • Data Science • Machine Learning",
    role: "Data Scientist & Software Developer",
    intro: "Transforming complex data into actionable business insights through AI-powered solutions and full-stack development.",
    projects_tagline: "AI Research. Mobile Development. Web Platforms. Data Analytics.",
    contact_heading: "Let's connect.",
    contact_pitch: "Ready to bring AI expertise and full-stack development skills to drive your next breakthrough?",
    contact_footnotes: [
        "Seeking Data Scientist / Full-Stack Developer opportunities",
        "Ready to contribute AI expertise, development skills, and technical innovation",
    ],
    links: &[
        Link {
            label: "annamraju.v@northeastern.edu",
            target: LinkTarget::Email("annamraju.v@northeastern.edu"),
        },
        Link {
            label: "+1 (857) 492-7729",
            target: LinkTarget::Phone("+18574927729"),
        },
        Link {
            label: "LinkedIn ↗",
            target: LinkTarget::External("https://bit.ly/47cIIXB"),
        },
        Link {
            label: "Download Resume",
            target: LinkTarget::Download {
                path: "/VSS_Krishna_Chaitanya_Resume.pdf",
                filename: "VSS_Krishna_Chaitanya_Annamraju_Resume.pdf",
            },
        },
    ],
    location: "Boston, MA",
    copyright: "© 2024 VSS Krishna Chaitanya Annamraju. All rights reserved.",
    signature: "Designed with precision in Boston",
};

pub static STATS: &[Stat] = &[
    Stat {
        icon: "◆",
        metric: "3.68",
        label: "Academic Excellence",
        sublabel: "Top 15% at Northeastern University",
        numeric: true,
    },
    Stat {
        icon: "▢",
        metric: "6",
        label: "Major Projects",
        sublabel: "AI, Mobile, Web, Data Analytics",
        numeric: true,
    },
    Stat {
        icon: "▲",
        metric: "18+",
        label: "Mobile Apps",
        sublabel: "Android development portfolio",
        numeric: true,
    },
    Stat {
        icon: "●",
        metric: "Published Research",
        label: "AI Paper",
        sublabel: "Cryptocurrency price prediction",
        numeric: false,
    },
];

pub static PUBLICATION: Publication = Publication {
    title: "Cryptocurrency Price Analysis with Artificial Intelligence",
    kind: "Breakthrough Research Publication • Industry Impact",
    venue: "CVR College of Engineering, Hyderabad • 2022 • Cited 12+ times",
    highlights: &[
        ("Industry First", "AI Predictability Proof"),
        ("$50M+", "Market Volume Analyzed"),
        ("12+", "Academic Citations"),
    ],
    summary: "Pioneered comparative analysis of deep learning architectures for financial prediction. First empirical study proving cryptocurrency market predictability, influencing fintech AI development strategies across the industry. Research methodology adopted by 8+ financial institutions.",
};

pub static TALENTS: &[Talent] = &[
    Talent {
        icon: "📸",
        title: "Professional Photography",
        description: "Multi-genre expertise • Published \"The Shutterbug\" magazine",
    },
    Talent {
        icon: "🎬",
        title: "Video Production",
        description: "Adobe Premiere Pro • Head of Photography & Editing Dept",
    },
    Talent {
        icon: "🎨",
        title: "Creative Direction",
        description: "Editorial design • Brand development • Content curation",
    },
    Talent {
        icon: "👥",
        title: "Creative Leadership",
        description: "Team management • Project coordination • @Thenikon_user",
    },
];

pub const TALENTS_REMARK: &str = "Creative skills that complement technical expertise, enabling end-to-end project delivery from development to visual presentation.";
