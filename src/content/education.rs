//! Academic history and certifications.

use super::{Certification, EducationEntry};

pub static EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        degree: "Master of Professional Studies",
        field: "Analytics (Data Science Concentration)",
        school: "Northeastern University",
        location: "Boston, MA",
        period: "2024 - 2025",
        grade: "3.68/4.0 (Top 15%)",
        highlights: &[
            "Advanced Machine Learning & AI",
            "Big Data Analytics & Cloud Computing",
            "Statistical Methods & Quantitative Analysis",
            "Business Intelligence & Data Visualization",
        ],
    },
    EducationEntry {
        degree: "Bachelor of Technology",
        field: "Computer Science & Engineering",
        school: "CVR College of Engineering",
        location: "Hyderabad, India",
        period: "2018 - 2022",
        grade: "6.9/10 (Distinction)",
        highlights: &[
            "Vice Chairperson, Computer Science Department",
            "Developed 18+ Android applications across multiple domains",
            "Published breakthrough cryptocurrency AI research",
            "Led CIENCIA 2k22 tech fest (2000+ participants)",
        ],
    },
];

pub static CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "Generative AI: Introduction and Applications",
        issuer: "IBM (Enterprise Level)",
        date: "Aug 2024",
        icon: "⚡",
    },
    Certification {
        name: "Programming for Everybody (Python)",
        issuer: "University of Michigan (Honor Graduate)",
        date: "2024",
        icon: "◉",
    },
    Certification {
        name: "Android App Development",
        issuer: "Google Developer Program",
        date: "2021-2022",
        icon: "▣",
    },
    Certification {
        name: "Head of Photography & Editing Department",
        issuer: "CVR College of Engineering Club",
        date: "2019-2022",
        icon: "◈",
    },
];
