//! Skill categories with per-skill proficiency ratings.

use super::{Skill, SkillCategory, SkillCategoryId};

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        id: SkillCategoryId("programming"),
        name: "Programming & Development",
        icon: "▣",
        skills: &[
            Skill { name: "Python (Advanced)", level: 95, projects: "ML systems & analysis" },
            Skill { name: "Java/Kotlin", level: 92, projects: "18+ Android applications" },
            Skill { name: "HTML5/CSS3", level: 90, projects: "E-commerce platform" },
            Skill { name: "JavaScript/jQuery", level: 88, projects: "Interactive web apps" },
            Skill { name: "SQL (Proficient)", level: 90, projects: "Database integration" },
        ],
    },
    SkillCategory {
        id: SkillCategoryId("ml-ai"),
        name: "Machine Learning & AI",
        icon: "◇",
        skills: &[
            Skill { name: "Deep Learning", level: 88, projects: "Neural network models" },
            Skill { name: "TensorFlow/Keras", level: 85, projects: "ML model development" },
            Skill { name: "Data Analysis", level: 92, projects: "Statistical modeling" },
            Skill { name: "LSTM/RNN", level: 85, projects: "Time series forecasting" },
            Skill { name: "Model Deployment", level: 80, projects: "Production systems" },
        ],
    },
    SkillCategory {
        id: SkillCategoryId("mobile"),
        name: "Mobile Development",
        icon: "○",
        skills: &[
            Skill { name: "Android Studio", level: 95, projects: "18+ mobile applications" },
            Skill { name: "Mobile UI/UX", level: 90, projects: "Cross-platform design" },
            Skill { name: "SQLite Database", level: 88, projects: "Local data storage" },
            Skill { name: "Firebase Integration", level: 85, projects: "Real-time features" },
            Skill { name: "API Integration", level: 87, projects: "Backend connectivity" },
        ],
    },
    SkillCategory {
        id: SkillCategoryId("web-cloud"),
        name: "Web & Cloud Development",
        icon: "▢",
        skills: &[
            Skill { name: "Bootstrap Framework", level: 90, projects: "Responsive design" },
            Skill { name: "AWS Cloud Services", level: 85, projects: "Cloud infrastructure" },
            Skill { name: "Databricks", level: 88, projects: "Big data processing" },
            Skill { name: "Docker", level: 82, projects: "Containerization" },
            Skill { name: "Apache Spark", level: 85, projects: "Distributed computing" },
        ],
    },
    SkillCategory {
        id: SkillCategoryId("research"),
        name: "Research & Analytics",
        icon: "◆",
        skills: &[
            Skill { name: "Financial Modeling", level: 85, projects: "Market analysis" },
            Skill { name: "Research Methods", level: 90, projects: "Academic publication" },
            Skill { name: "Time Series Analysis", level: 87, projects: "Forecasting models" },
            Skill { name: "Statistical Methods", level: 88, projects: "Advanced analytics" },
            Skill { name: "Data Visualization", level: 87, projects: "Interactive dashboards" },
        ],
    },
];
