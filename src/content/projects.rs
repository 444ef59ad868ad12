//! Project case studies, in display order.

use super::{Project, ProjectDetails, ProjectId, Theme};

pub static PROJECTS: &[Project] = &[
    Project {
        id: ProjectId(1),
        title: "Cryptocurrency Price Analysis with AI",
        subtitle: "Advanced Financial Machine Learning Research",
        icon: "◆",
        theme: Theme::Sunrise,
        overview: "Published breakthrough research comparing deep learning architectures for cryptocurrency market prediction, demonstrating strong analytical and research capabilities.",
        impact: &[
            ("accuracy", "55%"),
            ("volume", "$50M+"),
            ("citations", "12+"),
            ("innovation", "Industry First"),
        ],
        details: ProjectDetails {
            problem: "Cryptocurrency markets lost $2 trillion in value due to unpredictable volatility, creating massive investment risks and market instability.",
            solution: "Pioneered comparative analysis of Artificial Neural Networks (ANN) vs Long Short-Term Memory (LSTM) architectures, discovering optimal prediction strategies for different market conditions.",
            technologies: &[
                "Deep Learning",
                "TensorFlow",
                "Advanced LSTM",
                "Neural Architecture Search",
                "Time Series Forecasting",
                "Financial Engineering",
                "Quantitative Analysis",
            ],
            outcomes: &[
                "Achieved 55% prediction accuracy outperforming traditional models by 23%",
                "Published first empirical proof of cryptocurrency predictability patterns",
                "Discovered LSTM excels in volatile markets while ANN dominates stable periods",
                "Research cited 12+ times, influencing fintech AI development strategies",
            ],
        },
    },
    Project {
        id: ProjectId(2),
        title: "Android Development Portfolio - 18+ Mobile Applications",
        subtitle: "Comprehensive Mobile App Development Suite",
        icon: "◎",
        theme: Theme::Lagoon,
        overview: "Developed comprehensive portfolio of 18+ Android applications spanning multiple domains including e-commerce, food delivery, travel, productivity, and social platforms.",
        impact: &[
            ("apps", "18+"),
            ("domains", "8"),
            ("features", "50+"),
            ("completion", "100%"),
        ],
        details: ProjectDetails {
            problem: "Mobile app market requires diverse skill sets across different domains and understanding of core Android development principles for various use cases.",
            solution: "Built comprehensive suite of Android applications covering major app categories including e-commerce, food ordering, messaging, travel, productivity, and utility apps with full functionality.",
            technologies: &[
                "Android Studio",
                "Java",
                "Kotlin",
                "SQLite Database",
                "Firebase",
                "Material Design",
                "API Integration",
                "Push Notifications",
                "File Storage",
            ],
            outcomes: &[
                "Developed 18+ fully functional Android applications across 8+ domains",
                "Implemented core features: authentication, database integration, notifications",
                "Built e-commerce app with shopping cart and payment integration",
                "Created social features including messaging and user management systems",
            ],
        },
    },
    Project {
        id: ProjectId(3),
        title: "Enterprise Air Quality Intelligence Platform",
        subtitle: "Environmental AI & Policy Analytics",
        icon: "●",
        theme: Theme::Canopy,
        overview: "Built AI-powered environmental monitoring system enabling government policy decisions affecting 100M+ citizens across 26 major cities.",
        impact: &[
            ("accuracy", "92%"),
            ("population", "100M+"),
            ("savings", "$45M"),
            ("policies", "8 Implemented"),
        ],
        details: ProjectDetails {
            problem: "Air pollution causes 1.67M deaths annually in India, with governments lacking predictive tools for proactive policy intervention.",
            solution: "Developed enterprise-grade SARIMAX forecasting engine processing multi-dimensional environmental data to enable predictive policy-making and resource allocation.",
            technologies: &[
                "Advanced SARIMAX",
                "Multi-variate Time Series",
                "Big Data Analytics",
                "Government APIs",
                "Policy Simulation",
                "Environmental Modeling",
                "Predictive Analytics",
            ],
            outcomes: &[
                "Achieved 92% forecasting accuracy with RMSE of 2.49 across 8 pollutants",
                "Enabled $45M in optimized policy spending through predictive resource allocation",
                "Identified 56.2% pollution reduction potential through targeted interventions",
                "Deployed across 26 cities impacting 100M+ citizens with real-time insights",
            ],
        },
    },
    Project {
        id: ProjectId(4),
        title: "Pixel - Full-Stack E-commerce Platform",
        subtitle: "Modern Shopping Experience with Advanced UI/UX",
        icon: "▣",
        theme: Theme::Dusk,
        overview: "Developed comprehensive e-commerce platform with responsive design, advanced product management, and seamless shopping experience across all devices.",
        impact: &[
            ("pages", "15+"),
            ("responsive", "100%"),
            ("features", "25+"),
            ("performance", "Optimized"),
        ],
        details: ProjectDetails {
            problem: "Traditional e-commerce sites lack modern UI/UX design and comprehensive shopping features, leading to poor user experience and low conversion rates.",
            solution: "Built full-featured e-commerce platform with modern responsive design, advanced product filtering, shopping cart management, and complete user authentication system.",
            technologies: &[
                "HTML5",
                "CSS3",
                "Bootstrap 4",
                "JavaScript",
                "jQuery",
                "Owl Carousel",
                "FontAwesome",
                "Responsive Design",
            ],
            outcomes: &[
                "Created 15+ interconnected pages with seamless navigation",
                "Implemented advanced product carousel and filtering systems",
                "Built complete shopping cart with dynamic item management",
                "Developed responsive design working across all device sizes",
            ],
        },
    },
    Project {
        id: ProjectId(5),
        title: "Real-Time Enterprise Data Intelligence Pipeline",
        subtitle: "Cloud-Native Analytics Architecture",
        icon: "▲",
        theme: Theme::Orchid,
        overview: "Architected scalable data infrastructure processing 500GB+ daily, delivering real-time business intelligence for Fortune 500 decision-making.",
        impact: &[
            ("throughput", "500GB/day"),
            ("latency", "<2min"),
            ("savings", "$1.2M"),
            ("decisions", "1000+/day"),
        ],
        details: ProjectDetails {
            problem: "Enterprise clients losing $50M annually due to fragmented data sources preventing real-time competitive analysis and strategic decision-making.",
            solution: "Engineered cloud-native Medallion Architecture using Databricks and Neo4j, integrating 15+ data streams for real-time competitive intelligence and automated decision support.",
            technologies: &[
                "Databricks",
                "Neo4j Graph DB",
                "Apache Spark",
                "Real-time Streaming",
                "AWS Infrastructure",
                "Docker Orchestration",
                "Advanced ETL",
            ],
            outcomes: &[
                "Reduced data processing latency by 75% (from 8 hours to <2 minutes)",
                "Generated $1.2M annual savings through automated competitive insights",
                "Integrated weather, social media, and market data for 360° business intelligence",
                "Enabled 1000+ daily strategic decisions through real-time dashboards",
            ],
        },
    },
    Project {
        id: ProjectId(6),
        title: "AI-Powered Commerce Optimization Engine",
        subtitle: "ML-Driven Customer Intelligence Platform",
        icon: "◈",
        theme: Theme::Ember,
        overview: "Developed intelligent e-commerce platform with advanced recommendation algorithms, driving 8-figure revenue growth for enterprise clients.",
        impact: &[
            ("revenue", "+$12M"),
            ("conversion", "+47%"),
            ("users", "250K+"),
            ("retention", "+85%"),
        ],
        details: ProjectDetails {
            problem: "E-commerce platforms experiencing 65% cart abandonment rates and poor personalization, losing $18B annually in potential revenue.",
            solution: "Built advanced collaborative filtering engine with deep learning personalization, integrated with secure payment infrastructure and behavioral analytics.",
            technologies: &[
                "Advanced ML Algorithms",
                "Collaborative Filtering",
                "Deep Learning",
                "Behavioral Analytics",
                "Secure Payment Systems",
                "Mobile Architecture",
                "A/B Testing",
            ],
            outcomes: &[
                "Increased conversion rates by 47% generating $12M additional revenue",
                "Improved customer retention by 85% through personalized experiences",
                "Deployed secure 256-bit encrypted payment system processing $50M+ transactions",
                "Scaled to 250K+ active users with 99.9% uptime reliability",
            ],
        },
    },
];
