//! Static copy rendered by the page sections.

pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub static NAV_ITEMS: &[NavItem] = &[
    NavItem { name: "Home", href: "#home" },
    NavItem { name: "Skills", href: "#skills" },
    NavItem { name: "Experience", href: "#experience" },
    NavItem { name: "Projects", href: "#projects" },
    NavItem { name: "Contact", href: "#contact" },
];

pub struct SkillCategory {
    pub icon: &'static str,
    pub title: &'static str,
    pub skills: &'static [&'static str],
    pub color: &'static str,
}

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        icon: "💻",
        title: "Frontend Development",
        skills: &[
            "React.js",
            "Next.js",
            "Redux Toolkit",
            "Context API",
            "Tailwind CSS",
            "SCSS",
            "HTML5",
            "CSS3",
            "JavaScript (ES6+)",
        ],
        color: "from-blue-500 to-cyan-500",
    },
    SkillCategory {
        icon: "🗄️",
        title: "Backend Development",
        skills: &["Node.js", "Express.js", "Strapi", "MongoDB", "REST API"],
        color: "from-green-500 to-emerald-500",
    },
    SkillCategory {
        icon: "🌐",
        title: "Web3 & Integration",
        skills: &["MetaMask", "Blockchain", "Razorpay", "Nodemailer"],
        color: "from-purple-500 to-pink-500",
    },
    SkillCategory {
        icon: "🎨",
        title: "Design & Tools",
        skills: &["Git", "Bootstrap", "Figma", "Agile Methodologies"],
        color: "from-orange-500 to-red-500",
    },
    SkillCategory {
        icon: "🤝",
        title: "Soft Skills",
        skills: &[
            "Communication",
            "Team Leadership",
            "Client Management",
            "Problem-solving",
            "Time Management",
        ],
        color: "from-indigo-500 to-blue-500",
    },
];

pub struct ExperienceEntry {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub achievements: &'static [&'static str],
}

pub static EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        title: "Senior Full-Stack Developer",
        company: "Tech Innovations Inc.",
        period: "2022 - Present",
        description: "Leading development of data-intensive applications using Next.js 14 and modern React patterns. Specialized in creating intuitive data visualizations and implementing complex pivot table logic.",
        technologies: &["Next.js", "React", "TypeScript", "MongoDB", "AWS"],
        achievements: &[
            "Architected scalable data visualization platform",
            "Reduced load times by 40% through optimization",
            "Led team of 5 developers",
        ],
    },
    ExperienceEntry {
        title: "Frontend Developer",
        company: "Digital Solutions Ltd.",
        period: "2020 - 2022",
        description: "Developed responsive web applications with focus on user experience and performance. Integrated various payment systems and implemented real-time features.",
        technologies: &["React", "Redux", "SCSS", "Node.js", "Express"],
        achievements: &[
            "Built comprehensive e-commerce platform",
            "Integrated Razorpay payment gateway",
            "Improved user engagement by 60%",
        ],
    },
    ExperienceEntry {
        title: "Junior Developer",
        company: "StartUp Ventures",
        period: "2019 - 2020",
        description: "Started journey in web development, focusing on frontend technologies and learning full-stack development principles.",
        technologies: &["JavaScript", "HTML5", "CSS3", "Bootstrap", "Git"],
        achievements: &[
            "Delivered 15+ responsive web projects",
            "Collaborated with design team effectively",
            "Mentored junior interns",
        ],
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub github: &'static str,
    pub demo: &'static str,
    pub featured: bool,
}

pub static PROJECTS: &[Project] = &[
    Project {
        title: "Data Analytics Dashboard",
        description: "Comprehensive analytics platform with real-time data visualization, complex pivot tables, and interactive charts. Built with Next.js 14 and optimized for performance.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600&h=400&fit=crop",
        technologies: &["Next.js", "React", "TypeScript", "Recharts", "Tailwind CSS"],
        github: "https://github.com",
        demo: "https://demo.com",
        featured: true,
    },
    Project {
        title: "E-Commerce Platform",
        description: "Full-stack e-commerce solution with payment integration, inventory management, and admin dashboard. Features seamless user experience and robust backend.",
        image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=600&h=400&fit=crop",
        technologies: &["React", "Node.js", "MongoDB", "Razorpay", "Express"],
        github: "https://github.com",
        demo: "https://demo.com",
        featured: false,
    },
    Project {
        title: "Web3 DApp Interface",
        description: "Decentralized application interface with MetaMask integration and blockchain interaction. Clean, intuitive design for complex Web3 operations.",
        image: "https://images.unsplash.com/photo-1639762681485-074b7f938ba0?w=600&h=400&fit=crop",
        technologies: &["React", "Web3.js", "MetaMask", "Ethereum", "SCSS"],
        github: "https://github.com",
        demo: "https://demo.com",
        featured: false,
    },
];

pub struct ContactDetail {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

pub static CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail { icon: "✉️", label: "Email", value: "your.email@example.com" },
    ContactDetail { icon: "📞", label: "Phone", value: "+1 (555) 123-4567" },
    ContactDetail { icon: "📍", label: "Location", value: "Your City, Country" },
];

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon_class: &'static str,
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub Profile",
        href: "https://github.com",
        icon_class: "devicon-github-plain",
    },
    SocialLink {
        label: "LinkedIn Profile",
        href: "https://linkedin.com",
        icon_class: "devicon-linkedin-plain",
    },
];

const DEVICON: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon/icons";

/// Icon URL for a technology name; unknown names have no icon.
pub fn tech_icon(name: &str) -> Option<String> {
    let devicon = |path: &str| Some(format!("{DEVICON}/{path}"));
    match name {
        "React.js" | "React" | "Context API" => devicon("react/react-original.svg"),
        "Next.js" => devicon("nextjs/nextjs-original.svg"),
        "Redux Toolkit" | "Redux" => devicon("redux/redux-original.svg"),
        "Tailwind CSS" => devicon("tailwindcss/tailwindcss-plain.svg"),
        "SCSS" => devicon("sass/sass-original.svg"),
        "HTML5" => devicon("html5/html5-original.svg"),
        "CSS3" => devicon("css3/css3-original.svg"),
        "JavaScript (ES6+)" | "JavaScript" => devicon("javascript/javascript-original.svg"),
        "Node.js" | "Nodemailer" => devicon("nodejs/nodejs-original.svg"),
        "Express.js" | "Express" => devicon("express/express-original.svg"),
        "MongoDB" | "MERN Stack" => devicon("mongodb/mongodb-original.svg"),
        "TypeScript" => devicon("typescript/typescript-original.svg"),
        "Git" => devicon("git/git-original.svg"),
        "Bootstrap" => devicon("bootstrap/bootstrap-original.svg"),
        "Figma" => devicon("figma/figma-original.svg"),
        "Oracle E-Business Suite" => devicon("oracle/oracle-original.svg"),
        "Cryptocurrency" | "Blockchain" => devicon("bitcoin/bitcoin-original.svg"),
        "Web3" | "Smart Contracts" | "DeFi" | "Ethereum" | "Web3.js" => {
            devicon("ethereum/ethereum-original.svg")
        }
        "REST API" => devicon("fastapi/fastapi-original.svg"),
        "CRM" => devicon("salesforce/salesforce-original.svg"),
        "Agile Methodologies" => devicon("jira/jira-original.svg"),
        "AWS" => devicon("amazonwebservices/amazonwebservices-original-wordmark.svg"),
        "Strapi" => Some("https://raw.githubusercontent.com/strapi/strapi/main/public/logo.svg".into()),
        "Razorpay" => Some("https://razorpay.com/assets/razorpay-glyph.svg".into()),
        "Recharts" => Some("https://recharts.org/statics/logo.svg".into()),
        "MetaMask" => Some("https://upload.wikimedia.org/wikipedia/commons/3/36/MetaMask_Fox.svg".into()),
        "AI APIs" => Some("https://upload.wikimedia.org/wikipedia/commons/0/04/ChatGPT_logo.svg".into()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_share_icons() {
        assert_eq!(tech_icon("React"), tech_icon("React.js"));
        assert!(tech_icon("Next.js").unwrap().ends_with("nextjs-original.svg"));
    }

    #[test]
    fn test_unknown_tech_has_no_icon() {
        assert_eq!(tech_icon("Team Leadership"), None);
        assert_eq!(tech_icon(""), None);
    }

    #[test]
    fn test_nav_targets_exist_once() {
        let hrefs = NAV_ITEMS.iter().map(|n| n.href).collect::<Vec<_>>();
        assert!(hrefs.iter().all(|h| h.starts_with('#')));
        let mut sorted = hrefs.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), hrefs.len());
    }
}
