//! Static site content: who, what was built, how to get in touch.

pub const OWNER_NAME: &str = "Santheep Krishna V G";
pub const OWNER_TITLE: &str = "Aspiring MERN Stack Developer";
pub const OWNER_EMAIL: &str = "santheepkrishna09@gmail.com";
pub const RESUME_PATH: &str = "/resume.pdf";
pub const SITE_DESCRIPTION: &str = "Portfolio of Santheep Krishna V G, a passionate MERN Stack Developer specializing in modern web applications.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", href: "#home" },
    NavItem { label: "About", href: "#about" },
    NavItem { label: "Skills", href: "#skills" },
    NavItem { label: "Projects", href: "#projects" },
    NavItem { label: "Contact", href: "#contact" },
];

pub const HERO_STACK: &[&str] = &["React", "Node.js", "MongoDB", "Express", "Next.js", "Prisma"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Clean Code",
        description: "Writing maintainable, scalable solutions",
    },
    Highlight {
        title: "Performance",
        description: "Optimized for speed and efficiency",
    },
    Highlight {
        title: "Innovation",
        description: "Always exploring new technologies",
    },
    Highlight {
        title: "Collaboration",
        description: "Team player with strong communication",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat {
        value: "6+",
        label: "Months Learning",
    },
    Stat {
        value: "6+",
        label: "Projects Built",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Tools,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Tools => "Tools & Libraries",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0 to 100.
    pub level: u8,
    pub category: SkillCategory,
}

const fn skill(name: &'static str, level: u8, category: SkillCategory) -> Skill {
    Skill {
        name,
        level,
        category,
    }
}

pub const SKILLS: &[Skill] = &[
    skill("React", 75, SkillCategory::Frontend),
    skill("Next.js", 60, SkillCategory::Frontend),
    skill("JavaScript", 80, SkillCategory::Frontend),
    skill("TypeScript", 50, SkillCategory::Frontend),
    skill("HTML5", 90, SkillCategory::Frontend),
    skill("CSS3", 85, SkillCategory::Frontend),
    skill("Node.js", 70, SkillCategory::Backend),
    skill("Express.js", 65, SkillCategory::Backend),
    skill("MongoDB", 70, SkillCategory::Backend),
    skill("Prisma", 45, SkillCategory::Backend),
    skill("Material UI", 75, SkillCategory::Tools),
    skill("Tailwind CSS", 70, SkillCategory::Tools),
    skill("Bootstrap", 80, SkillCategory::Tools),
    skill("Redux", 60, SkillCategory::Tools),
    skill("JWT", 65, SkillCategory::Tools),
    skill("GitHub", 75, SkillCategory::Tools),
];

pub fn skills_in(category: SkillCategory) -> impl Iterator<Item = &'static Skill> {
    SKILLS.iter().filter(move |s| s.category == category)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub github_link: &'static str,
    pub live_link: &'static str,
    pub category: &'static str,
}

const MERN_GSAP: &[&str] = &["MongoDB", "Express.js", "React", "Node.js", "GSAP"];

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "BikeBuddie",
        description: "A bike rental platform built with MERN stack as a learning project. Features include user authentication, bike listing, booking system, and smooth animations using GSAP for enhanced user experience.",
        image: "/BikeBuddie.png",
        technologies: MERN_GSAP,
        github_link: "https://github.com/santheep7/BikeBuddie",
        live_link: "https://bike-buddie.vercel.app/",
        category: "MERN Stack",
    },
    Project {
        id: 2,
        title: "EcoBin",
        description: "A waste management awareness web application built with MERN stack. Features include educational content, waste tracking, tips for sustainable living, and interactive animations powered by GSAP.",
        image: "/EcoBin.png",
        technologies: MERN_GSAP,
        github_link: "https://github.com/santheep7/Ecobin",
        live_link: "https://ecobin-xi.vercel.app/",
        category: "MERN Stack",
    },
    Project {
        id: 3,
        title: "ShopinGo",
        description: "An e-commerce web application built with MERN stack as a learning project. Includes product catalog, shopping cart, user authentication, and engaging animations using GSAP for smooth transitions.",
        image: "/ShopinGo.png",
        technologies: MERN_GSAP,
        github_link: "https://github.com/santheep7/ShopinGo",
        live_link: "https://shopin-go.vercel.app/",
        category: "MERN Stack",
    },
];

/// Utility classes for a technology badge; unknown technologies share the fallback look.
pub fn tech_badge_class(tech: &str) -> &'static str {
    match tech {
        "GSAP" => "bg-amber-400/15 text-amber-600 border-amber-500/30",
        "React" => "bg-sky-300/15 text-sky-400 border-sky-300/30",
        "Node.js" => "bg-green-600/15 text-green-600 border-green-600/30",
        "MongoDB" => "bg-emerald-600/15 text-emerald-600 border-emerald-600/30",
        _ => "bg-red-400/15 text-red-400 border-red-400/30",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub title: &'static str,
    pub value: &'static str,
    pub link: Option<&'static str>,
}

impl ContactInfo {
    /// Off-site links open in a new tab; `mailto:`/`tel:` stay in place.
    pub fn opens_new_tab(&self) -> bool {
        self.link.is_some_and(|l| l.starts_with("http"))
    }
}

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        title: "Email",
        value: OWNER_EMAIL,
        link: Some("mailto:santheepkrishna09@gmail.com"),
    },
    ContactInfo {
        title: "Phone",
        value: "+91 8075738744",
        link: Some("tel:+918075738744"),
    },
    ContactInfo {
        title: "Location",
        value: "Kerala, India",
        link: None,
    },
    ContactInfo {
        title: "LinkedIn",
        value: "linkedin.com/in/santheepkrishna",
        link: Some("https://www.linkedin.com/in/santheep-krishna-95a573276/"),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    /// devicon class for the link's icon.
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/santheep7",
        icon: "devicon-github-plain",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/santheep-krishna-95a573276/",
        icon: "devicon-linkedin-plain",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_skill_has_a_category_and_sane_level() {
        let total: usize = SkillCategory::ALL
            .iter()
            .map(|c| skills_in(*c).count())
            .sum();
        assert_eq!(total, SKILLS.len());
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_contact_links() {
        let email = CONTACT_INFO.iter().find(|c| c.title == "Email").unwrap();
        assert!(!email.opens_new_tab());
        let linkedin = CONTACT_INFO.iter().find(|c| c.title == "LinkedIn").unwrap();
        assert!(linkedin.opens_new_tab());
        let location = CONTACT_INFO.iter().find(|c| c.title == "Location").unwrap();
        assert!(!location.opens_new_tab());
    }

    #[test]
    fn test_badge_fallback() {
        assert_eq!(tech_badge_class("Express.js"), tech_badge_class("COBOL"));
        assert_ne!(tech_badge_class("React"), tech_badge_class("COBOL"));
    }

    #[test]
    fn test_referenced_assets_are_shipped() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        let assets = PROJECTS
            .iter()
            .map(|p| p.image)
            .chain([RESUME_PATH, "/developer.gif"]);
        for asset in assets {
            let path = public.join(asset.trim_start_matches('/'));
            assert!(path.is_file(), "missing {}", path.display());
        }
    }
}
