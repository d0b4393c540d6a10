use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike, Utc};
use thiserror::Error;

/// Sections of the page, in the order they are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// The element id the section is rendered under.
    pub fn anchor_id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor_id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no section with anchor id `{0}`")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.anchor_id() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Opaque handle into the Lucide icon font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Menu,
    Close,
    Github,
    Linkedin,
    Twitter,
    Mail,
    Code,
    Palette,
    Server,
    Zap,
    Pencil,
    Atom,
    Brackets,
    ExternalLink,
}

impl Icon {
    pub fn class_name(self) -> &'static str {
        match self {
            Icon::Menu => "icon-menu",
            Icon::Close => "icon-x",
            Icon::Github => "icon-github",
            Icon::Linkedin => "icon-linkedin",
            Icon::Twitter => "icon-twitter",
            Icon::Mail => "icon-mail",
            Icon::Code => "icon-code",
            Icon::Palette => "icon-palette",
            Icon::Server => "icon-server",
            Icon::Zap => "icon-zap",
            Icon::Pencil => "icon-pencil",
            Icon::Atom => "icon-atom",
            Icon::Brackets => "icon-brackets",
            Icon::ExternalLink => "icon-external-link",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: Section,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillEntry {
    pub label: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub repo_url: &'static str,
    pub demo_url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
    /// Opens in a new tab; `mailto:` links stay in place.
    pub external: bool,
}

/// Who the site is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub site_title: &'static str,
    pub owner: &'static str,
    pub tagline: &'static str,
    pub photo_url: &'static str,
    pub about: &'static [&'static str],
}

pub const PROFILE: Profile = Profile {
    site_title: "My Portfolio",
    owner: "John Doe",
    tagline: "A passionate Frontend Developer specializing in React and modern web technologies.",
    photo_url: "https://placehold.co/400x400/1f2937/d1d5db?text=Your+Photo",
    about: &[
        "I am a dedicated Frontend Developer with a knack for creating beautiful, responsive, and user-friendly web applications. With a strong background in Computer Science and a passion for continuous learning, I thrive on turning complex problems into elegant solutions.",
        "My journey began with a curiosity for how websites work, which quickly evolved into a full-fledged career. I enjoy the entire development process, from ideation and wireframing to writing clean, maintainable code. When I'm not coding, you can find me hiking or experimenting with new recipes.",
    ],
};

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        label: "Home",
        target: Section::Home,
    },
    NavItem {
        label: "About",
        target: Section::About,
    },
    NavItem {
        label: "Skills",
        target: Section::Skills,
    },
    NavItem {
        label: "Projects",
        target: Section::Projects,
    },
    NavItem {
        label: "Contact",
        target: Section::Contact,
    },
];

pub const SKILLS: [SkillEntry; 9] = [
    SkillEntry {
        label: "React",
        icon: Icon::Atom,
    },
    SkillEntry {
        label: "JavaScript",
        icon: Icon::Code,
    },
    SkillEntry {
        label: "TypeScript",
        icon: Icon::Brackets,
    },
    SkillEntry {
        label: "Tailwind CSS",
        icon: Icon::Palette,
    },
    SkillEntry {
        label: "HTML5",
        icon: Icon::Code,
    },
    SkillEntry {
        label: "CSS3",
        icon: Icon::Palette,
    },
    SkillEntry {
        label: "Node.js",
        icon: Icon::Server,
    },
    SkillEntry {
        label: "Vite",
        icon: Icon::Zap,
    },
    SkillEntry {
        label: "Figma",
        icon: Icon::Pencil,
    },
];

pub const PROJECTS: [ProjectEntry; 3] = [
    ProjectEntry {
        title: "Project One",
        description: "A responsive e-commerce platform built with React and Tailwind CSS. It features a modern design and a seamless user experience.",
        technologies: &["React", "Tailwind CSS", "Vite"],
        repo_url: "#",
        demo_url: "#",
    },
    ProjectEntry {
        title: "Project Two",
        description: "A real-time chat application using Node.js and WebSockets. It allows users to join different rooms and communicate instantly.",
        technologies: &["React", "Node.js", "WebSockets"],
        repo_url: "#",
        demo_url: "#",
    },
    ProjectEntry {
        title: "Project Three",
        description: "A personal blog site with a custom CMS. It is built with a serverless architecture and uses TypeScript for better code quality.",
        technologies: &["React", "TypeScript", "Serverless"],
        repo_url: "#",
        demo_url: "#",
    },
];

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        label: "GitHub",
        href: "https://github.com",
        icon: Icon::Github,
        external: true,
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com",
        icon: Icon::Linkedin,
        external: true,
    },
    SocialLink {
        label: "Twitter",
        href: "https://twitter.com",
        icon: Icon::Twitter,
        external: true,
    },
    SocialLink {
        label: "Email",
        href: "mailto:example@example.com",
        icon: Icon::Mail,
        external: false,
    },
];

/// Year shown in the footer. Taken from the build so server and client
/// renders agree.
pub fn copyright_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_items_cover_every_section_in_order() {
        let targets = NAV_ITEMS.iter().map(|item| item.target).collect::<Vec<_>>();
        assert_eq!(targets, Section::ALL.to_vec());

        let labels = NAV_ITEMS.iter().map(|item| item.label).collect::<Vec<_>>();
        assert_eq!(labels, vec!["Home", "About", "Skills", "Projects", "Contact"]);
    }

    #[test]
    fn test_section_anchor_ids() {
        let ids = Section::ALL
            .iter()
            .map(|s| s.anchor_id())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["home", "about", "skills", "projects", "contact"]);

        for section in Section::ALL {
            assert_eq!(section.anchor_id().parse::<Section>(), Ok(section));
        }
        assert_eq!(
            "blog".parse::<Section>(),
            Err(UnknownSection("blog".to_string()))
        );
    }

    #[test]
    fn test_skills_table_order() {
        let labels = SKILLS.iter().map(|s| s.label).collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec![
                "React",
                "JavaScript",
                "TypeScript",
                "Tailwind CSS",
                "HTML5",
                "CSS3",
                "Node.js",
                "Vite",
                "Figma"
            ]
        );
        assert_eq!(SKILLS[0].icon, Icon::Atom);
        assert_eq!(SKILLS[8].icon, Icon::Pencil);
    }

    #[test]
    fn test_projects_table() {
        let titles = PROJECTS.iter().map(|p| p.title).collect::<Vec<_>>();
        assert_eq!(titles, vec!["Project One", "Project Two", "Project Three"]);
        assert_eq!(PROJECTS[1].technologies, &["React", "Node.js", "WebSockets"]);
        assert!(PROJECTS.iter().all(|p| p.technologies.len() == 3));
    }

    #[test]
    fn test_copyright_year_is_build_year() {
        let year = copyright_year();
        assert!(year >= 2024);
        assert!(year <= Utc::now().year());
    }

    #[test]
    fn test_icon_classes_are_distinct() {
        let icons = [
            Icon::Menu,
            Icon::Close,
            Icon::Github,
            Icon::Linkedin,
            Icon::Twitter,
            Icon::Mail,
            Icon::Code,
            Icon::Palette,
            Icon::Server,
            Icon::Zap,
            Icon::Pencil,
            Icon::Atom,
            Icon::Brackets,
            Icon::ExternalLink,
        ];
        let mut classes = icons.iter().map(|i| i.class_name()).collect::<Vec<_>>();
        classes.sort();
        classes.dedup();
        assert_eq!(classes.len(), icons.len());
        assert!(classes.iter().all(|c| c.starts_with("icon-")));
    }
}
