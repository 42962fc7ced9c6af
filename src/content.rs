/// Static page content
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub github: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Milestone {
    pub title: &'static str,
    pub place: &'static str,
    pub duration: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub const OWNER: &str = "Thavindu Liyanage";
pub const HANDLE: &str = "@Thavindur_dev";
pub const GITHUB_USER: &str = "IthavinduU";

pub const HERO_ROLES: &[&str] = &["Software Engineer", "Web Developer", "Tech Enthusiast"];

pub const HERO_LINKS: &[Link] = &[
    Link { label: "GitHub", href: "https://github.com/IthavinduU" },
    Link { label: "LinkedIn", href: "https://www.linkedin.com/in/thavinduliyanage" },
    Link { label: "Email", href: "mailto:thilinaThavinduLiyanage@gmail.com" },
    Link { label: "Medium", href: "https://medium.com/@thavinduwrites" },
    Link { label: "Buy Me a Coffee", href: "https://buymeacoffee.com/Odbb0q1cZY" },
];

pub const RESUME_URL: &str = "https://drive.google.com/file/d/1_mrHJFLABuvJkcCa9dDuvDkX2SrN0_51/view?usp=sharing";

pub const TAGLINES: &[&str] = &[
    "Let's Code the Tomorrow's World.",
    "One Line at a Time...",
    "Building Dreams with Code.",
    "Innovating the Future.",
];

/// How long each tagline stays in the terminal
pub const TAGLINE_INTERVAL_MS: u32 = 3000;

/// Index of the tagline shown after `index`, wrapping around
pub fn next_tagline(index: usize) -> usize {
    (index + 1) % TAGLINES.len()
}

pub const ABOUT_TEXT: &str = "I'm a passionate software engineer specializing in developing web and mobile \
applications. Proficient in JavaScript, React, Node.js, and Python, I enjoy solving complex problems \
and building innovative solutions.";

pub const AVATAR_URL: &str =
    "https://github.com/ThavinduLiyanage/Portfolio_React/blob/main/src/assets/cover3_053717.jpg?raw=true";

pub const SKILLS: &[&str] = &["JavaScript", "React", "Node.js", "Python", "HTML", "CSS", "Git", "SQL", "AWS"];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "EmotiLive : Real Time Student Monitoring System",
        description: "AI-powered classroom tool for monitoring student engagement & emotional state in real time.",
        technologies: &["Python", "TensorFlow", "ESRGAN", "OpenCV", "Flask", "NextJS", "MongoDB"],
        github: "https://github.com/IthavinduU/EmotiLive--FS",
    },
    Project {
        title: "Dice Maniacs: Android Game",
        description: "A Dice Roller game mobile application built using Android Studio with Kotlin, featuring multiplayer mode.",
        technologies: &["Kotlin", "Android Studio", "XML"],
        github: "https://github.com/IthavinduU/Dice-Maniacs",
    },
    Project {
        title: "Prettify : Face Enhancement Application",
        description: "A face beautification application focused on acne detection and removal using a deep CNN model \
and digital inpainting. With the integration of CI-CD Pipeline, building, testing and deployment has been automated.",
        technologies: &["Python", "Dart/Flutter", "Firebase", "Docker", "Jenkins"],
        github: "https://github.com/IthavinduU/Prettify",
    },
    Project {
        title: "Custom-Color-Contrast-Checker",
        description: "A Node.js package designed to check the contrast ratio between two colors and verify their \
compliance with WCAG accessibility standards. Supports hex, rgb(), rgba(), CLI and JS API.",
        technologies: &["Python", "Node.js", "NPM", "HTML5"],
        github: "https://github.com/IthavinduU/color-contrast-checker",
    },
];

pub const EDUCATION: &[Milestone] = &[
    Milestone {
        title: "BSc. (Hons) Computer Science",
        place: "University of Westminster - United Kingdom",
        duration: "2021 - 2025",
        details: &[
            "Major in Backend Development",
            "Final Year Research Project: AI-based Student Monitoring System",
        ],
    },
    Milestone {
        title: "BSc.(Hons) Physical Science (On Hold)",
        place: "South Eastern University - Sri Lanka",
        duration: "2022 - 2026",
        details: &["Major in Computer Engineering"],
    },
    Milestone {
        title: "G.C.E. Advanced Level (Physical Science Stream)",
        place: "Kingswood College - Kandy",
        duration: "2007 - 2020",
        details: &["Completed GCE Advanced Levels in physical science stream with 3 passes"],
    },
];

pub const EXPERIENCE: &[Milestone] = &[
    Milestone {
        title: "Software Engineering Intern",
        place: "Petvisor - United Kingdom",
        duration: "June 2023 - June 2024",
        details: &[
            "Worked on a real-time appointment booking system running on a PHP(Phalcon) back-end and Vue front-end.",
        ],
    },
    Milestone {
        title: "Freelance Developer",
        place: "Upwork - Remote",
        duration: "2020 - Present",
        details: &["Delivering high-quality, streamlined software and web solutions tailored to diverse client requirements."],
    },
    Milestone {
        title: "Technical Writer",
        place: "Medium",
        duration: "2023 - Present",
        details: &["Contributing to the community with the knowledge I pursue throughout my technical journey."],
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Web Development",
        description: "Creating responsive, functional websites tailored to your needs, from front-end to back-end.",
    },
    Service {
        title: "UI/UX Design",
        description: "Designing intuitive, user-friendly interfaces that enhance user experience and engagement.",
    },
    Service {
        title: "Mobile Development",
        description: "Building mobile apps for iOS and Android, ensuring seamless user experiences across platforms.",
    },
    Service {
        title: "Article Writing",
        description: "Delivering well-crafted articles that communicate your message effectively and resonate with your audience.",
    },
    Service {
        title: "IT Consultation",
        description: "Offering expert IT advice to optimize your technology strategies and drive business growth.",
    },
];

pub const TECH_STACK: &[&str] = &[
    "Python", "Kotlin", "Go", "Rust", "PHP", "Bash", "JavaScript", "Flutter", "C++", "React", "Vue", "Next.js",
    "Node.js", "Express", "Laravel", "Docker", "Kubernetes", "Git", "Bitbucket", "Jenkins", "Postman", "Linux",
    "MongoDB", "PostgreSQL",
];

pub const SOCIAL_LINKS: &[Link] = &[
    Link { label: "Facebook", href: "https://www.facebook.com/t.Thavindu.rathayaka?mibextid=ZbWKwL" },
    Link { label: "Twitter", href: "https://x.com/Thavindu_rathnaya?s=09" },
    Link { label: "Instagram", href: "https://www.instagram.com/Thavindu__Liyanage?igsh=MjdhcHlpdjd6NnR6" },
    Link { label: "LinkedIn", href: "https://www.linkedin.com/in/Thavindu-Liyanage-02631b1b8/" },
    Link { label: "GitHub", href: "https://github.com/ThavinduLiyanage" },
];

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d271.86963478290323!2d80.62798324714622!3d7.287091688842843!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3ae369c6f9dcd711%3A0xca97089e2522d149!2sSupreme%20Catering%20%26%20Event%20items%2C%20Kandy!5e0!3m2!1sen!2slk!4v1748666726361!5m2!1sen!2slk";

/// GitHub profile cards (stats and top languages)
pub fn github_stats_urls(user: &str) -> [String; 2] {
    [
        format!("https://github-readme-stats.vercel.app/api?username={}&show_icons=true&theme=tokyonight", user),
        format!(
            "https://github-readme-stats.vercel.app/api/top-langs/?username={}&layout=compact&theme=tokyonight",
            user
        ),
    ]
}
