//! The static portfolio data set.

use crate::constants::GITHUB_PROFILE_URL;
use crate::content::{
    Achievement, AchievementKind, Certification, ChannelKind, ContactChannel, Education,
    Highlight, Profile, Project, Skill, SkillCategory, SocialKind, SocialLink, Stat,
};

pub const PROFILE: Profile = Profile {
    name: "Ashish Raj",
    headline: "Computer Science Engineering Student",
    location: "Nalanda, Bihar, India",
    email: "ashishraj875718@gmail.com",
    phone: "+91 7858074043",
    phone_href: "tel:+917858074043",
    bio: &[
        "I'm a passionate Computer Science Engineering student at Tula's Institute, Dehradun, \
         with a strong foundation in programming and problem-solving. My journey in tech began \
         with curiosity and has evolved into a deep commitment to creating innovative solutions.",
        "I specialize in C++ with Data Structures & Algorithms, Python development, and web \
         technologies. I'm always eager to take on new challenges and contribute to meaningful \
         projects that make a difference.",
    ],
    traits: &["Problem Solving", "Team Collaboration", "Innovation", "Leadership"],
    summary: "Computer Science Engineering student passionate about creating innovative \
              solutions and building meaningful projects that make a difference.",
};

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub", href: GITHUB_PROFILE_URL, kind: SocialKind::Github },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/ashish-raj-87531428b/",
        kind: SocialKind::Linkedin,
    },
    SocialLink { label: "Portfolio", href: "#", kind: SocialKind::Website },
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        kind: ChannelKind::Email,
        label: "Email",
        value: "ashishraj875718@gmail.com",
        href: Some("mailto:ashishraj875718@gmail.com"),
    },
    ContactChannel {
        kind: ChannelKind::Phone,
        label: "Phone",
        value: "+91 7858074043",
        href: Some("tel:+917858074043"),
    },
    ContactChannel {
        kind: ChannelKind::Location,
        label: "Location",
        value: "Nalanda, Bihar, India",
        href: None,
    },
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Problem Solver",
        description: "Passionate about solving complex problems through code and innovative thinking.",
    },
    Highlight {
        title: "Creative Thinker",
        description: "Always exploring new ideas and approaches to build better solutions.",
    },
    Highlight {
        title: "Goal-Oriented",
        description: "Focused on continuous learning and achieving excellence in every project.",
    },
];

pub const EDUCATION: &[Education] = &[
    Education {
        id: 1,
        degree: "B.Tech Computer Science Engineering",
        institution: "Tula's Institute",
        location: "Dehradun",
        year: "2022–2026",
        grade: "CGPA 7.6/10",
    },
    Education {
        id: 2,
        degree: "12th Grade (Intermediate)",
        institution: "Sadanand Intermediate College",
        location: "Bihar",
        year: "2021",
        grade: "63.3%",
    },
    Education {
        id: 3,
        degree: "10th Grade (High School)",
        institution: "Adarsh High School",
        location: "Bihar",
        year: "2019",
        grade: "73.55%",
    },
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        id: 1,
        title: "Data Structure in C++",
        issuer: "Scaler",
        year: "2024",
        description: Some("Comprehensive course covering advanced data structures and algorithms"),
    },
    Certification {
        id: 2,
        title: "Python Programming",
        issuer: "RCPL",
        year: "2023",
        description: Some("Foundation course in Python programming language"),
    },
    Certification {
        id: 3,
        title: "Advanced Python",
        issuer: "ICT Academy",
        year: "2024",
        description: Some("Advanced concepts in Python including frameworks and libraries"),
    },
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "C++ with DSA", level: 85, category: SkillCategory::Programming },
    Skill { name: "Python", level: 70, category: SkillCategory::Programming },
    Skill { name: "HTML5", level: 80, category: SkillCategory::Frontend },
    Skill { name: "CSS3", level: 75, category: SkillCategory::Frontend },
    Skill { name: "JavaScript", level: 60, category: SkillCategory::Frontend },
    Skill { name: "DBMS", level: 75, category: SkillCategory::Core },
    Skill { name: "Computer Networks", level: 70, category: SkillCategory::Core },
    Skill { name: "Operating Systems", level: 70, category: SkillCategory::Core },
];

pub const COMPETENCIES: &[&str] = &[
    "Problem Solving",
    "Algorithms",
    "Data Structures",
    "Object-Oriented Programming",
    "Software Development",
    "Team Collaboration",
    "Project Management",
    "Critical Thinking",
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Portfolio Website",
        description: "A modern, responsive portfolio website deployed using GitHub Pages and \
                      Netlify. Features smooth animations and a clean design.",
        image: "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=600",
        technologies: &["Rust", "Dioxus", "CSS", "GitHub Pages", "Netlify"],
        live_url: Some("#"),
        github_url: Some(GITHUB_PROFILE_URL),
        status: None,
    },
    Project {
        id: 2,
        title: "QRIFY (HORECA Model)",
        description: "Hackathon-winning project that revolutionizes restaurant ordering through \
                      QR code-based digital menus. Winner of HackTheFuture1.0 competition.",
        image: "https://images.pexels.com/photos/4348404/pexels-photo-4348404.jpeg?auto=compress&cs=tinysrgb&w=600",
        technologies: &["React", "Node.js", "QR Codes", "Database", "Payment Gateway"],
        live_url: Some("#"),
        github_url: Some(GITHUB_PROFILE_URL),
        status: None,
    },
    Project {
        id: 3,
        title: "E-Commerce Website - StreetStylings",
        description: "A comprehensive e-commerce platform for fashion products. Currently in \
                      development with features for product catalog, shopping cart, and user \
                      authentication.",
        image: "https://images.pexels.com/photos/230544/pexels-photo-230544.jpeg?auto=compress&cs=tinysrgb&w=600",
        technologies: &["React", "Node.js", "MongoDB", "Express", "Payment Integration"],
        live_url: None,
        github_url: Some(GITHUB_PROFILE_URL),
        status: Some("In Progress"),
    },
];

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: 1,
        title: "First Runner-Up",
        description: "Achieved first runner-up position in HackTheFuture1.0, a competitive \
                      hackathon showcasing innovative tech solutions.",
        year: "2025",
        kind: AchievementKind::Competition,
    },
    Achievement {
        id: 2,
        title: "Winner - Ideathon",
        description: "Won the Ideathon competition at Uttaranchal University, demonstrating \
                      creative problem-solving and innovative thinking.",
        year: "2025",
        kind: AchievementKind::Competition,
    },
    Achievement {
        id: 3,
        title: "QRIFY Project Success",
        description: "Successfully developed and deployed QRIFY (HORECA Model), revolutionizing \
                      restaurant ordering systems through QR code technology.",
        year: "2024",
        kind: AchievementKind::Project,
    },
    Achievement {
        id: 4,
        title: "Academic Excellence",
        description: "Maintained consistent academic performance with CGPA 7.6/10 in Computer \
                      Science Engineering program.",
        year: "2022-2026",
        kind: AchievementKind::Academic,
    },
];

pub const ACHIEVEMENT_STATS: &[Stat] = &[
    Stat { value: "2", label: "Competition Wins" },
    Stat { value: "3+", label: "Major Projects" },
    Stat { value: "7.6", label: "Academic CGPA" },
    Stat { value: "3", label: "Certifications" },
];

pub const GITHUB_STATS: &[Stat] = &[
    Stat { value: "50+", label: "Commits This Year" },
    Stat { value: "10+", label: "Public Repositories" },
    Stat { value: "5+", label: "Programming Languages" },
];

/// Skills of one category, in declaration order.
pub fn skills_in(category: SkillCategory) -> impl Iterator<Item = &'static Skill> {
    SKILLS.iter().filter(move |s| s.category == category)
}
