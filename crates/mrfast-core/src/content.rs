//! Static page content
//!
//! Every table is returned in display order. Entries have no identity beyond
//! their position.

pub struct ServiceEntry {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    /// Tailwind gradient stops for the card background
    pub gradient: &'static str,
}

pub fn services() -> Vec<ServiceEntry> {
    vec![
        ServiceEntry {
            icon: "\u{1F50D}",
            title: "SEO & Local Search",
            desc: "Get found by customers actively searching for what you offer. Deep expertise in Northeast Florida local SEO\u{2014}because I live here too.",
            gradient: "from-emerald-500/20 to-teal-500/20",
        },
        ServiceEntry {
            icon: "\u{1F4F1}",
            title: "Social Media Management",
            desc: "Strategic content that builds your brand and engages your community. Not just posts for the sake of posting\u{2014}real strategy with real results.",
            gradient: "from-pink-500/20 to-rose-500/20",
        },
        ServiceEntry {
            icon: "\u{1F4BB}",
            title: "Web Design & Development",
            desc: "Clean, fast websites that convert visitors into customers. No cookie-cutter templates\u{2014}built specifically for your business needs.",
            gradient: "from-violet-500/20 to-purple-500/20",
        },
        ServiceEntry {
            icon: "\u{1F3AC}",
            title: "Video Production & AI Video",
            desc: "From concept to final cut\u{2014}traditional video production, professional editing, plus cutting-edge generative AI video creation for next-level content.",
            gradient: "from-orange-500/20 to-amber-500/20",
        },
    ]
}

pub struct ValueProp {
    pub number: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub fn value_props() -> Vec<ValueProp> {
    vec![
        ValueProp {
            number: "01",
            icon: "\u{1F464}",
            title: "Direct Access",
            desc: "Work directly with me\u{2014}not an account manager who has to 'check with the team.'",
        },
        ValueProp {
            number: "02",
            icon: "\u{1F4CD}",
            title: "Local Expert",
            desc: "I live in Ponte Vedra. I know your customers because they're my neighbors.",
        },
        ValueProp {
            number: "03",
            icon: "\u{1F91D}",
            title: "No Overpromising",
            desc: "I won't sell you magic beans. Honest expectations, real results, actual effort.",
        },
        ValueProp {
            number: "04",
            icon: "\u{26A1}",
            title: "Hands-On Work",
            desc: "No 'set it and forget it' here. I stay engaged and keep things moving.",
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Live,
    ComingSoon,
    InDevelopment,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Live => "Live",
            ProjectStatus::ComingSoon => "Coming Soon",
            ProjectStatus::InDevelopment => "In Development",
        }
    }

    /// Background class for the status badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            ProjectStatus::Live => "bg-emerald-500",
            ProjectStatus::ComingSoon => "bg-amber-500",
            ProjectStatus::InDevelopment => "bg-cyan-500",
        }
    }
}

pub struct ProjectEntry {
    pub name: &'static str,
    pub status: ProjectStatus,
    /// Bare host, shown as link text
    pub url: Option<&'static str>,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub emoji: &'static str,
}

impl ProjectEntry {
    pub fn external_href(&self) -> Option<String> {
        self.url.map(|host| format!("https://{host}"))
    }
}

pub fn projects() -> Vec<ProjectEntry> {
    vec![
        ProjectEntry {
            name: "Best Yet Resume",
            status: ProjectStatus::Live,
            url: Some("bestyetresume.com"),
            description: "AI-powered resume tailoring that helps job seekers optimize their applications ethically\u{2014}improving keyword alignment and formatting without fabricating experience.",
            tags: &["React", "AI Integration", "Stripe Payments"],
            emoji: "\u{1F4C4}",
        },
        ProjectEntry {
            name: "NanaBooks",
            status: ProjectStatus::ComingSoon,
            url: Some("nanabooks.com"),
            description: "Transform grandmothers' life stories into beautifully illustrated children's storybooks. Preserving precious family memories for kids ages 3-8.",
            tags: &["Bubble.io", "Claude AI", "Print-on-Demand"],
            emoji: "\u{1F4DA}",
        },
        ProjectEntry {
            name: "GrandpaBooks",
            status: ProjectStatus::ComingSoon,
            url: Some("grandpabooks.com"),
            description: "The companion to NanaBooks\u{2014}turning grandfathers' adventures and wisdom into magical storybooks for the next generation.",
            tags: &["Bubble.io", "Claude AI", "Print-on-Demand"],
            emoji: "\u{1F4D6}",
        },
        ProjectEntry {
            name: "ReplyMed AI",
            status: ProjectStatus::InDevelopment,
            url: None,
            description: "AI-powered appointment booking for medspas. Instant, intelligent responses 24/7 across Instagram DMs, SMS, and email.",
            tags: &["Make.com", "Claude AI", "Zenoti Integration"],
            emoji: "\u{1F3E5}",
        },
    ]
}

pub struct ExperienceEntry {
    pub years: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub desc: &'static str,
}

pub fn experience() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            years: "2024 \u{2013} Present",
            role: "Founder",
            company: "Mr Fast Digital Marketing",
            desc: "Full-service digital marketing for Northeast Florida small businesses.",
        },
        ExperienceEntry {
            years: "2014 \u{2013} 2024",
            role: "Operations Manager",
            company: "Ideal Image (4 Locations)",
            desc: "Managed operations for 4 franchise locations\u{2014}learned the reality of running a small business from behind the scenes.",
        },
        ExperienceEntry {
            years: "2002 \u{2013} 2010",
            role: "Account Executive",
            company: "Beyond Zebra",
            desc: "Led campaigns for Disney, Warner Bros., and Fortune 500 clients.",
        },
        ExperienceEntry {
            years: "1998 \u{2013} 2002",
            role: "Product Development",
            company: "Disney Store & Promotional Products",
            desc: "Developed products and promotional items for premium Disney properties.",
        },
        ExperienceEntry {
            years: "1996 \u{2013} 1997",
            role: "Assistant Director",
            company: "\"Ready or Not\" - Disney Channel",
            desc: "Coordinated production departments for weekly TV series in Toronto.",
        },
    ]
}

/// Timeline entries alternate sides; even rows sit on the left
pub fn timeline_is_left(index: usize) -> bool {
    index % 2 == 0
}

pub const CERTIFICATION_ISSUER: &str = "University of North Florida";

pub fn certifications() -> Vec<&'static str> {
    vec![
        "AI for Professionals Certificate",
        "AI Business Innovator",
        "AI for Enhanced Collaboration & Communication",
        "AI Exploration for Professionals",
    ]
}

/// A label in the skills cloud
pub type SkillTag = &'static str;

pub fn skills() -> Vec<SkillTag> {
    vec![
        "SEO & Local Search",
        "Social Media Strategy",
        "Content Creation",
        "Video Production",
        "Video Editing",
        "AI Video Generation",
        "Web Design",
        "Email Marketing",
        "AI Tools",
        "Campaign Management",
        "Brand Development",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(services().len(), 4);
        assert_eq!(value_props().len(), 4);
        assert_eq!(projects().len(), 4);
        assert_eq!(experience().len(), 5);
        assert_eq!(certifications().len(), 4);
        assert_eq!(skills().len(), 11);
    }

    #[test]
    fn test_value_props_are_numbered_in_order() {
        let numbers: Vec<_> = value_props().iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec!["01", "02", "03", "04"]);
    }

    #[test]
    fn test_project_external_href() {
        let projects = projects();
        assert_eq!(
            projects[0].external_href().as_deref(),
            Some("https://bestyetresume.com")
        );
        let replymed = projects.iter().find(|p| p.name == "ReplyMed AI").unwrap();
        assert_eq!(replymed.external_href(), None);
    }

    #[test]
    fn test_project_status_labels_and_badges() {
        assert_eq!(ProjectStatus::Live.label(), "Live");
        assert_eq!(ProjectStatus::ComingSoon.label(), "Coming Soon");
        assert_eq!(ProjectStatus::InDevelopment.label(), "In Development");
        assert_eq!(ProjectStatus::InDevelopment.badge_class(), "bg-cyan-500");
    }

    #[test]
    fn test_timeline_alternates_from_left() {
        let sides: Vec<_> = (0..experience().len()).map(timeline_is_left).collect();
        assert_eq!(sides, vec![true, false, true, false, true]);
    }

    #[test]
    fn test_timeline_starts_with_current_role() {
        let first = &experience()[0];
        assert_eq!(first.role, "Founder");
        assert!(first.years.ends_with("Present"));
    }

    #[test]
    fn test_every_project_has_tags() {
        assert!(projects().iter().all(|p| !p.tags.is_empty()));
    }
}
