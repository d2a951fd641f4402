use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::api::PortfolioClient;
use crate::db::{Experience, PersonalInfo, Project, Skill};
use crate::error::PortfolioError;

/// Everything the portfolio page renders, one field per section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioSnapshot {
    pub personal: PersonalInfo,
    pub social: BTreeMap<String, Option<String>>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub experience: Vec<Experience>,
}

fn s(v: &str) -> Option<String> {
    Some(v.to_string())
}

fn project(
    id: &str,
    title: &str,
    description: &str,
    tags: &[&str],
    image: &str,
    live_url: Option<&str>,
    github_url: Option<&str>,
) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        image: s(image),
        live_url: live_url.map(str::to_string),
        github_url: github_url.map(str::to_string),
        created_at: None,
        updated_at: None,
    }
}

fn skill(id: i64, name: &str, level: i64, category: &str) -> Skill {
    Skill {
        id,
        name: name.to_string(),
        level: Some(level),
        category: category.to_string(),
        created_at: None,
        updated_at: None,
    }
}

fn experience(id: i64, title: &str, company: &str, period: &str, description: &str) -> Experience {
    Experience {
        id,
        title: title.to_string(),
        company: company.to_string(),
        period: period.to_string(),
        description: s(description),
        created_at: None,
        updated_at: None,
    }
}

impl PortfolioSnapshot {
    /// Built-in content shown when the API has nothing to offer.
    pub fn fallback() -> Self {
        let personal = PersonalInfo {
            id: 0,
            name: "Alex Rivera".to_string(),
            title: "Full-Stack Developer & UI Designer".to_string(),
            tagline: s("Crafting digital experiences that inspire and perform"),
            email: "hello@alexrivera.dev".to_string(),
            phone: s("+1 (555) 123-4567"),
            location: s("San Francisco, CA"),
            bio: s("I'm a passionate developer with 8+ years of experience building scalable web \
                    applications and beautiful user interfaces. I specialize in React, TypeScript, \
                    and Node.js, with a keen eye for design and user experience."),
            avatar: s("/avatar.png"),
            resume_url: s("/resume.pdf"),
            created_at: None,
            updated_at: None,
        };

        let social = [
            ("github", "https://github.com"),
            ("linkedin", "https://linkedin.com"),
            ("twitter", "https://twitter.com"),
            ("dribbble", "https://dribbble.com"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), s(v)))
        .collect();

        let projects = vec![
            project(
                "1",
                "FinFlow Dashboard",
                "A comprehensive financial analytics dashboard with real-time data visualization and AI-powered insights.",
                &["React", "TypeScript", "D3.js", "Node.js"],
                "/projects/finflow.png",
                Some("https://example.com"),
                Some("https://github.com"),
            ),
            project(
                "2",
                "EcoTrack Mobile",
                "Sustainability tracking app that helps users reduce their carbon footprint with gamified challenges.",
                &["React Native", "Firebase", "Redux"],
                "/projects/ecotrack.png",
                Some("https://example.com"),
                None,
            ),
            project(
                "3",
                "Artisan Marketplace",
                "E-commerce platform connecting local artisans with global customers, featuring AR product previews.",
                &["Next.js", "Stripe", "PostgreSQL", "AR.js"],
                "/projects/artisan.png",
                Some("https://example.com"),
                Some("https://github.com"),
            ),
            project(
                "4",
                "HealthSync API",
                "RESTful API service for health data aggregation from multiple wearable devices and platforms.",
                &["Node.js", "GraphQL", "MongoDB", "Docker"],
                "/projects/healthsync.png",
                None,
                Some("https://github.com"),
            ),
        ];

        let skills = vec![
            skill(1, "React / Next.js", 95, "Frontend"),
            skill(2, "TypeScript", 90, "Frontend"),
            skill(3, "Node.js", 88, "Backend"),
            skill(4, "PostgreSQL", 85, "Backend"),
            skill(5, "Tailwind CSS", 92, "Frontend"),
            skill(6, "GraphQL", 82, "Backend"),
            skill(7, "Docker", 78, "DevOps"),
            skill(8, "AWS", 75, "DevOps"),
        ];

        let experience = vec![
            experience(
                3,
                "Senior Full-Stack Developer",
                "TechVentures Inc.",
                "2021 - Present",
                "Leading development of enterprise SaaS products serving 50K+ users.",
            ),
            experience(
                2,
                "Frontend Developer",
                "DesignLab Studio",
                "2018 - 2021",
                "Built responsive web applications and design systems for Fortune 500 clients.",
            ),
            experience(
                1,
                "Junior Developer",
                "StartupHub",
                "2016 - 2018",
                "Developed MVP products for early-stage startups in the fintech space.",
            ),
        ];

        Self {
            personal,
            social,
            projects,
            skills,
            experience,
        }
    }

    /// Group skills by category, keeping their incoming order within a group.
    pub fn skills_by_category(&self) -> BTreeMap<&str, Vec<&Skill>> {
        let mut grouped: BTreeMap<&str, Vec<&Skill>> = BTreeMap::new();
        for skill in &self.skills {
            grouped.entry(skill.category.as_str()).or_default().push(skill);
        }
        grouped
    }
}

/// Keep live data unless the fetch failed or came back empty.
fn or_fallback<T>(
    section: &'static str,
    live: Result<T, PortfolioError>,
    is_empty: impl Fn(&T) -> bool,
    fallback: T,
) -> T {
    match live {
        Ok(v) if !is_empty(&v) => v,
        Ok(_) => fallback,
        Err(e) => {
            warn!(section, error = %e, "using built-in content");
            fallback
        }
    }
}

/// Fetch every section from the API, substituting built-in content per section.
pub async fn load_snapshot(client: &PortfolioClient) -> PortfolioSnapshot {
    let (personal, social, projects, skills, experience) = tokio::join!(
        client.get_personal(),
        client.social_links(),
        client.list_projects(),
        client.list_skills(),
        client.list_experience(),
    );

    let PortfolioSnapshot {
        personal: fb_personal,
        social: fb_social,
        projects: fb_projects,
        skills: fb_skills,
        experience: fb_experience,
    } = PortfolioSnapshot::fallback();

    PortfolioSnapshot {
        personal: or_fallback("personal", personal, Option::is_none, None).unwrap_or(fb_personal),
        social: or_fallback("social", social, BTreeMap::is_empty, fb_social),
        projects: or_fallback("projects", projects, Vec::is_empty, fb_projects),
        skills: or_fallback("skills", skills, Vec::is_empty, fb_skills),
        experience: or_fallback("experience", experience, Vec::is_empty, fb_experience),
    }
}
