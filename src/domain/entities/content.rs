use serde::Serialize;

// Fixed profile content served straight from memory. None of this warrants
// a table: it changes with a redeploy, not at runtime.

#[derive(Debug, Clone, Serialize)]
pub struct PersonalInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub bio: &'static str,
    pub avatar_url: &'static str,
    pub social: SocialLinks,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLinks {
    pub github: &'static str,
    pub linkedin: &'static str,
    pub instagram: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteConfig {
    pub site_name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub language: &'static str,
    pub copyright: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceItem {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct Certificate {
    pub title: &'static str,
    pub issuer: &'static str,
    pub issued: &'static str,
    pub credential_url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlogPostSummary {
    pub title: &'static str,
    pub slug: &'static str,
    pub excerpt: &'static str,
    pub published_at: &'static str,
    pub tags: &'static [&'static str],
}
