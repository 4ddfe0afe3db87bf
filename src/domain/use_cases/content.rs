use crate::entities::content::{
    BlogPostSummary, Certificate, ExperienceItem, PersonalInfo, SiteConfig, SocialLinks,
};

pub fn personal_info() -> PersonalInfo {
    PersonalInfo {
        name: "Agi Muhammad Tengku Aqamaddin",
        title: "Frontend Developer & Informatics Student",
        email: "tengkuagi@gmail.com",
        location: "Yogyakarta, Indonesia",
        bio: "Saya adalah mahasiswa Teknik Informatika yang bersemangat dalam \
              pengembangan web dan desain antarmuka.",
        avatar_url: "https://avatars.githubusercontent.com/u/202240388?v=4",
        social: SocialLinks {
            github: "https://github.com/tengkuagi",
            linkedin: "https://www.linkedin.com/in/tengkuagi",
            instagram: "https://www.instagram.com/tengkuagi",
        },
    }
}

pub fn site_config() -> SiteConfig {
    SiteConfig {
        site_name: "Tengku Agi — Portfolio",
        tagline: "Web development & interface design",
        description: "Personal portfolio of Agi Muhammad Tengku Aqamaddin: \
                      projects, skills, education, and writing.",
        language: "id",
        copyright: "© 2025 Agi Muhammad Tengku Aqamaddin",
    }
}

pub fn experience() -> Vec<ExperienceItem> {
    vec![
        ExperienceItem {
            role: "Frontend Developer (Freelance)",
            company: "CutsProject Barbershop",
            period: "2024 - Sekarang",
            location: "Yogyakarta, Indonesia",
            description: "Membangun website barbershop modern dengan sistem booking online.",
            highlights: &[
                "Vue.js storefront with an Express.js booking API",
                "PostgreSQL schedule and customer data model",
            ],
        },
        ExperienceItem {
            role: "Web Division Member",
            company: "Amikom Computer Club",
            period: "2023 - Sekarang",
            location: "Universitas Amikom Yogyakarta",
            description: "Mengembangkan situs kegiatan kampus bersama tim divisi web.",
            highlights: &[
                "Event landing pages in React",
                "Mentoring sessions for new members",
            ],
        },
    ]
}

pub fn certificates() -> Vec<Certificate> {
    vec![
        Certificate {
            title: "Belajar Membuat Front-End Web untuk Pemula",
            issuer: "Dicoding Indonesia",
            issued: "2024-03",
            credential_url: "https://www.dicoding.com/certificates/front-end-pemula",
        },
        Certificate {
            title: "Belajar Dasar Pemrograman JavaScript",
            issuer: "Dicoding Indonesia",
            issued: "2023-11",
            credential_url: "https://www.dicoding.com/certificates/javascript-dasar",
        },
        Certificate {
            title: "Responsive Web Design",
            issuer: "freeCodeCamp",
            issued: "2023-08",
            credential_url: "https://www.freecodecamp.org/certification/tengkuagi/responsive-web-design",
        },
    ]
}

pub fn blog_posts() -> Vec<BlogPostSummary> {
    vec![
        BlogPostSummary {
            title: "Pengalaman Membangun Booking System dengan Vue.js",
            slug: "booking-system-vuejs",
            excerpt: "Catatan dari proyek CutsProject: komposisi komponen, state \
                      management, dan integrasi API booking.",
            published_at: "2025-02-14",
            tags: &["vuejs", "postgresql", "case-study"],
        },
        BlogPostSummary {
            title: "TypeScript untuk Pemula yang Terlanjur Nyaman di JavaScript",
            slug: "typescript-untuk-pemula",
            excerpt: "Kenapa tipe statis layak dicoba, dan bagaimana memigrasikan \
                      proyek kecil tanpa menulis ulang semuanya.",
            published_at: "2024-10-02",
            tags: &["typescript", "javascript"],
        },
        BlogPostSummary {
            title: "Mengenal React Native lewat Proyek Mental Health Sobat",
            slug: "react-native-mental-health-sobat",
            excerpt: "Eksperimen pertama membawa kebiasaan web ke aplikasi mobile.",
            published_at: "2024-06-21",
            tags: &["react-native", "firebase"],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn personal_info_matches_seeded_owner() {
        let info = personal_info();
        assert_eq!(info.email, "tengkuagi@gmail.com");
        assert!(info.email.contains('@'));
        assert!(!info.name.is_empty());
    }

    #[test]
    fn providers_return_non_empty_collections() {
        assert!(!experience().is_empty());
        assert!(!certificates().is_empty());
        assert!(!blog_posts().is_empty());
    }

    #[test]
    fn blog_post_slugs_are_unique() {
        let posts = blog_posts();
        let mut slugs: Vec<_> = posts.iter().map(|p| p.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), posts.len());
    }
}
