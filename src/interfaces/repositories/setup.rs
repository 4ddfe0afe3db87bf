use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use crate::{errors::AppError, repositories::sqlx_repo::SqlxSetupRepo};

#[async_trait]
pub trait SetupRepository: Send + Sync {
    /// Idempotently ensure the four tables exist. Statements run in order
    /// with no transaction: tables already created stay created when a
    /// later statement fails.
    async fn create_tables(&self) -> Result<(), AppError>;

    /// Insert the fixed initial rows. Only the user insert is
    /// conflict-checked (on email); re-seeding duplicates the project,
    /// skill, and education rows.
    async fn seed_initial_data(&self) -> Result<(), AppError>;
}

const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id SERIAL PRIMARY KEY,
    name VARCHAR(100) NOT NULL,
    email VARCHAR(100) UNIQUE NOT NULL,
    bio TEXT,
    avatar_url VARCHAR(255),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const CREATE_PROJECTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS projects (
    id SERIAL PRIMARY KEY,
    title VARCHAR(200) NOT NULL,
    description TEXT NOT NULL,
    image_url VARCHAR(255),
    tech_stack TEXT[],
    github_url VARCHAR(255),
    live_url VARCHAR(255),
    status VARCHAR(50) NOT NULL DEFAULT 'completed',
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const CREATE_SKILLS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS skills (
    id SERIAL PRIMARY KEY,
    name VARCHAR(100) NOT NULL,
    level VARCHAR(50) NOT NULL,
    category VARCHAR(50),
    icon_url VARCHAR(255),
    experience VARCHAR(50),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const CREATE_EDUCATION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS education (
    id SERIAL PRIMARY KEY,
    institution VARCHAR(200) NOT NULL,
    major VARCHAR(200),
    degree VARCHAR(100),
    period VARCHAR(100),
    location VARCHAR(200),
    description TEXT,
    status VARCHAR(50) NOT NULL DEFAULT 'completed',
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const INSERT_SEED_USER: &str = r#"
INSERT INTO users (name, email, bio, avatar_url)
VALUES ($1, $2, $3, $4)
ON CONFLICT (email) DO NOTHING
"#;

struct SeedUser {
    name: &'static str,
    email: &'static str,
    bio: &'static str,
    avatar_url: &'static str,
}

struct SeedProject {
    title: &'static str,
    description: &'static str,
    image_url: &'static str,
    tech_stack: &'static [&'static str],
    status: &'static str,
}

struct SeedSkill {
    name: &'static str,
    level: &'static str,
    category: &'static str,
    experience: &'static str,
}

struct SeedEducation {
    institution: &'static str,
    major: &'static str,
    degree: &'static str,
    period: &'static str,
    location: &'static str,
    status: &'static str,
}

const SEED_USER: SeedUser = SeedUser {
    name: "Agi Muhammad Tengku Aqamaddin",
    email: "tengkuagi@gmail.com",
    bio: "Saya adalah mahasiswa Teknik Informatika yang bersemangat dalam \
          pengembangan web dan desain antarmuka.",
    avatar_url: "https://avatars.githubusercontent.com/u/202240388?v=4",
};

const SEED_PROJECTS: &[SeedProject] = &[
    SeedProject {
        title: "Aplikasi Mental Health Sobat",
        description: "Platform kesehatan mental yang membantu pengguna untuk \
                      konsultasi dengan psikolog.",
        image_url: "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?w=500&h=300&fit=crop",
        tech_stack: &["React Native", "Firebase", "Node.js"],
        status: "coming-soon",
    },
    SeedProject {
        title: "Website Barbershop CutsProject",
        description: "Website modern untuk barbershop dengan sistem booking online.",
        image_url: "https://images.unsplash.com/photo-1503951914875-452162b0f3f1?w=500&h=300&fit=crop",
        tech_stack: &["Vue.js", "Express.js", "PostgreSQL"],
        status: "on-progress",
    },
];

const SEED_SKILLS: &[SeedSkill] = &[
    SeedSkill { name: "Vue.js", level: "Mahir", category: "Frontend", experience: "2+ years" },
    SeedSkill { name: "JavaScript", level: "Mahir", category: "Programming Language", experience: "3+ years" },
    SeedSkill { name: "TypeScript", level: "Menengah", category: "Programming Language", experience: "1+ years" },
    SeedSkill { name: "React", level: "Menengah", category: "Frontend", experience: "1+ years" },
    SeedSkill { name: "Node.js", level: "Menengah", category: "Backend", experience: "1+ years" },
];

const SEED_EDUCATION: &[SeedEducation] = &[
    SeedEducation {
        institution: "Universitas Amikom Yogyakarta",
        major: "S1 - Informatika",
        degree: "Sarjana Komputer",
        period: "2023 - Sekarang",
        location: "Yogyakarta, Indonesia",
        status: "ongoing",
    },
    SeedEducation {
        institution: "Madrasah Aliyah Negeri Paser",
        major: "MIPA",
        degree: "Sekolah Menengah Atas",
        period: "2020 - 2023",
        location: "Paser, Kalimantan Timur",
        status: "completed",
    },
];

impl SqlxSetupRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxSetupRepo { pool }
    }
}

#[async_trait]
impl SetupRepository for SqlxSetupRepo {
    async fn create_tables(&self) -> Result<(), AppError> {
        info!("🔄 Setting up database tables...");

        sqlx::query(CREATE_USERS_TABLE).execute(&self.pool).await?;
        info!("✅ Users table created");

        sqlx::query(CREATE_PROJECTS_TABLE).execute(&self.pool).await?;
        info!("✅ Projects table created");

        sqlx::query(CREATE_SKILLS_TABLE).execute(&self.pool).await?;
        info!("✅ Skills table created");

        sqlx::query(CREATE_EDUCATION_TABLE).execute(&self.pool).await?;
        info!("✅ Education table created");

        Ok(())
    }

    async fn seed_initial_data(&self) -> Result<(), AppError> {
        info!("🔄 Inserting initial data...");

        sqlx::query(INSERT_SEED_USER)
            .bind(SEED_USER.name)
            .bind(SEED_USER.email)
            .bind(SEED_USER.bio)
            .bind(SEED_USER.avatar_url)
            .execute(&self.pool)
            .await?;

        for project in SEED_PROJECTS {
            let tech_stack: Vec<String> =
                project.tech_stack.iter().map(|s| s.to_string()).collect();

            sqlx::query(
                "INSERT INTO projects (title, description, image_url, tech_stack, status) \
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(project.title)
            .bind(project.description)
            .bind(project.image_url)
            .bind(tech_stack)
            .bind(project.status)
            .execute(&self.pool)
            .await?;
        }

        for skill in SEED_SKILLS {
            sqlx::query(
                "INSERT INTO skills (name, level, category, experience) VALUES ($1, $2, $3, $4)",
            )
            .bind(skill.name)
            .bind(skill.level)
            .bind(skill.category)
            .bind(skill.experience)
            .execute(&self.pool)
            .await?;
        }

        for education in SEED_EDUCATION {
            sqlx::query(
                "INSERT INTO education (institution, major, degree, period, location, status) \
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(education.institution)
            .bind(education.major)
            .bind(education.degree)
            .bind(education.period)
            .bind(education.location)
            .bind(education.status)
            .execute(&self.pool)
            .await?;
        }

        info!("✅ Initial data inserted successfully!");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_creation_is_idempotent() {
        for ddl in [
            CREATE_USERS_TABLE,
            CREATE_PROJECTS_TABLE,
            CREATE_SKILLS_TABLE,
            CREATE_EDUCATION_TABLE,
        ] {
            assert!(ddl.contains("CREATE TABLE IF NOT EXISTS"));
        }
    }

    // Only the user insert skips on conflict; re-seeding is additive for
    // everything else.
    #[test]
    fn only_the_user_seed_is_conflict_checked() {
        assert!(INSERT_SEED_USER.contains("ON CONFLICT (email) DO NOTHING"));
    }

    #[test]
    fn seed_row_counts_match_the_fixed_dataset() {
        assert_eq!(SEED_PROJECTS.len(), 2);
        assert_eq!(SEED_SKILLS.len(), 5);
        assert_eq!(SEED_EDUCATION.len(), 2);
    }

    #[test]
    fn seed_user_email_is_unique_key_material() {
        assert!(SEED_USER.email.contains('@'));
        assert!(CREATE_USERS_TABLE.contains("email VARCHAR(100) UNIQUE NOT NULL"));
    }
}
