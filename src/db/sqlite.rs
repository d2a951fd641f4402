use crate::db::models::{Experience, PersonalInfo, Project, Skill, SocialLink};
use crate::db::schema::SQLITE_INIT;
use crate::error::PortfolioError;
use crate::types::{ExperienceInput, PersonalInput, ProjectInput, SkillInput};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::collections::BTreeMap;
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct PortfolioStorage {
    pool: SqlitePool,
}

impl PortfolioStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database at `database_url`.
    pub async fn connect(database_url: &str) -> Result<Self, PortfolioError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), PortfolioError> {
        // sqlx::query runs a single statement, so split the script.
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn count_rows(&self, table: &'static str) -> Result<i64, PortfolioError> {
        let rec: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }

    // ---- personal_info ----

    /// The most recently inserted row, if any.
    pub async fn latest_personal(&self) -> Result<Option<PersonalInfo>, PortfolioError> {
        let row = sqlx::query_as::<_, PersonalInfo>(
            "SELECT * FROM personal_info ORDER BY id DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn insert_personal(&self, input: PersonalInput) -> Result<i64, PortfolioError> {
        let res = sqlx::query(
            r#"
            INSERT INTO personal_info (
                name, title, tagline, email, phone, location, bio, avatar, resumeUrl
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(input.name)
        .bind(input.title)
        .bind(input.tagline)
        .bind(input.email)
        .bind(input.phone)
        .bind(input.location)
        .bind(input.bio)
        .bind(input.avatar)
        .bind(input.resume_url)
        .execute(&self.pool)
        .await?;
        Ok(res.last_insert_rowid())
    }

    /// Overwrite every column of the row. Returns affected row count.
    pub async fn update_personal(
        &self,
        id: i64,
        input: PersonalInput,
    ) -> Result<u64, PortfolioError> {
        let res = sqlx::query(
            r#"UPDATE personal_info SET
                name = ?,
                title = ?,
                tagline = ?,
                email = ?,
                phone = ?,
                location = ?,
                bio = ?,
                avatar = ?,
                resumeUrl = ?,
                updated_at = CURRENT_TIMESTAMP
              WHERE id = ?"#,
        )
        .bind(input.name)
        .bind(input.title)
        .bind(input.tagline)
        .bind(input.email)
        .bind(input.phone)
        .bind(input.location)
        .bind(input.bio)
        .bind(input.avatar)
        .bind(input.resume_url)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected())
    }

    // ---- projects ----

    pub async fn list_projects(&self) -> Result<Vec<Project>, PortfolioError> {
        let rows = sqlx::query("SELECT * FROM projects ORDER BY created_at DESC, rowid DESC")
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(Self::row_to_project).collect()
    }

    pub async fn get_project(&self, id: &str) -> Result<Option<Project>, PortfolioError> {
        let row = sqlx::query("SELECT * FROM projects WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(Self::row_to_project).transpose()
    }

    /// Insert with the caller-supplied id; a duplicate id surfaces as a database error.
    pub async fn insert_project(&self, input: ProjectInput) -> Result<String, PortfolioError> {
        let tags = input.tags_json()?;
        let id = input.id.unwrap_or_default();
        sqlx::query(
            r#"
            INSERT INTO projects (id, title, description, tags, image, liveUrl, githubUrl)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(input.title)
        .bind(input.description)
        .bind(tags)
        .bind(input.image)
        .bind(input.live_url)
        .bind(input.github_url)
        .execute(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn update_project(
        &self,
        id: &str,
        input: ProjectInput,
    ) -> Result<u64, PortfolioError> {
        let tags = input.tags_json()?;
        let res = sqlx::query(
            r#"UPDATE projects SET
                title = ?,
                description = ?,
                tags = ?,
                image = ?,
                liveUrl = ?,
                githubUrl = ?,
                updated_at = CURRENT_TIMESTAMP
              WHERE id = ?"#,
        )
        .bind(input.title)
        .bind(input.description)
        .bind(tags)
        .bind(input.image)
        .bind(input.live_url)
        .bind(input.github_url)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected())
    }

    pub async fn delete_project(&self, id: &str) -> Result<u64, PortfolioError> {
        let res = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected())
    }

    fn row_to_project(row: SqliteRow) -> Result<Project, PortfolioError> {
        let tags_json: Option<String> = row.try_get("tags")?;
        let tags = match tags_json.as_deref() {
            Some(s) if !s.is_empty() => serde_json::from_str(s)?,
            _ => Vec::new(),
        };

        Ok(Project {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            tags,
            image: row.try_get("image")?,
            live_url: row.try_get("liveUrl")?,
            github_url: row.try_get("githubUrl")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    // ---- skills ----

    pub async fn list_skills(&self) -> Result<Vec<Skill>, PortfolioError> {
        let rows = sqlx::query_as::<_, Skill>("SELECT * FROM skills ORDER BY category, name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn insert_skill(&self, input: SkillInput) -> Result<i64, PortfolioError> {
        let res = sqlx::query("INSERT INTO skills (name, level, category) VALUES (?, ?, ?)")
            .bind(input.name)
            .bind(input.level.unwrap_or(0))
            .bind(input.category)
            .execute(&self.pool)
            .await?;
        Ok(res.last_insert_rowid())
    }

    pub async fn update_skill(&self, id: i64, input: SkillInput) -> Result<u64, PortfolioError> {
        let res = sqlx::query(
            r#"UPDATE skills SET
                name = ?,
                level = ?,
                category = ?,
                updated_at = CURRENT_TIMESTAMP
              WHERE id = ?"#,
        )
        .bind(input.name)
        .bind(input.level)
        .bind(input.category)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected())
    }

    pub async fn delete_skill(&self, id: i64) -> Result<u64, PortfolioError> {
        let res = sqlx::query("DELETE FROM skills WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected())
    }

    // ---- experience ----

    /// Newest entries first by id, not by the free-text period.
    pub async fn list_experience(&self) -> Result<Vec<Experience>, PortfolioError> {
        let rows = sqlx::query_as::<_, Experience>("SELECT * FROM experience ORDER BY id DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn insert_experience(&self, input: ExperienceInput) -> Result<i64, PortfolioError> {
        let res = sqlx::query(
            "INSERT INTO experience (title, company, period, description) VALUES (?, ?, ?, ?)",
        )
        .bind(input.title)
        .bind(input.company)
        .bind(input.period)
        .bind(input.description)
        .execute(&self.pool)
        .await?;
        Ok(res.last_insert_rowid())
    }

    pub async fn update_experience(
        &self,
        id: i64,
        input: ExperienceInput,
    ) -> Result<u64, PortfolioError> {
        let res = sqlx::query(
            r#"UPDATE experience SET
                title = ?,
                company = ?,
                period = ?,
                description = ?,
                updated_at = CURRENT_TIMESTAMP
              WHERE id = ?"#,
        )
        .bind(input.title)
        .bind(input.company)
        .bind(input.period)
        .bind(input.description)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected())
    }

    pub async fn delete_experience(&self, id: i64) -> Result<u64, PortfolioError> {
        let res = sqlx::query("DELETE FROM experience WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected())
    }

    // ---- social_links ----

    /// All links reshaped into `platform -> url`.
    pub async fn social_map(&self) -> Result<BTreeMap<String, Option<String>>, PortfolioError> {
        let rows = sqlx::query_as::<_, SocialLink>("SELECT platform, url FROM social_links")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(|l| (l.platform, l.url)).collect())
    }

    /// Upsert by unique platform.
    /// Uses SQLite `INSERT ... ON CONFLICT(platform) DO UPDATE`.
    pub async fn upsert_social(
        &self,
        platform: &str,
        url: Option<String>,
    ) -> Result<(), PortfolioError> {
        sqlx::query(
            r#"
            INSERT INTO social_links (platform, url)
            VALUES (?, ?)
            ON CONFLICT(platform) DO UPDATE SET
                url = excluded.url,
                updated_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(platform)
        .bind(url)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
