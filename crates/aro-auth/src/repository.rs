use super::*;
use aro_core::ID;

/// Credential store used by the auth handlers and profile lookup.
/// The route gate never touches it.
#[allow(async_fn_in_trait)]
pub trait Credentials {
    async fn exists(&self, email: &str) -> anyhow::Result<bool>;
    /// Fails with [`EmailTaken`] when another record already owns the email.
    async fn create(&self, member: &Member, hashword: &str) -> anyhow::Result<()>;
    async fn lookup(&self, email: &str) -> anyhow::Result<Option<(Member, String)>>;
    async fn find(&self, id: ID<Member>) -> anyhow::Result<Option<Member>>;
}

/// Email already registered; raised by `create` even when a prior
/// `exists` check raced with another sign-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailTaken(pub String);

impl std::fmt::Display for EmailTaken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "email {} already registered", self.0)
    }
}

impl std::error::Error for EmailTaken {}

#[cfg(feature = "database")]
mod postgres {
    use super::*;
    use aro_core::Unique;
    use aro_pg::*;
    use std::sync::Arc;
    use tokio_postgres::Client;
    use tokio_postgres::Row;
    use tokio_postgres::error::SqlState;

    fn member(row: &Row) -> Member {
        Member::new(
            ID::from(row.get::<_, uuid::Uuid>(0)),
            row.get::<_, String>(1),
            row.get::<_, String>(2),
            row.get::<_, String>(3),
        )
    }

    impl Credentials for Arc<Client> {
        async fn exists(&self, email: &str) -> anyhow::Result<bool> {
            Ok(self
                .query_opt(
                    const_format::concatcp!("SELECT 1 FROM ", USERS, " WHERE email = $1"),
                    &[&email],
                )
                .await?
                .is_some())
        }

        async fn create(&self, member: &Member, hashword: &str) -> anyhow::Result<()> {
            self.execute(
                const_format::concatcp!(
                    "INSERT INTO ",
                    USERS,
                    " (id, fname, lname, email, hashword) VALUES ($1, $2, $3, $4, $5)"
                ),
                &[
                    &member.id().inner(),
                    &member.fname(),
                    &member.lname(),
                    &member.email(),
                    &hashword,
                ],
            )
            .await
            .map_err(|e| {
                if e.code() == Some(&SqlState::UNIQUE_VIOLATION) {
                    anyhow::Error::new(EmailTaken(member.email().to_string()))
                } else {
                    anyhow::Error::new(e)
                }
            })?;
            Ok(())
        }

        async fn lookup(&self, email: &str) -> anyhow::Result<Option<(Member, String)>> {
            Ok(self
                .query_opt(
                    const_format::concatcp!(
                        "SELECT id, fname, lname, email, hashword FROM ",
                        USERS,
                        " WHERE email = $1"
                    ),
                    &[&email],
                )
                .await?
                .map(|row| (member(&row), row.get::<_, String>(4))))
        }

        async fn find(&self, id: ID<Member>) -> anyhow::Result<Option<Member>> {
            Ok(self
                .query_opt(
                    const_format::concatcp!(
                        "SELECT id, fname, lname, email FROM ",
                        USERS,
                        " WHERE id = $1"
                    ),
                    &[&id.inner()],
                )
                .await?
                .as_ref()
                .map(member))
        }
    }
}
