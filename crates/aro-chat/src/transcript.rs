use super::*;
use aro_auth::Member;
use aro_core::ID;
use tokio::sync::RwLock;

/// Chat history store.
#[allow(async_fn_in_trait)]
pub trait Transcript {
    async fn record(&self, chat: &Chat) -> anyhow::Result<()>;
    /// A member's exchanges, oldest first.
    async fn history(&self, user: ID<Member>) -> anyhow::Result<Vec<Chat>>;
}

/// Process-local transcript store.
#[derive(Debug, Default)]
pub struct Transcripts {
    chats: RwLock<Vec<Chat>>,
}

impl Transcript for Transcripts {
    async fn record(&self, chat: &Chat) -> anyhow::Result<()> {
        self.chats.write().await.push(chat.clone());
        Ok(())
    }

    async fn history(&self, user: ID<Member>) -> anyhow::Result<Vec<Chat>> {
        Ok(self
            .chats
            .read()
            .await
            .iter()
            .filter(|chat| chat.user() == user)
            .cloned()
            .collect())
    }
}

#[cfg(feature = "database")]
mod postgres {
    use super::*;
    use aro_core::Unique;
    use aro_pg::*;
    use std::sync::Arc;
    use tokio_postgres::Client;

    impl Transcript for Arc<Client> {
        async fn record(&self, chat: &Chat) -> anyhow::Result<()> {
            self.execute(
                const_format::concatcp!(
                    "INSERT INTO ",
                    CHATS,
                    " (id, user_id, prompt, response, created_at) VALUES ($1, $2, $3, $4, $5)"
                ),
                &[
                    &chat.id().inner(),
                    &chat.user().inner(),
                    &chat.prompt(),
                    &chat.response(),
                    &chat.created_at(),
                ],
            )
            .await?;
            Ok(())
        }

        async fn history(&self, user: ID<Member>) -> anyhow::Result<Vec<Chat>> {
            Ok(self
                .query(
                    const_format::concatcp!(
                        "SELECT id, user_id, prompt, response, created_at FROM ",
                        CHATS,
                        " WHERE user_id = $1 ORDER BY created_at"
                    ),
                    &[&user.inner()],
                )
                .await?
                .iter()
                .map(|row| {
                    Chat::restore(
                        ID::from(row.get::<_, uuid::Uuid>(0)),
                        ID::from(row.get::<_, uuid::Uuid>(1)),
                        row.get::<_, String>(2),
                        row.get::<_, String>(3),
                        row.get::<_, std::time::SystemTime>(4),
                    )
                })
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aro_core::Arbitrary;

    #[actix_web::test]
    async fn history_is_per_member_in_order() {
        let store = Transcripts::default();
        let asha = ID::<Member>::random();
        let ravi = ID::<Member>::random();
        for (user, prompt) in [(asha, "one"), (ravi, "other"), (asha, "two")] {
            let chat = Chat::new(user, prompt.to_string(), String::from("reply"));
            store.record(&chat).await.unwrap();
        }
        let history = store.history(asha).await.unwrap();
        assert!(history.len() == 2);
        assert!(history[0].prompt() == "one");
        assert!(history[1].prompt() == "two");
        assert!(store.history(ID::random()).await.unwrap().is_empty());
    }
}
