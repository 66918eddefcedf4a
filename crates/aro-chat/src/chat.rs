use aro_auth::Member;
use aro_core::ID;
use aro_core::Unique;

/// One question and the assistant's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    id: ID<Self>,
    user: ID<Member>,
    prompt: String,
    response: String,
    created: std::time::SystemTime,
}

impl Chat {
    pub fn new(user: ID<Member>, prompt: String, response: String) -> Self {
        Self::restore(
            ID::default(),
            user,
            prompt,
            response,
            std::time::SystemTime::now(),
        )
    }
    pub fn restore(
        id: ID<Self>,
        user: ID<Member>,
        prompt: String,
        response: String,
        created: std::time::SystemTime,
    ) -> Self {
        Self {
            id,
            user,
            prompt,
            response,
            created,
        }
    }
    pub fn user(&self) -> ID<Member> {
        self.user
    }
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
    pub fn response(&self) -> &str {
        &self.response
    }
    pub fn created_at(&self) -> std::time::SystemTime {
        self.created
    }
}

impl Unique for Chat {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use aro_pg::*;

    impl Schema for Chat {
        fn name() -> &'static str {
            CHATS
        }
        fn columns() -> &'static [tokio_postgres::types::Type] {
            &[
                tokio_postgres::types::Type::UUID,
                tokio_postgres::types::Type::UUID,
                tokio_postgres::types::Type::TEXT,
                tokio_postgres::types::Type::TEXT,
                tokio_postgres::types::Type::TIMESTAMPTZ,
            ]
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                CHATS,
                " (
                    id          UUID PRIMARY KEY,
                    user_id     UUID NOT NULL REFERENCES ",
                USERS,
                "(id) ON DELETE CASCADE,
                    prompt      TEXT NOT NULL,
                    response    TEXT NOT NULL,
                    created_at  TIMESTAMPTZ NOT NULL
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_chats_user ON ",
                CHATS,
                " (user_id, created_at);"
            )
        }
    }
}
