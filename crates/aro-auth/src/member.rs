use aro_core::Arbitrary;
use aro_core::ID;
use aro_core::Unique;

/// Registered user. The password hash is a storage-only field and never
/// travels with this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Member {
    id: ID<Self>,
    fname: String,
    lname: String,
    email: String,
}

impl Member {
    pub fn new(id: ID<Self>, fname: String, lname: String, email: String) -> Self {
        Self {
            id,
            fname,
            lname,
            email,
        }
    }
    pub fn fname(&self) -> &str {
        &self.fname
    }
    pub fn lname(&self) -> &str {
        &self.lname
    }
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl Unique for Member {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

impl Arbitrary for Member {
    fn random() -> Self {
        let id = ID::random();
        Self::new(
            id,
            String::from("Asha"),
            String::from("Verma"),
            format!("{}@example.com", id.inner().simple()),
        )
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use aro_pg::*;

    impl Schema for Member {
        fn name() -> &'static str {
            USERS
        }
        fn columns() -> &'static [tokio_postgres::types::Type] {
            &[
                tokio_postgres::types::Type::UUID,
                tokio_postgres::types::Type::VARCHAR,
                tokio_postgres::types::Type::VARCHAR,
                tokio_postgres::types::Type::VARCHAR,
                tokio_postgres::types::Type::TEXT,
            ]
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                USERS,
                " (
                    id          UUID PRIMARY KEY,
                    email       VARCHAR(255) UNIQUE NOT NULL,
                    fname       VARCHAR(64) NOT NULL,
                    lname       VARCHAR(64) NOT NULL,
                    hashword    TEXT NOT NULL
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_users_email ON ",
                USERS,
                " (email);"
            )
        }
    }
}
