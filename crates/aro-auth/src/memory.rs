use super::*;
use aro_core::ID;
use aro_core::Unique;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-local credential store. Serves tests and database-less runs.
#[derive(Debug, Default)]
pub struct Memory {
    users: RwLock<HashMap<ID<Member>, (Member, String)>>,
}

impl Memory {
    /// Drop a user record, returning it if it existed.
    pub async fn remove(&self, id: ID<Member>) -> Option<Member> {
        self.users.write().await.remove(&id).map(|(member, _)| member)
    }
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

impl Credentials for Memory {
    async fn exists(&self, email: &str) -> anyhow::Result<bool> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .any(|(member, _)| member.email() == email))
    }

    async fn create(&self, member: &Member, hashword: &str) -> anyhow::Result<()> {
        let mut users = self.users.write().await;
        if users.values().any(|(m, _)| m.email() == member.email()) {
            return Err(EmailTaken(member.email().to_string()).into());
        }
        users.insert(member.id(), (member.clone(), hashword.to_string()));
        Ok(())
    }

    async fn lookup(&self, email: &str) -> anyhow::Result<Option<(Member, String)>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|(member, _)| member.email() == email)
            .cloned())
    }

    async fn find(&self, id: ID<Member>) -> anyhow::Result<Option<Member>> {
        Ok(self
            .users
            .read()
            .await
            .get(&id)
            .map(|(member, _)| member.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aro_core::Arbitrary;

    #[actix_web::test]
    async fn create_then_lookup() {
        let store = Memory::default();
        let member = Member::random();
        store.create(&member, "hash").await.unwrap();
        assert!(store.exists(member.email()).await.unwrap());
        let (found, hashword) = store.lookup(member.email()).await.unwrap().unwrap();
        assert!(found == member);
        assert!(hashword == "hash");
        assert!(store.find(member.id()).await.unwrap() == Some(member));
    }

    #[actix_web::test]
    async fn duplicate_email_rejected() {
        let store = Memory::default();
        let member = Member::random();
        let twin = Member::new(ID::default(), "B".into(), "C".into(), member.email().into());
        store.create(&member, "hash").await.unwrap();
        let err = store.create(&twin, "hash").await.unwrap_err();
        assert!(err.downcast_ref::<EmailTaken>() == Some(&EmailTaken(member.email().to_string())));
        assert!(store.len().await == 1);
    }

    #[actix_web::test]
    async fn removed_user_is_absent() {
        let store = Memory::default();
        let member = Member::random();
        store.create(&member, "hash").await.unwrap();
        assert!(store.remove(member.id()).await == Some(member.clone()));
        assert!(store.find(member.id()).await.unwrap().is_none());
        assert!(!store.exists(member.email()).await.unwrap());
    }
}
