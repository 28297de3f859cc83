use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::model::member::Member;

#[derive(Clone, Debug, Default)]
pub struct MemoryMemberStore {
    members: Arc<RwLock<HashMap<String, Member>>>,
}

impl MemoryMemberStore {
    pub async fn get(&self, id: &str) -> Option<Member> {
        self.members.read().await.get(id).cloned()
    }

    pub async fn save(&self, member: &Member) {
        self.members
            .write()
            .await
            .insert(member.id().to_owned(), member.clone());
    }
}
