#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use raffle_bot::bot::context::RaffleContext;
use raffle_bot::bot::transport::{ChatTransport, MessageRef, OutgoingMessage};
use raffle_bot::database::connection::DatabaseManager;
use raffle_bot::error::TransportError;
use teloxide::types::{ChatId, MessageId, UserId};
use tempfile::{tempdir, TempDir};

pub const GROUP: ChatId = ChatId(-1001234567890);
pub const ADMIN: UserId = UserId(111);
pub const MEMBER: UserId = UserId(222);

pub async fn setup_test_db() -> Result<(DatabaseManager, TempDir)> {
    let temp_dir = tempdir()?;
    let db_path = temp_dir.path().join("test.db");
    let database_url = format!("sqlite:{}", db_path.display());

    let db_manager = DatabaseManager::new(&database_url).await?;
    db_manager.run_migrations().await?;

    Ok((db_manager, temp_dir))
}

/// Builds a context over a fresh database and a recording transport.
/// `ADMIN` is allow-listed.
pub async fn setup_context() -> Result<(Arc<RaffleContext>, Arc<MockTransport>, TempDir)> {
    let (db, temp_dir) = setup_test_db().await?;
    let transport = Arc::new(MockTransport::new());
    let ctx = Arc::new(RaffleContext::new(db, transport.clone(), vec![ADMIN.0]));
    Ok((ctx, transport, temp_dir))
}

/// Records every outbound call. Individual operations can be made to fail.
#[derive(Default)]
pub struct MockTransport {
    pub sent: Mutex<Vec<(ChatId, OutgoingMessage)>>,
    pub edited: Mutex<Vec<(MessageRef, OutgoingMessage)>>,
    pub deleted: Mutex<Vec<MessageRef>>,
    pub role_lookups: Mutex<Vec<UserId>>,
    pub answered: Mutex<Vec<(String, Option<String>)>>,
    pub chat_admins: Mutex<HashSet<u64>>,
    pub fail_sends: AtomicBool,
    pub fail_edits: AtomicBool,
    pub fail_deletes: AtomicBool,
    pub fail_role_lookups: AtomicBool,
    pub fail_answers: AtomicBool,
    next_message_id: AtomicI32,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            next_message_id: AtomicI32::new(1000),
            ..Default::default()
        }
    }

    pub fn with_chat_admin(self, user: UserId) -> Self {
        self.chat_admins.lock().unwrap().insert(user.0);
        self
    }

    pub fn sent_texts(&self) -> Vec<String> {
        self.sent.lock().unwrap().iter().map(|(_, m)| m.text.clone()).collect()
    }

    pub fn edited_texts(&self) -> Vec<String> {
        self.edited.lock().unwrap().iter().map(|(_, m)| m.text.clone()).collect()
    }

    pub fn set_failing_edits(&self, fail: bool) {
        self.fail_edits.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl ChatTransport for MockTransport {
    async fn send(&self, chat: ChatId, message: OutgoingMessage) -> Result<MessageRef, TransportError> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(TransportError::Rejected("send refused".to_string()));
        }
        let id = self.next_message_id.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push((chat, message));
        Ok(MessageRef {
            chat,
            message: MessageId(id),
        })
    }

    async fn edit(&self, target: MessageRef, message: OutgoingMessage) -> Result<(), TransportError> {
        if self.fail_edits.load(Ordering::SeqCst) {
            return Err(TransportError::Rejected("message to edit not found".to_string()));
        }
        self.edited.lock().unwrap().push((target, message));
        Ok(())
    }

    async fn delete(&self, target: MessageRef) -> Result<(), TransportError> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(TransportError::Rejected("message can't be deleted".to_string()));
        }
        self.deleted.lock().unwrap().push(target);
        Ok(())
    }

    async fn is_chat_admin(&self, _chat: ChatId, user: UserId) -> Result<bool, TransportError> {
        self.role_lookups.lock().unwrap().push(user);
        if self.fail_role_lookups.load(Ordering::SeqCst) {
            return Err(TransportError::Rejected("chat not found".to_string()));
        }
        Ok(self.chat_admins.lock().unwrap().contains(&user.0))
    }

    async fn answer_callback(&self, callback_id: String, text: Option<String>) -> Result<(), TransportError> {
        if self.fail_answers.load(Ordering::SeqCst) {
            return Err(TransportError::Rejected("query is too old".to_string()));
        }
        self.answered.lock().unwrap().push((callback_id, text));
        Ok(())
    }
}
