//! Tests for the chat session store

use hr_assistant_backend::chat::{ChatMessage, ChatStore, MessageRole, Session};
use hr_assistant_backend::store;
use tempfile::TempDir;

async fn open_store() -> (TempDir, ChatStore) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("chat.db");
    let pool = store::open(path.to_str().unwrap()).await.unwrap();
    (dir, ChatStore::new(pool))
}

#[tokio::test]
async fn appended_message_round_trips_unchanged() {
    let (_dir, chat) = open_store().await;

    let session = Session::new("s-1".to_string(), "入职咨询".to_string());
    chat.create_session(&session).await.unwrap();

    let message = ChatMessage::new(
        "m-1".to_string(),
        "s-1".to_string(),
        MessageRole::User,
        "我很有勇气，也很正义，想报名".to_string(),
    );
    chat.append_message(&message).await.unwrap();

    let reloaded = chat.messages("s-1").await.unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].content, message.content);
    assert_eq!(reloaded[0].role, message.role);
    assert_eq!(reloaded[0].created_at, message.created_at);
}

#[tokio::test]
async fn all_three_roles_survive_persistence() {
    let (_dir, chat) = open_store().await;

    let session = Session::new("s-roles".to_string(), "roles".to_string());
    chat.create_session(&session).await.unwrap();

    for (i, role) in [MessageRole::System, MessageRole::User, MessageRole::Assistant]
        .into_iter()
        .enumerate()
    {
        let message = ChatMessage::new(
            format!("m-{}", i),
            "s-roles".to_string(),
            role,
            format!("message {}", i),
        );
        chat.append_message(&message).await.unwrap();
    }

    let reloaded = chat.messages("s-roles").await.unwrap();
    assert_eq!(reloaded.len(), 3);
    assert_eq!(reloaded[0].role_enum(), MessageRole::System);
    assert_eq!(reloaded[1].role_enum(), MessageRole::User);
    assert_eq!(reloaded[2].role_enum(), MessageRole::Assistant);
}

#[tokio::test]
async fn deleting_a_session_cascades_to_its_messages() {
    let (_dir, chat) = open_store().await;

    let session = Session::new("s-2".to_string(), "to delete".to_string());
    chat.create_session(&session).await.unwrap();
    let message = ChatMessage::new(
        "m-2".to_string(),
        "s-2".to_string(),
        MessageRole::Assistant,
        "您好！我是青蓝公司智能HR助手".to_string(),
    );
    chat.append_message(&message).await.unwrap();

    chat.delete_session("s-2").await.unwrap();

    assert!(chat.get_session("s-2").await.unwrap().is_none());
    assert!(chat.messages("s-2").await.unwrap().is_empty());
}

#[tokio::test]
async fn history_rendering_skips_system_notices_and_honors_the_limit() {
    let (_dir, chat) = open_store().await;

    let session = Session::new("s-3".to_string(), "history".to_string());
    chat.create_session(&session).await.unwrap();

    let entries = [
        (MessageRole::System, "会话已建立"),
        (MessageRole::User, "你好"),
        (MessageRole::Assistant, "您好！请问有什么可以帮您？"),
        (MessageRole::User, "年假有几天"),
    ];
    for (i, (role, content)) in entries.into_iter().enumerate() {
        let message = ChatMessage::new(
            format!("m-{}", i),
            "s-3".to_string(),
            role,
            content.to_string(),
        );
        chat.append_message(&message).await.unwrap();
    }

    let full = chat.render_history("s-3", 10).await.unwrap();
    assert_eq!(
        full,
        "访客: 你好\n助手: 您好！请问有什么可以帮您？\n访客: 年假有几天"
    );

    let limited = chat.render_history("s-3", 1).await.unwrap();
    assert_eq!(limited, "访客: 年假有几天");
}

#[tokio::test]
async fn sessions_list_orders_by_most_recent_activity() {
    let (_dir, chat) = open_store().await;

    chat.create_session(&Session::new("old".to_string(), "old".to_string()))
        .await
        .unwrap();
    chat.create_session(&Session::new("new".to_string(), "new".to_string()))
        .await
        .unwrap();

    // Touch the older session so it becomes the most recent.
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    chat.touch_session("old").await.unwrap();

    let sessions = chat.list_sessions().await.unwrap();
    assert_eq!(sessions[0].id, "old");
    assert_eq!(sessions[1].id, "new");
}
