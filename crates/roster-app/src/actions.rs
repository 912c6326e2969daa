//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::message::Message;
use crate::UpdateAction;
use roster_client::UserDirectory;

/// Execute an action by spawning a background task.
///
/// The task calls the directory and reports completion on `msg_tx` with the
/// action's epoch. A closed channel means the loop has exited and the result
/// is dropped.
pub fn handle_action<D>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    directory: Arc<D>,
) -> JoinHandle<()>
where
    D: UserDirectory + Sync + 'static,
{
    match action {
        UpdateAction::FetchUsers { epoch, request } => tokio::spawn(async move {
            let msg = match directory.list_users(request).await {
                Ok(page) => {
                    debug!(
                        "Fetched page {} ({} users) for epoch {}",
                        request.page,
                        page.content.len(),
                        epoch
                    );
                    Message::UsersPageLoaded { epoch, page }
                }
                Err(e) => Message::UsersPageFailed {
                    epoch,
                    error: e.to_string(),
                },
            };
            if msg_tx.send(msg).await.is_err() {
                debug!("Message channel closed, dropping users page result");
            }
        }),

        UpdateAction::CreateUser { epoch, user } => tokio::spawn(async move {
            let email = user.email.clone();
            let msg = match directory.register_user(user).await {
                Ok(()) => {
                    info!("Registered user {}", email);
                    Message::UserCreated { epoch }
                }
                Err(e) => {
                    if e.is_recoverable() {
                        warn!("Registering {} failed: {}", email, e);
                    } else {
                        error!("Registering {} failed: {}", email, e);
                    }
                    Message::UserCreateFailed {
                        epoch,
                        server_message: e.server_message().map(str::to_string),
                        error: e.to_string(),
                    }
                }
            };
            if msg_tx.send(msg).await.is_err() {
                debug!("Message channel closed, dropping registration result");
            }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_client::test_utils::FakeDirectory;
    use roster_core::{Error, NewUser, PageRequest, Role};

    fn new_user() -> NewUser {
        NewUser {
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role: Role::Client,
        }
    }

    #[tokio::test]
    async fn test_fetch_users_reports_page_with_epoch() {
        let directory = Arc::new(FakeDirectory::with_population(45));
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(
            UpdateAction::FetchUsers {
                epoch: 7,
                request: PageRequest::new(2, 20),
            },
            tx,
            directory.clone(),
        )
        .await
        .unwrap();

        match rx.recv().await {
            Some(Message::UsersPageLoaded { epoch, page }) => {
                assert_eq!(epoch, 7);
                assert_eq!(page.content.len(), 5);
                assert_eq!(page.total_pages, 3);
            }
            other => panic!("expected UsersPageLoaded, got {:?}", other),
        }
        assert_eq!(directory.list_calls(), vec![PageRequest::new(2, 20)]);
    }

    #[tokio::test]
    async fn test_fetch_users_failure() {
        let directory = Arc::new(FakeDirectory::new());
        directory.push_page(Err(Error::http("connection refused")));
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(
            UpdateAction::FetchUsers {
                epoch: 3,
                request: PageRequest::new(0, 20),
            },
            tx,
            directory,
        )
        .await
        .unwrap();

        assert!(matches!(
            rx.recv().await,
            Some(Message::UsersPageFailed { epoch: 3, .. })
        ));
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let directory = Arc::new(FakeDirectory::new());
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(
            UpdateAction::CreateUser {
                epoch: 2,
                user: new_user(),
            },
            tx,
            directory.clone(),
        )
        .await
        .unwrap();

        assert!(matches!(
            rx.recv().await,
            Some(Message::UserCreated { epoch: 2 })
        ));
        assert_eq!(directory.registered(), vec![new_user()]);
    }

    #[tokio::test]
    async fn test_create_user_rejection_carries_server_message() {
        let directory = Arc::new(FakeDirectory::new());
        directory.push_registration(Err(Error::http_status(
            409,
            Some("Email taken".to_string()),
        )));
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(
            UpdateAction::CreateUser {
                epoch: 1,
                user: new_user(),
            },
            tx,
            directory,
        )
        .await
        .unwrap();

        match rx.recv().await {
            Some(Message::UserCreateFailed {
                epoch,
                server_message,
                ..
            }) => {
                assert_eq!(epoch, 1);
                assert_eq!(server_message.as_deref(), Some("Email taken"));
            }
            other => panic!("expected UserCreateFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_transport_failure_has_no_server_message() {
        let directory = Arc::new(FakeDirectory::new());
        directory.push_registration(Err(Error::http("request timed out")));
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(
            UpdateAction::CreateUser {
                epoch: 1,
                user: new_user(),
            },
            tx,
            directory,
        )
        .await
        .unwrap();

        assert!(matches!(
            rx.recv().await,
            Some(Message::UserCreateFailed {
                server_message: None,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_closed_channel_is_not_an_error() {
        let directory = Arc::new(FakeDirectory::with_population(3));
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let result = handle_action(
            UpdateAction::FetchUsers {
                epoch: 1,
                request: PageRequest::new(0, 20),
            },
            tx,
            directory,
        )
        .await;

        assert!(result.is_ok());
    }
}
