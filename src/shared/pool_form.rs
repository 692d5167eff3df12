//! Pool creation form: state and submit flow.
//!
//! The flow is written against three small seams so the browser pieces
//! (server function call, clipboard, `window.alert`) can be swapped for fakes.

use dioxus::logger::tracing::{error, info};
use thiserror::Error;

pub const SUCCESS_MESSAGE: &str =
    "Bolão criado com sucesso, o código foi copiado para a área de transferência";
pub const FAILURE_MESSAGE: &str = "Falha ao criar bolão, tente novamente depois";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("creating pool: {0}")]
    CreatePool(String),
    #[error("writing invite code to clipboard: {0}")]
    Clipboard(String),
}

/// Sends a new pool title to the backend, returning the invite code.
#[allow(async_fn_in_trait)]
pub trait PoolCreator {
    async fn create_pool(&self, title: String) -> Result<String, SubmitError>;
}

#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), SubmitError>;
}

/// Blocking user notification.
pub trait Notifier {
    fn notify(&self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty title, nothing was sent.
    Skipped,
    Created { code: String },
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolForm {
    pub title: String,
}

impl PoolForm {
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Only a successful creation clears the title; failures keep it for a retry.
    pub fn apply(&mut self, outcome: &SubmitOutcome) {
        if let SubmitOutcome::Created { .. } = outcome {
            self.title.clear();
        }
    }
}

pub async fn submit_pool<P, C, N>(
    title: &str,
    creator: &P,
    clipboard: &C,
    notifier: &N,
) -> SubmitOutcome
where
    P: PoolCreator,
    C: Clipboard,
    N: Notifier,
{
    if title.is_empty() {
        return SubmitOutcome::Skipped;
    }

    match create_and_copy(title, creator, clipboard).await {
        Ok(code) => {
            info!("[pool_form] pool created, code {code} copied");
            notifier.notify(SUCCESS_MESSAGE);
            SubmitOutcome::Created { code }
        }
        Err(e) => {
            error!("[pool_form] {e}");
            notifier.notify(FAILURE_MESSAGE);
            SubmitOutcome::Failed
        }
    }
}

async fn create_and_copy<P, C>(
    title: &str,
    creator: &P,
    clipboard: &C,
) -> Result<String, SubmitError>
where
    P: PoolCreator,
    C: Clipboard,
{
    let code = creator.create_pool(title.to_string()).await?;
    clipboard.write_text(&code).await?;
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeCreator {
        result: Result<String, SubmitError>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeCreator {
        fn returning(result: Result<String, SubmitError>) -> Self {
            Self {
                result,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl PoolCreator for FakeCreator {
        async fn create_pool(&self, title: String) -> Result<String, SubmitError> {
            self.calls.borrow_mut().push(title);
            self.result.clone()
        }
    }

    #[derive(Default)]
    struct FakeClipboard {
        fail: bool,
        contents: RefCell<Option<String>>,
        writes: RefCell<usize>,
    }

    impl Clipboard for FakeClipboard {
        async fn write_text(&self, text: &str) -> Result<(), SubmitError> {
            *self.writes.borrow_mut() += 1;
            if self.fail {
                return Err(SubmitError::Clipboard("permission denied".into()));
            }
            *self.contents.borrow_mut() = Some(text.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeNotifier {
        messages: RefCell<Vec<String>>,
    }

    impl Notifier for FakeNotifier {
        fn notify(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    async fn submit(
        form: &mut PoolForm,
        creator: &FakeCreator,
        clipboard: &FakeClipboard,
        notifier: &FakeNotifier,
    ) -> SubmitOutcome {
        let outcome = submit_pool(&form.title, creator, clipboard, notifier).await;
        form.apply(&outcome);
        outcome
    }

    #[tokio::test]
    async fn success_copies_code_and_clears_title() {
        let mut form = PoolForm::default();
        form.set_title("World Cup Pool");
        let creator = FakeCreator::returning(Ok("ABC123".into()));
        let clipboard = FakeClipboard::default();
        let notifier = FakeNotifier::default();

        let outcome = submit(&mut form, &creator, &clipboard, &notifier).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Created {
                code: "ABC123".into()
            }
        );
        assert_eq!(*creator.calls.borrow(), vec!["World Cup Pool".to_string()]);
        assert_eq!(clipboard.contents.borrow().as_deref(), Some("ABC123"));
        assert_eq!(*notifier.messages.borrow(), vec![SUCCESS_MESSAGE.to_string()]);
        assert_eq!(form.title, "");
    }

    #[tokio::test]
    async fn creation_failure_keeps_title_and_skips_clipboard() {
        let mut form = PoolForm::default();
        form.set_title("Bolão da firma");
        let creator = FakeCreator::returning(Err(SubmitError::CreatePool("status 500".into())));
        let clipboard = FakeClipboard::default();
        let notifier = FakeNotifier::default();

        let outcome = submit(&mut form, &creator, &clipboard, &notifier).await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(*clipboard.writes.borrow(), 0);
        assert_eq!(*notifier.messages.borrow(), vec![FAILURE_MESSAGE.to_string()]);
        assert_eq!(form.title, "Bolão da firma");
    }

    #[tokio::test]
    async fn clipboard_failure_reports_generic_failure() {
        let mut form = PoolForm::default();
        form.set_title("Amigos");
        let creator = FakeCreator::returning(Ok("XYZ789".into()));
        let clipboard = FakeClipboard {
            fail: true,
            ..Default::default()
        };
        let notifier = FakeNotifier::default();

        let outcome = submit(&mut form, &creator, &clipboard, &notifier).await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(*clipboard.writes.borrow(), 1);
        assert!(clipboard.contents.borrow().is_none());
        assert_eq!(*notifier.messages.borrow(), vec![FAILURE_MESSAGE.to_string()]);
        assert_eq!(form.title, "Amigos");
    }

    #[tokio::test]
    async fn empty_title_makes_no_call() {
        let mut form = PoolForm::default();
        let creator = FakeCreator::returning(Ok("unused".into()));
        let clipboard = FakeClipboard::default();
        let notifier = FakeNotifier::default();

        let outcome = submit(&mut form, &creator, &clipboard, &notifier).await;

        assert_eq!(outcome, SubmitOutcome::Skipped);
        assert!(creator.calls.borrow().is_empty());
        assert_eq!(*clipboard.writes.borrow(), 0);
        assert!(notifier.messages.borrow().is_empty());
    }

    #[test]
    fn typing_replaces_title() {
        let mut form = PoolForm::default();
        form.set_title("W");
        form.set_title("Wo");
        assert_eq!(form.title, "Wo");
    }
}
