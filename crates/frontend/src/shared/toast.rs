//! Transient notifications, dispatched through thaw's toaster.

use contracts::shared::api_error::ApiError;
use leptos::prelude::*;
use std::time::Duration;
use thaw::*;

const TOAST_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn intent(self) -> ToastIntent {
        match self {
            ToastKind::Success => ToastIntent::Success,
            ToastKind::Error => ToastIntent::Error,
            ToastKind::Info => ToastIntent::Info,
        }
    }

    fn title(self) -> &'static str {
        match self {
            ToastKind::Success => "Готово",
            ToastKind::Error => "Ошибка",
            ToastKind::Info => "Информация",
        }
    }
}

/// Toast text for a failed backend call; `None` for superseded (aborted)
/// calls, which are not errors.
pub fn api_error_message(context: &str, err: &ApiError) -> Option<String> {
    (!err.is_aborted()).then(|| format!("{}: {}", context, err))
}

/// Handle on the toaster, provided via context.
#[derive(Clone, Copy)]
pub struct ToastService {
    toaster: StoredValue<ToasterInjection, LocalStorage>,
}

impl ToastService {
    /// Must be created under `ToasterProvider`.
    pub fn new() -> Self {
        Self {
            toaster: StoredValue::new_local(ToasterInjection::expect_context()),
        }
    }

    pub fn show(&self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        let options = ToastOptions::default()
            .with_intent(kind.intent())
            .with_timeout(TOAST_LIFETIME);
        self.toaster.with_value(|toaster| {
            toaster.dispatch_toast(
                move || {
                    view! {
                        <Toast>
                            <ToastTitle>{kind.title()}</ToastTitle>
                            <ToastBody>{message.clone()}</ToastBody>
                        </Toast>
                    }
                },
                options,
            )
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(ToastKind::Info, message);
    }

    pub fn api_error(&self, context: &str, err: &ApiError) {
        if let Some(message) = api_error_message(context, err) {
            log::error!("{}: {:?}", context, err);
            self.error(message);
        }
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aborted_calls_produce_no_toast() {
        let aborted = ApiError::Network("AbortError: The user aborted a request.".into());
        assert_eq!(api_error_message("Поиск", &aborted), None);

        let failed = ApiError::Http {
            status: 500,
            message: "Внутренняя ошибка".into(),
        };
        assert_eq!(
            api_error_message("Не удалось загрузить клиентов", &failed).as_deref(),
            Some("Не удалось загрузить клиентов: Внутренняя ошибка")
        );
    }
}
