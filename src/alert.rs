//! Error messages that htmx swaps into the page's alert container.

use axum::response::{Html, IntoResponse, Response};
use maud::{Markup, html};

/// A dismissable error message.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// The action failed, with an explanation of what to do about it.
    Error { message: String, details: String },
    /// The action failed and there is nothing more to say about it.
    ErrorSimple { message: String },
}

impl Alert {
    fn into_html(self) -> Markup {
        let (message, details) = match self {
            Alert::Error { message, details } => (message, details),
            Alert::ErrorSimple { message } => (message, String::new()),
        };

        html! {
            div
                role="alert"
                class="flex items-start p-4 mb-4 text-sm border rounded-lg
                    text-red-800 border-red-300 bg-red-50
                    dark:bg-gray-800 dark:text-red-400 dark:border-red-800"
            {
                span class="font-bold me-3" { "!" }

                div class="flex-1"
                {
                    p class="font-medium" { (message) }

                    @if !details.is_empty() {
                        p class="mt-1" { (details) }
                    }
                }

                button
                    type="button"
                    class="ms-3 font-bold"
                    aria-label="Dismiss"
                    onclick="this.parentElement.remove()"
                {
                    "×"
                }
            }
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        Html(self.into_html().into_string()).into_response()
    }
}
