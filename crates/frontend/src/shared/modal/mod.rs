use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Modal(
    /// Title of the modal
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Extra class for the overlay, e.g. "modal-overlay--error"
    #[prop(optional)]
    class: Option<String>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Escape closes; the listener is removed when the modal unmounts
    let escape = window_event_listener(ev::keydown, move |event: ev::KeyboardEvent| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    // Only a click on the overlay itself closes, not one inside the dialog
    let handle_overlay_click = move |event: ev::MouseEvent| {
        let direct = match (event.target(), event.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        };
        if direct {
            on_close.run(());
        }
    };

    let handle_close = move |_| {
        on_close.run(());
    };

    let overlay_class = format!("modal-overlay {}", class.unwrap_or_default());

    view! {
        <div class=overlay_class on:click=handle_overlay_click>
            <div class="modal" role="dialog" aria-modal="true">
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=handle_close>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Dismissible overlay with a single error message
#[component]
pub fn ErrorModal(
    /// Text to show
    #[prop(into)]
    message: String,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title="Erro".to_string() on_close=on_close class="modal-overlay--error".to_string()>
            <div class="error-content">
                <span class="error-icon">{icon("alert")}</span>
                <p class="error-message">{message}</p>
            </div>
        </Modal>
    }
}
