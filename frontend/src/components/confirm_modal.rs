use log::debug;
use modal_shared::config::{DEFAULT_HIDDEN_CLASS, DEFAULT_OVERLAY_ID};
use modal_shared::TaskAction;
use yew::prelude::*;

const CSRF_FIELD: &str = "csrfmiddlewaretoken";

#[derive(Properties, Clone, PartialEq)]
pub struct TaskConfirmModalProps {
    /// Task the form submits to; `None` keeps the overlay hidden.
    #[prop_or_default]
    pub action: Option<TaskAction>,
    pub on_close: Callback<()>,
    /// Mount point of the task views, e.g. `/todo`.
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or(AttrValue::Static(DEFAULT_HIDDEN_CLASS))]
    pub hidden_class: AttrValue,
    #[prop_or_default]
    pub csrf_token: Option<AttrValue>,
}

#[function_component(TaskConfirmModal)]
pub fn task_confirm_modal(props: &TaskConfirmModalProps) -> Html {
    let target = props.action.map(|action| action.path_under(&props.prefix));
    debug!("TaskConfirmModal rendering (action: {:?})", target);

    let hidden = target.is_none().then(|| props.hidden_class.to_string());

    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = {
        Callback::from(|e: MouseEvent| {
            e.stop_propagation();
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            on_close.emit(());
        })
    };

    let (title, message, button_text) = match props.action {
        Some(action) => (action.title(), action.message(), action.button_text()),
        None => ("", "", ""),
    };
    let button_class = if props.action.is_some_and(|action| action.is_destructive()) {
        "bg-red-600 hover:bg-red-700 focus:ring-red-500"
    } else {
        "bg-blue-600 hover:bg-blue-700 focus:ring-blue-500"
    };

    html! {
        <div id={DEFAULT_OVERLAY_ID} class={classes!("overlay", "fixed", "inset-0", "z-50", "flex", "items-center", "justify-center", hidden)}>
            <div
                class="absolute inset-0 bg-black bg-opacity-50"
                onclick={on_overlay_click}
            ></div>
            <div
                class="relative bg-white rounded-lg shadow-xl p-6 max-w-md w-full mx-4"
                onclick={on_modal_click}
            >
                <form method="post" action={target}>
                    if let Some(token) = props.csrf_token.clone() {
                        <input type="hidden" name={CSRF_FIELD} value={token} />
                    }
                    <div class="mb-4">
                        <h3 class="text-lg font-medium text-gray-900">{title}</h3>
                    </div>
                    <div class="mb-6">
                        <p class="text-sm text-gray-600">{message}</p>
                    </div>
                    <div class="flex justify-end space-x-2">
                        <button
                            type="button"
                            onclick={on_cancel}
                            class="px-4 py-2 text-sm font-medium text-gray-700 bg-gray-100 rounded-md hover:bg-gray-200"
                        >
                            {"Cancel"}
                        </button>
                        <button
                            type="submit"
                            class={classes!(
                                "px-4", "py-2", "text-sm", "font-medium", "text-white", "rounded-md", "focus:outline-none", "focus:ring-2", "focus:ring-offset-2",
                                button_class
                            )}
                        >
                            {button_text}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
