use yew::prelude::*;

use crate::notification::NotificationState;

#[derive(Properties, PartialEq)]
pub struct NotificationToastProps {
    pub state: NotificationState,
    pub on_close: Callback<()>,
}

#[function_component(NotificationToast)]
pub fn notification_toast(props: &NotificationToastProps) -> Html {
    let NotificationToastProps { state, on_close } = props;

    let close = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <>
            <style>
                {r#"
                    @keyframes toastIn {
                        from { transform: translateX(300px); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    .toast {
                        position: fixed;
                        top: 1.5rem;
                        right: 1.5rem;
                        max-width: 24rem;
                        padding: 1rem;
                        border-radius: 0.75rem;
                        color: #fff;
                        font-weight: 600;
                        z-index: 60;
                        box-shadow: 0 25px 50px -12px rgba(0,0,0,0.25);
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        animation: toastIn 0.3s ease-out forwards;
                    }
                    .toast-success {
                        background: linear-gradient(to right, #22c55e, #059669);
                    }
                    .toast-error {
                        background: linear-gradient(to right, #ef4444, #dc2626);
                    }
                    .toast p {
                        margin: 0;
                    }
                    .toast-close {
                        margin-left: auto;
                        background: none;
                        border: none;
                        color: rgba(255,255,255,0.8);
                        font-size: 1rem;
                        cursor: pointer;
                    }
                    .toast-close:hover {
                        color: #fff;
                    }
                "#}
            </style>
            if state.visible {
                <div class={classes!("toast", state.kind.class())} role="status">
                    <span class="toast-icon">{state.kind.icon()}</span>
                    <p class="toast-message">{state.message.clone()}</p>
                    <button class="toast-close" aria-label="Close notification" onclick={close}>
                        {"✕"}
                    </button>
                </div>
            }
        </>
    }
}
