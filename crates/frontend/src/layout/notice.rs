//! Transient success / failure banner driven by [`AppGlobalContext::notice`].

use crate::layout::global_context::{AppGlobalContext, NoticeKind};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn NoticeBar() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    view! {
        {move || ctx.notice.get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "notice notice--success",
                NoticeKind::Error => "notice notice--error",
            };
            view! {
                <div class=class role="status">
                    <span class="notice__text">{notice.text}</span>
                    <button class="notice__close" on:click=move |_| ctx.dismiss_notice()>
                        {icon("x")}
                    </button>
                </div>
            }
        })}
    }
}
