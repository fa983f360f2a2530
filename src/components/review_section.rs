//! Review Section Component
//!
//! Review form and list for a book or stationery item. Loads the list on
//! mount, gates each submit through the throttle and dialogs, then runs the
//! moderation → create pipeline and prepends the result.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::confirm_dialog::ConfirmDialog;
use super::star_rating::{StarDisplay, StarRatingInput};
use crate::api::{self, ApiError};
use crate::context::use_app_context;
use crate::dates::{format_datetime, now_iso, now_ms};
use crate::models::{average_rating, Review};
use crate::review::{
    block_started_notice, blocked_notice, gate_submission, submit_review, GateAction,
    HttpReviewBackend, ReviewDraft, ReviewSubject, SubmitThrottle, BLOCK_WINDOW_MS, SUBMIT_SUCCESS,
    THROTTLE_TITLE,
};
use crate::session::{self, Session};
use crate::toast::ToastKind;

const TOAST_TITLE: &str = "Đánh giá";

async fn load_reviews(subject: ReviewSubject) -> Result<Vec<Review>, ApiError> {
    match subject {
        ReviewSubject::Book(id) => api::get_book_reviews(id).await,
        ReviewSubject::Stationery(id) => api::get_stationery_reviews(id).await,
    }
}

/// Submit stays off while a request is in flight, while throttled, and when
/// the list already came back 401
fn submit_disabled(submitting: bool, blocked: bool, login_required: bool) -> bool {
    submitting || blocked || login_required
}

#[component]
pub fn ReviewSection(subject: ReviewSubject) -> impl IntoView {
    let ctx = use_app_context();

    // List state
    let reviews = RwSignal::new(Vec::<Review>::new());
    let (loading, set_loading) = signal(true);
    let (load_error, set_load_error) = signal(None::<String>);
    let (login_to_view, set_login_to_view) = signal(false);

    // Form state
    let rating = RwSignal::new(0u8);
    let comment = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let throttle = RwSignal::new(SubmitThrottle::default());
    // Bumped when a block window ends so the button re-enables
    let block_tick = RwSignal::new(0u32);
    let (login_dialog, set_login_dialog) = signal(false);
    let (low_rating_dialog, set_low_rating_dialog) = signal(false);

    spawn_local(async move {
        match load_reviews(subject).await {
            Ok(list) => reviews.set(list),
            Err(e) if e.is_unauthorized() && matches!(subject, ReviewSubject::Stationery(_)) => {
                set_login_to_view.set(true);
            }
            Err(e) => {
                log::warn!("[REVIEWS] Failed to load reviews for {:?}: {}", subject, e);
                set_load_error.set(Some("Không thể tải đánh giá".to_string()));
            }
        }
        set_loading.set(false);
    });

    let blocked = move || {
        block_tick.track();
        throttle.with(|t| t.is_blocked(now_ms()))
    };

    let do_submit = move || {
        submitting.set(true);
        let draft = ReviewDraft::new(rating.get_untracked(), comment.get_untracked());
        spawn_local(async move {
            match submit_review(&HttpReviewBackend, subject, &draft, now_iso()).await {
                Ok(review) => {
                    reviews.update(|list| list.insert(0, review));
                    rating.set(0);
                    comment.set(String::new());
                    ctx.toast(ToastKind::Success, Some(TOAST_TITLE), SUBMIT_SUCCESS);
                }
                Err(e) => ctx.toast(e.severity(), Some(TOAST_TITLE), e.to_string()),
            }
            submitting.set(false);
        });
    };

    let handle_submit = move || {
        let authenticated = ctx.session.with_untracked(Session::is_authenticated);
        let mut state = throttle.get_untracked();
        let decision = gate_submission(&mut state, now_ms(), authenticated, rating.get_untracked());
        throttle.set(state);

        if let GateAction::Blocked { remaining_secs } = decision.action {
            ctx.toast(ToastKind::Warning, Some(THROTTLE_TITLE), blocked_notice(remaining_secs));
            return;
        }
        if decision.block_started {
            ctx.toast(ToastKind::Warning, Some(THROTTLE_TITLE), block_started_notice());
            spawn_local(async move {
                TimeoutFuture::new(BLOCK_WINDOW_MS as u32).await;
                block_tick.try_update(|t| *t += 1);
            });
        }
        match decision.action {
            GateAction::RequireLogin => set_login_dialog.set(true),
            GateAction::ConfirmLowRating => set_low_rating_dialog.set(true),
            GateAction::Proceed => do_submit(),
            GateAction::Blocked { .. } => {}
        }
    };

    let summary = move || {
        reviews.with(|list| {
            average_rating(list).map(|avg| format!("{:.1} / 5 ({} đánh giá)", avg, list.len()))
        })
    };

    view! {
        <section class="review-section">
            <h2>"Đánh Giá & Nhận Xét"</h2>
            {move || summary().map(|s| view! { <p class="review-summary">{s}</p> })}

            <div class="review-form">
                <div class="review-form-stars">
                    <span class="label">"Chọn số sao:"</span>
                    <StarRatingInput rating=rating />
                </div>
                <textarea
                    rows="3"
                    placeholder="Chia sẻ nhận xét của bạn..."
                    prop:value=move || comment.get()
                    on:input=move |ev| comment.set(event_target_value(&ev))
                ></textarea>
                <div class="review-form-actions">
                    <button
                        class="btn btn-primary"
                        disabled=move || submit_disabled(submitting.get(), blocked(), login_to_view.get())
                        on:click=move |_| handle_submit()
                    >
                        {move || if submitting.get() { "Đang gửi..." } else { "Gửi đánh giá" }}
                    </button>
                </div>
                <p class="hint">"Bạn cần đăng nhập để gửi đánh giá."</p>
            </div>

            <Show when=move || loading.get()>
                <p class="muted">"Đang tải đánh giá..."</p>
            </Show>
            <Show when=move || login_to_view.get()>
                <p class="muted">"Vui lòng đăng nhập để xem đánh giá."</p>
            </Show>
            {move || load_error.get().map(|e| view! { <p class="error">{e}</p> })}

            <Show when=move || !loading.get() && load_error.with(Option::is_none) && !login_to_view.get()>
                <div class="review-list">
                    <Show when=move || reviews.with(Vec::is_empty)>
                        <p class="muted">"Chưa có đánh giá nào. Hãy là người đầu tiên!"</p>
                    </Show>
                    {move || {
                        reviews
                            .get()
                            .into_iter()
                            .map(|review| {
                                let created = review.created_at.as_deref().map(format_datetime).unwrap_or_default();
                                view! {
                                    <div class="review-item">
                                        <div class="review-item-header">
                                            <span class="review-author">{review.author_name().to_string()}</span>
                                            <StarDisplay rating=review.rating />
                                            <span class="review-date">{created}</span>
                                        </div>
                                        {review.comment.clone().filter(|c| !c.is_empty()).map(|c| view! {
                                            <p class="review-comment">{c}</p>
                                        })}
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>

            <ConfirmDialog
                open=login_dialog
                title="Yêu cầu đăng nhập"
                message="Bạn cần đăng nhập để viết đánh giá. Chuyển đến trang đăng nhập?"
                confirm_label="Đăng nhập"
                cancel_label="Để sau"
                on_confirm=move |_| {
                    set_login_dialog.set(false);
                    session::redirect_to_login();
                }
                on_cancel=move |_| set_login_dialog.set(false)
            />
            <ConfirmDialog
                open=low_rating_dialog
                title="Xác nhận đánh giá thấp"
                message="Đánh giá dưới 4 sao có thể ảnh hưởng đến thu nhập của sách. Nếu có bất tiện xin vui lòng liên hệ người bán để họ xử lý. Bạn có chắc muốn gửi đánh giá này?"
                confirm_label="Gửi đánh giá"
                cancel_label="Hủy"
                on_confirm=move |_| {
                    set_low_rating_dialog.set(false);
                    do_submit();
                }
                on_cancel=move |_| set_low_rating_dialog.set(false)
            />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_disabled_after_list_unauthorized() {
        assert!(!submit_disabled(false, false, false));
        assert!(submit_disabled(false, false, true));
        assert!(submit_disabled(true, false, false));
        assert!(submit_disabled(false, true, false));
    }
}
