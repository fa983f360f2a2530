//! Review Submission Pipeline

use thiserror::Error;

use crate::api::{self, ApiError, CreateReviewResponse};
use crate::models::{ModerationRequest, ModerationVerdict, Review, ReviewPayload};
use crate::toast::ToastKind;

/// Language tag sent to moderation
const MODERATION_LANGUAGE: &str = "vi";

const DEFAULT_REJECT_REASON: &str = "Nội dung không phù hợp";

pub const CREATE_FAILED_FALLBACK: &str = "Gửi đánh giá thất bại. Vui lòng đăng nhập và thử lại.";

pub const SUBMIT_SUCCESS: &str = "Gửi đánh giá thành công";

/// What is being reviewed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewSubject {
    Book(i64),
    Stationery(i64),
}

impl ReviewSubject {
    fn moderation_request(&self, payload: &ReviewPayload) -> ModerationRequest {
        let (book_id, stationery_id) = match *self {
            Self::Book(id) => (Some(id), None),
            Self::Stationery(id) => (None, Some(id)),
        };
        ModerationRequest {
            text: payload.comment.clone(),
            rating: payload.rating,
            book_id,
            stationery_id,
            language: MODERATION_LANGUAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReviewError {
    #[error("Vui lòng chọn số sao")]
    MissingRating,
    #[error("Vui lòng nhập nhận xét")]
    EmptyComment,
    #[error("Bị từ chối: {reason}")]
    Rejected { reason: String },
    #[error("Hệ thống kiểm duyệt đang bận. Vui lòng thử lại sau.")]
    ModerationUnavailable,
    #[error("{0}")]
    CreateFailed(String),
}

impl ReviewError {
    /// Toast kind used to report this error
    pub fn severity(&self) -> ToastKind {
        match self {
            Self::MissingRating | Self::EmptyComment | Self::Rejected { .. } => ToastKind::Warning,
            Self::ModerationUnavailable | Self::CreateFailed(_) => ToastKind::Error,
        }
    }
}

/// Unvalidated form input
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReviewDraft {
    pub rating: u8,
    pub comment: String,
}

impl ReviewDraft {
    pub fn new(rating: u8, comment: impl Into<String>) -> Self {
        Self { rating, comment: comment.into() }
    }

    pub fn validate(&self) -> Result<ReviewPayload, ReviewError> {
        if !(1..=5).contains(&self.rating) {
            return Err(ReviewError::MissingRating);
        }
        let comment = self.comment.trim();
        if comment.is_empty() {
            return Err(ReviewError::EmptyComment);
        }
        Ok(ReviewPayload {
            rating: self.rating,
            comment: comment.to_string(),
        })
    }
}

/// Remote side of the pipeline
#[allow(async_fn_in_trait)]
pub trait ReviewBackend {
    async fn moderate(&self, request: &ModerationRequest) -> Result<ModerationVerdict, ApiError>;

    async fn create_review(
        &self,
        subject: ReviewSubject,
        payload: &ReviewPayload,
    ) -> Result<CreateReviewResponse, ApiError>;
}

/// Backend over the REST API
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpReviewBackend;

impl ReviewBackend for HttpReviewBackend {
    async fn moderate(&self, request: &ModerationRequest) -> Result<ModerationVerdict, ApiError> {
        api::moderate_review(request).await
    }

    async fn create_review(
        &self,
        subject: ReviewSubject,
        payload: &ReviewPayload,
    ) -> Result<CreateReviewResponse, ApiError> {
        match subject {
            ReviewSubject::Book(id) => api::create_review(id, payload).await,
            ReviewSubject::Stationery(id) => api::create_stationery_review(id, payload).await,
        }
    }
}

/// Validate, moderate, then create. Returns the record to prepend locally.
pub async fn submit_review<B: ReviewBackend>(
    backend: &B,
    subject: ReviewSubject,
    draft: &ReviewDraft,
    created_at: String,
) -> Result<Review, ReviewError> {
    let payload = draft.validate()?;

    let verdict = backend
        .moderate(&subject.moderation_request(&payload))
        .await
        .map_err(|e| {
            log::warn!("[REVIEW] Moderation failed: {}", e);
            ReviewError::ModerationUnavailable
        })?;

    if !verdict.approved {
        let reason = verdict
            .reason
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REJECT_REASON.to_string());
        log::debug!("[REVIEW] Rejected by moderation: {} {:?}", reason, verdict.flags);
        return Err(ReviewError::Rejected { reason });
    }

    let response = backend.create_review(subject, &payload).await.map_err(|e| {
        let message = e.to_string();
        if message.trim().is_empty() {
            ReviewError::CreateFailed(CREATE_FAILED_FALLBACK.to_string())
        } else {
            ReviewError::CreateFailed(message)
        }
    })?;

    Ok(response.into_review(&payload, created_at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;

    struct FakeBackend {
        verdict: Result<ModerationVerdict, ApiError>,
        created: Result<CreateReviewResponse, ApiError>,
        moderation_calls: RefCell<Vec<ModerationRequest>>,
        create_calls: RefCell<Vec<(ReviewSubject, ReviewPayload)>>,
    }

    impl FakeBackend {
        fn new(verdict: Result<ModerationVerdict, ApiError>) -> Self {
            Self {
                verdict,
                created: Ok(CreateReviewResponse::Other(serde_json::Value::Null)),
                moderation_calls: RefCell::new(Vec::new()),
                create_calls: RefCell::new(Vec::new()),
            }
        }

        fn approving() -> Self {
            Self::new(Ok(verdict(true, None)))
        }
    }

    impl ReviewBackend for FakeBackend {
        async fn moderate(&self, request: &ModerationRequest) -> Result<ModerationVerdict, ApiError> {
            self.moderation_calls.borrow_mut().push(request.clone());
            self.verdict.clone()
        }

        async fn create_review(
            &self,
            subject: ReviewSubject,
            payload: &ReviewPayload,
        ) -> Result<CreateReviewResponse, ApiError> {
            self.create_calls.borrow_mut().push((subject, payload.clone()));
            self.created.clone()
        }
    }

    fn verdict(approved: bool, reason: Option<&str>) -> ModerationVerdict {
        ModerationVerdict {
            approved,
            reason: reason.map(str::to_string),
            flags: Vec::new(),
            severity: None,
        }
    }

    fn run(backend: &FakeBackend, draft: ReviewDraft) -> Result<Review, ReviewError> {
        block_on(submit_review(backend, ReviewSubject::Book(7), &draft, "2024-01-01T00:00:00Z".into()))
    }

    #[test]
    fn test_validation_makes_no_calls() {
        let backend = FakeBackend::approving();
        assert_eq!(run(&backend, ReviewDraft::new(0, "hay")), Err(ReviewError::MissingRating));
        assert_eq!(run(&backend, ReviewDraft::new(6, "hay")), Err(ReviewError::MissingRating));
        assert_eq!(run(&backend, ReviewDraft::new(5, "   \n")), Err(ReviewError::EmptyComment));
        assert!(backend.moderation_calls.borrow().is_empty());
        assert!(backend.create_calls.borrow().is_empty());
    }

    #[test]
    fn test_rejection_skips_create() {
        let backend = FakeBackend::new(Ok(verdict(false, Some("spam"))));
        let err = run(&backend, ReviewDraft::new(5, "mua ngay")).unwrap_err();
        assert_eq!(err.to_string(), "Bị từ chối: spam");
        assert_eq!(err.severity(), ToastKind::Warning);
        assert!(backend.create_calls.borrow().is_empty());
    }

    #[test]
    fn test_rejection_default_reason() {
        let backend = FakeBackend::new(Ok(verdict(false, None)));
        let err = run(&backend, ReviewDraft::new(5, "x")).unwrap_err();
        assert_eq!(err.to_string(), "Bị từ chối: Nội dung không phù hợp");
    }

    #[test]
    fn test_moderation_failure_is_busy() {
        let backend = FakeBackend::new(Err(ApiError::Network("offline".into())));
        let err = run(&backend, ReviewDraft::new(5, "hay")).unwrap_err();
        assert_eq!(err, ReviewError::ModerationUnavailable);
        assert_eq!(err.severity(), ToastKind::Error);
        assert!(backend.create_calls.borrow().is_empty());
    }

    #[test]
    fn test_moderation_request_shape() {
        let backend = FakeBackend::approving();
        block_on(submit_review(
            &backend,
            ReviewSubject::Stationery(3),
            &ReviewDraft::new(4, "  bút viết êm  "),
            "now".into(),
        ))
        .unwrap();
        let calls = backend.moderation_calls.borrow();
        assert_eq!(calls[0].text, "bút viết êm");
        assert_eq!(calls[0].stationery_id, Some(3));
        assert_eq!(calls[0].book_id, None);
        assert_eq!(calls[0].language, "vi");
        let creates = backend.create_calls.borrow();
        assert_eq!(creates[0].0, ReviewSubject::Stationery(3));
        assert_eq!(creates[0].1.comment, "bút viết êm");
    }

    #[test]
    fn test_success_uses_server_record() {
        let mut backend = FakeBackend::approving();
        backend.created = Ok(CreateReviewResponse::from_value(
            json!({"review": {"review_id": 11, "rating": 1, "user": {"name": "Tú"}}}),
        ));
        let review = run(&backend, ReviewDraft::new(5, "Tuyệt vời")).unwrap();
        assert_eq!(review.review_id, Some(11));
        assert_eq!(review.rating, 5);
        assert_eq!(review.comment.as_deref(), Some("Tuyệt vời"));
        assert_eq!(review.created_at.as_deref(), Some("2024-01-01T00:00:00Z"));
        assert_eq!(review.author_name(), "Tú");
    }

    #[test]
    fn test_create_failure_message() {
        let mut backend = FakeBackend::approving();
        backend.created = Err(ApiError::Http { status: 400, message: "Bạn đã đánh giá sách này".into() });
        let err = run(&backend, ReviewDraft::new(5, "hay")).unwrap_err();
        assert_eq!(err, ReviewError::CreateFailed("Bạn đã đánh giá sách này".into()));

        backend.created = Err(ApiError::Network(String::new()));
        let err = run(&backend, ReviewDraft::new(5, "hay")).unwrap_err();
        assert_eq!(err.to_string(), CREATE_FAILED_FALLBACK);
    }
}
