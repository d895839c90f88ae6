use serde::{Deserialize, Serialize};

use crate::models::PasteDraft;

/// Envelope wrapping every successful response body.
#[derive(Serialize)]
pub struct Document<T> {
    pub data: T,
}

/// Request body for paste creation. A missing `data` key behaves like an
/// empty draft and fails validation downstream.
#[derive(Debug, Default, Deserialize)]
pub struct CreatePaste {
    #[serde(default)]
    pub data: PasteDraft,
}
