use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::cart::{CartEntry, ScoutCart};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCartResponse {
    pub cart_id: Uuid,
}

/// Request payload for moving a ranked player into a cart
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddToCartRequest {
    pub player_id: i64,

    #[serde(default)]
    #[validate(length(max = 10, message = "At most 10 archetype tags"))]
    #[validate(custom(function = "validate_tags"))]
    pub archetype_tags: Vec<String>,

    #[validate(length(max = 2000, message = "Notes must be at most 2000 characters"))]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateNotesRequest {
    #[validate(length(max = 2000, message = "Notes must be at most 2000 characters"))]
    pub notes: String,
}

/// Empty names are allowed; only the length is bounded.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RenameCartRequest {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VisibilityRequest {
    pub open: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CartView {
    pub name: String,
    pub is_open: bool,
    pub entries: Vec<CartEntry>,
}

impl From<&ScoutCart> for CartView {
    fn from(cart: &ScoutCart) -> Self {
        Self {
            name: cart.name().to_string(),
            is_open: cart.is_open(),
            entries: cart.entries().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CartMutationResponse {
    /// False when the call was a no-op (duplicate add, unknown player id).
    pub changed: bool,
    pub cart: CartView,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SaveSessionResponse {
    pub session_id: String,
}

fn validate_tags(tags: &[String]) -> Result<(), validator::ValidationError> {
    if tags.iter().any(|t| t.trim().is_empty() || t.chars().count() > 50) {
        return Err(validator::ValidationError::new("invalid_archetype_tag"));
    }
    Ok(())
}
