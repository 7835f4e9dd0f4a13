use storage::{
    SessionStore,
    cart::{CartEntry, CartStats},
    dto::{
        cart::{AddToCartRequest, CartMutationResponse, CartView},
        player::PlayerWithAggregates,
    },
    error::{ScoutError, StorageError},
    models::DataSnapshot,
    services::metrics::rank_players,
};

use crate::{error::WebError, state::SharedCart};

fn ranked_player(snapshot: &DataSnapshot, player_id: i64) -> Option<PlayerWithAggregates> {
    rank_players(&snapshot.players, &snapshot.scores)
        .into_iter()
        .find(|p| p.id() == player_id)
}

/// Snapshots the player's current aggregates into the cart and reveals it
/// when the entry is new.
pub async fn add_player(
    cart: &SharedCart,
    snapshot: &DataSnapshot,
    request: AddToCartRequest,
) -> Result<CartMutationResponse, WebError> {
    let ranked = ranked_player(snapshot, request.player_id).ok_or(WebError::NotFound)?;

    let mut entry = CartEntry::from_ranked(&ranked, request.archetype_tags);
    if let Some(notes) = request.notes {
        entry = entry.with_notes(notes);
    }

    let mut cart = cart.write().await;
    let changed = cart.add_player(entry);
    if changed {
        cart.set_open(true);
    }

    Ok(CartMutationResponse {
        changed,
        cart: CartView::from(&*cart),
    })
}

pub async fn remove_player(cart: &SharedCart, player_id: i64) -> CartMutationResponse {
    let mut cart = cart.write().await;
    let changed = cart.remove_player(player_id);

    CartMutationResponse {
        changed,
        cart: CartView::from(&*cart),
    }
}

pub async fn update_notes(
    cart: &SharedCart,
    player_id: i64,
    notes: String,
) -> CartMutationResponse {
    let mut cart = cart.write().await;
    let changed = cart.update_notes(player_id, notes);

    CartMutationResponse {
        changed,
        cart: CartView::from(&*cart),
    }
}

pub async fn rename(cart: &SharedCart, name: String) -> CartView {
    let mut cart = cart.write().await;
    cart.rename(name);
    CartView::from(&*cart)
}

pub async fn set_visibility(cart: &SharedCart, open: bool) -> CartView {
    let mut cart = cart.write().await;
    cart.set_open(open);
    CartView::from(&*cart)
}

pub async fn clear(cart: &SharedCart) -> CartView {
    let mut cart = cart.write().await;
    cart.clear();
    CartView::from(&*cart)
}

pub async fn view(cart: &SharedCart) -> CartView {
    CartView::from(&*cart.read().await)
}

pub async fn stats(cart: &SharedCart) -> CartStats {
    cart.read().await.stats()
}

/// Delimited body and suggested filename for today's export.
pub async fn export(cart: &SharedCart) -> Result<(String, String), StorageError> {
    let cart = cart.read().await;
    let filename = cart.export_filename(chrono::Utc::now().date_naive());
    Ok((cart.export_delimited()?, filename))
}

pub async fn save_session(
    cart: &SharedCart,
    store: &dyn SessionStore,
) -> Result<String, ScoutError> {
    let cart = cart.read().await;
    cart.save_session(store).await
}
