//! User-facing notification channel for cart changes.

/// Receives short texts such as `Added to cart: 2 Cappuccino, 1 Croissant`.
///
/// Called at most once per chat turn, and only when the agent's order added
/// something to the cart.
pub trait OrderNotifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Discards every notification.
pub struct NoNotifier;

impl OrderNotifier for NoNotifier {
    fn notify(&self, _message: &str) {}
}
