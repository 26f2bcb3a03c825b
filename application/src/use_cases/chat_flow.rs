//! Chat Flow Controller
//!
//! Orchestrates one chat turn end to end:
//!
//! 0. The transcript opens with the greeting as an assistant message
//! 1. Append the user message to the transcript
//! 2. Call the agent (with timeout); any failure becomes a fallback reply
//! 3. Reconcile the reply's order against the last accepted order
//! 4. On `Replace`: promote the snapshot, rebuild the cart, notify once
//!
//! The whole turn runs under one async mutex, so turns complete in the order
//! they were issued and the cart is never observed half-updated.

use crate::cache::menu_cache::MenuCache;
use crate::config::ChatParams;
use crate::ports::agent_gateway::{AgentGateway, GatewayError};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::order_notifier::{NoNotifier, OrderNotifier};
use crate::ports::product_catalog::{CatalogError, ProductCatalog};
use crate::ports::progress::{ChatProgressNotifier, NoProgress};
use barista_domain::{
    AgentReply, CartStore, CartTotal, DomainError, MenuItems, Message, NormalizedReply,
    OrderSnapshot, Reconciliation, preview, reconcile,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Errors surfaced by the chat flow.
///
/// Agent failures are not errors here: they are recovered into fallback replies.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Message is empty")]
    EmptyMessage,

    #[error("Cart error: {0}")]
    Cart(#[from] DomainError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Result of one chat turn
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// Reply appended to the transcript (possibly a fallback)
    pub reply: AgentReply,
    /// Decision taken for the cart
    pub reconciliation: Reconciliation,
    /// Text sent to the notifier, if any
    pub notification: Option<String>,
    /// Whether `reply` is a locally substituted fallback
    pub fallback: bool,
}

struct ChatState {
    transcript: Vec<Message>,
    current_order: OrderSnapshot,
    cart: CartStore,
    turns: usize,
}

/// Chat session controller
///
/// Owns the transcript, the accepted order, the cart and the menu cache of
/// one session.
pub struct ChatFlowController {
    gateway: Arc<dyn AgentGateway>,
    menu: MenuCache,
    params: ChatParams,
    notifier: Arc<dyn OrderNotifier>,
    progress: Arc<dyn ChatProgressNotifier>,
    conversation_logger: Arc<dyn ConversationLogger>,
    state: Mutex<ChatState>,
}

impl ChatFlowController {
    pub fn new(
        gateway: Arc<dyn AgentGateway>,
        catalog: Arc<dyn ProductCatalog>,
        params: ChatParams,
    ) -> Self {
        let mut transcript = Vec::new();
        if !params.greeting.trim().is_empty() {
            transcript.push(Message::assistant(params.greeting.clone()));
        }
        Self {
            gateway,
            menu: MenuCache::new(catalog),
            params,
            notifier: Arc::new(NoNotifier),
            progress: Arc::new(NoProgress),
            conversation_logger: Arc::new(NoConversationLogger),
            state: Mutex::new(ChatState {
                transcript,
                current_order: OrderSnapshot::empty(),
                cart: CartStore::new(),
                turns: 0,
            }),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn OrderNotifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_progress(mut self, progress: Arc<dyn ChatProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn greeting(&self) -> &str {
        &self.params.greeting
    }

    pub fn menu_cache(&self) -> &MenuCache {
        &self.menu
    }

    // ==================== Chat Turn ====================

    /// Run one chat turn.
    ///
    /// Only an empty message is rejected; agent failures produce a fallback
    /// reply and leave the cart untouched.
    pub async fn send_message(&self, text: &str) -> Result<TurnOutcome, ChatError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let mut state = self.state.lock().await;
        state.turns += 1;
        let turn = state.turns;

        info!("Chat turn {}: {}", turn, preview(text, 80));
        state.transcript.push(Message::user(text));
        self.conversation_logger.log(ConversationEvent::UserMessage {
            turn,
            content: text.to_string(),
        });

        self.progress.on_agent_request_start();
        let result = self.call_agent(&state.transcript).await;
        self.progress.on_agent_request_complete(result.is_ok());

        let (reply, fallback) = match result {
            Ok(normalized) => self.accept_reply(turn, normalized),
            Err(e) => {
                warn!("Agent call failed on turn {}: {}", turn, e);
                self.conversation_logger.log(ConversationEvent::AgentFallback {
                    turn,
                    reason: e.to_string(),
                });
                (AgentReply::fallback(error_reply(&e)), true)
            }
        };

        state.transcript.push(reply.message.clone());

        let reconciliation = reconcile(&state.current_order, reply.order());
        if let Reconciliation::Replace { snapshot, added } = &reconciliation {
            debug!(
                "Order changed on turn {}: {} lines, {} added",
                turn,
                snapshot.len(),
                added.len()
            );
            state.current_order = snapshot.clone();
            state.cart.apply(&reconciliation);
            self.conversation_logger.log(ConversationEvent::OrderReconciled {
                turn,
                order: snapshot.clone(),
                added: added.clone(),
            });
        }

        let notification = reconciliation.notification();
        if let Some(message) = &notification {
            self.notifier.notify(message);
        }

        Ok(TurnOutcome {
            reply,
            reconciliation,
            notification,
            fallback,
        })
    }

    async fn call_agent(&self, messages: &[Message]) -> Result<NormalizedReply, GatewayError> {
        let request = self.gateway.send(messages);
        match self.params.agent_timeout {
            Some(limit) => tokio::time::timeout(limit, request)
                .await
                .unwrap_or(Err(GatewayError::Timeout)),
            None => request.await,
        }
    }

    fn accept_reply(&self, turn: usize, normalized: NormalizedReply) -> (AgentReply, bool) {
        for issue in &normalized.issues {
            warn!("Coerced agent order on turn {}: {}", turn, issue);
        }

        if !normalized.recognized {
            warn!("Unrecognized agent payload on turn {}", turn);
            self.conversation_logger.log(ConversationEvent::AgentFallback {
                turn,
                reason: "unrecognized payload".to_string(),
            });
        } else {
            let message = &normalized.reply.message;
            self.conversation_logger.log(ConversationEvent::AgentReply {
                turn,
                role: message.role,
                content: message.content.clone(),
                memory: message.memory.clone(),
            });
        }

        let fallback = !normalized.recognized;
        (normalized.reply, fallback)
    }

    // ==================== Cart Operations ====================

    /// Add a product directly (the "buy now" path), bypassing the agent.
    ///
    /// Returns the cart key the quantity landed on; a differently cased name
    /// merges into the existing line.
    pub async fn add_item(&self, name: &str, quantity: u32) -> Result<String, ChatError> {
        let mut state = self.state.lock().await;
        let key = state.cart.try_add(name, quantity)?;
        info!("Added {} x {} to cart", quantity, key);
        Ok(key)
    }

    /// Change the quantity of an item by `delta`, clamped at 0.
    ///
    /// Returns the matched cart key and its new quantity.
    pub async fn adjust_item(&self, name: &str, delta: i64) -> Result<(String, u32), ChatError> {
        let mut state = self.state.lock().await;
        let (key, quantity) = state.cart.try_adjust(name, delta)?;
        debug!("Adjusted {} by {}: {} left", key, delta, quantity);
        Ok((key, quantity))
    }

    /// Empty the cart. The accepted order is kept, so an unchanged agent order
    /// will not re-fill it.
    pub async fn empty_cart(&self) {
        self.state.lock().await.cart.clear();
    }

    pub async fn cart_snapshot(&self) -> CartStore {
        self.state.lock().await.cart.clone()
    }

    pub async fn current_order(&self) -> OrderSnapshot {
        self.state.lock().await.current_order.clone()
    }

    pub async fn transcript(&self) -> Vec<Message> {
        self.state.lock().await.transcript.clone()
    }

    // ==================== Menu ====================

    pub async fn menu(&self) -> Result<Arc<MenuItems>, ChatError> {
        let cached = self.menu.peek().await.is_some();
        if !cached {
            self.progress.on_menu_fetch_start();
        }
        let result = self.menu.get().await;
        if !cached {
            self.progress.on_menu_fetch_complete(result.is_ok());
        }
        Ok(result?)
    }

    pub async fn refresh_menu(&self) -> Result<Arc<MenuItems>, ChatError> {
        self.menu.invalidate().await;
        self.menu().await
    }

    /// Price the current cart against the menu.
    pub async fn cart_total(&self) -> Result<CartTotal, ChatError> {
        let menu = self.menu().await?;
        let state = self.state.lock().await;
        Ok(state.cart.total_price(&menu))
    }
}

/// Assistant text shown when the agent call itself failed
pub fn error_reply(error: &GatewayError) -> String {
    format!(
        "I'm sorry, there was an error processing your request: {}",
        error
    )
}
