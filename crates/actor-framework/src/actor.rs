//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the single authority over a collection of
//! entities. It implements the "Server" side of the Actor Model: requests are processed
//! sequentially, and every mutation is published to the observers before the next
//! request is looked at.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::registry::ObserverRegistry;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (the entities and
/// the observer registry) and the receiver end of the channel.
///
/// **Concurrency Model**:
/// The actor processes its messages *sequentially* in a loop. A mutation and the
/// publish that follows it run back to back inside one iteration, so no observer and
/// no other request can ever see a half-applied change. There is no `Mutex` around
/// the store: exclusive ownership within the task is the guard.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn the actor's run loop in a background task.
/// 3.  **Use**: Clone the client wherever requests originate.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
///
/// #[derive(Clone, Debug)] struct Counter { value: u32 }
/// #[derive(Debug)] struct Bump;
/// #[derive(Debug, thiserror::Error)] #[error("never")] struct Never;
///
/// impl ActorEntity for Counter {
///     type Id = u32;
///     type Create = u32;
///     type Action = Bump;
///     type Event = u32;
///     type Error = Never;
///
///     fn from_create_params(_: u32, value: u32) -> Result<Self, Never> { Ok(Self { value }) }
///     fn created_event(&self) -> u32 { self.value }
///     fn handle_action(&mut self, _: Bump) -> Result<u32, Never> { self.value += 1; Ok(self.value) }
///     fn snapshot_event(all: Vec<Self>) -> u32 { all.len() as u32 }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let mut next = 0;
///     let (actor, client) = ResourceActor::<Counter>::new(10, 10, move || { next += 1; next });
///     tokio::spawn(actor.run());
///
///     let id = client.create(41).await.unwrap();
///     assert_eq!(client.perform_action(id, Bump).await.unwrap(), 42);
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    entities: Vec<T>,
    index: HashMap<T::Id, usize>,
    observers: ObserverRegistry<T::Event>,
    next_id: Box<dyn FnMut() -> T::Id + Send>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the request channel (at least 1). If the
    ///   channel is full, calls to the client will wait until there is space.
    /// * `observer_buffer` - How many events each observer may lag behind before it
    ///   is disconnected.
    /// * `next_id` - Generator for entity identifiers. It must never repeat a value.
    pub fn new(
        buffer_size: usize,
        observer_buffer: usize,
        next_id: impl FnMut() -> T::Id + Send + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self {
            receiver,
            entities: Vec::new(),
            index: HashMap::new(),
            observers: ObserverRegistry::new(observer_buffer),
            next_id: Box::new(next_id),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Order" instead of "order_board::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id)();

                    match T::from_create_params(id.clone(), params) {
                        Ok(item) => {
                            let event = item.created_event();
                            self.index.insert(id.clone(), self.entities.len());
                            self.entities.push(item);
                            let delivered = self.observers.publish(&event);
                            info!(entity_type, %id, size = self.entities.len(), delivered, "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.index.get(&id).map(|&i| self.entities[i].clone());
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.entities.len(), "List");
                    let _ = respond_to.send(Ok(self.entities.clone()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(&i) = self.index.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    match self.entities[i].handle_action(action) {
                        Ok(event) => {
                            let delivered = self.observers.publish(&event);
                            info!(entity_type, %id, delivered, "Action ok");
                            let _ = respond_to.send(Ok(event));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Action failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Subscribe { respond_to } => {
                    let snapshot = T::snapshot_event(self.entities.clone());
                    let subscription = self.observers.subscribe(snapshot);
                    info!(
                        entity_type,
                        observer = subscription.id,
                        observers = self.observers.len(),
                        size = self.entities.len(),
                        "Observer connected"
                    );
                    if let Err(Ok(subscription)) = respond_to.send(Ok(subscription)) {
                        // Requester went away before the reply arrived.
                        self.observers.unsubscribe(subscription.id);
                    }
                }
                ResourceRequest::Unsubscribe { observer } => {
                    if self.observers.unsubscribe(observer) {
                        info!(entity_type, observer, observers = self.observers.len(), "Observer disconnected");
                    }
                }
            }
        }

        info!(entity_type, size = self.entities.len(), "Shutdown");
    }
}
