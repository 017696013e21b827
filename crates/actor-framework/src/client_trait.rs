//! # ActorClient Trait
//!
//! Provides a common interface for resource-specific clients, adding default read and
//! subscription methods built on top of a generic `ResourceClient`.
use crate::registry::Subscription;
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read operations.
///
/// A domain client only has to expose its inner [`ResourceClient`] and say how
/// framework failures map onto its own error type. Mutating operations stay on the
/// domain client, where they carry domain names and domain validation.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity, in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Connect a new observer.
    #[tracing::instrument(skip(self))]
    async fn subscribe(&self) -> Result<Subscription<T::Event>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().subscribe().await.map_err(Self::map_error)
    }

    /// Disconnect an observer.
    fn unsubscribe(&self, observer: crate::ObserverId) {
        self.inner().unsubscribe(observer)
    }
}
