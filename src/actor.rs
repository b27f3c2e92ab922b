use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use serde_derive::{Deserialize, Serialize};

use crate::errors::ActorError;

/// Method name the backend actor exposes the greeting under.
pub const GREET_METHOD: &str = "greet";

/// The remote greeting capability the handler is injected with.
#[async_trait]
pub trait Greeter: Send + Sync {
    async fn greet(&self, name: &str) -> Result<String, ActorError>;
}

#[async_trait]
impl<T> Greeter for Arc<T>
where
    T: Greeter + ?Sized,
{
    async fn greet(&self, name: &str) -> Result<String, ActorError> {
        (**self).greet(name).await
    }
}

#[async_trait]
impl<T> Greeter for Box<T>
where
    T: Greeter + ?Sized,
{
    async fn greet(&self, name: &str) -> Result<String, ActorError> {
        (**self).greet(name).await
    }
}

/// Opaque channel to the backend actor. Construction, transport and
/// authentication of the channel live outside this crate.
#[async_trait]
pub trait ActorCall: Send + Sync {
    async fn call(&self, method: &str, args: Vec<u8>) -> Result<Vec<u8>, ActorError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetRequest {
    pub name: String,
}

/// Reply to a greet call: either the greeting or the actor's reject message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetResponse {
    greeting: Option<String>,
    reject: Option<String>,
}

impl GreetResponse {
    pub fn new(greeting: Option<String>, reject: Option<String>) -> Self {
        Self { greeting, reject }
    }

    pub fn from_result(result: Result<String, String>) -> Self {
        match result {
            Ok(greeting) => Self::new(Some(greeting), None),
            Err(reject) => Self::new(None, Some(reject)),
        }
    }

    pub fn greeting(&self) -> Option<&str> {
        self.greeting.as_deref()
    }

    pub fn reject(&self) -> Option<&str> {
        self.reject.as_deref()
    }

    pub fn into_result(self) -> Result<String, ActorError> {
        match (self.greeting, self.reject) {
            (_, Some(reject)) => Err(ActorError::Rejected(reject)),
            (Some(greeting), None) => Ok(greeting),
            (None, None) => Err(ActorError::Codec("empty greet reply".to_string())),
        }
    }
}

/// Actor client that speaks `greet` over an [`ActorCall`] channel.
pub struct ActorClient<C> {
    inner: C,
}

impl<C: ActorCall> ActorClient<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

#[async_trait]
impl<C: ActorCall> Greeter for ActorClient<C> {
    async fn greet(&self, name: &str) -> Result<String, ActorError> {
        let request = GreetRequest {
            name: name.to_string(),
        };
        let args = rmp_serde::to_vec(&request)?;
        debug!("calling {} with {} byte argument", GREET_METHOD, args.len());

        let reply = self.inner.call(GREET_METHOD, args).await?;
        let response: GreetResponse = rmp_serde::from_slice(&reply)?;
        response.into_result()
    }
}
