//! Identifier resolver
//!
//! Turns a caller-supplied name or id into a `ResourceRef`. Ids are trusted
//! as-is and cost no requests; names are looked up by enumerating the
//! collection for the scope.

use futures::stream::TryStreamExt;
use log::debug;

use crate::error::{Result, TfeError};
use crate::hcp::resource::{Identifier, MatchPolicy, ResourceKind, ResourceRef, Scope};
use crate::hcp::TfeClient;

/// Resolves names and ids for any resource kind
pub struct Resolver<'a> {
    client: &'a TfeClient,
    policy: MatchPolicy,
}

impl<'a> Resolver<'a> {
    pub fn new(client: &'a TfeClient, policy: MatchPolicy) -> Self {
        Self { client, policy }
    }

    /// Resolve an identifier within a scope
    ///
    /// An id is returned without any request or existence check; a later
    /// operation that uses it surfaces a missing object. A name is compared
    /// byte-for-byte against every entry until a match is found.
    pub async fn resolve(
        &self,
        scope: &Scope,
        kind: ResourceKind,
        input: &Identifier,
    ) -> Result<ResourceRef> {
        match input {
            Identifier::Id(id) => {
                debug!("Using {} id '{}' as given", kind, id);
                Ok(ResourceRef::from_id(kind, id.clone()))
            }
            Identifier::Name(name) => self.resolve_name(scope, kind, name).await,
        }
    }

    /// Resolve from optional `--name` / `--id` values
    pub async fn resolve_args(
        &self,
        scope: &Scope,
        kind: ResourceKind,
        name: Option<&str>,
        id: Option<&str>,
    ) -> Result<ResourceRef> {
        let input = Identifier::from_args(name, id)?;
        self.resolve(scope, kind, &input).await
    }

    async fn resolve_name(
        &self,
        scope: &Scope,
        kind: ResourceKind,
        name: &str,
    ) -> Result<ResourceRef> {
        debug!("Resolving {} '{}' in {}", kind, name, scope);

        let mut entries = self.client.ref_stream(scope, kind)?;
        let mut found: Option<ResourceRef> = None;
        let mut matches = 0usize;

        while let Some(entry) = entries.try_next().await? {
            if entry.name != name {
                continue;
            }
            matches += 1;
            match self.policy {
                MatchPolicy::First => {
                    found = Some(entry);
                    break;
                }
                MatchPolicy::Unique => {
                    if found.is_none() {
                        found = Some(entry);
                    }
                }
            }
        }

        if matches > 1 {
            return Err(TfeError::Ambiguous {
                kind,
                name: name.to_string(),
                scope: scope.to_string(),
                matches,
            });
        }

        match found {
            Some(entry) => {
                debug!("Resolved {} '{}' to {}", kind, name, entry.id);
                Ok(entry)
            }
            None => Err(TfeError::not_found(kind, name, scope)),
        }
    }
}
