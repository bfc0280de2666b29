//! Collection enumerator
//!
//! Maps a `(Scope, ResourceKind)` pair to its listing endpoint and presents
//! every page as one flattened sequence of `ResourceRef`s. Listing is
//! read-only and sequential; each call starts a fresh enumeration.

use futures::stream::{LocalBoxStream, StreamExt, TryStreamExt};
use log::debug;
use serde::de::DeserializeOwned;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::agent_pools::AgentPool;
use crate::hcp::agent_tokens::AgentToken;
use crate::hcp::policy_sets::{Policy, PolicySet};
use crate::hcp::projects::Project;
use crate::hcp::resource::{ResourceKind, ResourceRef, Scope};
use crate::hcp::teams::Team;
use crate::hcp::traits::{ApiListResponse, TfeResource};
use crate::hcp::variables::Variable;
use crate::hcp::varsets::VariableSet;
use crate::hcp::workspaces::Workspace;
use crate::hcp::TfeClient;

/// Listing path for a kind within a scope
///
/// Combinations the control plane has no listing for are rejected before any
/// request is made.
pub fn collection_path(scope: &Scope, kind: ResourceKind) -> Result<String> {
    let path = match (scope, kind) {
        (Scope::Organization(org), ResourceKind::Workspace) => {
            format!("/{}/{}/{}", api::ORGANIZATIONS, encode(org), api::WORKSPACES)
        }
        (Scope::Project { org, project }, ResourceKind::Workspace) => format!(
            "/{}/{}/{}?filter[project][id]={}",
            api::ORGANIZATIONS,
            encode(org),
            api::WORKSPACES,
            encode(&project.id)
        ),
        (
            Scope::Organization(org),
            ResourceKind::AgentPool
            | ResourceKind::PolicySet
            | ResourceKind::Policy
            | ResourceKind::Project
            | ResourceKind::Team
            | ResourceKind::VariableSet,
        ) => format!("/{}/{}/{}", api::ORGANIZATIONS, encode(org), kind.api_type()),
        (Scope::AgentPool(pool), ResourceKind::AgentToken) => format!(
            "/{}/{}/{}",
            api::AGENT_POOLS,
            encode(&pool.id),
            api::AUTHENTICATION_TOKENS
        ),
        (Scope::Workspace(ws), ResourceKind::Variable) => {
            format!("/{}/{}/{}", api::WORKSPACES, encode(&ws.id), api::VARS)
        }
        (Scope::VariableSet(set), ResourceKind::Variable) => format!(
            "/{}/{}/relationships/{}",
            api::VARSETS,
            encode(&set.id),
            api::VARS
        ),
        (scope, kind) => {
            return Err(TfeError::InputContract(format!(
                "{} cannot be listed within {}",
                kind.title(),
                scope
            )))
        }
    };
    Ok(path)
}

/// Path of a single object addressed by id (`/<type>/<id>`)
pub fn resource_path(kind: ResourceKind, id: &str) -> String {
    format!("/{}/{}", kind.api_type(), encode(id))
}

fn encode(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

impl TfeClient {
    /// Stream every object of `kind` in `scope` as a `ResourceRef`
    ///
    /// The stream is finite and lazy: pages are fetched only as the consumer
    /// advances, so a resolver that stops at the first match stops paging.
    pub fn ref_stream<'a>(
        &'a self,
        scope: &Scope,
        kind: ResourceKind,
    ) -> Result<LocalBoxStream<'a, Result<ResourceRef>>> {
        let path = collection_path(scope, kind)?;
        let context = format!("{} in {}", kind.plural(), scope);
        debug!("Enumerating {}", context);

        Ok(match kind {
            ResourceKind::AgentPool => self.refs_of::<AgentPool>(path, context),
            ResourceKind::AgentToken => self.refs_of::<AgentToken>(path, context),
            ResourceKind::Policy => self.refs_of::<Policy>(path, context),
            ResourceKind::PolicySet => self.refs_of::<PolicySet>(path, context),
            ResourceKind::Project => self.refs_of::<Project>(path, context),
            ResourceKind::Team => self.refs_of::<Team>(path, context),
            ResourceKind::Variable => self.refs_of::<Variable>(path, context),
            ResourceKind::VariableSet => self.refs_of::<VariableSet>(path, context),
            ResourceKind::Workspace => self.refs_of::<Workspace>(path, context),
        })
    }

    /// Fetch full models of one kind for a scope
    pub async fn list_models<T>(&self, scope: &Scope) -> Result<Vec<T>>
    where
        T: TfeResource + DeserializeOwned,
    {
        let path = collection_path(scope, T::KIND)?;
        let context = format!("{} in {}", T::KIND.plural(), scope);
        self.fetch_all_pages::<T, ApiListResponse<T>>(&path, &context)
            .await
    }

    /// Read one object by id
    ///
    /// A missing object is reported as a 404 so it classifies as `NotFound`.
    pub async fn read_by_id<T>(&self, kind: ResourceKind, id: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let label = format!("{} '{}'", kind, id);
        match self
            .fetch_resource_by_path::<T>(&resource_path(kind, id), &label)
            .await?
        {
            Some((item, _raw)) => Ok(item),
            None => Err(TfeError::Api {
                status: 404,
                message: format!("{} '{}' not found", kind.title(), id),
            }),
        }
    }

    fn refs_of<'a, T>(
        &'a self,
        path: String,
        context: String,
    ) -> LocalBoxStream<'a, Result<ResourceRef>>
    where
        T: TfeResource + DeserializeOwned + 'a,
    {
        self.item_stream::<T, ApiListResponse<T>>(path, context)
            .map_ok(|item| item.to_ref())
            .boxed_local()
    }
}
