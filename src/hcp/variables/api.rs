//! Variable API operations
//!
//! The same calls serve workspace variables (`/workspaces/:id/vars`) and
//! variable-set variables (`/varsets/:id/relationships/vars`); the scope picks
//! the collection.

use log::debug;

use crate::error::{Result, TfeError};
use crate::hcp::directory::collection_path;
use crate::hcp::models::{document, update_document};
use crate::hcp::resource::{ResourceKind, ResourceRef, Scope};
use crate::hcp::TfeClient;

use super::models::{Variable, VariableCreateOptions, VariableUpdateOptions};
use super::record::VariableRecord;

fn variable_path(scope: &Scope, var_id: &str) -> Result<String> {
    Ok(format!(
        "{}/{}",
        collection_path(scope, ResourceKind::Variable)?,
        urlencoding::encode(var_id)
    ))
}

impl TfeClient {
    /// List every variable in a workspace or variable set
    pub async fn list_variables(&self, scope: &Scope) -> Result<Vec<VariableRecord>> {
        let vars = self.list_models::<Variable>(scope).await?;
        debug!("Found {} variable(s) in {}", vars.len(), scope);
        Ok(vars.into_iter().map(VariableRecord::from).collect())
    }

    /// Find one variable by reference
    ///
    /// The variable APIs have no single-item read that works for both scopes,
    /// so the record comes from the listing.
    pub async fn get_variable(
        &self,
        scope: &Scope,
        var: &ResourceRef,
    ) -> Result<VariableRecord> {
        self.list_variables(scope)
            .await?
            .into_iter()
            .find(|record| record.id == var.id)
            .ok_or_else(|| TfeError::not_found(ResourceKind::Variable, var.label(), scope))
    }

    /// Create a variable
    pub async fn create_variable(
        &self,
        scope: &Scope,
        options: &VariableCreateOptions,
    ) -> Result<VariableRecord> {
        let path = collection_path(scope, ResourceKind::Variable)?;
        let body = document(ResourceKind::Variable, options);
        let label = format!("variable '{}' in {}", options.key, scope);

        let created: Variable = self.create_resource(&path, &body, &label).await?;
        Ok(created.into())
    }

    /// Update a variable
    pub async fn update_variable(
        &self,
        scope: &Scope,
        var_id: &str,
        options: &VariableUpdateOptions,
    ) -> Result<VariableRecord> {
        let path = variable_path(scope, var_id)?;
        let body = update_document(ResourceKind::Variable, var_id, options);
        let label = format!("variable '{}' in {}", var_id, scope);

        let updated: Variable = self.update_resource(&path, &body, &label).await?;
        Ok(updated.into())
    }

    /// Delete a variable
    pub async fn delete_variable(&self, scope: &Scope, var_id: &str) -> Result<()> {
        let path = variable_path(scope, var_id)?;
        self.delete_resource(&path, &format!("variable '{}' in {}", var_id, scope))
            .await
    }
}
