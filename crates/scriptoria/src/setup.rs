//! Building a workspace from configuration.

use scriptoria_client::{HttpGateway, ScriptoriaConfig};
use scriptoria_error::ScriptoriaResult;
use scriptoria_session::{Workspace, WorkspaceSettings};
use std::sync::Arc;
use tracing::instrument;

/// Session settings taken from the `[session]` and `[export]` sections.
pub fn workspace_settings(config: &ScriptoriaConfig) -> WorkspaceSettings {
    let session = config.session();
    WorkspaceSettings::new(
        session.idea_bounds(),
        session.default_genre().clone(),
        session.tick_interval(),
        config.export().output_dir().clone(),
    )
}

/// A workspace talking to the configured service over HTTP.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
#[instrument(skip(config), fields(base_url = %config.gateway().base_url()))]
pub fn open_workspace(config: &ScriptoriaConfig) -> ScriptoriaResult<Workspace> {
    let gateway = HttpGateway::new(config.gateway().clone())?;
    Ok(Workspace::with_settings(
        Arc::new(gateway),
        workspace_settings(config),
    ))
}
