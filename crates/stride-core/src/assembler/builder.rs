//! Builder for creating and configuring PlanAssembler instances.

use std::{fmt, sync::Arc};

use jiff::Timestamp;

use super::{Collaborator, PlanAssembler};
use crate::{
    error::{Result, StrideError},
    models::UserContext,
};

/// User id used when the caller does not provide one.
pub const DEFAULT_USER_ID: &str = "default-user";

/// Builder for creating and configuring [`PlanAssembler`] instances.
#[derive(Clone)]
pub struct PlanAssemblerBuilder {
    user_id: String,
    user_context: Option<UserContext>,
    attribution: bool,
    fixed_now: Option<Timestamp>,
    collaborator: Option<Arc<dyn Collaborator>>,
}

impl PlanAssemblerBuilder {
    /// Creates a new builder with default settings: the default user,
    /// attribution enabled, the system clock and no collaborator.
    pub fn new() -> Self {
        Self {
            user_id: DEFAULT_USER_ID.to_string(),
            user_context: None,
            attribution: true,
            fixed_now: None,
            collaborator: None,
        }
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Sets the working preferences used when a goal carries none.
    ///
    /// If not specified, defaults for the configured user id are used.
    pub fn with_user_context(mut self, context: UserContext) -> Self {
        self.user_context = Some(context);
        self
    }

    /// Enables or disables end-user attribution on collaborator requests.
    pub fn with_attribution(mut self, enabled: bool) -> Self {
        self.attribution = enabled;
        self
    }

    /// Freezes "now" so repeated assemblies produce identical timelines.
    pub fn with_fixed_time(mut self, now: Timestamp) -> Self {
        self.fixed_now = Some(now);
        self
    }

    pub fn with_collaborator(mut self, collaborator: Arc<dyn Collaborator>) -> Self {
        self.collaborator = Some(collaborator);
        self
    }

    /// Builds the configured assembler.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::Configuration` if the user id is blank
    pub fn build(self) -> Result<PlanAssembler> {
        let user_id = self.user_id.trim().to_string();
        if user_id.is_empty() {
            return Err(StrideError::Configuration {
                message: "user id must not be empty".to_string(),
            });
        }

        Ok(PlanAssembler::new(
            user_id,
            self.user_context,
            self.attribution,
            self.fixed_now,
            self.collaborator,
        ))
    }
}

impl Default for PlanAssemblerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PlanAssemblerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanAssemblerBuilder")
            .field("user_id", &self.user_id)
            .field("user_context", &self.user_context)
            .field("attribution", &self.attribution)
            .field("fixed_now", &self.fixed_now)
            .field("collaborator", &self.collaborator.is_some())
            .finish()
    }
}
