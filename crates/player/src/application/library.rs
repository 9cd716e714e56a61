//! Saved-template intents: save, load, delete, duplicate, clear and sharing

use tmplbldr_domain::{DomainError, SaveTarget, Template, TemplateId};
use tmplbldr_shared::share_url;
use url::Url;

use super::error::ShareActionError;
use super::messages;
use super::store::TemplateStore;

impl TemplateStore {
    /// Save the working template into the library.
    ///
    /// A blank name sets the name-field error and leaves the library
    /// untouched. On success the working template is bound to the returned id.
    pub fn save(&mut self) -> Result<TemplateId, DomainError> {
        let now = self.platform.now();
        let target = match self.library.save(&self.working, self.current_id, now) {
            Ok(target) => target,
            Err(e) => {
                tracing::debug!(error = %e, "Save rejected");
                self.name_error = Some(messages::NAME_REQUIRED.to_string());
                self.platform.notify_error(messages::NAME_REQUIRED_TOAST);
                return Err(e);
            }
        };

        if let SaveTarget::Overwrite {
            id,
            orphaned: Some(previous),
        } = target
        {
            tracing::warn!(
                %id,
                %previous,
                "Renamed template saved over another entry; previous entry left as is"
            );
        }

        let id = target.id();
        self.current_id = Some(id);
        self.name_error = None;
        self.working.name = self.working.name.trim().to_string();

        self.persist_library();
        self.persist_working();

        tracing::info!(%id, name = %self.working.name, "Template saved");
        self.platform.notify_success(messages::SAVED);
        Ok(id)
    }

    /// Copy a saved template into the working template. Unknown ids are ignored.
    pub fn load(&mut self, id: TemplateId) -> bool {
        let Some(saved) = self.library.get(id).cloned() else {
            tracing::debug!(%id, "Load of unknown template ignored");
            return false;
        };

        let notice = messages::loaded(saved.name());
        self.working = saved.template;
        self.current_id = Some(id);
        self.name_error = None;
        self.persist_working();

        self.platform.notify_success(&notice);
        true
    }

    /// Reset to an empty unsaved template after confirmation.
    ///
    /// Returns whether the reset happened.
    pub fn clear(&mut self) -> bool {
        if !self.platform.confirm(messages::CONFIRM_CLEAR) {
            return false;
        }

        self.reset_working();
        self.platform.notify_info(messages::CLEARED);
        true
    }

    /// Delete a saved template after confirmation.
    ///
    /// Deleting the template currently loaded also resets the working
    /// template. Unknown ids are ignored without prompting.
    pub fn delete(&mut self, id: TemplateId) -> bool {
        if self.library.get(id).is_none() {
            tracing::debug!(%id, "Delete of unknown template ignored");
            return false;
        }
        if !self.platform.confirm(messages::CONFIRM_DELETE) {
            return false;
        }

        self.library.remove(id);
        if self.current_id == Some(id) {
            self.reset_working();
        }
        self.persist_library();

        tracing::info!(%id, "Template deleted");
        self.platform.notify_success(messages::DELETED);
        true
    }

    /// Start an unsaved copy of a saved template named `"<name> - Copy"`.
    pub fn duplicate(&mut self, id: TemplateId) -> bool {
        let Some(copy) = self.library.duplicate_of(id) else {
            tracing::debug!(%id, "Duplicate of unknown template ignored");
            return false;
        };

        self.working = copy;
        self.current_id = None;
        self.persist_working();

        self.platform.notify_success(messages::DUPLICATED);
        true
    }

    /// Copy a share link for the working template to the clipboard.
    pub async fn share(&self) -> Result<Url, ShareActionError> {
        let result = self.copy_share_link(&self.working).await;
        match &result {
            Ok(_) => self.platform.notify_success(messages::SHARE_COPIED),
            Err(e) => {
                tracing::warn!(error = %e, "Share failed");
                self.platform.notify_error(messages::COPY_FAILED);
            }
        }
        result
    }

    /// Copy a share link for a saved template without touching the working
    /// template.
    pub async fn share_existing(&self, id: TemplateId) -> Result<Url, ShareActionError> {
        let saved = self.library.require(id)?;

        let result = self.copy_share_link(&saved.template).await;
        match &result {
            Ok(_) => self
                .platform
                .notify_success(&messages::saved_share_copied(saved.name())),
            Err(e) => {
                tracing::warn!(%id, error = %e, "Share of saved template failed");
                self.platform.notify_error(messages::COPY_FAILED);
            }
        }
        result
    }

    async fn copy_share_link(&self, template: &Template) -> Result<Url, ShareActionError> {
        let page = self
            .platform
            .current_url()
            .ok_or(ShareActionError::NoPageAddress)?;
        let url = share_url(&page, template)?;
        self.platform.write_clipboard(url.as_str()).await?;
        Ok(url)
    }
}
