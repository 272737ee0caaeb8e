//! Editable star drafts and multipart payload building.
//!
//! DESIGN
//! ======
//! A draft holds only text plus display metadata for the image. The staged
//! file itself lives next to the form (it is not `Send` in the browser) and is
//! handed in when the payload is built, so drafts stay plain data.

#[cfg(test)]
#[path = "star_form_test.rs"]
mod star_form_test;

use crate::net::api::{METHOD_OVERRIDE_FIELD, StarPayload};
use crate::net::types::{Star, StarId};
use crate::util::sanitize::{clean_text, safe_image_src};

/// Local validation failures; these never reach the network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("The name field is required.")]
    MissingName,
    #[error("The first name field is required.")]
    MissingFirstName,
    #[error("This star has no identifier and cannot be saved.")]
    MissingId,
}

/// Editable text inputs of a draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Name,
    FirstName,
    Description,
}

impl DraftField {
    /// Multipart field name and input id suffix.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::FirstName => "first_name",
            Self::Description => "description",
        }
    }
}

/// Form state for the create and edit panels.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StarDraft {
    /// Present when editing an existing record.
    pub id: Option<StarId>,
    pub name: String,
    pub first_name: String,
    pub description: String,
    /// Server image URL of the record being edited.
    pub existing_image: Option<String>,
    /// File name of a newly selected image, for display.
    pub staged_image: Option<String>,
}

impl StarDraft {
    /// Seed an edit draft from a record in the working set.
    #[must_use]
    pub fn from_star(star: &Star) -> Self {
        Self {
            id: Some(star.id),
            name: star.name.clone(),
            first_name: star.first_name.clone(),
            description: star.description.clone(),
            existing_image: star.image.clone(),
            staged_image: None,
        }
    }

    #[must_use]
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::FirstName => &self.first_name,
            DraftField::Description => &self.description,
        }
    }

    /// Store raw input; normalization happens when the payload is built.
    pub fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.name = value,
            DraftField::FirstName => self.first_name = value,
            DraftField::Description => self.description = value,
        }
    }

    /// Check required fields after normalization.
    ///
    /// # Errors
    ///
    /// Returns the first missing required field.
    pub fn validate(&self) -> Result<(), DraftError> {
        if clean_text(&self.name).is_empty() {
            return Err(DraftError::MissingName);
        }
        if clean_text(&self.first_name).is_empty() {
            return Err(DraftError::MissingFirstName);
        }
        Ok(())
    }

    /// Preview source for the existing image, filtered for unsafe URLs.
    #[must_use]
    pub fn preview_src(&self) -> Option<String> {
        self.existing_image.as_deref().map(safe_image_src)
    }

    fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", clean_text(&self.name)),
            ("first_name", clean_text(&self.first_name)),
            ("description", clean_text(&self.description)),
        ]
    }

    /// Payload for `POST /api/stars`.
    ///
    /// # Errors
    ///
    /// Returns a [`DraftError`] when required fields are blank.
    pub fn create_payload<F>(&self, image: Option<F>) -> Result<StarPayload<F>, DraftError> {
        self.validate()?;
        Ok(StarPayload { fields: self.text_fields(), image })
    }

    /// Target id and payload for `POST /api/stars/{id}` with a `PUT` override.
    ///
    /// Without a staged file no image part is sent, so the server keeps the
    /// current image.
    ///
    /// # Errors
    ///
    /// Returns a [`DraftError`] when the draft has no id or required fields are blank.
    pub fn update_payload<F>(&self, image: Option<F>) -> Result<(StarId, StarPayload<F>), DraftError> {
        let id = self.id.ok_or(DraftError::MissingId)?;
        self.validate()?;
        let mut fields = self.text_fields();
        fields.push((METHOD_OVERRIDE_FIELD, "PUT".to_owned()));
        Ok((id, StarPayload { fields, image }))
    }
}
