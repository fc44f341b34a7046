//! # Product Form
//!
//! Holds the raw text of the add/edit form and turns it into a [`Product`] once every field
//! checks out.
//!
//! ## Lifecycle
//!
//! ```text
//! Closed --open_add()------> Open { mode: Add,      draft: empty   }
//! Closed --open_edit(p)----> Open { mode: Edit(id), draft: from p  }
//! Open   --validate() Err--> Open (errors filled in)
//! Open   --finish()--------> Closed
//! Open   --cancel()--------> Closed (draft discarded)
//! ```
//!
//! `validate` only checks the draft. The caller saves the product and then calls `finish`, so a
//! store-side rejection can still be reported on the open form.
//!
//! ## Rules
//!
//! Every field is checked on every validation; all failures are reported together.

mod validate;

pub use validate::validate;

use crate::model::{Product, ProductId};
use std::collections::BTreeMap;
use std::fmt::Display;

/// A form field, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Sku,
    Price,
    Quantity,
    Category,
}

/// Why a field was refused. The messages are shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("SKU is required")]
    SkuRequired,
    #[error("SKU must be unique")]
    SkuTaken,
    #[error("Price is required")]
    PriceRequired,
    #[error("Price must be a number > 0")]
    PriceInvalid,
    #[error("Quantity is required")]
    QuantityRequired,
    #[error("Quantity must be an integer >= 0")]
    QuantityInvalid,
    #[error("Category is required")]
    CategoryRequired,
    #[error("Category must be one of the listed categories")]
    CategoryUnknown,
}

/// At most one error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }

    pub(crate) fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (_, error) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

/// Raw, unvalidated field text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub name: String,
    pub sku: String,
    pub price: String,
    pub quantity: String,
    pub category: String,
}

impl FormDraft {
    /// Prefills the draft with a product's current values.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            sku: product.sku.clone(),
            price: product.price.to_string(),
            quantity: product.quantity.to_string(),
            category: product.category.to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Sku => &self.sku,
            Field::Price => &self.price,
            Field::Quantity => &self.quantity,
            Field::Category => &self.category,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Sku => &mut self.sku,
            Field::Price => &mut self.price,
            Field::Quantity => &mut self.quantity,
            Field::Category => &mut self.category,
        };
        *slot = value.into();
    }
}

/// Whether the form creates a product or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(ProductId),
}

impl FormMode {
    /// Id of the product being edited, if any.
    pub fn editing(&self) -> Option<&ProductId> {
        match self {
            FormMode::Add => None,
            FormMode::Edit(id) => Some(id),
        }
    }
}

/// An open form.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenForm {
    pub mode: FormMode,
    pub draft: FormDraft,
    pub errors: FieldErrors,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormState {
    #[default]
    Closed,
    Open(OpenForm),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("No product form is open")]
    NotOpen,
    #[error("Invalid product: {0}")]
    Invalid(FieldErrors),
}

/// The add/edit form state machine.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    state: FormState,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, FormState::Open(_))
    }

    pub fn open(&self) -> Option<&OpenForm> {
        match &self.state {
            FormState::Open(open) => Some(open),
            FormState::Closed => None,
        }
    }

    /// Opens an empty form for a new product, replacing any open draft.
    pub fn open_add(&mut self) {
        self.state = FormState::Open(OpenForm {
            mode: FormMode::Add,
            draft: FormDraft::default(),
            errors: FieldErrors::default(),
        });
    }

    /// Opens the form prefilled with `product`.
    pub fn open_edit(&mut self, product: &Product) {
        self.state = FormState::Open(OpenForm {
            mode: FormMode::Edit(product.id.clone()),
            draft: FormDraft::from_product(product),
            errors: FieldErrors::default(),
        });
    }

    /// Replaces one field's text and clears its pending error.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), FormError> {
        let open = self.open_mut()?;
        open.draft.set(field, value);
        open.errors.clear(field);
        Ok(())
    }

    /// The trimmed SKU to check for uniqueness and the id allowed to hold it.
    ///
    /// `None` when the form is closed or the SKU is blank (blank is reported as required).
    pub fn sku_probe(&self) -> Option<(String, Option<ProductId>)> {
        let open = self.open()?;
        let sku = open.draft.sku.trim();
        if sku.is_empty() {
            return None;
        }
        Some((sku.to_string(), open.mode.editing().cloned()))
    }

    /// Validates the draft. On failure the errors are kept on the form and returned.
    ///
    /// `sku_taken` is the answer to the [`sku_probe`](Self::sku_probe) lookup.
    pub fn validate(&mut self, sku_taken: bool) -> Result<Product, FormError> {
        let open = self.open_mut()?;
        match validate(&open.draft, &open.mode, sku_taken) {
            Ok(product) => {
                open.errors = FieldErrors::default();
                Ok(product)
            }
            Err(errors) => {
                open.errors = errors.clone();
                Err(FormError::Invalid(errors))
            }
        }
    }

    /// Records an error found after `validate`, e.g. a SKU clash reported by the store.
    pub fn reject(&mut self, field: Field, error: FieldError) -> Result<FieldErrors, FormError> {
        let open = self.open_mut()?;
        open.errors.insert(field, error);
        Ok(open.errors.clone())
    }

    /// Closes the form after its product was saved.
    pub fn finish(&mut self) {
        self.state = FormState::Closed;
    }

    /// Closes the form and discards the draft.
    pub fn cancel(&mut self) {
        self.state = FormState::Closed;
    }

    fn open_mut(&mut self) -> Result<&mut OpenForm, FormError> {
        match &mut self.state {
            FormState::Open(open) => Ok(open),
            FormState::Closed => Err(FormError::NotOpen),
        }
    }
}
