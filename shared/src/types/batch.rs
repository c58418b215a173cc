//! Coffee batch inventory types

use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult, ensure_non_negative, parse_non_negative, parse_whole};

/// A priced inventory lot with flavor and logistics attributes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub acid: f64,
    pub bitter: f64,
    pub sweet: f64,
    pub caffeine: f64,
    /// Kilograms available
    pub stock: f64,
    /// Days until expiry
    pub expiry: u32,
}

/// Batch contents before the registry has assigned an id
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub price: f64,
    pub acid: f64,
    pub bitter: f64,
    pub sweet: f64,
    pub caffeine: f64,
    pub stock: f64,
    pub expiry: u32,
}

impl BatchDraft {
    /// Defaults offered when the operator opens a new batch form
    pub fn template(sequence: usize) -> Self {
        Self {
            id: None,
            name: format!("New batch #{sequence}"),
            price: 120000.0,
            acid: 5.0,
            bitter: 5.0,
            sweet: 5.0,
            caffeine: 2.0,
            stock: 1000.0,
            expiry: 90,
        }
    }

    pub fn validate(&self) -> ValidationResult<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if let Some(id) = &self.id {
            if id.trim().is_empty() {
                return Err(ValidationError::missing("id"));
            }
        }
        ensure_non_negative("price", self.price)?;
        ensure_non_negative("acid", self.acid)?;
        ensure_non_negative("bitter", self.bitter)?;
        ensure_non_negative("sweet", self.sweet)?;
        ensure_non_negative("caffeine", self.caffeine)?;
        ensure_non_negative("stock", self.stock)?;
        Ok(())
    }

    /// Attach an id, discarding any id carried by the draft
    pub fn into_batch(self, id: String) -> Batch {
        Batch {
            id,
            name: self.name.trim().to_string(),
            price: self.price,
            acid: self.acid,
            bitter: self.bitter,
            sweet: self.sweet,
            caffeine: self.caffeine,
            stock: self.stock,
            expiry: self.expiry,
        }
    }
}

impl From<Batch> for BatchDraft {
    fn from(batch: Batch) -> Self {
        Self {
            id: Some(batch.id),
            name: batch.name,
            price: batch.price,
            acid: batch.acid,
            bitter: batch.bitter,
            sweet: batch.sweet,
            caffeine: batch.caffeine,
            stock: batch.stock,
            expiry: batch.expiry,
        }
    }
}

/// Raw operator text for each batch field, as typed into a form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchForm {
    pub name: Option<String>,
    pub price: Option<String>,
    pub acid: Option<String>,
    pub bitter: Option<String>,
    pub sweet: Option<String>,
    pub caffeine: Option<String>,
    pub stock: Option<String>,
    pub expiry: Option<String>,
}

impl BatchForm {
    /// Parse every field; the first failure aborts the whole form
    pub fn parse(&self) -> ValidationResult<BatchDraft> {
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or(ValidationError::EmptyName)?;

        let draft = BatchDraft {
            id: None,
            name: name.to_string(),
            price: parse_non_negative("price", self.price.as_deref())?,
            acid: parse_non_negative("acid", self.acid.as_deref())?,
            bitter: parse_non_negative("bitter", self.bitter.as_deref())?,
            sweet: parse_non_negative("sweet", self.sweet.as_deref())?,
            caffeine: parse_non_negative("caffeine", self.caffeine.as_deref())?,
            stock: parse_non_negative("stock", self.stock.as_deref())?,
            expiry: parse_whole("expiry", self.expiry.as_deref())?,
        };
        draft.validate()?;
        Ok(draft)
    }
}

/// Inventory the workbench starts with when no file is supplied
pub fn demo_inventory() -> Vec<Batch> {
    vec![
        Batch {
            id: "B1".to_string(),
            name: "Robusta Dak Lak".to_string(),
            price: 120000.0,
            acid: 4.0,
            bitter: 8.0,
            sweet: 3.0,
            caffeine: 2.5,
            stock: 1000.0,
            expiry: 50,
        },
        Batch {
            id: "B2".to_string(),
            name: "Arabica Cau Dat".to_string(),
            price: 220000.0,
            acid: 8.0,
            bitter: 3.0,
            sweet: 7.0,
            caffeine: 1.2,
            stock: 500.0,
            expiry: 200,
        },
        Batch {
            id: "B3".to_string(),
            name: "Culi Special".to_string(),
            price: 140000.0,
            acid: 5.0,
            bitter: 9.0,
            sweet: 3.5,
            caffeine: 3.0,
            stock: 800.0,
            expiry: 100,
        },
    ]
}
