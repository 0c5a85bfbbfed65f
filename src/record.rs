// Raw recipe records and the field decoder.
// Folds the provider's irregular indexed ingredient fields into the canonical model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Ingredient, Recipe};

const FIELD_ID: &str = "id";
const FIELD_TITLE: &str = "title";
const FIELD_INSTRUCTIONS: &str = "instructions";
const FIELD_THUMBNAIL: &str = "thumbnail";

/// Prefix of the indexed ingredient-name family.
const INGREDIENT_PREFIX: &str = "ingredient";
/// Prefix of the indexed measure family.
const MEASURE_PREFIX: &str = "measure";

/// A loosely-typed recipe record as received from the provider.
///
/// Field values are strings or explicit nulls. Besides the fixed core fields
/// (`id`, `title`, `instructions`, `thumbnail`), records carry two open-ended
/// indexed families (`ingredient1`, `ingredient2`, ... and `measure1`,
/// `measure2`, ...) with no upper bound on the index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    fields: BTreeMap<String, Option<String>>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value of a field, if present and non-null.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|value| value.as_deref())
    }

    /// Set a field value. `None` records an explicit null.
    pub fn set(&mut self, name: impl Into<String>, value: Option<&str>) {
        self.fields.insert(name.into(), value.map(str::to_owned));
    }

    /// Number of fields in the record, nulls included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Core field folded to an owned string; missing and null both degrade to "".
    fn core(&self, name: &str) -> String {
        self.get(name).unwrap_or_default().to_string()
    }

    /// Decode this record into a canonical recipe.
    ///
    /// Never fails: missing or null core fields degrade to empty strings
    /// rather than rejecting the whole record.
    pub fn decode(&self) -> Recipe {
        Recipe {
            id: self.core(FIELD_ID),
            title: self.core(FIELD_TITLE),
            instructions: self.core(FIELD_INSTRUCTIONS),
            thumbnail: self.core(FIELD_THUMBNAIL),
            ingredients: self.paired_ingredients(),
        }
    }

    /// Pair the indexed families into the ordered canonical ingredient list.
    ///
    /// An ingredient at index `i` is included iff both `ingredient<i>` and
    /// `measure<i>` exist, are non-null, and are non-empty after trimming.
    /// Output order is ascending by numeric index.
    fn paired_ingredients(&self) -> Vec<Ingredient> {
        let mut names: BTreeMap<u32, &str> = BTreeMap::new();
        let mut measures: BTreeMap<u32, &str> = BTreeMap::new();

        for (field, value) in &self.fields {
            let Some(value) = value.as_deref() else {
                continue;
            };
            if let Some(index) = indexed_suffix(field, INGREDIENT_PREFIX) {
                names.insert(index, value);
            } else if let Some(index) = indexed_suffix(field, MEASURE_PREFIX) {
                measures.insert(index, value);
            }
        }

        names
            .iter()
            .filter_map(|(index, name)| {
                let measure = measures.get(index)?.trim();
                let name = name.trim();
                if name.is_empty() || measure.is_empty() {
                    return None;
                }
                Some(Ingredient {
                    name: name.to_string(),
                    measure: measure.to_string(),
                })
            })
            .collect()
    }
}

/// Parse `field` as `prefix` followed by a positive integer index.
///
/// Suffixes that are empty, not all digits, zero, or out of range yield
/// `None`; such fields stay in the raw map but are invisible to pairing.
fn indexed_suffix(field: &str, prefix: &str) -> Option<u32> {
    let suffix = field.strip_prefix(prefix)?;
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match suffix.parse::<u32>() {
        Ok(index) if index > 0 => Some(index),
        _ => None,
    }
}

impl Recipe {
    /// Encode this recipe back into the flat record shape.
    ///
    /// Ingredient pairs are written at consecutive indices starting from 1,
    /// so encoding followed by decoding reproduces the same ingredient list.
    pub fn to_record(&self) -> RawRecord {
        let mut record = RawRecord::new();
        record.set(FIELD_ID, Some(&self.id));
        record.set(FIELD_TITLE, Some(&self.title));
        record.set(FIELD_INSTRUCTIONS, Some(&self.instructions));
        record.set(FIELD_THUMBNAIL, Some(&self.thumbnail));
        for (slot, ingredient) in self.ingredients.iter().enumerate() {
            let index = slot + 1;
            record.set(
                format!("{}{}", INGREDIENT_PREFIX, index),
                Some(&ingredient.name),
            );
            record.set(
                format!("{}{}", MEASURE_PREFIX, index),
                Some(&ingredient.measure),
            );
        }
        record
    }
}
