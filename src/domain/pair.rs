//! Swap pair types.
//!
//! A [`TokenPair`] is the raw input/output selection made in the swap
//! selector. It carries no base/quote meaning on its own; [`Roles`] are
//! derived from it together with the reversal flag.

use serde::{Deserialize, Serialize};

use super::asset::AssetId;

/// Raw, role-agnostic swap selection.
///
/// `input` and `output` may transiently be equal while the user edits one
/// side; such a pair is [degenerate](TokenPair::is_degenerate) and is never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenPair {
    pub input: AssetId,
    pub output: AssetId,
}

impl TokenPair {
    #[must_use]
    pub fn new(input: AssetId, output: AssetId) -> Self {
        Self { input, output }
    }

    /// True when both sides name the same asset.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.input == self.output
    }

    /// Resolve base and quote roles for the given reversal flag.
    #[must_use]
    pub fn roles(&self, reversed: bool) -> Roles {
        if reversed {
            Roles {
                base: self.output.clone(),
                quote: self.input.clone(),
            }
        } else {
            Roles {
                base: self.input.clone(),
                quote: self.output.clone(),
            }
        }
    }
}

impl Default for TokenPair {
    /// `(native, default quote)`.
    fn default() -> Self {
        Self::new(AssetId::native(), AssetId::default_quote())
    }
}

/// Canonical trading roles derived from a [`TokenPair`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roles {
    pub base: AssetId,
    pub quote: AssetId,
}

/// Serialized form of a [`TokenPair`] kept in the key-value store.
///
/// Either side may be missing in a stored document; a missing side means
/// "keep the default". `reversed` records the role orientation at save
/// time. A document without it is ordered by priority on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedPair {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_mint: Option<AssetId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_mint: Option<AssetId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reversed: Option<bool>,
}

impl PersistedPair {
    /// Snapshot of `pair` with its role orientation.
    #[must_use]
    pub fn new(pair: &TokenPair, reversed: bool) -> Self {
        Self {
            input_mint: Some(pair.input.clone()),
            output_mint: Some(pair.output.clone()),
            reversed: Some(reversed),
        }
    }

    /// Stored orientation, if this document describes exactly `pair`.
    ///
    /// A pair changed by [`apply_to`](Self::apply_to) no longer matches the
    /// document, so its stored orientation does not apply.
    #[must_use]
    pub fn orientation_of(&self, pair: &TokenPair) -> Option<bool> {
        let same = self.input_mint.as_ref() == Some(&pair.input)
            && self.output_mint.as_ref() == Some(&pair.output);
        self.reversed.filter(|_| same)
    }

    /// Apply this cached pair on top of `current`.
    ///
    /// The cached input replaces the current input when present. The cached
    /// output replaces the current output only when present and different
    /// from the cached input. The result is still degenerate when the cached
    /// input equals the current output; that is left as is.
    #[must_use]
    pub fn apply_to(&self, current: &TokenPair) -> TokenPair {
        let mut pair = current.clone();
        if let Some(input) = &self.input_mint {
            pair.input = input.clone();
        }
        if let Some(output) = &self.output_mint {
            if self.input_mint.as_ref() != Some(output) {
                pair.output = output.clone();
            }
        }
        pair
    }

    /// True when neither side is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.input_mint.is_none() && self.output_mint.is_none()
    }
}
