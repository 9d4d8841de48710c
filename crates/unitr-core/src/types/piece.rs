//! Unit pieces and the canonical-magnitude algebra over them

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Result;
use crate::numeric::{Numeric, Strategy};
use crate::registry::{PrefixDef, UnitDef};
use crate::types::DimensionVector;

/// Powers closer to zero than this are dropped; closer to one count as one.
pub(crate) const POWER_EPSILON: f64 = 1e-15;

/// One factor of a unit expression, e.g. `km^2`
#[derive(Debug, Clone)]
pub struct UnitPiece<N> {
    pub unit: Arc<UnitDef<N>>,
    pub prefix: Arc<PrefixDef<N>>,
    pub power: N,
}

impl<N: Numeric> UnitPiece<N> {
    /// Prefix plus unit name, e.g. `km`
    pub fn symbol(&self) -> String {
        format!("{}{}", self.prefix.name, self.unit.name)
    }
}

/// Merge pieces naming the same unit into the first one seen, summing powers,
/// then drop pieces whose power cancelled out.
///
/// The merge key is the unit name: the first piece's prefix survives.
pub fn combine_duplicates<N: Numeric>(
    pieces: Vec<UnitPiece<N>>,
    strategy: &Strategy<N>,
) -> Result<Vec<UnitPiece<N>>> {
    let mut combined: Vec<UnitPiece<N>> = Vec::with_capacity(pieces.len());
    let mut seen: HashMap<String, usize> = HashMap::new();

    for piece in pieces {
        match seen.get(&piece.unit.name) {
            Some(&i) => {
                let power = strategy.add(&combined[i].power, &piece.power)?;
                combined[i].power = power;
            }
            None => {
                seen.insert(piece.unit.name.clone(), combined.len());
                combined.push(piece);
            }
        }
    }

    // NaN powers are kept so the error surfaces downstream
    combined.retain(|p| !(p.power.to_f64().abs() < POWER_EPSILON));
    Ok(combined)
}

/// More than one piece, or a single piece with a power other than one
pub fn is_compound<N: Numeric>(pieces: &[UnitPiece<N>]) -> bool {
    match pieces {
        [] => false,
        [single] => (single.power.to_f64() - 1.0).abs() > POWER_EPSILON,
        _ => true,
    }
}

/// Sum of each piece's dimensions scaled by its power
pub fn dimensions_of<N: Numeric>(
    pieces: &[UnitPiece<N>],
    strategy: &Strategy<N>,
) -> Result<DimensionVector<N>> {
    let mut dimensions = DimensionVector::zero(strategy)?;
    for piece in pieces {
        let scaled = piece.unit.dimensions.scale(&piece.power, strategy)?;
        dimensions = dimensions.add(&scaled, strategy)?;
    }
    Ok(dimensions)
}

/// Magnitude in coherent base units.
///
/// A lone power-one piece is affine: `(value + offset) * scale * prefix`.
/// Compound expressions ignore offsets.
pub fn normalize<N: Numeric>(pieces: &[UnitPiece<N>], value: &N, strategy: &Strategy<N>) -> Result<N> {
    if pieces.is_empty() {
        return Ok(value.clone());
    }

    if is_compound(pieces) {
        let mut result = value.clone();
        for piece in pieces {
            let factor = piece_factor(piece, strategy)?;
            result = strategy.mul(&result, &factor)?;
        }
        Ok(result)
    } else {
        let piece = &pieces[0];
        let shifted = strategy.add(value, &piece.unit.offset)?;
        let scaled = strategy.mul(&shifted, &piece.unit.scale)?;
        strategy.mul(&scaled, &piece.prefix.factor)
    }
}

/// Inverse of [`normalize`]. `prefix` replaces the first piece's prefix
/// factor for a lone power-one piece.
pub fn denormalize<N: Numeric>(
    pieces: &[UnitPiece<N>],
    value: &N,
    prefix: Option<&N>,
    strategy: &Strategy<N>,
) -> Result<N> {
    if pieces.is_empty() {
        return Ok(value.clone());
    }

    if is_compound(pieces) {
        let mut result = value.clone();
        for piece in pieces {
            let factor = piece_factor(piece, strategy)?;
            result = strategy.div(&result, &factor)?;
        }
        Ok(result)
    } else {
        let piece = &pieces[0];
        let prefix = prefix.unwrap_or(&piece.prefix.factor);
        let unscaled = strategy.div(value, &piece.unit.scale)?;
        let unprefixed = strategy.div(&unscaled, prefix)?;
        strategy.sub(&unprefixed, &piece.unit.offset)
    }
}

/// `scale^power * prefix^power`
fn piece_factor<N: Numeric>(piece: &UnitPiece<N>, strategy: &Strategy<N>) -> Result<N> {
    let unit = strategy.pow(&piece.unit.scale, &piece.power)?;
    let prefix = strategy.pow(&piece.prefix.factor, &piece.power)?;
    strategy.mul(&unit, &prefix)
}
