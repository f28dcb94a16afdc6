//! Quantity table
//!
//! Named physical quantities and their dimensional formulas, stored in a
//! compile-time perfect hash map. Several names are synonyms and share a
//! formula (ENERGY, KINETIC_ENERGY and WORK; MOMENTUM and IMPULSE).

use crate::dimension::DimensionVector;
use phf::phf_map;

static QUANTITIES: phf::Map<&'static str, &'static str> = phf_map! {
    // Mechanics
    "MASS" => "M¹L⁰T⁰",
    "ACCELERATION" => "M⁰L¹T⁻²",
    "FORCE" => "M¹L¹T⁻²",
    "VELOCITY" => "M⁰L¹T⁻¹",
    "TIME" => "M⁰L⁰T¹",
    "LENGTH" => "M⁰L¹T⁰",
    "ENERGY" => "M¹L²T⁻²",
    "POWER" => "M¹L²T⁻³",
    "KINETIC_ENERGY" => "M¹L²T⁻²",
    "MOMENTUM" => "M¹L¹T⁻¹",
    "PRESSURE" => "M¹L⁻¹T⁻²",
    "DENSITY" => "M¹L⁻³T⁰",
    "WORK" => "M¹L²T⁻²",
    "IMPULSE" => "M¹L¹T⁻¹",
    "FREQUENCY" => "M⁰L⁰T⁻¹",
    "VOLUME" => "M⁰L³T⁰",
    "AREA" => "M⁰L²T⁰",

    // Electromagnetism
    "CHARGE" => "M⁰L⁰T¹I¹",
    "CURRENT" => "M⁰L⁰T⁰I¹",
    "POTENTIAL" => "M¹L²T⁻³I⁻¹",
    "RESISTANCE" => "M¹L²T⁻³I⁻²",
    "CAPACITANCE" => "M⁻¹L⁻²T⁴I²",
    "INDUCTANCE" => "M¹L²T⁻²I⁻²",
};

/// Read-only handle over the built-in quantity table.
#[derive(Debug, Clone, Copy)]
pub struct QuantityTable {
    quantities: &'static phf::Map<&'static str, &'static str>,
}

impl QuantityTable {
    pub fn builtin() -> Self {
        Self {
            quantities: &QUANTITIES,
        }
    }

    /// Exact, case-sensitive lookup of a quantity's formula.
    pub fn lookup(&self, name: &str) -> Option<&'static str> {
        self.quantities.get(name).copied()
    }

    pub fn dimensions(&self, name: &str) -> Option<DimensionVector> {
        self.lookup(name).map(DimensionVector::parse)
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// All quantity names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.quantities.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// All `(name, formula)` pairs, sorted by name.
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        let mut entries: Vec<_> = self
            .quantities
            .entries()
            .map(|(name, formula)| (*name, *formula))
            .collect();
        entries.sort_unstable_by_key(|(name, _)| *name);
        entries
    }

    /// Names of every quantity whose dimensions equal `dims`, sorted.
    pub fn names_for(&self, dims: DimensionVector) -> Vec<&'static str> {
        let mut names: Vec<_> = self
            .quantities
            .entries()
            .filter(|(_, formula)| DimensionVector::parse(formula) == dims)
            .map(|(name, _)| *name)
            .collect();
        names.sort_unstable();
        names
    }
}

impl Default for QuantityTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::superscript;

    #[test]
    fn test_all_quantities_registered() {
        let table = QuantityTable::builtin();
        let expected = [
            "MASS",
            "ACCELERATION",
            "FORCE",
            "VELOCITY",
            "TIME",
            "LENGTH",
            "ENERGY",
            "POWER",
            "KINETIC_ENERGY",
            "MOMENTUM",
            "PRESSURE",
            "DENSITY",
            "WORK",
            "IMPULSE",
            "FREQUENCY",
            "VOLUME",
            "AREA",
            "CHARGE",
            "CURRENT",
            "POTENTIAL",
            "RESISTANCE",
            "CAPACITANCE",
            "INDUCTANCE",
        ];
        assert_eq!(table.len(), expected.len());
        for name in expected {
            assert!(
                table.lookup(name).is_some(),
                "Quantity '{}' is not registered",
                name
            );
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = QuantityTable::builtin();
        assert_eq!(table.lookup("FORCE"), Some("M¹L¹T⁻²"));
        assert_eq!(table.lookup("force"), None);
        assert_eq!(table.lookup("TORQUE"), None);
    }

    #[test]
    fn test_formulas_use_only_notation_glyphs() {
        for (name, formula) in QuantityTable::builtin().entries() {
            assert!(
                formula
                    .chars()
                    .all(|c| "MLTIθNJ".contains(c) || superscript::is_superscript(c)),
                "formula for {} contains a stray character: {}",
                name,
                formula
            );
        }
    }

    #[test]
    fn test_synonyms_share_dimensions() {
        let table = QuantityTable::builtin();
        assert_eq!(table.dimensions("ENERGY"), table.dimensions("WORK"));
        assert_eq!(table.dimensions("ENERGY"), table.dimensions("KINETIC_ENERGY"));
        assert_eq!(table.dimensions("MOMENTUM"), table.dimensions("IMPULSE"));
    }

    #[test]
    fn test_names_for_reverse_lookup() {
        let table = QuantityTable::builtin();
        let energy = DimensionVector::parse("M¹L²T⁻²");
        assert_eq!(table.names_for(energy), vec!["ENERGY", "KINETIC_ENERGY", "WORK"]);
        assert!(table.names_for(DimensionVector::ZERO).is_empty());
    }

    #[test]
    fn test_entries_sorted() {
        let names = QuantityTable::builtin().names();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names.first(), Some(&"ACCELERATION"));
    }
}
