//! Scope analysis options

/// Which elements count as declared by the analysed ontology.
///
/// Imported ontologies are never walked, whichever variant is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locality {
    /// Only the ontology's direct statements. Axioms and assertions owned by
    /// a statement are never local, so no owned axiom candidate survives.
    #[default]
    TopLevelStatements,
    /// Everything contained in the ontology, at any depth: statements and
    /// the axioms and assertions they own.
    OwnedContent,
}

/// Options for diagram scope analysis
#[derive(Debug, Clone, Default)]
pub struct ScopeOptions {
    pub locality: Locality,
}

impl ScopeOptions {
    pub fn with_locality(mut self, locality: Locality) -> Self {
        self.locality = locality;
        self
    }
}
