use super::ModelRef;

/// Describes a relationship field: which model it holds, and which columns
/// join the two sides.
#[derive(Debug, Clone)]
pub struct Relation {
    /// Name of the field holding the related record(s)
    pub field: String,

    /// The related model
    pub target: ModelRef,

    /// The column on the referencing side.
    ///
    /// For a one-to-one relationship the owner references the target, so
    /// this column belongs to the owner. For a one-to-many relationship each
    /// target row references the owner, so this column belongs to the target.
    pub local_column: String,

    /// The column on the referenced side.
    pub referenced_column: String,

    pub cardinality: Cardinality,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// The field holds a single related record
    One,

    /// The field holds an ordered sequence of related records
    Many,
}

impl Relation {
    pub fn is_one(&self) -> bool {
        self.cardinality == Cardinality::One
    }
}
