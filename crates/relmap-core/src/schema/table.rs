/// Table metadata: the relation a model is stored in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub name: String,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Table {
        Table { name: name.into() }
    }
}
