use super::{Model, ModelRef};
use crate::{Error, Result};

use std::{any::TypeId, collections::HashSet};

impl Model {
    /// Checks the metadata of this model in isolation.
    pub fn verify(&self) -> Result<()> {
        self.table_name()?;

        if self.columns.is_empty() {
            return Err(Error::metadata(format!(
                "`{}` declares no column bindings",
                self.name
            )));
        }

        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.name.to_ascii_lowercase()) {
                return Err(Error::metadata(format!(
                    "`{}` binds column `{}` more than once",
                    self.name, column.name
                )));
            }
        }

        Ok(())
    }
}

impl ModelRef {
    /// Checks this model and every model reachable through its
    /// relationships, failing on the first relationship cycle.
    pub fn verify_graph(&self) -> Result<()> {
        Verify::default().visit(*self)
    }
}

#[derive(Default)]
struct Verify {
    /// Models on the current relationship path
    path: Vec<ModelRef>,

    /// Models already verified through another path
    done: HashSet<TypeId>,
}

impl Verify {
    fn visit(&mut self, model: ModelRef) -> Result<()> {
        if self.path.contains(&model) {
            let cycle = self
                .path
                .iter()
                .skip_while(|step| **step != model)
                .chain(Some(&model))
                .map(|step| step.name())
                .collect::<Vec<_>>()
                .join(" -> ");

            return Err(Error::metadata(format!("relationship cycle: {cycle}")));
        }

        if self.done.contains(&model.type_id()) {
            return Ok(());
        }

        let schema = model.schema();
        schema.verify()?;

        for column in &schema.columns {
            if !model.has_accessor(&column.field) {
                return Err(Error::metadata(format!(
                    "`{}` binds column `{}` to field `{}`, which has no accessor",
                    schema.name, column.name, column.field
                )));
            }
        }

        self.path.push(model);
        for relation in &schema.relations {
            self.visit(relation.target)?;
        }
        self.path.pop();

        self.done.insert(model.type_id());
        Ok(())
    }
}
