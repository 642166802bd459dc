use crate::{
    driver::Connection, metadata, schema, Error, Generator, ModelRef, Record, Result,
};

/// Runs `sql` and hydrates one `target` record per result row, resolving
/// relationships recursively.
pub(crate) fn query_list(
    connection: &mut dyn Connection,
    generator: &Generator,
    sql: &str,
    target: ModelRef,
) -> Result<Vec<Box<dyn Record>>> {
    target.verify_graph()?;
    target.require_constructor()?;

    Hydrate {
        connection,
        generator,
    }
    .query(sql, target)
}

struct Hydrate<'a> {
    connection: &'a mut dyn Connection,
    generator: &'a Generator,
}

impl Hydrate<'_> {
    fn query(&mut self, sql: &str, target: ModelRef) -> Result<Vec<Box<dyn Record>>> {
        tracing::debug!(sql, "query");

        let rows = self.connection.query(sql)?;
        let schema = target.schema();
        let mut records = Vec::with_capacity(rows.len());

        for row in rows.iter() {
            tracing::trace!(model = target.name(), "hydrating row");

            let mut record = target.instantiate()?;

            for (column, value) in row.iter() {
                match metadata::field_for_column(&schema, column) {
                    Some(binding) => record.set(&binding.field, value.clone()).map_err(|err| {
                        err.context(Error::metadata(format!(
                            "hydrating `{}::{}` from column `{column}`",
                            schema.name, binding.field
                        )))
                    })?,
                    None => tracing::trace!(
                        model = target.name(),
                        column,
                        "result column has no binding; ignored"
                    ),
                }
            }

            self.resolve_relations(&mut *record, &schema)?;
            records.push(record);
        }

        Ok(records)
    }

    fn resolve_relations(&mut self, record: &mut dyn Record, schema: &schema::Model) -> Result<()> {
        for relation in &schema.relations {
            tracing::trace!(
                model = schema.name,
                relation = %relation.field,
                "resolving relationship"
            );

            let sql = self.generator.generate_select(&*record, relation)?;
            let mut related = self.query(&sql, relation.target)?;

            if relation.is_one() {
                if related.is_empty() {
                    return Err(Error::record_not_found(sql).context(resolving(schema, relation)));
                }

                // A one-to-one field takes the first matching row
                related.truncate(1);
            }

            record
                .set_related(&relation.field, related)
                .map_err(|err| err.context(resolving(schema, relation)))?;
        }

        Ok(())
    }
}

fn resolving(schema: &schema::Model, relation: &schema::Relation) -> Error {
    Error::metadata(format!("resolving `{}::{}`", schema.name, relation.field))
}
