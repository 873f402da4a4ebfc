//! List command implementation.

use crate::cli::ListArgs;
use crate::error::Result;
use crate::output::{Formatter, RelationshipRow};
use lyra_domain::traits::{ObjectType, TypeModel};
use lyra_model::{ModelFile, TypeRegistry};

/// Execute the list command.
pub fn execute_list(args: ListArgs, formatter: &Formatter) -> Result<()> {
    let registry = ModelFile::from_file(&args.model)?.into_registry()?;
    let rows = relationship_rows(&registry);

    println!("{}", formatter.format_relationships(&rows)?);

    Ok(())
}

/// Every declared relationship, ordered by declaring type then name.
pub fn relationship_rows(registry: &TypeRegistry) -> Vec<RelationshipRow> {
    let mut rows = Vec::new();
    for ty in registry.object_types() {
        let Some(resource) = ty.resource() else {
            continue;
        };
        for (name, relationship) in resource.relationships() {
            rows.push(RelationshipRow {
                owning_type: ty.name().to_string(),
                name: name.clone(),
                type_name: relationship.type_ref().to_string(),
                kind: relationship.kind().to_string(),
                cardinality: relationship.cardinality().to_string(),
                keys: relationship.keys().to_vec(),
                reverse_name: relationship.reverse_name().map(str::to_string),
            });
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_in_declaration_order() {
        let registry = ModelFile::from_toml(
            r#"
            [[types]]
            name = "Folder"
            attributes = ["id"]

            [types.relationships.children]
            type = "File"
            kind = "container"
            cardinality = "many"
            keys = ["id", "parentId"]

            [[types]]
            name = "File"
            attributes = ["id", "parentId"]

            [types.relationships.parent]
            type = "Folder"
            kind = "contained"
            cardinality = "zero_or_one"
            keys = ["parentId", "id"]
            reverse_name = "children"
            "#,
        )
        .unwrap()
        .into_registry()
        .unwrap();

        let rows = relationship_rows(&registry);
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].owning_type, "File");
        assert_eq!(rows[0].cardinality, "zero_or_one");
        assert_eq!(rows[0].reverse_name.as_deref(), Some("children"));

        assert_eq!(rows[1].owning_type, "Folder");
        assert_eq!(rows[1].kind, "container");
        assert!(rows[1].reverse_name.is_none());
    }
}
