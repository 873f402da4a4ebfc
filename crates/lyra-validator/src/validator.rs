//! Relationship consistency validation
//!
//! Checks one relationship declaration against its referenced type: the type
//! must be an object type, keys must pair up and name declared attributes,
//! and exactly one counterpart declaration must exist on the other side.

use std::ops::ControlFlow;

use lyra_domain::traits::{ObjectType, TypeModel};
use lyra_domain::Relationship;
use tracing::{debug, info, warn};

use crate::{Issue, RelationshipError, ValidationReport, ValidatorConfig};

/// Fail with `UnknownAttribute` unless `ty` declares `attribute`
///
/// Attributes of any visibility count.
pub fn assert_attribute<T>(ty: &T, attribute: &str) -> Result<(), RelationshipError>
where
    T: ObjectType + ?Sized,
{
    if ty.has_attribute(attribute) {
        return Ok(());
    }
    Err(RelationshipError::UnknownAttribute {
        type_name: ty.name().to_string(),
        name: attribute.to_string(),
    })
}

/// Validate `relationship`, declared under `name` on `owning_type`
///
/// Stops at the first failure. Nothing is modified.
pub fn validate_relationship<M, O>(
    model: &M,
    owning_type: &O,
    name: &str,
    relationship: &Relationship,
) -> Result<(), RelationshipError>
where
    M: TypeModel,
    O: ObjectType + ?Sized,
{
    let referenced = model.object_type(relationship.type_ref()).ok_or_else(|| {
        RelationshipError::TypeIsNotObject {
            type_name: relationship.type_ref().to_string(),
        }
    })?;

    if relationship.keys().len() % 2 != 0 {
        return Err(RelationshipError::KeysUneven {
            type_name: owning_type.name().to_string(),
        });
    }

    for (local, remote) in relationship.key_pairs() {
        assert_attribute(owning_type, local)?;
        assert_attribute(referenced, remote)?;
    }

    let resource = referenced
        .resource()
        .ok_or_else(|| RelationshipError::NoResourceAnnotation {
            type_name: referenced.name().to_string(),
        })?;

    let owning_name = owning_type.name();
    let candidates = resource.relationships();
    let counterpart = match relationship.reverse_name() {
        Some(reverse_name) => candidates
            .get_key_value(reverse_name)
            .filter(|(_, candidate)| {
                candidate.is_counterpart_of(name, owning_name, relationship)
            }),
        None => {
            let mut found = None;
            for entry in candidates {
                if !entry.1.is_counterpart_of(name, owning_name, relationship) {
                    continue;
                }
                if found.is_some() {
                    return Err(RelationshipError::MultipleCounterparts {
                        type_name: owning_name.to_string(),
                        name: name.to_string(),
                    });
                }
                found = Some(entry);
            }
            found
        }
    };

    match counterpart {
        Some((counterpart_name, _)) => {
            debug!(
                owning_type = %owning_name,
                relationship = name,
                referenced_type = %referenced.name(),
                counterpart = %counterpart_name,
                "Relationship counterpart resolved"
            );
            Ok(())
        }
        None => Err(RelationshipError::CounterpartNotFound {
            type_name: owning_name.to_string(),
            name: name.to_string(),
        }),
    }
}

/// Validation entry point on relationship declarations
pub trait Validate {
    /// Validate this declaration, declared under `name` on `owning_type`
    fn validate<M, O>(
        &self,
        model: &M,
        owning_type: &O,
        name: &str,
    ) -> Result<(), RelationshipError>
    where
        M: TypeModel,
        O: ObjectType + ?Sized;
}

impl Validate for Relationship {
    fn validate<M, O>(
        &self,
        model: &M,
        owning_type: &O,
        name: &str,
    ) -> Result<(), RelationshipError>
    where
        M: TypeModel,
        O: ObjectType + ?Sized,
    {
        validate_relationship(model, owning_type, name, self)
    }
}

/// Validates every relationship declared in a model
pub struct RelationshipValidator {
    config: ValidatorConfig,
}

impl RelationshipValidator {
    /// Create a new validator with the given configuration
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Create a validator with default configuration
    pub fn default_config() -> Self {
        Self::new(ValidatorConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a single declaration
    pub fn validate<M, O>(
        &self,
        model: &M,
        owning_type: &O,
        name: &str,
        relationship: &Relationship,
    ) -> Result<(), RelationshipError>
    where
        M: TypeModel,
        O: ObjectType + ?Sized,
    {
        validate_relationship(model, owning_type, name, relationship)
    }

    /// Validate every relationship declared on `owning_type`
    ///
    /// A type without a resource annotation declares no relationships and
    /// produces an empty report.
    pub fn validate_type<M: TypeModel>(
        &self,
        model: &M,
        owning_type: &M::Object,
    ) -> ValidationReport {
        let mut report = ValidationReport::default();
        if self.check_type(model, owning_type, &mut report).is_break() {
            debug!(owning_type = %owning_type.name(), "Stopped before the last relationship");
        }
        self.log_outcome(&report);
        report
    }

    /// Validate every relationship of every object type in `model`
    pub fn validate_model<M: TypeModel>(&self, model: &M) -> ValidationReport {
        let mut report = ValidationReport::default();
        for owning_type in model.object_types() {
            if self.check_type(model, owning_type, &mut report).is_break() {
                break;
            }
        }
        self.log_outcome(&report);
        report
    }

    fn log_outcome(&self, report: &ValidationReport) {
        info!(
            checked = report.checked_count(),
            issues = report.issues().len(),
            "Relationship validation finished"
        );
        if report.is_truncated() {
            warn!(
                max_issues = self.config.max_issues,
                "Issue limit reached, remaining relationships were not checked"
            );
        }
    }

    fn check_type<M: TypeModel>(
        &self,
        model: &M,
        owning_type: &M::Object,
        report: &mut ValidationReport,
    ) -> ControlFlow<()> {
        if self.config.skips(owning_type.name()) {
            debug!(owning_type = %owning_type.name(), "Skipping type");
            return ControlFlow::Continue(());
        }

        let Some(resource) = owning_type.resource() else {
            return ControlFlow::Continue(());
        };

        for (name, relationship) in resource.relationships() {
            report.record_checked();
            let Err(error) = validate_relationship(model, owning_type, name, relationship) else {
                continue;
            };

            debug!(
                owning_type = %owning_type.name(),
                relationship = %name,
                %error,
                "Relationship rejected"
            );
            if self.config.max_issues > 0 && report.len() >= self.config.max_issues {
                report.mark_truncated();
                return ControlFlow::Break(());
            }

            report.push(Issue {
                owning_type: owning_type.name().clone(),
                relationship: name.clone(),
                error,
            });

            if self.config.fail_fast {
                return ControlFlow::Break(());
            }
        }

        ControlFlow::Continue(())
    }
}
