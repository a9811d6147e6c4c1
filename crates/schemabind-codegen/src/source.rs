//! Per-type source generation.
//!
//! [`SourceGenerator`] turns one [`TypeModel`] into the bound class, its XML
//! descriptor and, when configured, its JDO descriptor. It remembers every
//! bound class it produced; a second type resolving to an already emitted
//! name is handed to the run's conflict strategy before anything is built.

use crate::collection::CollectionFactory;
use crate::descriptor::DescriptorEmitter;
use crate::field::FieldFactory;
use crate::jdo::JdoDescriptorEmitter;
use crate::jvm_types::use_type;
use crate::naming::local_name;
use schemabind_conflict::{ClassNameConflictStrategy, ConflictContext, StrategyRegistry};
use schemabind_core::{
    BindError, BindResult, ClassConstruct, GenerationState, GeneratorConfig, SourceBuffer,
    TypeModel, extract_comments,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Drives class and descriptor generation for a whole run.
pub struct SourceGenerator {
    config: GeneratorConfig,
    strategy: Arc<dyn ClassNameConflictStrategy>,
    collections: CollectionFactory,
    fields: FieldFactory,
    emitted: HashMap<String, ClassConstruct>,
    state: GenerationState,
}

impl SourceGenerator {
    pub fn new(config: GeneratorConfig, strategy: Arc<dyn ClassNameConflictStrategy>) -> Self {
        let collections = CollectionFactory::from_config(&config);
        Self {
            config,
            strategy,
            collections,
            fields: FieldFactory::new(),
            emitted: HashMap::new(),
            state: GenerationState::new(),
        }
    }

    /// Create a generator using the strategy named by `config.conflict_strategy`.
    pub fn from_registry(config: GeneratorConfig, registry: &StrategyRegistry) -> BindResult<Self> {
        let strategy = registry.lookup(&config.conflict_strategy)?;
        tracing::debug!(strategy = %strategy.name(), "conflict strategy selected");
        Ok(Self::new(config, strategy))
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    pub fn strategy(&self) -> &Arc<dyn ClassNameConflictStrategy> {
        &self.strategy
    }

    /// Generate every construct for `ty`: the bound class first, then its
    /// descriptors.
    ///
    /// # Errors
    ///
    /// * [`BindError::InvalidModel`] if the model is inconsistent, or a JDO
    ///   identity has no column mapping
    /// * [`BindError::GenerationAborted`] if the conflict strategy stopped
    ///   generation; nothing is recorded for the type in that case
    pub fn generate(
        &mut self,
        ty: &TypeModel,
        ctx: &mut ConflictContext<'_>,
    ) -> BindResult<Vec<ClassConstruct>> {
        let ty = self.qualified(ty);
        ty.validate()?;

        if let Some(conflicting) = self.emitted.get(&ty.name) {
            tracing::debug!(
                class_name = %ty.name,
                strategy = %self.strategy.name(),
                "class name already generated, consulting strategy"
            );
            let state = self.strategy.resolve_class_name_conflict(
                self.state.clone(),
                &ty,
                conflicting,
                ctx,
            );
            if state.is_stopped() {
                tracing::warn!(class_name = %ty.name, "generation stopped by conflict strategy");
                return Err(BindError::GenerationAborted {
                    type_name: ty.name.clone(),
                    reason: format!("strategy '{}' requested a stop", self.strategy.name()),
                });
            }
            self.state = state;
        }

        let class = self.build_class(&ty)?;
        let mut constructs = vec![class.clone()];

        if self.config.generate_descriptors {
            let emitter = DescriptorEmitter::new(&self.config);
            constructs.push(emitter.emit(&emitter.descriptor_name(&ty.name), &ty));
        }
        if self.config.generate_jdo_descriptors {
            let emitter = JdoDescriptorEmitter::new(&self.config);
            constructs.push(emitter.emit(&emitter.descriptor_name(&ty.name), &ty)?);
        }

        for construct in &constructs {
            self.state.mark_processed(construct.name());
        }
        self.emitted.insert(ty.name.clone(), class);

        tracing::info!(
            class_name = %ty.name,
            constructs = constructs.len(),
            "type generated"
        );
        Ok(constructs)
    }

    /// Build the bound class for `ty` without recording it.
    pub fn build_class(&self, ty: &TypeModel) -> BindResult<ClassConstruct> {
        ty.validate()?;
        let modern_mode = self.config.modern_mode;

        let mut class = ClassConstruct::new(&ty.name);
        class.set_abstract(ty.is_abstract);
        if let Some(superclass) = ty.parent.as_deref().or(self.config.super_class.as_deref()) {
            let superclass = use_type(&mut class, superclass);
            class.set_superclass(superclass);
        }
        let comment = extract_comments(ty)
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| format!("Class {}.", local_name(&ty.name)));
        class.set_comment(comment);

        let mut initializers = SourceBuffer::new();
        for field in &ty.fields {
            let mut field = field.clone();
            field.bound |= self.config.bound_properties;
            field.extra_methods |= self.config.extra_collection_methods;

            if field.is_collection() {
                self.collections.create_member(&field, &mut class, modern_mode);
                self.collections.create_access_methods(
                    &field,
                    &mut class,
                    modern_mode,
                    &self.config.extra_annotations,
                )?;
                self.collections
                    .generate_initializer_code(&field, &mut initializers, modern_mode);
            } else {
                self.fields.create_member(&field, &mut class);
                self.fields.create_access_methods(&field, &mut class);
                self.fields.generate_initializer_code(&field, &mut initializers);
            }
        }

        let constructor = class.default_constructor_mut();
        constructor.body.add("super();");
        constructor.body.extend(&initializers);

        tracing::debug!(
            class_name = %class.name(),
            fields = class.fields().len(),
            methods = class.methods().len(),
            "bound class built"
        );
        Ok(class)
    }

    fn qualified(&self, ty: &TypeModel) -> TypeModel {
        let mut ty = ty.clone();
        ty.name = self.config.qualify(&ty.name);
        ty.parent = ty.parent.as_deref().map(|parent| self.config.qualify(parent));
        ty
    }
}

impl std::fmt::Debug for SourceGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceGenerator")
            .field("strategy", &self.strategy.name())
            .field("emitted", &self.emitted.len())
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
#[path = "source/source_tests.rs"]
mod source_tests;
