//! Strategy Registry
//!
//! Maps an application type tag to its validator and builder factories, and
//! an environment type tag to its preparer factory. Adding a language or an
//! environment kind is a registration, not an edit to the orchestrator.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::entities::{ApplicationConfig, EnvironmentConfig};
use crate::domain::ports::{
    ArtifactBuilder, BuildContext, DeployEventSink, EnvironmentPreparer, NoopPreparer,
    SourceValidator,
};
use crate::domain::value_objects::PackageMode;
use crate::error::{DeployError, DeployResult};

pub type ValidatorFactory =
    Arc<dyn Fn(Arc<dyn DeployEventSink>) -> Box<dyn SourceValidator> + Send + Sync>;

/// Returns `None` when the application type does not offer `PackageMode`
pub type BuilderFactory =
    Arc<dyn Fn(PackageMode, BuildContext) -> Option<Box<dyn ArtifactBuilder>> + Send + Sync>;

pub type PreparerFactory =
    Arc<dyn Fn(Arc<dyn DeployEventSink>) -> Box<dyn EnvironmentPreparer> + Send + Sync>;

#[derive(Clone)]
struct AppStrategies {
    validator: ValidatorFactory,
    builder: BuilderFactory,
}

/// Type tag to strategy factory lookup
#[derive(Clone, Default)]
pub struct StrategyRegistry {
    app_types: BTreeMap<String, AppStrategies>,
    environment_types: BTreeMap<String, PreparerFactory>,
}

impl StrategyRegistry {
    /// A registry with nothing registered
    pub fn empty() -> Self {
        Self::default()
    }

    /// Python and Perl applications, `vm` environments
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        crate::infrastructure::register_default_strategies(&mut registry);
        registry
    }

    /// Register (or replace) the strategies for an application type
    pub fn register_app_type<V, B>(
        &mut self,
        app_type: impl Into<String>,
        validator: V,
        builder: B,
    ) -> &mut Self
    where
        V: Fn(Arc<dyn DeployEventSink>) -> Box<dyn SourceValidator> + Send + Sync + 'static,
        B: Fn(PackageMode, BuildContext) -> Option<Box<dyn ArtifactBuilder>>
            + Send
            + Sync
            + 'static,
    {
        self.app_types.insert(
            app_type.into(),
            AppStrategies {
                validator: Arc::new(validator),
                builder: Arc::new(builder),
            },
        );
        self
    }

    /// Register (or replace) the preparer for an environment type
    pub fn register_environment_type<P>(
        &mut self,
        env_type: impl Into<String>,
        preparer: P,
    ) -> &mut Self
    where
        P: Fn(Arc<dyn DeployEventSink>) -> Box<dyn EnvironmentPreparer> + Send + Sync + 'static,
    {
        self.environment_types
            .insert(env_type.into(), Arc::new(preparer));
        self
    }

    pub fn validator_for(
        &self,
        app: &ApplicationConfig,
        events: Arc<dyn DeployEventSink>,
    ) -> DeployResult<Box<dyn SourceValidator>> {
        let strategies = self.app_strategies(app, "source validator")?;
        Ok((strategies.validator)(events))
    }

    /// Builder for the application's configured packaging mode
    pub fn builder_for(
        &self,
        app: &ApplicationConfig,
        context: BuildContext,
    ) -> DeployResult<Box<dyn ArtifactBuilder>> {
        let strategies = self.app_strategies(app, "artifact builder")?;
        let mode = app.package_mode()?;
        (strategies.builder)(mode, context).ok_or_else(|| DeployError::UnsupportedPackageMode {
            app_type: app.app_type().to_string(),
            mode: mode.as_str().to_string(),
        })
    }

    /// Preparer for the environment type; unregistered types get a
    /// [`NoopPreparer`]
    pub fn preparer_for(
        &self,
        env: &EnvironmentConfig,
        events: Arc<dyn DeployEventSink>,
    ) -> Box<dyn EnvironmentPreparer> {
        match self.environment_types.get(env.env_type()) {
            Some(factory) => factory(events),
            None => Box::new(NoopPreparer::new(events)),
        }
    }

    pub fn app_types(&self) -> impl Iterator<Item = &str> {
        self.app_types.keys().map(String::as_str)
    }

    pub fn environment_types(&self) -> impl Iterator<Item = &str> {
        self.environment_types.keys().map(String::as_str)
    }

    fn app_strategies(
        &self,
        app: &ApplicationConfig,
        component: &'static str,
    ) -> DeployResult<&AppStrategies> {
        self.app_types
            .get(app.app_type())
            .ok_or_else(|| DeployError::UnsupportedAppType {
                app_type: app.app_type().to_string(),
                component,
            })
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("app_types", &self.app_types.keys().collect::<Vec<_>>())
            .field(
                "environment_types",
                &self.environment_types.keys().collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::NoopEventSink;
    use crate::testing::{test_build_context, FakeToolRunner};

    #[test]
    fn defaults_cover_python_perl_and_vm() {
        let registry = StrategyRegistry::with_defaults();
        assert_eq!(registry.app_types().collect::<Vec<_>>(), ["perl", "python"]);
        assert_eq!(registry.environment_types().collect::<Vec<_>>(), ["vm"]);
    }

    #[test]
    fn unknown_app_type_is_unsupported() {
        let registry = StrategyRegistry::with_defaults();
        let app = ApplicationConfig::new("svc", "ruby");
        let err = registry
            .validator_for(&app, Arc::new(NoopEventSink))
            .err()
            .unwrap();
        assert!(matches!(
            err,
            DeployError::UnsupportedAppType { ref app_type, .. } if app_type == "ruby"
        ));
    }

    #[test]
    fn builder_follows_package_type() {
        let registry = StrategyRegistry::with_defaults();
        let dir = tempfile::tempdir().unwrap();
        let context = test_build_context(dir.path(), Arc::new(FakeToolRunner::new()));

        let app = ApplicationConfig::new("svc", "python").with_package_type("wheel");
        let builder = registry.builder_for(&app, context.clone()).unwrap();
        assert_eq!(builder.name(), "python-package");

        let app = ApplicationConfig::new("svc", "perl");
        let builder = registry.builder_for(&app, context).unwrap();
        assert_eq!(builder.name(), "perl-archive");
    }

    #[test]
    fn builder_factory_can_decline_a_mode() {
        let mut registry = StrategyRegistry::empty();
        registry.register_app_type(
            "static",
            |events| -> Box<dyn SourceValidator> {
                Box::new(crate::infrastructure::validators::PythonValidator::new(events))
            },
            |_, _| None,
        );
        let dir = tempfile::tempdir().unwrap();
        let context = test_build_context(dir.path(), Arc::new(FakeToolRunner::new()));
        let app = ApplicationConfig::new("site", "static").with_package_type("docker");

        let err = registry.builder_for(&app, context).err().unwrap();
        assert_eq!(
            err.to_string(),
            "application type 'static' does not support package type 'docker'"
        );
    }

    #[test]
    fn unknown_environment_type_gets_noop_preparer() {
        let registry = StrategyRegistry::with_defaults();
        let env = EnvironmentConfig::new("edge", "k8s");
        let preparer = registry.preparer_for(&env, Arc::new(NoopEventSink));
        assert_eq!(preparer.name(), "noop");
        assert!(preparer.prepare(&env).is_ok());
    }
}
