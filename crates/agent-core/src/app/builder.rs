use std::sync::Arc;

use super::{App, PostRunHook, PreRunHook};
use crate::progress::{LogProgress, ProgressReporter};
use crate::runtime::{LocalRuntime, TaskRuntime};

/// Builder de `App`. Los hooks se aplican en el orden de registro.
///
/// ```ignore
/// let app = App::builder()
///     .progress(Arc::new(SilentProgress))
///     .pre_hook(InputParityCheck)
///     .post_hook(IntermediateStaging::new(StagingPolicy::Expose))
///     .build();
/// ```
#[derive(Debug)]
pub struct AppBuilder {
    runtime: Arc<dyn TaskRuntime>,
    progress: Arc<dyn ProgressReporter>,
    pre_hooks: Vec<Box<dyn PreRunHook>>,
    post_hooks: Vec<Box<dyn PostRunHook>>,
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self { runtime: Arc::new(LocalRuntime),
               progress: Arc::new(LogProgress),
               pre_hooks: Vec::new(),
               post_hooks: Vec::new() }
    }
}

impl AppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn runtime(mut self, runtime: Arc<dyn TaskRuntime>) -> Self {
        self.runtime = runtime;
        self
    }

    pub fn progress(mut self, progress: Arc<dyn ProgressReporter>) -> Self {
        self.progress = progress;
        self
    }

    pub fn pre_hook<H>(mut self, hook: H) -> Self
        where H: PreRunHook + 'static
    {
        self.pre_hooks.push(Box::new(hook));
        self
    }

    pub fn post_hook<H>(mut self, hook: H) -> Self
        where H: PostRunHook + 'static
    {
        self.post_hooks.push(Box::new(hook));
        self
    }

    pub fn build(self) -> App {
        App { runtime: self.runtime,
              progress: self.progress,
              pre_hooks: self.pre_hooks,
              post_hooks: self.post_hooks }
    }
}
