//! Interceptor chains around named engine operations.
//!
//! Each extension point owns one [`HookChain`]. The engine calls
//! [`HookChain::run`] at a fixed point with the operation's arguments and
//! the operation body; interceptors never replace the operation
//! itself.
//!
//! Ordering follows the wrap-around model: every new `before` interceptor
//! becomes the outermost call, so the most recently registered one runs
//! first. `after` interceptors see the result innermost-first (registration
//! order) and each may replace it.

use crate::error::PluginError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HookPhase {
    Before,
    After,
}

pub type BeforeHook<A> = Box<dyn FnMut(&A) -> Result<(), PluginError>>;
pub type AfterHook<A, R> = Box<dyn FnMut(&A, R) -> Result<R, PluginError>>;

pub struct HookChain<A, R> {
    before: Vec<BeforeHook<A>>,
    after: Vec<AfterHook<A, R>>,
}

impl<A, R> Default for HookChain<A, R> {
    fn default() -> Self {
        Self {
            before: Vec::new(),
            after: Vec::new(),
        }
    }
}

impl<A, R> HookChain<A, R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `hook` ahead of the operation. It observes the arguments but
    /// cannot change the operation's result.
    pub fn before<F>(&mut self, hook: F)
    where
        F: FnMut(&A) -> Result<(), PluginError> + 'static,
    {
        self.before.push(Box::new(hook));
    }

    /// Runs `hook` on the operation's result; whatever it returns is what
    /// the next interceptor (or the caller) sees.
    pub fn after<F>(&mut self, hook: F)
    where
        F: FnMut(&A, R) -> Result<R, PluginError> + 'static,
    {
        self.after.push(Box::new(hook));
    }

    pub fn len(&self, phase: HookPhase) -> usize {
        match phase {
            HookPhase::Before => self.before.len(),
            HookPhase::After => self.after.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.before.is_empty() && self.after.is_empty()
    }

    pub fn run<F>(&mut self, args: &A, original: F) -> Result<R, PluginError>
    where
        F: FnOnce(&A) -> R,
    {
        self.enter(args)?;
        let result = original(args);
        self.exit(args, result)
    }

    /// The `before` half of [`HookChain::run`], for operations whose
    /// original needs access the chain's owner cannot lend to a closure.
    pub fn enter(&mut self, args: &A) -> Result<(), PluginError> {
        for hook in self.before.iter_mut().rev() {
            hook(args)?;
        }
        Ok(())
    }

    /// The `after` half of [`HookChain::run`].
    pub fn exit(&mut self, args: &A, mut result: R) -> Result<R, PluginError> {
        for hook in self.after.iter_mut() {
            result = hook(args, result)?;
        }
        Ok(result)
    }
}

impl<A, R> std::fmt::Debug for HookChain<A, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookChain")
            .field("before", &self.before.len())
            .field("after", &self.after.len())
            .finish()
    }
}
