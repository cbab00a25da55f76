use std::collections::HashMap;

use tracing::trace;

use crate::interpreter::value::core::{Closure, Value};

/// Number of detached frames that triggers the first sweep.
const MIN_SWEEP_THRESHOLD: usize = 64;

/// Index of a scope frame inside a [`ScopeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScopeId(usize);

impl ScopeId {
    /// The global scope. It exists for the whole run and is never released.
    pub const GLOBAL: Self = Self(0);
}

/// One frame of bindings.
#[derive(Debug, Default)]
pub struct Scope<'ast> {
    variables:  HashMap<String, Value<'ast>>,
    functions:  HashMap<String, Closure<'ast>>,
    parent:     Option<ScopeId>,
    /// Value of the most recent expression, declaration or print executed
    /// directly in this frame or carried up from an inner block.
    last_value: Option<Value<'ast>>,
}

impl<'ast> Scope<'ast> {
    /// Every closure this frame holds on to.
    fn closures(&self) -> impl Iterator<Item = Closure<'ast>> + '_ {
        self.variables.values()
                      .chain(&self.last_value)
                      .filter_map(Value::as_function)
                      .chain(self.functions.values().copied())
    }
}

/// Arena of scope frames addressed by [`ScopeId`].
///
/// Frames are pushed on entry to a block or call and released on exit. A
/// released frame is freed at once when nothing can still reach it. When a
/// closure over it leaves the block or call, the frame is detached instead and
/// kept until a sweep finds no path to it from the executing frames. Freed
/// slots are reused, so a [`ScopeId`] held by a reachable closure always stays
/// valid.
///
/// # Example
/// ```
/// use luna::interpreter::{
///     evaluator::scope::{ScopeArena, ScopeId},
///     value::core::Value,
/// };
///
/// let mut scopes = ScopeArena::new();
/// scopes.define_variable(ScopeId::GLOBAL, "x", Value::from(1.0));
///
/// let block = scopes.push(ScopeId::GLOBAL);
/// scopes.define_variable(block, "y", Value::from(2.0));
///
/// assert_eq!(scopes.lookup_variable(block, "x"), Some(&Value::from(1.0)));
/// assert_eq!(scopes.lookup_variable(ScopeId::GLOBAL, "y"), None);
///
/// scopes.release(block, []);
/// assert_eq!(scopes.len(), 1);
/// ```
#[derive(Debug)]
pub struct ScopeArena<'ast> {
    frames:   Vec<Option<Scope<'ast>>>,
    /// Indices of empty slots in `frames`.
    free:     Vec<usize>,
    /// Frames currently executing, outermost first.
    active:   Vec<ScopeId>,
    /// Live frames that are no longer executing.
    detached: usize,
    sweep_at: usize,
}

impl Default for ScopeArena<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'ast> ScopeArena<'ast> {
    /// Creates an arena holding only the global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { frames:   vec![Some(Scope::default())],
               free:     Vec::new(),
               active:   vec![ScopeId::GLOBAL],
               detached: 0,
               sweep_at: MIN_SWEEP_THRESHOLD, }
    }

    /// Number of live frames, the global one included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len() - self.free.len()
    }

    /// Always `false`: the global frame is never released.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Opens a new frame whose parent is `parent` and marks it as executing.
    pub fn push(&mut self, parent: ScopeId) -> ScopeId {
        let scope = Scope { parent: Some(parent),
                            ..Scope::default() };

        let id = match self.free.pop() {
            Some(index) => {
                self.frames[index] = Some(scope);
                ScopeId(index)
            },
            None => {
                self.frames.push(Some(scope));
                ScopeId(self.frames.len() - 1)
            },
        };
        self.active.push(id);
        id
    }

    /// Ends the execution of `id`.
    ///
    /// `leaving` holds the values handed out of the frame to its caller, such
    /// as a return value or a block's last value. If none of them is a closure
    /// that still needs `id` and no other frame is detached, the frame is
    /// freed immediately. Otherwise it is detached and reclaimed by a later
    /// sweep once it is unreachable. The global frame is never released.
    pub fn release<'v>(&mut self, id: ScopeId, leaving: impl IntoIterator<Item = &'v Value<'ast>>)
        where 'ast: 'v
    {
        if id == ScopeId::GLOBAL {
            return;
        }
        if let Some(position) = self.active.iter().rposition(|&active| active == id) {
            self.active.truncate(position);
        }

        let escaping: Vec<ScopeId> = leaving.into_iter()
                                            .filter_map(Value::as_function)
                                            .map(|closure| closure.scope)
                                            .collect();

        // With nothing detached, every live frame other than `id` is executing
        // and only the escaping closures can still refer to `id`.
        if self.detached == 0 && !escaping.iter().any(|&scope| self.reaches(scope, id)) {
            self.free_slot(id);
            return;
        }

        self.detached += 1;
        if self.detached >= self.sweep_at {
            self.sweep(escaping);
        }
    }

    /// Frees every frame that cannot be reached from the executing frames or
    /// from `roots`.
    ///
    /// A frame reaches its parent and the defining frame of every closure it
    /// holds, whether bound as a variable, a function or its last value.
    fn sweep(&mut self, roots: Vec<ScopeId>) {
        let mut marked = vec![false; self.frames.len()];
        let mut pending = roots;
        pending.extend_from_slice(&self.active);

        while let Some(id) = pending.pop() {
            let Some(mark) = marked.get_mut(id.0) else {
                continue;
            };
            if *mark {
                continue;
            }
            *mark = true;

            if let Some(frame) = self.frame(id) {
                pending.extend(frame.parent);
                pending.extend(frame.closures().map(|closure| closure.scope));
            }
        }

        for (index, mark) in marked.into_iter().enumerate() {
            if !mark {
                self.free_slot(ScopeId(index));
            }
        }

        self.detached = self.len() - self.active.len();
        self.sweep_at = MIN_SWEEP_THRESHOLD.max(2 * self.detached);
        trace!(live = self.len(), detached = self.detached, "swept scope frames");
    }

    fn free_slot(&mut self, id: ScopeId) {
        if let Some(slot) = self.frames.get_mut(id.0)
           && slot.take().is_some()
        {
            self.free.push(id.0);
        }
    }

    /// Returns `true` if `target` is `from` or one of its ancestors.
    fn reaches(&self, from: ScopeId, target: ScopeId) -> bool {
        let mut next = Some(from);
        while let Some(id) = next {
            if id == target {
                return true;
            }
            next = self.frame(id).and_then(|frame| frame.parent);
        }
        false
    }

    fn frame(&self, id: ScopeId) -> Option<&Scope<'ast>> {
        self.frames.get(id.0).and_then(Option::as_ref)
    }

    fn frame_mut(&mut self, id: ScopeId) -> Option<&mut Scope<'ast>> {
        self.frames.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Iterates over `id` and its ancestors, innermost first.
    fn chain(&self, id: ScopeId) -> impl Iterator<Item = &Scope<'ast>> {
        let mut next = self.frame(id);
        std::iter::from_fn(move || {
            let current = next?;
            next = current.parent.and_then(|parent| self.frame(parent));
            Some(current)
        })
    }

    /// Binds a variable in `id`, replacing any previous binding there.
    pub fn define_variable(&mut self, id: ScopeId, name: &str, value: Value<'ast>) {
        if let Some(frame) = self.frame_mut(id) {
            frame.variables.insert(name.to_string(), value);
        }
    }

    /// Binds a function in `id`, replacing any previous binding there.
    pub fn define_function(&mut self, id: ScopeId, name: &str, closure: Closure<'ast>) {
        if let Some(frame) = self.frame_mut(id) {
            frame.functions.insert(name.to_string(), closure);
        }
    }

    /// Finds a variable in `id` or its nearest ancestor that binds it.
    #[must_use]
    pub fn lookup_variable(&self, id: ScopeId, name: &str) -> Option<&Value<'ast>> {
        self.chain(id).find_map(|frame| frame.variables.get(name))
    }

    /// Finds a declared function in `id` or its nearest ancestor that binds
    /// it.
    #[must_use]
    pub fn lookup_function(&self, id: ScopeId, name: &str) -> Option<Closure<'ast>> {
        self.chain(id).find_map(|frame| frame.functions.get(name).copied())
    }

    /// Records the last evaluated value of `id`.
    pub fn set_last_value(&mut self, id: ScopeId, value: Value<'ast>) {
        if let Some(frame) = self.frame_mut(id) {
            frame.last_value = Some(value);
        }
    }

    /// Removes and returns the last evaluated value of `id`.
    pub fn take_last_value(&mut self, id: ScopeId) -> Option<Value<'ast>> {
        self.frame_mut(id).and_then(|frame| frame.last_value.take())
    }
}
