//! Acting-actor context
//!
//! Holds the single "current actor" slot. Only one logical actor is active
//! at a time; the context is shared by reference with every gated call
//! instead of living in a process-wide global.

use crate::actor::{Actor, Capability};
use crate::error::AccessError;
use parking_lot::Mutex;

/// Slot holding the actor currently performing operations
#[derive(Debug, Default)]
pub struct AccessContext {
    slot: Mutex<Slot>,
}

#[derive(Debug, Default)]
struct Slot {
    current: Option<Actor>,
    /// Actors displaced by live [`ActingAs`] guards, outermost first,
    /// tagged with the guard's id
    saved: Vec<(u64, Option<Actor>)>,
    next_guard: u64,
}

impl AccessContext {
    /// Create context with no actor set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create context already acting as `actor`
    #[inline]
    #[must_use]
    pub fn with_actor(actor: Actor) -> Self {
        Self {
            slot: Mutex::new(Slot {
                current: Some(actor),
                ..Slot::default()
            }),
        }
    }

    /// Replace the current actor, returning the previous one
    ///
    /// Passing `None` logs out.
    pub fn set_current_actor(&self, actor: Option<Actor>) -> Option<Actor> {
        std::mem::replace(&mut self.slot.lock().current, actor)
    }

    /// Snapshot of the current actor
    #[must_use]
    pub fn current_actor(&self) -> Option<Actor> {
        self.slot.lock().current.clone()
    }

    /// Act as `actor` until the returned guard is dropped
    ///
    /// Dropping a guard restores the actor it displaced, including on early
    /// return through `?`. Dropping an outer guard while inner ones are
    /// still alive unwinds those too; their later drops do nothing.
    #[must_use = "the actor is reset as soon as the guard is dropped"]
    pub fn acting_as(&self, actor: Actor) -> ActingAs<'_> {
        let mut slot = self.slot.lock();
        let id = slot.next_guard;
        slot.next_guard += 1;
        let previous = std::mem::replace(&mut slot.current, Some(actor));
        slot.saved.push((id, previous));
        ActingAs { ctx: self, id }
    }

    /// Fail closed unless the current actor holds `capability`
    ///
    /// Returns the acting actor so callers can attribute the change.
    ///
    /// # Errors
    /// - [`AccessError::NotAuthenticated`] if no actor is set
    /// - [`AccessError::MissingCapability`] if the role lacks the token
    pub fn require(&self, capability: Capability) -> Result<Actor, AccessError> {
        let slot = self.slot.lock();
        match slot.current.as_ref() {
            None => Err(AccessError::NotAuthenticated { capability }),
            Some(actor) if actor.has_capability(capability) => Ok(actor.clone()),
            Some(actor) => Err(AccessError::MissingCapability {
                username: actor.username().to_string(),
                role: actor.role(),
                capability,
            }),
        }
    }
}

/// Scope guard returned by [`AccessContext::acting_as`]
#[derive(Debug)]
pub struct ActingAs<'a> {
    ctx: &'a AccessContext,
    id: u64,
}

impl ActingAs<'_> {
    /// Actor that will be restored on drop
    ///
    /// `None` also once an outer guard has already unwound this one.
    #[must_use]
    pub fn previous(&self) -> Option<Actor> {
        let slot = self.ctx.slot.lock();
        slot.saved
            .iter()
            .find(|(id, _)| *id == self.id)
            .and_then(|(_, previous)| previous.clone())
    }
}

impl Drop for ActingAs<'_> {
    fn drop(&mut self) {
        let mut slot = self.ctx.slot.lock();
        let Some(position) = slot.saved.iter().position(|(id, _)| *id == self.id) else {
            return;
        };
        let (_, previous) = slot.saved.swap_remove(position);
        slot.saved.truncate(position);
        slot.current = previous;
    }
}
