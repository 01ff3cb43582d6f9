use std::sync::Arc;

use crate::field::ErrorSet;

/// Callback registered on a field's status-change stream.
///
/// Fired by the validation engine whenever the field's validation status
/// changes. The listener re-reads field state itself; no payload is carried.
pub type StatusListener = Box<dyn Fn() + Send + Sync>;

/// Opaque handle identifying a registered status listener.
///
/// Returned by [`BindableField::on_status_change`] and passed back to
/// [`BindableField::off`] to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(u64);

impl ListenerHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// The external validatable entity the engine observes.
///
/// Supplied by the hosting validation/forms engine; this crate never
/// constructs one outside of test stubs. The contract is a plain observer
/// pattern: current-state reads plus push-based change notification.
pub trait BindableField: Send + Sync {
    /// Current validation errors, in the order the validation engine
    /// reports them. Empty means the field is valid.
    fn errors(&self) -> ErrorSet;

    /// Whether the field has been focused and blurred at least once.
    fn is_touched(&self) -> bool;

    /// Whether the field's value has changed from its initial value.
    fn is_dirty(&self) -> bool;

    /// Register a listener fired on every validation status change.
    fn on_status_change(&self, listener: StatusListener) -> ListenerHandle;

    /// Unregister a previously registered listener. After this returns, the
    /// listener must not fire again.
    fn off(&self, handle: ListenerHandle);
}

/// A container of named sub-controls, typically a form.
///
/// Lookup failures here are the `FieldNotFound` configuration-error path.
pub trait FieldGroup {
    fn field(&self, name: &str) -> Option<Arc<dyn BindableField>>;
}
