pub mod bindable;

pub use bindable::{BindableField, FieldGroup, ListenerHandle, StatusListener};
