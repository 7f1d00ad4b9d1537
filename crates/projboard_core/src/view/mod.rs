//! View components projecting store state onto a host surface.
//!
//! # Responsibility
//! - Define the component contract shared by input and list views.
//! - Keep host concerns (terminal, alerts) behind small traits.
//!
//! # Invariants
//! - Views receive the store explicitly; there is no global store accessor.
//! - Views subscribe through closures that capture their own state.

pub mod alert;
pub mod project_input;
pub mod project_list;

/// Contract implemented by every view component.
pub trait Component {
    /// Wires the component to its collaborators and resets its surface.
    /// Safe to call twice.
    fn configure(&mut self);

    /// Renders the component's current state as text.
    fn render_content(&self) -> String;
}
