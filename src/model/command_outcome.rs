/// Outcome of applying a player command. A command either fully applies
/// or is ignored as a no-op; precondition failures come from a
/// disciplined caller and are not user-facing errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    Ignored { reason: String },
}
