//! Application-Layer: Engines, Werkzeuge und die Editier-Sitzung.

pub mod events;
pub mod session;
pub mod snap;
pub mod tools;
pub mod validation;

pub use events::SessionIntent;
pub use session::EditorSession;
pub use snap::{SnapCandidate, SnapContext, SnapKind, SnapResolver, SnapResult};
pub use tools::{
    BoundaryDrawState, BoundaryPhase, RoomBoundaryManager, RoomPointOutcome, SectionDrawState,
    SectionEngine,
};
pub use validation::{
    AutoFix, IssueCategory, IssueKind, RuleInfo, Severity, ValidationEngine, ValidationIssue,
    ValidationReport, ValidationRule, ValidationSummary,
};
