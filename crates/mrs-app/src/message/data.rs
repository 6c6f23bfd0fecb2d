//! Model messages.

use mrs_model::{GroupedData, MeasureId};

use crate::state::Page;

/// Messages that replace or edit the current model, or change what part
/// of it is shown.
#[derive(Debug, Clone)]
pub enum DataMessage {
    /// The importer produced a new batch
    Import(GroupedData),

    /// Flip one measure's `ignored` flag
    ToggleIgnored { group: String, measure_id: MeasureId },

    /// Choose the group shown in the raw-data view
    SelectGroup(Option<String>),

    /// A view reports its scroll position
    Scrolled { page: Page, offset: f32 },
}
