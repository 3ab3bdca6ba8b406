use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identifier of the folder a contact is grouped under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FolderId(String);

impl_id!(FolderId);
