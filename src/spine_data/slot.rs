use serde::Serialize;

#[derive(Clone, Serialize, PartialEq, Debug)]
pub struct Slot {
    pub name: String,
    pub bone: String,
    /// Attachment visible in the setup pose.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
}
